//! Interactive chat application for consulting Dr. Nana, an APA 7 citation
//! assistant backed by the Gemini API.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! citebot-chat
//!
//! # Specify a model
//! citebot-chat --model gemini-2.5-pro
//!
//! # Start in English
//! citebot-chat --lang en
//!
//! # Disable colors (useful for piping output)
//! citebot-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/menu` - Show the guided citation-topic menu
//! - `/attach <file>` - Stage a file to send with the next message
//! - `/lang [th|en]` - Switch display language
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use citebot::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, GeminiBackend, PlainTextRenderer, Renderer,
    help_text, menu_entry, parse_command, suggestion_questions, ui_text, MENU,
};
use citebot::{Attachment, Gemini, Model, credentials};

/// Main entry point for the citebot-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("citebot-chat [OPTIONS]");
    let api_key = args.api_key.clone();
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let language = config.language;

    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    let client = match Gemini::new(api_key) {
        Ok(client) => client,
        Err(err) if err.is_authentication() => {
            prompt_for_key(&mut rl, &mut renderer, language)?
        }
        Err(err) => return Err(Box::new(err) as Box<dyn std::error::Error>),
    };

    let backend = GeminiBackend::new(client, config);
    let mut session = ChatSession::new(backend, language);
    let mut staged: Vec<Attachment> = Vec::new();

    renderer.print_reply("Dr. Nana", session.messages()[0].text.as_str());
    print_suggestions(&session);
    renderer.print_notice(ui_text(session.language()).disclaimer);
    renderer.print_notice("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() && staged.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                // Check for slash commands
                if let Some(cmd) = parse_command(&line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.reset();
                            staged.clear();
                            renderer.print_info("Conversation cleared.");
                            renderer.print_reply("Dr. Nana", session.messages()[0].text.as_str());
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Model(model_name) => {
                            let model = model_name
                                .parse()
                                .unwrap_or_else(|_| Model::Custom(model_name.clone()));
                            session.backend_mut().set_model(model);
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::Lang(arg) => match arg {
                            None => {
                                let next = session.language().toggled();
                                session.set_language(next);
                                renderer.print_info(&format!("Language set to: {next}"));
                            }
                            Some(name) => match name.parse() {
                                Ok(lang) => {
                                    session.set_language(lang);
                                    renderer.print_info(&format!("Language set to: {lang}"));
                                }
                                Err(err) => renderer.print_error(&err),
                            },
                        },
                        ChatCommand::Menu => {
                            print_menu(&session);
                        }
                        ChatCommand::Ask(section, entry) => {
                            match menu_entry(section, entry) {
                                Some(entry) => {
                                    let prompt = entry.prompt.get(session.language()).to_string();
                                    send_message(&mut session, &mut renderer, &prompt, &mut staged)
                                        .await;
                                }
                                None => renderer.print_error(&format!(
                                    "No menu entry {section}.{entry} (see /menu)"
                                )),
                            }
                        }
                        ChatCommand::Topics => {
                            renderer.print_info(ui_text(session.language()).menu_recommend);
                            for question in suggestion_questions(session.language()) {
                                println!("    - {}", question);
                            }
                        }
                        ChatCommand::Attach(path) => match Attachment::from_path(&path) {
                            Ok(attachment) => {
                                renderer.print_info(&format!(
                                    "Staged {} ({})",
                                    attachment.name, attachment.mime_type
                                ));
                                staged.push(attachment);
                            }
                            Err(err) => {
                                renderer.print_error(&format!("Failed to attach {path}: {err}"))
                            }
                        },
                        ChatCommand::Files => {
                            if staged.is_empty() {
                                renderer.print_info("No files staged.");
                            } else {
                                renderer.print_info("Staged files:");
                                for attachment in &staged {
                                    println!(
                                        "    - {} ({})",
                                        attachment.name, attachment.mime_type
                                    );
                                }
                            }
                        }
                        ChatCommand::Detach => {
                            staged.clear();
                            renderer.print_info("Staged files dropped.");
                        }
                        ChatCommand::Copy => match session.last_reply() {
                            Some(reply) => {
                                println!("{}", reply.text);
                                renderer.print_notice(ui_text(session.language()).copied);
                            }
                            None => renderer.print_info("No reply to copy yet."),
                        },
                        ChatCommand::Export(path) => match session.export_reply_to(&path) {
                            Ok(_) => renderer.print_info(&format!("Reply written to {}", path)),
                            Err(err) => {
                                renderer.print_error(&format!("Failed to export reply: {}", err))
                            }
                        },
                        ChatCommand::Save(path) => match session.save_transcript_to(&path) {
                            Ok(_) => renderer.print_info(&format!("Transcript saved to {}", path)),
                            Err(err) => renderer
                                .print_error(&format!("Failed to save transcript: {}", err)),
                        },
                        ChatCommand::Key(arg) => match arg {
                            Some(key) => match store_and_apply_key(&mut session, &key) {
                                Ok(()) => renderer.print_info("API key stored."),
                                Err(err) => {
                                    renderer.print_error(&format!("Failed to store key: {}", err))
                                }
                            },
                            None => print_key_source(&mut renderer),
                        },
                        ChatCommand::Stats => {
                            print_stats(&mut session, &staged);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to API
                send_message(&mut session, &mut renderer, &line, &mut staged).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Sends one turn and renders the outcome. Staged attachments go with the
/// message and are cleared whether or not the turn succeeds.
async fn send_message(
    session: &mut ChatSession<GeminiBackend>,
    renderer: &mut PlainTextRenderer,
    text: &str,
    staged: &mut Vec<Attachment>,
) {
    if session.is_busy() {
        renderer.print_notice(ui_text(session.language()).thinking);
        return;
    }

    renderer.print_notice(ui_text(session.language()).thinking);
    let attachments = std::mem::take(staged);
    session.send(text, attachments).await;

    if let Some(message) = session.messages().last() {
        if message.is_error {
            renderer.print_error(&message.text);
            if let Some(err) = session.last_error() {
                renderer.print_notice(&format!("({err})"));
                if err.is_authentication() {
                    renderer.print_info(ui_text(session.language()).api_key_desc);
                    renderer.print_info("Use /key <value> to store a new API key.");
                }
            }
        } else {
            renderer.print_reply("Dr. Nana", &message.text);
        }
    }
}

/// Reads an API key interactively, stores it, and builds a client with it.
fn prompt_for_key(
    rl: &mut DefaultEditor,
    renderer: &mut PlainTextRenderer,
    language: citebot::chat::Language,
) -> Result<Gemini, Box<dyn std::error::Error>> {
    renderer.print_info(ui_text(language).api_key_desc);
    loop {
        let key = rl.readline("API key: ")?;
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        match Gemini::new(Some(key.to_string())) {
            Ok(client) => {
                if let Err(err) = credentials::store_key(key) {
                    renderer.print_error(&format!("Could not save the key: {}", err));
                }
                return Ok(client);
            }
            Err(err) => renderer.print_error(&err.to_string()),
        }
    }
}

/// Stores a new key and points the backend at it, dropping any existing
/// conversation context.
fn store_and_apply_key(
    session: &mut ChatSession<GeminiBackend>,
    key: &str,
) -> citebot::Result<()> {
    credentials::store_key(key)?;
    let client = Gemini::new(Some(key.to_string()))?;
    session.backend_mut().reconfigure(client);
    Ok(())
}

fn print_key_source(renderer: &mut PlainTextRenderer) {
    if std::env::var(credentials::API_KEY_ENV).is_ok() {
        renderer.print_info(&format!("API key comes from ${}", credentials::API_KEY_ENV));
    } else if credentials::load_stored_key().is_some() {
        match credentials::key_file_path() {
            Ok(path) => renderer.print_info(&format!("API key comes from {}", path.display())),
            Err(_) => renderer.print_info("API key comes from the stored key file"),
        }
    } else {
        renderer.print_info("No stored API key (use /key <value> to set one).");
    }
}

fn print_suggestions(session: &ChatSession<GeminiBackend>) {
    println!("{}", ui_text(session.language()).menu_recommend);
    for question in suggestion_questions(session.language()) {
        println!("    - {}", question);
    }
    println!();
}

fn print_menu(session: &ChatSession<GeminiBackend>) {
    let language = session.language();
    println!("    {}", ui_text(language).menu);
    for (s, section) in MENU.iter().enumerate() {
        println!("    {}. {}", s + 1, section.title.get(language));
        for (e, entry) in section.entries.iter().enumerate() {
            println!("       {}.{} {}", s + 1, e + 1, entry.title.get(language));
        }
    }
    println!("    Send an entry with /ask <section>.<entry>, e.g. /ask 1.2");
}

fn print_stats(session: &mut ChatSession<GeminiBackend>, staged: &[Attachment]) {
    let message_count = session.messages().len();
    let attachment_count: usize = session
        .messages()
        .iter()
        .map(|m| m.attachments.len())
        .sum();
    let language = session.language();
    let status = session.status();
    println!("    Session Statistics:");
    println!("      Model: {}", session.backend_mut().model());
    println!("      Language: {}", language);
    println!("      Status: {:?}", status);
    println!("      Messages: {}", message_count);
    println!("      Attachments sent: {}", attachment_count);
    println!("      Files staged: {}", staged.len());
}
