//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation and start over from the greeting.
    Clear,

    /// Change the model.
    Model(String),

    /// Switch the display language, or toggle it when no argument is given.
    Lang(Option<String>),

    /// Show the guided menu of citation topics.
    Menu,

    /// Send a menu entry's canned prompt, addressed as section.entry.
    Ask(usize, usize),

    /// Show the suggested starter questions.
    Topics,

    /// Stage a file to send with the next message.
    Attach(String),

    /// List the currently staged files.
    Files,

    /// Drop all staged files.
    Detach,

    /// Print the Markdown source of the latest reply.
    Copy,

    /// Write the Markdown source of the latest reply to a file.
    Export(String),

    /// Save the whole transcript to a file as Markdown.
    Save(String),

    /// Store a new API key, or report where the key comes from when no
    /// argument is given.
    Key(Option<String>),

    /// Display session statistics (message count, current model, etc.).
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a valid command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use citebot::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/attach results.csv").is_some());
/// assert!(parse_command("How do I cite a book?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "model" => match argument {
            Some(model) => ChatCommand::Model(model.to_string()),
            None => ChatCommand::Invalid("/model requires a model name".to_string()),
        },
        "lang" | "language" => ChatCommand::Lang(argument.map(|s| s.to_string())),
        "menu" => ChatCommand::Menu,
        "ask" => parse_ask_command(argument),
        "topics" => ChatCommand::Topics,
        "attach" => match argument {
            Some(path) => ChatCommand::Attach(path.to_string()),
            None => ChatCommand::Invalid("/attach requires a file path".to_string()),
        },
        "files" => ChatCommand::Files,
        "detach" => ChatCommand::Detach,
        "copy" => ChatCommand::Copy,
        "export" => match argument {
            Some(path) => ChatCommand::Export(path.to_string()),
            None => ChatCommand::Invalid("/export requires a file path".to_string()),
        },
        "save" => match argument {
            Some(path) => ChatCommand::Save(path.to_string()),
            None => ChatCommand::Invalid("/save requires a file path".to_string()),
        },
        "key" => ChatCommand::Key(argument.map(|s| s.to_string())),
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_ask_command(argument: Option<&str>) -> ChatCommand {
    let Some(arg) = argument else {
        return ChatCommand::Invalid(
            "/ask requires a menu address like 1.2 (see /menu)".to_string(),
        );
    };

    let mut parts = arg.splitn(2, '.');
    let section = parts.next().and_then(|s| s.parse::<usize>().ok());
    let entry = parts.next().and_then(|s| s.parse::<usize>().ok());
    match (section, entry) {
        (Some(section), Some(entry)) if section > 0 && entry > 0 => {
            ChatCommand::Ask(section, entry)
        }
        _ => ChatCommand::Invalid("/ask expects a menu address like 1.2 (see /menu)".to_string()),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /clear                 Clear the conversation and start over
  /model <name>          Change the model (e.g., /model gemini-2.5-pro)
  /lang [th|en]          Switch display language (no argument toggles)
  /menu                  Show the guided citation-topic menu
  /ask <s.e>             Send menu entry e of section s (e.g., /ask 1.2)
  /topics                Show suggested starter questions
  /attach <file>         Stage a file to send with the next message
  /files                 List staged files
  /detach                Drop all staged files
  /copy                  Print the Markdown source of the latest reply
  /export <file>         Write the latest reply to a file
  /save <file>           Save the whole transcript as Markdown
  /key [value]           Store a new API key (no argument shows the source)
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the chat"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_clear() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/CLEAR"), Some(ChatCommand::Clear));
    }

    #[test]
    fn parse_model() {
        assert_eq!(
            parse_command("/model gemini-2.5-pro"),
            Some(ChatCommand::Model("gemini-2.5-pro".to_string()))
        );
        assert_eq!(
            parse_command("/model"),
            Some(ChatCommand::Invalid(
                "/model requires a model name".to_string()
            ))
        );
    }

    #[test]
    fn parse_lang() {
        assert_eq!(
            parse_command("/lang en"),
            Some(ChatCommand::Lang(Some("en".to_string())))
        );
        assert_eq!(parse_command("/lang"), Some(ChatCommand::Lang(None)));
        assert_eq!(parse_command("/language th"), Some(ChatCommand::Lang(Some("th".to_string()))));
    }

    #[test]
    fn parse_attach_and_files() {
        assert_eq!(
            parse_command("/attach data/results final.csv"),
            Some(ChatCommand::Attach("data/results final.csv".to_string()))
        );
        assert!(matches!(
            parse_command("/attach"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
        assert_eq!(parse_command("/files"), Some(ChatCommand::Files));
        assert_eq!(parse_command("/detach"), Some(ChatCommand::Detach));
    }

    #[test]
    fn parse_ask() {
        assert_eq!(parse_command("/ask 1.2"), Some(ChatCommand::Ask(1, 2)));
        assert_eq!(parse_command("/ask 3.7"), Some(ChatCommand::Ask(3, 7)));
        assert!(matches!(
            parse_command("/ask"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("requires")
        ));
        assert!(matches!(
            parse_command("/ask 0.1"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/ask one.two"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parse_copy_export_save() {
        assert_eq!(parse_command("/copy"), Some(ChatCommand::Copy));
        assert_eq!(
            parse_command("/export reply.md"),
            Some(ChatCommand::Export("reply.md".to_string()))
        );
        assert_eq!(
            parse_command("/save session.md"),
            Some(ChatCommand::Save("session.md".to_string()))
        );
        assert!(matches!(
            parse_command("/export"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parse_key() {
        assert_eq!(
            parse_command("/key AIzaExample"),
            Some(ChatCommand::Key(Some("AIzaExample".to_string())))
        );
        assert_eq!(parse_command("/key"), Some(ChatCommand::Key(None)));
    }

    #[test]
    fn parse_stats_menu_topics() {
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Stats));
        assert_eq!(parse_command("/menu"), Some(ChatCommand::Menu));
        assert_eq!(parse_command("/topics"), Some(ChatCommand::Topics));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("How do I cite a book?"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("Unknown command")
        ));
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/attach"));
        assert!(help.contains("/lang"));
        assert!(help.contains("/menu"));
    }
}
