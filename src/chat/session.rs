//! Core conversation session management.
//!
//! [`ChatSession`] owns the transcript and the conversation status. It is
//! the only writer of either: one send at a time, user message appended
//! before the remote call, reply or failure notice reconciled back into the
//! transcript when the call resolves.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use time::OffsetDateTime;

use crate::attachment::Attachment;
use crate::chat::backend::CompletionBackend;
use crate::chat::locale::{Language, ui_text, welcome_message};
use crate::chat::message::{ChatStatus, Message, Sender};
use crate::error::{Error, Result};
use crate::observability::{SESSION_EMPTY_SUBMISSIONS, SESSION_TURN_ERRORS, SESSION_TURNS};

/// How one send request resolved.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty submission; nothing changed.
    Ignored,

    /// The reply was appended and the session is idle again.
    Replied,

    /// A failure notice was appended; the raw error is in `last_error`.
    Failed,
}

/// A chat session owning the ordered transcript and the request lifecycle.
pub struct ChatSession<B: CompletionBackend> {
    backend: B,
    messages: Vec<Message>,
    status: ChatStatus,
    language: Language,
    last_minted_id: u128,
    last_error: Option<Error>,
}

impl<B: CompletionBackend> ChatSession<B> {
    /// Creates a session seeded with the greeting in the given language.
    pub fn new(backend: B, language: Language) -> Self {
        Self {
            backend,
            messages: vec![Message::greeting(welcome_message(language))],
            status: ChatStatus::Idle,
            language,
            last_minted_id: 0,
            last_error: None,
        }
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The current conversation status.
    pub fn status(&self) -> ChatStatus {
        self.status
    }

    /// The active display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// True while a request is in flight; callers must not submit then.
    pub fn is_busy(&self) -> bool {
        self.status == ChatStatus::Thinking
    }

    /// The raw error of the most recent failed turn, for logging only.
    /// The transcript never carries raw error detail.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Mutable access to the backend (credential changes).
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Sends one turn: text plus an ordered attachment selection.
    ///
    /// An empty submission (whitespace-only text and no attachments) is a
    /// silent no-op. Otherwise the user message is appended before the
    /// remote call is issued, and the reply or a localized failure notice
    /// is appended when it resolves. Taking `&mut self` across the await
    /// serializes sends: a second send cannot start until this one has
    /// reconciled its result.
    pub async fn send(&mut self, text: &str, attachments: Vec<Attachment>) -> SendOutcome {
        if text.trim().is_empty() && attachments.is_empty() {
            SESSION_EMPTY_SUBMISSIONS.click();
            return SendOutcome::Ignored;
        }

        SESSION_TURNS.click();
        let user_id = self.mint_id();
        let message = Message::user(user_id, text, attachments);
        let outbound = (message.text.clone(), message.attachments.clone());
        self.messages.push(message);
        self.status = ChatStatus::Thinking;

        match self.backend.send_turn(&outbound.0, &outbound.1).await {
            Ok(reply) => {
                let bot_id = self.mint_id();
                self.messages.push(Message::bot(bot_id, reply));
                self.status = ChatStatus::Idle;
                self.last_error = None;
                SendOutcome::Replied
            }
            Err(err) => {
                SESSION_TURN_ERRORS.click();
                let bot_id = self.mint_id();
                self.messages.push(Message::error_notice(
                    bot_id,
                    ui_text(self.language).error_msg,
                ));
                self.status = ChatStatus::Error;
                self.last_error = Some(err);
                SendOutcome::Failed
            }
        }
    }

    /// Switches the display language.
    ///
    /// While the transcript still holds only the greeting, the greeting is
    /// re-synthesized in the new language under the same id. Once any real
    /// exchange exists the transcript is left untouched.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        if self.messages.len() == 1 && self.messages[0].is_greeting() {
            self.messages[0] = Message::greeting(welcome_message(language));
        }
    }

    /// Replaces the transcript wholesale with a fresh greeting.
    pub fn reset(&mut self) {
        self.messages = vec![Message::greeting(welcome_message(self.language))];
        self.status = ChatStatus::Idle;
        self.last_error = None;
    }

    /// The newest bot reply that is not a failure notice, if any.
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|msg| msg.sender == Sender::Bot && !msg.is_error && !msg.is_greeting())
    }

    /// Writes the Markdown source of the newest reply to a file.
    pub fn export_reply_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let reply = self
            .last_reply()
            .ok_or_else(|| Error::unknown("no reply to export"))?;
        std::fs::write(path.as_ref(), &reply.text)
            .map_err(|err| Error::io("failed to write export file", err))
    }

    /// Writes the whole transcript as a Markdown document.
    pub fn save_transcript_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .map_err(|err| Error::io("failed to create transcript file", err))?;
        let mut writer = BufWriter::new(file);
        for message in &self.messages {
            let heading = match message.sender {
                Sender::User => "## You",
                Sender::Bot => "## Dr. Nana",
                Sender::System => "## System",
            };
            writeln!(writer, "{heading}\n")
                .and_then(|()| writeln!(writer, "{}\n", message.text))
                .map_err(|err| Error::io("failed to write transcript", err))?;
            for attachment in &message.attachments {
                writeln!(writer, "> attached: {} ({})\n", attachment.name, attachment.mime_type)
                    .map_err(|err| Error::io("failed to write transcript", err))?;
            }
        }
        Ok(())
    }

    /// Mints a transcript-unique id.
    ///
    /// Derived from the clock but strictly increasing, so the user/bot pair
    /// of one turn stays distinct even inside a single clock tick.
    fn mint_id(&mut self) -> String {
        let now = OffsetDateTime::now_utc().unix_timestamp_nanos() as u128 / 1_000_000;
        let id = if now > self.last_minted_id {
            now
        } else {
            self.last_minted_id + 1
        };
        self.last_minted_id = id;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::backend::FALLBACK_REPLY;
    use std::collections::VecDeque;

    /// Backend that replays a script of canned results.
    struct ScriptedBackend {
        script: VecDeque<Result<String>>,
        turns: Vec<(String, Vec<Attachment>)>,
    }

    impl ScriptedBackend {
        fn new(script: Vec<Result<String>>) -> Self {
            Self {
                script: script.into(),
                turns: Vec::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn send_turn(&mut self, text: &str, attachments: &[Attachment]) -> Result<String> {
            self.turns.push((text.to_string(), attachments.to_vec()));
            self.script
                .pop_front()
                .unwrap_or_else(|| Ok(FALLBACK_REPLY.to_string()))
        }
    }

    fn session(script: Vec<Result<String>>) -> ChatSession<ScriptedBackend> {
        ChatSession::new(ScriptedBackend::new(script), Language::En)
    }

    #[tokio::test]
    async fn successful_turn_grows_transcript_by_two() {
        let mut session = session(vec![Ok("Here is the citation.".to_string())]);
        assert_eq!(session.messages().len(), 1);

        let outcome = session.send("Cite a book", Vec::new()).await;
        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(session.status(), ChatStatus::Idle);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].is_greeting());
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "Cite a book");
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_eq!(messages[2].text, "Here is the citation.");
    }

    #[tokio::test]
    async fn transcript_order_over_many_sends() {
        let mut session = session(vec![
            Ok("r1".to_string()),
            Ok("r2".to_string()),
            Ok("r3".to_string()),
        ]);
        for text in ["q1", "q2", "q3"] {
            session.send(text, Vec::new()).await;
        }

        let messages = session.messages();
        assert_eq!(messages.len(), 7);
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(&texts[1..], &["q1", "r1", "q2", "r2", "q3", "r3"]);

        // Ids are strictly increasing across the whole transcript.
        let ids: Vec<u128> = messages[1..]
            .iter()
            .map(|m| m.id.parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[tokio::test]
    async fn empty_submission_is_a_no_op() {
        let mut session = session(vec![]);
        let before = session.messages().to_vec();

        assert_eq!(session.send("", Vec::new()).await, SendOutcome::Ignored);
        assert_eq!(session.send("   \n", Vec::new()).await, SendOutcome::Ignored);

        assert_eq!(session.messages(), &before[..]);
        assert_eq!(session.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn attachment_only_submission_is_sent() {
        let mut session = session(vec![Ok("I see the file.".to_string())]);
        let attachments = vec![Attachment::new("a.png", "image/png", "YQ==")];

        let outcome = session.send("", attachments).await;
        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(session.messages()[1].attachments.len(), 1);
        assert_eq!(session.backend_mut().turns[0].1.len(), 1);
    }

    #[tokio::test]
    async fn failure_appends_localized_notice_and_recovers() {
        let mut session = session(vec![
            Err(Error::connection("boom", None)),
            Ok("better now".to_string()),
        ]);

        let outcome = session.send("q1", Vec::new()).await;
        assert_eq!(outcome, SendOutcome::Failed);
        assert_eq!(session.status(), ChatStatus::Error);

        let notice = session.messages().last().unwrap();
        assert!(notice.is_error);
        assert_eq!(notice.sender, Sender::Bot);
        assert_eq!(notice.text, ui_text(Language::En).error_msg);
        // Raw detail is available for logging but never in the transcript.
        assert!(session.last_error().unwrap().is_connection());
        assert!(!notice.text.contains("boom"));

        // Error is not sticky.
        let outcome = session.send("q2", Vec::new()).await;
        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(session.status(), ChatStatus::Idle);
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn back_to_back_sends_never_interleave() {
        let mut session = session(vec![Ok("r1".to_string()), Err(Error::unknown("x"))]);
        session.send("q1", Vec::new()).await;
        session.send("q2", Vec::new()).await;

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::Bot, Sender::User, Sender::Bot, Sender::User, Sender::Bot]
        );
        assert_eq!(session.messages()[1].text, "q1");
        assert_eq!(session.messages()[3].text, "q2");
        assert!(session.messages()[4].is_error);
    }

    #[tokio::test]
    async fn busy_only_while_thinking() {
        let mut session = session(vec![Ok("r".to_string())]);
        assert!(!session.is_busy());
        session.send("q", Vec::new()).await;
        assert!(!session.is_busy());
    }

    #[test]
    fn greeting_reseeded_only_while_sole_entry() {
        let mut session = session(vec![]);
        let original_id = session.messages()[0].id.clone();
        assert_eq!(session.messages()[0].text, welcome_message(Language::En));

        session.set_language(Language::Th);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, original_id);
        assert_eq!(session.messages()[0].text, welcome_message(Language::Th));
    }

    #[tokio::test]
    async fn greeting_not_reseeded_after_real_exchange() {
        let mut session = session(vec![Ok("r".to_string())]);
        session.send("q", Vec::new()).await;

        let before = session.messages().to_vec();
        session.set_language(Language::Th);
        assert_eq!(session.messages(), &before[..]);
        // The language itself still switches; later notices are localized.
        assert_eq!(session.language(), Language::Th);
    }

    #[tokio::test]
    async fn reset_replaces_transcript_wholesale() {
        let mut session = session(vec![Ok("r".to_string())]);
        session.send("q", Vec::new()).await;
        assert_eq!(session.messages().len(), 3);

        session.reset();
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].is_greeting());
        assert_eq!(session.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn last_reply_skips_notices_and_greeting() {
        let mut session = session(vec![Ok("real".to_string()), Err(Error::unknown("x"))]);
        assert!(session.last_reply().is_none());

        session.send("q1", Vec::new()).await;
        session.send("q2", Vec::new()).await;
        assert_eq!(session.last_reply().unwrap().text, "real");
    }

    #[tokio::test]
    async fn export_reply_writes_markdown_source() {
        let mut session = session(vec![Ok("## Citation\n\n> text".to_string())]);
        session.send("q", Vec::new()).await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reply.md");
        session.export_reply_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "## Citation\n\n> text");
    }

    #[tokio::test]
    async fn save_transcript_includes_attachment_names() {
        let mut session = session(vec![Ok("done".to_string())]);
        session
            .send("check this", vec![Attachment::new("a.csv", "text/csv", "YQ==")])
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.md");
        session.save_transcript_to(&path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("## You"));
        assert!(saved.contains("attached: a.csv (text/csv)"));
        assert!(saved.contains("done"));
    }
}
