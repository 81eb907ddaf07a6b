//! Conversation session: message history, offline queue, triage state
//!
//! One session is owned by one conversational context at a time (single
//! writer). The scorer and selector stay pure; every piece of mutable
//! state lives here. History is append-only with a single exception:
//! the welcome message is rebuilt whole when the active language
//! changes.

use serde::Serialize;

use crate::core::{LexiconStore, ResponseSelector, RiskScorer};
use crate::types::{Action, ActionKind, Author, Message, ResourceCategory, Severity};

/// Fixed follow-up appended when a followup action is dispatched
const FOLLOW_UP_PROMPT: &str =
    "How are you feeling right now? Would you like to talk more about what's troubling you?";

/// Per-language emergency helplines; unlisted languages use the default
static EMERGENCY_LINES: &[(&str, &str)] = &[
    ("en", "988"),
    ("es", "717-394-2631"),
    ("hi", "9152987821"),
];

/// Fallback helpline for languages without a registered number
pub const DEFAULT_EMERGENCY_LINE: &str = "988";

/// Resolve the emergency line for a language code
pub fn emergency_line(language: &str) -> &'static str {
    EMERGENCY_LINES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, number)| *number)
        .unwrap_or(DEFAULT_EMERGENCY_LINE)
}

/// Host-side collaborators that recommended actions are routed to.
///
/// Dispatch is fire-and-forget: the session never waits on or observes
/// an outcome, and host failures stay on the host side of this seam.
pub trait ActionHost {
    /// Place a call to the resolved emergency line
    fn dial_emergency(&mut self, number: &str);
    /// Open the counselor booking workflow
    fn open_booking(&mut self, urgent: bool);
    /// Open the resource catalog filtered by category
    fn open_resources(&mut self, category: ResourceCategory, urgent: bool);
}

/// Host event produced by an action dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    DialEmergency { number: String },
    OpenBooking { urgent: bool },
    OpenResources { category: ResourceCategory, urgent: bool },
}

/// ActionHost that records dispatches, for servers and tests
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
}

impl ActionHost for RecordingHost {
    fn dial_emergency(&mut self, number: &str) {
        self.events.push(HostEvent::DialEmergency {
            number: number.to_string(),
        });
    }

    fn open_booking(&mut self, urgent: bool) {
        self.events.push(HostEvent::OpenBooking { urgent });
    }

    fn open_resources(&mut self, category: ResourceCategory, urgent: bool) {
        self.events.push(HostEvent::OpenResources { category, urgent });
    }
}

/// A single conversation: history plus current triage state
#[derive(Debug)]
pub struct ConversationSession<'a> {
    lexicons: &'a LexiconStore,
    scorer: RiskScorer,
    selector: ResponseSelector,
    language: String,
    history: Vec<Message>,
    offline_queue: Vec<Message>,
    current_severity: Option<Severity>,
    online: bool,
    next_id: u64,
}

impl<'a> ConversationSession<'a> {
    /// Create a session seeded with the welcome message for `language`
    pub fn new(language: impl Into<String>, lexicons: &'a LexiconStore) -> Self {
        let mut session = Self {
            lexicons,
            scorer: RiskScorer::new(),
            selector: ResponseSelector::new(),
            language: language.into(),
            history: Vec::new(),
            offline_queue: Vec::new(),
            current_severity: None,
            online: true,
            next_id: 0,
        };
        let welcome = session.lexicons.get(&session.language).templates.welcome;
        let message = session.build_message(Author::Assistant, welcome);
        session.history.push(message);
        session
    }

    /// Active language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Full message history, oldest first
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Messages accepted while offline, not yet delivered
    pub fn offline_queue(&self) -> &[Message] {
        &self.offline_queue
    }

    /// Severity of the most recently scored message
    pub fn current_severity(&self) -> Option<Severity> {
        self.current_severity
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Switch the active language. If the first history entry is the
    /// assistant welcome, it is rebuilt in the new language -- same id
    /// and timestamp, new text and language, history length unchanged.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
        let welcome = self.lexicons.get(&self.language).templates.welcome;
        if let Some(first) = self.history.first_mut() {
            if first.author == Author::Assistant {
                let mut replacement =
                    Message::new(first.id.clone(), Author::Assistant, welcome, self.language.clone());
                replacement.timestamp = first.timestamp;
                *first = replacement;
            }
        }
    }

    /// Submit a user message and return the assistant message produced.
    ///
    /// Online: the user message joins the history, is scored and
    /// answered, and the session severity updates. Offline: the user
    /// message is queued unscored and the reply is the localized
    /// offline notice.
    pub fn submit_user_message(&mut self, text: impl Into<String>) -> &Message {
        let text = text.into();
        if self.online {
            let user = self.build_message(Author::User, &text);
            self.history.push(user);

            let analysis = self.scorer.score(&text, &self.language, self.lexicons);
            let reply = self.selector.select(&analysis, &self.language, self.lexicons);
            self.current_severity = Some(analysis.severity);

            let mut message = self.build_message(Author::Assistant, &reply.text);
            message.severity = Some(analysis.severity);
            message.confidence = Some(analysis.confidence);
            message.triggers = Some(analysis.triggers);
            message.risk_factors = Some(analysis.risk_factors);
            message.actions = Some(reply.actions);
            self.history.push(message);
        } else {
            let user = self.build_message(Author::User, &text);
            self.offline_queue.push(user);

            let notice = self.lexicons.get(&self.language).templates.offline;
            let message = self.build_message(Author::Assistant, notice);
            self.history.push(message);
        }
        self.history.last().expect("history is never empty")
    }

    /// Mark the session disconnected; submissions queue until reconnect
    pub fn go_offline(&mut self) {
        self.online = false;
    }

    /// Restore connectivity, draining queued messages into the history
    /// in FIFO order. Queued messages are not retroactively scored.
    /// Idempotent: an empty queue is a no-op.
    pub fn reconnect(&mut self) {
        self.online = true;
        self.history.append(&mut self.offline_queue);
    }

    /// Route a recommended action to the host. The followup kind is
    /// handled internally by appending the fixed follow-up prompt.
    pub fn dispatch_action(&mut self, action: &Action, host: &mut dyn ActionHost) {
        match action.kind {
            ActionKind::Emergency => host.dial_emergency(emergency_line(&self.language)),
            ActionKind::Counselor => host.open_booking(action.urgent),
            ActionKind::Resources => {
                let category = if self.current_severity == Some(Severity::Crisis) {
                    ResourceCategory::Crisis
                } else {
                    ResourceCategory::Coping
                };
                host.open_resources(category, action.urgent);
            }
            ActionKind::Followup => {
                let message = self.build_message(Author::Assistant, FOLLOW_UP_PROMPT);
                self.history.push(message);
            }
        }
    }

    fn build_message(&mut self, author: Author, text: &str) -> Message {
        self.next_id += 1;
        Message::new(self.next_id.to_string(), author, text, self.language.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConversationSession<'static> {
        ConversationSession::new("en", LexiconStore::global())
    }

    #[test]
    fn test_new_session_starts_with_welcome() {
        let session = session();
        assert_eq!(session.history().len(), 1);
        let welcome = &session.history()[0];
        assert_eq!(welcome.author, Author::Assistant);
        assert!(welcome.text.contains("MindBuddy"));
        assert!(session.current_severity().is_none());
    }

    #[test]
    fn test_language_change_rewrites_welcome_in_place() {
        let mut session = session();
        let original_id = session.history()[0].id.clone();
        let original_ts = session.history()[0].timestamp;

        session.set_language("fr");

        assert_eq!(session.history().len(), 1, "no message may be appended");
        let welcome = &session.history()[0];
        assert_eq!(welcome.language, "fr");
        assert_eq!(
            welcome.text,
            LexiconStore::global().get("fr").templates.welcome
        );
        assert_eq!(welcome.id, original_id);
        assert_eq!(welcome.timestamp, original_ts);
    }

    #[test]
    fn test_language_change_keeps_later_messages_untouched() {
        let mut session = session();
        session.submit_user_message("hello there");
        let before: Vec<String> = session.history()[1..]
            .iter()
            .map(|m| m.text.clone())
            .collect();

        session.set_language("de");

        let after: Vec<String> = session.history()[1..]
            .iter()
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(before, after);
        assert_eq!(session.history()[0].language, "de");
    }

    #[test]
    fn test_online_submission_appends_user_and_reply() {
        let mut session = session();
        session.submit_user_message("I'm doing great today, thank you!");

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[1].author, Author::User);
        let reply = &session.history()[2];
        assert_eq!(reply.author, Author::Assistant);
        assert_eq!(reply.severity, Some(Severity::Low));
        assert!(reply.actions.as_ref().is_some_and(|a| !a.is_empty()));
        assert_eq!(session.current_severity(), Some(Severity::Low));
    }

    #[test]
    fn test_crisis_submission_updates_session_severity() {
        let mut session = session();
        let reply = session.submit_user_message("I want to kill myself tonight").clone();
        assert_eq!(reply.severity, Some(Severity::Crisis));
        assert_eq!(session.current_severity(), Some(Severity::Crisis));
    }

    #[test]
    fn test_offline_submission_queues_without_scoring() {
        let mut session = session();
        session.go_offline();
        let notice = session.submit_user_message("I feel hopeless").clone();

        assert_eq!(notice.author, Author::Assistant);
        assert!(notice.text.contains("offline"));
        assert!(notice.severity.is_none(), "offline notice is not a triage");
        assert_eq!(session.offline_queue().len(), 1);
        assert_eq!(session.offline_queue()[0].text, "I feel hopeless");
        assert!(session.current_severity().is_none());
    }

    #[test]
    fn test_reconnect_drains_queue_in_order_without_scoring() {
        let mut session = session();
        session.go_offline();
        session.submit_user_message("first");
        session.submit_user_message("second");

        session.reconnect();

        assert!(session.is_online());
        assert!(session.offline_queue().is_empty());
        let tail: Vec<&str> = session
            .history()
            .iter()
            .rev()
            .take(2)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(tail, vec!["second", "first"]);
        for message in session.history() {
            if message.author == Author::User {
                assert!(message.severity.is_none());
            }
        }
    }

    #[test]
    fn test_reconnect_with_empty_queue_is_a_noop() {
        let mut session = session();
        session.submit_user_message("hello");
        let len_before = session.history().len();

        session.reconnect();
        session.reconnect();

        assert_eq!(session.history().len(), len_before);
    }

    #[test]
    fn test_emergency_dispatch_resolves_language_number() {
        let mut session = ConversationSession::new("hi", LexiconStore::global());
        let mut host = RecordingHost::default();
        let action = Action::urgent(ActionKind::Emergency, "Emergency Helpline");

        session.dispatch_action(&action, &mut host);

        assert_eq!(
            host.events,
            vec![HostEvent::DialEmergency {
                number: "9152987821".to_string()
            }]
        );
    }

    #[test]
    fn test_emergency_dispatch_falls_back_to_default_line() {
        let mut session = ConversationSession::new("ja", LexiconStore::global());
        let mut host = RecordingHost::default();
        session.dispatch_action(
            &Action::urgent(ActionKind::Emergency, "Emergency Helpline"),
            &mut host,
        );
        assert_eq!(
            host.events,
            vec![HostEvent::DialEmergency {
                number: DEFAULT_EMERGENCY_LINE.to_string()
            }]
        );
    }

    #[test]
    fn test_resources_dispatch_category_follows_severity() {
        let mut session = session();
        let mut host = RecordingHost::default();
        let action = Action::new(ActionKind::Resources, "Support Resources");

        session.dispatch_action(&action, &mut host);
        session.submit_user_message("I want to kill myself");
        session.dispatch_action(&action, &mut host);

        assert_eq!(
            host.events,
            vec![
                HostEvent::OpenResources {
                    category: ResourceCategory::Coping,
                    urgent: false
                },
                HostEvent::OpenResources {
                    category: ResourceCategory::Crisis,
                    urgent: false
                },
            ]
        );
    }

    #[test]
    fn test_followup_dispatch_appends_prompt_without_host_call() {
        let mut session = session();
        let mut host = RecordingHost::default();
        let len_before = session.history().len();

        session.dispatch_action(&Action::new(ActionKind::Followup, "Keep Talking"), &mut host);

        assert!(host.events.is_empty());
        assert_eq!(session.history().len(), len_before + 1);
        let appended = session.history().last().expect("appended above");
        assert_eq!(appended.author, Author::Assistant);
        assert!(appended.text.contains("How are you feeling right now?"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut session = session();
        session.submit_user_message("one");
        session.submit_user_message("two");
        let mut ids: Vec<&str> = session.history().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), session.history().len());
    }
}
