//! Core modules for MindTriage

pub mod api;
pub mod lexicon;
pub mod scorer;
pub mod selector;
pub mod session;

pub use api::{create_router, run_server};
pub use lexicon::LexiconStore;
pub use scorer::RiskScorer;
pub use selector::{Reply, ResponseSelector};
pub use session::{
    emergency_line, ActionHost, ConversationSession, HostEvent, RecordingHost,
    DEFAULT_EMERGENCY_LINE,
};
