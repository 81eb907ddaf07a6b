//! Core types for MindTriage

mod action;
mod analysis;
mod lexicon;
mod message;
mod severity;

pub use action::{Action, ActionKind, ResourceCategory};
pub use analysis::{CrisisCategory, RiskAnalysis, RiskFactor};
pub use lexicon::{FollowUpTemplate, Lexicon, ResponseTemplates, TierTemplate};
pub use message::{Author, Message};
pub use severity::{Sentiment, Severity};
