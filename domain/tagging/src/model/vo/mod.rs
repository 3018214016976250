pub mod config;
pub mod defined_tags;
pub mod event;
pub mod outcome;

#[rustfmt::skip]
pub use {
    config::TaggerConfig,
    defined_tags::DefinedTags,
    event::OciEvent,
    outcome::{MatchResult, ReconcileOutcome},
};
