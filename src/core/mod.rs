// Core algorithm exports
pub mod matcher;
pub mod preference;
pub mod tracker;

pub use matcher::{MatchStats, StableMatcher};
pub use preference::{accept_when_unmatched, always, never, BoxedPreference, PreferenceFn};
pub use tracker::CandidateTracker;
