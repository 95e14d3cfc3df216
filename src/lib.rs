//! Lume Matchmaker - stable matching between profiles and vacancies
//!
//! This library runs a generalized Gale-Shapley deferred-acceptance
//! procedure. Profiles propose to vacancies in order; whether a vacancy
//! accepts is decided by a caller-supplied preference predicate.
//!
//! ```
//! use lume_matchmaker::{Listing, StableMatcher};
//!
//! let profiles = vec![Listing::new("p1", "red", "blue")];
//! let vacancies = vec![Listing::new("v1", "blue", "red")];
//!
//! let mut matcher = StableMatcher::new(profiles, vacancies, Listing::prefers);
//! let pairs = matcher.matches().unwrap();
//! assert_eq!(pairs.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{CandidateTracker, MatchStats, StableMatcher, accept_when_unmatched};
pub use crate::config::{Settings, MatchingSettings, LoggingSettings};
pub use error::MatchError;
pub use models::{Listing, MatchPair};
