// Model exports
pub mod domain;

pub use domain::{Listing, MatchPair};
