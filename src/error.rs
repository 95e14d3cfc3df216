use thiserror::Error;

/// Errors that can occur while computing a matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The iteration cap was reached before a round made no changes.
    ///
    /// Usually means the preference predicate is not monotone, or the cap
    /// is too low for the input size.
    #[error("matching did not converge after {rounds} rounds")]
    NonConvergence { rounds: usize },
}
