//! Preference predicates
//!
//! A predicate answers one question for a vacancy: given its current match
//! (if any), does it accept the proposed profile instead? Arguments are
//! `(vacancy, current_match, proposed)`.

/// Unsized predicate type, for callers that want trait objects
pub type PreferenceFn<T> = dyn FnMut(&T, Option<&T>, &T) -> bool;

/// Heap-allocated predicate, handy when predicates are picked at runtime
pub type BoxedPreference<T> = Box<PreferenceFn<T>>;

/// Wrap a predicate so an empty vacancy accepts any proposal
///
/// The inner predicate is only consulted when the vacancy already holds a
/// match, or for the eviction check where the current match is present.
pub fn accept_when_unmatched<T, F>(mut inner: F) -> impl FnMut(&T, Option<&T>, &T) -> bool
where
    F: FnMut(&T, Option<&T>, &T) -> bool,
{
    move |vacancy, current, proposed| current.is_none() || inner(vacancy, current, proposed)
}

/// Accepts every proposal
pub fn always<T>() -> impl FnMut(&T, Option<&T>, &T) -> bool {
    |_, _, _| true
}

/// Rejects every proposal
pub fn never<T>() -> impl FnMut(&T, Option<&T>, &T) -> bool {
    |_, _, _| false
}
