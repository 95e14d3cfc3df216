/// Proposal bookkeeping for a single item on either side of the matching
///
/// The tracker wraps the caller's item without touching it. Its candidate
/// list is the opposite side's tracker arena: candidate `i` is tracker `i`
/// over there, so only the list length is stored here.
#[derive(Debug, Clone)]
pub struct CandidateTracker<T> {
    subject: T,
    current_match: Option<usize>,
    cursor: usize,
    candidate_count: usize,
}

impl<T> CandidateTracker<T> {
    pub fn new(subject: T, candidate_count: usize) -> Self {
        Self {
            subject,
            current_match: None,
            cursor: 0,
            candidate_count,
        }
    }

    /// Return the next unconsidered candidate index and move past it
    ///
    /// Yields `None` once every candidate has been handed out, and keeps
    /// yielding `None` afterwards. The cursor never runs past the list end.
    #[inline]
    pub fn advance_cursor(&mut self) -> Option<usize> {
        if self.cursor >= self.candidate_count {
            return None;
        }

        let next = self.cursor;
        self.cursor += 1;
        Some(next)
    }

    #[inline]
    pub fn subject(&self) -> &T {
        &self.subject
    }

    #[inline]
    pub fn current_match(&self) -> Option<usize> {
        self.current_match
    }

    /// Point this tracker at an index on the opposite side
    ///
    /// No validation happens here; the engine keeps both sides symmetric.
    #[inline]
    pub fn set_current_match(&mut self, index: usize) {
        self.current_match = Some(index);
    }

    /// Drop the current match, returning the index it held
    #[inline]
    pub fn clear_match(&mut self) -> Option<usize> {
        self.current_match.take()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidate_count
    }

    pub fn remaining(&self) -> usize {
        self.candidate_count - self.cursor
    }

    pub fn into_subject(self) -> T {
        self.subject
    }
}
