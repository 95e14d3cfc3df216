use serde::{Deserialize, Serialize};

use crate::config::MatchingSettings;
use crate::core::tracker::CandidateTracker;
use crate::error::MatchError;

/// Counters collected over one matching run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Rounds executed, including the final round that made no changes
    pub rounds: usize,
    /// Proposals made by profiles that still had candidates left
    pub proposals: usize,
    /// Times the preference predicate was consulted, eviction pass included
    pub predicate_calls: usize,
    pub acceptances: usize,
    /// Matches broken because one side moved on to a new partner
    pub releases: usize,
    pub evictions: usize,
    /// Pairs left after the eviction pass
    pub matched: usize,
}

/// Deferred-acceptance matcher between profiles and vacancies
///
/// Profiles propose to vacancies in input order; the vacancy's decision is
/// delegated to the injected predicate `(vacancy, current_match, proposed)`.
///
/// # Run Stages
/// 1. Proposal rounds until a round changes nothing (or the cap is hit)
/// 2. Eviction pass dropping pairs the predicate no longer endorses
/// 3. Pairs read back in vacancy index order
///
/// The run happens once; later calls reuse the memoised outcome.
pub struct StableMatcher<T, F> {
    profiles: Vec<CandidateTracker<T>>,
    vacancies: Vec<CandidateTracker<T>>,
    predicate: F,
    iteration_cap: usize,
    stats: MatchStats,
    outcome: Option<Result<(), MatchError>>,
}

impl<T, F> StableMatcher<T, F>
where
    F: FnMut(&T, Option<&T>, &T) -> bool,
{
    /// Build one tracker per profile and per vacancy, in input order
    ///
    /// Empty inputs are valid and produce no pairs. The iteration cap
    /// starts at 0, meaning rounds run until convergence.
    pub fn new(profiles: Vec<T>, vacancies: Vec<T>, predicate: F) -> Self {
        let profile_count = profiles.len();
        let vacancy_count = vacancies.len();

        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| CandidateTracker::new(profile, vacancy_count))
                .collect(),
            vacancies: vacancies
                .into_iter()
                .map(|vacancy| CandidateTracker::new(vacancy, profile_count))
                .collect(),
            predicate,
            iteration_cap: 0,
            stats: MatchStats::default(),
            outcome: None,
        }
    }

    /// Build a matcher using the configured iteration cap
    pub fn from_settings(
        profiles: Vec<T>,
        vacancies: Vec<T>,
        predicate: F,
        settings: &MatchingSettings,
    ) -> Self {
        Self::new(profiles, vacancies, predicate).with_iteration_cap(settings.iteration_cap)
    }

    /// Limit the number of proposal rounds (0 = unbounded)
    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> Self {
        self.iteration_cap = iteration_cap;
        self
    }

    pub fn iteration_cap(&self) -> usize {
        self.iteration_cap
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn vacancy_count(&self) -> usize {
        self.vacancies.len()
    }

    /// True once a run reached a round without changes
    pub fn is_converged(&self) -> bool {
        matches!(self.outcome, Some(Ok(())))
    }

    /// Stats of a completed run, `None` before the first run
    pub fn stats(&self) -> Option<&MatchStats> {
        self.outcome.as_ref().map(|_| &self.stats)
    }

    /// Execute the matching if it has not run yet
    ///
    /// # Errors
    /// `MatchError::NonConvergence` when the iteration cap is reached
    /// without a quiet round. The same error is returned on later calls.
    pub fn run(&mut self) -> Result<&MatchStats, MatchError> {
        let outcome = match self.outcome.take() {
            Some(outcome) => outcome,
            None => self.execute(),
        };
        self.outcome = Some(outcome.clone());

        outcome.map(|()| &self.stats)
    }

    /// Compute the stable pairing as `(vacancy, profile)` references
    ///
    /// Pairs follow vacancy index order.
    pub fn matches(&mut self) -> Result<Vec<(&T, &T)>, MatchError> {
        self.run()?;

        Ok(self
            .vacancies
            .iter()
            .filter_map(|vacancy| {
                vacancy
                    .current_match()
                    .map(|pi| (vacancy.subject(), self.profiles[pi].subject()))
            })
            .collect())
    }

    /// Compute the stable pairing as `(vacancy_index, profile_index)`
    pub fn matched_indices(&mut self) -> Result<Vec<(usize, usize)>, MatchError> {
        self.run()?;

        Ok(self
            .vacancies
            .iter()
            .enumerate()
            .filter_map(|(vi, vacancy)| vacancy.current_match().map(|pi| (vi, pi)))
            .collect())
    }

    /// Consume the matcher and move the paired items out
    pub fn into_matches(mut self) -> Result<Vec<(T, T)>, MatchError> {
        self.run()?;

        let mut profiles: Vec<Option<T>> = self
            .profiles
            .into_iter()
            .map(|tracker| Some(tracker.into_subject()))
            .collect();

        let mut pairs = Vec::with_capacity(self.stats.matched);
        for vacancy in self.vacancies {
            let Some(pi) = vacancy.current_match() else {
                continue;
            };
            if let Some(profile) = profiles[pi].take() {
                pairs.push((vacancy.into_subject(), profile));
            }
        }

        Ok(pairs)
    }

    fn execute(&mut self) -> Result<(), MatchError> {
        tracing::debug!(
            "Starting stable matching: {} profiles, {} vacancies, iteration cap {}",
            self.profiles.len(),
            self.vacancies.len(),
            self.iteration_cap
        );

        loop {
            self.stats.rounds += 1;
            let changed = self.run_round();
            tracing::trace!(round = self.stats.rounds, changed, "Proposal round finished");

            if !changed {
                break;
            }

            if self.iteration_cap > 0 && self.stats.rounds >= self.iteration_cap {
                tracing::warn!(
                    "Matching did not converge within {} rounds",
                    self.stats.rounds
                );
                return Err(MatchError::NonConvergence {
                    rounds: self.stats.rounds,
                });
            }
        }

        self.evict_unendorsed();

        self.stats.matched = self
            .vacancies
            .iter()
            .filter(|vacancy| vacancy.current_match().is_some())
            .count();

        tracing::info!(
            rounds = self.stats.rounds,
            proposals = self.stats.proposals,
            predicate_calls = self.stats.predicate_calls,
            evictions = self.stats.evictions,
            matched = self.stats.matched,
            "Stable matching converged"
        );

        Ok(())
    }

    /// One pass of every profile proposing to its next candidate
    ///
    /// Returns whether any proposal touched an empty vacancy or changed a
    /// pairing.
    fn run_round(&mut self) -> bool {
        let mut changed = false;

        for pi in 0..self.profiles.len() {
            let Some(vi) = self.profiles[pi].advance_cursor() else {
                continue;
            };
            self.stats.proposals += 1;

            let vacancy_match = self.vacancies[vi].current_match();
            let profile_match = self.profiles[pi].current_match();

            if vacancy_match.is_none() {
                changed = true;

                // Both free: nothing to compare against
                if profile_match.is_none() {
                    self.pair(vi, pi);
                    continue;
                }
            }

            let accepted = {
                let vacancy = self.vacancies[vi].subject();
                let current = vacancy_match.map(|ci| self.profiles[ci].subject());
                let proposed = self.profiles[pi].subject();
                (self.predicate)(vacancy, current, proposed)
            };
            self.stats.predicate_calls += 1;

            if !accepted {
                continue;
            }

            changed = true;

            if let Some(previous_profile) = vacancy_match {
                self.profiles[previous_profile].clear_match();
                self.stats.releases += 1;
            }

            // Keep the pairing symmetric when a matched profile moves on
            if let Some(previous_vacancy) = profile_match {
                self.vacancies[previous_vacancy].clear_match();
                self.stats.releases += 1;
            }

            self.pair(vi, pi);
        }

        changed
    }

    /// Drop pairs whose vacancy would not accept its own match
    ///
    /// The matched profile is passed as both current and proposed item.
    fn evict_unendorsed(&mut self) {
        for vi in 0..self.vacancies.len() {
            let Some(pi) = self.vacancies[vi].current_match() else {
                continue;
            };

            let endorsed = {
                let vacancy = self.vacancies[vi].subject();
                let profile = self.profiles[pi].subject();
                (self.predicate)(vacancy, Some(profile), profile)
            };
            self.stats.predicate_calls += 1;

            if !endorsed {
                tracing::debug!("Evicting vacancy {} from profile {}", vi, pi);
                self.vacancies[vi].clear_match();
                self.profiles[pi].clear_match();
                self.stats.evictions += 1;
            }
        }
    }

    #[inline]
    fn pair(&mut self, vi: usize, pi: usize) {
        self.vacancies[vi].set_current_match(pi);
        self.profiles[pi].set_current_match(vi);
        self.stats.acceptances += 1;
    }
}
