use crate::models::{Provider, QuizAnswers};
use crate::core::filters::{serves_state, within_budget, offers_study_mode};

/// Number of providers recommended at the end of the quiz
pub const DEFAULT_MATCH_LIMIT: usize = 3;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<&'a Provider>,
    /// Providers left after filtering, before the limit is applied
    pub filtered_candidates: usize,
    pub total_candidates: usize,
}

impl MatchResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Quiz matching orchestrator - sequential narrowing then rating sort
///
/// # Pipeline Stages
/// 1. State coverage
/// 2. Budget band / funding eligibility
/// 3. Study mode
/// 4. Stable sort by rating (descending) and truncate
#[derive(Debug, Clone)]
pub struct Matcher {
    limit: usize,
}

impl Matcher {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Find the best providers for an answer set
    ///
    /// # Arguments
    /// * `providers` - The full provider catalog
    /// * `answers` - The user's quiz answers; unanswered questions do not filter
    ///
    /// # Returns
    /// MatchResult with at most `limit` providers, highest rated first. The
    /// list is empty when nothing survives the filters; callers decide what
    /// to show instead.
    pub fn find_matches<'a>(
        &self,
        providers: &'a [Provider],
        answers: &QuizAnswers,
    ) -> MatchResult<'a> {
        let total_candidates = providers.len();

        let mut matched: Vec<&Provider> = providers
            .iter()
            // Stage 1: state
            .filter(|p| answers.state.as_ref().map_or(true, |s| serves_state(p, s)))
            // Stage 2: budget
            .filter(|p| answers.budget.map_or(true, |b| within_budget(p, b)))
            // Stage 3: study mode
            .filter(|p| answers.study_mode.map_or(true, |m| offers_study_mode(p, m)))
            .collect();

        let filtered_candidates = matched.len();

        // Stable: equal ratings keep catalog order
        matched.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matched.truncate(self.limit);

        tracing::debug!(
            "Matched {} of {} providers ({} after filtering)",
            matched.len(),
            total_candidates,
            filtered_candidates
        );

        MatchResult {
            matches: matched,
            filtered_candidates,
            total_candidates,
        }
    }

    /// Highest rated providers with no filtering applied
    pub fn top_rated<'a>(&self, providers: &'a [Provider]) -> Vec<&'a Provider> {
        self.find_matches(providers, &QuizAnswers::default()).matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_LIMIT)
    }
}
