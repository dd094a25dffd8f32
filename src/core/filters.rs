use crate::models::{Provider, DeliveryMode, BudgetAnswer, StudyModeAnswer, StateAnswer};

/// Price bands used by the budget question
pub const BUDGET_LOW_CEILING: f64 = 4000.0;
pub const BUDGET_MID_CEILING: f64 = 5000.0;

/// Stage 1: state coverage. `other` means no state constraint.
#[inline]
pub fn serves_state(provider: &Provider, state: &StateAnswer) -> bool {
    match state {
        StateAnswer::Other => true,
        StateAnswer::Code(code) => provider.serves_state(code),
    }
}

/// Stage 2: price band or funding eligibility.
///
/// `over-5000` is offered to users but has no price predicate, so it passes
/// every provider through. Unrecognized values do the same.
#[inline]
pub fn within_budget(provider: &Provider, budget: BudgetAnswer) -> bool {
    let price = provider.pricing.price;
    match budget {
        BudgetAnswer::Under4000 => price < BUDGET_LOW_CEILING,
        BudgetAnswer::From4000To5000 => {
            (BUDGET_LOW_CEILING..=BUDGET_MID_CEILING).contains(&price)
        }
        BudgetAnswer::VetLoan => provider.pricing.funding_eligible,
        BudgetAnswer::Over5000 | BudgetAnswer::Unrecognized => true,
    }
}

/// Stage 3: delivery mode.
///
/// `blended` is accepted as an answer but not filtered on.
#[inline]
pub fn offers_study_mode(provider: &Provider, mode: StudyModeAnswer) -> bool {
    match mode {
        StudyModeAnswer::Online => provider.offers(DeliveryMode::Online),
        StudyModeAnswer::FaceToFace => provider.offers(DeliveryMode::FaceToFace),
        StudyModeAnswer::Blended | StudyModeAnswer::Unrecognized => true,
    }
}
