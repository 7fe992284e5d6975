use tracing::debug;

use crate::error::DomainError;
use crate::model::outcome::predict_outcome;
use crate::model::rates::compute_growth_rates;
use crate::model::{AllocationVector, GrowthRateVector, OutcomeResult};
use crate::scenario::{BASELINE_COST_SHARE, HORIZON_YEARS, Scenario, ScenarioKind};

/// Full result of one prediction request.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub scenario: &'static Scenario,
    pub growth_rates: GrowthRateVector,
    pub outcome: OutcomeResult,
    pub good_strategy: bool,
}

/// Runs the allocation through the selected scenario: implied growth rates,
/// then the linear outcome model, then the good-strategy classification.
pub fn predict(
    kind: ScenarioKind,
    allocation: &AllocationVector,
) -> Result<Prediction, DomainError> {
    let scenario = kind.scenario();
    let growth_rates = compute_growth_rates(
        allocation,
        scenario.budget_growth_rate,
        &BASELINE_COST_SHARE,
        HORIZON_YEARS,
    )?;
    let outcome = predict_outcome(&growth_rates, scenario);
    let good_strategy = is_good_strategy(kind, &outcome);

    debug!(
        scenario = scenario.name,
        percent_dalys_averted = outcome.percent_dalys_averted,
        dalys_averted_millions = outcome.dalys_averted_millions,
        good_strategy,
        "prediction computed"
    );

    Ok(Prediction {
        scenario,
        growth_rates,
        outcome,
        good_strategy,
    })
}

/// Threshold rule: a strategy is good iff its percent DALYs averted reaches
/// the scenario threshold. Inclusive comparison.
pub fn is_good_strategy(kind: ScenarioKind, outcome: &OutcomeResult) -> bool {
    outcome.percent_dalys_averted >= kind.scenario().good_threshold
}
