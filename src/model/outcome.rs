use crate::cadre::N_CADRES;
use crate::model::{GrowthRateVector, OutcomeResult};
use crate::scenario::Scenario;

/// Applies a scenario's pre-fitted linear model to the growth rates.
pub fn predict_outcome(growth_rates: &GrowthRateVector, scenario: &Scenario) -> OutcomeResult {
    let mut percent = scenario.model_constant;
    for i in 0..N_CADRES {
        percent += scenario.model_coefficients[i] * growth_rates.rates[i];
    }

    OutcomeResult {
        percent_dalys_averted: percent,
        dalys_averted_millions: percent * scenario.outcome_scale_millions,
    }
}
