use crate::cadre::{Cadre, N_CADRES};
use crate::error::DomainError;
use crate::model::{AllocationVector, GrowthRateVector};

/// Converts an allocation into the implied compound annual growth rate per
/// cadre: the rate `x_i` at which cadre i's cost must compound over the
/// horizon so that it ends at its baseline share plus its allocated slice
/// of the total compounded budget growth.
///
/// `x_i = (1 + a_i * ((1+R)^H - 1) / f_i)^(1/H) - 1`
pub fn compute_growth_rates(
    allocation: &AllocationVector,
    budget_growth_rate: f64,
    baseline_cost_share: &[f64; N_CADRES],
    horizon_years: u32,
) -> Result<GrowthRateVector, DomainError> {
    for (i, &share) in baseline_cost_share.iter().enumerate() {
        if !(share > 0.0) {
            return Err(DomainError::NonPositiveBaselineShare {
                cadre: Cadre::ALL[i].label(),
                value: share,
            });
        }
    }

    let total_growth = (1.0 + budget_growth_rate).powi(horizon_years as i32) - 1.0;
    let inv_horizon = 1.0 / f64::from(horizon_years);

    let mut rates = [0.0f64; N_CADRES];
    for i in 0..N_CADRES {
        let a = allocation.shares()[i];
        rates[i] = (1.0 + a * total_growth / baseline_cost_share[i]).powf(inv_horizon) - 1.0;
    }

    Ok(GrowthRateVector { rates })
}
