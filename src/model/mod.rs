pub mod alloc;
pub mod outcome;
pub mod rates;

use crate::cadre::{Cadre, N_CADRES};

/// Validated budget allocation: 5 fractions in [0, 1] summing to 1.
/// Only constructible through `alloc::validate_shares` or
/// `alloc::validate_percentages`, so holding one implies the invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationVector {
    shares: [f64; N_CADRES],
}

impl AllocationVector {
    pub(crate) fn new_unchecked(shares: [f64; N_CADRES]) -> Self {
        Self { shares }
    }

    pub fn shares(&self) -> &[f64; N_CADRES] {
        &self.shares
    }

    pub fn share(&self, cadre: Cadre) -> f64 {
        self.shares[cadre.index()]
    }
}

/// Implied compound annual growth rate per cadre, derived from an
/// allocation under one scenario's budget assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRateVector {
    pub rates: [f64; N_CADRES],
}

/// Predicted health outcome over the ten-year horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeResult {
    pub percent_dalys_averted: f64,
    pub dalys_averted_millions: f64,
}
