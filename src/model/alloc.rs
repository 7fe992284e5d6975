use crate::cadre::{Cadre, N_CADRES};
use crate::error::ValidationError;
use crate::model::AllocationVector;

/// Allowed deviation of the share sum from 1. The upstream check compared
/// against exactly zero, which rejects sums off by one ulp; a nonzero
/// tolerance avoids those floating-point false negatives while still
/// rejecting anything off by 0.01 percentage points or more.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Validates raw fractional shares (each in [0, 1], summing to 1).
pub fn validate_shares(shares: &[f64]) -> Result<AllocationVector, ValidationError> {
    if shares.len() != N_CADRES {
        return Err(ValidationError::WrongLength {
            expected: N_CADRES,
            got: shares.len(),
        });
    }

    let mut out = [0.0f64; N_CADRES];
    for (i, &value) in shares.iter().enumerate() {
        if !value.is_finite() || value < 0.0 || value > 1.0 {
            return Err(ValidationError::ShareOutOfRange {
                cadre: Cadre::ALL[i].label(),
                value,
            });
        }
        out[i] = value;
    }

    let sum: f64 = out.iter().sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(ValidationError::SumMismatch {
            sum,
            tolerance: SUM_TOLERANCE,
        });
    }

    Ok(AllocationVector::new_unchecked(out))
}

/// Validates percentage inputs (each in [0, 100], summing to 100), as
/// supplied by the presentation layer. Divides by 100 before validating.
pub fn validate_percentages(percentages: &[f64]) -> Result<AllocationVector, ValidationError> {
    let shares: Vec<f64> = percentages.iter().map(|p| p / 100.0).collect();
    validate_shares(&shares)
}
