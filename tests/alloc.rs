use hrh_predict::error::ValidationError;
use hrh_predict::model::alloc::{SUM_TOLERANCE, validate_percentages, validate_shares};

#[test]
fn uniform_allocation_accepted() {
    let allocation = validate_percentages(&[20.0, 20.0, 20.0, 20.0, 20.0]).unwrap();
    for &share in allocation.shares() {
        assert!((share - 0.2).abs() < 1e-12);
    }
}

#[test]
fn exact_hundred_percent_accepted() {
    assert!(validate_percentages(&[50.0, 30.0, 10.0, 5.0, 5.0]).is_ok());
}

#[test]
fn sum_slightly_low_rejected() {
    // 99.99% in total
    let err = validate_percentages(&[19.99, 20.0, 20.0, 20.0, 20.0]).unwrap_err();
    assert!(matches!(err, ValidationError::SumMismatch { .. }));
}

#[test]
fn sum_slightly_high_rejected() {
    // 100.01% in total
    let err = validate_percentages(&[20.01, 20.0, 20.0, 20.0, 20.0]).unwrap_err();
    assert!(matches!(err, ValidationError::SumMismatch { .. }));
}

#[test]
fn sum_within_tolerance_accepted() {
    let nudge = SUM_TOLERANCE / 2.0;
    assert!(validate_shares(&[0.2 + nudge, 0.2, 0.2, 0.2, 0.2]).is_ok());
}

#[test]
fn negative_share_rejected() {
    let err = validate_shares(&[-0.1, 0.3, 0.3, 0.3, 0.2]).unwrap_err();
    assert!(matches!(err, ValidationError::ShareOutOfRange { .. }));
}

#[test]
fn share_above_one_rejected() {
    let err = validate_percentages(&[150.0, 0.0, 0.0, 0.0, -50.0]).unwrap_err();
    assert!(matches!(err, ValidationError::ShareOutOfRange { .. }));
}

#[test]
fn nan_share_rejected() {
    let err = validate_shares(&[f64::NAN, 0.2, 0.2, 0.2, 0.2]).unwrap_err();
    assert!(matches!(err, ValidationError::ShareOutOfRange { .. }));
}

#[test]
fn wrong_length_rejected() {
    let err = validate_shares(&[0.5, 0.5]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::WrongLength {
            expected: 5,
            got: 2
        }
    );

    let err = validate_shares(&[0.2, 0.2, 0.2, 0.2, 0.1, 0.1]).unwrap_err();
    assert!(matches!(err, ValidationError::WrongLength { got: 6, .. }));
}

#[test]
fn single_cadre_allocation_accepted() {
    let allocation = validate_percentages(&[100.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    assert!((allocation.shares()[0] - 1.0).abs() < 1e-12);
}
