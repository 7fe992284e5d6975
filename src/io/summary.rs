use crate::model::AllocationVector;
use crate::predict::Prediction;

/// Renders the human-readable result, matching the published app's wording:
/// percent DALYs averted over 2025-2034 and the million-DALY equivalent
/// against the no-expansion baseline.
pub fn format_summary(prediction: &Prediction, allocation: &AllocationVector) -> String {
    let pct = prediction.outcome.percent_dalys_averted * 100.0;
    let dalys = prediction.outcome.dalys_averted_millions;

    let mut out = String::new();
    out.push_str(&format!("hrh-predict v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!("Scenario: {}\n", prediction.scenario.name));
    out.push_str(&format!(
        "Allocation: {}\n",
        allocation
            .shares()
            .iter()
            .map(|s| format!("{:.1}%", s * 100.0))
            .collect::<Vec<_>>()
            .join(" / ")
    ));
    out.push_str(&format!(
        "Percent DALYs averted: {:.2}% in the 10 year period of 2025-2034\n",
        pct
    ));
    out.push_str(&format!(
        "DALYs averted: {:.2} million as compared with no expansion scenario\n",
        dalys
    ));
    if prediction.good_strategy {
        out.push_str("Interpretation: this is a good strategy\n");
    } else {
        out.push_str("Interpretation: there should be better strategies\n");
    }
    out
}
