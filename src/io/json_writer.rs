use std::path::Path;

use anyhow::{Context, Result};

use crate::cadre::Cadre;
use crate::model::AllocationVector;
use crate::predict::Prediction;
use crate::schema::v1::{CadreValue, HrhPredictV1, Outcome, ScenarioMeta};

pub fn build_report(prediction: &Prediction, allocation: &AllocationVector) -> HrhPredictV1 {
    let scenario = prediction.scenario;

    let allocation_values = Cadre::ALL
        .iter()
        .map(|&cadre| CadreValue {
            cadre,
            value: allocation.share(cadre),
        })
        .collect::<Vec<_>>();

    let growth_rate_values = Cadre::ALL
        .iter()
        .map(|&cadre| CadreValue {
            cadre,
            value: prediction.growth_rates.rates[cadre.index()],
        })
        .collect::<Vec<_>>();

    HrhPredictV1 {
        tool: "hrh-predict".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        scenario: ScenarioMeta {
            kind: scenario.kind,
            name: scenario.name.to_string(),
            budget_growth_rate: scenario.budget_growth_rate,
            good_threshold: scenario.good_threshold,
        },
        allocation: allocation_values,
        growth_rates: growth_rate_values,
        outcome: Outcome {
            percent_dalys_averted: prediction.outcome.percent_dalys_averted,
            dalys_averted_millions: prediction.outcome.dalys_averted_millions,
        },
        good_strategy: prediction.good_strategy,
    }
}

pub fn write_json(path: &Path, report: &HrhPredictV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
