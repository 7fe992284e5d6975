use serde::{Deserialize, Serialize};

use crate::cadre::Cadre;
use crate::scenario::ScenarioKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub kind: ScenarioKind,
    pub name: String,
    pub budget_growth_rate: f64,
    pub good_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadreValue {
    pub cadre: Cadre,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub percent_dalys_averted: f64,
    pub dalys_averted_millions: f64,
}

/// Versioned prediction report, the stable JSON surface of the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrhPredictV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub scenario: ScenarioMeta,
    pub allocation: Vec<CadreValue>,
    pub growth_rates: Vec<CadreValue>,
    pub outcome: Outcome,
    pub good_strategy: bool,
}
