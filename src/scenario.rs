use serde::{Deserialize, Serialize};

use crate::cadre::N_CADRES;

/// Prediction horizon in years (2025-2034).
pub const HORIZON_YEARS: u32 = 10;

/// Current (as of 2024) fraction of total workforce cost attributable to
/// each cadre, in cadre order. Shared by all scenarios.
pub const BASELINE_COST_SHARE: [f64; N_CADRES] = [0.2178, 0.2349, 0.4514, 0.0269, 0.0690];

/// Selector for one of the five fixed prediction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    MainAnalysis,
    MoreBudget,
    LessBudget,
    DefaultConsumables,
    MaxHealthSystem,
}

/// One fixed scenario configuration: the annual budget growth assumption
/// plus the pre-fitted linear model mapping per-cadre growth rates to
/// percent DALYs averted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub name: &'static str,
    /// Annual growth rate of the total expansion budget.
    pub budget_growth_rate: f64,
    pub model_constant: f64,
    /// Regression coefficients, in cadre order.
    pub model_coefficients: [f64; N_CADRES],
    /// Converts percent DALYs averted to absolute DALYs averted in millions.
    pub outcome_scale_millions: f64,
    /// A strategy is "good" iff percent DALYs averted >= this threshold.
    pub good_threshold: f64,
}

pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        kind: ScenarioKind::MainAnalysis,
        name: "Main analysis",
        budget_growth_rate: 0.042,
        model_constant: -0.0699,
        model_coefficients: [1.0046, 0.4170, 1.0309, 0.2691, 0.1965],
        outcome_scale_millions: 94.22,
        good_threshold: 0.06,
    },
    Scenario {
        kind: ScenarioKind::MoreBudget,
        name: "Sensitivity analysis with more budget",
        budget_growth_rate: 0.058,
        model_constant: -0.0694,
        model_coefficients: [0.7980, 0.3189, 0.7588, 0.2332, 0.1568],
        outcome_scale_millions: 93.90,
        good_threshold: 0.08,
    },
    Scenario {
        kind: ScenarioKind::LessBudget,
        name: "Sensitivity analysis with less budget",
        budget_growth_rate: 0.026,
        model_constant: -0.0850,
        model_coefficients: [1.3943, 0.7054, 1.6656, 0.3415, 0.2941],
        outcome_scale_millions: 94.31,
        good_threshold: 0.03,
    },
    Scenario {
        kind: ScenarioKind::DefaultConsumables,
        name: "Sensitivity analysis with default consumable availability",
        budget_growth_rate: 0.042,
        model_constant: -0.0529,
        model_coefficients: [0.6820, 0.2670, 0.7319, 0.1569, 0.1205],
        outcome_scale_millions: 112.18,
        good_threshold: 0.04,
    },
    Scenario {
        kind: ScenarioKind::MaxHealthSystem,
        name: "Sensitivity analysis with maximal health system function",
        budget_growth_rate: 0.042,
        model_constant: -0.0963,
        model_coefficients: [1.1703, 0.3473, 1.5802, 0.1734, 0.1676],
        outcome_scale_millions: 128.05,
        good_threshold: 0.05,
    },
];

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::MainAnalysis,
        ScenarioKind::MoreBudget,
        ScenarioKind::LessBudget,
        ScenarioKind::DefaultConsumables,
        ScenarioKind::MaxHealthSystem,
    ];

    pub fn scenario(self) -> &'static Scenario {
        match self {
            ScenarioKind::MainAnalysis => &SCENARIOS[0],
            ScenarioKind::MoreBudget => &SCENARIOS[1],
            ScenarioKind::LessBudget => &SCENARIOS[2],
            ScenarioKind::DefaultConsumables => &SCENARIOS[3],
            ScenarioKind::MaxHealthSystem => &SCENARIOS[4],
        }
    }
}
