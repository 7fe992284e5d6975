use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::scenario::ScenarioKind;

#[derive(Debug, Parser)]
#[command(
    name = "hrh-predict",
    version,
    about = "Predicts the health outcome of HRH expansion in Malawi, 2025-2034"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Predict the outcome of one allocation under one scenario
    Predict(PredictArgs),
    /// List the five fixed prediction scenarios
    Scenarios,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, help = "Budget proportion for the Clinical cadre (in %)")]
    pub clinical: f64,

    #[arg(long, help = "Budget proportion for the DCSA cadre (in %)")]
    pub dcsa: f64,

    #[arg(long, help = "Budget proportion for the Nursing and Midwifery cadre (in %)")]
    pub nursing: f64,

    #[arg(long, help = "Budget proportion for the Pharmacy cadre (in %)")]
    pub pharmacy: f64,

    #[arg(long, help = "Budget proportion for the Other cadre (in %)")]
    pub other: f64,

    #[arg(long, value_enum, default_value_t = ScenarioArg::MainAnalysis)]
    pub scenario: ScenarioArg,

    #[arg(long, default_value_t = false, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Write the JSON report to this path")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    MainAnalysis,
    MoreBudget,
    LessBudget,
    DefaultConsumables,
    MaxHealthSystem,
}

impl From<ScenarioArg> for ScenarioKind {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::MainAnalysis => ScenarioKind::MainAnalysis,
            ScenarioArg::MoreBudget => ScenarioKind::MoreBudget,
            ScenarioArg::LessBudget => ScenarioKind::LessBudget,
            ScenarioArg::DefaultConsumables => ScenarioKind::DefaultConsumables,
            ScenarioArg::MaxHealthSystem => ScenarioKind::MaxHealthSystem,
        }
    }
}
