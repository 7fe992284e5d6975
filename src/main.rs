use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hrh_predict::cli::{Cli, Commands, PredictArgs};
use hrh_predict::io;
use hrh_predict::model::alloc;
use hrh_predict::predict::predict;
use hrh_predict::scenario::ScenarioKind;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Predict(args) => run_predict(args),
        Commands::Scenarios => {
            print_scenario_list();
            Ok(())
        }
    }
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let percentages = [
        args.clinical,
        args.dcsa,
        args.nursing,
        args.pharmacy,
        args.other,
    ];
    let allocation = alloc::validate_percentages(&percentages)
        .context("the input proportions are not a valid allocation, please re-input")?;

    let kind: ScenarioKind = args.scenario.into();
    let prediction = predict(kind, &allocation)?;

    if let Some(path) = &args.out {
        let report = io::json_writer::build_report(&prediction, &allocation);
        io::json_writer::write_json(path, &report)?;
        tracing::info!(path = %path.display(), "report written");
    }

    if args.json {
        let report = io::json_writer::build_report(&prediction, &allocation);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", io::summary::format_summary(&prediction, &allocation));
    }
    Ok(())
}

fn print_scenario_list() {
    println!("scenarios:");
    for kind in ScenarioKind::ALL {
        let s = kind.scenario();
        println!(
            "{}\tbudget growth {:.1}%/yr\tgood threshold {:.0}%",
            s.name,
            s.budget_growth_rate * 100.0,
            s.good_threshold * 100.0
        );
    }
}
