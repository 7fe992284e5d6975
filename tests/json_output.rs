use hrh_predict::io::json_writer::{build_report, write_json};
use hrh_predict::model::alloc::validate_percentages;
use hrh_predict::predict::predict;
use hrh_predict::scenario::ScenarioKind;
use hrh_predict::schema::v1::HrhPredictV1;

#[test]
fn report_round_trips_through_serde() {
    let allocation = validate_percentages(&[20.0, 20.0, 20.0, 20.0, 20.0]).unwrap();
    let prediction = predict(ScenarioKind::MainAnalysis, &allocation).unwrap();
    let report = build_report(&prediction, &allocation);

    let json = serde_json::to_string(&report).unwrap();
    let parsed: HrhPredictV1 = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.tool, "hrh-predict");
    assert_eq!(parsed.schema_version, "v1");
    assert_eq!(parsed.scenario.name, "Main analysis");
    assert_eq!(parsed.allocation.len(), 5);
    assert_eq!(parsed.growth_rates.len(), 5);
    assert_eq!(
        parsed.outcome.percent_dalys_averted,
        prediction.outcome.percent_dalys_averted
    );
    assert!(parsed.good_strategy);
}

#[test]
fn report_written_to_disk() {
    let allocation = validate_percentages(&[100.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    let prediction = predict(ScenarioKind::LessBudget, &allocation).unwrap();
    let report = build_report(&prediction, &allocation);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_json(&path, &report).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: HrhPredictV1 = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.scenario.kind, ScenarioKind::LessBudget);
    assert_eq!(parsed.allocation[0].value, 1.0);
}
