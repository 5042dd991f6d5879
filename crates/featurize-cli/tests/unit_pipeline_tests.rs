//! Unit tests for the pipeline stages

use featurize_cli::{run_features, run_pipeline, PipelineConfig};
use featurize_core::Table;
use std::path::Path;

const RAW: &str = "clouds raw export
first cloud
 1.0   2.0
 3.0   4.0
second cloud
 5.0   6.0
 7.0   8.0
";

fn pipeline_config(runs: &Path, data_source: &Path, feature_eng: &str) -> PipelineConfig {
    let yaml = format!(
        r#"
run_config:
  data_source: {}
  output:
    runs: {}
create_dataset:
  data:
    columns: [visible_mean, IR_max]
  data_prep:
    first_cloud: {{left: 2, right: 4}}
    second_cloud: {{left: 5, right: 7}}
generate_features:
  feature_col: [visible_mean, IR_max]
  target_col: class
  feature_eng:
{}
"#,
        data_source.display(),
        runs.display(),
        feature_eng
    );
    PipelineConfig::from_yaml_str(&yaml).unwrap()
}

const PRODUCT: &str = r#"
    - target: product
      operation: multiply
      source1: visible_mean
      source2: IR_max
"#;

#[test]
fn test_full_pipeline_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("clouds.data");
    std::fs::write(&source, RAW).unwrap();
    let config = pipeline_config(&dir.path().join("runs"), &source, PRODUCT);

    let run = run_pipeline(&config).unwrap();

    assert!(run.root.starts_with(dir.path().join("runs")));
    assert_eq!(std::fs::read_to_string(run.raw_data()).unwrap(), RAW);

    let clean = load(&run.clean_data());
    assert_eq!(clean.column_names(), &["visible_mean", "IR_max", "class"]);
    assert_eq!(clean.num_rows(), 4);

    let features = load(&run.features());
    assert_eq!(
        features.column("product"),
        Some(&[2.0, 12.0, 30.0, 56.0][..])
    );
}

#[test]
fn test_pipeline_stops_on_feature_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("clouds.data");
    std::fs::write(&source, RAW).unwrap();
    let bad = r#"
    - target: broken
      operation: power
      source1: visible_mean
      source2: IR_max
"#;
    let config = pipeline_config(&dir.path().join("runs"), &source, bad);

    let error = run_pipeline(&config).unwrap_err();
    assert!(format!("{:#}", error).contains("Feature generation failed"));

    // The clean dataset is saved before the failing stage
    let run_root = std::fs::read_dir(dir.path().join("runs"))
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    assert!(run_root.join("processed").join("clouds.csv").is_file());
    assert!(!run_root.join("processed").join("features.csv").exists());
}

#[test]
fn test_pipeline_missing_raw_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = pipeline_config(
        &dir.path().join("runs"),
        &dir.path().join("absent.data"),
        PRODUCT,
    );

    let error = run_pipeline(&config).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to copy raw data"));
}

#[test]
fn test_features_only_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clouds.csv");
    std::fs::write(&input, "visible_mean,IR_max,class\n1,2,0\n3,4,1\n").unwrap();
    let output = dir.path().join("out").join("features.csv");
    let config = pipeline_config(dir.path(), &dir.path().join("unused.data"), PRODUCT);

    run_features(&config, &input, &output).unwrap();

    let features = load(&output);
    assert_eq!(
        features.column_names(),
        &["visible_mean", "IR_max", "class", "product"]
    );
    assert_eq!(features.column("product"), Some(&[2.0, 12.0][..]));
}

fn load(path: &Path) -> Table {
    featurize_runtime::load_table(path).unwrap()
}
