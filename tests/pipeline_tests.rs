//! End-to-end runs of the fit pipeline against files on disk.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use lsq_curves::app::pipeline::run_fit;
use lsq_curves::domain::{DEFAULT_GRID_POINTS, DEFAULT_MAX_POINTS, DEFAULT_MIN_POINTS, FitConfig, ModelKind};
use lsq_curves::io::{write_curves_json, write_results_csv};
use lsq_curves::report::{format_rankings, format_run_summary};

fn config(input: PathBuf) -> FitConfig {
    FitConfig {
        input,
        models: Vec::new(),
        min_points: DEFAULT_MIN_POINTS,
        max_points: DEFAULT_MAX_POINTS,
        grid_points: DEFAULT_GRID_POINTS,
        export_results: None,
        export_curves: None,
    }
}

fn line_points(n: usize) -> String {
    (1..=n).map(|i| format!("{} {}\n", i, 2 * i + 3)).collect()
}

#[test]
fn text_file_runs_through_full_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, line_points(9)).unwrap();

    let run = run_fit(&config(path)).unwrap();
    assert_eq!(run.ingest.stats.n_points, 9);
    assert_eq!(run.results.len(), 6);

    let linear = run.results.get(ModelKind::Linear).unwrap().as_ref().unwrap();
    assert_eq!(linear.equation, "3.0000 + 2.0000 * x");
    assert_abs_diff_eq!(linear.r_squared, 1.0, epsilon = 1e-12);

    let summary = format_run_summary(&run.ingest.source, &run.ingest.stats, &run.results);
    assert!(summary.contains("Best model:"));
    assert!(format_rankings(&run.results).starts_with("rank"));
}

#[test]
fn csv_file_is_read_by_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.csv");
    let mut body = String::from("Y,X\n");
    for i in 1..=8 {
        body.push_str(&format!("{},{}\n", 3.0 * f64::from(i).ln() + 1.0, i));
    }
    fs::write(&path, body).unwrap();

    let run = run_fit(&config(path)).unwrap();
    let best = run.results.best().unwrap();
    assert_eq!(best.model, ModelKind::Logarithmic);
    assert_abs_diff_eq!(best.coefficients[1], 3.0, epsilon = 1e-9);
}

#[test]
fn point_count_outside_bounds_exits_with_3() {
    let dir = TempDir::new().unwrap();

    let few = dir.path().join("few.txt");
    fs::write(&few, line_points(7)).unwrap();
    assert_eq!(run_fit(&config(few)).unwrap_err().exit_code(), 3);

    let many = dir.path().join("many.txt");
    fs::write(&many, line_points(12)).unwrap();
    assert_eq!(run_fit(&config(many)).unwrap_err().exit_code(), 3);
}

#[test]
fn malformed_or_missing_input_exits_with_2() {
    let dir = TempDir::new().unwrap();

    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "1 2\n3 four\n").unwrap();
    let err = run_fit(&config(bad)).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Line 2"), "{err}");

    let missing = dir.path().join("missing.txt");
    assert_eq!(run_fit(&config(missing)).unwrap_err().exit_code(), 2);
}

#[test]
fn model_filter_limits_result_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.txt");
    fs::write(&path, line_points(8)).unwrap();

    let mut cfg = config(path);
    cfg.models = vec![ModelKind::Power, ModelKind::Linear];
    let run = run_fit(&cfg).unwrap();
    assert_eq!(run.results.len(), 2);
    assert!(run.results.get(ModelKind::Cubic).is_none());
}

#[test]
fn exports_write_csv_and_curves_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("points.txt");
    let mut body = String::new();
    for i in 0..8 {
        body.push_str(&format!("{i} {}\n", 1.0 + f64::from(i)));
    }
    fs::write(&path, body).unwrap();
    let run = run_fit(&config(path)).unwrap();

    let csv_path = dir.path().join("out.csv");
    write_results_csv(&csv_path, &run.ingest.dataset, &run.results).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("x,y,linear_fit,linear_residual"));
    // x = 0 rules out the log-based models.
    assert!(!header.contains("power_fit"));
    assert!(!header.contains("logarithmic_fit"));
    assert_eq!(csv.lines().count(), 9);

    let json_path = dir.path().join("curves.json");
    write_curves_json(&json_path, run.ingest.stats, &run.results, 21).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["tool"], "lsq");
    assert_eq!(json["models"].as_array().unwrap().len(), 6);
}
