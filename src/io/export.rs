//! Export per-point results to CSV, and points to the text ingest layout.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per input point, with fitted value and residual columns
//! for every model that could be fit.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{Dataset, ResultSet};
use crate::error::AppError;

/// Write per-point results to a CSV file.
pub fn write_results_csv(path: &Path, data: &Dataset, results: &ResultSet) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_results(&mut file, data, results)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV: {e}")))
}

/// Render per-point results as CSV into any writer.
pub fn write_results<W: Write>(out: &mut W, data: &Dataset, results: &ResultSet) -> std::io::Result<()> {
    let fits: Vec<_> = results.fitted().collect();

    let mut header = String::from("x,y");
    for fit in &fits {
        header.push_str(&format!(",{0}_fit,{0}_residual", fit.model.label()));
    }
    writeln!(out, "{header}")?;

    for (i, p) in data.points().enumerate() {
        let mut row = format!("{},{}", p.x, p.y);
        for fit in &fits {
            row.push_str(&format!(",{:.10},{:.10}", fit.predicted[i], fit.residuals[i]));
        }
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Render points in the whitespace text layout read by `ingest`.
pub fn write_points<W: Write>(out: &mut W, data: &Dataset) -> std::io::Result<()> {
    for p in data.points() {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::run_models;
    use crate::domain::ModelKind;

    #[test]
    fn csv_has_columns_for_fitted_models_only() {
        let data = Dataset::from_xy(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
        // Logarithmic is unfit (x = 0) and gets no columns.
        let results = run_models(&data, &[ModelKind::Linear, ModelKind::Logarithmic]);

        let mut buf = Vec::new();
        write_results(&mut buf, &data, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "x,y,linear_fit,linear_residual");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,1,"));
    }

    #[test]
    fn points_round_trip_through_text_layout() {
        let data = Dataset::from_xy(vec![1.5, -2.0], vec![0.25, 1e-3]).unwrap();
        let mut buf = Vec::new();
        write_points(&mut buf, &data).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let parsed = crate::io::ingest::parse_text_points(&text).unwrap();
        assert_eq!(Dataset::from_points(&parsed).unwrap(), data);
    }
}
