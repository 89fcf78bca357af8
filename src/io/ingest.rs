//! Point file ingest and validation.
//!
//! Two input layouts are accepted:
//!
//! - **Text** (default): one point per line, `x y` separated by whitespace.
//!   Blank lines are skipped and a comma decimal separator is accepted
//!   (`1,5 2,25`). `-` reads this format from stdin.
//! - **CSV** (`.csv` extension): a header row with `x` and `y` columns.
//!
//! Any malformed line fails the whole load with its 1-based line number
//! (exit code 2). After parsing, the number of points must fall inside the
//! configured range (exit code 3).

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::info;

use crate::domain::{DataPoint, Dataset, DatasetStats, FitConfig};
use crate::error::AppError;

/// Ingest output: the validated dataset plus where it came from.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub dataset: Dataset,
    pub stats: DatasetStats,
    pub source: String,
}

/// Load points per `config.input` and enforce the point-count bounds.
pub fn load_points(config: &FitConfig) -> Result<IngestedData, AppError> {
    let path = config.input.as_path();
    let points = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| AppError::new(2, format!("Failed to read stdin: {e}")))?;
        parse_text_points(&text)?
    } else if is_csv(path) {
        let file = open(path)?;
        parse_csv_points(file)?
    } else {
        let mut text = String::new();
        open(path)?
            .read_to_string(&mut text)
            .map_err(|e| AppError::new(2, format!("Failed to read '{}': {e}", path.display())))?;
        parse_text_points(&text)?
    };

    check_point_count(points.len(), config.min_points, config.max_points)?;

    let dataset = Dataset::from_points(&points)?;
    let stats = dataset.stats();
    info!("loaded {} points from {}", stats.n_points, path.display());

    Ok(IngestedData {
        dataset,
        stats,
        source: path.display().to_string(),
    })
}

/// Parse the whitespace-separated text layout.
pub fn parse_text_points(text: &str) -> Result<Vec<DataPoint>, AppError> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim().trim_start_matches('\u{feff}');
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(AppError::new(
                2,
                format!("Line {line_no}: expected 2 numbers, found {}.", parts.len()),
            ));
        }

        let x = parse_number(parts[0])
            .ok_or_else(|| AppError::new(2, format!("Line {line_no}: invalid number '{}'.", parts[0])))?;
        let y = parse_number(parts[1])
            .ok_or_else(|| AppError::new(2, format!("Line {line_no}: invalid number '{}'.", parts[1])))?;
        points.push(DataPoint { x, y });
    }
    Ok(points)
}

/// Parse the CSV layout (`x`,`y` header columns; extra columns are ignored).
pub fn parse_csv_points<R: Read>(reader: R) -> Result<Vec<DataPoint>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    let x_idx = column(&header_map, "x")?;
    let y_idx = column(&header_map, "y")?;

    let mut points = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("Line {line}: CSV parse error: {e}")))?;

        let field = |i: usize, name: &str| -> Result<f64, AppError> {
            let raw = record.get(i).unwrap_or("");
            parse_number(raw).ok_or_else(|| {
                AppError::new(2, format!("Line {line}: invalid `{name}` value '{raw}'."))
            })
        };
        points.push(DataPoint {
            x: field(x_idx, "x")?,
            y: field(y_idx, "y")?,
        });
    }
    Ok(points)
}

/// Enforce `min <= n <= max`.
pub fn check_point_count(n: usize, min: usize, max: usize) -> Result<(), AppError> {
    if n < min || n > max {
        return Err(AppError::new(
            3,
            format!("Expected between {min} and {max} points, found {n}."),
        ));
    }
    Ok(())
}

fn open(path: &Path) -> Result<File, AppError> {
    File::open(path).map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn parse_number(s: &str) -> Option<f64> {
    let v = s.trim().replace(',', ".").parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required column: `{name}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_comma_decimals_and_blank_lines() {
        let points = parse_text_points("1,5 2,25\n\n  3\t4.5  \n").unwrap();
        assert_eq!(points, vec![DataPoint { x: 1.5, y: 2.25 }, DataPoint { x: 3.0, y: 4.5 }]);
    }

    #[test]
    fn text_reports_line_of_bad_field_count() {
        let err = parse_text_points("1 2\n3 4 5\n").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Line 2:"), "{err}");
    }

    #[test]
    fn text_rejects_non_numbers() {
        let err = parse_text_points("1 abc\n").unwrap_err();
        assert!(err.to_string().contains("invalid number 'abc'"));
        assert!(parse_text_points("1 inf\n").is_err());
    }

    #[test]
    fn csv_reads_named_columns_in_any_order() {
        let data = "\u{feff}Y,label,X\n2.0,a,1.0\n4.0,b,2.0\n";
        let points = parse_csv_points(data.as_bytes()).unwrap();
        assert_eq!(points, vec![DataPoint { x: 1.0, y: 2.0 }, DataPoint { x: 2.0, y: 4.0 }]);
    }

    #[test]
    fn csv_requires_both_columns() {
        let err = parse_csv_points("x,z\n1,2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("`y`"));
    }

    #[test]
    fn point_count_bounds_are_inclusive() {
        assert!(check_point_count(8, 8, 11).is_ok());
        assert!(check_point_count(11, 8, 11).is_ok());
        assert_eq!(check_point_count(7, 8, 11).unwrap_err().exit_code(), 3);
        assert_eq!(check_point_count(12, 8, 11).unwrap_err().exit_code(), 3);
    }
}
