//! Terminal formatting for run summaries and rankings.

use crate::domain::{DatasetStats, FitResult, ModelKind, ResultSet};

/// Format the full run summary (dataset stats + per-model fits + best model).
pub fn format_run_summary(source: &str, stats: &DatasetStats, results: &ResultSet) -> String {
    let mut out = String::new();

    out.push_str("=== lsq - Least-Squares Curve Fit ===\n");
    out.push_str(&format!("Input: {source}\n"));
    out.push_str(&format!(
        "Points: n={} | x=[{:.4}, {:.4}] | y=[{:.4}, {:.4}]\n",
        stats.n_points, stats.x_min, stats.x_max, stats.y_min, stats.y_max
    ));

    let best = results.best().map(|f| f.model);

    out.push_str("\nModels:\n");
    for (model, outcome) in results.iter() {
        match outcome {
            Ok(fit) => {
                let chosen = if Some(model) == best { "*" } else { " " };
                out.push_str(&format!(
                    "{chosen} {:<12} y = {}\n",
                    model.display_name(),
                    fit.equation
                ));
                out.push_str(&format!(
                    "  {:<12} RMSE={:.4} R²={:.4} ({})\n",
                    "",
                    fit.rmse,
                    fit.r_squared,
                    fit.r_squared_band.label()
                ));
            }
            Err(err) => {
                out.push_str(&format!("  (unfit {}) {err}\n", model.display_name()));
            }
        }
    }

    if let Some(Ok(linear)) = results.get(ModelKind::Linear) {
        if let Some(corr) = &linear.correlation {
            out.push_str(&format!(
                "\nPearson correlation: r={:.4} ({})\n",
                corr.pearson,
                corr.band.label()
            ));
        }
    }

    out.push_str("\nBest model: ");
    match results.best() {
        Some(fit) => out.push_str(&format!("{} (R²={:.4})\n", fit.model.display_name(), fit.r_squared)),
        None => out.push_str("none (no model could be fit)\n"),
    }

    out
}

/// Format the ranking table (fitted models only, best first).
pub fn format_rankings(results: &ResultSet) -> String {
    let ranked = results.ranked();
    let mut out = String::new();

    out.push_str(
        format!(
            "{:<4} {:<12} {:>10} {:>10} {:<10} {}\n",
            "rank", "model", "r2", "rmse", "fit", "equation"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<4} {:-<12} {:-<10} {:-<10} {:-<10} {:-<8}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (i, fit) in ranked.iter().enumerate() {
        out.push_str(&format_rank_row(i + 1, fit));
        out.push('\n');
    }

    let unfit: Vec<&str> = results.unfit().map(|(m, _)| m.label()).collect();
    if !unfit.is_empty() {
        out.push_str(&format!("unfit: {}\n", unfit.join(", ")));
    }

    out
}

fn format_rank_row(rank: usize, fit: &FitResult) -> String {
    format!(
        "{:<4} {:<12} {:>10.4} {:>10.4} {:<10} {}",
        rank,
        fit.model.label(),
        fit.r_squared,
        fit.rmse,
        fit.r_squared_band.label(),
        fit.equation
    )
}
