//! Rendering of search reports for the command line.
//!
//! Text output for people and a serializable record for scripts. Nothing here
//! affects the search itself.

use serde::Serialize;

use crate::planner::{SearchReport, Strategy};
use crate::puzzles::{Difficulty, benchmarks};

/// A report as emitted in JSON.
#[derive(Debug, Serialize)]
pub struct ReportDto {
    /// Strategy display name
    pub strategy: String,

    /// "success", "no solution" or "expansion limit"
    pub status: String,

    /// Number of moves on the path
    pub cost: usize,

    /// Distinct yards expanded
    pub nodes_expanded: usize,

    /// Largest frontier observed
    pub max_frontier: usize,

    /// Wall-clock time in milliseconds
    pub elapsed_ms: f64,

    /// Expansions per second, 0 when no time was measured
    pub nodes_per_second: f64,

    /// Moves in order, e.g. "3: main -> siding 1"
    pub moves: Vec<String>,
}

impl ReportDto {
    /// Build the DTO for one strategy's report.
    pub fn new(strategy: Strategy, report: &SearchReport) -> Self {
        Self {
            strategy: strategy.name().to_string(),
            status: report.status.to_string(),
            cost: report.cost,
            nodes_expanded: report.nodes_expanded,
            max_frontier: report.max_frontier,
            elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
            nodes_per_second: report.nodes_per_second(),
            moves: report.moves.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Join lines, ending each with a newline.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|l| l + "\n").collect()
}

/// Render the move-by-move solution for one strategy.
pub fn solution_text(strategy: Strategy, report: &SearchReport) -> String {
    let mut out = vec![format!("{} - {}", strategy, report.status)];

    if !report.is_success() {
        out.push(format!(
            "  no plan found after {} expansions",
            report.nodes_expanded
        ));
        return join_lines(out);
    }

    if let Some(start) = report.states.first() {
        out.push(format!("  start   {}", start));
    }
    for (i, (mv, yard)) in report.steps().enumerate() {
        out.push(format!("  {:>3}. {}", i + 1, mv));
        out.push(format!("        {}", yard));
    }
    out.push(format!("  cost {}", report.cost));
    join_lines(out)
}

/// Render a side-by-side comparison of several strategies.
pub fn comparison_table(results: &[(Strategy, SearchReport)]) -> String {
    let header = [
        "strategy",
        "status",
        "cost",
        "expanded",
        "peak frontier",
        "time (ms)",
        "nodes/s",
    ]
    .map(str::to_string);
    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|(strategy, report)| {
            [
                strategy.to_string(),
                report.status.to_string(),
                if report.is_success() {
                    report.cost.to_string()
                } else {
                    "-".to_string()
                },
                report.nodes_expanded.to_string(),
                report.max_frontier.to_string(),
                format!("{:.3}", report.elapsed.as_secs_f64() * 1000.0),
                format!("{:.0}", report.nodes_per_second()),
            ]
        })
        .collect();

    let mut widths = header.each_ref().map(String::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let rule = widths.map(|w| "-".repeat(w));
    let line = |cells: &[String; 7]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = vec![line(&header), line(&rule)];
    out.extend(rows.iter().map(line));
    join_lines(out)
}

/// Render the built-in benchmarks grouped by difficulty.
pub fn benchmark_list() -> String {
    let all = benchmarks();
    let mut out = Vec::new();

    for difficulty in Difficulty::ALL {
        let group: Vec<_> = all
            .iter()
            .filter(|(_, p)| p.difficulty == Some(difficulty))
            .collect();
        if group.is_empty() {
            continue;
        }

        out.push(format!("{}:", difficulty.as_str().to_uppercase()));
        for (name, puzzle) in group {
            let cost = puzzle
                .expected_cost
                .map(|c| format!(", {c} moves"))
                .unwrap_or_default();
            let description = puzzle
                .description
                .as_deref()
                .map(|d| format!("  {d}"))
                .unwrap_or_default();
            out.push(format!(
                "  {:<8} {} -> {}  ({} sidings{}){}",
                name,
                puzzle.main_line.join(" "),
                puzzle.goal.join(" "),
                puzzle.sidings.len(),
                cost,
                description,
            ));
        }
    }
    join_lines(out)
}
