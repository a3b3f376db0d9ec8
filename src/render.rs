//! Text and JSON reports for an [`Assessment`]

use colored::{ColoredString, Colorize};
use tabled::{settings::Style, Table, Tabled};

use crate::assess::{Assessment, Outcome};
use crate::breakdown::CycleBreakdown;
use crate::error::Result;
use crate::format::{format_km, format_minutes};

#[derive(Debug, Clone, Copy)]
enum Tone {
    Error,
    Warning,
    Success,
    Info,
}

impl Tone {
    fn paint(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        let painted: ColoredString = match self {
            Tone::Error => text.red().bold(),
            Tone::Warning => text.yellow(),
            Tone::Success => text.green().bold(),
            Tone::Info => text.blue(),
        };
        painted.to_string()
    }
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Segment")]
    segment: &'static str,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Time (min)")]
    minutes: String,
}

/// Breakdown table for one cycle
pub fn breakdown_table(breakdown: &CycleBreakdown, run_minutes: f64, walk_minutes: f64) -> String {
    let rows = vec![
        BreakdownRow {
            segment: "Target",
            distance: format_km(breakdown.target_km),
            minutes: format_minutes(breakdown.cycle_minutes),
        },
        BreakdownRow {
            segment: "Running",
            distance: format_km(breakdown.run_km),
            minutes: format_minutes(run_minutes),
        },
        BreakdownRow {
            segment: "Walking",
            distance: format_km(breakdown.walk_km),
            minutes: format_minutes(walk_minutes),
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Terminal report
pub fn render_text(assessment: &Assessment, color: bool) -> String {
    let mut lines = Vec::new();

    if let Some(advisory) = assessment.advisory {
        lines.push(Tone::Warning.paint(advisory.message(), color));
    }

    let messages = assessment.messages();
    match &assessment.outcome {
        Outcome::InvalidInput { .. } => {
            lines.extend(messages.iter().map(|m| Tone::Error.paint(m, color)));
        }
        Outcome::Valid { breakdown, .. } => {
            lines.extend(messages.iter().map(|m| Tone::Success.paint(m, color)));
            lines.push(String::new());
            lines.push(format!(
                "Breakdown per {}-minute cycle:",
                format_minutes(breakdown.cycle_minutes)
            ));
            lines.push(breakdown_table(
                breakdown,
                assessment.plan.run_duration,
                assessment.plan.walk_duration,
            ));
        }
        Outcome::Degenerate { .. } => {
            lines.extend(messages.iter().map(|m| Tone::Info.paint(m, color)));
        }
        Outcome::NoSolution => {
            lines.extend(messages.iter().map(|m| Tone::Error.paint(m, color)));
        }
    }

    lines.join("\n")
}

/// Pretty-printed JSON report
pub fn render_json(assessment: &Assessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}
