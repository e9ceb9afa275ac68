//! Validate command: consistency report of a snapshot

use anyhow::Result;
use babybet_application::ApplicationError;
use babybet_domain::{IssueSeverity, ValidationResult};
use std::path::Path;

use crate::commands::{snapshot::load_snapshot, CommandContext};
use crate::output::{colors, JsonFormatter, OutputFormat, PlainFormatter};

/// Check a snapshot file and print every issue found.
///
/// Blocking issues end in an [`ApplicationError::ValidationFailed`].
pub fn run(ctx: &CommandContext, path: &Path) -> Result<()> {
    let game = load_snapshot(path)?;
    let result = game.validate();

    println!("{}", render(ctx, &result)?);

    if !result.valid {
        return Err(ApplicationError::ValidationFailed(format!(
            "{} blocking issue(s) in {}",
            result.errors.len(),
            path.display()
        ))
        .into());
    }
    Ok(())
}

/// Render a validation result in the context's output format
pub fn render(ctx: &CommandContext, result: &ValidationResult) -> Result<String> {
    match ctx.format() {
        OutputFormat::Json => JsonFormatter::format(result),
        OutputFormat::Plain => {
            let rows: Vec<Vec<String>> = result
                .issues()
                .map(|issue| {
                    vec![
                        severity_label(issue.severity).to_string(),
                        issue.path.clone(),
                        issue.message.clone(),
                    ]
                })
                .collect();
            Ok(PlainFormatter::lines(&rows))
        }
        OutputFormat::Table => {
            if result.total_issues() == 0 {
                return Ok(colors::success("Snapshot is consistent.").to_string());
            }

            let mut lines: Vec<String> = result
                .issues()
                .map(|issue| {
                    let label = match issue.severity {
                        IssueSeverity::Error => colors::error("error:"),
                        IssueSeverity::Warning => colors::warning("warning:"),
                    };
                    format!("{} {}", label, issue)
                })
                .collect();
            lines.push(String::new());
            lines.push(
                colors::dim(&format!(
                    "{} error(s), {} warning(s)",
                    result.errors.len(),
                    result.warnings.len()
                ))
                .to_string(),
            );
            Ok(lines.join("\n"))
        }
    }
}

fn severity_label(severity: IssueSeverity) -> &'static str {
    match severity {
        IssueSeverity::Error => "error",
        IssueSeverity::Warning => "warning",
    }
}
