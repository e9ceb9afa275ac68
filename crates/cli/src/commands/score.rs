//! Score command: per-participant breakdown for the game owner

use anyhow::Result;
use babybet_application::GameScoreReport;
use babybet_domain::{GameSnapshot, ParticipantScore, QuestionScore};
use std::path::Path;

use crate::commands::{snapshot::load_snapshot, CommandContext};
use crate::output::{colors, format_score, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Show every participant's scores for a snapshot file
pub fn run(ctx: &CommandContext, path: &Path) -> Result<()> {
    let game = load_snapshot(path)?;
    let report = ctx.service.report(&game)?;
    ctx.print_warnings(&report.warnings);

    println!("{}", render(ctx, &game, &report)?);
    Ok(())
}

/// Render a score report in the context's output format
pub fn render(ctx: &CommandContext, game: &GameSnapshot, report: &GameScoreReport) -> Result<String> {
    match ctx.format() {
        OutputFormat::Json => JsonFormatter::format(report),
        OutputFormat::Plain => Ok(PlainFormatter::lines(&plain_rows(report))),
        OutputFormat::Table => Ok(table(ctx, game, report)),
    }
}

fn table(ctx: &CommandContext, game: &GameSnapshot, report: &GameScoreReport) -> String {
    let mut out = format!(
        "{}\n",
        colors::bold(&format!("Scores: {} ({})", game.name, report.status))
    );

    if report.is_empty() {
        out.push_str(&colors::warning("Nothing to score yet: publish questions and enter the actual results.").to_string());
        return out;
    }

    let published = game.published();
    let mut headers = vec!["Participant"];
    headers.extend(published.iter().map(|q| q.text.as_str()));
    headers.push("Total");

    let rows: Vec<Vec<String>> = report
        .scores
        .iter()
        .map(|score| {
            let mut row = vec![score.display_name().to_string()];
            row.extend(published.iter().map(|q| match find(score, &q.text) {
                Some(qs) => cell(qs, ctx.config.decimals),
                None => "-".to_string(),
            }));
            row.push(format_score(score.total_score, ctx.config.decimals));
            row
        })
        .collect();

    let total_column = headers.len() - 1;
    out.push_str(&TableFormatter::with_numeric_columns(headers, rows, &[total_column]));
    out.push_str(&format!(
        "\n{}",
        colors::dim("Lower is better. Each cell shows the prediction and its normalized score.")
    ));
    out
}

fn find<'a>(score: &'a ParticipantScore, question: &str) -> Option<&'a QuestionScore> {
    score.question_scores.iter().find(|qs| qs.question == question)
}

fn cell(qs: &QuestionScore, decimals: usize) -> String {
    let predicted = qs.predicted.as_deref().unwrap_or("-");
    if qs.is_numerical {
        format!("{} ({})", predicted, format_score(qs.score, decimals))
    } else {
        predicted.to_string()
    }
}

/// One line per participant and question
fn plain_rows(report: &GameScoreReport) -> Vec<Vec<String>> {
    report
        .scores
        .iter()
        .flat_map(|score| {
            score.question_scores.iter().map(move |qs| {
                vec![
                    score.user_id.to_string(),
                    score.user_email.clone(),
                    qs.question.clone(),
                    qs.predicted.clone().unwrap_or_default(),
                    qs.actual.clone(),
                    qs.raw_distance.to_string(),
                    qs.score.to_string(),
                    qs.is_numerical.to_string(),
                ]
            })
        })
        .collect()
}
