//! Leaderboard command: the public ranking

use anyhow::Result;
use babybet_application::LeaderboardEntry;
use babybet_domain::GameSnapshot;
use std::path::Path;

use crate::commands::{snapshot::load_snapshot, CommandContext};
use crate::output::{colors, format_score, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Show the leaderboard of a snapshot file
pub fn show(ctx: &CommandContext, path: &Path, limit: Option<usize>) -> Result<()> {
    let game = load_snapshot(path)?;
    let limit = limit.or(ctx.config.leaderboard_limit);

    let entries = ctx.service.leaderboard(&game, limit)?;
    ctx.print_warnings(&game.validate().warnings);

    println!("{}", render(ctx, &game, &entries)?);
    Ok(())
}

/// Render leaderboard rows in the context's output format
pub fn render(ctx: &CommandContext, game: &GameSnapshot, entries: &[LeaderboardEntry]) -> Result<String> {
    match ctx.format() {
        OutputFormat::Json => JsonFormatter::format(&entries),
        OutputFormat::Plain => {
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|e| {
                    vec![
                        e.rank.to_string(),
                        e.entry.user_id.to_string(),
                        e.entry.user_email.clone(),
                        e.entry.total_score.to_string(),
                    ]
                })
                .collect();
            Ok(PlainFormatter::lines(&rows))
        }
        OutputFormat::Table => {
            let mut out = format!("{}\n", colors::bold(&format!("Leaderboard: {}", game.name)));

            if entries.is_empty() {
                out.push_str(&colors::warning("No ranked participants yet.").to_string());
                return Ok(out);
            }

            let headers = vec!["Rank", "Participant", "Email", "Score"];
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|e| {
                    vec![
                        colors::rank(e.rank).to_string(),
                        e.entry.display_name().to_string(),
                        e.entry.user_email.clone(),
                        format_score(e.entry.total_score, ctx.config.decimals),
                    ]
                })
                .collect();

            out.push_str(&TableFormatter::with_numeric_columns(headers, rows, &[3]));
            Ok(out)
        }
    }
}
