//! Scrabble command: letter-value totals of names

use anyhow::Result;
use babybet_application::scoring::scrabble_score;
use serde::Serialize;

use crate::commands::CommandContext;
use crate::output::{colors, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

#[derive(Debug, Serialize)]
struct WordScore<'a> {
    word: &'a str,
    score: u32,
}

#[derive(Debug, Serialize)]
struct ScrabbleReport<'a> {
    words: Vec<WordScore<'a>>,
    total: u32,
}

/// Print the scrabble value of each word and their sum
pub fn run(ctx: &CommandContext, words: &[String]) -> Result<()> {
    println!("{}", render(ctx, words)?);
    Ok(())
}

/// Render word values in the context's output format
pub fn render(ctx: &CommandContext, words: &[String]) -> Result<String> {
    let scores: Vec<WordScore<'_>> = words
        .iter()
        .map(|word| WordScore {
            word,
            score: scrabble_score(word),
        })
        .collect();
    let total = scores.iter().map(|s| s.score).sum();

    match ctx.format() {
        OutputFormat::Json => JsonFormatter::format(&ScrabbleReport { words: scores, total }),
        OutputFormat::Plain => {
            let rows: Vec<Vec<String>> = scores
                .iter()
                .map(|s| vec![s.word.to_string(), s.score.to_string()])
                .collect();
            Ok(PlainFormatter::lines(&rows))
        }
        OutputFormat::Table => {
            let mut rows: Vec<Vec<String>> = scores
                .iter()
                .map(|s| vec![s.word.to_string(), s.score.to_string()])
                .collect();
            if scores.len() > 1 {
                rows.push(vec![colors::bold("Total").to_string(), total.to_string()]);
            }
            Ok(TableFormatter::with_numeric_columns(vec!["Word", "Value"], rows, &[1]))
        }
    }
}
