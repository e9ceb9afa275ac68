//! Questions command: the stock question catalogue

use anyhow::Result;
use babybet_domain::{default_questions, Question};

use crate::commands::CommandContext;
use crate::output::{colors, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Print the questions every new game starts with
pub fn list(ctx: &CommandContext) -> Result<()> {
    println!("{}", render(ctx, &default_questions())?);
    Ok(())
}

/// Render a question list in the context's output format
pub fn render(ctx: &CommandContext, questions: &[Question]) -> Result<String> {
    match ctx.format() {
        OutputFormat::Json => JsonFormatter::format(&questions),
        OutputFormat::Plain => {
            let rows: Vec<Vec<String>> = questions
                .iter()
                .map(|q| {
                    vec![
                        q.order.to_string(),
                        q.question_type.to_string(),
                        q.text.clone(),
                    ]
                })
                .collect();
            Ok(PlainFormatter::lines(&rows))
        }
        OutputFormat::Table => {
            let headers = vec!["#", "Question", "Type", "Scored", "Hint"];
            let rows: Vec<Vec<String>> = questions
                .iter()
                .map(|q| {
                    vec![
                        q.order.to_string(),
                        q.text.clone(),
                        q.question_type.to_string(),
                        (if q.question_type.is_distance_scored() { "yes" } else { "no" }).to_string(),
                        hint(q),
                    ]
                })
                .collect();

            Ok(format!(
                "{}\n{}",
                colors::bold("Default questions"),
                TableFormatter::with_numeric_columns(headers, rows, &[0])
            ))
        }
    }
}

fn hint(question: &Question) -> String {
    match (&question.options, &question.placeholder) {
        (Some(options), _) => options.join(" / "),
        (None, Some(placeholder)) => placeholder.clone(),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use babybet_common::AppConfig;

    fn context(format: OutputFormat) -> CommandContext {
        let config = Config {
            output_format: format,
            colored: false,
            ..Config::default()
        };
        CommandContext::new(config, AppConfig::default())
    }

    #[test]
    fn test_plain_lists_catalogue_in_order() {
        let questions = default_questions();
        let rendered = render(&context(OutputFormat::Plain), &questions).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), questions.len());
        assert!(lines[0].starts_with("1\t"));
    }

    #[test]
    fn test_hint_prefers_options() {
        let question = Question::new("Sex of the Baby", babybet_domain::QuestionType::Select)
            .with_options(["Boy", "Girl"])
            .with_placeholder("pick one");
        assert_eq!(hint(&question), "Boy / Girl");
    }
}
