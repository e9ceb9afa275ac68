//! Distance evaluators for the scored question types.
//!
//! Every evaluator is total: answers that cannot be parsed yield
//! [`QuestionDistance::none`] instead of an error, since predictions are
//! free text typed by guests.

use babybet_common::datetime::{days_between, parse_calendar_date, parse_clock_minutes};
use babybet_domain::{Question, QuestionDistance, QuestionType};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{instrument, trace};

static LEADING_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("static pattern")
});

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("static pattern"));

/// Evaluator trait for comparing a prediction with the actual result.
pub trait DistanceEvaluator: Send + Sync {
    /// Distance between a non-empty prediction and the actual result.
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance;

    /// Whether a missing prediction for this type counts as the worst score.
    fn is_numerical(&self) -> bool {
        true
    }

    /// Get the evaluator type name.
    fn name(&self) -> &'static str;
}

/// Absolute difference of two decimals.
pub struct NumberDistance;

impl DistanceEvaluator for NumberDistance {
    #[instrument(level = "trace", skip(self))]
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance {
        match (parse_decimal(predicted), parse_decimal(actual)) {
            (Some(p), Some(a)) => QuestionDistance::numerical(a - p),
            _ => QuestionDistance::none(),
        }
    }

    fn name(&self) -> &'static str {
        "number"
    }
}

/// Whole days between two calendar dates.
pub struct DateDistance;

impl DistanceEvaluator for DateDistance {
    #[instrument(level = "trace", skip(self))]
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance {
        match (parse_calendar_date(predicted), parse_calendar_date(actual)) {
            (Some(p), Some(a)) => QuestionDistance::numerical(days_between(&p, &a)),
            _ => QuestionDistance::none(),
        }
    }

    fn name(&self) -> &'static str {
        "date"
    }
}

/// Minutes between two clock times.
///
/// There is no wraparound at midnight: `23:50` and `00:10` are 1420 minutes apart.
pub struct TimeDistance;

impl DistanceEvaluator for TimeDistance {
    #[instrument(level = "trace", skip(self))]
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance {
        match (parse_clock_minutes(predicted), parse_clock_minutes(actual)) {
            (Some(p), Some(a)) => QuestionDistance::numerical(a - p),
            _ => QuestionDistance::none(),
        }
    }

    fn name(&self) -> &'static str {
        "time"
    }
}

/// Case-insensitive exact match; 0 on match, 1 otherwise.
///
/// The result is categorical and never enters a participant's total.
pub struct SelectDistance;

impl DistanceEvaluator for SelectDistance {
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance {
        let matched = predicted.to_lowercase() == actual.to_lowercase();
        QuestionDistance::categorical(if matched { 0.0 } else { 1.0 })
    }

    fn is_numerical(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "select"
    }
}

/// Euclidean distance of two hex colours in RGB space.
pub struct ColorDistance;

impl DistanceEvaluator for ColorDistance {
    #[instrument(level = "trace", skip(self))]
    fn evaluate(&self, predicted: &str, actual: &str) -> QuestionDistance {
        let (Some(p), Some(a)) = (hex_to_rgb(predicted), hex_to_rgb(actual)) else {
            return QuestionDistance::none();
        };

        let channel = |x: u8, y: u8| f64::from(x) - f64::from(y);
        let (dr, dg, db) = (channel(p.r, a.r), channel(p.g, a.g), channel(p.b, a.b));
        QuestionDistance::numerical((dr * dr + dg * dg + db * db).sqrt())
    }

    fn name(&self) -> &'static str {
        "color"
    }
}

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse `#RRGGBB` or the short form `#RGB`.
///
/// Only the first `#` is removed; `##fff` does not parse.
pub fn hex_to_rgb(input: &str) -> Option<Rgb> {
    let hex = input.replacen('#', "", 1);
    let hex = if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex
    };

    if !HEX_COLOR.is_match(&hex) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Parse the leading decimal of a free-text number.
///
/// The first comma is read as the decimal separator and anything after the
/// number is ignored, so `"3,5 kg"` is 3.5. Text without a leading number
/// yields `None`.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.replacen(',', ".", 1);
    let number = LEADING_DECIMAL.find(normalized.trim_start())?;
    let value: f64 = number.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Evaluate one question with the default evaluators.
///
/// A missing or empty prediction gives no signal. Types without an evaluator
/// (SCRABBLE, TEXT, unknown tokens) are never scored.
pub fn evaluate_question(question: &Question, predicted: Option<&str>, actual: &str) -> QuestionDistance {
    let Some(predicted) = predicted.filter(|p| !p.is_empty()) else {
        return QuestionDistance::none();
    };

    let distance = match default_evaluator(&question.question_type) {
        Some(evaluator) => evaluator.evaluate(predicted, actual),
        None => QuestionDistance::none(),
    };
    trace!(question = %question.text, value = distance.value, numerical = distance.is_numerical, "Evaluated");
    distance
}

/// Built-in evaluator for a question type, if the type is scored at all
pub fn default_evaluator(question_type: &QuestionType) -> Option<&'static dyn DistanceEvaluator> {
    match question_type {
        QuestionType::Number => Some(&NumberDistance),
        QuestionType::Date => Some(&DateDistance),
        QuestionType::Time => Some(&TimeDistance),
        QuestionType::Select => Some(&SelectDistance),
        QuestionType::Colorpicker => Some(&ColorDistance),
        QuestionType::Scrabble | QuestionType::Text | QuestionType::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_distance() {
        let d = NumberDistance.evaluate("3400", "3200");
        assert_eq!(d, QuestionDistance::numerical(200.0));

        let d = NumberDistance.evaluate("49,5", "51");
        assert!(d.is_numerical);
        assert!((d.value - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_number_lenient_parse() {
        assert_eq!(parse_decimal("3200 g"), Some(3200.0));
        assert_eq!(parse_decimal("  .5"), Some(0.5));
        assert_eq!(parse_decimal("-2e3"), Some(-2000.0));
        assert_eq!(parse_decimal("1,5,0"), Some(1.5));
        assert_eq!(parse_decimal("about 3kg"), None);
        assert_eq!(parse_decimal(""), None);
        assert!(!NumberDistance.evaluate("lots", "3200").is_numerical);
    }

    #[test]
    fn test_date_distance() {
        let d = DateDistance.evaluate("2024-05-03", "2024-05-01");
        assert_eq!(d, QuestionDistance::numerical(2.0));
        assert_eq!(DateDistance.evaluate("someday", "2024-05-01"), QuestionDistance::none());
    }

    #[test]
    fn test_time_distance_no_wraparound() {
        let d = TimeDistance.evaluate("00:10", "23:50");
        assert_eq!(d, QuestionDistance::numerical(1420.0));
        assert_eq!(TimeDistance.evaluate("10:", "11:00"), QuestionDistance::numerical(60.0));
        assert_eq!(TimeDistance.evaluate(":30", "00:00"), QuestionDistance::numerical(30.0));
        assert_eq!(TimeDistance.evaluate("10", "11:00"), QuestionDistance::none());
    }

    #[test]
    fn test_select_is_categorical() {
        let matched = SelectDistance.evaluate("boy", "Boy");
        assert_eq!(matched, QuestionDistance::categorical(0.0));

        let missed = SelectDistance.evaluate("Girl", "Boy");
        assert_eq!(missed, QuestionDistance::categorical(1.0));
        assert!(!SelectDistance.is_numerical());
    }

    #[test]
    fn test_color_distance() {
        let d = ColorDistance.evaluate("#FFFFFF", "#000000");
        assert!(d.is_numerical);
        assert!((d.value - (255.0f64 * 255.0 * 3.0).sqrt()).abs() < 1e-9);

        assert_eq!(ColorDistance.evaluate("#fff", "#FFFFFF").value, 0.0);
        assert_eq!(ColorDistance.evaluate("brown", "#000000"), QuestionDistance::none());
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#a0b1c2"), Some(Rgb { r: 0xa0, g: 0xb1, b: 0xc2 }));
        assert_eq!(hex_to_rgb("abc"), Some(Rgb { r: 0xaa, g: 0xbb, b: 0xcc }));
        assert_eq!(hex_to_rgb("##abc"), None);
        assert_eq!(hex_to_rgb("#ggg"), None);
        assert_eq!(hex_to_rgb("#éé"), None);
    }

    #[test]
    fn test_evaluate_question_without_prediction() {
        let question = Question::new("Weight", QuestionType::Number);
        assert_eq!(evaluate_question(&question, None, "3200"), QuestionDistance::none());
        assert_eq!(evaluate_question(&question, Some(""), "3200"), QuestionDistance::none());
    }

    #[test]
    fn test_evaluate_question_unscored_types() {
        for question_type in [
            QuestionType::Scrabble,
            QuestionType::Text,
            QuestionType::Other("SLIDER".to_string()),
        ] {
            let question = Question::new("Q", question_type);
            assert_eq!(evaluate_question(&question, Some("12"), "12"), QuestionDistance::none());
        }
    }
}
