//! Scrabble letter values for the "scrabble value of the name" question.
//!
//! Display helper only; SCRABBLE answers are not distance scored.

/// Standard English tile value of a letter, case-insensitive.
///
/// Anything that is not an ASCII letter is worth 0.
pub fn letter_value(letter: char) -> u32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'L' | 'N' | 'S' | 'T' | 'R' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Sum of the letter values of a word.
///
/// # Examples
///
/// ```
/// use babybet_application::scoring::scrabble_score;
///
/// assert_eq!(scrabble_score("Emma"), 8);
/// assert_eq!(scrabble_score("Zoë-Jo"), 20);
/// ```
pub fn scrabble_score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}
