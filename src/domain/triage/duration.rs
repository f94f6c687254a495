//! Duration extraction from relative time expressions.
//!
//! Parses phrases like "for 2 weeks" or "since last month" into a day
//! count. Conversion is calendar-approximate: day=1, week=7, month=30,
//! year=365. A parse miss is an absent value, never an error; so is a
//! count too large to represent in days.

use once_cell::sync::Lazy;
use regex::Regex;

/// "for <digits> <unit>" with an optional plural on the unit.
static NUMERIC_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"for\s+(\d+)\s*(day|week|month|year)s?").expect("numeric duration pattern")
});

/// "for <spelled-out one..ten> <unit>" with an optional plural on the unit.
static WORD_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"for\s+(one|two|three|four|five|six|seven|eight|nine|ten)\s*(day|week|month|year)s?")
        .expect("word duration pattern")
});

/// Fixed idioms with their day counts.
const IDIOMS: &[(&str, u32)] = &[
    ("since last week", 7),
    ("since last month", 30),
    ("since yesterday", 1),
];

fn unit_days(unit: &str) -> u32 {
    match unit {
        "day" => 1,
        "week" => 7,
        "month" => 30,
        "year" => 365,
        _ => unreachable!("unit restricted by pattern"),
    }
}

fn word_number(word: &str) -> u32 {
    match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => unreachable!("word restricted by pattern"),
    }
}

/// Parses a relative time expression into a day count.
///
/// Matching is case-insensitive. The numeric-digit pattern is tried before
/// the spelled-out-number pattern, then the fixed idioms; only the first
/// match in the text is used. Returns `None` if nothing matches.
pub fn parse_duration_days(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();

    if let Some(caps) = NUMERIC_DURATION.captures(&lowered) {
        let n: u32 = caps[1].parse().ok()?;
        return n.checked_mul(unit_days(&caps[2]));
    }

    if let Some(caps) = WORD_DURATION.captures(&lowered) {
        return Some(word_number(&caps[1]) * unit_days(&caps[2]));
    }

    IDIOMS
        .iter()
        .find(|(idiom, _)| lowered.contains(idiom))
        .map(|(_, days)| *days)
}
