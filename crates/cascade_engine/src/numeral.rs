//! Numeral formatting for list labels
//!
//! Every [`NumberFormat`] renders *something*: formats without a dedicated
//! renderer fall back to plain decimal.

use doc_model::NumberFormat;

/// Format a counter value according to a list number format
pub fn format_number(format: &NumberFormat, value: u32) -> String {
    match format {
        NumberFormat::Decimal | NumberFormat::DecimalHalfWidth => value.to_string(),
        NumberFormat::DecimalZero => format!("{:02}", value),
        NumberFormat::LowerLetter => to_letter(value),
        NumberFormat::UpperLetter => to_letter(value).to_uppercase(),
        NumberFormat::LowerRoman => to_roman(value),
        NumberFormat::UpperRoman => to_roman(value).to_uppercase(),
        NumberFormat::Ordinal => to_ordinal(value),
        NumberFormat::OrdinalText => to_ordinal_text(value),
        NumberFormat::CardinalText => to_cardinal_text(value),
        // Bullet glyphs come from the level text, not from the counter
        NumberFormat::Bullet | NumberFormat::None => String::new(),
        NumberFormat::DecimalEnclosedParen => format!("({})", value),
        NumberFormat::DecimalEnclosedFullstop => format!("{}.", value),
        NumberFormat::DecimalEnclosedCircle => to_enclosed_circle(value),
        NumberFormat::DecimalFullWidth => to_full_width(value),
        NumberFormat::Hex => format!("{:X}", value),
        NumberFormat::Chicago => to_chicago(value),
        NumberFormat::Other(_) => value.to_string(),
    }
}

/// Format a number as a letter (a, b, c, ... z, aa, ab, ...)
///
/// Bijective base 26: there is no zero digit, so 26 is `z` and 27 is `aa`.
pub fn to_letter(value: u32) -> String {
    let mut letters = Vec::new();
    let mut remaining = value;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push(char::from(b'a' + digit as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

const ROMAN_ONES: [&str; 10] = ["", "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix"];
const ROMAN_TENS: [&str; 10] = ["", "x", "xx", "xxx", "xl", "l", "lx", "lxx", "lxxx", "xc"];
const ROMAN_HUNDREDS: [&str; 10] = ["", "c", "cc", "ccc", "cd", "d", "dc", "dcc", "dccc", "cm"];

/// Format a number as lowercase roman numerals
///
/// Zero renders as digits; thousands repeat `m` without bound.
pub fn to_roman(value: u32) -> String {
    if value == 0 {
        return value.to_string();
    }
    let place = |divisor: u32| (value / divisor % 10) as usize;
    format!(
        "{}{}{}{}",
        "m".repeat((value / 1000) as usize),
        ROMAN_HUNDREDS[place(100)],
        ROMAN_TENS[place(10)],
        ROMAN_ONES[place(1)]
    )
}

/// Format a number as an ordinal (1st, 2nd, 3rd, ...)
pub fn to_ordinal(value: u32) -> String {
    let suffix = match value % 100 {
        11..=13 => "th",
        _ => match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", value, suffix)
}

const CARDINALS: [&str; 21] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen", "Twenty",
];

const ORDINALS: [&str; 20] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
    "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
    "Seventeenth", "Eighteenth", "Nineteenth", "Twentieth",
];

/// Format a number as cardinal text (One, Two, Three, ...), digits beyond twenty
pub fn to_cardinal_text(value: u32) -> String {
    CARDINALS
        .get(value as usize)
        .map(|word| word.to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Format a number as ordinal text (First, Second, ...), numeric ordinal beyond twenty
pub fn to_ordinal_text(value: u32) -> String {
    match value {
        1..=20 => ORDINALS[value as usize - 1].to_string(),
        _ => to_ordinal(value),
    }
}

fn to_enclosed_circle(value: u32) -> String {
    match value {
        1..=20 => char::from_u32(0x2460 + value - 1)
            .map(String::from)
            .unwrap_or_else(|| value.to_string()),
        _ => value.to_string(),
    }
}

fn to_full_width(value: u32) -> String {
    value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10).and_then(|d| char::from_u32(0xFF10 + d)))
        .collect()
}

fn to_chicago(value: u32) -> String {
    const SYMBOLS: [char; 4] = ['*', '\u{2020}', '\u{2021}', '\u{00A7}'];
    if value == 0 {
        return String::new();
    }
    let index = (value - 1) as usize;
    let repeat = index / SYMBOLS.len() + 1;
    SYMBOLS[index % SYMBOLS.len()].to_string().repeat(repeat)
}

// =============================================================================
// Tests
// =============================================================================
