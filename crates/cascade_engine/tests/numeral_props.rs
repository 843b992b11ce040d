//! Property tests for list numeral formats

use cascade_engine::{format_number, to_letter, to_ordinal, to_roman};
use doc_model::NumberFormat;
use proptest::prelude::*;

/// Read a bijective base-26 letter label back into its value
fn letter_value(label: &str) -> u32 {
    label
        .bytes()
        .fold(0, |acc, b| acc * 26 + u32::from(b - b'a' + 1))
}

fn roman_value(label: &str) -> u32 {
    let digit = |c: char| match c {
        'i' => 1,
        'v' => 5,
        'x' => 10,
        'l' => 50,
        'c' => 100,
        'd' => 500,
        'm' => 1000,
        _ => 0,
    };
    let values: Vec<u32> = label.chars().map(digit).collect();
    values
        .iter()
        .enumerate()
        .fold(0i64, |acc, (i, &v)| {
            if values.get(i + 1).is_some_and(|&next| next > v) {
                acc - i64::from(v)
            } else {
                acc + i64::from(v)
            }
        }) as u32
}

proptest! {
    #[test]
    fn letters_are_bijective_base_26(n in 1u32..100_000) {
        let label = to_letter(n);
        prop_assert!(label.bytes().all(|b| b.is_ascii_lowercase()));
        prop_assert_eq!(letter_value(&label), n);
    }

    #[test]
    fn upper_letter_is_uppercased_lower(n in 1u32..5_000) {
        prop_assert_eq!(
            format_number(&NumberFormat::UpperLetter, n),
            to_letter(n).to_uppercase()
        );
    }

    #[test]
    fn roman_numerals_are_canonical(n in 1u32..20_000) {
        let label = to_roman(n);
        prop_assert!(label.chars().all(|c| "ivxlcdm".contains(c)));
        prop_assert!(!label.contains("iiii") && !label.contains("xxxx") && !label.contains("cccc"));
        prop_assert_eq!(roman_value(&label), n);
    }

    #[test]
    fn ordinals_keep_the_number(n in 0u32..1_000_000) {
        let label = to_ordinal(n);
        prop_assert!(label.starts_with(&n.to_string()));
        let suffix = &label[n.to_string().len()..];
        prop_assert!(["st", "nd", "rd", "th"].contains(&suffix));
        if (11..=13).contains(&(n % 100)) {
            prop_assert_eq!(suffix, "th");
        }
    }

    #[test]
    fn unknown_formats_render_decimal(n in any::<u32>(), name in "[a-z]{3,12}") {
        let format: NumberFormat = name.parse().unwrap();
        if let NumberFormat::Other(_) = format {
            prop_assert_eq!(format_number(&format, n), n.to_string());
        }
    }
}
