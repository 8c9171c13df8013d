//! Vietnamese collation for product titles.
//!
//! Titles are compared in three passes, the way a Vietnamese dictionary
//! orders words:
//!
//! 1. base letters, using the Vietnamese alphabet (`a ă â b c d đ e ê ...`),
//!    so `ă` sorts after every `a`-word rather than next to it;
//! 2. tone marks, in the order ngang, huyền, hỏi, ngã, sắc, nặng;
//! 3. letter case, lowercase first.
//!
//! Text is decomposed to NFD first so that precomposed and combining forms
//! compare equal.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

const ALPHABET: [&str; 33] = [
    "a", "ă", "â", "b", "c", "d", "đ", "e", "ê", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
    "ô", "ơ", "p", "q", "r", "s", "t", "u", "ư", "v", "w", "x", "y", "z",
];

const BREVE: char = '\u{0306}';
const CIRCUMFLEX: char = '\u{0302}';
const HORN: char = '\u{031B}';

const LETTER_BASE: u32 = 0x20_0000;
const FOREIGN_LETTER_BASE: u32 = 0x30_0000;

/// Sort key for one string. Keys compare the way the strings collate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
}

pub fn collation_key(text: &str) -> CollationKey {
    let mut key = CollationKey {
        primary: Vec::with_capacity(text.len()),
        secondary: Vec::with_capacity(text.len()),
        tertiary: Vec::with_capacity(text.len()),
    };

    let decomposed: Vec<char> = text.nfd().collect();
    let mut i = 0;
    while i < decomposed.len() {
        let base = decomposed[i];
        i += 1;

        let mut modifier = None;
        let mut tone = 0u8;
        while i < decomposed.len() && is_combining(decomposed[i]) {
            match decomposed[i] {
                m @ (BREVE | CIRCUMFLEX | HORN) => modifier = Some(m),
                other => tone = tone.max(tone_weight(other)),
            }
            i += 1;
        }

        let lower = base.to_lowercase().next().unwrap_or(base);
        let (primary, unused_modifier) = primary_weight(lower, modifier);
        key.primary.push(primary);
        key.secondary.push(if unused_modifier { 7 } else { tone });
        key.tertiary.push(u8::from(base.is_uppercase()));
    }

    key
}

/// Compares two strings under Vietnamese collation.
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn primary_weight(lower: char, modifier: Option<char>) -> (u32, bool) {
    let mut letter = String::with_capacity(4);
    letter.push(lower);
    let combined = match (lower, modifier) {
        ('a', Some(BREVE)) => Some("ă"),
        ('a', Some(CIRCUMFLEX)) => Some("â"),
        ('e', Some(CIRCUMFLEX)) => Some("ê"),
        ('o', Some(CIRCUMFLEX)) => Some("ô"),
        ('o', Some(HORN)) => Some("ơ"),
        ('u', Some(HORN)) => Some("ư"),
        _ => None,
    };
    let unused_modifier = modifier.is_some() && combined.is_none();
    let letter = combined.unwrap_or(letter.as_str());

    match ALPHABET.iter().position(|l| *l == letter) {
        Some(idx) => (LETTER_BASE + idx as u32, unused_modifier),
        None if lower.is_alphabetic() => (FOREIGN_LETTER_BASE + lower as u32, unused_modifier),
        None => (lower as u32, unused_modifier),
    }
}

fn tone_weight(mark: char) -> u8 {
    match mark {
        '\u{0300}' => 1, // huyền
        '\u{0309}' => 2, // hỏi
        '\u{0303}' => 3, // ngã
        '\u{0301}' => 4, // sắc
        '\u{0323}' => 5, // nặng
        _ => 6,
    }
}

fn is_combining(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
