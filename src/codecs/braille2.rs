// File: src/codecs/braille2.rs
//! Grade-2 Braille without contractions.
//!
//! Words are split on ASCII spaces and rejoined with the blank cell. Each
//! word is classified by its first character and by whether it crosses a
//! letter/non-letter or digit/non-digit boundary, then marked and
//! substituted. The same machinery drives the contractions encoder.

use crate::codecs::{Decoder, Encoder};
use crate::core::substitution::{MatchStrategy, RuleLayer, RuleSet};
use crate::core::symbols::{ReverseTable, SymbolTable};
use crate::core::tables::{BRAILLE_DIGITS, BRAILLE_LETTERS, BRAILLE_PUNCTUATION};
use crate::error::ConversionResult;
use log::trace;
use regex::RegexSet;
use std::sync::OnceLock;

/// Word separator (U+2800), distinct from ASCII space.
pub const BLANK_CELL: char = '\u{2800}';
/// Dot 6. Once before a capitalised word, twice before an all-caps word.
pub const CAPITAL_SIGN: char = '\u{2820}';
/// Dots 3456. Starts a run of digit cells.
pub const NUMERIC_SIGN: char = '\u{283C}';

const SINGLE_CAPITAL: &str = "\u{2820}";
const DOUBLE_CAPITAL: &str = "\u{2820}\u{2820}";

static MIXED_CONTENT: OnceLock<RegexSet> = OnceLock::new();

/// Letter then non-letter, or the reverse; likewise for digits.
fn mixed_content() -> &'static RegexSet {
    MIXED_CONTENT.get_or_init(|| {
        RegexSet::new([
            r"[a-zA-Z].*[^a-zA-Z]",
            r"[^a-zA-Z].*[a-zA-Z]",
            r"[0-9].*[^0-9]",
            r"[^0-9].*[0-9]",
        ])
        .expect("Invalid mixed-content patterns")
    })
}

/// How a word is marked before substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Empty,
    /// Crosses a letter or digit boundary, e.g. `Mixed123` or `hello,`.
    Mixed,
    Lowercase,
    Uppercase,
    Numeric,
    /// Neither letters nor digits.
    Symbolic,
}

pub fn classify(word: &str) -> WordClass {
    let Some(first) = word.chars().next() else {
        return WordClass::Empty;
    };
    if mixed_content().is_match(word) {
        WordClass::Mixed
    } else if first.is_ascii_lowercase() {
        WordClass::Lowercase
    } else if first.is_ascii_uppercase() {
        WordClass::Uppercase
    } else if first.is_ascii_digit() {
        WordClass::Numeric
    } else {
        WordClass::Symbolic
    }
}

/// Rule sets for each word class plus the overlap strategy.
pub(crate) struct Grade2Encoder {
    letters: RuleSet,
    digits: RuleSet,
    punctuation: RuleSet,
    mixed: RuleSet,
    strategy: MatchStrategy,
}

impl Grade2Encoder {
    pub(crate) fn new(
        letters: RuleSet,
        digits: RuleSet,
        punctuation: RuleSet,
        mixed: RuleSet,
        strategy: MatchStrategy,
    ) -> Self {
        Self { letters, digits, punctuation, mixed, strategy }
    }

    pub(crate) fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub(crate) fn encode_text(&self, text: &str) -> String {
        let mut blank = [0u8; 4];
        let separator: &str = BLANK_CELL.encode_utf8(&mut blank);
        text.split(' ')
            .map(|word| self.encode_word(word))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn encode_word(&self, word: &str) -> String {
        let class = classify(word);
        trace!("word {:?} classified as {:?}", word, class);
        match class {
            WordClass::Empty => String::new(),
            WordClass::Mixed => self.encode_mixed(word),
            WordClass::Lowercase => self.letters.apply(word, self.strategy),
            WordClass::Uppercase => {
                let all_caps = word.chars().nth(1).is_some_and(|c| c.is_ascii_uppercase());
                let prefix = if all_caps { DOUBLE_CAPITAL } else { SINGLE_CAPITAL };
                let marked = format!("{}{}", prefix, word.to_lowercase());
                self.letters.apply(&marked, self.strategy)
            }
            WordClass::Numeric => {
                let marked = format!("{}{}", NUMERIC_SIGN, word);
                self.digits.apply(&marked, self.strategy)
            }
            WordClass::Symbolic => self.punctuation.apply(word, self.strategy),
        }
    }

    /// A leading capital gets one capital sign and the word is folded to
    /// lowercase; every digit run gets its own numeric sign.
    fn encode_mixed(&self, word: &str) -> String {
        let folded = match word.chars().next() {
            Some(c) if c.is_ascii_uppercase() => format!("{}{}", CAPITAL_SIGN, word.to_lowercase()),
            _ => word.to_string(),
        };
        let mut marked = String::with_capacity(folded.len() + 8);
        let mut in_number = false;
        for c in folded.chars() {
            if c.is_ascii_digit() {
                if !in_number {
                    marked.push(NUMERIC_SIGN);
                    in_number = true;
                }
            } else {
                in_number = false;
            }
            marked.push(c);
        }
        self.mixed.apply(&marked, self.strategy)
    }
}

/// Capitalisation read from a word's leading cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capitals {
    None,
    Initial,
    Word,
}

/// Grade-2 Braille with capital and numeric indicators, reversible up to
/// the cell collisions between digits and punctuation.
pub struct Braille2Codec {
    encoder: Grade2Encoder,
    text_cells: ReverseTable,
    digit_cells: ReverseTable,
}

impl Braille2Codec {
    pub fn new() -> Self {
        let letters = SymbolTable::from_entries("braille2.letters", BRAILLE_LETTERS);
        let punctuation = SymbolTable::from_entries("braille2.punctuation", BRAILLE_PUNCTUATION);
        let digits = SymbolTable::from_entries("braille2.digits", BRAILLE_DIGITS);

        let encoder = Grade2Encoder::new(
            RuleSet::new().with_table(&letters, RuleLayer::Letter),
            RuleSet::new().with_table(&digits, RuleLayer::Digit),
            RuleSet::new().with_table(&punctuation, RuleLayer::Punctuation),
            RuleSet::new()
                .with_table(&letters, RuleLayer::Letter)
                .with_table(&punctuation, RuleLayer::Punctuation)
                .with_table(&digits, RuleLayer::Digit),
            MatchStrategy::Sequential,
        );

        Self {
            encoder,
            text_cells: ReverseTable::build(&[&letters, &punctuation]),
            digit_cells: digits.reverse(),
        }
    }

    pub fn text_to_braille(&self, text: &str) -> String {
        self.encoder.encode_text(text)
    }

    pub fn braille_to_text(&self, braille: &str) -> String {
        braille
            .split(BLANK_CELL)
            .map(|word| self.decode_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn decode_word(&self, word: &str) -> String {
        let (capitals, body) = if let Some(rest) = word.strip_prefix(DOUBLE_CAPITAL) {
            (Capitals::Word, rest)
        } else if let Some(rest) = word.strip_prefix(CAPITAL_SIGN) {
            (Capitals::Initial, rest)
        } else {
            (Capitals::None, word)
        };

        let mut out = String::with_capacity(body.len() / 3 + 1);
        let mut numeric = false;
        let mut buf = [0u8; 4];
        let mut rest = body;
        while let Some(cell) = rest.chars().next() {
            if numeric {
                if let Some(digit) = self.digit_cells.lookup(cell.encode_utf8(&mut buf)) {
                    out.push(digit);
                    rest = &rest[cell.len_utf8()..];
                    continue;
                }
                numeric = false;
            }
            if let Some((ch, len)) = self.text_cells.longest_prefix(rest) {
                out.push(ch);
                rest = &rest[len..];
                continue;
            }
            if cell == NUMERIC_SIGN {
                numeric = true;
            } else {
                out.push(cell);
            }
            rest = &rest[cell.len_utf8()..];
        }

        match capitals {
            Capitals::None => out,
            Capitals::Word => out.to_uppercase(),
            Capitals::Initial => {
                let mut chars = out.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => out,
                }
            }
        }
    }
}

impl Default for Braille2Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Braille2Codec {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(self.text_to_braille(input))
    }
}

impl Decoder for Braille2Codec {
    fn decode(&self, input: &str) -> ConversionResult {
        Ok(self.braille_to_text(input))
    }
}
