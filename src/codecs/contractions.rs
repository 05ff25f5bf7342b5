// File: src/codecs/contractions.rs
//! Grade-2 Braille with word signs, short forms and initial-letter
//! contractions. Encode only: contraction cells reuse letter cells, so a
//! cell sequence has no single reading.

use crate::codecs::braille2::Grade2Encoder;
use crate::codecs::Encoder;
use crate::core::substitution::{MatchStrategy, RuleLayer, RuleSet};
use crate::core::symbols::SymbolTable;
use crate::core::tables::{
    BRAILLE_DIGITS, BRAILLE_LETTERS, BRAILLE_PUNCTUATION, INITIAL_LETTER_CONTRACTIONS, SHORT_FORMS,
    WORD_SIGNS,
};
use crate::error::ConversionResult;

/// Word signs, then short forms, then initial-letter contractions, then
/// single letters.
fn contraction_rules(letters: &SymbolTable) -> RuleSet {
    RuleSet::new()
        .with_pairs(WORD_SIGNS, RuleLayer::WordSign)
        .with_pairs(SHORT_FORMS, RuleLayer::ShortForm)
        .with_pairs(INITIAL_LETTER_CONTRACTIONS, RuleLayer::InitialLetter)
        .with_table(letters, RuleLayer::Letter)
}

pub struct ContractionsEncoder {
    encoder: Grade2Encoder,
}

impl ContractionsEncoder {
    /// Uses [`MatchStrategy::Sequential`], which reproduces the established
    /// output byte for byte.
    pub fn new() -> Self {
        Self::with_strategy(MatchStrategy::Sequential)
    }

    pub fn with_strategy(strategy: MatchStrategy) -> Self {
        let letters = SymbolTable::from_entries("contractions.letters", BRAILLE_LETTERS);
        let punctuation = SymbolTable::from_entries("contractions.punctuation", BRAILLE_PUNCTUATION);
        let digits = SymbolTable::from_entries("contractions.digits", BRAILLE_DIGITS);

        let encoder = Grade2Encoder::new(
            contraction_rules(&letters),
            RuleSet::new().with_table(&digits, RuleLayer::Digit),
            RuleSet::new().with_table(&punctuation, RuleLayer::Punctuation),
            contraction_rules(&letters)
                .with_table(&punctuation, RuleLayer::Punctuation)
                .with_table(&digits, RuleLayer::Digit),
            strategy,
        );
        Self { encoder }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.encoder.strategy()
    }

    pub fn text_to_braille(&self, text: &str) -> String {
        self.encoder.encode_text(text)
    }
}

impl Default for ContractionsEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for ContractionsEncoder {
    fn encode(&self, input: &str) -> ConversionResult {
        Ok(self.text_to_braille(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str =
        "LOREM Ipsum asphalt but every more, have conceiving beyond already, ever father know,";
    const SENTENCE_BRAILLE: &str = "⠠⠠⠇⠕⠗⠑⠍⠀⠠⠊⠏⠎⠥⠍⠀⠵⠏⠓⠁⠇⠞⠀⠃⠀⠑⠀⠍⠂⠀⠓⠀⠒⠉⠧⠛⠀⠃⠽⠀⠁⠇⠗⠂⠀⠐⠑⠀⠐⠋⠀⠐⠅⠂";

    #[test]
    fn matches_plain_grade2_when_nothing_contracts() {
        let encoder = ContractionsEncoder::new();
        let cases = [
            ("This is a test", "⠠⠞⠓⠊⠎⠀⠊⠎⠀⠁⠀⠞⠑⠎⠞"),
            ("Lorem Ipsum", "⠠⠇⠕⠗⠑⠍⠀⠠⠊⠏⠎⠥⠍"),
            ("HELLO WORLD", "⠠⠠⠓⠑⠇⠇⠕⠀⠠⠠⠺⠕⠗⠇⠙"),
            ("hello world", "⠓⠑⠇⠇⠕⠀⠺⠕⠗⠇⠙"),
            ("Hello, World!", "⠠⠓⠑⠇⠇⠕⠂⠀⠠⠺⠕⠗⠇⠙⠖"),
            ("123", "⠼⠂⠆⠒"),
            ("!@#$%^&*(),", "⠖⠈⠁⠨⠼⠈⠎⠨⠴⠈⠢⠈⠯⠐⠔⠐⠣⠐⠜⠂"),
            ("Mixed123", "⠠⠍⠊⠭⠑⠙⠼⠂⠆⠒"),
            ("Mixed123!", "⠠⠍⠊⠭⠑⠙⠼⠂⠆⠒⠖"),
            (" ", "⠀"),
            ("", ""),
        ];
        for (text, braille) in cases {
            assert_eq!(encoder.text_to_braille(text), braille, "{text:?}");
        }
    }

    #[test]
    fn contracts_the_reference_sentence() {
        let encoder = ContractionsEncoder::new();
        assert_eq!(encoder.text_to_braille(SENTENCE), SENTENCE_BRAILLE);
    }

    #[test]
    fn each_layer_contracts() {
        let encoder = ContractionsEncoder::new();
        assert_eq!(encoder.text_to_braille("people"), "⠏");
        assert_eq!(encoder.text_to_braille("tomorrow"), "⠞⠍");
        assert_eq!(encoder.text_to_braille("upon"), "⠨⠥");
        assert_eq!(encoder.text_to_braille("character"), "⠸⠉");
        assert_eq!(encoder.text_to_braille("Today"), "⠠⠞⠙");
    }

    #[test]
    fn sequential_order_lets_word_signs_shadow_longer_forms() {
        // "it" is a word sign, so it is replaced inside "either" before the
        // "either" short form is tried.
        let sequential = ContractionsEncoder::new();
        assert_eq!(sequential.text_to_braille("either"), "⠑⠭⠓⠑⠗");

        let longest = ContractionsEncoder::with_strategy(MatchStrategy::LongestMatch);
        assert_eq!(longest.text_to_braille("either"), "⠑⠊");
    }

    #[test]
    fn dot5_here_shadows_dot45_where_sequentially() {
        let sequential = ContractionsEncoder::new();
        assert_eq!(sequential.text_to_braille("where"), "⠺⠐⠓");

        let longest = ContractionsEncoder::with_strategy(MatchStrategy::LongestMatch);
        assert_eq!(longest.text_to_braille("where"), "⠨⠺");
    }

    #[test]
    fn longest_match_agrees_on_the_reference_sentence() {
        let longest = ContractionsEncoder::with_strategy(MatchStrategy::LongestMatch);
        assert_eq!(longest.strategy(), MatchStrategy::LongestMatch);
        assert_eq!(longest.text_to_braille(SENTENCE), SENTENCE_BRAILLE);
    }
}
