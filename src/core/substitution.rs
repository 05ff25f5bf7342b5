// File: src/core/substitution.rs
//! Ordered substitution rules for the Braille encoders.
//!
//! Grade-2 contractions overlap: `as` sits inside `asphalt`, `ever` inside
//! `every`, and single letters inside all of them. The rules are therefore an
//! explicit ordered list, and [`MatchStrategy`] says how overlaps resolve.

use crate::core::symbols::SymbolTable;
use crate::core::trie::PatternTrie;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The table a rule came from. Declaration order doubles as priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleLayer {
    WordSign,
    ShortForm,
    InitialLetter,
    Letter,
    Punctuation,
    Digit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: &'static str,
    pub layer: RuleLayer,
}

/// How a [`RuleSet`] resolves rules whose patterns overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Each rule in list order replaces every occurrence of its pattern in
    /// what is left of the text. Earlier rules shadow later ones.
    #[default]
    Sequential,
    /// Left-to-right scan taking the longest pattern at each position.
    /// Equal-length patterns go to the earlier rule.
    LongestMatch,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Sequential => f.write_str("sequential"),
            MatchStrategy::LongestMatch => f.write_str("longest_match"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sequential" => Ok(MatchStrategy::Sequential),
            "longest_match" => Ok(MatchStrategy::LongestMatch),
            other => Err(format!("unknown match strategy '{}'", other)),
        }
    }
}

/// An ordered list of rules plus the trie used for longest-match scans.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    trie: PatternTrie,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new(), trie: PatternTrie::new() }
    }

    /// Appends string-keyed rules in slice order.
    pub fn with_pairs(mut self, pairs: &[(&'static str, &'static str)], layer: RuleLayer) -> Self {
        for &(pattern, replacement) in pairs {
            self.push(Rule { pattern: pattern.to_string(), replacement, layer });
        }
        self
    }

    /// Appends the entries of a character table in declaration order.
    pub fn with_table(mut self, table: &SymbolTable, layer: RuleLayer) -> Self {
        for (key, replacement) in table.entries() {
            self.push(Rule { pattern: key.to_string(), replacement, layer });
        }
        self
    }

    fn push(&mut self, rule: Rule) {
        let index = self.rules.len();
        if !self.trie.insert(&rule.pattern, index) {
            trace!("pattern {:?} already claimed by an earlier rule", rule.pattern);
        }
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str, strategy: MatchStrategy) -> String {
        match strategy {
            MatchStrategy::Sequential => self.apply_sequential(text),
            MatchStrategy::LongestMatch => self.apply_longest_match(text),
        }
    }

    fn apply_sequential(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if out.contains(rule.pattern.as_str()) {
                out = out.replace(rule.pattern.as_str(), rule.replacement);
            }
        }
        out
    }

    fn apply_longest_match(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 3);
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            match self.trie.longest_match(rest) {
                Some((rule, len)) => {
                    out.push_str(self.rules[rule].replacement);
                    rest = &rest[len..];
                }
                None => {
                    out.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }
        out
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::{BRAILLE_LETTERS, WORD_SIGNS};

    fn letters_with_word_signs() -> RuleSet {
        let letters = SymbolTable::from_entries("letters", BRAILLE_LETTERS);
        RuleSet::new()
            .with_pairs(WORD_SIGNS, RuleLayer::WordSign)
            .with_table(&letters, RuleLayer::Letter)
    }

    #[test]
    fn sequential_follows_list_order() {
        let rules = RuleSet::new()
            .with_pairs(&[("ab", "X"), ("abc", "Y")], RuleLayer::ShortForm);
        assert_eq!(rules.apply("abcab", MatchStrategy::Sequential), "XcX");
        assert_eq!(rules.apply("abcab", MatchStrategy::LongestMatch), "YX");
    }

    #[test]
    fn word_sign_inside_a_longer_word() {
        let rules = letters_with_word_signs();
        assert_eq!(rules.apply("asphalt", MatchStrategy::Sequential), "⠵⠏⠓⠁⠇⠞");
        assert_eq!(rules.apply("asphalt", MatchStrategy::LongestMatch), "⠵⠏⠓⠁⠇⠞");
    }

    #[test]
    fn unmatched_characters_pass_through() {
        let rules = letters_with_word_signs();
        assert_eq!(rules.apply("a1é", MatchStrategy::Sequential), "⠁1é");
        assert_eq!(rules.apply("a1é", MatchStrategy::LongestMatch), "⠁1é");
    }

    #[test]
    fn rule_order_is_kept() {
        let rules = letters_with_word_signs();
        assert_eq!(rules.len(), WORD_SIGNS.len() + BRAILLE_LETTERS.len());
        assert_eq!(rules.rules()[0].pattern, "but");
        assert_eq!(rules.rules()[0].layer, RuleLayer::WordSign);
        assert_eq!(rules.rules()[WORD_SIGNS.len()].layer, RuleLayer::Letter);
    }

    #[test]
    fn strategy_parses_from_config_spelling() {
        assert_eq!("longest-match".parse::<MatchStrategy>(), Ok(MatchStrategy::LongestMatch));
        assert_eq!("Sequential".parse::<MatchStrategy>(), Ok(MatchStrategy::Sequential));
        assert!("greedy".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::LongestMatch.to_string(), "longest_match");
    }
}
