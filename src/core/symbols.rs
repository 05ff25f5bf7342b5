// File: src/core/symbols.rs
use log::warn;
use std::collections::HashMap;

/// One forward mapping: a source character and the symbol it becomes.
pub type SymbolEntry = (char, &'static str);

/// An ordered, immutable forward table (character -> symbol).
///
/// Keys are unique. If a literal repeats a key, the first entry is kept.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    name: &'static str,
    entries: Vec<SymbolEntry>,
    index: HashMap<char, &'static str>,
}

impl SymbolTable {
    pub fn from_entries(name: &'static str, literal: &[SymbolEntry]) -> Self {
        let mut entries = Vec::with_capacity(literal.len());
        let mut index = HashMap::with_capacity(literal.len());
        for &(key, symbol) in literal {
            if index.contains_key(&key) {
                warn!("table '{}': duplicate key {:?} ignored", name, key);
                continue;
            }
            index.insert(key, symbol);
            entries.push((key, symbol));
        }
        Self { name, entries, index }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the symbol for `key`, if the table models it.
    pub fn lookup(&self, key: char) -> Option<&'static str> {
        self.index.get(&key).copied()
    }

    /// Same as [`lookup`](Self::lookup) with `None` collapsed to `""`, which is
    /// how unmodelled characters vanish from codec output.
    pub fn lookup_or_empty(&self, key: char) -> &'static str {
        self.lookup(key).unwrap_or("")
    }

    pub fn contains(&self, key: char) -> bool {
        self.index.contains_key(&key)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = SymbolEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the symbol -> character table for this table alone.
    pub fn reverse(&self) -> ReverseTable {
        ReverseTable::build(&[self])
    }
}

/// Derived symbol -> character table. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseTable {
    map: HashMap<&'static str, char>,
    max_symbol_chars: usize,
}

impl ReverseTable {
    /// Reverses one or more forward tables, in order.
    ///
    /// Conflict rule: the first table entry to claim a symbol keeps it.
    pub fn build(tables: &[&SymbolTable]) -> Self {
        let mut map: HashMap<&'static str, char> = HashMap::new();
        let mut max_symbol_chars = 0;
        for table in tables {
            for (key, symbol) in table.entries() {
                if let Some(&existing) = map.get(symbol) {
                    warn!(
                        "table '{}': symbol {:?} for {:?} already maps to {:?}, keeping the first",
                        table.name(),
                        symbol,
                        key,
                        existing
                    );
                    continue;
                }
                map.insert(symbol, key);
                max_symbol_chars = max_symbol_chars.max(symbol.chars().count());
            }
        }
        Self { map, max_symbol_chars }
    }

    pub fn lookup(&self, symbol: &str) -> Option<char> {
        self.map.get(symbol).copied()
    }

    /// Length, in chars, of the longest symbol in the table.
    pub fn max_symbol_chars(&self) -> usize {
        self.max_symbol_chars
    }

    /// Finds the longest symbol that prefixes `input`.
    /// Returns the decoded character and the byte length consumed.
    pub fn longest_prefix(&self, input: &str) -> Option<(char, usize)> {
        let boundaries: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .skip(1)
            .chain(std::iter::once(input.len()))
            .take(self.max_symbol_chars)
            .collect();
        boundaries
            .into_iter()
            .rev()
            .find_map(|end| self.lookup(&input[..end]).map(|ch| (ch, end)))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
