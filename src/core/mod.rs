// src/core/mod.rs
pub mod engine;
pub mod registry;
pub mod substitution;
pub mod symbols;
pub mod tables;
pub mod trie;
pub mod types;
