//! The registry of extracted blocks: the single shared read model.
//!
//! Built once by the scanner, then consumed read-only by the grouper. Keys
//! are unique by construction. Iteration order is final-write encounter
//! order; it carries no semantics beyond making the unused-identifier
//! diagnostic deterministic.

use std::collections::HashMap;

use crate::scanner::Block;

#[derive(Debug, Default)]
pub struct Registry {
    blocks: HashMap<String, Block>,
    order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Inserts a block, returning the one it displaced if the identifier
    /// was already present. Re-insertion moves the identifier to the back
    /// of the iteration order.
    pub fn insert(&mut self, block: Block) -> Option<Block> {
        let name = block.name.clone();
        let displaced = self.blocks.insert(name.clone(), block);
        if displaced.is_some() {
            self.order.retain(|n| n != &name);
        }
        self.order.push(name);
        displaced
    }

    /// Pure read; no mutation.
    pub fn lookup(&self, identifier: &str) -> Option<&Block> {
        self.blocks.get(identifier)
    }

    /// Identifiers in final-write encounter order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
