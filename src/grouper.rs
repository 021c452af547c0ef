//! Assembles one output document per group from the registry.
//!
//! Best-effort by design: a member the registry cannot supply is recorded as
//! a miss and skipped, so one missing test never blocks the other suites.
//! Every group yields a document, even an empty one.

use crate::groups::GroupSpec;
use crate::registry::Registry;
use crate::scanner::Block;

/// One assembled suite: group name plus the member blocks that were found,
/// in declared order. Constructed once per run, written once, discarded.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    pub group: String,
    pub blocks: Vec<Block>,
}

/// The result of one grouping pass over the registry.
#[derive(Debug)]
pub struct GroupReport {
    /// One document per group table entry, in table order.
    pub documents: Vec<OutputDocument>,
    /// `(group, identifier)` pairs requested but absent from the registry.
    pub missing: Vec<(String, String)>,
    /// Registry identifiers no group claims, in registry order. Informational
    /// only; they are never written anywhere.
    pub ungrouped: Vec<String>,
}

impl GroupReport {
    /// True when every requested identifier was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Walks the group table once against a fully-populated, immutable registry.
pub fn assemble(registry: &Registry, spec: &GroupSpec) -> GroupReport {
    let mut documents = Vec::with_capacity(spec.groups.len());
    let mut missing = Vec::new();

    for group in &spec.groups {
        let mut blocks = Vec::new();
        for member in &group.members {
            match registry.lookup(member) {
                Some(block) => blocks.push(block.clone()),
                None => missing.push((group.name.clone(), member.clone())),
            }
        }
        documents.push(OutputDocument {
            group: group.name.clone(),
            blocks,
        });
    }

    let ungrouped = registry
        .names()
        .filter(|name| !spec.requested().any(|r| r == *name))
        .map(|name| name.to_string())
        .collect();

    GroupReport {
        documents,
        missing,
        ungrouped,
    }
}
