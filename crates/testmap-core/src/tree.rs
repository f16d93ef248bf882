//! Tree assembly.
//!
//! Declarations arrive one at a time, in source order, together with the
//! route of suites that were open when they were made. [`TreeAssembler`] slots
//! each one into a nested tree keyed by name and keeps the flat suite and test
//! path sets alongside it.
//!
//! Names are merged, not duplicated: a second `describe("X")` at the same depth
//! reuses the first node, so its children accumulate and its own metadata is
//! overwritten by the later declaration.

use indexmap::{IndexMap, IndexSet};

use crate::kind::DeclarationKind;
use crate::site::SourceLocation;

/// Root of the declaration tree: sibling names in first-seen order.
pub type Tree = IndexMap<String, DeclarationNode>;

/// One declared suite, test or hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    pub kind: DeclarationKind,
    pub location: SourceLocation,
    pub children: Tree,
}

impl DeclarationNode {
    pub fn new(kind: DeclarationKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            children: Tree::new(),
        }
    }

    /// Placeholder for a nesting level that has no declaration of its own yet.
    pub fn branch_marker() -> Self {
        Self::new(DeclarationKind::Suite, SourceLocation::unknown())
    }

    /// A test or hook with nothing nested under it.
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf() && self.children.is_empty()
    }
}

/// Accumulates the tree and the flat path sets for one discovery run.
#[derive(Debug, Default)]
pub struct TreeAssembler {
    tree: Tree,
    suites: IndexSet<String>,
    tests: IndexSet<String>,
}

impl TreeAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration named `name` under the suites in `route`.
    ///
    /// Missing levels, and leaves that have to become a nesting level, are
    /// replaced by a fresh branch marker; the leaf's metadata is discarded.
    /// The final node gets `kind` and `location` while keeping its children.
    pub fn insert(
        &mut self,
        route: &[String],
        name: &str,
        kind: DeclarationKind,
        location: SourceLocation,
    ) {
        let mut level = &mut self.tree;
        for segment in route {
            let node = level
                .entry(segment.clone())
                .or_insert_with(DeclarationNode::branch_marker);
            if node.is_leaf() {
                *node = DeclarationNode::branch_marker();
            }
            level = &mut node.children;
        }

        match level.get_mut(name) {
            Some(node) => {
                node.kind = kind;
                node.location = location;
            }
            None => {
                level.insert(name.to_string(), DeclarationNode::new(kind, location));
            }
        }
    }

    /// Record the dotted path of a suite. Returns false for duplicates.
    pub fn add_suite(&mut self, path: String) -> bool {
        self.suites.insert(path)
    }

    /// Record the dotted path of a test. Returns false for duplicates.
    pub fn add_test(&mut self, path: String) -> bool {
        self.tests.insert(path)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn suites(&self) -> impl Iterator<Item = &str> {
        self.suites.iter().map(String::as_str)
    }

    pub fn tests(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(String::as_str)
    }

    pub fn into_parts(self) -> (Tree, Vec<String>, Vec<String>) {
        (
            self.tree,
            self.suites.into_iter().collect(),
            self.tests.into_iter().collect(),
        )
    }
}
