//! Turning an assembled tree into the discovery result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kind::DeclarationKind;
use crate::tree::{Tree, TreeAssembler};

/// Metadata-rich tree with empty `children` pruned away.
pub type ExtendedTree = IndexMap<String, ExtendedNode>;

/// Simplified projection: leaves are `"file:line"`, branches are maps.
pub type SimpleTree = IndexMap<String, SimpleNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedNode {
    pub kind: DeclarationKind,
    pub source_file: String,
    pub source_line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<ExtendedTree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimpleNode {
    Location(String),
    Branch(SimpleTree),
}

/// Everything a discovery run reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// Dotted suite paths, first-seen order.
    pub suites: Vec<String>,
    /// Dotted test paths, first-seen order.
    pub tests: Vec<String>,
    pub tree: SimpleTree,
    pub extended_tree: ExtendedTree,
}

impl Inventory {
    /// Finalize an assembled run.
    pub fn from_assembler(assembler: TreeAssembler) -> Self {
        let (tree, suites, tests) = assembler.into_parts();
        let extended_tree = prune(tree);
        Self {
            suites,
            tests,
            tree: project(&extended_tree),
            extended_tree,
        }
    }
}

/// Drop `children` from every node that ends up with none.
pub fn prune(tree: Tree) -> ExtendedTree {
    tree.into_iter()
        .map(|(name, node)| {
            let children = prune(node.children);
            let node = ExtendedNode {
                kind: node.kind,
                source_file: node.location.file,
                source_line: node.location.line,
                children: (!children.is_empty()).then_some(children),
            };
            (name, node)
        })
        .collect()
}

/// Project a pruned tree; branch provenance is not carried over.
pub fn project(tree: &ExtendedTree) -> SimpleTree {
    tree.iter()
        .map(|(name, node)| {
            let projected = match &node.children {
                Some(children) => SimpleNode::Branch(project(children)),
                None => SimpleNode::Location(format!("{}:{}", node.source_file, node.source_line)),
            };
            (name.clone(), projected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SourceLocation;
    use serde_json::json;

    fn sample() -> TreeAssembler {
        let mut asm = TreeAssembler::new();
        asm.insert(&[], "test-0", DeclarationKind::Test, SourceLocation::new("test/a.js", 1));
        asm.insert(&[], "suite-1", DeclarationKind::Suite, SourceLocation::new("test/a.js", 5));
        asm.insert(
            &["suite-1".to_string()],
            "test-1",
            DeclarationKind::TestSkip,
            SourceLocation::new("test/a.js", 6),
        );
        asm.insert(&[], "empty", DeclarationKind::Suite, SourceLocation::new("test/a.js", 9));
        asm.add_suite("suite-1".into());
        asm.add_suite("empty".into());
        asm.add_test("test-0".into());
        asm.add_test("suite-1.test-1".into());
        asm
    }

    #[test]
    fn test_prune_drops_empty_children() {
        let inventory = Inventory::from_assembler(sample());
        assert!(inventory.extended_tree["test-0"].children.is_none());
        assert!(inventory.extended_tree["empty"].children.is_none());
        assert!(inventory.extended_tree["suite-1"].children.is_some());
    }

    #[test]
    fn test_projection_shape() {
        let inventory = Inventory::from_assembler(sample());
        let value = serde_json::to_value(&inventory.tree).unwrap();
        assert_eq!(
            value,
            json!({
                "test-0": "test/a.js:1",
                "suite-1": { "test-1": "test/a.js:6" },
                "empty": "test/a.js:9"
            })
        );
    }

    #[test]
    fn test_inventory_json_field_names() {
        let inventory = Inventory::from_assembler(sample());
        let value = serde_json::to_value(&inventory).unwrap();
        assert_eq!(value["suites"], json!(["suite-1", "empty"]));
        assert_eq!(value["tests"], json!(["test-0", "suite-1.test-1"]));
        assert_eq!(
            value["extendedTree"]["suite-1"],
            json!({
                "kind": "suite",
                "sourceFile": "test/a.js",
                "sourceLine": 5,
                "children": {
                    "test-1": { "kind": "test-skip", "sourceFile": "test/a.js", "sourceLine": 6 }
                }
            })
        );
    }

    #[test]
    fn test_inventory_round_trips_through_json() {
        let inventory = Inventory::from_assembler(sample());
        let text = serde_json::to_string(&inventory).unwrap();
        let parsed: Inventory = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, inventory);
    }
}
