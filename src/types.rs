//! Core domain types for TreeFlow.
//!
//! The node/edge shapes mirror what the surrounding editor holds on screen:
//! nodes carry a 2D position (the sole signal used to tell a left child from
//! a right one) and edges are directed parent→child relations.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// On-canvas position of a node. Only `x` matters to derivation; `y` is
/// carried for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// TreeNode / TreeEdge
// ---------------------------------------------------------------------------

/// A node in the live graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub position: Position,
    pub label: String,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: Position::new(x, y),
            label: label.into(),
        }
    }
}

/// A directed parent→child edge: `source` is the parent, `target` the child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl TreeEdge {
    /// Build an edge with the `{source}-{target}` id convention the editor
    /// uses when the user draws a connection.
    pub fn connect(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
        }
    }
}

// ---------------------------------------------------------------------------
// TreeGraph
// ---------------------------------------------------------------------------

/// A full snapshot of the graph: the shape consumed at every engine boundary
/// (traversal requests, AI-issued wholesale replacements, CLI input files).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeGraph {
    #[serde(default)]
    pub nodes: Vec<TreeNode>,
    #[serde(default)]
    pub edges: Vec<TreeEdge>,
}

impl TreeGraph {
    /// The seed graph a fresh editor session starts from: a single root node,
    /// no edges.
    pub fn initial() -> Self {
        Self {
            nodes: vec![TreeNode::new("1", 250.0, 5.0, "Root")],
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ---------------------------------------------------------------------------
// TraversalOrder
// ---------------------------------------------------------------------------

/// The three traversal-type tokens a traversal request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
}

impl TraversalOrder {
    /// Canonical wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreOrder => "pre-order",
            Self::InOrder => "in-order",
            Self::PostOrder => "post-order",
        }
    }

    /// Parse from a loose string (case-insensitive, separators optional).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pre-order" | "preorder" | "pre" => Some(Self::PreOrder),
            "in-order" | "inorder" | "in" => Some(Self::InOrder),
            "post-order" | "postorder" | "post" => Some(Self::PostOrder),
            _ => None,
        }
    }

    /// All orders, for iteration in tests and tool listings.
    pub const ALL: [TraversalOrder; 3] = [Self::PreOrder, Self::InOrder, Self::PostOrder];
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = crate::error::TreeFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| crate::error::TreeFlowError::UnknownOrder(s.into()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn initial_graph_is_a_single_root() {
        let g = TreeGraph::initial();
        assert_eq!(g.nodes.len(), 1);
        assert!(g.edges.is_empty());
        assert_eq!(g.nodes[0].id, "1");
        assert_eq!(g.nodes[0].label, "Root");
        assert_eq!(g.nodes[0].position, Position::new(250.0, 5.0));
    }

    #[test]
    fn connect_uses_source_target_id_convention() {
        let e = TreeEdge::connect("a", "b");
        assert_eq!(e.id, "a-b");
        assert_eq!(e.source, "a");
        assert_eq!(e.target, "b");
    }

    #[test]
    fn node_lookup() {
        let g = TreeGraph::initial();
        assert!(g.node("1").is_some());
        assert!(g.node("2").is_none());
    }

    // -- TraversalOrder tokens ---------------------------------------------

    #[test_case(TraversalOrder::PreOrder, "pre-order" ; "token_pre")]
    #[test_case(TraversalOrder::InOrder, "in-order" ; "token_in")]
    #[test_case(TraversalOrder::PostOrder, "post-order" ; "token_post")]
    fn as_str_returns_wire_token(order: TraversalOrder, expected: &str) {
        assert_eq!(order.as_str(), expected);
    }

    #[test_case("pre-order", TraversalOrder::PreOrder ; "loose_pre_canonical")]
    #[test_case("preorder", TraversalOrder::PreOrder ; "loose_pre_joined")]
    #[test_case("PRE_ORDER", TraversalOrder::PreOrder ; "loose_pre_upper_underscore")]
    #[test_case("in-order", TraversalOrder::InOrder ; "loose_in_canonical")]
    #[test_case("InOrder", TraversalOrder::InOrder ; "loose_in_mixed")]
    #[test_case("post-order", TraversalOrder::PostOrder ; "loose_post_canonical")]
    #[test_case(" post ", TraversalOrder::PostOrder ; "loose_post_trimmed")]
    fn from_str_loose_resolves(input: &str, expected: TraversalOrder) {
        assert_eq!(TraversalOrder::from_str_loose(input), Some(expected));
    }

    #[test_case("sideways" ; "unknown_word")]
    #[test_case("" ; "unknown_empty")]
    #[test_case("order" ; "unknown_bare_order")]
    fn from_str_loose_rejects_unknown(input: &str) {
        assert_eq!(TraversalOrder::from_str_loose(input), None);
    }

    #[test]
    fn order_roundtrips_through_loose_parse() {
        for order in TraversalOrder::ALL {
            assert_eq!(TraversalOrder::from_str_loose(order.as_str()), Some(order));
        }
    }

    #[test]
    fn display_matches_as_str() {
        for order in TraversalOrder::ALL {
            assert_eq!(format!("{order}"), order.as_str());
        }
    }

    #[test]
    fn from_str_errors_carry_the_input() {
        let err = "diagonal".parse::<TraversalOrder>().unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    // -- serde --------------------------------------------------------------

    #[test]
    fn order_serializes_to_kebab_tokens() {
        let json = serde_json::to_string(&TraversalOrder::PreOrder).unwrap();
        assert_eq!(json, "\"pre-order\"");
        let back: TraversalOrder = serde_json::from_str("\"post-order\"").unwrap();
        assert_eq!(back, TraversalOrder::PostOrder);
    }

    #[test]
    fn graph_serde_roundtrip() {
        let g = TreeGraph {
            nodes: vec![
                TreeNode::new("1", 250.0, 5.0, "Root"),
                TreeNode::new("2", 150.0, 100.0, "L"),
            ],
            edges: vec![TreeEdge::connect("1", "2")],
        };
        let json = serde_json::to_string(&g).unwrap();
        let back: TreeGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn graph_deserializes_with_missing_fields_as_empty() {
        let g: TreeGraph = serde_json::from_str("{}").unwrap();
        assert!(g.nodes.is_empty());
        assert!(g.edges.is_empty());
    }
}
