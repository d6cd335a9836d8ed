//! Syntax-tree model for the jsty transpiler.
//!
//! This crate provides the node shapes the generator consumes:
//! - Source spans (`Span`)
//! - Attached comments (`Comment`, `CommentKind`)
//! - The ESTree node tagged union (`Node`) and its operator enums
//! - Child traversal and the derived parent index (`walk`, `ParentMap`)
//!
//! Parsing is not implemented here. Trees are produced by an external
//! ECMAScript parser (esprima with `range: true, attachComment: true`)
//! and deserialized from its JSON output via serde.

// Span - half-open [start, end) character offsets
pub mod span;
pub use span::Span;

// Comments captured by the parser and reattached during emission
pub mod comments;
pub use comments::{Comment, CommentKind};

// The node tagged union
pub mod node;
pub use node::{
    AssignmentOp, BinaryOp, LiteralValue, LogicalOp, Node, NodeBase, NodeId, PropertyKind,
    UnaryOp, UpdateOp, VarKind,
};

// Traversal and the derived parent index
pub mod walk;
pub use walk::{ParentMap, for_each_child, walk};
