//! The ESTree node tagged union.
//!
//! One variant per supported node kind, deserialized from the parser's
//! JSON output using the `type` field as the tag. Nodes are immutable
//! after parse; parent links are not stored inline and must be derived
//! through [`crate::walk::ParentMap`].
//!
//! Kinds the generator recognizes but intentionally rejects (classes,
//! `for…of`, labels, `with`, `yield`) still get variants here so the
//! rejection is explicit rather than a parse failure.

use serde::Deserialize;

use crate::comments::Comment;
use crate::span::Span;

/// Fields shared by every node: its source range and any comments the
/// parser attached to it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeBase {
    #[serde(default)]
    pub range: Span,
    #[serde(default, rename = "leadingComments")]
    pub leading_comments: Vec<Comment>,
    #[serde(default, rename = "trailingComments")]
    pub trailing_comments: Vec<Comment>,
}

impl NodeBase {
    pub fn with_range(start: u32, end: u32) -> Self {
        NodeBase {
            range: Span::new(start, end),
            ..Default::default()
        }
    }
}

/// Stable identity of a node within one program tree.
///
/// The tree is uniquely owned and immutable after parse, so a node's
/// address is a well-defined identity for the lifetime of the program.
/// Identities from different trees must never be mixed; the parent map
/// is rebuilt from scratch whenever the program is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

macro_rules! node_union {
    ($($kind:ident),+ $(,)?) => {
        /// A syntax-tree node.
        #[derive(Debug, Clone, Deserialize)]
        #[serde(tag = "type")]
        pub enum Node {
            $($kind($kind),)+
        }

        impl Node {
            /// The ESTree kind name, as spelled in the parser's `type` field.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $(Node::$kind(_) => stringify!($kind),)+
                }
            }

            /// Shared fields (source range, attached comments).
            pub fn base(&self) -> &NodeBase {
                match self {
                    $(Node::$kind(n) => &n.base,)+
                }
            }
        }
    };
}

node_union!(
    // Root and leaves
    Program,
    Identifier,
    Literal,
    TemplateLiteral,
    TemplateElement,
    Property,
    SpreadElement,
    // Patterns
    AssignmentPattern,
    ObjectPattern,
    ArrayPattern,
    // Declarations
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ClassDeclaration,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportSpecifier,
    ImportNamespaceSpecifier,
    ExportDefaultDeclaration,
    // Expressions
    BinaryExpression,
    LogicalExpression,
    UnaryExpression,
    UpdateExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    ArrayExpression,
    ObjectExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    SequenceExpression,
    ThisExpression,
    YieldExpression,
    // Statements
    BlockStatement,
    ExpressionStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoWhileStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    EmptyStatement,
    LabeledStatement,
    WithStatement,
    DebuggerStatement,
);

impl Node {
    /// Identity of this node within its tree. See [`NodeId`].
    pub fn id(&self) -> NodeId {
        NodeId(self as *const Node as usize)
    }

    pub fn range(&self) -> Span {
        self.base().range
    }
}

// =============================================================================
// Root and leaves
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    #[serde(flatten)]
    pub base: NodeBase,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Identifier {
    #[serde(flatten)]
    pub base: NodeBase,
    pub name: String,
}

/// A literal value. `raw` is the exact source text and is preferred for
/// emission; `value` is the parsed value used for fallback rendering and
/// for shape checks (`null` detection for annotation insertion).
#[derive(Debug, Clone, Deserialize)]
pub struct Literal {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub value: LiteralValue,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub regex: Option<RegexValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// Regex literals carry an opaque object value; the usable data is in
    /// `Literal::regex` and `Literal::raw`.
    Regex(RegexValue),
    #[default]
    Null,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegexValue {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub flags: String,
}

impl Literal {
    /// Source form of this literal: the raw text when the parser captured
    /// it, otherwise a rendering of the parsed value.
    pub fn source_text(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        match &self.value {
            LiteralValue::Null => "null".to_string(),
            LiteralValue::Bool(b) => b.to_string(),
            LiteralValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 9.007_199_254_740_992e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            LiteralValue::String(s) => {
                format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            LiteralValue::Regex(r) => format!("/{}/{}", r.pattern, r.flags),
        }
    }

    pub fn is_null(&self) -> bool {
        self.regex.is_none() && matches!(self.value, LiteralValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateLiteral {
    #[serde(flatten)]
    pub base: NodeBase,
    pub quasis: Vec<Node>,
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateElement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub value: TemplateElementValue,
    #[serde(default)]
    pub tail: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateElementValue {
    pub raw: String,
    #[serde(default)]
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub base: NodeBase,
    pub key: Box<Node>,
    pub value: Box<Node>,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpreadElement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub argument: Box<Node>,
}

// =============================================================================
// Patterns
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentPattern {
    #[serde(flatten)]
    pub base: NodeBase,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectPattern {
    #[serde(flatten)]
    pub base: NodeBase,
    pub properties: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArrayPattern {
    #[serde(flatten)]
    pub base: NodeBase,
    /// Elements may be elided (`[a, , b]`), reported as null by the parser.
    pub elements: Vec<Option<Node>>,
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub base: NodeBase,
    pub declarations: Vec<Node>,
    pub kind: VarKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Let => "let",
            VarKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariableDeclarator {
    #[serde(flatten)]
    pub base: NodeBase,
    pub id: Box<Node>,
    #[serde(default)]
    pub init: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDeclaration {
    #[serde(flatten)]
    pub base: NodeBase,
    pub id: Option<Box<Node>>,
    pub params: Vec<Node>,
    pub body: Box<Node>,
    #[serde(default)]
    pub generator: bool,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDeclaration {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub id: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportDeclaration {
    #[serde(flatten)]
    pub base: NodeBase,
    pub specifiers: Vec<Node>,
    pub source: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportDefaultSpecifier {
    #[serde(flatten)]
    pub base: NodeBase,
    pub local: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportSpecifier {
    #[serde(flatten)]
    pub base: NodeBase,
    pub local: Box<Node>,
    pub imported: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportNamespaceSpecifier {
    #[serde(flatten)]
    pub base: NodeBase,
    pub local: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportDefaultDeclaration {
    #[serde(flatten)]
    pub base: NodeBase,
    pub declaration: Box<Node>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BinaryExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub operator: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "==")]
    EqEq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "===")]
    EqEqEq,
    #[serde(rename = "!==")]
    NotEqEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
    #[serde(rename = ">>>")]
    UShr,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Mod,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::EqEq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::EqEqEq => "===",
            BinaryOp::NotEqEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::In => "in",
            BinaryOp::Instanceof => "instanceof",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogicalExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub operator: LogicalOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::Or => "||",
            LogicalOp::And => "&&",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnaryExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub operator: UnaryOp,
    #[serde(default = "default_true")]
    pub prefix: bool,
    pub argument: Box<Node>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Minus => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Typeof => "typeof",
            UnaryOp::Void => "void",
            UnaryOp::Delete => "delete",
        }
    }

    /// Keyword operators need a separating space before their operand.
    pub fn is_keyword(self) -> bool {
        matches!(self, UnaryOp::Typeof | UnaryOp::Void | UnaryOp::Delete)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub operator: UpdateOp,
    #[serde(default)]
    pub prefix: bool,
    pub argument: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UpdateOp {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl UpdateOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub operator: AssignmentOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AssignmentOp {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    ModAssign,
    #[serde(rename = "<<=")]
    ShlAssign,
    #[serde(rename = ">>=")]
    ShrAssign,
    #[serde(rename = ">>>=")]
    UShrAssign,
    #[serde(rename = "|=")]
    BitOrAssign,
    #[serde(rename = "^=")]
    BitXorAssign,
    #[serde(rename = "&=")]
    BitAndAssign,
}

impl AssignmentOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOp::Assign => "=",
            AssignmentOp::AddAssign => "+=",
            AssignmentOp::SubAssign => "-=",
            AssignmentOp::MulAssign => "*=",
            AssignmentOp::DivAssign => "/=",
            AssignmentOp::ModAssign => "%=",
            AssignmentOp::ShlAssign => "<<=",
            AssignmentOp::ShrAssign => ">>=",
            AssignmentOp::UShrAssign => ">>>=",
            AssignmentOp::BitOrAssign => "|=",
            AssignmentOp::BitXorAssign => "^=",
            AssignmentOp::BitAndAssign => "&=",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionalExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub object: Box<Node>,
    pub property: Box<Node>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArrayExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    /// Elements may be elided (`[a, , b]`), reported as null by the parser.
    pub elements: Vec<Option<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub properties: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub id: Option<Box<Node>>,
    pub params: Vec<Node>,
    pub body: Box<Node>,
    #[serde(default)]
    pub generator: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArrowFunctionExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub params: Vec<Node>,
    /// Either a block statement or a bare expression body.
    pub body: Box<Node>,
    #[serde(default)]
    pub generator: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SequenceExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThisExpression {
    #[serde(flatten)]
    pub base: NodeBase,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldExpression {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub argument: Option<Box<Node>>,
    #[serde(default)]
    pub delegate: bool,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BlockStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpressionStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub expression: Box<Node>,
    /// Set when the statement is a directive prologue entry (`'use strict'`).
    #[serde(default)]
    pub directive: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IfStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    #[serde(default)]
    pub alternate: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub init: Option<Box<Node>>,
    #[serde(default)]
    pub test: Option<Box<Node>>,
    #[serde(default)]
    pub update: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForInStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub body: Box<Node>,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct ForOfStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhileStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub test: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoWhileStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub body: Box<Node>,
    pub test: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub argument: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreakStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub label: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContinueStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default)]
    pub label: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwitchStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub discriminant: Box<Node>,
    pub cases: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwitchCase {
    #[serde(flatten)]
    pub base: NodeBase,
    /// None for the `default:` case.
    #[serde(default)]
    pub test: Option<Box<Node>>,
    pub consequent: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThrowStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub argument: Box<Node>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TryStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub block: Box<Node>,
    #[serde(default)]
    pub handler: Option<Box<Node>>,
    #[serde(default)]
    pub finalizer: Option<Box<Node>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatchClause {
    #[serde(flatten)]
    pub base: NodeBase,
    pub param: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyStatement {
    #[serde(flatten)]
    pub base: NodeBase,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct LabeledStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub label: Box<Node>,
    pub body: Box<Node>,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Deserialize)]
pub struct WithStatement {
    #[serde(flatten)]
    pub base: NodeBase,
    pub object: Box<Node>,
    pub body: Box<Node>,
}

/// Recognized so rejection can name the construct; never emitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebuggerStatement {
    #[serde(flatten)]
    pub base: NodeBase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_esprima_variable_declaration() {
        let json = r#"{
            "type": "VariableDeclaration",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": {"type": "Identifier", "name": "a", "range": [4, 5]},
                "init": {"type": "Literal", "value": 1, "raw": "1", "range": [8, 9]},
                "range": [4, 9]
            }],
            "kind": "var",
            "range": [0, 10]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let Node::VariableDeclaration(dec) = &node else {
            panic!("expected a variable declaration, got {}", node.kind_name());
        };
        assert_eq!(dec.kind, VarKind::Var);
        assert_eq!(dec.declarations.len(), 1);
        assert_eq!(node.range(), Span::new(0, 10));
    }

    #[test]
    fn deserializes_operators_from_source_spelling() {
        let json = r#"{
            "type": "BinaryExpression",
            "operator": "instanceof",
            "left": {"type": "Identifier", "name": "a", "range": [0, 1]},
            "right": {"type": "Identifier", "name": "B", "range": [13, 14]},
            "range": [0, 14]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let Node::BinaryExpression(bin) = node else {
            panic!("expected a binary expression");
        };
        assert_eq!(bin.operator, BinaryOp::Instanceof);
        assert_eq!(bin.operator.as_str(), "instanceof");
    }

    #[test]
    fn attached_comments_survive_deserialization() {
        let json = r#"{
            "type": "EmptyStatement",
            "range": [20, 21],
            "leadingComments": [{"type": "Line", "value": " lead", "range": [0, 7]}]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.base().leading_comments.len(), 1);
        assert_eq!(node.base().leading_comments[0].value, " lead");
    }

    #[test]
    fn unknown_kind_is_a_parse_failure() {
        let json = r#"{"type": "Decorator", "range": [0, 1]}"#;
        assert!(serde_json::from_str::<Node>(json).is_err());
    }

    #[test]
    fn regex_literal_value_is_tolerated() {
        let json = r#"{
            "type": "Literal",
            "value": {},
            "raw": "/ab+c/g",
            "regex": {"pattern": "ab+c", "flags": "g"},
            "range": [0, 7]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let Node::Literal(lit) = node else {
            panic!("expected a literal");
        };
        assert!(!lit.is_null());
        assert_eq!(lit.source_text(), "/ab+c/g");
    }
}
