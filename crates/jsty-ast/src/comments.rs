//! Comments attached by the parser.
//!
//! Comments are not structural: the parser captures them against source
//! ranges and attaches them to the nearest node as `leadingComments` /
//! `trailingComments`. The emitter is responsible for merging them back
//! into generated text.

use serde::Deserialize;

use crate::span::Span;

/// Kind of comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CommentKind {
    /// `// comment`
    Line,
    /// `/* comment */`
    Block,
}

/// A single comment captured during parsing.
///
/// `value` is the comment text without its delimiters, exactly as the
/// parser reports it (so a line comment `// hi` carries `" hi"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub value: String,
    #[serde(default)]
    pub range: Span,
}

impl Comment {
    /// Render the comment back to source form, delimiters included.
    pub fn render(&self) -> String {
        match self.kind {
            CommentKind::Line => format!("//{}", self.value),
            CommentKind::Block => format!("/*{}*/", self.value),
        }
    }
}
