//! Comment reattachment.
//!
//! The parser captures comments against source ranges and attaches them
//! to the nearest node. The dispatcher runs this step on every node's
//! freshly generated text, so any node (not just top-level statements)
//! may carry comments back into the output.

use jsty_ast::{Comment, CommentKind, Node};

/// Merge a node's attached comments into its generated text.
///
/// Leading comments go on their own lines before the text; trailing
/// comments follow on the same line. A comment whose rendered form is
/// already present is skipped, which makes the merge idempotent and
/// prevents duplicating a comment that was already inserted while
/// emitting a descendant node.
pub fn attach(node: &Node, text: &str) -> String {
    let base = node.base();
    if base.leading_comments.is_empty() && base.trailing_comments.is_empty() {
        return text.to_string();
    }

    let mut out = String::new();
    for comment in &base.leading_comments {
        push_leading(&mut out, text, comment);
    }
    out.push_str(text);
    for comment in &base.trailing_comments {
        push_trailing(&mut out, comment);
    }
    out
}

fn push_leading(out: &mut String, text: &str, comment: &Comment) {
    let rendered = comment.render();
    if text.contains(&rendered) || out.contains(&rendered) {
        return;
    }
    out.push_str(&rendered);
    out.push('\n');
}

fn push_trailing(out: &mut String, comment: &Comment) {
    let rendered = comment.render();
    if out.contains(&rendered) {
        return;
    }
    out.push(' ');
    out.push_str(&rendered);
    // A trailing line comment swallows the rest of the line; terminate it
    // so whatever the caller appends next stays outside the comment.
    if comment.kind == CommentKind::Line {
        out.push('\n');
    }
}
