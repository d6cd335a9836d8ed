//! Usage scans backing the annotation heuristics.
//!
//! These are pure read-only walks over a bounded sub-range of the tree.
//! They decide the inferred mutability keyword and the `this: any`
//! receiver parameter; parameter types come from the pluggable
//! [`ParamTypeLookup`] capability.

use jsty_ast::{Node, Span, walk};

/// Whether any plain assignment targeting `name` occurs inside `within`.
///
/// Declarations do not count, only `AssignmentExpression` nodes whose
/// left side is the identifier. Used to relax an inferred `const` to
/// `let` when the enclosing block reassigns the variable.
pub fn find_assignment_to(program: &Node, name: &str, within: Span) -> bool {
    let mut found = false;
    walk(program, &mut |node| {
        if found {
            return;
        }
        if let Node::AssignmentExpression(assign) = node {
            if !within.contains(node.range()) {
                return;
            }
            if let Node::Identifier(target) = assign.left.as_ref() {
                if target.name == name {
                    found = true;
                }
            }
        }
    });
    found
}

/// Whether the function body references the enclosing receiver (`this`).
///
/// The whole body subtree is scanned, nested functions included: a
/// `this` in a nested function still makes the outer body reference the
/// receiver in the original program's sense, and the inserted
/// `this: any` parameter is harmless for nested-only usage.
pub fn contains_this_usage(body: &Node) -> bool {
    let mut found = false;
    walk(body, &mut |node| {
        if matches!(node, Node::ThisExpression(_)) {
            found = true;
        }
    });
    found
}

/// Usage-based parameter-type lookup.
///
/// External capability: given a function (by name, when it has one) and a
/// parameter, return a candidate type name inferred from call-site or
/// JSDoc-style evidence. Absence of a candidate is not an error; the
/// generator falls back to `any`.
pub trait ParamTypeLookup {
    fn param_type(
        &self,
        function_name: Option<&str>,
        param_name: &str,
        index: usize,
    ) -> Option<String>;
}

/// The default lookup: no evidence, every parameter becomes `any`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypeLookup;

impl ParamTypeLookup for NoTypeLookup {
    fn param_type(&self, _: Option<&str>, _: &str, _: usize) -> Option<String> {
        None
    }
}
