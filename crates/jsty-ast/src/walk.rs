//! Child traversal and the derived parent index.
//!
//! Parent links are not stored in the tree. [`ParentMap`] is built once
//! per program by a full walk and is read-only afterward; it must be
//! rebuilt from scratch whenever a different program is generated.

use rustc_hash::FxHashMap;

use crate::node::{Node, NodeId};

/// Invoke `f` once for each direct child of `node`, in source order.
pub fn for_each_child<'a>(node: &'a Node, f: &mut dyn FnMut(&'a Node)) {
    match node {
        Node::Program(n) => n.body.iter().for_each(&mut *f),
        Node::Identifier(_)
        | Node::Literal(_)
        | Node::ThisExpression(_)
        | Node::EmptyStatement(_)
        | Node::DebuggerStatement(_)
        | Node::TemplateElement(_) => {}
        Node::TemplateLiteral(n) => {
            n.quasis.iter().for_each(&mut *f);
            n.expressions.iter().for_each(&mut *f);
        }
        Node::Property(n) => {
            f(&n.key);
            f(&n.value);
        }
        Node::SpreadElement(n) => f(&n.argument),
        Node::AssignmentPattern(n) => {
            f(&n.left);
            f(&n.right);
        }
        Node::ObjectPattern(n) => n.properties.iter().for_each(&mut *f),
        Node::ArrayPattern(n) => n.elements.iter().flatten().for_each(&mut *f),
        Node::VariableDeclaration(n) => n.declarations.iter().for_each(&mut *f),
        Node::VariableDeclarator(n) => {
            f(&n.id);
            if let Some(init) = &n.init {
                f(init);
            }
        }
        Node::FunctionDeclaration(n) => {
            if let Some(id) = &n.id {
                f(id);
            }
            n.params.iter().for_each(&mut *f);
            f(&n.body);
        }
        Node::ClassDeclaration(n) => {
            if let Some(id) = &n.id {
                f(id);
            }
        }
        Node::ImportDeclaration(n) => {
            n.specifiers.iter().for_each(&mut *f);
            f(&n.source);
        }
        Node::ImportDefaultSpecifier(n) => f(&n.local),
        Node::ImportSpecifier(n) => {
            f(&n.local);
            f(&n.imported);
        }
        Node::ImportNamespaceSpecifier(n) => f(&n.local),
        Node::ExportDefaultDeclaration(n) => f(&n.declaration),
        Node::BinaryExpression(n) => {
            f(&n.left);
            f(&n.right);
        }
        Node::LogicalExpression(n) => {
            f(&n.left);
            f(&n.right);
        }
        Node::UnaryExpression(n) => f(&n.argument),
        Node::UpdateExpression(n) => f(&n.argument),
        Node::AssignmentExpression(n) => {
            f(&n.left);
            f(&n.right);
        }
        Node::ConditionalExpression(n) => {
            f(&n.test);
            f(&n.consequent);
            f(&n.alternate);
        }
        Node::CallExpression(n) => {
            f(&n.callee);
            n.arguments.iter().for_each(&mut *f);
        }
        Node::NewExpression(n) => {
            f(&n.callee);
            n.arguments.iter().for_each(&mut *f);
        }
        Node::MemberExpression(n) => {
            f(&n.object);
            f(&n.property);
        }
        Node::ArrayExpression(n) => n.elements.iter().flatten().for_each(&mut *f),
        Node::ObjectExpression(n) => n.properties.iter().for_each(&mut *f),
        Node::FunctionExpression(n) => {
            if let Some(id) = &n.id {
                f(id);
            }
            n.params.iter().for_each(&mut *f);
            f(&n.body);
        }
        Node::ArrowFunctionExpression(n) => {
            n.params.iter().for_each(&mut *f);
            f(&n.body);
        }
        Node::SequenceExpression(n) => n.expressions.iter().for_each(&mut *f),
        Node::YieldExpression(n) => {
            if let Some(argument) = &n.argument {
                f(argument);
            }
        }
        Node::BlockStatement(n) => n.body.iter().for_each(&mut *f),
        Node::ExpressionStatement(n) => f(&n.expression),
        Node::IfStatement(n) => {
            f(&n.test);
            f(&n.consequent);
            if let Some(alternate) = &n.alternate {
                f(alternate);
            }
        }
        Node::ForStatement(n) => {
            if let Some(init) = &n.init {
                f(init);
            }
            if let Some(test) = &n.test {
                f(test);
            }
            if let Some(update) = &n.update {
                f(update);
            }
            f(&n.body);
        }
        Node::ForInStatement(n) => {
            f(&n.left);
            f(&n.right);
            f(&n.body);
        }
        Node::ForOfStatement(n) => {
            f(&n.left);
            f(&n.right);
            f(&n.body);
        }
        Node::WhileStatement(n) => {
            f(&n.test);
            f(&n.body);
        }
        Node::DoWhileStatement(n) => {
            f(&n.body);
            f(&n.test);
        }
        Node::ReturnStatement(n) => {
            if let Some(argument) = &n.argument {
                f(argument);
            }
        }
        Node::BreakStatement(n) => {
            if let Some(label) = &n.label {
                f(label);
            }
        }
        Node::ContinueStatement(n) => {
            if let Some(label) = &n.label {
                f(label);
            }
        }
        Node::SwitchStatement(n) => {
            f(&n.discriminant);
            n.cases.iter().for_each(&mut *f);
        }
        Node::SwitchCase(n) => {
            if let Some(test) = &n.test {
                f(test);
            }
            n.consequent.iter().for_each(&mut *f);
        }
        Node::ThrowStatement(n) => f(&n.argument),
        Node::TryStatement(n) => {
            f(&n.block);
            if let Some(handler) = &n.handler {
                f(handler);
            }
            if let Some(finalizer) = &n.finalizer {
                f(finalizer);
            }
        }
        Node::CatchClause(n) => {
            f(&n.param);
            f(&n.body);
        }
        Node::LabeledStatement(n) => {
            f(&n.label);
            f(&n.body);
        }
        Node::WithStatement(n) => {
            f(&n.object);
            f(&n.body);
        }
    }
}

/// Pre-order walk over `node` and every descendant.
pub fn walk<'a>(node: &'a Node, f: &mut dyn FnMut(&'a Node)) {
    f(node);
    for_each_child(node, &mut |child| walk(child, f));
}

/// Derived node-to-parent index over one program tree.
pub struct ParentMap<'a> {
    parents: FxHashMap<NodeId, &'a Node>,
}

impl<'a> ParentMap<'a> {
    /// Build the index with a single full walk from `root`.
    pub fn build(root: &'a Node) -> Self {
        let mut parents = FxHashMap::default();
        record(root, &mut parents);
        ParentMap { parents }
    }

    pub fn parent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parents.get(&node.id()).copied()
    }

    pub fn grandparent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parent_of(node).and_then(|parent| self.parent_of(parent))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

fn record<'a>(node: &'a Node, parents: &mut FxHashMap<NodeId, &'a Node>) {
    for_each_child(node, &mut |child| {
        parents.insert(child.id(), node);
        record(child, parents);
    });
}
