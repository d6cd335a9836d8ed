use jsty_ast::Node;
use jsty_ast::node::{
    ArrayExpression, AssignmentExpression, BinaryExpression, CallExpression,
    ConditionalExpression, LogicalExpression, MemberExpression, NewExpression, ObjectExpression,
    SequenceExpression, UnaryExpression, UpdateExpression,
};

use super::Emitter;
use crate::error::EmitError;
use crate::precedence::{left_operand_needs_parens, right_operand_needs_parens};

impl Emitter<'_> {
    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn binary_expression(&self, bin: &BinaryExpression) -> Result<String, EmitError> {
        let left = self.binary_operand(bin, &bin.left, false)?;
        let right = self.binary_operand(bin, &bin.right, true)?;
        Ok(format!("{left} {} {right}", bin.operator.as_str()))
    }

    /// Emit one operand of a binary expression, parenthesized when its
    /// own structure binds looser than its position requires.
    fn binary_operand(
        &self,
        outer: &BinaryExpression,
        operand: &Node,
        is_right: bool,
    ) -> Result<String, EmitError> {
        let needs_parens = match operand {
            Node::BinaryExpression(inner) => {
                if is_right {
                    right_operand_needs_parens(outer.operator, inner.operator)
                } else {
                    left_operand_needs_parens(outer.operator, inner.operator)
                }
            }
            // Anything binding looser than every binary operator.
            Node::LogicalExpression(_)
            | Node::ConditionalExpression(_)
            | Node::AssignmentExpression(_)
            | Node::SequenceExpression(_)
            | Node::ArrowFunctionExpression(_) => true,
            _ => false,
        };
        self.maybe_parenthesized(operand, needs_parens)
    }

    pub(super) fn logical_expression(
        &self,
        logical: &LogicalExpression,
    ) -> Result<String, EmitError> {
        let left = self.logical_operand(logical, &logical.left)?;
        let right = self.logical_operand(logical, &logical.right)?;
        Ok(format!("{left} {} {right}", logical.operator.as_str()))
    }

    /// Mixed `&&`/`||` chains are always written with parentheses; a
    /// same-operator chain needs none.
    fn logical_operand(
        &self,
        outer: &LogicalExpression,
        operand: &Node,
    ) -> Result<String, EmitError> {
        let needs_parens = match operand {
            Node::LogicalExpression(inner) => inner.operator != outer.operator,
            Node::ConditionalExpression(_)
            | Node::AssignmentExpression(_)
            | Node::SequenceExpression(_)
            | Node::ArrowFunctionExpression(_) => true,
            _ => false,
        };
        self.maybe_parenthesized(operand, needs_parens)
    }

    pub(super) fn unary_expression(&self, unary: &UnaryExpression) -> Result<String, EmitError> {
        let op = unary.operator.as_str();
        let needs_parens = matches!(
            unary.argument.as_ref(),
            Node::BinaryExpression(_)
                | Node::LogicalExpression(_)
                | Node::ConditionalExpression(_)
                | Node::AssignmentExpression(_)
                | Node::SequenceExpression(_)
                | Node::ArrowFunctionExpression(_)
        );
        let mut argument = self.maybe_parenthesized(&unary.argument, needs_parens)?;

        if unary.operator.is_keyword() {
            return Ok(format!("{op} {argument}"));
        }
        // `-(-a)` and `+(+a)`, never `--a` or `++a`.
        if argument.starts_with(op) {
            argument = format!("({argument})");
        }
        Ok(format!("{op}{argument}"))
    }

    pub(super) fn update_expression(&self, update: &UpdateExpression) -> Result<String, EmitError> {
        let argument = self.emit(&update.argument)?;
        let op = update.operator.as_str();
        if update.prefix {
            Ok(format!("{op}{argument}"))
        } else {
            Ok(format!("{argument}{op}"))
        }
    }

    pub(super) fn assignment_expression(
        &self,
        assign: &AssignmentExpression,
    ) -> Result<String, EmitError> {
        let left = self.emit(&assign.left)?;
        let right = self.emit(&assign.right)?;
        Ok(format!("{left} {} {right}", assign.operator.as_str()))
    }

    pub(super) fn conditional_expression(
        &self,
        cond: &ConditionalExpression,
    ) -> Result<String, EmitError> {
        let test_parens = matches!(
            cond.test.as_ref(),
            Node::ConditionalExpression(_)
                | Node::AssignmentExpression(_)
                | Node::SequenceExpression(_)
                | Node::ArrowFunctionExpression(_)
        );
        let test = self.maybe_parenthesized(&cond.test, test_parens)?;
        let consequent = self.emit(&cond.consequent)?;
        let alternate = self.emit(&cond.alternate)?;
        Ok(format!("{test} ? {consequent} : {alternate}"))
    }

    // =========================================================================
    // Calls and members
    // =========================================================================

    pub(super) fn call_expression(&self, call: &CallExpression) -> Result<String, EmitError> {
        let callee_parens = matches!(
            call.callee.as_ref(),
            Node::FunctionExpression(_)
                | Node::ArrowFunctionExpression(_)
                | Node::ObjectExpression(_)
                | Node::SequenceExpression(_)
        );
        let callee = self.maybe_parenthesized(&call.callee, callee_parens)?;
        let arguments = self.comma_separated(&call.arguments)?;
        Ok(format!("{callee}({arguments})"))
    }

    pub(super) fn new_expression(&self, new: &NewExpression) -> Result<String, EmitError> {
        // A call callee must be parenthesized or the argument list would
        // bind to the inner call (`new (factory())()`).
        let callee_parens = matches!(
            new.callee.as_ref(),
            Node::CallExpression(_)
                | Node::FunctionExpression(_)
                | Node::ArrowFunctionExpression(_)
                | Node::SequenceExpression(_)
        );
        let callee = self.maybe_parenthesized(&new.callee, callee_parens)?;
        let arguments = self.comma_separated(&new.arguments)?;
        Ok(format!("new {callee}({arguments})"))
    }

    pub(super) fn member_expression(&self, member: &MemberExpression) -> Result<String, EmitError> {
        let object_parens = match member.object.as_ref() {
            Node::BinaryExpression(_)
            | Node::LogicalExpression(_)
            | Node::ConditionalExpression(_)
            | Node::AssignmentExpression(_)
            | Node::SequenceExpression(_)
            | Node::UnaryExpression(_)
            | Node::UpdateExpression(_)
            | Node::FunctionExpression(_)
            | Node::ArrowFunctionExpression(_)
            | Node::ObjectExpression(_) => true,
            // `1.toString()` does not parse; the literal needs parentheses.
            Node::Literal(lit) => matches!(lit.value, jsty_ast::LiteralValue::Number(_)),
            _ => false,
        };
        let object = self.maybe_parenthesized(&member.object, object_parens)?;
        let property = self.emit(&member.property)?;
        if member.computed {
            Ok(format!("{object}[{property}]"))
        } else {
            Ok(format!("{object}.{property}"))
        }
    }

    // =========================================================================
    // Composite values
    // =========================================================================

    pub(super) fn array_expression(&self, array: &ArrayExpression) -> Result<String, EmitError> {
        let mut elements = Vec::with_capacity(array.elements.len());
        for element in &array.elements {
            elements.push(match element {
                Some(node) => self.emit(node)?,
                None => String::new(),
            });
        }
        Ok(format!("[{}]", elements.join(", ")))
    }

    pub(super) fn object_expression(&self, object: &ObjectExpression) -> Result<String, EmitError> {
        if object.properties.is_empty() {
            return Ok("{}".to_string());
        }
        let properties = self.comma_separated(&object.properties)?;
        Ok(format!("{{ {properties} }}"))
    }

    pub(super) fn sequence_expression(&self, seq: &SequenceExpression) -> Result<String, EmitError> {
        self.comma_separated(&seq.expressions)
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    pub(super) fn maybe_parenthesized(
        &self,
        node: &Node,
        parenthesize: bool,
    ) -> Result<String, EmitError> {
        let text = self.emit(node)?;
        if parenthesize {
            Ok(format!("({text})"))
        } else {
            Ok(text)
        }
    }

    /// Comma-joined emission; a sequence expression element is
    /// parenthesized so its own commas stay distinct from the list's.
    pub(super) fn comma_separated(&self, nodes: &[Node]) -> Result<String, EmitError> {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            let is_sequence = matches!(node, Node::SequenceExpression(_));
            parts.push(self.maybe_parenthesized(node, is_sequence)?);
        }
        Ok(parts.join(", "))
    }
}
