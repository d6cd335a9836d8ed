use jsty_ast::Node;
use jsty_ast::node::{
    BlockStatement, BreakStatement, CatchClause, ContinueStatement, DoWhileStatement,
    ExpressionStatement, ForInStatement, ForStatement, IfStatement, ReturnStatement, SwitchCase,
    SwitchStatement, ThrowStatement, TryStatement, WhileStatement,
};

use super::Emitter;
use crate::error::EmitError;
use crate::imports;

impl Emitter<'_> {
    // =========================================================================
    // Blocks and expression statements
    // =========================================================================

    pub(super) fn block_statement(&self, block: &BlockStatement) -> Result<String, EmitError> {
        let body = self.statement_list(&block.body)?;
        if body.is_empty() {
            return Ok("{}".to_string());
        }
        Ok(format!("{{\n{body}\n}}"))
    }

    pub(super) fn expression_statement_javascript(
        &self,
        stmt: &ExpressionStatement,
    ) -> Result<String, EmitError> {
        // A leading `function` or `{` would be parsed as a declaration or
        // a block, not an expression.
        let needs_parens = matches!(
            stmt.expression.as_ref(),
            Node::FunctionExpression(_) | Node::ObjectExpression(_)
        );
        let expression = self.maybe_parenthesized(&stmt.expression, needs_parens)?;
        Ok(format!("{expression};"))
    }

    /// Typescript override: module-system statements are transformed and
    /// directive prologues are dropped. `None` defers to the javascript
    /// generator.
    pub(super) fn expression_statement_typescript(
        &self,
        stmt: &ExpressionStatement,
    ) -> Option<String> {
        if is_use_strict(stmt) {
            // Modules are strict by construction.
            return Some(String::new());
        }
        if imports::is_define_call(stmt) {
            if let Node::CallExpression(call) = stmt.expression.as_ref() {
                return Some(imports::rewrite_define(call));
            }
        }
        None
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn if_statement(&self, stmt: &IfStatement) -> Result<String, EmitError> {
        let test = self.emit(&stmt.test)?;
        let consequent = self.emit(&stmt.consequent)?;
        let mut out = format!("if ({test}) {consequent}");
        if let Some(alternate) = &stmt.alternate {
            out.push_str(" else ");
            out.push_str(&self.emit(alternate)?);
        }
        Ok(out)
    }

    pub(super) fn for_statement(&self, stmt: &ForStatement) -> Result<String, EmitError> {
        let init = match &stmt.init {
            Some(init) => self.loop_header_init(init)?,
            None => String::new(),
        };
        let test = match &stmt.test {
            Some(test) => self.emit(test)?,
            None => String::new(),
        };
        let update = match &stmt.update {
            Some(update) => self.emit(update)?,
            None => String::new(),
        };
        let body = self.emit(&stmt.body)?;
        Ok(format!("for ({init}; {test}; {update}) {body}"))
    }

    pub(super) fn for_in_statement(&self, stmt: &ForInStatement) -> Result<String, EmitError> {
        let left = self.loop_header_init(&stmt.left)?;
        let right = self.emit(&stmt.right)?;
        let body = self.emit(&stmt.body)?;
        Ok(format!("for ({left} in {right}) {body}"))
    }

    /// A loop-header declaration is rendered without its statement
    /// semicolon; any other header expression is emitted as usual.
    fn loop_header_init(&self, init: &Node) -> Result<String, EmitError> {
        match init {
            Node::VariableDeclaration(dec) => self.variable_declaration(init, dec, false),
            _ => self.emit(init),
        }
    }

    pub(super) fn while_statement(&self, stmt: &WhileStatement) -> Result<String, EmitError> {
        let test = self.emit(&stmt.test)?;
        let body = self.emit(&stmt.body)?;
        Ok(format!("while ({test}) {body}"))
    }

    pub(super) fn do_while_statement(&self, stmt: &DoWhileStatement) -> Result<String, EmitError> {
        let body = self.emit(&stmt.body)?;
        let test = self.emit(&stmt.test)?;
        Ok(format!("do {body} while ({test});"))
    }

    pub(super) fn return_statement(&self, stmt: &ReturnStatement) -> Result<String, EmitError> {
        match &stmt.argument {
            Some(argument) => Ok(format!("return {};", self.emit(argument)?)),
            None => Ok("return;".to_string()),
        }
    }

    pub(super) fn break_statement(&self, stmt: &BreakStatement) -> Result<String, EmitError> {
        if stmt.label.is_some() {
            return Err(EmitError::UnsupportedConstruct("labeled break"));
        }
        Ok("break;".to_string())
    }

    pub(super) fn continue_statement(&self, stmt: &ContinueStatement) -> Result<String, EmitError> {
        if stmt.label.is_some() {
            return Err(EmitError::UnsupportedConstruct("labeled continue"));
        }
        Ok("continue;".to_string())
    }

    pub(super) fn switch_statement(&self, stmt: &SwitchStatement) -> Result<String, EmitError> {
        let discriminant = self.emit(&stmt.discriminant)?;
        let cases = self.statement_list(&stmt.cases)?;
        if cases.is_empty() {
            return Ok(format!("switch ({discriminant}) {{}}"));
        }
        Ok(format!("switch ({discriminant}) {{\n{cases}\n}}"))
    }

    pub(super) fn switch_case(&self, case: &SwitchCase) -> Result<String, EmitError> {
        let mut out = match &case.test {
            Some(test) => format!("case {}:", self.emit(test)?),
            None => "default:".to_string(),
        };
        let consequent = self.statement_list(&case.consequent)?;
        if !consequent.is_empty() {
            out.push('\n');
            out.push_str(&consequent);
        }
        Ok(out)
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    pub(super) fn throw_statement(&self, stmt: &ThrowStatement) -> Result<String, EmitError> {
        Ok(format!("throw {};", self.emit(&stmt.argument)?))
    }

    pub(super) fn try_statement(&self, stmt: &TryStatement) -> Result<String, EmitError> {
        let mut out = format!("try {}", self.emit(&stmt.block)?);
        if let Some(handler) = &stmt.handler {
            out.push(' ');
            out.push_str(&self.emit(handler)?);
        }
        if let Some(finalizer) = &stmt.finalizer {
            out.push_str(" finally ");
            out.push_str(&self.emit(finalizer)?);
        }
        Ok(out)
    }

    pub(super) fn catch_clause(&self, clause: &CatchClause) -> Result<String, EmitError> {
        let param = self.emit(&clause.param)?;
        let body = self.emit(&clause.body)?;
        Ok(format!("catch ({param}) {body}"))
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// Emit statements joined by newlines, skipping ones that generate
    /// nothing (dropped directives, rewritten-away constructs).
    pub(super) fn statement_list(&self, statements: &[Node]) -> Result<String, EmitError> {
        let mut lines = Vec::with_capacity(statements.len());
        for statement in statements {
            let text = self.emit(statement)?;
            if !text.is_empty() {
                lines.push(text);
            }
        }
        Ok(lines.join("\n"))
    }
}

/// A `'use strict'` directive prologue entry.
fn is_use_strict(stmt: &ExpressionStatement) -> bool {
    if stmt.directive.as_deref() == Some("use strict") {
        return true;
    }
    matches!(stmt.expression.as_ref(), Node::Literal(lit) if lit.as_string() == Some("use strict"))
}
