//! The node dispatcher.
//!
//! [`Emitter::emit`] routes a node to its generator. TypeScript mode
//! consults the typescript overrides first and falls back to the
//! javascript generators for every kind without an override, so the
//! annotated output is a strict overlay over the plain one. A kind with
//! no generator in either set is a fatal [`EmitError::UnsupportedNodeKind`].
//!
//! Generators are grouped by theme across the sibling modules, all as
//! methods on [`Emitter`]:
//! - `expressions`: operators, calls, members, parenthesization
//! - `statements`: control flow and blocks
//! - `declarations`: variables, functions, imports and the
//!   annotation heuristics
//! - `misc`: patterns, literals, properties, the program root

mod declarations;
mod expressions;
mod misc;
mod statements;

use jsty_ast::Node;
use tracing::trace;

use crate::comments;
use crate::context::EmitContext;
use crate::error::EmitError;
use crate::options::OutputLanguage;

pub struct Emitter<'a> {
    ctx: &'a EmitContext<'a>,
}

impl<'a> Emitter<'a> {
    pub fn new(ctx: &'a EmitContext<'a>) -> Self {
        Emitter { ctx }
    }

    /// Generate source text for one node, comments reattached.
    pub fn emit(&self, node: &Node) -> Result<String, EmitError> {
        trace!(kind = node.kind_name(), "emit");
        let text = match self.ctx.language() {
            OutputLanguage::TypeScript => match self.emit_typescript(node)? {
                Some(text) => text,
                None => self.emit_javascript(node)?,
            },
            OutputLanguage::JavaScript => self.emit_javascript(node)?,
        };
        Ok(comments::attach(node, &text))
    }

    /// Typescript overrides. `Ok(None)` means no override exists for the
    /// kind and the javascript generator applies.
    fn emit_typescript(&self, node: &Node) -> Result<Option<String>, EmitError> {
        let text = match node {
            Node::ExpressionStatement(stmt) => return Ok(self.expression_statement_typescript(stmt)),
            Node::VariableDeclaration(dec) => self.variable_declaration_typescript(node, dec, true)?,
            Node::FunctionDeclaration(dec) => self.function_declaration_typescript(dec)?,
            Node::FunctionExpression(func) => self.function_expression_typescript(func)?,
            Node::ArrowFunctionExpression(func) => self.arrow_function_typescript(func)?,
            _ => return Ok(None),
        };
        Ok(Some(text))
    }

    /// The plain-syntax generators, one arm per supported kind.
    fn emit_javascript(&self, node: &Node) -> Result<String, EmitError> {
        match node {
            // Root and leaves
            Node::Program(program) => self.program(program),
            Node::Identifier(ident) => Ok(ident.name.clone()),
            Node::Literal(lit) => Ok(lit.source_text()),
            Node::TemplateLiteral(template) => self.template_literal(template),
            Node::TemplateElement(element) => Ok(element.value.raw.clone()),
            Node::Property(prop) => self.property(prop),
            Node::SpreadElement(spread) => self.spread_element(spread),

            // Patterns
            Node::AssignmentPattern(pattern) => self.assignment_pattern(pattern),
            Node::ObjectPattern(pattern) => self.object_pattern(pattern),
            Node::ArrayPattern(pattern) => self.array_pattern(pattern),

            // Declarations
            Node::VariableDeclaration(dec) => self.variable_declaration_javascript(dec, true),
            Node::VariableDeclarator(dec) => self.declarator_javascript(dec),
            Node::FunctionDeclaration(dec) => self.function_declaration_javascript(dec),
            Node::ImportDeclaration(dec) => self.import_declaration(dec),
            Node::ImportDefaultSpecifier(spec) => self.emit(&spec.local),
            Node::ImportSpecifier(spec) => self.import_specifier(spec),
            Node::ImportNamespaceSpecifier(spec) => {
                Ok(format!("* as {}", self.emit(&spec.local)?))
            }
            Node::ExportDefaultDeclaration(dec) => self.export_default(dec),

            // Expressions
            Node::BinaryExpression(bin) => self.binary_expression(bin),
            Node::LogicalExpression(logical) => self.logical_expression(logical),
            Node::UnaryExpression(unary) => self.unary_expression(unary),
            Node::UpdateExpression(update) => self.update_expression(update),
            Node::AssignmentExpression(assign) => self.assignment_expression(assign),
            Node::ConditionalExpression(cond) => self.conditional_expression(cond),
            Node::CallExpression(call) => self.call_expression(call),
            Node::NewExpression(new) => self.new_expression(new),
            Node::MemberExpression(member) => self.member_expression(member),
            Node::ArrayExpression(array) => self.array_expression(array),
            Node::ObjectExpression(object) => self.object_expression(object),
            Node::FunctionExpression(func) => self.function_expression_javascript(func),
            Node::ArrowFunctionExpression(func) => self.arrow_function_javascript(func),
            Node::SequenceExpression(seq) => self.sequence_expression(seq),
            Node::ThisExpression(_) => Ok("this".to_string()),

            // Statements
            Node::BlockStatement(block) => self.block_statement(block),
            Node::ExpressionStatement(stmt) => self.expression_statement_javascript(stmt),
            Node::IfStatement(stmt) => self.if_statement(stmt),
            Node::ForStatement(stmt) => self.for_statement(stmt),
            Node::ForInStatement(stmt) => self.for_in_statement(stmt),
            Node::WhileStatement(stmt) => self.while_statement(stmt),
            Node::DoWhileStatement(stmt) => self.do_while_statement(stmt),
            Node::ReturnStatement(stmt) => self.return_statement(stmt),
            Node::BreakStatement(stmt) => self.break_statement(stmt),
            Node::ContinueStatement(stmt) => self.continue_statement(stmt),
            Node::SwitchStatement(stmt) => self.switch_statement(stmt),
            Node::SwitchCase(case) => self.switch_case(case),
            Node::ThrowStatement(stmt) => self.throw_statement(stmt),
            Node::TryStatement(stmt) => self.try_statement(stmt),
            Node::CatchClause(clause) => self.catch_clause(clause),
            Node::EmptyStatement(_) => Ok(";".to_string()),

            // Recognized but rejected kinds.
            Node::ClassDeclaration(_)
            | Node::YieldExpression(_)
            | Node::ForOfStatement(_)
            | Node::LabeledStatement(_)
            | Node::WithStatement(_)
            | Node::DebuggerStatement(_) => {
                Err(EmitError::UnsupportedNodeKind(node.kind_name().to_string()))
            }
        }
    }
}
