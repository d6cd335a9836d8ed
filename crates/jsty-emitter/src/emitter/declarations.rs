use jsty_ast::node::{
    ExportDefaultDeclaration, FunctionDeclaration, FunctionExpression, ImportDeclaration,
    ImportSpecifier, VariableDeclaration, VariableDeclarator,
};
use jsty_ast::{Node, VarKind};

use super::Emitter;
use crate::error::EmitError;
use crate::imports;
use crate::scan::{contains_this_usage, find_assignment_to};

impl Emitter<'_> {
    // =========================================================================
    // Variable declarations
    // =========================================================================

    /// Language-routed entry point for contexts that bypass the
    /// dispatcher, such as loop headers.
    pub(super) fn variable_declaration(
        &self,
        node: &Node,
        dec: &VariableDeclaration,
        with_semicolon: bool,
    ) -> Result<String, EmitError> {
        match self.ctx.language() {
            crate::options::OutputLanguage::TypeScript => {
                self.variable_declaration_typescript(node, dec, with_semicolon)
            }
            crate::options::OutputLanguage::JavaScript => {
                self.variable_declaration_javascript(dec, with_semicolon)
            }
        }
    }

    pub(super) fn variable_declaration_javascript(
        &self,
        dec: &VariableDeclaration,
        with_semicolon: bool,
    ) -> Result<String, EmitError> {
        let mut parts = Vec::with_capacity(dec.declarations.len());
        for declarator in &dec.declarations {
            parts.push(self.emit(declarator)?);
        }
        let mut out = format!("{} {}", dec.kind.as_str(), parts.join(", "));
        if with_semicolon {
            out.push(';');
        }
        Ok(out)
    }

    pub(super) fn declarator_javascript(
        &self,
        declarator: &VariableDeclarator,
    ) -> Result<String, EmitError> {
        let id = self.emit(&declarator.id)?;
        match &declarator.init {
            Some(init) => Ok(format!("{id} = {}", self.emit(init)?)),
            None => Ok(id),
        }
    }

    /// Typescript variable declarations: recognized module loads become
    /// imports, `var` becomes an inferred `const`/`let`, and certain
    /// initializer shapes receive explicit annotations.
    pub(super) fn variable_declaration_typescript(
        &self,
        node: &Node,
        dec: &VariableDeclaration,
        with_semicolon: bool,
    ) -> Result<String, EmitError> {
        if imports::is_require_declaration(dec) {
            return Ok(imports::rewrite_require(dec));
        }

        let kind = match dec.kind {
            VarKind::Var => self.inferred_kind(node, dec),
            kept => kept,
        };

        let mut parts = Vec::with_capacity(dec.declarations.len());
        for declarator in &dec.declarations {
            parts.push(self.declarator_typescript(declarator)?);
        }
        let mut out = format!("{} {}", kind.as_str(), parts.join(", "));
        if with_semicolon {
            out.push(';');
        }
        Ok(out)
    }

    /// `const` unless some declared identifier is reassigned within the
    /// enclosing statement's source range. Without a resolvable parent
    /// there is no scan window and `const` stands.
    fn inferred_kind(&self, node: &Node, dec: &VariableDeclaration) -> VarKind {
        let Some(parent) = self.ctx.parent_of(node) else {
            return VarKind::Const;
        };
        let window = parent.range();
        for declarator in &dec.declarations {
            let Node::VariableDeclarator(d) = declarator else {
                continue;
            };
            if let Node::Identifier(id) = d.id.as_ref() {
                if find_assignment_to(self.ctx.program(), &id.name, window) {
                    return VarKind::Let;
                }
            }
        }
        VarKind::Const
    }

    fn declarator_typescript(&self, node: &Node) -> Result<String, EmitError> {
        let Node::VariableDeclarator(declarator) = node else {
            return self.emit(node);
        };
        let id = self.emit(&declarator.id)?;

        let Some(init) = &declarator.init else {
            // Loop-bound variables are typed by the loop construct, not
            // by the declarator.
            let in_for_in_header =
                matches!(self.ctx.grandparent_of(node), Some(Node::ForInStatement(_)));
            if self.ctx.insert_any() && !in_for_in_header {
                return Ok(format!("{id}: any"));
            }
            return Ok(id);
        };

        let init_text = self.emit(init)?;
        if self.ctx.insert_any() {
            if let Some(annotation) = untyped_initializer_annotation(init) {
                return Ok(format!("{id}: {annotation} = {init_text}"));
            }
        }
        Ok(format!("{id} = {init_text}"))
    }

    // =========================================================================
    // Functions
    // =========================================================================

    pub(super) fn function_declaration_javascript(
        &self,
        dec: &FunctionDeclaration,
    ) -> Result<String, EmitError> {
        if dec.generator {
            return Err(EmitError::UnsupportedConstruct("generator function"));
        }
        let name = self.optional_name(dec.id.as_deref())?;
        let params = self.comma_separated(&dec.params)?;
        let body = self.emit(&dec.body)?;
        Ok(format!("function {name}({params}) {body}"))
    }

    pub(super) fn function_declaration_typescript(
        &self,
        dec: &FunctionDeclaration,
    ) -> Result<String, EmitError> {
        if dec.generator {
            return Err(EmitError::UnsupportedConstruct("generator function"));
        }
        let name = self.optional_name(dec.id.as_deref())?;
        let params = self.typed_params(identifier_name(dec.id.as_deref()), &dec.params, &dec.body)?;
        let body = self.emit(&dec.body)?;
        Ok(format!("function {name}({params}) {body}"))
    }

    pub(super) fn function_expression_javascript(
        &self,
        func: &FunctionExpression,
    ) -> Result<String, EmitError> {
        self.check_function_expression(func)?;
        let params = self.comma_separated(&func.params)?;
        let body = self.emit(&func.body)?;
        Ok(format!("function({params}) {body}"))
    }

    pub(super) fn function_expression_typescript(
        &self,
        func: &FunctionExpression,
    ) -> Result<String, EmitError> {
        self.check_function_expression(func)?;
        let params = self.typed_params(None, &func.params, &func.body)?;
        let body = self.emit(&func.body)?;
        Ok(format!("function({params}) {body}"))
    }

    /// Function expressions are emitted anonymous-only; a name would need
    /// scope analysis the generator does not do.
    fn check_function_expression(&self, func: &FunctionExpression) -> Result<(), EmitError> {
        if func.generator {
            return Err(EmitError::UnsupportedConstruct("generator function"));
        }
        if func.id.is_some() {
            return Err(EmitError::UnsupportedConstruct("named function expression"));
        }
        Ok(())
    }

    pub(super) fn arrow_function_javascript(
        &self,
        func: &jsty_ast::node::ArrowFunctionExpression,
    ) -> Result<String, EmitError> {
        let params = self.comma_separated(&func.params)?;
        let body = self.arrow_body(&func.body)?;
        Ok(format!("({params}) => {body}"))
    }

    pub(super) fn arrow_function_typescript(
        &self,
        func: &jsty_ast::node::ArrowFunctionExpression,
    ) -> Result<String, EmitError> {
        // Arrows have no receiver of their own, so no receiver parameter
        // is inserted.
        let mut parts = Vec::with_capacity(func.params.len());
        for (index, param) in func.params.iter().enumerate() {
            parts.push(self.typed_param(None, param, index)?);
        }
        let body = self.arrow_body(&func.body)?;
        Ok(format!("({}) => {body}", parts.join(", ")))
    }

    /// A bare object-expression body must be parenthesized or its brace
    /// would open a block body.
    fn arrow_body(&self, body: &Node) -> Result<String, EmitError> {
        self.maybe_parenthesized(body, matches!(body, Node::ObjectExpression(_)))
    }

    /// Annotated parameter list: each parameter gets a looked-up type or
    /// `any`, and a body that references `this` gets an explicit
    /// receiver parameter prepended.
    fn typed_params(
        &self,
        function_name: Option<&str>,
        params: &[Node],
        body: &Node,
    ) -> Result<String, EmitError> {
        let mut parts = Vec::with_capacity(params.len() + 1);
        if contains_this_usage(body) {
            parts.push("this: any".to_string());
        }
        for (index, param) in params.iter().enumerate() {
            parts.push(self.typed_param(function_name, param, index)?);
        }
        Ok(parts.join(", "))
    }

    fn typed_param(
        &self,
        function_name: Option<&str>,
        param: &Node,
        index: usize,
    ) -> Result<String, EmitError> {
        match param {
            Node::Identifier(id) => {
                let ty = self.lookup_param_type(function_name, &id.name, index);
                Ok(format!("{}: {ty}", id.name))
            }
            // Defaulted and destructured parameters are emitted as-is; a
            // default value already carries an inferable type.
            _ => self.emit(param),
        }
    }

    fn lookup_param_type(
        &self,
        function_name: Option<&str>,
        param_name: &str,
        index: usize,
    ) -> String {
        self.ctx
            .types()
            .param_type(function_name, param_name, index)
            .unwrap_or_else(|| "any".to_string())
    }

    fn optional_name(&self, id: Option<&Node>) -> Result<String, EmitError> {
        match id {
            Some(id) => self.emit(id),
            None => Ok(String::new()),
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub(super) fn import_declaration(&self, dec: &ImportDeclaration) -> Result<String, EmitError> {
        let source = self.emit(&dec.source)?;
        if dec.specifiers.is_empty() {
            return Ok(format!("import {source};"));
        }

        let mut heads = Vec::new();
        let mut named = Vec::new();
        for specifier in &dec.specifiers {
            match specifier {
                Node::ImportSpecifier(_) => named.push(self.emit(specifier)?),
                _ => heads.push(self.emit(specifier)?),
            }
        }
        if !named.is_empty() {
            heads.push(format!("{{{}}}", named.join(", ")));
        }
        Ok(format!("import {} from {source};", heads.join(", ")))
    }

    pub(super) fn import_specifier(&self, spec: &ImportSpecifier) -> Result<String, EmitError> {
        let local = self.emit(&spec.local)?;
        let imported = self.emit(&spec.imported)?;
        if local == imported {
            Ok(local)
        } else {
            Ok(format!("{imported} as {local}"))
        }
    }

    pub(super) fn export_default(
        &self,
        dec: &ExportDefaultDeclaration,
    ) -> Result<String, EmitError> {
        let declaration = self.emit(&dec.declaration)?;
        // Declaration forms carry their own termination.
        if matches!(dec.declaration.as_ref(), Node::FunctionDeclaration(_)) {
            return Ok(format!("export default {declaration}"));
        }
        Ok(format!("export default {declaration};"))
    }
}

/// Initializer shapes whose inferred type would be useless (`never[]`,
/// `null`) and therefore get an explicit annotation.
fn untyped_initializer_annotation(init: &Node) -> Option<&'static str> {
    match init {
        Node::ArrayExpression(array) if array.elements.is_empty() => Some("any[]"),
        Node::ObjectExpression(object) if object.properties.is_empty() => {
            Some("Record<string, any>")
        }
        Node::Literal(lit) if lit.is_null() => Some("any"),
        Node::Identifier(id) if id.name == "undefined" => Some("any"),
        _ => None,
    }
}

fn identifier_name(id: Option<&Node>) -> Option<&str> {
    match id {
        Some(Node::Identifier(ident)) => Some(ident.name.as_str()),
        _ => None,
    }
}
