//! Legacy module-load rewriting.
//!
//! Two call shapes from pre-module codebases are recognized structurally
//! and replaced with static `import` statements: AMD-style
//! `define([...], function(...) {})` expression statements and
//! CommonJS-style `var x = require('m')` declarations. Anything that
//! deviates from these exact shapes is left for the ordinary generators.

use jsty_ast::Node;
use jsty_ast::node::{CallExpression, ExpressionStatement, VariableDeclaration};

/// Whether this statement is an AMD module definition: a call to the
/// bare identifier `define` with a dependency array of string literals
/// followed by a factory function.
pub fn is_define_call(stmt: &ExpressionStatement) -> bool {
    let Node::CallExpression(call) = stmt.expression.as_ref() else {
        return false;
    };
    define_parts(call).is_some()
}

/// Rewrite a recognized `define` call into import statements.
///
/// Dependency strings are paired positionally with the factory's
/// parameters; each pair becomes a default import. Surplus dependencies
/// with no matching parameter are loaded for effect only. The factory
/// body is dropped: in the rewritten module it runs at top level, and
/// top-level statements are emitted by their own generators.
pub fn rewrite_define(call: &CallExpression) -> String {
    let Some((modules, params)) = define_parts(call) else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(modules.len());
    for (index, module) in modules.iter().enumerate() {
        match params.get(index) {
            Some(name) => lines.push(format!("import {name} from {module};")),
            None => lines.push(format!("import {module};")),
        }
    }
    lines.join("\n")
}

/// Dependency module strings (source form, quotes included) and factory
/// parameter names, or None when the call is not the AMD shape.
fn define_parts(call: &CallExpression) -> Option<(Vec<String>, Vec<String>)> {
    let Node::Identifier(callee) = call.callee.as_ref() else {
        return None;
    };
    if callee.name != "define" || call.arguments.len() != 2 {
        return None;
    }
    let Node::ArrayExpression(deps) = &call.arguments[0] else {
        return None;
    };
    let Node::FunctionExpression(factory) = &call.arguments[1] else {
        return None;
    };

    let mut modules = Vec::with_capacity(deps.elements.len());
    for element in &deps.elements {
        let Some(Node::Literal(lit)) = element.as_ref() else {
            return None;
        };
        lit.as_string()?;
        modules.push(lit.source_text());
    }

    let mut params = Vec::with_capacity(factory.params.len());
    for param in &factory.params {
        let Node::Identifier(name) = param else {
            return None;
        };
        params.push(name.name.clone());
    }

    Some((modules, params))
}

/// Whether this declaration is a CommonJS module load: exactly one
/// declarator whose initializer calls the bare identifier `require`
/// with a single string-literal argument.
pub fn is_require_declaration(dec: &VariableDeclaration) -> bool {
    require_module(dec).is_some()
}

/// Rewrite a recognized `require` declaration into an import statement.
///
/// An identifier binding becomes a default import; an object-pattern
/// binding becomes a named import over the pattern's keys.
pub fn rewrite_require(dec: &VariableDeclaration) -> String {
    let Some(module) = require_module(dec) else {
        return String::new();
    };
    let Node::VariableDeclarator(declarator) = &dec.declarations[0] else {
        return String::new();
    };

    match declarator.id.as_ref() {
        Node::Identifier(name) => format!("import {} from {module};", name.name),
        Node::ObjectPattern(pattern) => {
            let mut names = Vec::with_capacity(pattern.properties.len());
            for property in &pattern.properties {
                let Node::Property(prop) = property else {
                    continue;
                };
                if let Node::Identifier(key) = prop.key.as_ref() {
                    names.push(key.name.as_str());
                }
            }
            format!("import {{{}}} from {module};", names.join(", "))
        }
        _ => String::new(),
    }
}

/// The required module's source string (quotes included), or None when
/// the declaration is not the CommonJS shape.
fn require_module(dec: &VariableDeclaration) -> Option<String> {
    let [Node::VariableDeclarator(declarator)] = dec.declarations.as_slice() else {
        return None;
    };
    let Node::CallExpression(call) = declarator.init.as_deref()? else {
        return None;
    };
    let Node::Identifier(callee) = call.callee.as_ref() else {
        return None;
    };
    if callee.name != "require" {
        return None;
    }
    let [Node::Literal(argument)] = call.arguments.as_slice() else {
        return None;
    };
    argument.as_string()?;
    if !matches!(
        declarator.id.as_ref(),
        Node::Identifier(_) | Node::ObjectPattern(_)
    ) {
        return None;
    }
    Some(argument.source_text())
}
