use jsty_ast::node::{
    ArrayPattern, AssignmentPattern, ObjectPattern, Program, Property, SpreadElement,
    TemplateLiteral,
};
use jsty_ast::{Node, PropertyKind};

use super::Emitter;
use crate::error::EmitError;

impl Emitter<'_> {
    pub(super) fn program(&self, program: &Program) -> Result<String, EmitError> {
        self.statement_list(&program.body)
    }

    pub(super) fn template_literal(&self, template: &TemplateLiteral) -> Result<String, EmitError> {
        let mut out = String::from("`");
        for (index, quasi) in template.quasis.iter().enumerate() {
            let Node::TemplateElement(element) = quasi else {
                continue;
            };
            out.push_str(&element.value.raw);
            if let Some(expression) = template.expressions.get(index) {
                out.push_str("${");
                out.push_str(&self.emit(expression)?);
                out.push('}');
            }
        }
        out.push('`');
        Ok(out)
    }

    pub(super) fn property(&self, prop: &Property) -> Result<String, EmitError> {
        let key = self.emit(&prop.key)?;

        // Accessor properties carry a function expression value whose
        // header is folded into the property syntax.
        if matches!(prop.kind, PropertyKind::Get | PropertyKind::Set) {
            let Node::FunctionExpression(accessor) = prop.value.as_ref() else {
                return Err(EmitError::UnsupportedConstruct("non-function accessor"));
            };
            let keyword = if prop.kind == PropertyKind::Get { "get" } else { "set" };
            let params = self.comma_separated(&accessor.params)?;
            let body = self.emit(&accessor.body)?;
            return Ok(format!("{keyword} {key}({params}) {body}"));
        }

        if prop.shorthand {
            return Ok(key);
        }
        let value = self.emit(&prop.value)?;
        if prop.computed {
            Ok(format!("[{key}]: {value}"))
        } else {
            Ok(format!("{key}: {value}"))
        }
    }

    pub(super) fn spread_element(&self, spread: &SpreadElement) -> Result<String, EmitError> {
        Ok(format!("...{}", self.emit(&spread.argument)?))
    }

    pub(super) fn assignment_pattern(
        &self,
        pattern: &AssignmentPattern,
    ) -> Result<String, EmitError> {
        let left = self.emit(&pattern.left)?;
        let right = self.emit(&pattern.right)?;
        Ok(format!("{left} = {right}"))
    }

    pub(super) fn object_pattern(&self, pattern: &ObjectPattern) -> Result<String, EmitError> {
        if pattern.properties.is_empty() {
            return Ok("{}".to_string());
        }
        let properties = self.comma_separated(&pattern.properties)?;
        Ok(format!("{{ {properties} }}"))
    }

    pub(super) fn array_pattern(&self, pattern: &ArrayPattern) -> Result<String, EmitError> {
        let mut elements = Vec::with_capacity(pattern.elements.len());
        for element in &pattern.elements {
            elements.push(match element {
                Some(node) => self.emit(node)?,
                None => String::new(),
            });
        }
        Ok(format!("[{}]", elements.join(", ")))
    }
}
