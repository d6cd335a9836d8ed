//! Emit context: everything a generator may consult during one pass.
//!
//! The context is immutable for the duration of a pass. The parent map
//! is built once from the program root; generating a different program
//! requires a fresh context (the map is never patched incrementally).

use jsty_ast::{Node, ParentMap};

use crate::options::{EmitOptions, OutputLanguage};
use crate::scan::{NoTypeLookup, ParamTypeLookup};

static NO_TYPES: NoTypeLookup = NoTypeLookup;

pub struct EmitContext<'a> {
    program: &'a Node,
    options: EmitOptions,
    parents: ParentMap<'a>,
    types: &'a dyn ParamTypeLookup,
}

impl<'a> EmitContext<'a> {
    pub fn new(program: &'a Node, options: EmitOptions) -> Self {
        Self::with_type_lookup(program, options, &NO_TYPES)
    }

    pub fn with_type_lookup(
        program: &'a Node,
        options: EmitOptions,
        types: &'a dyn ParamTypeLookup,
    ) -> Self {
        EmitContext {
            program,
            options,
            parents: ParentMap::build(program),
            types,
        }
    }

    /// The whole program, for bounded backward scans.
    pub fn program(&self) -> &'a Node {
        self.program
    }

    pub fn language(&self) -> OutputLanguage {
        self.options.language
    }

    /// Whether `any`-family annotations should be inserted. Only ever
    /// true in TypeScript mode.
    pub fn insert_any(&self) -> bool {
        self.options.language == OutputLanguage::TypeScript && self.options.insert_any
    }

    pub fn parent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parents.parent_of(node)
    }

    pub fn grandparent_of(&self, node: &Node) -> Option<&'a Node> {
        self.parents.grandparent_of(node)
    }

    pub fn types(&self) -> &dyn ParamTypeLookup {
        self.types
    }
}
