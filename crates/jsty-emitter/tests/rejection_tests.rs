//! Integration tests for node kinds the generator refuses to emit.

use jsty_ast::Node;
use jsty_emitter::{EmitError, EmitOptions, generate};
use serde_json::{Value, json};

fn emit_program(body: Vec<Value>) -> Result<String, EmitError> {
    let program: Node = serde_json::from_value(json!({"type": "Program", "body": body}))
        .expect("valid node json");
    generate(&program, EmitOptions::typescript())
}

#[test]
fn test_class_declaration_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "ClassDeclaration",
        "id": {"type": "Identifier", "name": "Widget"}
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedNodeKind("ClassDeclaration".to_string()))
    );
}

#[test]
fn test_rejection_message_names_the_kind() {
    let err = emit_program(vec![json!({"type": "DebuggerStatement"})]).unwrap_err();
    assert_eq!(err.to_string(), "DebuggerStatement not implemented!");
}

#[test]
fn test_for_of_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "ForOfStatement",
        "left": {"type": "Identifier", "name": "x"},
        "right": {"type": "Identifier", "name": "xs"},
        "body": {"type": "BlockStatement", "body": []}
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedNodeKind("ForOfStatement".to_string()))
    );
}

#[test]
fn test_with_statement_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "WithStatement",
        "object": {"type": "Identifier", "name": "scope"},
        "body": {"type": "BlockStatement", "body": []}
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedNodeKind("WithStatement".to_string()))
    );
}

#[test]
fn test_generator_function_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "FunctionDeclaration",
        "id": {"type": "Identifier", "name": "gen"},
        "params": [],
        "generator": true,
        "body": {"type": "BlockStatement", "body": []}
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedConstruct("generator function"))
    );
}

#[test]
fn test_named_function_expression_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "CallExpression",
            "callee": {"type": "Identifier", "name": "run"},
            "arguments": [{
                "type": "FunctionExpression",
                "id": {"type": "Identifier", "name": "helper"},
                "params": [],
                "body": {"type": "BlockStatement", "body": []}
            }]
        }
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedConstruct("named function expression"))
    );
}

#[test]
fn test_labeled_statement_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "LabeledStatement",
        "label": {"type": "Identifier", "name": "outer"},
        "body": {"type": "BlockStatement", "body": []}
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedNodeKind("LabeledStatement".to_string()))
    );
}

#[test]
fn test_rejection_aborts_the_whole_pass() {
    // A good statement before a bad one still fails the pass; there is
    // no partial output.
    let result = emit_program(vec![
        json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": {"type": "Identifier", "name": "run"},
                "arguments": []
            }
        }),
        json!({"type": "DebuggerStatement"}),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_yield_inside_function_is_rejected() {
    let result = emit_program(vec![json!({
        "type": "FunctionDeclaration",
        "id": {"type": "Identifier", "name": "f"},
        "params": [],
        "body": {
            "type": "BlockStatement",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "YieldExpression",
                    "argument": {"type": "Literal", "value": 1, "raw": "1"}
                }
            }]
        }
    })]);
    assert_eq!(
        result,
        Err(EmitError::UnsupportedNodeKind("YieldExpression".to_string()))
    );
}
