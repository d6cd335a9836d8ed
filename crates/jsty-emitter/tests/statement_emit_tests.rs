//! Integration tests for statement, function, and miscellaneous node
//! emission.

use jsty_ast::Node;
use jsty_emitter::{EmitOptions, ParamTypeLookup, generate, generate_with_types};
use serde_json::{Value, json};

fn parse_program(body: Vec<Value>) -> Node {
    serde_json::from_value(json!({"type": "Program", "body": body}))
        .expect("valid node json")
}

fn emit_js(body: Vec<Value>) -> String {
    generate(&parse_program(body), EmitOptions::javascript()).unwrap()
}

fn emit_ts(body: Vec<Value>) -> String {
    generate(&parse_program(body), EmitOptions::typescript()).unwrap()
}

fn ident(name: &str) -> Value {
    json!({"type": "Identifier", "name": name})
}

fn number(n: i64) -> Value {
    json!({"type": "Literal", "value": n, "raw": n.to_string()})
}

fn call(callee: &str, arguments: Vec<Value>) -> Value {
    json!({
        "type": "CallExpression",
        "callee": ident(callee),
        "arguments": arguments
    })
}

fn statement(expression: Value) -> Value {
    json!({"type": "ExpressionStatement", "expression": expression})
}

fn block(body: Vec<Value>) -> Value {
    json!({"type": "BlockStatement", "body": body})
}

#[test]
fn test_if_else_chain() {
    let stmt = json!({
        "type": "IfStatement",
        "test": ident("ready"),
        "consequent": block(vec![statement(call("go", vec![]))]),
        "alternate": {
            "type": "IfStatement",
            "test": ident("waiting"),
            "consequent": block(vec![]),
            "alternate": block(vec![statement(call("stop", vec![]))])
        }
    });
    assert_eq!(
        emit_js(vec![stmt]),
        "if (ready) {\ngo();\n} else if (waiting) {} else {\nstop();\n}"
    );
}

#[test]
fn test_for_loop_with_declaration_header() {
    let stmt = json!({
        "type": "ForStatement",
        "init": {
            "type": "VariableDeclaration",
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": ident("i"),
                "init": number(0)
            }]
        },
        "test": {
            "type": "BinaryExpression",
            "operator": "<",
            "left": ident("i"),
            "right": number(10)
        },
        "update": {
            "type": "UpdateExpression",
            "operator": "++",
            "prefix": false,
            "argument": ident("i")
        },
        "body": block(vec![])
    });
    assert_eq!(emit_js(vec![stmt]), "for (var i = 0; i < 10; i++) {}");
}

#[test]
fn test_while_and_do_while() {
    let while_stmt = json!({
        "type": "WhileStatement",
        "test": ident("busy"),
        "body": block(vec![statement(call("tick", vec![]))])
    });
    assert_eq!(emit_js(vec![while_stmt]), "while (busy) {\ntick();\n}");

    let do_stmt = json!({
        "type": "DoWhileStatement",
        "body": block(vec![statement(call("tick", vec![]))]),
        "test": ident("busy")
    });
    assert_eq!(emit_js(vec![do_stmt]), "do {\ntick();\n} while (busy);");
}

#[test]
fn test_switch_with_default() {
    let stmt = json!({
        "type": "SwitchStatement",
        "discriminant": ident("mode"),
        "cases": [
            {
                "type": "SwitchCase",
                "test": number(1),
                "consequent": [
                    statement(call("one", vec![])),
                    {"type": "BreakStatement"}
                ]
            },
            {
                "type": "SwitchCase",
                "consequent": [statement(call("rest", vec![]))]
            }
        ]
    });
    assert_eq!(
        emit_js(vec![stmt]),
        "switch (mode) {\ncase 1:\none();\nbreak;\ndefault:\nrest();\n}"
    );
}

#[test]
fn test_try_catch_finally() {
    let stmt = json!({
        "type": "TryStatement",
        "block": block(vec![statement(call("risky", vec![]))]),
        "handler": {
            "type": "CatchClause",
            "param": ident("err"),
            "body": block(vec![json!({
                "type": "ThrowStatement",
                "argument": ident("err")
            })])
        },
        "finalizer": block(vec![statement(call("cleanup", vec![]))])
    });
    assert_eq!(
        emit_js(vec![stmt]),
        "try {\nrisky();\n} catch (err) {\nthrow err;\n} finally {\ncleanup();\n}"
    );
}

#[test]
fn test_template_literal_interpolation() {
    let expr = json!({
        "type": "TemplateLiteral",
        "quasis": [
            {"type": "TemplateElement", "value": {"raw": "count: "}, "tail": false},
            {"type": "TemplateElement", "value": {"raw": ""}, "tail": true}
        ],
        "expressions": [ident("n")]
    });
    assert_eq!(emit_js(vec![statement(expr)]), "`count: ${n}`;");
}

#[test]
fn test_object_and_array_values() {
    let expr = json!({
        "type": "ObjectExpression",
        "properties": [
            {
                "type": "Property",
                "kind": "init",
                "key": ident("id"),
                "value": number(1)
            },
            {
                "type": "Property",
                "kind": "init",
                "key": ident("tags"),
                "value": {
                    "type": "ArrayExpression",
                    "elements": [
                        {"type": "Literal", "value": "a", "raw": "'a'"},
                        null,
                        {"type": "Literal", "value": "b", "raw": "'b'"}
                    ]
                }
            }
        ]
    });
    // Statement-leading `{` needs parentheses to stay an expression.
    assert_eq!(
        emit_js(vec![statement(expr)]),
        "({ id: 1, tags: ['a', , 'b'] });"
    );
}

#[test]
fn test_accessor_property() {
    let expr = json!({
        "type": "ObjectExpression",
        "properties": [{
            "type": "Property",
            "kind": "get",
            "key": ident("size"),
            "value": {
                "type": "FunctionExpression",
                "params": [],
                "body": block(vec![json!({
                    "type": "ReturnStatement",
                    "argument": number(0)
                })])
            }
        }]
    });
    assert_eq!(
        emit_js(vec![statement(expr)]),
        "({ get size() {\nreturn 0;\n} });"
    );
}

#[test]
fn test_conditional_member_and_new() {
    let expr = json!({
        "type": "ConditionalExpression",
        "test": {
            "type": "MemberExpression",
            "object": ident("list"),
            "property": number(0),
            "computed": true
        },
        "consequent": {
            "type": "NewExpression",
            "callee": ident("Widget"),
            "arguments": [ident("list")]
        },
        "alternate": {"type": "Literal", "value": null, "raw": "null"}
    });
    assert_eq!(
        emit_js(vec![statement(expr)]),
        "list[0] ? new Widget(list) : null;"
    );
}

#[test]
fn test_typescript_function_params_default_to_any() {
    let dec = json!({
        "type": "FunctionDeclaration",
        "id": ident("add"),
        "params": [ident("a"), ident("b")],
        "body": block(vec![json!({
            "type": "ReturnStatement",
            "argument": {
                "type": "BinaryExpression",
                "operator": "+",
                "left": ident("a"),
                "right": ident("b")
            }
        })])
    });
    assert_eq!(
        emit_ts(vec![dec]),
        "function add(a: any, b: any) {\nreturn a + b;\n}"
    );
}

#[test]
fn test_this_usage_inserts_receiver_parameter() {
    let dec = json!({
        "type": "FunctionDeclaration",
        "id": ident("render"),
        "params": [ident("target")],
        "body": block(vec![statement({
            let this_member = json!({
                "type": "MemberExpression",
                "object": {"type": "ThisExpression"},
                "property": ident("draw"),
                "computed": false
            });
            json!({
                "type": "CallExpression",
                "callee": this_member,
                "arguments": [ident("target")]
            })
        })])
    });
    assert_eq!(
        emit_ts(vec![dec]),
        "function render(this: any, target: any) {\nthis.draw(target);\n}"
    );
}

#[test]
fn test_param_type_lookup_overrides_any() {
    struct Known;
    impl ParamTypeLookup for Known {
        fn param_type(&self, function_name: Option<&str>, param_name: &str, _: usize) -> Option<String> {
            if function_name == Some("add") && param_name == "a" {
                Some("number".to_string())
            } else {
                None
            }
        }
    }

    let program = parse_program(vec![json!({
        "type": "FunctionDeclaration",
        "id": ident("add"),
        "params": [ident("a"), ident("b")],
        "body": block(vec![])
    })]);
    let output = generate_with_types(&program, EmitOptions::typescript(), &Known).unwrap();
    assert_eq!(output, "function add(a: number, b: any) {}");
}

#[test]
fn test_arrow_function_emission() {
    let expr = json!({
        "type": "AssignmentExpression",
        "operator": "=",
        "left": ident("double"),
        "right": {
            "type": "ArrowFunctionExpression",
            "params": [ident("n")],
            "body": {
                "type": "BinaryExpression",
                "operator": "*",
                "left": ident("n"),
                "right": number(2)
            }
        }
    });
    assert_eq!(emit_js(vec![statement(expr.clone())]), "double = (n) => n * 2;");
    assert_eq!(emit_ts(vec![statement(expr)]), "double = (n: any) => n * 2;");
}

#[test]
fn test_sequence_and_spread() {
    let seq = json!({
        "type": "SequenceExpression",
        "expressions": [call("first", vec![]), call("second", vec![])]
    });
    assert_eq!(emit_js(vec![statement(seq)]), "first(), second();");

    let spread_call = call(
        "merge",
        vec![json!({"type": "SpreadElement", "argument": ident("parts")})],
    );
    assert_eq!(emit_js(vec![statement(spread_call)]), "merge(...parts);");
}

#[test]
fn test_export_default_function() {
    let dec = json!({
        "type": "ExportDefaultDeclaration",
        "declaration": {
            "type": "FunctionDeclaration",
            "id": ident("main"),
            "params": [],
            "body": block(vec![])
        }
    });
    assert_eq!(emit_js(vec![dec]), "export default function main() {}");
}

#[test]
fn test_empty_statement_and_program() {
    assert_eq!(emit_js(vec![json!({"type": "EmptyStatement"})]), ";");
    assert_eq!(emit_js(vec![]), "");
}
