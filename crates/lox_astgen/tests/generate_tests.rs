//! Generator output tests.
//!
//! The expression tree checked into `lox_ast` must be exactly what the
//! generator produces today.

use lox_astgen::{define_ast, AstGenError, EXPR_NODES, STMT_NODES};

const CHECKED_IN_EXPR: &str = include_str!("../../lox_ast/src/expr.rs");

#[test]
fn test_expr_tree_matches_checked_in_source() {
    let generated = define_ast("Expr", EXPR_NODES).unwrap();
    assert_eq!(generated, CHECKED_IN_EXPR);
}

#[test]
fn test_stmt_tree_imports_and_types() {
    let generated = define_ast("Stmt", STMT_NODES).unwrap();

    assert!(generated.contains("use crate::expr::{Expr, Variable};\n"));
    assert!(generated.contains("use crate::token::Token;\n"));
    assert!(!generated.contains("LiteralValue"));

    assert!(generated.contains("pub enum Stmt<'a> {"));
    assert!(generated.contains("    pub then_branch: &'a Stmt<'a>,\n"));
    assert!(generated.contains("    pub else_branch: Option<&'a Stmt<'a>>,\n"));
    assert!(generated.contains("    pub initializer: Option<&'a Expr<'a>>,\n"));
    assert!(generated.contains("    pub params: &'a [Token<'a>],\n"));
    assert!(generated.contains("    pub superclass: Option<Variable<'a>>,\n"));
    assert!(generated.contains("    pub methods: &'a [Function<'a>],\n"));
    assert!(generated.contains("    fn visit_if_stmt(&mut self, stmt: &If<'a>) -> R;\n"));
    assert!(generated.contains("            Stmt::Class(node) => visitor.visit_class_stmt(node),\n"));
}

#[test]
fn test_every_node_gets_struct_variant_and_visit_method() {
    let generated = define_ast("Expr", EXPR_NODES).unwrap();
    for name in ["Binary", "Grouping", "Literal", "Unary", "Variable", "Assign", "Logical", "Call", "Get", "Set"] {
        assert!(generated.contains(&format!("pub struct {}<'a> {{", name)), "{}", name);
        assert!(generated.contains(&format!("    {}({}<'a>),", name, name)), "{}", name);
        assert!(
            generated.contains(&format!("fn visit_{}_expr(", name.to_lowercase())),
            "{}",
            name
        );
    }
}

#[test]
fn test_malformed_description_is_reported() {
    let err = define_ast("Expr", &["Binary : Expr left", "Broken"]).unwrap_err();
    match err {
        AstGenError::Malformed { line, .. } => assert_eq!(line, "Broken"),
        other => panic!("unexpected error: {}", other),
    }
}
