//! lox_printer: expression tree to text.
//!
//! Renders an [`Expr`] as a fully parenthesized, Lisp-style string so the
//! nesting of a tree can be read at a glance, e.g.
//! `(* (- 123.0) (group 45.67))`.

use lox_ast::expr::*;
use lox_ast::token::Token;
use lox_ast::token_kind::TokenKind;
use lox_ast::value::LiteralValue;
use lox_core::Arena;

/// Prints expression trees. Holds no state between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        Self
    }

    /// Print one expression tree.
    pub fn print(&mut self, expr: &Expr<'_>) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr<'_>]) -> String {
        let mut out = String::with_capacity(16);
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl<'a> ExprVisitor<'a, String> for AstPrinter {
    fn visit_binary_expr(&mut self, expr: &Binary<'a>) -> String {
        self.parenthesize(expr.operator.lexeme, &[expr.left, expr.right])
    }

    fn visit_grouping_expr(&mut self, expr: &Grouping<'a>) -> String {
        self.parenthesize("group", &[expr.expression])
    }

    fn visit_literal_expr(&mut self, expr: &Literal<'a>) -> String {
        expr.value.to_string()
    }

    fn visit_unary_expr(&mut self, expr: &Unary<'a>) -> String {
        self.parenthesize(expr.operator.lexeme, &[expr.right])
    }

    fn visit_variable_expr(&mut self, expr: &Variable<'a>) -> String {
        expr.name.lexeme.to_string()
    }

    fn visit_assign_expr(&mut self, expr: &Assign<'a>) -> String {
        let value = expr.value.accept(self);
        format!("(= {} {})", expr.name.lexeme, value)
    }

    fn visit_logical_expr(&mut self, expr: &Logical<'a>) -> String {
        self.parenthesize(expr.operator.lexeme, &[expr.left, expr.right])
    }

    fn visit_call_expr(&mut self, expr: &Call<'a>) -> String {
        let mut exprs = Vec::with_capacity(expr.arguments.len() + 1);
        exprs.push(expr.callee);
        exprs.extend(expr.arguments.iter());
        self.parenthesize("call", &exprs)
    }

    fn visit_get_expr(&mut self, expr: &Get<'a>) -> String {
        let object = expr.object.accept(self);
        format!("(. {} {})", object, expr.name.lexeme)
    }

    fn visit_set_expr(&mut self, expr: &Set<'a>) -> String {
        let object = expr.object.accept(self);
        let value = expr.value.accept(self);
        format!("(= (. {} {}) {})", object, expr.name.lexeme, value)
    }
}

/// Build the tree for `-123 * (45.67)` in `arena`.
pub fn demo_expression(arena: &Arena) -> &Expr<'_> {
    let minus = Token::synthetic(TokenKind::Minus, "-", 1);
    let star = Token::synthetic(TokenKind::Star, "*", 1);

    let number = arena.alloc(Expr::Literal(Literal {
        value: LiteralValue::Number(123.0),
    }));
    let negated = arena.alloc(Expr::Unary(Unary {
        operator: minus,
        right: number,
    }));
    let fraction = arena.alloc(Expr::Literal(Literal {
        value: LiteralValue::Number(45.67),
    }));
    let group = arena.alloc(Expr::Grouping(Grouping {
        expression: fraction,
    }));
    arena.alloc(Expr::Binary(Binary {
        left: negated,
        operator: star,
        right: group,
    }))
}
