//! Expr syntax tree.
//!
//! Generated by `lox-astgen`; do not edit by hand.

use crate::token::Token;
use crate::value::LiteralValue;

/// One node of the Expr tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'a> {
    Binary(Binary<'a>),
    Grouping(Grouping<'a>),
    Literal(Literal<'a>),
    Unary(Unary<'a>),
    Variable(Variable<'a>),
    Assign(Assign<'a>),
    Logical(Logical<'a>),
    Call(Call<'a>),
    Get(Get<'a>),
    Set(Set<'a>),
}

impl<'a> Expr<'a> {
    /// Dispatch to the visitor method for this node.
    pub fn accept<R, V: ExprVisitor<'a, R> + ?Sized>(&self, visitor: &mut V) -> R {
        match self {
            Expr::Binary(node) => visitor.visit_binary_expr(node),
            Expr::Grouping(node) => visitor.visit_grouping_expr(node),
            Expr::Literal(node) => visitor.visit_literal_expr(node),
            Expr::Unary(node) => visitor.visit_unary_expr(node),
            Expr::Variable(node) => visitor.visit_variable_expr(node),
            Expr::Assign(node) => visitor.visit_assign_expr(node),
            Expr::Logical(node) => visitor.visit_logical_expr(node),
            Expr::Call(node) => visitor.visit_call_expr(node),
            Expr::Get(node) => visitor.visit_get_expr(node),
            Expr::Set(node) => visitor.visit_set_expr(node),
        }
    }
}

/// Visitor over [`Expr`] nodes, one method per node kind.
pub trait ExprVisitor<'a, R> {
    fn visit_binary_expr(&mut self, expr: &Binary<'a>) -> R;
    fn visit_grouping_expr(&mut self, expr: &Grouping<'a>) -> R;
    fn visit_literal_expr(&mut self, expr: &Literal<'a>) -> R;
    fn visit_unary_expr(&mut self, expr: &Unary<'a>) -> R;
    fn visit_variable_expr(&mut self, expr: &Variable<'a>) -> R;
    fn visit_assign_expr(&mut self, expr: &Assign<'a>) -> R;
    fn visit_logical_expr(&mut self, expr: &Logical<'a>) -> R;
    fn visit_call_expr(&mut self, expr: &Call<'a>) -> R;
    fn visit_get_expr(&mut self, expr: &Get<'a>) -> R;
    fn visit_set_expr(&mut self, expr: &Set<'a>) -> R;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary<'a> {
    pub left: &'a Expr<'a>,
    pub operator: Token<'a>,
    pub right: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grouping<'a> {
    pub expression: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<'a> {
    pub value: LiteralValue<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unary<'a> {
    pub operator: Token<'a>,
    pub right: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable<'a> {
    pub name: Token<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assign<'a> {
    pub name: Token<'a>,
    pub value: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logical<'a> {
    pub left: &'a Expr<'a>,
    pub operator: Token<'a>,
    pub right: &'a Expr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Call<'a> {
    pub callee: &'a Expr<'a>,
    pub paren: Token<'a>,
    pub arguments: &'a [Expr<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Get<'a> {
    pub object: &'a Expr<'a>,
    pub name: Token<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set<'a> {
    pub object: &'a Expr<'a>,
    pub name: Token<'a>,
    pub value: &'a Expr<'a>,
}
