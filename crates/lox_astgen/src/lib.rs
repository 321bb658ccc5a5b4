//! lox_astgen: Generates Rust syntax tree definitions.
//!
//! Each node is described on one line as `Name : Type field, Type field`.
//! Supported field types:
//! - `Expr`, `Stmt`: a reference to another node of that tree;
//! - `Expr.Variable`: a specific node struct, held by value;
//! - `Token`, `Object` (a literal value);
//! - `List<T>`: an arena slice of `T`;
//! - a trailing `?` marks the field optional.
//!
//! [`define_ast`] renders the node structs, the tree enum, its `accept`
//! method and the visitor trait for one tree.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Node descriptions for the expression tree.
pub const EXPR_NODES: &[&str] = &[
    "Binary   : Expr left, Token operator, Expr right",
    "Grouping : Expr expression",
    "Literal  : Object value",
    "Unary    : Token operator, Expr right",
    "Variable : Token name",
    "Assign   : Token name, Expr value",
    "Logical  : Expr left, Token operator, Expr right",
    "Call     : Expr callee, Token paren, List<Expr> arguments",
    "Get      : Expr object, Token name",
    "Set      : Expr object, Token name, Expr value",
];

/// Node descriptions for the statement tree.
pub const STMT_NODES: &[&str] = &[
    "Expression : Expr expression",
    "Print      : Expr expression",
    "Var        : Token name, Expr? initializer",
    "Block      : List<Stmt> statements",
    "If         : Expr condition, Stmt thenBranch, Stmt? elseBranch",
    "While      : Expr condition, Stmt body",
    "Function   : Token name, List<Token> params, List<Stmt> body",
    "Return     : Token keyword, Expr? value",
    "Class      : Token name, Expr.Variable? superclass, List<Stmt.Function> methods",
];

#[derive(Debug, Error)]
pub enum AstGenError {
    #[error("malformed node description `{line}`: {reason}")]
    Malformed { line: String, reason: &'static str },
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The type of one node field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A node of `tree`; the whole tree when `node` is `None`.
    Node { tree: String, node: Option<String> },
    Token,
    Object,
    List(Box<FieldType>),
    Optional(Box<FieldType>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub ty: FieldType,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Parse one `Name : Type field, ...` description.
pub fn parse_node(line: &str) -> Result<NodeDef, AstGenError> {
    let malformed = |reason| AstGenError::Malformed {
        line: line.trim().to_string(),
        reason,
    };

    let (name, fields) = line.split_once(':').ok_or_else(|| malformed("missing `:`"))?;
    let name = name.trim();
    if !is_type_name(name) {
        return Err(malformed("node name must be a capitalized identifier"));
    }
    if fields.trim().is_empty() {
        return Err(malformed("node has no fields"));
    }

    let mut parsed = Vec::new();
    for field in fields.split(',') {
        let mut parts = field.split_whitespace();
        let (Some(ty), Some(field_name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("field must be `Type name`"));
        };
        let ty = parse_type(ty).ok_or_else(|| malformed("unknown field type"))?;
        parsed.push(FieldDef {
            ty,
            name: to_snake_case(field_name),
        });
    }

    Ok(NodeDef {
        name: name.to_string(),
        fields: parsed,
    })
}

fn parse_type(text: &str) -> Option<FieldType> {
    if let Some(inner) = text.strip_suffix('?') {
        return Some(FieldType::Optional(Box::new(parse_type(inner)?)));
    }
    if let Some(inner) = text.strip_prefix("List<").and_then(|t| t.strip_suffix('>')) {
        return Some(FieldType::List(Box::new(parse_type(inner)?)));
    }
    match text {
        "Token" => Some(FieldType::Token),
        "Object" => Some(FieldType::Object),
        _ => match text.split_once('.') {
            Some((tree, node)) if is_type_name(tree) && is_type_name(node) => Some(FieldType::Node {
                tree: tree.to_string(),
                node: Some(node.to_string()),
            }),
            None if is_type_name(text) => Some(FieldType::Node {
                tree: text.to_string(),
                node: None,
            }),
            _ => None,
        },
    }
}

fn is_type_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `thenBranch` -> `then_branch`, `Binary` -> `binary`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

fn field_ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Collects the `use` lines a generated tree needs.
#[derive(Default)]
struct Imports {
    modules: BTreeMap<String, BTreeSet<String>>,
}

impl Imports {
    fn collect(&mut self, base: &str, ty: &FieldType) {
        match ty {
            FieldType::Node { tree, node } if tree != base => {
                let name = node.clone().unwrap_or_else(|| tree.clone());
                self.add(&format!("crate::{}", to_snake_case(tree)), &name);
            }
            FieldType::Node { .. } => {}
            FieldType::Token => self.add("crate::token", "Token"),
            FieldType::Object => self.add("crate::value", "LiteralValue"),
            FieldType::List(inner) | FieldType::Optional(inner) => self.collect(base, inner),
        }
    }

    fn add(&mut self, module: &str, name: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(name.to_string());
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (module, names) in &self.modules {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            if names.len() == 1 {
                out.push_str(&format!("use {}::{};\n", module, names[0]));
            } else {
                out.push_str(&format!("use {}::{{{}}};\n", module, names.join(", ")));
            }
        }
        out
    }
}

/// The type of a value of `ty` when stored by value.
fn value_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Node { tree, node: None } => format!("{}<'a>", tree),
        FieldType::Node { node: Some(node), .. } => format!("{}<'a>", node),
        FieldType::Token => "Token<'a>".to_string(),
        FieldType::Object => "LiteralValue<'a>".to_string(),
        FieldType::List(inner) => format!("&'a [{}]", value_type(inner)),
        FieldType::Optional(inner) => format!("Option<{}>", field_type(inner)),
    }
}

/// The type of a struct field holding `ty`. Whole trees are held by
/// reference so the node types stay finitely sized.
fn field_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Node { node: None, .. } => format!("&'a {}", value_type(ty)),
        FieldType::Optional(inner) => format!("Option<{}>", field_type(inner)),
        _ => value_type(ty),
    }
}

/// Render the Rust definitions for the tree `base` from its node descriptions.
pub fn define_ast(base: &str, descriptions: &[&str]) -> Result<String, AstGenError> {
    let nodes = descriptions
        .iter()
        .map(|line| parse_node(line))
        .collect::<Result<Vec<_>, _>>()?;

    let mut imports = Imports::default();
    for node in &nodes {
        for field in &node.fields {
            imports.collect(base, &field.ty);
        }
    }

    let base_snake = to_snake_case(base);
    let mut out = String::new();

    out.push_str(&format!("//! {} syntax tree.\n", base));
    out.push_str("//!\n");
    out.push_str("//! Generated by `lox-astgen`; do not edit by hand.\n");
    out.push('\n');
    let uses = imports.render();
    if !uses.is_empty() {
        out.push_str(&uses);
        out.push('\n');
    }

    // The tree enum.
    out.push_str(&format!("/// One node of the {} tree.\n", base));
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq)]\n");
    out.push_str(&format!("pub enum {}<'a> {{\n", base));
    for node in &nodes {
        out.push_str(&format!("    {}({}<'a>),\n", node.name, node.name));
    }
    out.push_str("}\n\n");

    // accept()
    out.push_str(&format!("impl<'a> {}<'a> {{\n", base));
    out.push_str("    /// Dispatch to the visitor method for this node.\n");
    out.push_str(&format!(
        "    pub fn accept<R, V: {}Visitor<'a, R> + ?Sized>(&self, visitor: &mut V) -> R {{\n",
        base
    ));
    out.push_str("        match self {\n");
    for node in &nodes {
        out.push_str(&format!(
            "            {}::{}(node) => visitor.visit_{}_{}(node),\n",
            base,
            node.name,
            to_snake_case(&node.name),
            base_snake
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    // The visitor trait.
    out.push_str(&format!(
        "/// Visitor over [`{}`] nodes, one method per node kind.\n",
        base
    ));
    out.push_str(&format!("pub trait {}Visitor<'a, R> {{\n", base));
    for node in &nodes {
        out.push_str(&format!(
            "    fn visit_{}_{}(&mut self, {}: &{}<'a>) -> R;\n",
            to_snake_case(&node.name),
            base_snake,
            base_snake,
            node.name
        ));
    }
    out.push_str("}\n");

    // The node structs.
    for node in &nodes {
        out.push('\n');
        out.push_str("#[derive(Debug, Clone, Copy, PartialEq)]\n");
        out.push_str(&format!("pub struct {}<'a> {{\n", node.name));
        for field in &node.fields {
            out.push_str(&format!(
                "    pub {}: {},\n",
                field_ident(&field.name),
                field_type(&field.ty)
            ));
        }
        out.push_str("}\n");
    }

    tracing::debug!(tree = base, nodes = nodes.len(), "generated syntax tree");
    Ok(out)
}
