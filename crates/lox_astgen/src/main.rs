//! lox-astgen: Emits the Rust definitions of the Lox syntax trees.
//!
//! Usage:
//!   lox-astgen [--tree expr|stmt|all] [--out-dir DIR]
//!
//! Without `--out-dir` the generated source is printed to stdout.

use clap::{Parser as ClapParser, ValueEnum};
use lox_astgen::{define_ast, to_snake_case, AstGenError, EXPR_NODES, STMT_NODES};
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Tree {
    Expr,
    Stmt,
    All,
}

#[derive(ClapParser, Debug)]
#[command(name = "lox-astgen", about = "Generate Lox syntax tree definitions")]
struct Cli {
    /// Which tree to generate.
    #[arg(long, value_enum, default_value_t = Tree::All)]
    tree: Tree,

    /// Write `<tree>.rs` files into this directory instead of stdout.
    #[arg(long = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AstGenError> {
    let trees: &[(&str, &[&str])] = match cli.tree {
        Tree::Expr => &[("Expr", EXPR_NODES)],
        Tree::Stmt => &[("Stmt", STMT_NODES)],
        Tree::All => &[("Expr", EXPR_NODES), ("Stmt", STMT_NODES)],
    };

    for (base, nodes) in trees {
        let source = define_ast(base, nodes)?;
        match cli.out_dir {
            Some(ref dir) => {
                let path = dir.join(format!("{}.rs", to_snake_case(base)));
                std::fs::write(&path, source).map_err(|source| AstGenError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                eprintln!("wrote {}", path.display());
            }
            None => print!("{}", source),
        }
    }
    Ok(())
}
