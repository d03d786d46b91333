use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lark::{
    display_error,
    lexer::lexer::tokenize,
    parser::{closure::resolve_closures, cursor::TokenCursor, parser::parse},
};

/// Front end for the lark language: lexes and parses a source file and
/// prints the resulting tree.
#[derive(Debug, Parser)]
#[command(name = "lark", version, about = "Lark language front end")]
struct Cli {
    /// Source file to parse
    file: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print the fully parenthesized form of an expression and exit
    #[arg(long, value_name = "EXPR")]
    resolve: Option<String>,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(expression) = &cli.resolve {
        resolve_expression(expression);
        return;
    }

    let Some(file_path) = &cli.file else {
        error!("no source file given");
        exit(2);
    };

    let file_name = file_path.to_string_lossy().to_string();
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(e) => {
            error!(file = %file_name, "failed to read file: {}", e);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            display_error(&e, &source, &file_name);
            exit(1);
        }
    };
    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            println!("{:>4}:{:<4} {:?} {:?}", token.line, token.column, token.kind, token.literal);
        }
        return;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(e) => {
            display_error(&e, &source, &file_name);
            exit(1);
        }
    };
    info!(elapsed = ?parse_start.elapsed(), "parsed");

    print!("{}", program.pretty());
    info!(elapsed = ?start.elapsed(), "total");
}

fn resolve_expression(expression: &str) {
    let resolved = tokenize(expression)
        .and_then(|tokens| resolve_closures(TokenCursor::new(&tokens)));

    match resolved {
        Ok(tokens) => {
            let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
            println!("{}", literals.join(" "));
        }
        Err(e) => {
            display_error(&e, expression, "<expression>");
            exit(1);
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "lark=info",
        1 => "lark=debug",
        _ => "lark=trace",
    }
}
