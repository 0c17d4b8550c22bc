use std::{fs, path::{Path, PathBuf}, process, rc::Rc, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frontend::{
    ast::program::Program,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
    resolver::resolver::resolve_calls,
};

#[derive(Parser)]
#[command(name = "frontend")]
#[command(about = "Parses a program and prints its syntax tree")]
#[command(version)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Stop before call resolution
    #[arg(long)]
    unresolved: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    match run(&cli, source.clone(), file_name) {
        Ok(program) => println!("{:#?}", program),
        Err(error) => {
            display_error(&error, &source, &cli.file);
            process::exit(1);
        }
    }

    Ok(())
}

fn run(cli: &Cli, source: String, file_name: Option<String>) -> Result<Program, Error> {
    let start = Instant::now();

    let tokens = tokenize(source, file_name.clone())?;
    info!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name.unwrap_or_else(|| String::from("shell"))))?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if cli.unresolved {
        return Ok(program);
    }

    let resolve_start = Instant::now();
    let program = resolve_calls(program)?;
    info!("Resolved calls in {:?}", resolve_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    Ok(program)
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: UnexpectedToken (Unexpected token: `od`, expected `fi`)
        -> program.lang
           |
         3 | while x do skip od
           | ----------------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.display());

    // Resolution errors carry no source position.
    if let ErrorImpl::UnresolvedCall { .. } = error.get_internal_error() {
        return;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{:>padding$}", "|");

    let trimmed = line_text.trim_start_matches(' ');
    let removed_whitespace = line_text.len() - trimmed.len();
    eprintln!("{} | {}", line_str, trimmed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}
