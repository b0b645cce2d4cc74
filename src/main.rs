use std::fs;

use anyhow::Context;
use clap::Parser;
use lispy::{evaluate_line, evaluate_script};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// lispy is an interactive calculator for parenthesized prefix arithmetic,
/// such as `+ 1 (* 2 3)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lispy that `contents` is a file; every non-blank line of it is
    /// evaluated.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The prompt shown by the interactive loop.
    #[arg(short, long, default_value = "lispy> ")]
    prompt: String,

    /// Skips the version banner of the interactive loop.
    #[arg(short, long)]
    quiet: bool,

    /// An expression to evaluate instead of starting the interactive loop.
    contents: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    match &args.contents {
        Some(path) if args.file => run_file(path),
        Some(expression) => {
            println!("{}", evaluate_line(expression));
            Ok(())
        },
        None => run_repl(&args),
    }
}

/// Logs go to stderr so that stdout carries nothing but results. Nothing is
/// logged unless `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_file(path: &str) -> anyhow::Result<()> {
    let script = fs::read_to_string(path).with_context(|| {
                     format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                 })?;

    for output in evaluate_script(&script) {
        println!("{output}");
    }

    Ok(())
}

fn run_repl(args: &Args) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to open the terminal")?;

    if !args.quiet {
        println!("Lispy version {}", env!("CARGO_PKG_VERSION"));
        println!("Press Ctrl+c to exit\n");
    }

    loop {
        match editor.readline(&args.prompt) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    tracing::warn!(error = %e, "could not record history entry");
                }
                println!("{}", evaluate_line(&line));
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read a line"),
        }
    }

    Ok(())
}
