// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo: read one or more lines with history recall and inline hints.
//!
//! ```text
//! cargo run --bin readline_hint_demo -- \
//!     --autocomplete "git status" --autocomplete "git stash" --autocomplete "git log" \
//!     --history "git status" --repeat 3
//! ```
//!
//! Keys: type to get a dim hint, <kbd>Tab</kbd> or <kbd>Right</kbd> (at the end of the
//! line) to accept it, <kbd>Up</kbd> / <kbd>Down</kbd> to browse history, and
//! <kbd>Enter</kbd>, <kbd>Esc</kbd>, or <kbd>Ctrl+C</kbd> to submit.

use clap::Parser;
use r3bl_readline_hint::{MatchPolicy, ReadOptions, TracingConfig, init_tracing, read_line};

#[derive(Debug, Parser)]
#[command(bin_name = "readline_hint_demo")]
#[command(about = "Read lines from the terminal with history and inline completion hints")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[arg(long, short = 'p', default_value = "> ", help = "Prompt written before the input")]
    pub prompt: String,

    #[arg(long = "history", help = "Seed history entry, oldest first (repeatable)")]
    pub history: Vec<String>,

    #[arg(long = "autocomplete", short = 'a', help = "Completion candidate (repeatable)")]
    pub autocomplete: Vec<String>,

    #[arg(
        long,
        default_value_t = 0,
        help = "Max edit distance between the input and a candidate prefix"
    )]
    pub max_cost: usize,

    #[arg(long, help = "Log file path [default: readline_hint_debug.log]")]
    pub log_file: Option<String>,

    #[arg(long, help = "Don't write a log file")]
    pub no_log: bool,

    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        help = "Number of lines to read, each read gets the history of the previous one"
    )]
    pub repeat: usize,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if !cli_arg.no_log {
        init_tracing(TracingConfig::new_file(cli_arg.log_file.clone()))?;
    }
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let mut history = cli_arg.history.clone();
    for _ in 0..cli_arg.repeat {
        let options = ReadOptions::default()
            .with_history(history)
            .with_autocomplete(cli_arg.autocomplete.iter().cloned())
            .with_match_policy(MatchPolicy::with_max_cost(cli_arg.max_cost));

        let outcome = read_line(Some(&cli_arg.prompt), options).await?;
        println!("{}", outcome.line);
        history = outcome.history;
    }

    tracing::debug!(message = "Stop logging...", history_len = history.len());
    Ok(())
}
