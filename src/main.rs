use std::{fs, process};

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use prog::{get_result, interpreter::evaluator::trace::TRACE_TARGET, RunOptions};

/// prog runs scripts written in a small language with numbers, strings,
/// booleans, block scoping, `if`, `while` and a few builtin functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells prog to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a script unless
    /// it is `none`.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Runs the static checks before the script is executed.
    #[arg(short, long)]
    check: bool,

    /// Prints the significant tokens of the script.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree of the script.
    #[arg(long)]
    tree: bool,

    /// Logs every evaluation step to stderr.
    #[arg(long)]
    trace: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.trace {
        logger.filter_module(TRACE_TARGET, LevelFilter::Trace);
    }
    logger.format_timestamp(None).init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("{}",
                      format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              &args.contents).red());
            process::exit(1);
        })
    } else {
        args.contents
    };

    let options = RunOptions { pipe_mode:    args.pipe_mode,
                               check:        args.check,
                               print_tokens: args.tokens,
                               print_tree:   args.tree, };

    if let Err(e) = get_result(&script, &options) {
        eprintln!("{}", e.to_string().red());
        process::exit(1);
    }
}
