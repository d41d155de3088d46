use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use calcline::{Context, get_result, render_error, render_line};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcline evaluates one-line expressions with variables, strings and
/// booleans. Without a positional argument it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcline to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode only prints the last result of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Logs every stage of execution to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Reads lines from stdin until end of input, showing each result or error.
///
/// `:vars` lists the variables assigned so far.
fn repl() -> ExitCode {
    let mut context = Context::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        if line.trim() == ":vars" {
            for (name, value) in context.environment.iter_sorted() {
                println!("{name} = {value}");
            }
            continue;
        }

        match render_line(&mut context, &line) {
            Ok(Some(shown)) => println!("{shown}"),
            Ok(None) => {},
            Err(message) => eprintln!("{message}"),
        }
    }
}

/// Runs a script line by line, printing every result.
fn run_script(script: &str) -> ExitCode {
    let mut context = Context::new();

    for (index, line) in script.lines().enumerate() {
        match context.execute_line(line) {
            Ok(Some(outcome)) => println!("{outcome}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{}", render_error(&e, Some(index + 1)));
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(contents) = args.contents else {
        return repl();
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    if !args.pipe_mode {
        return run_script(&script);
    }

    match get_result(&script, true) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e, None));
            ExitCode::FAILURE
        },
    }
}
