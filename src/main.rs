use std::{fs, process::ExitCode};

use clap::Parser;
use treelox::{
    ast::printer::{AstPrinter, RpnPrinter},
    parse_source, run,
};

/// treelox runs scripts written in a small dynamically typed language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treelox to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed program in parenthesized form instead of running it.
    #[arg(long, conflicts_with = "rpn")]
    ast: bool,

    /// Prints the expression of every `print` and expression statement in
    /// reverse Polish notation instead of running it.
    #[arg(long)]
    rpn: bool,

    contents: String,
}

/// Installs a stderr logger when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let result = if args.ast || args.rpn {
        parse_source(&script).map(|program| {
                                 if args.ast {
                                     print!("{}", AstPrinter.print_program(&program));
                                 } else {
                                     print!("{}", RpnPrinter.print_program(&program));
                                 }
                             })
    } else {
        run(&script)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
