//! # treelox
//!
//! treelox is a tree-walking interpreter for a small dynamically typed
//! scripting language. Programs are scanned into tokens, parsed into an
//! abstract syntax tree, and executed statement by statement against a
//! single global environment.
//!
//! The language has numbers, strings, booleans and `nil`; arithmetic,
//! comparison and equality operators; variable declarations, assignment and
//! `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::{Expr, Program},
    error::{Error, LexErrors},
    interpreter::{evaluator::core::Interpreter, lexer::scan_all, parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the `Program`
/// that holds them, representing the syntactic structure of source code as a
/// tree. The AST is built by the parser and traversed by the evaluator and
/// the printers through the visitor traits.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Dispatches every node to the matching visitor handler.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Every error carries the source line it refers to and
/// renders as a single `Error on line N: ...` message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Wraps the phase errors into one `Error` for the entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the variable environment to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers shared by the printers and the evaluator.
pub mod util;

/// Scans and parses a whole program.
///
/// # Errors
/// Returns `Error::Lex` with every lexical diagnostic if scanning reported
/// any, otherwise `Error::Parse` with the first syntax error.
///
/// # Examples
/// ```
/// use treelox::parse_source;
///
/// let program = parse_source("var a = 1;\nprint a;").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse_source("print 1").is_err());
/// assert!(parse_source("print @;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let scan = scan_all(source);
    if !scan.is_clean() {
        return Err(LexErrors::from(scan.errors).into());
    }

    Ok(parser::parse(&scan.tokens)?)
}

/// Scans and parses a single expression with nothing after it.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` the same way [`parse_source`]
/// does.
pub fn parse_expression_source(source: &str) -> Result<Expr, Error> {
    let scan = scan_all(source);
    if !scan.is_clean() {
        return Err(LexErrors::from(scan.errors).into());
    }

    Ok(parser::parse_single_expression(&scan.tokens)?)
}

/// Runs a program, writing the output of `print` to standard output.
///
/// Nothing is executed unless the whole source scans and parses cleanly.
///
/// # Errors
/// Returns an error if scanning, parsing or execution fails. Statements that
/// ran before a runtime error keep their effects.
///
/// # Examples
/// ```
/// use treelox::run;
///
/// assert!(run("var x = 2; print x * 3;").is_ok());
///
/// // 'y' was never declared.
/// assert!(run("print y;").is_err());
/// ```
pub fn run(source: &str) -> Result<(), Error> {
    let mut interpreter = Interpreter::new();
    execute(source, &mut interpreter)
}

/// Runs a program, writing the output of `print` to `out`.
///
/// # Errors
/// Same as [`run`].
///
/// # Examples
/// ```
/// use treelox::run_with_output;
///
/// let mut out = Vec::new();
/// run_with_output("print \"a\" + \"b\";", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "\"ab\"\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: W) -> Result<(), Error> {
    let mut interpreter = Interpreter::with_output(out);
    execute(source, &mut interpreter)
}

fn execute<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Result<(), Error> {
    let program = parse_source(source)?;
    interpreter.execute_program(&program)?;

    Ok(())
}
