/// The environment module stores variable bindings.
///
/// A single flat table maps names to values for the lifetime of one
/// interpreter. Declarations insert or overwrite; assignments only replace
/// existing bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements and writes the output of `print`.
///
/// # Responsibilities
/// - Evaluates expressions left to right through the visitor traits.
/// - Applies the operand rules of every operator.
/// - Reports runtime errors such as type mismatches or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, punctuation and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Skips whitespace and comments, tracking line numbers as it goes.
/// - Collects lexical errors without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a program: an ordered list of statements, each owning its expression trees.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions by recursive descent.
/// - Encodes operator precedence and associativity in its rule structure.
/// - Reports the first syntax error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum: booleans, `nil`, numbers and strings, with
/// their truthiness, equality and print formatting.
pub mod value;
