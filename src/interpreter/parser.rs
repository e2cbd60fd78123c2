/// Parses binary operators at every precedence tier.
///
/// Contains the equality, comparison, term and factor rules. Each tier is
/// left-associative and delegates its operands to the next, tighter tier.
pub mod binary;
/// Core parsing routines and the entry points.
///
/// Provides the main entry points for parsing programs and expressions, the
/// assignment rule, and the shared result and token stream types.
pub mod core;
/// Statement parsing.
///
/// Handles variable declarations, `print` statements and expression
/// statements, including their terminating `;`.
pub mod statement;
/// Parses unary operators and primary expressions.
///
/// Handles prefix `!` and `-`, literals, variables and parenthesized
/// groupings.
pub mod unary;
/// Parser utilities.
///
/// Helper functions for consuming expected tokens and converting nested
/// failures into operator diagnostics.
pub mod utils;

pub use self::core::{ParseResult, parse, parse_single_expression};
