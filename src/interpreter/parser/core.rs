use std::{iter::Peekable, slice};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_equality,
            statement::parse_declaration,
            utils::{at_end, parse_operand},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The token cursor every parsing function advances.
pub type TokenStream<'a, 'src> = Peekable<slice::Iter<'a, Token<'src>>>;

/// Parses a whole token sequence into a [`Program`].
///
/// Statements are parsed in order until the EOF token. Parsing stops at the
/// first error; no later statement is attempted.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::scan_all, parser::parse};
///
/// let scan = scan_all("var a = 1; print a;");
/// let program = parse(&scan.tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[Token<'_>]) -> ParseResult<Program> {
    let mut stream = tokens.iter().peekable();
    let mut program = Program::new();

    while !at_end(&mut stream) {
        program.push(parse_declaration(&mut stream)?);
    }

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}

/// Parses a token sequence that must hold exactly one expression.
///
/// # Errors
/// Returns a [`ParseError`] if the expression is malformed or followed by
/// anything other than the EOF token.
pub fn parse_single_expression(tokens: &[Token<'_>]) -> ParseResult<Expr> {
    let mut stream = tokens.iter().peekable();
    let expr = parse_expression(&mut stream)?;

    match stream.peek() {
        Some(token) if token.kind != TokenKind::Eof => {
            Err(ParseError::ExpectedToken { expected: "end of input",
                                            found:    token.describe(),
                                            line:     token.line, })
        },
        _ => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
pub fn parse_expression(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses an assignment, which is right-associative.
///
/// The left-hand side is parsed as an ordinary expression first and only
/// accepted as a target if it turns out to be a bare variable.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Errors
/// - `InvalidAssignmentTarget` if `=` follows anything but a variable.
/// - `MissingOperand` if nothing valid follows the `=`.
pub fn parse_assignment(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    let target = parse_equality(tokens)?;

    let Some(equals) = tokens.next_if(|token| token.kind == TokenKind::Equal) else {
        return Ok(target);
    };

    let value = parse_operand(tokens, equals, parse_assignment)?;

    match target {
        Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                           value: Box::new(value),
                                                           line }),
        _ => Err(ParseError::InvalidAssignmentTarget { line: equals.line }),
    }
}
