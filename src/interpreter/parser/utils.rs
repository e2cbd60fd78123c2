use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, TokenStream},
    },
};

/// Returns `true` once only the EOF token (or nothing) is left.
pub(in crate::interpreter::parser) fn at_end(tokens: &mut TokenStream<'_, '_>) -> bool {
    tokens.peek().is_none_or(|token| token.kind == TokenKind::Eof)
}

/// Describes the next token for a diagnostic, together with its line.
///
/// The EOF token is always present in a scanned sequence; a stream that ran
/// dry anyway is reported as `end of input` on line 0.
pub(in crate::interpreter::parser) fn describe_next(tokens: &mut TokenStream<'_, '_>)
                                                    -> (String, usize) {
    tokens.peek()
          .map_or_else(|| (TokenKind::Eof.describe().to_string(), 0),
                       |token| (token.describe(), token.line))
}

/// Consumes the next token if it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the expected token.
/// - `kind`: The required kind. Payload-carrying kinds are not supported.
/// - `expected`: Description used in the error, e.g. `';' after value`.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` naming what was found instead.
pub(in crate::interpreter::parser) fn consume<'a, 'src>(tokens: &mut TokenStream<'a, 'src>,
                                                        kind: TokenKind<'src>,
                                                        expected: &'static str)
                                                        -> ParseResult<&'a Token<'src>> {
    if let Some(token) = tokens.next_if(|token| token.kind == kind) {
        return Ok(token);
    }

    let (found, line) = describe_next(tokens);
    Err(ParseError::ExpectedToken { expected,
                                    found,
                                    line })
}

/// Parses the operand of `operator` with `operand`.
///
/// A failure on the very first token after the operator is reported as
/// `MissingOperand`. Failures further in (an empty grouping inside the
/// operand, for example) are kept as they are.
pub(in crate::interpreter::parser) fn parse_operand<'a, 'src, F>(tokens: &mut TokenStream<'a, 'src>,
                                                                 operator: &Token<'_>,
                                                                 operand: F)
                                                                 -> ParseResult<Expr>
    where F: FnOnce(&mut TokenStream<'a, 'src>) -> ParseResult<Expr>
{
    let remaining = tokens.len();

    operand(tokens).map_err(|error| match error {
                       ParseError::ExpectedExpression { found, line } if tokens.len() == remaining => {
                           ParseError::MissingOperand { operator: operator.lexeme.to_string(),
                                                        found,
                                                        line }
                       },
                       other => other,
                   })
}
