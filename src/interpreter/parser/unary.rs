use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{describe_next, parse_operand},
        },
    },
};

/// Parses prefix operators.
///
/// Prefix operators nest, so `!!x` and `--x` are accepted.
///
/// The rule is: `unary := ("!" | "-") unary | primary`
///
/// # Errors
/// Returns `MissingOperand` if the operator is not followed by an operand.
pub fn parse_unary(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    let Some((token, op)) =
        tokens.peek()
              .and_then(|token| token_to_unary_operator(&token.kind).map(|op| (*token, op)))
    else {
        return parse_primary(tokens);
    };

    tokens.next();
    let expr = parse_operand(tokens, token, parse_unary)?;

    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     line: token.line })
}

/// Parses a primary expression.
///
/// The rule is:
/// ```text
/// primary := NUMBER | STRING | "true" | "false" | "nil"
///          | "(" expression ")" | IDENTIFIER
/// ```
///
/// # Errors
/// - `ExpectedExpression` if the next token cannot start an expression.
/// - `ExpectedClosingParen` if a grouping is not closed.
pub fn parse_primary(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    let Some(&token) = tokens.peek() else {
        let (found, line) = describe_next(tokens);
        return Err(ParseError::ExpectedExpression { found, line });
    };
    let line = token.line;

    let literal = |value| Expr::Literal { value, line };
    let expr = match token.kind {
        TokenKind::Number(n) => literal(LiteralValue::Number(n)),
        TokenKind::String(s) => literal(LiteralValue::String(s.to_string())),
        TokenKind::True => literal(LiteralValue::Bool(true)),
        TokenKind::False => literal(LiteralValue::Bool(false)),
        TokenKind::Nil => literal(LiteralValue::Nil),
        TokenKind::Identifier => Expr::Variable { name: token.lexeme.to_string(),
                                                  line },
        TokenKind::LeftParen => {
            tokens.next();
            return parse_grouping(tokens, line);
        },
        _ => {
            return Err(ParseError::ExpectedExpression { found: token.describe(),
                                                        line });
        },
    };

    tokens.next();
    Ok(expr)
}

/// Parses the inside of a parenthesized expression and its closing `)`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `(`.
/// - `line`: Line number of the `(` token.
fn parse_grouping(tokens: &mut TokenStream<'_, '_>, line: usize) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;

    if tokens.next_if(|token| token.kind == TokenKind::RightParen).is_none() {
        let (found, line) = describe_next(tokens);
        return Err(ParseError::ExpectedClosingParen { found, line });
    }

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line })
}

/// Maps a token to its corresponding unary operator.
#[must_use]
pub const fn token_to_unary_operator(kind: &TokenKind<'_>) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Bang => Some(UnaryOperator::Not),
        TokenKind::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}
