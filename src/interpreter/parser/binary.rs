use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_unary,
            utils::parse_operand,
        },
    },
};

/// Parses one left-associative precedence tier.
///
/// Parses an operand with `operand`, then keeps folding
/// `operator operand` pairs into the left side for as long as the next
/// token is one of `operators`.
///
/// # Errors
/// Propagates operand errors; a missing right operand is reported as
/// `MissingOperand` for the operator just consumed.
fn parse_binary_tier<'a, 'src>(tokens: &mut TokenStream<'a, 'src>,
                               operand: fn(&mut TokenStream<'a, 'src>) -> ParseResult<Expr>,
                               operators: &[BinaryOperator])
                               -> ParseResult<Expr> {
    let mut left = operand(tokens)?;

    while let Some((token, op)) =
        tokens.peek().and_then(|token| {
                         token_to_binary_operator(&token.kind).filter(|op| operators.contains(op))
                                                              .map(|op| (*token, op))
                     })
    {
        tokens.next();
        let right = parse_operand(tokens, token, operand)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line: token.line };
    }

    Ok(left)
}

/// Parses equality operators.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens,
                      parse_comparison,
                      &[BinaryOperator::NotEqual, BinaryOperator::Equal])
}

/// Parses relational operators.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens,
                      parse_term,
                      &[BinaryOperator::Greater,
                        BinaryOperator::GreaterEqual,
                        BinaryOperator::Less,
                        BinaryOperator::LessEqual])
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_factor, &[BinaryOperator::Sub, BinaryOperator::Add])
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_factor(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_unary, &[BinaryOperator::Div, BinaryOperator::Mul])
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind<'_>) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{LiteralValue, printer::AstPrinter},
        error::ParseError,
        interpreter::{lexer::scan_all, parser::parse_single_expression},
    };

    fn tree(source: &str) -> String {
        AstPrinter.print(&parse_single_expression(&scan_all(source).tokens).unwrap())
    }

    #[test]
    fn each_tier_is_left_associative() {
        assert_eq!(tree("a == b != c"), "(!= (== a b) c)");
        assert_eq!(tree("a < b >= c"), "(>= (< a b) c)");
        assert_eq!(tree("a - b + c"), "(+ (- a b) c)");
        assert_eq!(tree("a / b * c"), "(* (/ a b) c)");
    }

    #[test]
    fn tiers_nest_by_precedence() {
        assert_eq!(tree("a == b < c + d * e"), "(== a (< b (+ c (* d e))))");
        assert_eq!(tree("a * b + c < d == e"), "(== (< (+ (* a b) c) d) e)");
    }

    #[test]
    fn operator_line_is_recorded() {
        let expr = parse_single_expression(&scan_all("1\n+\n2").tokens).unwrap();
        let Expr::Binary { line, right, .. } = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(line, 2);
        assert_eq!(*right,
                   Expr::Literal { value: LiteralValue::Number(2.0),
                                   line:  3, });
    }

    #[test]
    fn missing_right_operand_names_the_operator() {
        let result = parse_single_expression(&scan_all("1 +").tokens);
        assert_eq!(result,
                   Err(ParseError::MissingOperand { operator: "+".to_string(),
                                                    found:    "end of input".to_string(),
                                                    line:     1, }));

        let result = parse_single_expression(&scan_all("1 <= )").tokens);
        assert_eq!(result,
                   Err(ParseError::MissingOperand { operator: "<=".to_string(),
                                                    found:    "')'".to_string(),
                                                    line:     1, }));
    }

    #[test]
    fn empty_grouping_inside_operand_is_not_a_missing_operand() {
        let result = parse_single_expression(&scan_all("1 + (;").tokens);
        assert_eq!(result,
                   Err(ParseError::ExpectedExpression { found: "';'".to_string(),
                                                        line:  1, }));

        let result = parse_single_expression(&scan_all("2 * -(\n)").tokens);
        assert_eq!(result,
                   Err(ParseError::ExpectedExpression { found: "')'".to_string(),
                                                        line:  2, }));
    }

    #[test]
    fn innermost_operator_is_blamed_for_its_own_operand() {
        let result = parse_single_expression(&scan_all("1 + -").tokens);
        assert_eq!(result,
                   Err(ParseError::MissingOperand { operator: "-".to_string(),
                                                    found:    "end of input".to_string(),
                                                    line:     1, }));
    }
}
