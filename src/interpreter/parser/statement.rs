use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{consume, describe_next, parse_operand},
        },
    },
};

/// Parses a declaration, the top-level unit of a program.
///
/// The rule is: `declaration := "var" IDENTIFIER ("=" expression)? ";" |
/// statement`
pub fn parse_declaration(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Statement> {
    if tokens.next_if(|token| token.kind == TokenKind::Var).is_some() {
        return parse_var_declaration(tokens);
    }
    parse_statement(tokens)
}

/// Parses a statement.
///
/// The rule is: `statement := "print" expression ";" | expression ";"`
pub fn parse_statement(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Statement> {
    if let Some(print) = tokens.next_if(|token| token.kind == TokenKind::Print) {
        let expr = parse_expression(tokens)?;
        consume(tokens, TokenKind::Semicolon, "';' after value")?;

        return Ok(Statement::Print { expr,
                                     line: print.line });
    }

    let (_, line) = describe_next(tokens);
    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, "';' after expression")?;

    Ok(Statement::Expression { expr, line })
}

/// Parses the rest of a variable declaration after `var`.
///
/// # Errors
/// - `ExpectedToken` if the name or the terminating `;` is missing.
/// - `MissingOperand` if `=` is not followed by an initializer.
fn parse_var_declaration(tokens: &mut TokenStream<'_, '_>) -> ParseResult<Statement> {
    let name = consume(tokens, TokenKind::Identifier, "variable name")?;

    let initializer = match tokens.next_if(|token| token.kind == TokenKind::Equal) {
        Some(equals) => Some(parse_operand(tokens, equals, parse_expression)?),
        None => None,
    };

    consume(tokens, TokenKind::Semicolon, "';' after variable declaration")?;

    Ok(Statement::VarDeclaration { name: name.lexeme.to_string(),
                                   initializer,
                                   line: name.line })
}
