use logos::{FilterResult, Lexer, Logos};

use crate::error::LexError;

/// Represents the kind of a lexical token in the source input.
///
/// Literal payloads live inside the kind: numbers are parsed to `f64` and
/// string literals keep a slice of the source with the quotes trimmed.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind<'src> {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens. The payload excludes the surrounding quotes.
    #[token("\"", string_literal)]
    String(&'src str),
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    Number(f64),

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `// Comments.`
    #[token("//", line_comment)]
    LineComment,
    /// `/* Block comments, /* nestable */. */`
    #[token("/*", block_comment)]
    BlockComment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,

    /// Appended once after the last scanned token.
    Eof,
}

impl TokenKind<'_> {
    /// Returns a short, human readable name of the kind.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Eof => "end of input",
            _ => "token",
        }
    }
}

/// A scanned token together with its source text and line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// What the token is, including any literal payload.
    pub kind:   TokenKind<'src>,
    /// The exact source text the token was scanned from.
    pub lexeme: &'src str,
    /// The source line the token ended on.
    pub line:   usize,
}

impl Token<'_> {
    /// Renders the token for diagnostics: the quoted lexeme, or `end of
    /// input` for the EOF token.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => self.kind.describe().to_string(),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Error type produced by the generated lexer.
///
/// Converted to a [`LexError`] once the offending slice and line are known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token pattern matched the input.
    #[default]
    UnexpectedCharacter,
    /// A string ran to end of input. Carries the line it started on.
    UnterminatedString(usize),
    /// A block comment ran to end of input. Carries the line it started on.
    UnterminatedBlockComment(usize),
}

/// The full result of scanning one source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<'src> {
    /// Every token in source order, always terminated by [`TokenKind::Eof`].
    pub tokens: Vec<Token<'src>>,
    /// Diagnostics reported along the way, in source order.
    pub errors: Vec<LexError>,
}

impl Scan<'_> {
    /// Returns `true` if scanning reported no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Converts a source buffer into its token sequence.
///
/// Scanning never stops early: every diagnostic is recorded and the scanner
/// moves past the offending input, so the returned sequence always ends with
/// an EOF token.
///
/// # Example
/// ```
/// use treelox::interpreter::lexer::{TokenKind, scan_all};
///
/// let scan = scan_all("var x = 1;");
/// let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
///
/// assert!(scan.is_clean());
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Identifier,
///                 TokenKind::Equal,
///                 TokenKind::Number(1.0),
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
#[must_use]
pub fn scan_all(source: &str) -> Scan<'_> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice(),
                                            line }),
            Err(kind) => errors.push(into_lex_error(kind, lexer.slice(), line)),
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: "",
                        line:   lexer.extras.line, });

    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");

    Scan { tokens, errors }
}

fn into_lex_error(kind: LexErrorKind, slice: &str, line: usize) -> LexError {
    match kind {
        LexErrorKind::UnexpectedCharacter => {
            LexError::UnexpectedCharacter { character: slice.to_string(),
                                            line }
        },
        LexErrorKind::UnterminatedString(line) => LexError::UnterminatedString { line },
        LexErrorKind::UnterminatedBlockComment(line) => {
            LexError::UnterminatedBlockComment { line }
        },
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number<'src>(lex: &Lexer<'src, TokenKind<'src>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal after its opening quote.
///
/// The literal is taken verbatim up to the next `"`; newlines inside it
/// advance the line counter. At end of input the partial literal is
/// consumed and dropped.
fn string_literal<'src>(lex: &mut Lexer<'src, TokenKind<'src>>)
                        -> Result<&'src str, LexErrorKind> {
    let starting_line = lex.extras.line;
    let remainder = lex.remainder();

    if let Some(end) = remainder.find('"') {
        let contents = &remainder[..end];
        lex.extras.line += count_newlines(contents);
        lex.bump(end + 1);
        Ok(contents)
    } else {
        lex.extras.line += count_newlines(remainder);
        lex.bump(remainder.len());
        Err(LexErrorKind::UnterminatedString(starting_line))
    }
}

/// Skips a `//` comment up to, but not including, the line break.
fn line_comment<'src>(lex: &mut Lexer<'src, TokenKind<'src>>) -> logos::Skip {
    let remainder = lex.remainder();
    let end = remainder.find('\n').unwrap_or(remainder.len());
    lex.bump(end);
    logos::Skip
}

/// Skips a block comment after its opening `/*`.
///
/// Comments nest: every `/*` must be closed by its own `*/`.
fn block_comment<'src>(lex: &mut Lexer<'src, TokenKind<'src>>)
                       -> FilterResult<(), LexErrorKind> {
    let starting_line = lex.extras.line;
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut newlines = 0;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.extras.line += newlines;
                    lex.bump(i);
                    return FilterResult::Skip;
                }
            },
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            },
            (b'\n', _) => {
                newlines += 1;
                i += 1;
            },
            _ => i += 1,
        }
    }

    lex.extras.line += newlines;
    lex.bump(bytes.len());
    FilterResult::Error(LexErrorKind::UnterminatedBlockComment(starting_line))
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind<'_>> {
        scan_all(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn one_and_two_character_operators_use_maximal_munch() {
        assert_eq!(kinds("! != = == < <= > >="),
                   vec![TokenKind::Bang,
                        TokenKind::BangEqual,
                        TokenKind::Equal,
                        TokenKind::EqualEqual,
                        TokenKind::Less,
                        TokenKind::LessEqual,
                        TokenKind::Greater,
                        TokenKind::GreaterEqual,
                        TokenKind::Eof]);
        assert_eq!(kinds("!=="),
                   vec![TokenKind::BangEqual, TokenKind::Equal, TokenKind::Eof]);
    }

    #[test]
    fn numbers_take_a_fraction_only_when_a_digit_follows_the_dot() {
        assert_eq!(kinds("12.5"), vec![TokenKind::Number(12.5), TokenKind::Eof]);
        assert_eq!(kinds("12."),
                   vec![TokenKind::Number(12.0), TokenKind::Dot, TokenKind::Eof]);
        assert_eq!(kinds(".5"),
                   vec![TokenKind::Dot, TokenKind::Number(5.0), TokenKind::Eof]);
    }

    #[test]
    fn keywords_match_exactly() {
        assert_eq!(kinds("var variable print printer nil _nil"),
                   vec![TokenKind::Var,
                        TokenKind::Identifier,
                        TokenKind::Print,
                        TokenKind::Identifier,
                        TokenKind::Nil,
                        TokenKind::Identifier,
                        TokenKind::Eof]);
    }

    #[test]
    fn string_literal_trims_quotes_and_keeps_lexeme() {
        let scan = scan_all("\"hello world\"");
        assert_eq!(scan.tokens[0].kind, TokenKind::String("hello world"));
        assert_eq!(scan.tokens[0].lexeme, "\"hello world\"");
    }

    #[test]
    fn multiline_string_advances_line_counter() {
        let scan = scan_all("\"a\nb\"\nx");
        assert_eq!(scan.tokens[0].kind, TokenKind::String("a\nb"));
        assert_eq!(scan.tokens[0].line, 2);
        assert_eq!(scan.tokens[1].line, 3);
    }

    #[test]
    fn unterminated_string_is_reported_on_its_starting_line() {
        let scan = scan_all("\n\"abc\ndef");
        assert_eq!(scan.errors, vec![LexError::UnterminatedString { line: 2 }]);
        assert_eq!(scan.tokens.len(), 1);
        assert_eq!(scan.tokens[0].kind, TokenKind::Eof);
        assert_eq!(scan.tokens[0].line, 3);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(kinds("1 // two\n3"),
                   vec![TokenKind::Number(1.0), TokenKind::Number(3.0), TokenKind::Eof]);
        assert_eq!(kinds("1 /* a /* nested */ still comment */ 2"),
                   vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
    }

    #[test]
    fn block_comment_counts_lines() {
        let scan = scan_all("/*\n\n*/ x");
        assert_eq!(scan.tokens[0].kind, TokenKind::Identifier);
        assert_eq!(scan.tokens[0].line, 3);
    }

    #[test]
    fn unterminated_block_comment_is_reported_and_scanning_ends() {
        let scan = scan_all("1\n/* open /* */");
        assert_eq!(scan.errors, vec![LexError::UnterminatedBlockComment { line: 2 }]);
        assert_eq!(kinds("1\n/* open /* */"),
                   vec![TokenKind::Number(1.0), TokenKind::Eof]);
    }

    #[test]
    fn unexpected_characters_do_not_stop_scanning() {
        let scan = scan_all("1 @ 2\n#");
        assert_eq!(scan.errors,
                   vec![LexError::UnexpectedCharacter { character: "@".to_string(),
                                                        line:      1, },
                        LexError::UnexpectedCharacter { character: "#".to_string(),
                                                        line:      2, }]);
        let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds,
                   vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
    }

    #[test]
    fn scanning_is_deterministic() {
        let source = "var a = \"x\" + 1.5; /* c */ print a != nil;";
        assert_eq!(scan_all(source), scan_all(source));
    }

    #[test]
    fn tabs_and_carriage_returns_do_not_advance_the_line() {
        let scan = scan_all("\tvar\r\n x\t=\r1;");
        let lines: Vec<_> = scan.tokens.iter().map(|t| t.line).collect();

        assert!(scan.is_clean());
        assert_eq!(kinds("\tvar\r\n x\t=\r1;"),
                   vec![TokenKind::Var,
                        TokenKind::Identifier,
                        TokenKind::Equal,
                        TokenKind::Number(1.0),
                        TokenKind::Semicolon,
                        TokenKind::Eof]);
        assert_eq!(lines, vec![1, 2, 2, 2, 2, 2]);
    }
}
