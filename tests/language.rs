use std::fs;

use pretty_assertions::assert_eq;
use treelox::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::lexer::{TokenKind, scan_all},
    parse_source, run_with_output,
};
use walkdir::WalkDir;

/// Runs `src` and returns what it printed, or the error that stopped it.
fn output_of(src: &str) -> Result<String, (Error, String)> {
    let mut out = Vec::new();
    let result = run_with_output(src, &mut out);
    let printed = String::from_utf8(out).expect("print output is valid UTF-8");

    match result {
        Ok(()) => Ok(printed),
        Err(e) => Err((e, printed)),
    }
}

fn assert_success(src: &str) {
    if let Err((e, _)) = output_of(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if output_of(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_prints(src: &str, expected: &str) {
    match output_of(src) {
        Ok(printed) => assert_eq!(printed, expected),
        Err((e, _)) => panic!("Script failed: {e}"),
    }
}

#[test]
fn script_fixtures_match_expectations() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = extract_expectations(&source);
        count += 1;

        match output_of(&source) {
            Ok(printed) => assert_eq!(printed, expected, "output of {path:?}"),
            Err((e, _)) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Collects the text after every `// expect: ` marker, one output line each.
fn extract_expectations(source: &str) -> String {
    source.lines()
          .filter_map(|line| line.split_once("// expect: "))
          .map(|(_, expected)| format!("{expected}\n"))
          .collect()
}

#[test]
fn arithmetic_follows_precedence() {
    assert_prints("print 1 + 2 * 3;", "7.000000\n");
    assert_prints("print (1 + 2) * 3;", "9.000000\n");
    assert_prints("print 10 - 4 - 3;", "3.000000\n");
    assert_prints("print 8 / 4 / 2;", "1.000000\n");
    assert_prints("print -2 * -3;", "6.000000\n");
}

#[test]
fn string_concatenation() {
    assert_prints("print \"foo\" + \"bar\";", "\"foobar\"\n");
    assert_failure("print 1 + \"a\";");
    assert_failure("print \"a\" + nil;");
}

#[test]
fn equality_tolerance() {
    assert_prints("print 1 == 1.000000005;", "true\n");
    assert_prints("print 1 == 1.1;", "false\n");
    assert_prints("print 0.1 + 0.2 == 0.3;", "true\n");
    assert_prints("print 1 != 1.00001;", "true\n");
}

#[test]
fn equality_across_kinds() {
    assert_prints("print nil == false;", "false\n");
    assert_prints("print 0 == \"0\";", "false\n");
    assert_prints("print nil == nil;", "true\n");
    assert_prints("print \"a\" == \"a\";", "true\n");
}

#[test]
fn truthiness() {
    assert_prints("print !nil;", "true\n");
    assert_prints("print !0;", "false\n");
    assert_prints("print !\"\";", "false\n");
    assert_prints("print !!true;", "true\n");
}

#[test]
fn undefined_variable_prints_nothing() {
    match output_of("print x;") {
        Err((Error::Runtime(RuntimeError::UndefinedVariable { name, line: 1 }), printed)) => {
            assert_eq!(name, "x");
            assert_eq!(printed, "");
        },
        other => panic!("expected an undefined variable error, got {other:?}"),
    }
}

#[test]
fn variable_lifecycle() {
    assert_prints("var x = 1; x = 2; print x;", "2.000000\n");
    assert_prints("var a; print a;", "nil\n");
    assert_prints("var a = 1; var b = 2; a = b = 5; print a + b;", "10.000000\n");
    assert_failure("y = 1;");
}

#[test]
fn prints_before_runtime_error_remain() {
    match output_of("print 1;\nprint 2;\nprint -nil;\nprint 4;") {
        Err((Error::Runtime(e), printed)) => {
            assert_eq!(e.line(), 3);
            assert_eq!(printed, "1.000000\n2.000000\n");
        },
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn comparison_needs_numbers() {
    assert_prints("print 1 < 2;", "true\n");
    assert_prints("print 2 <= 1;", "false\n");
    assert_failure("print \"a\" < \"b\";");
    assert_failure("print true > false;");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_prints("print 1 / 0;", "inf\n");
    assert_prints("print -1 / 0;", "-inf\n");
    assert_prints("print 0 / 0;", "nan\n");
}

#[test]
fn lexical_errors_stop_before_execution() {
    match output_of("print 1;\nprint 2 @ 3;") {
        Err((Error::Lex(errors), printed)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.iter().next().map(LexError::line), Some(2));
            assert_eq!(printed, "");
        },
        other => panic!("expected a lexical error, got {other:?}"),
    }
}

#[test]
fn every_lexical_error_is_reported() {
    match parse_source("# ~\n\"open") {
        Err(Error::Lex(errors)) => {
            let lines: Vec<_> = errors.iter().map(LexError::line).collect();
            assert_eq!(lines, vec![1, 1, 2]);
        },
        other => panic!("expected lexical errors, got {other:?}"),
    }
}

#[test]
fn unterminated_string_still_ends_with_eof() {
    let scan = scan_all("\"abc");

    assert_eq!(scan.errors, vec![LexError::UnterminatedString { line: 1 }]);
    assert_eq!(scan.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn scanning_is_deterministic() {
    let source = "var answer = (1 + 2) * 14; /* note */ print answer >= 42; // done";

    assert_eq!(scan_all(source), scan_all(source));
}

#[test]
fn parsing_is_repeatable() {
    let source = "var a = 1; print -a * (2 + 3) != nil;";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}

#[test]
fn parse_errors_abort_the_whole_program() {
    match output_of("print 1;\nprint 2\nprint 3;") {
        Err((Error::Parse(ParseError::ExpectedToken { line: 3, .. }), printed)) => {
            assert_eq!(printed, "");
        },
        other => panic!("expected a missing ';' error, got {other:?}"),
    }

    assert_failure("print (1 + 2;");
    assert_failure("print 1 +;");
    assert_failure("var = 3;");
    assert_failure("1 = 2;");
}

#[test]
fn comments_and_whitespace_are_ignored() {
    assert_prints("// nothing\nprint /* inline */ 1;\n/* outer /* inner */ still */ print 2;",
                  "1.000000\n2.000000\n");
}

#[test]
fn reserved_words_are_not_identifiers() {
    assert_failure("var class = 1;");
    assert_failure("print while;");
    assert_success("var classy = 1; print classy;");
}

#[test]
fn empty_program_succeeds() {
    assert_prints("", "");
    assert_prints("  // only a comment\n", "");
}

#[test]
fn error_messages_name_the_line() {
    let (e, _) = output_of("var a = 1;\n\nprint a + b;").unwrap_err();

    assert_eq!(e.line(), 3);
    assert_eq!(e.to_string(), "Error on line 3: Undefined variable 'b'.");
}

#[test]
fn empty_grouping_is_reported_as_expected_expression() {
    let (e, _) = output_of("print 1 + (;").unwrap_err();
    assert_eq!(e.to_string(), "Error on line 1: Expected expression, found ';'.");

    let (e, _) = output_of("print 1 + ;").unwrap_err();
    assert_eq!(e.to_string(),
               "Error on line 1: Missing operand after operator '+', found ';'.");
}
