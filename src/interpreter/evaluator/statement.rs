use std::io::Write;

use crate::{
    ast::{Expr, visit::StmtVisitor},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> StmtVisitor for Interpreter<W> {
    type Output = EvalResult<()>;

    /// Evaluates the expression and discards its value.
    fn visit_expression(&mut self, expr: &Expr, _line: usize) -> EvalResult<()> {
        self.evaluate(expr)?;
        Ok(())
    }

    /// Writes the value followed by a newline.
    fn visit_print(&mut self, expr: &Expr, line: usize) -> EvalResult<()> {
        let value = self.evaluate(expr)?;

        writeln!(self.out, "{value}").map_err(|source| RuntimeError::Output { source, line })
    }

    /// Binds `name` to the initializer's value, or to `nil` without one.
    ///
    /// The initializer is evaluated before the binding exists, so it cannot
    /// read a first declaration of the same name.
    fn visit_var_declaration(&mut self,
                             name: &str,
                             initializer: Option<&Expr>,
                             _line: usize)
                             -> EvalResult<()> {
        let value = match initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };
        self.environment.define(name, value);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_source;

    fn run(source: &str) -> (EvalResult<()>, String) {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let result = interpreter.execute_program(&parse_source(source).unwrap());
        let output = String::from_utf8(interpreter.into_output()).unwrap();

        (result, output)
    }

    #[test]
    fn print_writes_one_line_per_statement() {
        let (result, output) = run("print 1; print \"two\"; print nil; print !nil;");

        assert!(result.is_ok());
        assert_eq!(output, "1.000000\n\"two\"\nnil\ntrue\n");
    }

    #[test]
    fn declaration_without_initializer_is_nil() {
        let (_, output) = run("var a; print a;");

        assert_eq!(output, "nil\n");
    }

    #[test]
    fn redeclaration_replaces_value() {
        let (_, output) = run("var a = 1; var a = a + 1; print a;");

        assert_eq!(output, "2.000000\n");
    }

    #[test]
    fn self_referential_first_declaration_fails() {
        let (result, output) = run("var a = a;");

        assert!(matches!(result, Err(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "a"));
        assert_eq!(output, "");
    }

    #[test]
    fn execution_stops_at_first_error() {
        let (result, output) = run("print 1;\nprint -\"x\";\nprint 3;");

        assert_eq!(result.unwrap_err().line(), 2);
        assert_eq!(output, "1.000000\n");
    }

    #[test]
    fn expression_statements_discard_values() {
        let (result, output) = run("1 + 2; \"s\";");

        assert!(result.is_ok());
        assert_eq!(output, "");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_become_runtime_errors() {
        let mut interpreter = Interpreter::with_output(BrokenPipe);
        let error = interpreter.execute_program(&parse_source("\nprint 1;").unwrap())
                               .unwrap_err();

        assert!(matches!(error, RuntimeError::Output { line: 2, .. }));
    }
}
