/// Numeric helpers.
///
/// This module holds the numeric rules that more than one phase depends on:
/// the fixed-point rendering used by `print` and the AST printers, and the
/// tolerance used when comparing numbers for equality.
pub mod num;
