/// The runtime value type.
///
/// Defines the `Value` enum produced by evaluation and stored in the
/// environment, along with its truthiness, equality and print formatting
/// rules.
pub mod core;
