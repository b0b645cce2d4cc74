/// The runtime value type.
///
/// Defines `Value`, the tagged union of an integer result or a runtime error
/// kind, and its textual form.
pub mod core;
