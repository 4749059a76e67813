pub mod no_unused_expressions;

/// Namespace under which the rules of this crate are registered.
pub const NAMESPACE: &str = "chai-friendly";
