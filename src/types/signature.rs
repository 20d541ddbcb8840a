//! Raw method signature data, as supplied by a source-analysis collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw signature of one invokable method.
///
/// This is the intake contract for the host's source analyzer: it inspects
/// a method at the cursor and reports the qualified interface name, the
/// method name, and the parameter list (canonical type names paired with
/// default values inferred from documentation comments, or type-appropriate
/// zero-values). Parameters are appended pairwise via [`parameter`](Self::parameter),
/// so the two sequences always stay the same length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Qualified interface name, e.g. `com.acme.FooService`.
    pub interface_name: String,
    /// Method name within the interface.
    pub method_name: String,
    /// Canonical parameter type names, in declaration order.
    pub parameter_type_names: Vec<String>,
    /// Default parameter values, positionally matching the type names.
    pub parameter_values: Vec<Value>,
}

impl MethodSignature {
    /// Create a signature with no parameters.
    pub fn new(interface_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            method_name: method_name.into(),
            parameter_type_names: Vec::new(),
            parameter_values: Vec::new(),
        }
    }

    /// Append one parameter. The type name is canonicalized (generic
    /// argument lists stripped) before storage.
    pub fn parameter(mut self, type_name: &str, value: Value) -> Self {
        self.parameter_type_names
            .push(canonical_type_name(type_name));
        self.parameter_values.push(value);
        self
    }
}

/// Normalize a qualified type name to its canonical, wrapper-stripped form.
///
/// Strips a generic argument list and surrounding whitespace, leaving the
/// raw (erased) type. Array suffixes are preserved. Stable across
/// encode/decode cycles.
///
/// ```rust
/// # use redial::canonical_type_name;
/// assert_eq!(
///     canonical_type_name("java.util.List<java.lang.String>"),
///     "java.util.List",
/// );
/// assert_eq!(canonical_type_name(" java.lang.String[] "), "java.lang.String[]");
/// ```
pub fn canonical_type_name(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.find('<') {
        Some(idx) => {
            // Re-attach an array suffix written after the generic args,
            // e.g. `java.util.List<java.lang.String>[]`.
            let suffix = trimmed.rfind('>').map_or("", |end| trimmed[end + 1..].trim());
            let mut base = trimmed[..idx].trim_end().to_string();
            base.push_str(suffix);
            base
        }
        None => trimmed.to_string(),
    }
}
