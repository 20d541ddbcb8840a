//! The in-memory description of one RPC call to make.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheRecord;
use crate::error::{RedialError, Result};
use crate::types::MethodSignature;

/// A fully-typed description of one Dubbo invocation.
///
/// Transient — rebuilt per invocation, either from raw signature data
/// ([`from_signature`](Self::from_signature)) or from a saved
/// [`CacheRecord`](crate::CacheRecord). Descriptors derived from a record
/// are independent copies with no back-reference into the store.
///
/// Invariant: `parameter_type_names` and `parameter_values` have the same
/// length and order. [`with_parameters`](Self::with_parameters) enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationDescriptor {
    /// Id of the cache entry this descriptor came from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Qualified interface name, e.g. `com.acme.FooService`.
    pub interface_name: String,
    /// Method name within the interface.
    pub method_name: String,
    /// Service version qualifier. `None` means unspecified, not `""`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Service group qualifier. `None` means unspecified, not `""`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Canonical parameter type names, positionally matching the values.
    pub parameter_type_names: Vec<String>,
    /// Parameter values: primitives, strings, or nested maps/sequences.
    pub parameter_values: Vec<Value>,
    /// Target endpoint (`host:port` or a registry URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl InvocationDescriptor {
    /// Create a descriptor for a parameterless method.
    pub fn new(interface_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            method_name: method_name.into(),
            ..Self::default()
        }
    }

    /// Set the parameter sequences.
    ///
    /// Fails with [`RedialError::InvalidInput`] when the two sequences
    /// differ in length.
    pub fn with_parameters(mut self, type_names: Vec<String>, values: Vec<Value>) -> Result<Self> {
        if type_names.len() != values.len() {
            return Err(RedialError::InvalidInput(format!(
                "{} parameter type names but {} parameter values",
                type_names.len(),
                values.len()
            )));
        }
        self.parameter_type_names = type_names;
        self.parameter_values = values;
        Ok(self)
    }

    /// Set the originating cache entry id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the service version qualifier.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the service group qualifier.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the target endpoint.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Assemble a descriptor from raw signature data, applying the
    /// connection defaults (address, version, group, entry id) from a saved
    /// record when one is available.
    ///
    /// `defaults` is typically [`CacheStore::default_record`](crate::CacheStore::default_record);
    /// on an empty store it is `None` and those fields stay unset.
    pub fn from_signature(signature: MethodSignature, defaults: Option<&CacheRecord>) -> Self {
        let MethodSignature {
            interface_name,
            method_name,
            parameter_type_names,
            parameter_values,
        } = signature;

        let mut descriptor = Self {
            interface_name,
            method_name,
            parameter_type_names,
            parameter_values,
            ..Self::default()
        };

        if let Some(record) = defaults {
            descriptor.id = Some(record.id.clone());
            descriptor.version = record.version.clone();
            descriptor.group = record.group.clone();
            descriptor.address = record.address.clone();
        }

        descriptor
    }
}
