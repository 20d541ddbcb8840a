//! Persisted invocation snapshots.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::Codec;
use crate::error::Result;
use crate::types::InvocationDescriptor;

/// A named, persisted snapshot of one invocation configuration.
///
/// Created with [`of`](Self::of) when the user saves a configuration,
/// replaced wholesale when the underlying descriptor changes, and destroyed
/// by removal from the [`CacheStore`](crate::CacheStore). The parameter
/// sequences are stored in their codec-encoded textual form so the record
/// serializes as plain strings regardless of how deeply the values nest.
///
/// Equality and hashing are defined solely on `id` — two records with
/// identical visible fields but different ids are distinct entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Stable unique identifier, assigned at creation, immutable after.
    pub id: String,
    /// Human-readable display label. The one mutable field.
    pub name: String,
    /// Qualified interface name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
    /// Method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    /// Service version qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Service group qualifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Codec-encoded parameter type name sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_types_json: Option<String>,
    /// Codec-encoded parameter value sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values_json: Option<String>,
    /// Target endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Creation time, stamped by [`of`](Self::of), immutable after.
    /// Blobs persisted before this field existed load with a fresh stamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CacheRecord {
    /// Snapshot a descriptor under the given identity and display name.
    ///
    /// Scalar fields are copied verbatim; the parameter sequences are
    /// encoded through `codec`. `created_at` is stamped with the current
    /// time at call time — every save produces a fresh timestamp, even
    /// when reusing an existing id.
    pub fn of(
        id: impl Into<String>,
        name: impl Into<String>,
        descriptor: &InvocationDescriptor,
        codec: &Codec,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            interface_name: Some(descriptor.interface_name.clone()),
            method_name: Some(descriptor.method_name.clone()),
            version: descriptor.version.clone(),
            group: descriptor.group.clone(),
            parameter_types_json: Some(codec.encode(&descriptor.parameter_type_names)?),
            parameter_values_json: Some(codec.encode(&descriptor.parameter_values)?),
            address: descriptor.address.clone(),
            created_at: Utc::now(),
        })
    }

    /// Rebuild the invocation descriptor this record snapshots.
    ///
    /// Scalar fields are copied verbatim. An encoded parameter field is
    /// decoded only when present *and* non-blank: a record carrying an
    /// empty-string encoding behaves identically to one with no field at
    /// all, both yielding an empty (not null) sequence.
    pub fn to_descriptor(&self, codec: &Codec) -> Result<InvocationDescriptor> {
        let parameter_type_names: Vec<String> = match self.parameter_types_json.as_deref() {
            Some(text) if !text.trim().is_empty() => codec.decode(text)?,
            _ => Vec::new(),
        };
        let parameter_values: Vec<Value> = match self.parameter_values_json.as_deref() {
            Some(text) if !text.trim().is_empty() => codec.decode(text)?,
            _ => Vec::new(),
        };

        Ok(InvocationDescriptor {
            id: Some(self.id.clone()),
            interface_name: self.interface_name.clone().unwrap_or_default(),
            method_name: self.method_name.clone().unwrap_or_default(),
            version: self.version.clone(),
            group: self.group.clone(),
            parameter_type_names,
            parameter_values,
            address: self.address.clone(),
        })
    }

    /// Change the display label.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for CacheRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CacheRecord {}

impl Hash for CacheRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CacheRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
