//! Redial - saved-invocation cache for Dubbo RPC test calls
//!
//! This crate is the host-independent core of a "call this RPC method from
//! the editor" workflow: it models one invocation as a typed descriptor,
//! snapshots descriptors into named, persisted cache records, and keeps the
//! records in an identity-keyed, insertion-ordered store. A deterministic
//! JSON [`Codec`] handles the encoded parameter payloads.
//!
//! Source analysis (finding a method and its parameter defaults) and UI
//! (rendering the invocation form) belong to the host; they talk to this
//! core through [`MethodSignature`] and [`InvocationDescriptor`].
//!
//! # Example
//!
//! ```rust
//! use redial::{CacheRecord, CacheStore, Codec, InvocationDescriptor, MethodSignature};
//! use serde_json::json;
//!
//! fn main() -> redial::Result<()> {
//!     let codec = Codec::new();
//!     let store = CacheStore::new();
//!
//!     // Raw signature data arrives from the host's source analyzer.
//!     let signature = MethodSignature::new("com.acme.FooService", "bar")
//!         .parameter("java.lang.String", json!("hi"))
//!         .parameter("java.lang.Integer", json!(3));
//!
//!     // Assemble a descriptor, applying saved defaults when any exist.
//!     let descriptor =
//!         InvocationDescriptor::from_signature(signature, store.default_record().as_ref());
//!
//!     // Save it under a user-chosen name, then load it back later.
//!     store.add(CacheRecord::of("id1", "My Call", &descriptor, &codec)?)?;
//!     let reloaded = store.get("id1").unwrap().to_descriptor(&codec)?;
//!     assert_eq!(reloaded.parameter_values, vec![json!("hi"), json!(3)]);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod codec;
pub mod error;
pub mod types;

// Re-export main types at crate root
pub use cache::{CacheRecord, CacheStore};
pub use codec::{Codec, value_eq};
pub use error::{RedialError, Result};
pub use types::{InvocationDescriptor, MethodSignature, canonical_type_name};
