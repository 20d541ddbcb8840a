//! Invocation-record cache subsystem.
//!
//! Two pieces:
//!
//! - [`CacheRecord`] — the persisted, named snapshot of a previously
//!   configured invocation. Converts to and from
//!   [`InvocationDescriptor`](crate::InvocationDescriptor) through a
//!   [`Codec`](crate::Codec); identity is the stable `id` alone.
//!
//! - [`CacheStore`] — the identity-keyed, insertion-ordered collection of
//!   records. Owns every record's lifetime; descriptors derived from a
//!   record are independent copies. The store is the unit of persistence:
//!   the host serializes it wholesale at plugin-state scope.

pub mod record;
pub mod store;

pub use record::CacheRecord;
pub use store::CacheStore;
