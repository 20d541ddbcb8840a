//! Public types for the redial API.

mod descriptor;
mod signature;

pub use descriptor::InvocationDescriptor;
pub use signature::{MethodSignature, canonical_type_name};
