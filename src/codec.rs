//! JSON codec with an explicit, immutable configuration.
//!
//! [`Codec`] converts loosely-typed values (parameter arrays, type-name
//! lists, nested object graphs) to and from JSON text for persistence in
//! [`CacheRecord`](crate::CacheRecord). The configuration is a plain value
//! constructed once and passed to callers — there is no process-wide
//! mutable serializer state.
//!
//! Guarantees:
//!
//! - Structure and value are preserved; source-language type identity is
//!   not. Decoding a previously encoded number yields a generically-typed
//!   number (integral vs floating may normalize).
//! - `null` encodes to the literal `null` token and decodes back to a null
//!   value, never an error.
//! - An empty sequence encodes to `[]`, which is distinguishable from the
//!   field being absent altogether.
//! - Map key order is not semantically meaningful. Keys are emitted in
//!   canonical (sorted) order, and [`value_eq`] ignores insertion order.
//! - Fields present in the text but absent from the requested target shape
//!   are silently dropped, so records written by a newer schema still load
//!   in an older one.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{RedialError, Result};

/// Immutable JSON codec configuration.
///
/// ```rust
/// # use redial::Codec;
/// let codec = Codec::new().pretty(true);
/// let text = codec.encode(&vec!["a", "b"]).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Codec {
    /// Emit indented output. Default: off (compact).
    pretty: bool,
    /// Escape all non-ASCII characters as `\uXXXX`. Default: off.
    escape_non_ascii: bool,
}

impl Codec {
    /// Create a codec with the default configuration (compact, UTF-8).
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Toggle `\uXXXX` escaping of non-ASCII characters.
    pub fn escape_non_ascii(mut self, escape: bool) -> Self {
        self.escape_non_ascii = escape;
        self
    }

    /// Encode any serializable value to JSON text.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(RedialError::Encode)?;

        if self.escape_non_ascii {
            Ok(escape_non_ascii(&text))
        } else {
            Ok(text)
        }
    }

    /// Decode JSON text into the requested target shape.
    ///
    /// Unknown fields in the text are ignored. Malformed text fails with
    /// [`RedialError::Decode`]; well-formed text whose structure cannot
    /// fill `T` fails with [`RedialError::ShapeMismatch`].
    pub fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text)
            .map_err(|e| RedialError::from_json(e, std::any::type_name::<T>(), text))
    }

    /// Parse JSON text into a generically-typed [`Value`] tree.
    pub fn parse(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|e| RedialError::Decode {
            source: e,
            text: text.to_string(),
        })
    }

    /// Convert an already-parsed [`Value`] into the requested shape.
    pub fn convert<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        let rendered = value.to_string();
        serde_json::from_value(value)
            .map_err(|e| RedialError::from_json(e, std::any::type_name::<T>(), &rendered))
    }

    /// Convert any serializable value into a [`Value`] tree.
    pub fn to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        serde_json::to_value(value).map_err(RedialError::Encode)
    }
}

/// Structural equality with numeric widening.
///
/// Two values are codec-equal when they have the same structure and the
/// same values, comparing numbers by magnitude rather than representation
/// (integral `3` equals floating `3.0`) and ignoring map key order. This
/// is the equality the round-trip law is stated in: `decode(encode(v))`
/// is codec-equal to `v`, not necessarily `Value`-equal.
pub fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(i), Some(j)) => i == j,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(i), Some(j)) => i == j,
                _ => match (x.as_f64(), y.as_f64()) {
                    (Some(i), Some(j)) => i == j,
                    _ => false,
                },
            },
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(u, v)| value_eq(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| value_eq(v, w)))
        }
        _ => a == b,
    }
}

/// Replace every non-ASCII character with its `\uXXXX` escape.
///
/// Applied as a post-pass over encoded text. Non-ASCII characters can only
/// occur inside JSON string literals, so escaping them wholesale never
/// touches structural tokens. Characters outside the BMP expand to a
/// surrogate pair, matching the JSON spec's escape form.
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
