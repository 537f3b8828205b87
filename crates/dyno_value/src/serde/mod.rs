//! serde bridging for [`Value`](crate::Value).
//!
//! Encoding and decoding stay with the format crate. These impls only let
//! any self-describing format produce or consume a dynamic tree.
//!
//! # Decoding Rules
//!
//! - A map becomes a [`Value::StrMap`] when every key is a string,
//!   otherwise a [`Value::AnyMap`].
//! - Unsigned integers above `i64::MAX` become [`Value::Float`].
//! - Unit and `None` become [`Value::Null`]; `Some(v)` becomes `v`.
//!
//! # Encoding Rules
//!
//! String-keyed maps are written in key order. Arbitrary-keyed maps are
//! written in iteration order with their keys serialized as values, so a
//! format that only accepts string keys may reject them; see
//! [`Value::stringify_keys`].
//!
//! [`Value::StrMap`]: crate::Value::StrMap
//! [`Value::AnyMap`]: crate::Value::AnyMap
//! [`Value::Float`]: crate::Value::Float
//! [`Value::Null`]: crate::Value::Null
//! [`Value::stringify_keys`]: crate::Value::stringify_keys

mod de;
mod ser;
