#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod display;
mod keys;
mod kind;
mod serde;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ValueKind;
pub use value::{AnyMap, StrMap, Value};
