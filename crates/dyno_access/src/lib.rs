#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Compilation config

/// Emits a `log::trace!` when the `debug` feature is enabled in Debug mode.
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        #[cfg(all(debug_assertions, feature = "debug"))]
        log::trace!($($arg)*);
    };
}

// -----------------------------------------------------------------------------
// Modules

mod error;
mod ops;
mod path;
mod path_access;
mod typed;
mod walker;

pub mod container;

// -----------------------------------------------------------------------------
// Exports

pub use error::{AccessError, AccessErrorKind};
pub use ops::{append, delete, get, get_mut, set};
pub use path::Path;
pub use path_access::PathAccess;
pub use typed::{FromValue, get_as};
pub use typed::{get_any_map, get_bool, get_float, get_int, get_seq, get_str, get_str_map};
pub use typed::{get_floating, get_integer};
pub use walker::{Terminal, walk, walk_mut, walk_to_terminal};

#[doc(hidden)]
pub mod __macro_exports {
    pub use dyno_value::Value;
}
