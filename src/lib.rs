#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use dyno_access as access;
pub use dyno_utils as utils;
pub use dyno_value as value;

pub use dyno_access::{AccessError, AccessErrorKind, Path, PathAccess, path};
pub use dyno_access::{FromValue, get_as};
pub use dyno_access::{append, delete, get, get_mut, set};
pub use dyno_access::{get_any_map, get_bool, get_float, get_int, get_seq, get_str, get_str_map};
pub use dyno_access::{get_floating, get_integer};
pub use dyno_value::{AnyMap, StrMap, Value, ValueKind};
