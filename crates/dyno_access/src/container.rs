//! Classification and single-layer indexing of container values.
//!
//! A [`Value`] is classified once per path element into a [`Container`]
//! (or [`ContainerMut`]). Both mapping variants sit behind the [`Mapping`]
//! trait, so every operation is written once for all mappings.

use alloc::vec::Vec;
use core::mem;

use dyno_value::{AnyMap, StrMap, Value, ValueKind};

use crate::AccessError;

// -----------------------------------------------------------------------------
// Mapping

/// Keyed lookup and storage shared by both mapping variants.
///
/// `pos` is only used for error reporting.
pub trait Mapping {
    /// Looks up `key`, returning `Ok(None)` if it is absent.
    fn lookup(&self, key: &Value, pos: usize) -> Result<Option<&Value>, AccessError>;

    /// Looks up `key` mutably, returning `Ok(None)` if it is absent.
    fn lookup_mut(&mut self, key: &Value, pos: usize) -> Result<Option<&mut Value>, AccessError>;

    /// Inserts or overwrites the entry for `key`, returning the previous value.
    fn store(&mut self, key: &Value, value: Value, pos: usize)
    -> Result<Option<Value>, AccessError>;

    /// Removes the entry for `key`, returning it if it was present.
    fn remove(&mut self, key: &Value, pos: usize) -> Result<Option<Value>, AccessError>;
}

#[inline]
fn key_mismatch(expected: ValueKind, key: &Value, pos: usize) -> AccessError {
    AccessError::KeyTypeMismatch {
        expected,
        actual: key.kind(),
        pos,
    }
}

impl Mapping for StrMap {
    fn lookup(&self, key: &Value, pos: usize) -> Result<Option<&Value>, AccessError> {
        let key = key.as_str().ok_or_else(|| key_mismatch(ValueKind::String, key, pos))?;
        Ok(self.get(key))
    }

    fn lookup_mut(&mut self, key: &Value, pos: usize) -> Result<Option<&mut Value>, AccessError> {
        let key = key.as_str().ok_or_else(|| key_mismatch(ValueKind::String, key, pos))?;
        Ok(self.get_mut(key))
    }

    fn store(
        &mut self,
        key: &Value,
        value: Value,
        pos: usize,
    ) -> Result<Option<Value>, AccessError> {
        let key = key.as_str().ok_or_else(|| key_mismatch(ValueKind::String, key, pos))?;
        match self.get_mut(key) {
            Some(slot) => Ok(Some(mem::replace(slot, value))),
            None => {
                self.insert(key.into(), value);
                Ok(None)
            }
        }
    }

    fn remove(&mut self, key: &Value, pos: usize) -> Result<Option<Value>, AccessError> {
        let key = key.as_str().ok_or_else(|| key_mismatch(ValueKind::String, key, pos))?;
        Ok(StrMap::remove(self, key))
    }
}

impl Mapping for AnyMap {
    #[inline]
    fn lookup(&self, key: &Value, _pos: usize) -> Result<Option<&Value>, AccessError> {
        Ok(self.get(key))
    }

    #[inline]
    fn lookup_mut(&mut self, key: &Value, _pos: usize) -> Result<Option<&mut Value>, AccessError> {
        Ok(self.get_mut(key))
    }

    fn store(
        &mut self,
        key: &Value,
        value: Value,
        _pos: usize,
    ) -> Result<Option<Value>, AccessError> {
        match self.get_mut(key) {
            Some(slot) => Ok(Some(mem::replace(slot, value))),
            None => {
                self.insert(key.clone(), value);
                Ok(None)
            }
        }
    }

    #[inline]
    fn remove(&mut self, key: &Value, _pos: usize) -> Result<Option<Value>, AccessError> {
        Ok(AnyMap::remove(self, key))
    }
}

fn resolve_in<'r, M: Mapping>(map: &'r M, key: &Value, pos: usize) -> Result<&'r Value, AccessError> {
    map.lookup(key, pos)?.ok_or_else(|| AccessError::MissingKey {
        key: key.clone(),
        pos,
    })
}

fn resolve_in_mut<'r, M: Mapping>(
    map: &'r mut M,
    key: &Value,
    pos: usize,
) -> Result<&'r mut Value, AccessError> {
    map.lookup_mut(key, pos)?.ok_or_else(|| AccessError::MissingKey {
        key: key.clone(),
        pos,
    })
}

// -----------------------------------------------------------------------------
// Sequence index

/// Converts `key` into an index below `len`.
///
/// Only [`Value::Int`] is accepted as an index. Negative or too large
/// integers are out of range.
pub fn seq_index(key: &Value, len: usize, pos: usize) -> Result<usize, AccessError> {
    match *key {
        Value::Int(index) => usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(AccessError::IndexOutOfRange { index, pos }),
        ref other => Err(key_mismatch(ValueKind::Int, other, pos)),
    }
}

// -----------------------------------------------------------------------------
// Container

/// A shared view of a value that path elements can index into.
#[derive(Debug, Clone, Copy)]
pub enum Container<'r> {
    StrMap(&'r StrMap),
    AnyMap(&'r AnyMap),
    Seq(&'r [Value]),
}

impl<'r> Container<'r> {
    /// Classifies `value`, returning its kind if it is a scalar.
    ///
    /// ```
    /// use dyno_access::container::Container;
    /// use dyno_value::{Value, ValueKind};
    ///
    /// assert!(Container::of(&Value::seq([1, 2])).is_ok());
    /// assert_eq!(Container::of(&Value::from(1)).unwrap_err(), ValueKind::Int);
    /// ```
    pub fn of(value: &'r Value) -> Result<Self, ValueKind> {
        match value {
            Value::StrMap(map) => Ok(Self::StrMap(map)),
            Value::AnyMap(map) => Ok(Self::AnyMap(map)),
            Value::Seq(items) => Ok(Self::Seq(items)),
            other => Err(other.kind()),
        }
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::StrMap(_) => ValueKind::StrMap,
            Self::AnyMap(_) => ValueKind::AnyMap,
            Self::Seq(_) => ValueKind::Seq,
        }
    }

    /// Resolves one path element against this container.
    pub fn resolve(self, key: &Value, pos: usize) -> Result<&'r Value, AccessError> {
        match self {
            Self::StrMap(map) => resolve_in(map, key, pos),
            Self::AnyMap(map) => resolve_in(map, key, pos),
            Self::Seq(items) => seq_index(key, items.len(), pos).map(|i| &items[i]),
        }
    }
}

// -----------------------------------------------------------------------------
// ContainerMut

/// A mutable view of a value that path elements can index into.
#[derive(Debug)]
pub enum ContainerMut<'r> {
    StrMap(&'r mut StrMap),
    AnyMap(&'r mut AnyMap),
    Seq(&'r mut Vec<Value>),
}

impl<'r> ContainerMut<'r> {
    /// Classifies `value`, returning its kind if it is a scalar.
    pub fn of(value: &'r mut Value) -> Result<Self, ValueKind> {
        match value {
            Value::StrMap(map) => Ok(Self::StrMap(map)),
            Value::AnyMap(map) => Ok(Self::AnyMap(map)),
            Value::Seq(items) => Ok(Self::Seq(items)),
            other => Err(other.kind()),
        }
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::StrMap(_) => ValueKind::StrMap,
            Self::AnyMap(_) => ValueKind::AnyMap,
            Self::Seq(_) => ValueKind::Seq,
        }
    }

    /// Resolves one path element against this container.
    pub fn resolve(self, key: &Value, pos: usize) -> Result<&'r mut Value, AccessError> {
        match self {
            Self::StrMap(map) => resolve_in_mut(map, key, pos),
            Self::AnyMap(map) => resolve_in_mut(map, key, pos),
            Self::Seq(items) => {
                let i = seq_index(key, items.len(), pos)?;
                Ok(&mut items[i])
            }
        }
    }

    /// Writes `value` at `key`.
    ///
    /// Mappings insert or overwrite. Sequences only overwrite an existing
    /// element and never grow.
    pub fn write(self, key: &Value, value: Value, pos: usize) -> Result<(), AccessError> {
        match self {
            Self::StrMap(map) => map.store(key, value, pos).map(drop),
            Self::AnyMap(map) => map.store(key, value, pos).map(drop),
            Self::Seq(items) => {
                let i = seq_index(key, items.len(), pos)?;
                items[i] = value;
                Ok(())
            }
        }
    }

    /// Removes the entry at `key`.
    ///
    /// An absent mapping key is not an error. A sequence element is removed
    /// by shifting the following elements down.
    pub fn remove(self, key: &Value, pos: usize) -> Result<Option<Value>, AccessError> {
        match self {
            Self::StrMap(map) => Mapping::remove(map, key, pos),
            Self::AnyMap(map) => Mapping::remove(map, key, pos),
            Self::Seq(items) => {
                let i = seq_index(key, items.len(), pos)?;
                Ok(Some(items.remove(i)))
            }
        }
    }
}
