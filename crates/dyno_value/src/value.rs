use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::mem;

use dyno_utils::hash::{HashMap, canonical_f64_bits};

use crate::ValueKind;

// -----------------------------------------------------------------------------
// Mapping aliases

/// A mapping whose keys are constrained to strings.
///
/// This is the shape JSON objects decode into.
pub type StrMap = HashMap<String, Value>;

/// A mapping whose keys may be any [`Value`].
///
/// This is the shape YAML or RON maps with non-string keys decode into.
pub type AnyMap = HashMap<Value, Value>;

// -----------------------------------------------------------------------------
// Value

/// A value of unconstrained runtime type.
///
/// Composite values own their children, so a tree is owned through its
/// root. Path operations borrow the root and mutate reachable containers in
/// place; they never rebuild the tree.
///
/// # Equality
///
/// Equality is structural. Floats compare by canonical bit pattern, so
/// `-0.0 == 0.0` and `NaN == NaN`, which lets every value be used as an
/// [`AnyMap`] key. Numbers of different kinds are never equal:
///
/// ```
/// use dyno_value::Value;
///
/// assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
/// assert_ne!(Value::Int(3), Value::Float(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<Value>),
    StrMap(StrMap),
    AnyMap(AnyMap),
}

impl Value {
    /// Returns the runtime kind of this value.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Seq(_) => ValueKind::Seq,
            Self::StrMap(_) => ValueKind::StrMap,
            Self::AnyMap(_) => ValueKind::AnyMap,
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if a path element can index into this value.
    #[inline]
    pub const fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Builds a sequence from an iterator of values.
    ///
    /// ```
    /// use dyno_value::Value;
    ///
    /// let fruits = Value::seq(["apple", "banana"]);
    /// assert_eq!(fruits.as_seq().map(<[Value]>::len), Some(2));
    /// ```
    pub fn seq<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a string-keyed mapping from an iterator of entries.
    ///
    /// Later entries overwrite earlier ones with the same key.
    ///
    /// ```
    /// use dyno_value::Value;
    ///
    /// let name = Value::str_map([("first", "Bob"), ("last", "Archer")]);
    /// assert!(name.as_str_map().is_some_and(|m| m.contains_key("first")));
    /// ```
    pub fn str_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::StrMap(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds an arbitrary-keyed mapping from an iterator of entries.
    ///
    /// ```
    /// use dyno_value::Value;
    ///
    /// let by_id = Value::any_map([(3, Value::seq([1, 2]))]);
    /// assert!(by_id.as_any_map().is_some_and(|m| m.contains_key(&Value::Int(3))));
    /// ```
    pub fn any_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::AnyMap(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Seq(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str_map(&self) -> Option<&StrMap> {
        match self {
            Self::StrMap(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_any_map(&self) -> Option<&AnyMap> {
        match self {
            Self::AnyMap(v) => Some(v),
            _ => None,
        }
    }

    /// Replaces this value with [`Value::Null`] and returns the previous one.
    #[inline]
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }
}

// -----------------------------------------------------------------------------
// Eq & Hash

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => canonical_f64_bits(*a) == canonical_f64_bits(*b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::StrMap(a), Self::StrMap(b)) => a == b,
            (Self::AnyMap(a), Self::AnyMap(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::Float(v) => canonical_f64_bits(*v).hash(state),
            Self::String(v) => v.hash(state),
            Self::Seq(v) => v.hash(state),
            // Map iteration order is unspecified, so only the
            // order-independent length takes part.
            Self::StrMap(v) => v.len().hash(state),
            Self::AnyMap(v) => v.len().hash(state),
        }
    }
}
