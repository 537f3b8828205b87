//! Typed accessors: get a value by path, then convert it.
//!
//! The strict accessors ([`get_as`] and its named wrappers) only accept a
//! value of exactly the requested kind. [`get_integer`] and
//! [`get_floating`] also convert between numbers and from numeric strings.
//! None of them modify the tree.

use dyno_value::{AnyMap, StrMap, Value, ValueKind};

use crate::{AccessError, get};

// -----------------------------------------------------------------------------
// FromValue

/// Conversion from a borrowed [`Value`] of one specific kind.
pub trait FromValue<'r>: Sized {
    /// The kind reported in [`AccessError::TypeMismatch`].
    const EXPECTED: ValueKind;

    /// Returns `None` if `value` is not of kind [`Self::EXPECTED`].
    fn from_value(value: &'r Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    (<$lt:lifetime> $ty:ty, $kind:ident, $as:ident) => {
        impl<$lt> FromValue<$lt> for $ty {
            const EXPECTED: ValueKind = ValueKind::$kind;

            #[inline]
            fn from_value(value: &$lt Value) -> Option<Self> {
                value.$as()
            }
        }
    };
}

impl_from_value!(<'r> bool, Bool, as_bool);
impl_from_value!(<'r> i64, Int, as_i64);
impl_from_value!(<'r> f64, Float, as_f64);
impl_from_value!(<'r> &'r str, String, as_str);
impl_from_value!(<'r> &'r [Value], Seq, as_seq);
impl_from_value!(<'r> &'r StrMap, StrMap, as_str_map);
impl_from_value!(<'r> &'r AnyMap, AnyMap, as_any_map);

#[inline]
fn mismatch(expected: ValueKind, value: &Value) -> AccessError {
    AccessError::TypeMismatch {
        expected,
        actual: value.kind(),
    }
}

/// Returns the value denoted by `path`, converted into `T`.
///
/// # Examples
///
/// ```
/// use dyno_access::{AccessError, get_as, path};
/// use dyno_value::{Value, ValueKind};
///
/// let person = Value::str_map([("age", 22)]);
///
/// assert_eq!(get_as::<i64>(&person, &path!["age"]), Ok(22));
/// assert_eq!(
///     get_as::<&str>(&person, &path!["age"]),
///     Err(AccessError::TypeMismatch { expected: ValueKind::String, actual: ValueKind::Int }),
/// );
/// ```
pub fn get_as<'r, T: FromValue<'r>>(root: &'r Value, path: &[Value]) -> Result<T, AccessError> {
    let value = get(root, path)?;
    T::from_value(value).ok_or_else(|| mismatch(T::EXPECTED, value))
}

// -----------------------------------------------------------------------------
// Strict wrappers

#[inline]
pub fn get_bool(root: &Value, path: &[Value]) -> Result<bool, AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_int(root: &Value, path: &[Value]) -> Result<i64, AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_float(root: &Value, path: &[Value]) -> Result<f64, AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_str<'r>(root: &'r Value, path: &[Value]) -> Result<&'r str, AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_seq<'r>(root: &'r Value, path: &[Value]) -> Result<&'r [Value], AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_str_map<'r>(root: &'r Value, path: &[Value]) -> Result<&'r StrMap, AccessError> {
    get_as(root, path)
}

#[inline]
pub fn get_any_map<'r>(root: &'r Value, path: &[Value]) -> Result<&'r AnyMap, AccessError> {
    get_as(root, path)
}

// -----------------------------------------------------------------------------
// Lenient wrappers

/// Returns the value denoted by `path` as an integer.
///
/// Accepts an int, a float with no fractional part that fits into `i64`,
/// and a string that parses as `i64`.
///
/// ```
/// use dyno_access::{get_integer, path};
/// use dyno_value::Value;
///
/// let v = Value::seq([Value::from(3), 4.0.into(), "5".into(), 4.5.into()]);
///
/// assert_eq!(get_integer(&v, &path![0]), Ok(3));
/// assert_eq!(get_integer(&v, &path![1]), Ok(4));
/// assert_eq!(get_integer(&v, &path![2]), Ok(5));
/// assert!(get_integer(&v, &path![3]).is_err());
/// ```
pub fn get_integer(root: &Value, path: &[Value]) -> Result<i64, AccessError> {
    // Exclusive upper bound: `i64::MAX` itself is not representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let value = get(root, path)?;
    match *value {
        Value::Int(v) => Some(v),
        Value::Float(v) if (-LIMIT..LIMIT).contains(&v) && v == (v as i64) as f64 => {
            Some(v as i64)
        }
        Value::String(ref v) => v.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| mismatch(ValueKind::Int, value))
}

/// Returns the value denoted by `path` as a float.
///
/// Accepts a float, an int, and a string that parses as `f64`.
///
/// ```
/// use dyno_access::{get_floating, path};
/// use dyno_value::Value;
///
/// let v = Value::seq([Value::from(1.5), 2.into(), "2.5".into(), true.into()]);
///
/// assert_eq!(get_floating(&v, &path![0]), Ok(1.5));
/// assert_eq!(get_floating(&v, &path![1]), Ok(2.0));
/// assert_eq!(get_floating(&v, &path![2]), Ok(2.5));
/// assert!(get_floating(&v, &path![3]).is_err());
/// ```
pub fn get_floating(root: &Value, path: &[Value]) -> Result<f64, AccessError> {
    let value = get(root, path)?;
    match *value {
        Value::Float(v) => Some(v),
        Value::Int(v) => Some(v as f64),
        Value::String(ref v) => v.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| mismatch(ValueKind::Float, value))
}

#[cfg(test)]
mod tests {
    use dyno_value::{Value, ValueKind};

    use super::*;
    use crate::path;

    fn person() -> Value {
        Value::str_map([
            ("name", Value::str_map([("first", "Bob")])),
            ("age", Value::from(22)),
            ("height", Value::from(1.8)),
            ("member", Value::from(true)),
            ("fruits", Value::seq(["apple", "banana"])),
            ("tags", Value::any_map([(1, "one")])),
        ])
    }

    #[test]
    fn strict_accessors() {
        let p = person();
        assert_eq!(get_int(&p, &path!["age"]), Ok(22));
        assert_eq!(get_float(&p, &path!["height"]), Ok(1.8));
        assert_eq!(get_bool(&p, &path!["member"]), Ok(true));
        assert_eq!(get_str(&p, &path!["name", "first"]), Ok("Bob"));
        assert_eq!(get_seq(&p, &path!["fruits"]).map(<[Value]>::len), Ok(2));
        assert!(get_str_map(&p, &path!["name"]).is_ok_and(|m| m.contains_key("first")));
        assert!(get_any_map(&p, &path!["tags"]).is_ok_and(|m| m.contains_key(&Value::Int(1))));
    }

    #[test]
    fn mismatch_leaves_tree_untouched() {
        let p = person();
        assert_eq!(
            get_int(&p, &path!["height"]),
            Err(AccessError::TypeMismatch {
                expected: ValueKind::Int,
                actual: ValueKind::Float,
            })
        );
        assert_eq!(
            get_seq(&p, &path!["tags"]),
            Err(AccessError::TypeMismatch {
                expected: ValueKind::Seq,
                actual: ValueKind::AnyMap,
            })
        );
        assert_eq!(p, person());
    }

    #[test]
    fn traversal_errors_pass_through() {
        let p = person();
        assert_eq!(
            get_str(&p, &path!["name", "last"]),
            Err(AccessError::MissingKey {
                key: Value::from("last"),
                pos: 1,
            })
        );
    }

    #[test]
    fn lenient_integer_bounds() {
        let v = Value::seq([Value::from(9.3e18), Value::from(-9.3e18), " 42 ".into(), Value::Null]);
        assert!(get_integer(&v, &path![0]).is_err());
        assert!(get_integer(&v, &path![1]).is_err());
        assert_eq!(get_integer(&v, &path![2]), Ok(42));
        assert_eq!(
            get_integer(&v, &path![3]),
            Err(AccessError::TypeMismatch {
                expected: ValueKind::Int,
                actual: ValueKind::Null,
            })
        );
    }
}
