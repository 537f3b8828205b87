//! The path operations: get, set, append and delete.

use dyno_value::Value;

use crate::AccessError;
use crate::walker::{walk, walk_mut, walk_to_terminal};

/// Returns the value denoted by `path`.
///
/// An empty path returns `root`. No side effects.
///
/// # Examples
///
/// ```
/// use dyno_access::{get, path};
/// use dyno_value::Value;
///
/// let person = Value::str_map([("name", Value::str_map([("first", "Bob")]))]);
/// assert_eq!(get(&person, &path!["name", "first"]), Ok(&Value::from("Bob")));
/// ```
pub fn get<'r>(root: &'r Value, path: &[Value]) -> Result<&'r Value, AccessError> {
    walk(root, path).inspect_err(|_err| {
        debug_trace!("get {}: {_err}", crate::Path::display(path));
    })
}

/// Returns a mutable reference to the value denoted by `path`.
///
/// ```
/// use dyno_access::{get_mut, path};
/// use dyno_value::Value;
///
/// let mut v = Value::str_map([("age", 22)]);
/// if let Value::Int(age) = get_mut(&mut v, &path!["age"]).unwrap() {
///     *age += 1;
/// }
/// assert_eq!(v, Value::str_map([("age", 23)]));
/// ```
pub fn get_mut<'r>(root: &'r mut Value, path: &[Value]) -> Result<&'r mut Value, AccessError> {
    walk_mut(root, path).inspect_err(|_err| {
        debug_trace!("get_mut {}: {_err}", crate::Path::display(path));
    })
}

/// Stores `value` at the position denoted by `path`.
///
/// Every element but the last must resolve to an existing container. If the
/// last element indexes a mapping the entry is inserted or overwritten. If
/// it indexes a sequence it must be in bounds: set never grows a sequence,
/// use [`append`] for that.
///
/// The stored value replaces whatever was there, so a nested mapping can be
/// replaced by a scalar and vice versa.
///
/// # Examples
///
/// ```
/// use dyno_access::{AccessError, set, path};
/// use dyno_value::Value;
///
/// let mut m = Value::str_map([("a", Value::seq([1, 2, 3]))]);
///
/// assert_eq!(set(&mut m, 10, &path!["a", 0]), Ok(()));
/// assert_eq!(set(&mut m, "x", &path!["b"]), Ok(()));
/// assert_eq!(
///     set(&mut m, "x", &path!["a", 3]),
///     Err(AccessError::IndexOutOfRange { index: 3, pos: 1 }),
/// );
/// ```
pub fn set(root: &mut Value, value: impl Into<Value>, path: &[Value]) -> Result<(), AccessError> {
    walk_to_terminal(root, path)
        .and_then(|t| t.container.write(t.key, value.into(), t.pos))
        .inspect_err(|_err| {
            debug_trace!("set {}: {_err}", crate::Path::display(path));
        })
}

/// Appends `value` to the sequence denoted by `path`.
///
/// Every element of `path`, including the last, must resolve to an existing
/// value, and that value must be a sequence. The sequence is never created.
///
/// # Examples
///
/// ```
/// use dyno_access::{AccessError, append, path};
/// use dyno_value::Value;
///
/// let mut m = Value::str_map([("a", Value::seq([1, 2, 3]))]);
///
/// append(&mut m, "x", &path!["a"]).unwrap();
/// assert_eq!(
///     m,
///     Value::str_map([("a", Value::seq([Value::from(1), 2.into(), 3.into(), "x".into()]))]),
/// );
///
/// assert_eq!(
///     append(&mut m, 1, &path!["x"]),
///     Err(AccessError::MissingKey { key: Value::from("x"), pos: 0 }),
/// );
/// ```
pub fn append(
    root: &mut Value,
    value: impl Into<Value>,
    path: &[Value],
) -> Result<(), AccessError> {
    let Some(last) = path.len().checked_sub(1) else {
        return Err(AccessError::EmptyPath);
    };

    walk_mut(root, path)
        .and_then(|target| match target {
            Value::Seq(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(AccessError::NotASequence {
                actual: other.kind(),
                pos: last,
            }),
        })
        .inspect_err(|_err| {
            debug_trace!("append {}: {_err}", crate::Path::display(path));
        })
}

/// Removes the entry denoted by `path`, returning it.
///
/// For a mapping, an absent last key is not an error and yields `Ok(None)`.
/// For a sequence, the index must be in bounds and the following elements
/// shift down by one.
///
/// # Examples
///
/// ```
/// use dyno_access::{delete, path};
/// use dyno_value::Value;
///
/// let mut m = Value::str_map([("fruits", Value::seq(["apple", "lemon", "melon"]))]);
///
/// assert_eq!(delete(&mut m, &path!["fruits", 1]), Ok(Some(Value::from("lemon"))));
/// assert_eq!(delete(&mut m, &path!["missing"]), Ok(None));
/// assert_eq!(m, Value::str_map([("fruits", Value::seq(["apple", "melon"]))]));
/// ```
pub fn delete(root: &mut Value, path: &[Value]) -> Result<Option<Value>, AccessError> {
    walk_to_terminal(root, path)
        .and_then(|t| t.container.remove(t.key, t.pos))
        .inspect_err(|_err| {
            debug_trace!("delete {}: {_err}", crate::Path::display(path));
        })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use dyno_value::{Value, ValueKind};

    use super::{append, delete, get, set};
    use crate::{AccessError, path};

    fn person() -> Value {
        Value::str_map([
            ("name", Value::str_map([("first", "Bob"), ("last", "Archer")])),
            ("age", Value::from(22)),
            ("fruits", Value::seq(["apple", "banana"])),
        ])
    }

    #[test]
    fn get_across_map_variants() {
        let m = Value::str_map([
            ("a", Value::from(1)),
            (
                "b",
                Value::any_map([(3, Value::seq([Value::from(1), "two".into(), 3.3.into()]))]),
            ),
        ]);

        assert_eq!(get(&m, &path!["a"]), Ok(&Value::from(1)));
        assert_eq!(get(&m, &path!["b", 3, 1]), Ok(&Value::from("two")));
        assert_eq!(
            get(&m, &path!["x"]),
            Err(AccessError::MissingKey {
                key: Value::from("x"),
                pos: 0,
            })
        );

        let sl = get(&m, &path!["b", 3]).unwrap();
        assert_eq!(
            get(sl, &path![4]),
            Err(AccessError::IndexOutOfRange { index: 4, pos: 0 })
        );
    }

    #[test]
    fn get_is_idempotent() {
        let m = person();
        let first = get(&m, &path!["fruits", 1]).cloned();
        let second = get(&m, &path!["fruits", 1]).cloned();
        assert_eq!(first, second);
        assert_eq!(m, person());
    }

    #[test]
    fn get_with_wrong_key_kinds() {
        let m = person();
        assert_eq!(
            get(&m, &path![0]),
            Err(AccessError::KeyTypeMismatch {
                expected: ValueKind::String,
                actual: ValueKind::Int,
                pos: 0,
            })
        );
        assert_eq!(
            get(&m, &path!["fruits", "0"]),
            Err(AccessError::KeyTypeMismatch {
                expected: ValueKind::Int,
                actual: ValueKind::String,
                pos: 1,
            })
        );
    }

    #[test]
    fn set_then_get() {
        let mut m = person();
        for (path, value) in [
            (Vec::from(path!["name", "first"]), Value::from("Alice")),
            (Vec::from(path!["age"]), Value::from(23)),
            (Vec::from(path!["fruits", 1]), Value::from("lemon")),
            (Vec::from(path!["name", "middle"]), Value::Null),
        ] {
            set(&mut m, value.clone(), &path).unwrap();
            assert_eq!(get(&m, &path), Ok(&value));
        }
    }

    #[test]
    fn set_on_any_map() {
        let mut m = Value::str_map([("b", Value::any_map([(3, Value::seq([1]))]))]);
        set(&mut m, "new", &path!["b", true]).unwrap();
        set(&mut m, "one", &path!["b", 3, 0]).unwrap();

        assert_eq!(get(&m, &path!["b", true]), Ok(&Value::from("new")));
        assert_eq!(get(&m, &path!["b", 3]), Ok(&Value::seq(["one"])));
    }

    #[test]
    fn set_cannot_grow_a_sequence() {
        let mut m = Value::str_map([("a", Value::seq([1, 2, 3]))]);
        assert_eq!(
            set(&mut m, "x", &path!["a", 4]),
            Err(AccessError::IndexOutOfRange { index: 4, pos: 1 })
        );
        assert_eq!(
            set(&mut m, "x", &path!["a", 3]),
            Err(AccessError::IndexOutOfRange { index: 3, pos: 1 })
        );
        assert_eq!(m, Value::str_map([("a", Value::seq([1, 2, 3]))]));
    }

    #[test]
    fn set_replaces_composite_with_scalar() {
        let mut m = Value::str_map([("name", Value::str_map([("first", "Bob")]))]);
        set(&mut m, "Bob Archer", &path!["name"]).unwrap();

        assert_eq!(m, Value::str_map([("name", "Bob Archer")]));
        assert_eq!(
            get(&m, &path!["name", "first"]),
            Err(AccessError::NotIndexable {
                actual: ValueKind::String,
                pos: 1,
            })
        );
    }

    #[test]
    fn set_never_creates_intermediate_containers() {
        let mut m = person();
        assert_eq!(
            set(&mut m, 1, &path!["address", "city"]),
            Err(AccessError::MissingKey {
                key: Value::from("address"),
                pos: 0,
            })
        );
        assert_eq!(m, person());
    }

    #[test]
    fn empty_paths() {
        let mut m = person();
        assert_eq!(get(&m, &[]), Ok(&person()));
        assert_eq!(set(&mut m, 1, &[]), Err(AccessError::EmptyPath));
        assert_eq!(append(&mut m, 1, &[]), Err(AccessError::EmptyPath));
        assert_eq!(delete(&mut m, &[]), Err(AccessError::EmptyPath));
    }

    #[test]
    fn append_in_order() {
        let mut m = Value::str_map([(
            "a",
            Value::seq([Value::from("3"), 2.into(), Value::seq([Value::from(1), "two".into(), 3.3.into()])]),
        )]);

        append(&mut m, 4, &path!["a"]).unwrap();
        append(&mut m, 9, &path!["a", 2]).unwrap();

        let a = get(&m, &path!["a"]).unwrap().as_seq().unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a[3], Value::from(4));
        assert_eq!(get(&m, &path!["a", 2, 3]), Ok(&Value::from(9)));

        let before = m.clone();
        assert_eq!(
            append(&mut m, 1, &path!["x"]),
            Err(AccessError::MissingKey {
                key: Value::from("x"),
                pos: 0,
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn append_n_values() {
        let mut m = person();
        for (i, fruit) in ["melon", "kiwi", "plum"].into_iter().enumerate() {
            append(&mut m, fruit, &path!["fruits"]).unwrap();
            assert_eq!(get(&m, &path!["fruits", 2 + i]), Ok(&Value::from(fruit)));
        }
        assert_eq!(get(&m, &path!["fruits"]).unwrap().as_seq().map(<[Value]>::len), Some(5));
    }

    #[test]
    fn append_needs_a_sequence() {
        let mut m = person();
        assert_eq!(
            append(&mut m, 1, &path!["name", "first"]),
            Err(AccessError::NotASequence {
                actual: ValueKind::String,
                pos: 1,
            })
        );
    }

    #[test]
    fn delete_entries() {
        let mut m = person();
        assert_eq!(delete(&mut m, &path!["age"]), Ok(Some(Value::from(22))));
        assert_eq!(delete(&mut m, &path!["age"]), Ok(None));
        assert_eq!(
            delete(&mut m, &path!["fruits", 2]),
            Err(AccessError::IndexOutOfRange { index: 2, pos: 1 })
        );
        assert_eq!(delete(&mut m, &path!["fruits", 0]), Ok(Some(Value::from("apple"))));
        assert_eq!(get(&m, &path!["fruits"]), Ok(&Value::seq(["banana"])));
    }
}
