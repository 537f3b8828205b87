use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{StrMap, Value};

// -----------------------------------------------------------------------------
// Display

/// Scalars print bare, so a top-level string prints without quotes.
/// Containers print JSON-like, with nested strings quoted and
/// string-keyed entries sorted by key.
///
/// ```
/// use dyno_value::Value;
///
/// assert_eq!(Value::from("two").to_string(), "two");
/// assert_eq!(Value::seq([Value::from(1), "two".into(), 3.3.into()]).to_string(), r#"[1, "two", 3.3]"#);
/// assert_eq!(Value::str_map([("b", 2), ("a", 1)]).to_string(), r#"{"a": 1, "b": 2}"#);
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.write_str(v),
            other => fmt::Display::fmt(&Nested(other), f),
        }
    }
}

struct Nested<'a>(&'a Value);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::String(v) => fmt::Debug::fmt(v.as_str(), f),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(&Nested(item), f)?;
                }
                f.write_str("]")
            }
            Value::StrMap(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in sorted_entries(map).into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key.as_str(), Nested(value))?;
                }
                f.write_str("}")
            }
            Value::AnyMap(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", Nested(key), Nested(value))?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Entries of a string-keyed map in key order.
pub(crate) fn sorted_entries(map: &StrMap) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::Value;

    #[test]
    fn scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-4).to_string(), "-4");
        assert_eq!(Value::from("x").to_string(), "x");
    }

    #[test]
    fn nested() {
        let v = Value::str_map([
            ("name", Value::str_map([("first", "Bob")])),
            ("fruits", Value::seq(["apple", "banana"])),
            ("age", Value::from(22)),
        ]);
        assert_eq!(
            v.to_string(),
            r#"{"age": 22, "fruits": ["apple", "banana"], "name": {"first": "Bob"}}"#
        );
    }

    #[test]
    fn any_map_keys() {
        let v = Value::any_map([(3, Value::seq([Value::Null]))]);
        assert_eq!(v.to_string(), "{3: [null]}");
    }
}
