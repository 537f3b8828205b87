use alloc::string::{String, ToString};

use dyno_utils::hash::HashMap;
use dyno_utils::hash::hashbrown::hash_map::Entry;

use crate::{Value, ValueKind};

/// Lower wins a key collision: string keys first, then rendered keys in
/// [`ValueKind`] declaration order.
#[inline]
fn precedence(kind: ValueKind) -> u8 {
    match kind {
        ValueKind::String => 0,
        other => other as u8 + 1,
    }
}

impl Value {
    /// Recursively replaces every arbitrary-keyed mapping with a
    /// string-keyed one.
    ///
    /// Keys are rendered through `Display`, so `3` becomes `"3"` and a
    /// string key is kept as is. Formats such as JSON only accept string
    /// keys, which makes this the usual step between decoding YAML and
    /// encoding JSON.
    ///
    /// When two keys render to the same string only one entry survives and
    /// a warning is logged. A key that already was a string wins over a
    /// rendered one, so `{1: "int", "1": "string"}` becomes `{"1": "string"}`.
    /// Between rendered keys the lower [`ValueKind`] wins, e.g. `Int(1)`
    /// over `Float(1.0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyno_value::Value;
    ///
    /// let mut v = Value::str_map([("b", Value::any_map([(3, "three")]))]);
    /// v.stringify_keys();
    ///
    /// assert_eq!(v, Value::str_map([("b", Value::str_map([("3", "three")]))]));
    /// ```
    pub fn stringify_keys(&mut self) {
        match self {
            Self::Seq(items) => items.iter_mut().for_each(Value::stringify_keys),
            Self::StrMap(map) => map.values_mut().for_each(Value::stringify_keys),
            Self::AnyMap(map) => {
                let mut ranked: HashMap<String, (u8, Value)> =
                    HashMap::with_capacity_and_hasher(map.len(), Default::default());
                for (key, mut value) in map.drain() {
                    value.stringify_keys();
                    let rank = precedence(key.kind());
                    let key = match key {
                        Value::String(key) => key,
                        other => other.to_string(),
                    };
                    match ranked.entry(key) {
                        Entry::Vacant(slot) => {
                            slot.insert((rank, value));
                        }
                        Entry::Occupied(mut slot) => {
                            log::warn!(
                                "stringify_keys: key `{}` occurs more than once, keeping one entry",
                                slot.key()
                            );
                            if rank < slot.get().0 {
                                slot.insert((rank, value));
                            }
                        }
                    }
                }
                *self = Self::StrMap(ranked.into_iter().map(|(k, (_, v))| (k, v)).collect());
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Value, ValueKind};

    #[test]
    fn nested_in_sequences() {
        let mut v = Value::seq([Value::any_map([(true, Value::any_map([(1.5, 1)]))])]);
        v.stringify_keys();

        let expected = Value::seq([Value::str_map([(
            "true",
            Value::str_map([("1.5", 1)]),
        )])]);
        assert_eq!(v, expected);
    }

    #[test]
    fn string_key_wins_a_collision() {
        let expected = Value::str_map([("1", "string")]);

        let mut v = Value::any_map([(Value::Int(1), "int"), (Value::from("1"), "string")]);
        v.stringify_keys();
        assert_eq!(v.kind(), ValueKind::StrMap);
        assert_eq!(v, expected);

        let mut v = Value::any_map([(Value::from("1"), "string"), (Value::Int(1), "int")]);
        v.stringify_keys();
        assert_eq!(v, expected);
    }

    #[test]
    fn lower_kind_wins_between_rendered_keys() {
        let mut v = Value::any_map([(Value::Float(1.0), "float"), (Value::Int(1), "int")]);
        v.stringify_keys();
        assert_eq!(v, Value::str_map([("1", "int")]));

        let mut v = Value::any_map([(Value::Int(1), "int"), (Value::Float(1.0), "float")]);
        v.stringify_keys();
        assert_eq!(v, Value::str_map([("1", "int")]));
    }

    #[test]
    fn scalars_untouched() {
        let mut v = Value::from("x");
        v.stringify_keys();
        assert_eq!(v, Value::from("x"));
    }
}
