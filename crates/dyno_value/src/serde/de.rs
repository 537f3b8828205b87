use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::{MapAccess, SeqAccess, Visitor};
use serde_core::{Deserialize, Deserializer};

use crate::{AnyMap, StrMap, Value};

impl<'de> Deserialize<'de> for Value {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// A [`Visitor`] producing dynamic [`Value`] trees.
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    #[inline]
    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    #[inline]
    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.into()))
    }

    #[inline]
    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    #[inline]
    fn visit_char<E>(self, v: char) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    #[inline]
    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries: Vec<(Value, Value)> =
            Vec::with_capacity(map.size_hint().unwrap_or_default());
        while let Some(entry) = map.next_entry::<Value, Value>()? {
            entries.push(entry);
        }

        if entries.iter().all(|(key, _)| matches!(key, Value::String(_))) {
            let mut str_map = StrMap::with_capacity_and_hasher(entries.len(), Default::default());
            for (key, value) in entries {
                if let Value::String(key) = key {
                    str_map.insert(key, value);
                }
            }
            Ok(Value::StrMap(str_map))
        } else {
            Ok(Value::AnyMap(entries.into_iter().collect::<AnyMap>()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Value, ValueKind};

    #[test]
    fn json_document() {
        let doc: Value = serde_json::from_str(
            r#"{"a": 1, "b": {"3": [1, "two", 3.3]}, "c": null, "d": true}"#,
        )
        .unwrap();

        let expected = Value::str_map([
            ("a", Value::from(1)),
            (
                "b",
                Value::str_map([("3", Value::seq([Value::from(1), "two".into(), 3.3.into()]))]),
            ),
            ("c", Value::Null),
            ("d", Value::from(true)),
        ]);
        assert_eq!(doc, expected);
    }

    #[test]
    fn big_unsigned_becomes_float() {
        let doc: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(doc.kind(), ValueKind::Float);
    }

    #[test]
    fn non_string_keys_make_any_map() {
        let doc: Value = ron::from_str(r#"{"a": 1, "b": {3: [1, "two"]}}"#).unwrap();

        let inner = doc.as_str_map().and_then(|m| m.get("b")).unwrap();
        assert_eq!(inner.kind(), ValueKind::AnyMap);
        assert_eq!(
            inner.as_any_map().and_then(|m| m.get(&Value::Int(3))),
            Some(&Value::seq([Value::from(1), "two".into()]))
        );
    }
}
