use serde_core::{Serialize, Serializer};

use crate::Value;
use crate::display::sorted_entries;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::Seq(items) => serializer.collect_seq(items),
            Self::StrMap(map) => serializer.collect_map(sorted_entries(map)),
            Self::AnyMap(map) => serializer.collect_map(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn json_output_is_sorted() {
        let person = Value::str_map([
            ("name", Value::str_map([("first", "Bob"), ("last", "Archer")])),
            ("age", Value::from(22)),
            ("fruits", Value::seq(["apple", "banana"])),
        ]);

        assert_eq!(
            serde_json::to_string(&person).unwrap(),
            r#"{"age":22,"fruits":["apple","banana"],"name":{"first":"Bob","last":"Archer"}}"#
        );
    }

    #[test]
    fn floats_and_null() {
        let v = Value::seq([Value::from(1), Value::from(3.3), Value::Null]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,3.3,null]");
    }
}
