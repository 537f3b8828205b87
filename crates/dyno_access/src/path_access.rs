use dyno_value::Value;

use crate::{AccessError, FromValue};

// -----------------------------------------------------------------------------
// Method-style access

/// Method-style path operations on a [`Value`] root.
///
/// Each method forwards to the free function of the same name.
///
/// # Examples
///
/// ```
/// use dyno_access::{PathAccess, path};
/// use dyno_value::Value;
///
/// let mut person = Value::str_map([("fruits", Value::seq(["apple"]))]);
///
/// person.path_append("melon", &path!["fruits"]).unwrap();
/// person.path_set("lemon", &path!["fruits", 0]).unwrap();
///
/// assert_eq!(person.path_get_as::<&str>(&path!["fruits", 1]), Ok("melon"));
/// assert_eq!(person.path_delete(&path!["fruits", 0]), Ok(Some(Value::from("lemon"))));
/// ```
pub trait PathAccess {
    /// See [`get`](crate::get).
    fn path_get(&self, path: &[Value]) -> Result<&Value, AccessError>;

    /// See [`get_mut`](crate::get_mut).
    fn path_get_mut(&mut self, path: &[Value]) -> Result<&mut Value, AccessError>;

    /// See [`get_as`](crate::get_as).
    fn path_get_as<'r, T: FromValue<'r>>(&'r self, path: &[Value]) -> Result<T, AccessError>;

    /// See [`set`](crate::set).
    fn path_set(&mut self, value: impl Into<Value>, path: &[Value]) -> Result<(), AccessError>;

    /// See [`append`](crate::append).
    fn path_append(&mut self, value: impl Into<Value>, path: &[Value])
    -> Result<(), AccessError>;

    /// See [`delete`](crate::delete).
    fn path_delete(&mut self, path: &[Value]) -> Result<Option<Value>, AccessError>;
}

impl PathAccess for Value {
    #[inline]
    fn path_get(&self, path: &[Value]) -> Result<&Value, AccessError> {
        crate::get(self, path)
    }

    #[inline]
    fn path_get_mut(&mut self, path: &[Value]) -> Result<&mut Value, AccessError> {
        crate::get_mut(self, path)
    }

    #[inline]
    fn path_get_as<'r, T: FromValue<'r>>(&'r self, path: &[Value]) -> Result<T, AccessError> {
        crate::get_as(self, path)
    }

    #[inline]
    fn path_set(&mut self, value: impl Into<Value>, path: &[Value]) -> Result<(), AccessError> {
        crate::set(self, value, path)
    }

    #[inline]
    fn path_append(
        &mut self,
        value: impl Into<Value>,
        path: &[Value],
    ) -> Result<(), AccessError> {
        crate::append(self, value, path)
    }

    #[inline]
    fn path_delete(&mut self, path: &[Value]) -> Result<Option<Value>, AccessError> {
        crate::delete(self, path)
    }
}
