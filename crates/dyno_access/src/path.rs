//! Provide the reusable [`Path`] and the [`path!`](crate::path) macro.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::Deref;

use dyno_utils::vec::FastVec;
use dyno_value::Value;

use crate::AccessError;

// -----------------------------------------------------------------------------
// Macro

/// Builds an array of path elements, converting each one into a [`Value`].
///
/// ```
/// use dyno_access::path;
/// use dyno_value::Value;
///
/// let p = path!["b", 3, 1];
/// assert_eq!(p, [Value::from("b"), Value::Int(3), Value::Int(1)]);
/// ```
///
/// [`Value`]: dyno_value::Value
#[macro_export]
macro_rules! path {
    () => {{
        let empty: [$crate::__macro_exports::Value; 0] = [];
        empty
    }};
    ($($elem:expr),+ $(,)?) => {
        [$($crate::__macro_exports::Value::from($elem)),+]
    };
}

// -----------------------------------------------------------------------------
// Path

/// Reusable owned path, a thin wrapper over `Box<[Value]>`.
///
/// Every operation takes `&[Value]`, so a `Path` is only needed when a path
/// is stored or built at runtime. It dereferences to `[Value]`.
///
/// # Examples
///
/// ```
/// use dyno_access::{Path, path};
/// use dyno_value::Value;
///
/// let mut person = Value::str_map([("fruits", Value::seq(["apple", "banana"]))]);
/// let second = Path::from(path!["fruits", 1]);
///
/// second.set(&mut person, "lemon").unwrap();
/// assert_eq!(second.get(&person), Ok(&Value::from("lemon")));
/// assert_eq!(second.to_string(), r#"["fruits"][1]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Box<[Value]>);

impl Path {
    /// Builds a path from anything convertible into path elements.
    pub fn new<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        elements.into_iter().map(Into::into).collect()
    }

    /// Returns the number of path elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Appends one element to the end of the path.
    ///
    /// ```
    /// # use dyno_access::Path;
    /// let mut p = Path::new(["fruits"]);
    /// p.push(0);
    /// assert_eq!(p.to_string(), r#"["fruits"][0]"#);
    /// ```
    pub fn push(&mut self, elem: impl Into<Value>) {
        let mut vec = mem::take(&mut self.0).into_vec();
        vec.push(elem.into());
        self.0 = vec.into_boxed_slice();
    }

    /// Concatenates two paths.
    ///
    /// ```
    /// # use dyno_access::{Path, path};
    /// let p = Path::from(path!["b", 3]).concat(Path::from(path![1]));
    /// assert_eq!(p.len(), 3);
    /// ```
    pub fn concat(self, other: Path) -> Self {
        let mut vec: FastVec<Value, 8> = FastVec::new();
        let data = vec.data();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }

    /// Returns an adapter that displays `path` the way [`Path`] does.
    #[inline]
    pub fn display(path: &[Value]) -> impl fmt::Display + '_ {
        DisplayPath(path)
    }

    /// Returns the value denoted by this path. See [`get`](crate::get).
    #[inline]
    pub fn get<'r>(&self, root: &'r Value) -> Result<&'r Value, AccessError> {
        crate::get(root, self)
    }

    /// Stores `value` at this path. See [`set`](crate::set).
    #[inline]
    pub fn set(&self, root: &mut Value, value: impl Into<Value>) -> Result<(), AccessError> {
        crate::set(root, value, self)
    }

    /// Appends `value` to the sequence at this path. See [`append`](crate::append).
    #[inline]
    pub fn append(&self, root: &mut Value, value: impl Into<Value>) -> Result<(), AccessError> {
        crate::append(root, value, self)
    }
}

impl Deref for Path {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl AsRef<[Value]> for Path {
    #[inline]
    fn as_ref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Path {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<const N: usize> From<[Value; N]> for Path {
    #[inline]
    fn from(value: [Value; N]) -> Self {
        Self(Box::new(value))
    }
}

impl<V: Into<Value>> FromIterator<V> for Path {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut vec: FastVec<Value, 8> = FastVec::new();
        let data = vec.data();
        data.extend(iter.into_iter().map(Into::into));
        Self(vec.into_boxed_slice())
    }
}

// -----------------------------------------------------------------------------
// Display

struct DisplayPath<'a>(&'a [Value]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.0 {
            match elem {
                Value::String(key) => write!(f, "[{key:?}]")?,
                other => write!(f, "[{other}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DisplayPath(&self.0), f)
    }
}
