use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{AnyMap, StrMap, Value};

// -----------------------------------------------------------------------------
// Scalars

macro_rules! impl_from_lossless {
    ($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

macro_rules! impl_from_saturating {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                /// Values above `i64::MAX` saturate.
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
                }
            }
        )+
    };
}

impl_from_lossless!(Bool as bool: bool);
impl_from_lossless!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
impl_from_lossless!(Float as f64: f32, f64);
impl_from_saturating!(u64, usize, isize);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Cow<'_, str>> for Value {
    #[inline]
    fn from(value: Cow<'_, str>) -> Self {
        Self::String(value.into_owned())
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// -----------------------------------------------------------------------------
// Containers

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::Seq(value)
    }
}

impl From<StrMap> for Value {
    #[inline]
    fn from(value: StrMap) -> Self {
        Self::StrMap(value)
    }
}

impl From<AnyMap> for Value {
    #[inline]
    fn from(value: AnyMap) -> Self {
        Self::AnyMap(value)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    /// Collects into a [`Value::Seq`].
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::seq(iter)
    }
}
