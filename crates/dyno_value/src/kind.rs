use core::fmt;

// -----------------------------------------------------------------------------
// ValueKind

/// An enumeration of the "kinds" of a dynamic [`Value`].
///
/// A [`ValueKind`] is obtained via [`Value::kind`]. Every kind-related
/// error message names a kind through its `Display` impl.
///
/// [`Value`]: crate::Value
/// [`Value::kind`]: crate::Value::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Seq,
    StrMap,
    AnyMap,
}

impl ValueKind {
    /// Returns `true` for the kinds a path element can index into.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Seq | Self::StrMap | Self::AnyMap)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Float => f.pad("float"),
            Self::String => f.pad("string"),
            Self::Seq => f.pad("sequence"),
            Self::StrMap => f.pad("string-keyed map"),
            Self::AnyMap => f.pad("map"),
        }
    }
}
