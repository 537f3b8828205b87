//! Drive path traversal one element at a time.

use dyno_value::Value;

use crate::AccessError;
use crate::container::{Container, ContainerMut};

// -----------------------------------------------------------------------------
// Full walk

/// Resolves every element of `path`, returning the value it denotes.
///
/// An empty path denotes `root` itself. Elements are applied left to right
/// and the first failing element is reported.
pub fn walk<'r>(root: &'r Value, path: &[Value]) -> Result<&'r Value, AccessError> {
    let mut it = root;
    for (pos, key) in path.iter().enumerate() {
        it = Container::of(it)
            .map_err(|actual| AccessError::NotIndexable { actual, pos })?
            .resolve(key, pos)?;
    }
    Ok(it)
}

/// Resolves every element of `path`, returning a mutable reference to the
/// value it denotes.
///
/// See [`walk`].
pub fn walk_mut<'r>(root: &'r mut Value, path: &[Value]) -> Result<&'r mut Value, AccessError> {
    let mut it = root;
    for (pos, key) in path.iter().enumerate() {
        it = ContainerMut::of(it)
            .map_err(|actual| AccessError::NotIndexable { actual, pos })?
            .resolve(key, pos)?;
    }
    Ok(it)
}

// -----------------------------------------------------------------------------
// Walk to the terminal position

/// The container holding the last path element, together with that element.
///
/// This is where set and delete apply their action.
#[derive(Debug)]
pub struct Terminal<'r, 'p> {
    pub container: ContainerMut<'r>,
    pub key: &'p Value,
    /// Index of `key` in the path.
    pub pos: usize,
}

/// Resolves all but the last element of `path` and classifies the result.
///
/// Fails with [`AccessError::EmptyPath`] if `path` is empty, and with
/// [`AccessError::NotIndexable`] if the parent of the last element is a
/// scalar.
pub fn walk_to_terminal<'r, 'p>(
    root: &'r mut Value,
    path: &'p [Value],
) -> Result<Terminal<'r, 'p>, AccessError> {
    let Some((key, parents)) = path.split_last() else {
        return Err(AccessError::EmptyPath);
    };
    let pos = parents.len();

    let container = ContainerMut::of(walk_mut(root, parents)?)
        .map_err(|actual| AccessError::NotIndexable { actual, pos })?;

    Ok(Terminal {
        container,
        key,
        pos,
    })
}

#[cfg(test)]
mod tests {
    use dyno_value::{Value, ValueKind};

    use super::{walk, walk_mut, walk_to_terminal};
    use crate::{AccessError, path};

    fn sample() -> Value {
        Value::str_map([
            ("a", Value::from(1)),
            (
                "b",
                Value::any_map([(3, Value::seq([Value::from(1), "two".into(), 3.3.into()]))]),
            ),
        ])
    }

    #[test]
    fn empty_path_is_root() {
        let root = sample();
        assert_eq!(walk(&root, &[]), Ok(&root));
    }

    #[test]
    fn first_failure_wins() {
        let root = sample();
        assert_eq!(
            walk(&root, &path!["a", "x", "y"]),
            Err(AccessError::NotIndexable {
                actual: ValueKind::Int,
                pos: 1,
            })
        );
        assert_eq!(
            walk(&root, &path!["b", 3, 7, 0]),
            Err(AccessError::IndexOutOfRange { index: 7, pos: 2 })
        );
    }

    #[test]
    fn mutable_walk_reaches_the_same_value() {
        let mut root = sample();
        *walk_mut(&mut root, &path!["b", 3, 0]).unwrap() = Value::from("one");
        assert_eq!(walk(&root, &path!["b", 3, 0]), Ok(&Value::from("one")));
    }

    #[test]
    fn terminal_of_single_element_is_root() {
        let mut root = sample();
        let p = path!["zzz"];
        let terminal = walk_to_terminal(&mut root, &p).unwrap();
        assert_eq!(terminal.pos, 0);
        assert_eq!(terminal.key, &Value::from("zzz"));
        assert_eq!(terminal.container.kind(), ValueKind::StrMap);
    }

    #[test]
    fn terminal_needs_a_path() {
        let mut root = sample();
        assert_eq!(
            walk_to_terminal(&mut root, &[]).unwrap_err(),
            AccessError::EmptyPath
        );
    }

    #[test]
    fn terminal_parent_must_be_a_container() {
        let mut root = sample();
        assert_eq!(
            walk_to_terminal(&mut root, &path!["a", 0]).unwrap_err(),
            AccessError::NotIndexable {
                actual: ValueKind::Int,
                pos: 1,
            }
        );
    }
}
