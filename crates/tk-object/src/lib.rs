//! Object helpers: equality against several candidates and type
//! membership checks over `dyn Any`.
//!
//! Type checks are exact. `TypeId`s of different types never match, so there
//! is no notion of a subtype here.

use std::any::{Any, TypeId};

/// True if `object` equals at least one candidate. Stops at the first match.
pub fn equals_any<T, U, I>(object: &T, candidates: I) -> bool
where
    T: PartialEq<U> + ?Sized,
    I: IntoIterator<Item = U>,
{
    candidates.into_iter().any(|candidate| *object == candidate)
}

/// True if `object` is of one of the given types.
pub fn instance_of_any<I>(object: &dyn Any, types: I) -> bool
where
    I: IntoIterator<Item = TypeId>,
{
    let id = object.type_id();
    types.into_iter().any(|t| t == id)
}

/// True if at least one of `objects` is a `T`.
pub fn any_instance_of<'a, T, I>(objects: I) -> bool
where
    T: Any,
    I: IntoIterator<Item = &'a dyn Any>,
{
    objects.into_iter().any(|o| o.is::<T>())
}

/// An ordered list of types to test against.
///
/// ```
/// use tk_object::{instance_of_any, TypeSet};
///
/// let numbers = TypeSet::new().with::<i32>().with::<f64>();
/// assert!(instance_of_any(&1.5f64, &numbers));
/// assert!(!instance_of_any(&"text", &numbers));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    ids: Vec<TypeId>,
    names: Vec<&'static str>,
}

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `T`. Adding the same type twice is a no-op.
    pub fn with<T: Any>(mut self) -> Self {
        let id = TypeId::of::<T>();
        if !self.ids.contains(&id) {
            self.ids.push(id);
            self.names.push(std::any::type_name::<T>());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Type names in insertion order, for diagnostics.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn contains_type_of(&self, object: &dyn Any) -> bool {
        instance_of_any(object, self)
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = TypeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, TypeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter().copied()
    }
}
