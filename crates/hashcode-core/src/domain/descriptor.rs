//! Field and entity descriptors.

use std::fmt;

use crate::hash::FieldHash;

/// Reads one field of an entity as a hashable value.
pub type FieldGetter<E> = for<'a> fn(&'a E) -> &'a dyn FieldHash;

/// Describes one hashable field of an entity type at compile time.
///
/// A descriptor pairs the field name (for diagnostics and name lookup) with
/// a plain function pointer reading the field, so descriptor lists can live
/// in `'static` constants.
pub struct FieldDescriptor<E> {
    /// Name of the field.
    pub name: &'static str,
    getter: FieldGetter<E>,
}

impl<E> FieldDescriptor<E> {
    /// Creates a new FieldDescriptor.
    pub const fn new(name: &'static str, getter: FieldGetter<E>) -> Self {
        FieldDescriptor { name, getter }
    }

    /// Reads the field from an entity.
    #[inline]
    pub fn read<'a>(&self, entity: &'a E) -> &'a dyn FieldHash {
        (self.getter)(entity)
    }
}

impl<E> Clone for FieldDescriptor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldDescriptor<E> {}

impl<E> fmt::Debug for FieldDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

/// Describes the hashable fields of an entity type.
pub struct EntityDescriptor<E: 'static> {
    /// Name of the entity type.
    pub type_name: &'static str,
    fields: &'static [FieldDescriptor<E>],
}

impl<E: 'static> EntityDescriptor<E> {
    /// Creates a new EntityDescriptor.
    pub const fn new(type_name: &'static str, fields: &'static [FieldDescriptor<E>]) -> Self {
        EntityDescriptor { type_name, fields }
    }

    /// Returns the field descriptors in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor<E>] {
        self.fields
    }

    /// Finds a field descriptor by name.
    pub fn find_field(&self, name: &str) -> Option<&'static FieldDescriptor<E>> {
        let fields = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        let fields = self.fields;
        fields.iter().map(|f| f.name)
    }

    /// Returns the number of described fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl<E: 'static> Clone for EntityDescriptor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for EntityDescriptor<E> {}

impl<E: 'static> fmt::Debug for EntityDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Builds a [`FieldDescriptor`] for a named field of a struct.
///
/// The field type must implement [`FieldHash`].
///
/// # Examples
///
/// ```
/// use hashcode_core::{field, FieldDescriptor, FieldHash};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let selectors: [FieldDescriptor<Point>; 2] = [field!(Point, y), field!(Point, x)];
/// let point = Point { x: 1, y: 2 };
///
/// assert_eq!(selectors[0].name, "y");
/// assert_eq!(selectors[0].read(&point).field_hash(), 2);
/// ```
#[macro_export]
macro_rules! field {
    ($entity:ty, $field:ident) => {{
        fn get(entity: &$entity) -> &dyn $crate::FieldHash {
            &entity.$field
        }
        $crate::FieldDescriptor::<$entity>::new(::core::stringify!($field), get)
    }};
}
