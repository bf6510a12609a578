//! Record shape: named fields in declaration order.

use std::fmt;

use crate::shape::Walk;

/// A single field of a [`Record`].
#[derive(Clone, Copy)]
pub struct Field<'a> {
    /// Field name as declared.
    pub name: &'static str,
    /// The field's value, or `None` when the type does not expose it.
    pub value: Option<&'a dyn Walk>,
}

impl Field<'_> {
    /// Returns `true` if the field is not exposed to the walker.
    pub fn is_hidden(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("hidden", &self.is_hidden())
            .finish()
    }
}

/// The fields of a structured value, as reported by its [`Walk`] impl.
///
/// Built with a chain of [`field`](Record::field) and
/// [`hidden`](Record::hidden) calls, usually generated by
/// [`impl_record!`](crate::impl_record).
#[derive(Debug, Clone, Default)]
pub struct Record<'a> {
    name: &'static str,
    fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    /// Creates an empty record for the named type.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Appends an exposed field.
    pub fn field<T: Walk + 'a>(mut self, name: &'static str, value: &'a T) -> Self {
        self.fields.push(Field {
            name,
            value: Some(value as &dyn Walk),
        });
        self
    }

    /// Appends a field the walker may not look into.
    pub fn hidden(mut self, name: &'static str) -> Self {
        self.fields.push(Field { name, value: None });
        self
    }

    /// Type name of the record.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Number of fields, hidden ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Implements [`Walk`](crate::Walk) for a struct by listing its fields.
///
/// Exposed fields are walked in the order given, which should match the
/// declaration order. Fields named after the `;` are reported as hidden and
/// never walked.
///
/// ```rust
/// use textwalk_walker::{collect_texts, impl_record};
///
/// struct Profile {
///     age: u32,
///     city: String,
///     token: String,
/// }
///
/// impl_record!(Profile { age, city; token });
///
/// let profile = Profile { age: 33, city: "London".into(), token: "secret".into() };
/// assert_eq!(collect_texts(&profile).unwrap(), vec!["London"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident),* $(,)? $(; $($hidden:ident),+ $(,)?)? }) => {
        impl $crate::Walk for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(
                    $crate::Record::new(stringify!($ty))
                        $(.field(stringify!($field), &self.$field))*
                        $($(.hidden(stringify!($hidden)))+)?
                )
            }
        }
    };
}
