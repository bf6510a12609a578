//! Runtime shape of a walkable value.
//!
//! A type takes part in a walk by implementing [`Walk`], which reports the
//! [`Shape`] of a borrowed value. The shape set is closed: the walker knows
//! how to traverse each variant, and a type only has to describe which one it
//! is and hand out its children.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::visitor::VisitResult;

/// A value whose shape can be inspected by the walker.
///
/// Implementations must not mutate the value. The trait is object safe, so
/// composite shapes hand out their children as `&dyn Walk`.
pub trait Walk {
    /// Reports the shape of this value, borrowing any children.
    fn shape(&self) -> Shape<'_>;
}

/// Children of a sequence, fixed sequence or associative container.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Walk> + 'a>;

/// The runtime shape of a value.
pub enum Shape<'a> {
    /// A textual leaf. Reported to the sink.
    Text(&'a str),
    /// A non-textual leaf (number, boolean, character, unit).
    Scalar,
    /// A nullable indirection. `None` contributes nothing.
    Reference(Option<&'a dyn Walk>),
    /// Named fields in declaration order.
    Record(Record<'a>),
    /// Variable-length ordered collection.
    Sequence(Elements<'a>),
    /// Fixed-length ordered collection.
    Array(Elements<'a>),
    /// Values of an associative container. Keys are never exposed.
    Map(Elements<'a>),
    /// Blocking channel, drained until its sending side closes.
    Stream(&'a dyn Stream),
    /// Zero-argument callable invoked once per walk.
    Producer(&'a dyn Produce),
    /// Anything the walker does not understand.
    Opaque,
}

impl<'a> Shape<'a> {
    /// Wraps an iterator of elements as a [`Shape::Sequence`].
    pub fn sequence<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        T: Walk + 'a,
    {
        Shape::Sequence(elements_of(elements))
    }

    /// Wraps an iterator of elements as a [`Shape::Array`].
    pub fn array<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        T: Walk + 'a,
    {
        Shape::Array(elements_of(elements))
    }

    /// Wraps an iterator of container values as a [`Shape::Map`].
    pub fn map<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
        T: Walk + 'a,
    {
        Shape::Map(elements_of(values))
    }

    /// Returns the kind of this shape, without its payload.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Text(_) => ShapeKind::Text,
            Shape::Scalar => ShapeKind::Scalar,
            Shape::Reference(_) => ShapeKind::Reference,
            Shape::Record(_) => ShapeKind::Record,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Array(_) => ShapeKind::Array,
            Shape::Map(_) => ShapeKind::Map,
            Shape::Stream(_) => ShapeKind::Stream,
            Shape::Producer(_) => ShapeKind::Producer,
            Shape::Opaque => ShapeKind::Opaque,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Shape::Reference(target) => f
                .debug_tuple("Reference")
                .field(&target.map(|_| "..."))
                .finish(),
            Shape::Record(record) => f.debug_tuple("Record").field(record).finish(),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

fn elements_of<'a, I, T>(elements: I) -> Elements<'a>
where
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
    T: Walk + 'a,
{
    Box::new(elements.into_iter().map(|element| element as &dyn Walk))
}

/// Payload-free discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Text,
    Scalar,
    Reference,
    Record,
    Sequence,
    Array,
    Map,
    Stream,
    Producer,
    Opaque,
}

impl ShapeKind {
    /// Returns the variant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Text => "Text",
            ShapeKind::Scalar => "Scalar",
            ShapeKind::Reference => "Reference",
            ShapeKind::Record => "Record",
            ShapeKind::Sequence => "Sequence",
            ShapeKind::Array => "Array",
            ShapeKind::Map => "Map",
            ShapeKind::Stream => "Stream",
            ShapeKind::Producer => "Producer",
            ShapeKind::Opaque => "Opaque",
        }
    }

    /// Returns `true` for shapes that never have children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, ShapeKind::Text | ShapeKind::Scalar | ShapeKind::Opaque)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of values delivered over a blocking channel.
pub trait Stream {
    /// Receives values until the sending side closes, passing each one to
    /// `each` in receipt order.
    ///
    /// Blocks between values. Stops receiving as soon as `each` breaks.
    fn drain(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult;
}

/// A zero-argument callable whose results are walked.
pub trait Produce {
    /// Invokes the callable once and passes its result to `each`.
    fn produce(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult;
}

/// Adapts any `Fn() -> R` into a walkable producer.
///
/// Closures cannot implement [`Walk`] directly; wrap them instead. Return a
/// tuple to produce several values, which are walked in return order.
#[derive(Clone, Copy)]
pub struct Producer<F>(pub F);

impl<F> fmt::Debug for Producer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}
