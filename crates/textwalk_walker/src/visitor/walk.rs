//! Walk functions for value traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use tracing::trace;

use crate::record::{Field, Record};
use crate::shape::{Elements, Produce, Shape, Stream, Walk};

use super::visit::{VisitResult, Visitor};

/// Walks a value by dispatching to the shape-specific visitor method.
///
/// This function:
/// 1. Asks the value for its shape
/// 2. Calls `enter_value` on the visitor
/// 3. Dispatches to the appropriate `visit_*` method
/// 4. Calls `exit_value` on the visitor
pub fn walk_value<V, W>(visitor: &mut V, value: &W) -> VisitResult
where
    V: Visitor,
    W: Walk + ?Sized,
{
    let shape = value.shape();
    let kind = shape.kind();

    visitor.enter_value(kind)?;

    let result = match shape {
        // Leaves
        Shape::Text(text) => visitor.visit_text(text),
        Shape::Scalar => visitor.visit_scalar(),
        Shape::Opaque => visitor.visit_opaque(),

        // Composites
        Shape::Reference(target) => visitor.visit_reference(target),
        Shape::Record(record) => visitor.visit_record(&record),
        Shape::Sequence(elements) => visitor.visit_sequence(elements),
        Shape::Array(elements) => visitor.visit_array(elements),
        Shape::Map(values) => visitor.visit_map(values),

        // Suspending and invoking shapes
        Shape::Stream(stream) => visitor.visit_stream(stream),
        Shape::Producer(producer) => visitor.visit_producer(producer),
    };

    result?;

    visitor.exit_value(kind)
}

/// Walks the target of a reference. An absent target contributes nothing.
#[inline]
pub fn walk_reference<V: Visitor>(visitor: &mut V, target: Option<&dyn Walk>) -> VisitResult {
    match target {
        Some(value) => walk_value(visitor, value),
        None => ControlFlow::Continue(()),
    }
}

/// Walks every field of a record in declaration order.
#[inline]
pub fn walk_fields<V: Visitor>(visitor: &mut V, record: &Record<'_>) -> VisitResult {
    for field in record.fields() {
        visitor.visit_field(field)?;
    }
    ControlFlow::Continue(())
}

/// Walks the value of one field. Hidden fields yield nothing.
#[inline]
pub fn walk_field<V: Visitor>(visitor: &mut V, field: &Field<'_>) -> VisitResult {
    walk_reference(visitor, field.value)
}

/// Walks elements in iteration order.
#[inline]
pub fn walk_elements<V: Visitor>(visitor: &mut V, elements: Elements<'_>) -> VisitResult {
    for element in elements {
        walk_value(visitor, element)?;
    }
    ControlFlow::Continue(())
}

/// Drains a stream, walking each received value before receiving the next.
///
/// Blocks until the sending side closes. Breaking from the visitor stops
/// the receive loop; the stream itself is left open.
pub fn walk_stream<V: Visitor>(visitor: &mut V, stream: &dyn Stream) -> VisitResult {
    let mut received = 0usize;
    let result = stream.drain(&mut |value: &dyn Walk| {
        received += 1;
        trace!("Received stream value #{}", received);
        walk_value(visitor, value)
    });
    trace!("Stream finished after {} values", received);
    result
}

/// Invokes a producer once and walks its results in return order.
pub fn walk_producer<V: Visitor>(visitor: &mut V, producer: &dyn Produce) -> VisitResult {
    trace!("Invoking producer");
    producer.produce(&mut |results: &dyn Walk| walk_value(visitor, results))
}
