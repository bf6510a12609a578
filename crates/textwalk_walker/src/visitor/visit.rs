//! Visitor trait for traversing walkable values.
//!
//! Each `visit_*` method has a default implementation: composites recurse
//! into their children, leaves do nothing. Override only the shapes you care
//! about.
//!
//! # Example
//!
//! ```rust
//! use textwalk_walker::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! /// Counts textual leaves without copying them.
//! struct TextCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for TextCounter {
//!     fn visit_text(&mut self, _text: &str) -> VisitResult {
//!         self.count += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut counter = TextCounter { count: 0 };
//! let _ = walk_value(&mut counter, &vec!["a", "b", "c"]);
//! assert_eq!(counter.count, 3);
//! ```

use std::ops::ControlFlow;

use crate::record::{Field, Record};
use crate::shape::{Elements, Produce, ShapeKind, Stream, Walk};

use super::walk::{
    walk_elements, walk_field, walk_fields, walk_producer, walk_reference, walk_stream,
};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing values without modification.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor: Sized {
    /// Called before any value is dispatched, with the value's shape kind.
    #[inline]
    fn enter_value(&mut self, _kind: ShapeKind) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a value and all of its children were visited.
    #[inline]
    fn exit_value(&mut self, _kind: ShapeKind) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Leaf visitors ===

    /// Visit a textual leaf.
    fn visit_text(&mut self, _text: &str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a non-textual leaf.
    fn visit_scalar(&mut self) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a value of unrecognized shape.
    fn visit_opaque(&mut self) -> VisitResult {
        ControlFlow::Continue(())
    }

    // === Composite visitors ===

    /// Visit a nullable reference.
    fn visit_reference(&mut self, target: Option<&dyn Walk>) -> VisitResult {
        walk_reference(self, target)
    }

    /// Visit a record.
    fn visit_record(&mut self, record: &Record<'_>) -> VisitResult {
        walk_fields(self, record)
    }

    /// Visit a single record field. Hidden fields are skipped by default.
    fn visit_field(&mut self, field: &Field<'_>) -> VisitResult {
        walk_field(self, field)
    }

    /// Visit a variable-length sequence.
    fn visit_sequence(&mut self, elements: Elements<'_>) -> VisitResult {
        walk_elements(self, elements)
    }

    /// Visit a fixed-length sequence.
    fn visit_array(&mut self, elements: Elements<'_>) -> VisitResult {
        walk_elements(self, elements)
    }

    /// Visit the values of an associative container.
    fn visit_map(&mut self, values: Elements<'_>) -> VisitResult {
        walk_elements(self, values)
    }

    /// Visit a stream source. The default drains it until it closes.
    fn visit_stream(&mut self, stream: &dyn Stream) -> VisitResult {
        walk_stream(self, stream)
    }

    /// Visit a nullary producer. The default invokes it once.
    fn visit_producer(&mut self, producer: &dyn Produce) -> VisitResult {
        walk_producer(self, producer)
    }
}
