//! Visitor pattern for value traversal.
//!
//! This module provides the trait and functions for traversing any value
//! that implements [`Walk`](crate::Walk).
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_value`] - Dispatch function for shape-specific visitors
//! - [`walk_fields`], [`walk_elements`], [`walk_stream`], [`walk_producer`] -
//!   Default recursion for each composite shape
//!
//! # Early Termination
//!
//! ```rust
//! use textwalk_walker::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! struct FirstText {
//!     found: Option<String>,
//! }
//!
//! impl Visitor for FirstText {
//!     fn visit_text(&mut self, text: &str) -> VisitResult {
//!         self.found = Some(text.to_string());
//!         ControlFlow::Break(()) // Stop traversal
//!     }
//! }
//!
//! let mut finder = FirstText { found: None };
//! let result = walk_value(&mut finder, &("Tashkent", "London"));
//! assert!(result.is_break());
//! assert_eq!(finder.found.as_deref(), Some("Tashkent"));
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{
    walk_elements, walk_field, walk_fields, walk_producer, walk_reference, walk_stream,
    walk_value,
};
