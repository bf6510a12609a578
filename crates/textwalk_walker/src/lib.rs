//! # textwalk_walker
//!
//! Shape-driven value walker for textwalk.
//!
//! Given a value whose structure is only known at run time, the walker
//! discovers every textual leaf embedded in it and reports each one to a
//! sink, in a deterministic order.
//!
//! ## Architecture
//!
//! - Every walkable type implements [`Walk`], reporting one [`Shape`] from a
//!   closed set: text, scalar, reference, record, sequence, array, map,
//!   stream or producer
//! - [`visitor::walk_value`] dispatches on the shape and recurses through
//!   composites, calling back into a [`Visitor`]
//! - [`Walker`] drives a sink-backed visitor and enforces a nesting limit
//!   so cyclic values fail with [`WalkError::DepthLimitExceeded`]
//!
//! ## Example
//!
//! ```rust
//! use textwalk_walker::{collect_texts, impl_record};
//!
//! struct Person {
//!     name: String,
//!     profile: Profile,
//! }
//!
//! struct Profile {
//!     age: u32,
//!     city: String,
//! }
//!
//! impl_record!(Person { name, profile });
//! impl_record!(Profile { age, city });
//!
//! let person = Person {
//!     name: "Nuriddin".into(),
//!     profile: Profile { age: 33, city: "London".into() },
//! };
//!
//! assert_eq!(collect_texts(&person).unwrap(), vec!["Nuriddin", "London"]);
//! ```

mod config;
mod error;
mod impls;
mod record;
mod shape;
pub mod visitor;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, WalkConfig};
pub use error::WalkError;
pub use record::{Field, Record};
pub use shape::{Elements, Produce, Producer, Shape, ShapeKind, Stream, Walk};
pub use walker::{WalkSummary, Walker, collect_texts, walk};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
