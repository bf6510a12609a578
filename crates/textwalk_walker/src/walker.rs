//! Walker driver that reports textual leaves to a sink.
//!
//! [`Walker`] runs the visitor dispatch with a sink-backed visitor that
//! tracks nesting depth, so a value nested past the configured limit (a
//! cyclic value, typically) aborts with an error instead of overflowing the
//! stack.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::WalkConfig;
use crate::error::WalkError;
use crate::shape::{ShapeKind, Walk};
use crate::visitor::{VisitResult, Visitor, walk_value};

/// Statistics about a finished walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Number of textual leaves reported to the sink.
    pub leaves: usize,
    /// Number of values entered, composites included.
    pub values: usize,
    /// Deepest nesting level reached. The root is level 1.
    pub deepest: usize,
}

/// Walks values and reports textual leaves.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    /// Creates a new `Walker` with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Creates a new `Walker` with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(WalkConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walks `value`, calling `sink` once per textual leaf in traversal order.
    pub fn walk<W, F>(&self, value: &W, mut sink: F) -> Result<WalkSummary, WalkError>
    where
        W: Walk + ?Sized,
        F: FnMut(&str),
    {
        self.try_walk(value, |text| {
            sink(text);
            Ok::<(), Infallible>(())
        })
    }

    /// Walks `value` with a fallible sink.
    ///
    /// The first sink error aborts the walk and is returned as
    /// [`WalkError::Sink`]. Leaves already reported stay reported.
    pub fn try_walk<W, F, E>(&self, value: &W, sink: F) -> Result<WalkSummary, WalkError>
    where
        W: Walk + ?Sized,
        F: FnMut(&str) -> Result<(), E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        debug!("Walking value (max depth {:?})", self.config.max_depth);

        let mut visitor = SinkVisitor::new(sink, self.config.max_depth);
        let flow = walk_value(&mut visitor, value);

        if let Some(error) = visitor.error {
            return Err(error);
        }
        if flow.is_break() {
            // A custom stream or producer may break on its own.
            debug!("Walk stopped early without an error");
        }

        debug!(
            "Walk finished: {} leaves reported, {} values visited",
            visitor.summary.leaves, visitor.summary.values
        );
        Ok(visitor.summary)
    }
}

/// Visitor that forwards textual leaves to a sink and enforces the depth
/// limit through the enter/exit hooks.
struct SinkVisitor<F, E> {
    sink: F,
    max_depth: Option<usize>,
    depth: usize,
    summary: WalkSummary,
    error: Option<WalkError>,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> SinkVisitor<F, E> {
    fn new(sink: F, max_depth: Option<usize>) -> Self {
        Self {
            sink,
            max_depth,
            depth: 0,
            summary: WalkSummary::default(),
            error: None,
            _error: PhantomData,
        }
    }
}

impl<F, E> Visitor for SinkVisitor<F, E>
where
    F: FnMut(&str) -> Result<(), E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn enter_value(&mut self, kind: ShapeKind) -> VisitResult {
        self.depth += 1;
        if let Some(limit) = self.max_depth
            && self.depth > limit
        {
            warn!(
                "Depth limit {} exceeded while entering {} value",
                limit, kind
            );
            self.error = Some(WalkError::DepthLimitExceeded { limit });
            return ControlFlow::Break(());
        }

        self.summary.values += 1;
        self.summary.deepest = self.summary.deepest.max(self.depth);
        ControlFlow::Continue(())
    }

    fn exit_value(&mut self, _kind: ShapeKind) -> VisitResult {
        self.depth -= 1;
        ControlFlow::Continue(())
    }

    fn visit_text(&mut self, text: &str) -> VisitResult {
        match (self.sink)(text) {
            Ok(()) => {
                self.summary.leaves += 1;
                ControlFlow::Continue(())
            }
            Err(e) => {
                self.error = Some(WalkError::sink(e));
                ControlFlow::Break(())
            }
        }
    }
}

/// Walks `value` with the default configuration, calling `sink` once per
/// textual leaf.
///
/// ```rust
/// use textwalk_walker::walk;
///
/// let mut got = Vec::new();
/// walk(&("Nuriddin", 22, ["London", "Tashkent"]), |text| got.push(text.to_string())).unwrap();
/// assert_eq!(got, ["Nuriddin", "London", "Tashkent"]);
/// ```
pub fn walk<W, F>(value: &W, sink: F) -> Result<(), WalkError>
where
    W: Walk + ?Sized,
    F: FnMut(&str),
{
    Walker::with_defaults().walk(value, sink).map(|_| ())
}

/// Collects every textual leaf of `value`, in traversal order.
pub fn collect_texts<W: Walk + ?Sized>(value: &W) -> Result<Vec<String>, WalkError> {
    let mut texts = Vec::new();
    Walker::with_defaults().walk(value, |text| texts.push(text.to_string()))?;
    Ok(texts)
}
