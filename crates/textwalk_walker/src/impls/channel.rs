//! Channel receivers as stream sources.
//!
//! Both std and crossbeam receivers block on `recv` and report closure once
//! every sender has been dropped, which is the only way a drain finishes.

use std::ops::ControlFlow;
use std::sync::mpsc;

use crate::shape::{Shape, Stream, Walk};
use crate::visitor::VisitResult;

impl<T: Walk> Stream for mpsc::Receiver<T> {
    fn drain(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult {
        while let Ok(value) = self.recv() {
            each(&value)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Walk> Walk for mpsc::Receiver<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Stream(self)
    }
}

impl<T: Walk> Stream for crossbeam_channel::Receiver<T> {
    fn drain(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult {
        while let Ok(value) = self.recv() {
            each(&value)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: Walk> Walk for crossbeam_channel::Receiver<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Stream(self)
    }
}
