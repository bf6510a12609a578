//! Tuples and nullary producers.
//!
//! Tuples are fixed sequences. A producer's result is walked as a single
//! value, so a producer returning a tuple yields each element in return
//! order.

use crate::shape::{Produce, Producer, Shape, Walk};
use crate::visitor::VisitResult;

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Walk),+> Walk for ($($name,)+) {
            fn shape(&self) -> Shape<'_> {
                Shape::Array(Box::new([$(&self.$idx as &dyn Walk),+].into_iter()))
            }
        }
    };
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);

impl<F, R> Produce for Producer<F>
where
    F: Fn() -> R,
    R: Walk,
{
    fn produce(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult {
        let results = (self.0)();
        each(&results)
    }
}

impl<F, R> Walk for Producer<F>
where
    F: Fn() -> R,
    R: Walk,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Producer(self)
    }
}

impl<R: Walk> Produce for fn() -> R {
    fn produce(&self, each: &mut dyn FnMut(&dyn Walk) -> VisitResult) -> VisitResult {
        let results = (*self)();
        each(&results)
    }
}

impl<R: Walk> Walk for fn() -> R {
    fn shape(&self) -> Shape<'_> {
        Shape::Producer(self)
    }
}
