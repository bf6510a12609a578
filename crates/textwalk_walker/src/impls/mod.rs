//! [`Walk`] implementations for standard library types.
//!
//! Pointers (`&T`, `Box<T>`, `Rc<T>`, `Arc<T>`) are transparent: they are
//! dereferenced before shape inspection and report their target's shape.
//! Nullable indirections (`Option<T>`, `OnceCell<T>`, `OnceLock<T>`) report
//! [`Shape::Reference`].

mod channel;
mod collections;
mod json;
mod producer;

use std::borrow::Cow;
use std::cell::OnceCell;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};

use crate::shape::{Shape, Walk};

// === Text ===

impl Walk for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Walk for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Walk for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

// === Other scalars ===

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_scalar!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// === Transparent pointers ===

impl<T: Walk + ?Sized> Walk for &T {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Walk + ?Sized> Walk for &mut T {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Walk + ?Sized> Walk for Box<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Walk + ?Sized> Walk for Rc<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Walk + ?Sized> Walk for Arc<T> {
    #[inline]
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

// === Nullable references ===

impl<T: Walk> Walk for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(self.as_ref().map(|value| value as &dyn Walk))
    }
}

impl<T: Walk> Walk for OnceCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(self.get().map(|value| value as &dyn Walk))
    }
}

impl<T: Walk> Walk for OnceLock<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Reference(self.get().map(|value| value as &dyn Walk))
    }
}
