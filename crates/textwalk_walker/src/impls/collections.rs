//! Sequences, fixed sequences and associative containers.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::shape::{Shape, Walk};

impl<T: Walk> Walk for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self)
    }
}

impl<T: Walk> Walk for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self)
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::sequence(self)
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::array(self)
    }
}

// Keys are never walked, so they carry no bound.
impl<K, V: Walk, S> Walk for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::map(self.values())
    }
}

impl<K, V: Walk> Walk for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::map(self.values())
    }
}
