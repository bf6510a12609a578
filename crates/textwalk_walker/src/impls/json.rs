//! Dynamic JSON values.

use serde_json::{Map, Value};

use crate::shape::{Shape, Walk};

impl Walk for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Value::String(text) => Shape::Text(text),
            Value::Number(_) | Value::Bool(_) => Shape::Scalar,
            Value::Null => Shape::Reference(None),
            Value::Array(elements) => Shape::sequence(elements),
            Value::Object(object) => object.shape(),
        }
    }
}

impl Walk for Map<String, Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::map(self.values())
    }
}
