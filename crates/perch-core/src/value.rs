use serde::{Deserialize, Serialize};

use crate::Binding;

/// The value a control steers, declared by the caller at add-time as an
/// explicit tag. The control's kind is resolved from this once and frozen;
/// nothing re-infers it later.
pub enum BoundValue {
    Bool(Binding<bool>),
    Number(Binding<f32>),
    NumberArray(Binding<Vec<f32>>),
    Text(Binding<String>),
}

impl BoundValue {
    /// Plain snapshot of the current value, for callbacks and serialization.
    pub fn snapshot(&self) -> ParamValue {
        match self {
            BoundValue::Bool(b) => ParamValue::Bool(b.get()),
            BoundValue::Number(b) => ParamValue::Number(b.get()),
            BoundValue::NumberArray(b) => ParamValue::NumberArray(b.get()),
            BoundValue::Text(b) => ParamValue::Text(b.get()),
        }
    }

    /// Writes a snapshot back through the binding. Returns `false` without
    /// touching the value when the tags do not line up.
    pub fn restore(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (BoundValue::Bool(b), ParamValue::Bool(v)) => b.set(*v),
            (BoundValue::Number(b), ParamValue::Number(v)) => b.set(*v),
            (BoundValue::NumberArray(b), ParamValue::NumberArray(v)) => b.set(v.clone()),
            (BoundValue::Text(b), ParamValue::Text(v)) => b.set(v.clone()),
            _ => return false,
        }
        true
    }
}

/// Snapshot of a bound value. Serializes untagged so the persisted document
/// reads as a flat title→value object (`{"Exposure": 0.5}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f32),
    NumberArray(Vec<f32>),
    Text(String),
}
