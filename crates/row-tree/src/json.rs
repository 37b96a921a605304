//! Conversions between [`ValueTree`] and `serde_json::Value`.

use serde_json::{Number, Value};

use crate::value::ValueTree;
use crate::DecodeError;

impl From<Value> for ValueTree {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => ValueTree::Null,
            Value::Bool(b) => ValueTree::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ValueTree::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    ValueTree::UInt64(u)
                } else {
                    ValueTree::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ValueTree::String(s),
            Value::Array(items) => {
                ValueTree::Array(items.into_iter().map(ValueTree::from).collect())
            }
            Value::Object(obj) => obj.into_iter().collect(),
        }
    }
}

impl TryFrom<&ValueTree> for Value {
    type Error = DecodeError;

    fn try_from(v: &ValueTree) -> Result<Self, Self::Error> {
        let out = match v {
            ValueTree::Null => Value::Null,
            ValueTree::Bool(b) => Value::Bool(*b),
            ValueTree::String(s) => Value::String(s.clone()),
            ValueTree::Float(f) => float(f64::from(*f))?,
            ValueTree::Double(d) => float(*d)?,
            ValueTree::Int(i) => Value::from(*i),
            ValueTree::Int8(i) => Value::from(*i),
            ValueTree::Int16(i) => Value::from(*i),
            ValueTree::Int32(i) => Value::from(*i),
            ValueTree::Int64(i) => Value::from(*i),
            ValueTree::UInt(u) => Value::from(*u),
            ValueTree::UInt8(u) => Value::from(*u),
            ValueTree::UInt16(u) => Value::from(*u),
            ValueTree::UInt32(u) => Value::from(*u),
            ValueTree::UInt64(u) => Value::from(*u),
            ValueTree::Array(items) => {
                let items = items.iter().map(Value::try_from);
                Value::Array(items.collect::<Result<_, _>>()?)
            }
            ValueTree::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), Value::try_from(v)?)))
                    .collect::<Result<_, DecodeError>>()?,
            ),
            ValueTree::Delegate(_) => {
                return Err(DecodeError::custom("delegate nodes have no JSON form"));
            }
        };
        Ok(out)
    }
}

impl TryFrom<ValueTree> for Value {
    type Error = DecodeError;

    fn try_from(v: ValueTree) -> Result<Self, Self::Error> {
        Value::try_from(&v)
    }
}

fn float(f: f64) -> Result<Value, DecodeError> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| DecodeError::custom(format!("non-finite float {f} has no JSON form")))
}
