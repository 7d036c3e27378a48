use serde_json::{Map, Value};

use crate::document::codec::{DocValue, as_array_of, field_or, field_required, member};
use crate::document::path::{BindError, DocPath};
use crate::expression::expr::Expr;
use crate::expression::vector::{ExprMat33, ExprVec3};

// Stored form:
//   { "_type": "expression", "operation": "add", "name": "", "value": 0,
//     "p1": <expr>, "p2": <expr> }
// A bare number is a constant. Only the first two parameters are stored, and
// `p2` is only read when `p1` is present.
impl DocValue for Expr {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        match value {
            Value::Object(obj) => {
                let operation: String = field_required(obj, path, "operation")?;
                let name: String = field_or(obj, path, "name", String::new())?;
                let v: f64 = field_or(obj, path, "value", 0.0)?;

                let mut parameters = Vec::new();
                if let Some(p1) = member(obj, "p1") {
                    parameters.push(Expr::decode(p1, &path.field("p1"))?);
                    if let Some(p2) = member(obj, "p2") {
                        parameters.push(Expr::decode(p2, &path.field("p2"))?);
                    }
                }

                Expr::from_parts(&operation, name, v, parameters)
                    .map_err(|expected| BindError::shape(path, expected))
            }
            Value::Number(_) => f64::decode(value, path).map(Expr::Const),
            _ => Err(BindError::shape(path, "expression (an object or a number)")),
        }
    }

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("_type".to_owned(), Value::from("expression"));
        obj.insert("operation".to_owned(), Value::from(self.operation()));
        obj.insert("name".to_owned(), Value::from(self.name()));
        obj.insert("value".to_owned(), self.value().encode());

        let params = self.parameters();
        if params.len() > 2 {
            tracing::warn!(
                operation = self.operation(),
                count = params.len(),
                "only the first two parameters of an expression are stored"
            );
        }
        for (key, p) in ["p1", "p2"].into_iter().zip(params) {
            obj.insert(key.to_owned(), p.encode());
        }
        Value::Object(obj)
    }
}

impl DocValue for ExprVec3 {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let items = as_array_of(value, path, 3, "3d expression vector")?;
        Ok(Self::new(
            Expr::decode(&items[0], &path.index(1))?,
            Expr::decode(&items[1], &path.index(2))?,
            Expr::decode(&items[2], &path.index(3))?,
        ))
    }

    fn encode(&self) -> Value {
        Value::Array(self.0.iter().map(DocValue::encode).collect())
    }
}

impl DocValue for ExprMat33 {
    fn decode(value: &Value, path: &DocPath) -> Result<Self, BindError> {
        let rows = as_array_of(value, path, 3, "3d expression matrix")?;
        Ok(Self::new(
            ExprVec3::decode(&rows[0], &path.index(1))?,
            ExprVec3::decode(&rows[1], &path.index(2))?,
            ExprVec3::decode(&rows[2], &path.index(3))?,
        ))
    }

    fn encode(&self) -> Value {
        Value::Array(self.0.iter().map(DocValue::encode).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/expr.rs"]
mod tests;
