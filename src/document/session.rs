use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::document::codec::DocValue;
use crate::document::path::{BindError, DocPath, PathElem};
use crate::expression::expr::VarEnv;
use crate::foundation::error::PuppeteerResult;

/// A shared model document.
///
/// Clones (and every [`DocNode`] derived from them) observe the same tree;
/// the tree is released when the last of them is dropped. Each accessor
/// borrows the tree only for the duration of the call.
#[derive(Clone, Debug)]
pub struct Document {
    root: Rc<RefCell<Value>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document (an empty mapping).
    pub fn new() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// Document owning `value` as its root.
    pub fn from_value(value: Value) -> Self {
        Self {
            root: Rc::new(RefCell::new(value)),
        }
    }

    /// Parse document text.
    pub fn from_json_str(text: &str) -> PuppeteerResult<Self> {
        Ok(Self::from_value(serde_json::from_str(text)?))
    }

    /// Read and parse a document file.
    #[tracing::instrument]
    pub fn load(path: &Path) -> PuppeteerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Document text with stable (sorted) key order.
    pub fn to_pretty_string(&self) -> PuppeteerResult<String> {
        Ok(serde_json::to_string_pretty(&*self.root.borrow())?)
    }

    /// Write [`Document::to_pretty_string`] to `path`.
    pub fn save(&self, path: &Path) -> PuppeteerResult<()> {
        let mut text = self.to_pretty_string()?;
        text.push('\n');
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Copy of the whole tree.
    pub fn snapshot(&self) -> Value {
        self.root.borrow().clone()
    }

    /// Number of live handles sharing this document.
    pub fn session_count(&self) -> usize {
        Rc::strong_count(&self.root)
    }

    /// Node addressing the root.
    pub fn root(&self) -> DocNode {
        DocNode {
            doc: self.clone(),
            path: DocPath::root(),
        }
    }

    /// Shortcut for `root().field(key)`.
    pub fn field(&self, key: impl Into<String>) -> DocNode {
        self.root().field(key)
    }

    /// Refresh the snapshot value of every stored variable expression whose
    /// name appears in `env`. Returns how many leaves changed value.
    pub fn update_variables(&self, env: &VarEnv) -> usize {
        let mut root = self.root.borrow_mut();
        let updated = update_vars_in(&mut root, env);
        tracing::debug!(updated, "refreshed expression variables");
        updated
    }
}

fn update_vars_in(value: &mut Value, env: &VarEnv) -> usize {
    match value {
        Value::Object(obj) => {
            let mut n = 0;
            let is_var = obj.get("operation").and_then(Value::as_str) == Some("var");
            if is_var {
                let new_value = obj
                    .get("name")
                    .and_then(Value::as_str)
                    .and_then(|name| env.get(name))
                    .copied();
                if let Some(v) = new_value {
                    let stored = obj
                        .get("value")
                        .and_then(|old| f64::decode(old, &DocPath::root()).ok());
                    if stored.map(f64::to_bits) != Some(v.to_bits()) {
                        n += 1;
                    }
                    obj.insert("value".to_owned(), v.encode());
                }
            }
            n + obj.values_mut().map(|v| update_vars_in(v, env)).sum::<usize>()
        }
        Value::Array(items) => items.iter_mut().map(|v| update_vars_in(v, env)).sum(),
        _ => 0,
    }
}

/// Address of one node inside a [`Document`].
///
/// Navigation is free: it only extends the path. The node itself may or may
/// not exist.
#[derive(Clone, Debug)]
pub struct DocNode {
    doc: Document,
    path: DocPath,
}

impl DocNode {
    /// Mapping entry `key` below this node.
    pub fn field(&self, key: impl Into<String>) -> DocNode {
        DocNode {
            doc: self.doc.clone(),
            path: self.path.field(key),
        }
    }

    /// Array element `i` below this node, counting from 1.
    pub fn index(&self, i: usize) -> DocNode {
        DocNode {
            doc: self.doc.clone(),
            path: self.path.index(i),
        }
    }

    /// Location of this node.
    pub fn path(&self) -> &DocPath {
        &self.path
    }

    /// Document this node belongs to.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Whether a non-null value is stored here.
    pub fn exists(&self) -> bool {
        lookup(&self.doc.root.borrow(), &self.path).is_some()
    }

    /// Array length of this node; 0 when absent or not an array.
    pub fn len(&self) -> usize {
        lookup(&self.doc.root.borrow(), &self.path)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys of this node when it is a mapping, sorted.
    pub fn keys(&self) -> Vec<String> {
        lookup(&self.doc.root.borrow(), &self.path)
            .and_then(Value::as_object)
            .map(|obj| obj.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Decode the value stored here, or return `default` when there is none.
    ///
    /// A stored value of the wrong shape is an error naming this node's path
    /// (or the path of the offending descendant).
    pub fn get_or_default<T: DocValue>(&self, default: T) -> Result<T, BindError> {
        let root = self.doc.root.borrow();
        match lookup(&root, &self.path) {
            Some(v) => T::decode_over(default, v, &self.path),
            None => Ok(default),
        }
    }

    /// Decode the value stored here; absence is an error.
    pub fn get<T: DocValue>(&self) -> Result<T, BindError> {
        let root = self.doc.root.borrow();
        match lookup(&root, &self.path) {
            Some(v) => T::decode(v, &self.path),
            None => Err(BindError::missing(&self.path)),
        }
    }

    /// Replace whatever is stored here with the encoding of `value`,
    /// creating missing parents along the way.
    ///
    /// Arrays are padded with `null` up to the written position; a position
    /// more than 1024 past the current end is a shape error.
    pub fn set<T: DocValue>(&self, value: &T) -> Result<(), BindError> {
        let encoded = value.encode();
        let mut root = self.doc.root.borrow_mut();
        let slot = lookup_or_create(&mut root, &self.path)?;
        *slot = encoded;
        Ok(())
    }

    /// Remove the value stored here. Array elements become `null` so the
    /// positions of their siblings do not shift.
    pub fn clear(&self) {
        let mut root = self.doc.root.borrow_mut();
        if let Some(slot) = lookup_mut(&mut root, &self.path) {
            *slot = Value::Null;
        }
    }
}

fn step<'v>(value: &'v Value, elem: &PathElem) -> Option<&'v Value> {
    match (value, elem) {
        (Value::Object(obj), PathElem::Field(key)) => obj.get(key),
        (Value::Object(obj), PathElem::Index(i)) => obj.get(&i.to_string()),
        (Value::Array(items), PathElem::Index(i)) => i.checked_sub(1).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn lookup<'v>(root: &'v Value, path: &DocPath) -> Option<&'v Value> {
    let mut cur = root;
    for elem in path.elems() {
        cur = step(cur, elem)?;
    }
    (!cur.is_null()).then_some(cur)
}

fn lookup_mut<'v>(root: &'v mut Value, path: &DocPath) -> Option<&'v mut Value> {
    let mut cur = root;
    for elem in path.elems() {
        cur = match (cur, elem) {
            (Value::Object(obj), PathElem::Field(key)) => obj.get_mut(key)?,
            (Value::Object(obj), PathElem::Index(i)) => obj.get_mut(&i.to_string())?,
            (Value::Array(items), PathElem::Index(i)) => items.get_mut(i.checked_sub(1)?)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// How many `null` slots a single write may append to an array.
pub(crate) const MAX_ARRAY_GAP: usize = 1024;

fn lookup_or_create<'v>(root: &'v mut Value, path: &DocPath) -> Result<&'v mut Value, BindError> {
    let mut cur = root;
    for (depth, elem) in path.elems().iter().enumerate() {
        if cur.is_null() {
            *cur = match elem {
                PathElem::Field(_) => Value::Object(Map::new()),
                PathElem::Index(_) => Value::Array(Vec::new()),
            };
        }
        cur = match (cur, elem) {
            (Value::Object(obj), PathElem::Field(key)) => {
                obj.entry(key.clone()).or_insert(Value::Null)
            }
            (Value::Object(obj), PathElem::Index(i)) => {
                obj.entry(i.to_string()).or_insert(Value::Null)
            }
            (Value::Array(items), PathElem::Index(i)) => {
                if *i == 0 {
                    return Err(BindError::shape(
                        &path.prefix(depth + 1),
                        "array index starting at 1",
                    ));
                }
                if *i > items.len() + MAX_ARRAY_GAP {
                    return Err(BindError::shape(
                        &path.prefix(depth + 1),
                        format!(
                            "array index at most {} past the current length {}",
                            MAX_ARRAY_GAP,
                            items.len()
                        ),
                    ));
                }
                if items.len() < *i {
                    items.resize(*i, Value::Null);
                }
                &mut items[*i - 1]
            }
            _ => return Err(BindError::NotAContainer {
                path: path.prefix(depth),
            }),
        };
    }
    Ok(cur)
}

#[cfg(test)]
#[path = "../../tests/unit/document/session.rs"]
mod tests;
