//! The document tree: a [`Node`] is a handle over exactly one of an object,
//! an array, or a scalar [`Value`].
//!
//! Handles share ownership of their container: `Clone` copies the handle,
//! not the tree, and [`Node::at`] returns a handle to the stored child. A
//! mutation made through any handle is observable through every other
//! handle to the same container. That aliasing is the point - fetch a
//! nested node, [`set`](Node::set) it, and the original tree reflects the
//! change without re-insertion.
//!
//! The sharing is `Rc`/`RefCell` based, so a `Node` is single-threaded by
//! construction (`!Send + !Sync`). Do not hold a `Ref` guard from
//! `as_object`/`as_array`/`as_value` across a mutation of the same node;
//! that is a borrow violation and will panic.
//!
//! # Example
//!
//! ```
//! use ljson_core::Node;
//!
//! let node = Node::object([("name", "cat"), ("kind", "smol")]);
//! node.at("name").set("new_cat");
//! assert_eq!(node.at("name").as_string(), "new_cat");
//! ```

use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::{Add, AddAssign};
use std::rc::Rc;

use crate::error::Error;
use crate::value::{Null, Value};

/// Key-unique mapping from string to [`Node`].
///
/// Iteration (and therefore serialization) order is sorted by key; this is
/// a documented contract, not an accident of the backing container.
pub type Object = BTreeMap<String, Node>;

/// Ordered sequence of [`Node`]; duplicates and mixed kinds allowed.
pub type Array = Vec<Node>;

/// The kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Object,
    Array,
    Value,
}

/// Payload behind a node handle. Exactly one alternative is active.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeData {
    Object(Object),
    Array(Array),
    Value(Value),
}

impl NodeData {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            NodeData::Object(_) => "object",
            NodeData::Array(_) => "array",
            NodeData::Value(_) => "value",
        }
    }
}

/// A handle to one node of a document tree.
///
/// Default-constructed nodes are empty objects.
#[derive(Debug, Clone)]
pub struct Node {
    data: Rc<RefCell<NodeData>>,
}

impl Default for Node {
    fn default() -> Self {
        Self::new(NodeType::Object)
    }
}

impl PartialEq for Node {
    /// Structural comparison of the payloads (not handle identity).
    fn eq(&self, other: &Self) -> bool {
        *self.data.borrow() == *other.data.borrow()
    }
}

impl Node {
    /// A new empty node of the given kind (`Value` starts as `Empty`).
    pub fn new(kind: NodeType) -> Self {
        let data = match kind {
            NodeType::Object => NodeData::Object(Object::new()),
            NodeType::Array => NodeData::Array(Array::new()),
            NodeType::Value => NodeData::Value(Value::Empty),
        };
        Self::from_data(data)
    }

    pub(crate) fn from_data(data: NodeData) -> Self {
        Self { data: Rc::new(RefCell::new(data)) }
    }

    /// Build an object node from key/value pairs.
    ///
    /// Later pairs overwrite earlier ones on key collision, like repeated
    /// [`insert`](Self::insert) calls.
    pub fn object<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Node>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Object>();
        Self::from_data(NodeData::Object(map))
    }

    /// Build an array node from a sequence of values.
    pub fn array<V, I>(values: I) -> Self
    where
        V: Into<Node>,
        I: IntoIterator<Item = V>,
    {
        let vec = values.into_iter().map(Into::into).collect::<Array>();
        Self::from_data(NodeData::Array(vec))
    }

    /// The kind of this node.
    pub fn node_type(&self) -> NodeType {
        match &*self.data.borrow() {
            NodeData::Object(_) => NodeType::Object,
            NodeData::Array(_) => NodeType::Array,
            NodeData::Value(_) => NodeType::Value,
        }
    }

    /// Human-readable kind name ("object", "array", "value").
    pub fn type_name(&self) -> &'static str {
        self.data.borrow().kind_name()
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Object(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Array(_))
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(_))
    }

    /// True when the node is a scalar string. False for non-value nodes.
    pub fn is_string(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_string())
    }

    pub fn is_integer(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_integer())
    }

    pub fn is_double(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_double())
    }

    pub fn is_number(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_number())
    }

    pub fn is_boolean(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_boolean())
    }

    pub fn is_null(&self) -> bool {
        matches!(&*self.data.borrow(), NodeData::Value(v) if v.is_null())
    }

    /// Borrow the object container, or `WrongType`.
    pub fn try_as_object(&self) -> Result<Ref<'_, Object>, Error> {
        let data = self.data.borrow();
        if matches!(&*data, NodeData::Object(_)) {
            Ok(Ref::map(data, |d| match d {
                NodeData::Object(map) => map,
                _ => unreachable!(),
            }))
        } else {
            let held = data.kind_name();
            Err(Error::wrong_type(format!("wanted object but node holds {held}")))
        }
    }

    /// Borrow the array container, or `WrongType`.
    pub fn try_as_array(&self) -> Result<Ref<'_, Array>, Error> {
        let data = self.data.borrow();
        if matches!(&*data, NodeData::Array(_)) {
            Ok(Ref::map(data, |d| match d {
                NodeData::Array(vec) => vec,
                _ => unreachable!(),
            }))
        } else {
            let held = data.kind_name();
            Err(Error::wrong_type(format!("wanted array but node holds {held}")))
        }
    }

    /// Borrow the scalar value, or `WrongType`.
    pub fn try_as_value(&self) -> Result<Ref<'_, Value>, Error> {
        let data = self.data.borrow();
        if matches!(&*data, NodeData::Value(_)) {
            Ok(Ref::map(data, |d| match d {
                NodeData::Value(v) => v,
                _ => unreachable!(),
            }))
        } else {
            let held = data.kind_name();
            Err(Error::wrong_type(format!("wanted value but node holds {held}")))
        }
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the node is not an object.
    pub fn as_object(&self) -> Ref<'_, Object> {
        self.try_as_object().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the node is not an array.
    pub fn as_array(&self) -> Ref<'_, Array> {
        self.try_as_array().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message if the node is not a value.
    pub fn as_value(&self) -> Ref<'_, Value> {
        self.try_as_value().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Owned copy of the scalar string, or `WrongType`.
    pub fn try_as_string(&self) -> Result<String, Error> {
        self.try_as_value()?.try_as_string()
    }

    pub fn try_as_integer(&self) -> Result<i64, Error> {
        self.try_as_value()?.try_as_integer()
    }

    pub fn try_as_double(&self) -> Result<f64, Error> {
        self.try_as_value()?.try_as_double()
    }

    pub fn try_as_number(&self) -> Result<f64, Error> {
        self.try_as_value()?.try_as_number()
    }

    pub fn try_as_boolean(&self) -> Result<bool, Error> {
        self.try_as_value()?.try_as_boolean()
    }

    pub fn try_as_null(&self) -> Result<Null, Error> {
        self.try_as_value()?.try_as_null()
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is a string value.
    pub fn as_string(&self) -> String {
        self.try_as_string().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is an integer value.
    pub fn as_integer(&self) -> i64 {
        self.try_as_integer().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is a double value.
    pub fn as_double(&self) -> f64 {
        self.try_as_double().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is a numeric value.
    pub fn as_number(&self) -> f64 {
        self.try_as_number().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is a boolean value.
    pub fn as_boolean(&self) -> bool {
        self.try_as_boolean().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics with a `WrongType` message unless the node is a null value.
    pub fn as_null(&self) -> Null {
        self.try_as_null().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up a child by key (objects) or index (arrays).
    ///
    /// The returned handle aliases the stored child: mutating through it is
    /// visible in this tree.
    ///
    /// Fails with `KeyNotFound` (absent key), `WrongIndex` (out of range),
    /// or `WrongType` (lookup kind does not match the node kind).
    pub fn try_at<I: NodeIndex>(&self, index: I) -> Result<Node, Error> {
        index.lookup(self)
    }

    /// Like [`try_at`](Self::try_at) but panics on failure.
    ///
    /// # Panics
    ///
    /// Panics with the same error `try_at` would return.
    pub fn at<I: NodeIndex>(&self, index: I) -> Node {
        self.try_at(index).unwrap_or_else(|e| panic!("{e}"))
    }

    /// True when this node is an object containing `key`. Never fails:
    /// non-objects report `false`.
    pub fn contains(&self, key: &str) -> bool {
        match &*self.data.borrow() {
            NodeData::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Insert (or overwrite) `key` in this object.
    ///
    /// Accepts any scalar-convertible type, another `Node` (the handle is
    /// stored, so the subtree stays shared), or a native container that
    /// converts to a node. Fails with `WrongType` unless the node is an
    /// object.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Node>) -> Result<(), Error> {
        match &mut *self.data.borrow_mut() {
            NodeData::Object(map) => {
                map.insert(key.into(), value.into());
                Ok(())
            }
            other => Err(Error::wrong_type(format!(
                "insert needs an object but node holds {}",
                other.kind_name()
            ))),
        }
    }

    /// Append a value to this array. Fails with `WrongType` unless the node
    /// is an array.
    pub fn push_back(&self, value: impl Into<Node>) -> Result<(), Error> {
        match &mut *self.data.borrow_mut() {
            NodeData::Array(vec) => {
                vec.push(value.into());
                Ok(())
            }
            other => Err(Error::wrong_type(format!(
                "push_back needs an array but node holds {}",
                other.kind_name()
            ))),
        }
    }

    /// Replace this node's content in place, keeping the handle identity.
    ///
    /// Every alias of this node observes the new content. Changing kind
    /// (object to value, value to array, ...) is legal.
    pub fn set(&self, value: impl Into<Node>) {
        let new = value.into();
        let data = match Rc::try_unwrap(new.data) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        };
        *self.data.borrow_mut() = data;
    }

    /// Concatenate two nodes of the same kind into a new node.
    ///
    /// - object + object: key union; on collision the right-hand side wins
    /// - array + array: elements of `self` followed by elements of `other`
    /// - value + value: numeric addition (integer stays integer, any double
    ///   widens) or string concatenation
    ///
    /// Everything else - mixed kinds, boolean + boolean, null + null - is
    /// `WrongType`. The result shares subtrees with both inputs.
    pub fn try_concat(&self, other: &Node) -> Result<Node, Error> {
        let left = self.data.borrow();
        let right = other.data.borrow();
        match (&*left, &*right) {
            (NodeData::Object(a), NodeData::Object(b)) => {
                let mut map = a.clone();
                for (key, value) in b {
                    map.insert(key.clone(), value.clone());
                }
                Ok(Node::from_data(NodeData::Object(map)))
            }
            (NodeData::Array(a), NodeData::Array(b)) => {
                let mut vec = a.clone();
                vec.extend(b.iter().cloned());
                Ok(Node::from_data(NodeData::Array(vec)))
            }
            (NodeData::Value(a), NodeData::Value(b)) => {
                let value = concat_values(a, b)?;
                Ok(Node::from_data(NodeData::Value(value)))
            }
            (a, b) => Err(Error::wrong_type(format!(
                "cannot concatenate {} with {}",
                a.kind_name(),
                b.kind_name()
            ))),
        }
    }

    pub(crate) fn borrow_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }
}

fn concat_values(a: &Value, b: &Value) -> Result<Value, Error> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x
            .checked_add(*y)
            .map(Value::Integer)
            .ok_or_else(|| Error::wrong_type("integer overflow in concatenation")),
        (Value::Integer(x), Value::Double(y)) => Ok(Value::Double(*x as f64 + y)),
        (Value::Double(x), Value::Integer(y)) => Ok(Value::Double(x + *y as f64)),
        (Value::Double(x), Value::Double(y)) => Ok(Value::Double(x + y)),
        (Value::String(x), Value::String(y)) => {
            let mut s = x.clone();
            s.push_str(y);
            Ok(Value::String(s))
        }
        _ => Err(Error::wrong_type(format!(
            "cannot concatenate {} value with {} value",
            a.type_name(),
            b.type_name()
        ))),
    }
}

/// Concatenation operator; see [`Node::try_concat`].
///
/// # Panics
///
/// Panics with a `WrongType` message when `try_concat` would fail.
impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        self.try_concat(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Add for &Node {
    type Output = Node;

    fn add(self, rhs: &Node) -> Node {
        self.try_concat(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// In-place concatenation; replaces the payload so aliases see the result.
///
/// # Panics
///
/// Panics with a `WrongType` message when `try_concat` would fail.
impl AddAssign<Node> for Node {
    fn add_assign(&mut self, rhs: Node) {
        let merged = self.try_concat(&rhs).unwrap_or_else(|e| panic!("{e}"));
        self.set(merged);
    }
}

// ---------------------------------------------------------------------------
// Lookup keys
// ---------------------------------------------------------------------------

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}

/// A type usable with [`Node::at`]/[`Node::try_at`]: string keys address
/// objects, `usize` indices address arrays. Sealed.
pub trait NodeIndex: private::Sealed {
    #[doc(hidden)]
    fn lookup(&self, node: &Node) -> Result<Node, Error>;
}

impl NodeIndex for str {
    fn lookup(&self, node: &Node) -> Result<Node, Error> {
        let map = node.try_as_object()?;
        map.get(self).cloned().ok_or_else(|| Error::key_not_found(self))
    }
}

impl NodeIndex for String {
    fn lookup(&self, node: &Node) -> Result<Node, Error> {
        self.as_str().lookup(node)
    }
}

impl NodeIndex for usize {
    fn lookup(&self, node: &Node) -> Result<Node, Error> {
        let vec = node.try_as_array()?;
        vec.get(*self).cloned().ok_or_else(|| Error::wrong_index(*self, vec.len()))
    }
}

impl<T: NodeIndex + ?Sized> NodeIndex for &T {
    fn lookup(&self, node: &Node) -> Result<Node, Error> {
        (**self).lookup(node)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from_data(NodeData::Value(value))
    }
}

macro_rules! node_from_scalar {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Node {
            fn from(v: $ty) -> Self {
                Node::from(Value::from(v))
            }
        })*
    };
}

node_from_scalar!(Null, bool, &str, String, f64, f32, i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(values: Vec<T>) -> Self {
        Node::array(values)
    }
}

impl<T: Into<Node>> From<BTreeSet<T>> for Node {
    fn from(values: BTreeSet<T>) -> Self {
        Node::array(values)
    }
}

impl<T: Into<Node>> From<BTreeMap<String, T>> for Node {
    fn from(pairs: BTreeMap<String, T>) -> Self {
        Node::object(pairs)
    }
}

impl<T: Into<Node>> From<HashMap<String, T>> for Node {
    fn from(pairs: HashMap<String, T>) -> Self {
        Node::object(pairs)
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Node::object(iter)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::array(iter)
    }
}
