//! ljson core
//!
//! Embeddable JSON library: an incremental line-driven parser feeding a
//! mutable, strongly-typed document tree.
//!
//! # Architecture
//!
//! - **parser.rs** - character-at-a-time state machine with an explicit
//!   context stack; `feed`/`finish` incremental API plus `parse` and
//!   `parse_file` entry points
//! - **node.rs** - the `Node` handle over shared Object/Array/Value
//!   payloads; accessors, mutators, concatenation
//! - **value.rs** - scalar value types and token classification
//! - **dump.rs** - recursive serializer over a caller-supplied sink
//! - **error.rs** - the closed error taxonomy
//!
//! # Example
//!
//! ```
//! use ljson_core::parse;
//!
//! let node = parse(r#"{"name": "cat", "age": 5, "smol": true}"#).unwrap();
//! assert_eq!(node.at("name").as_string(), "cat");
//!
//! node.at("age").set(8);
//! assert!(node.dump_to_string().contains("\"age\": 8"));
//! ```

pub mod dump;
pub mod error;
pub mod node;
pub mod parser;
pub mod value;

pub use dump::IndentConfig;
pub use error::{Error, ErrorKind};
pub use node::{Array, Node, NodeIndex, NodeType, Object};
pub use parser::{parse, parse_file, Parser};
pub use value::{Null, Value, ValueType};
