//! Serialization: a recursive walk over a [`Node`] emitting formatted text
//! through a caller-supplied sink.
//!
//! Objects emit their keys in container iteration order (sorted), arrays in
//! sequence order. String values are quoted with their content passed
//! through verbatim - escape sequences that survived parsing are not
//! re-escaped, so raw escaped text round-trips byte for byte. Trailing
//! commas are never emitted.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, ErrorKind};
use crate::node::{Node, NodeData};
use crate::value::Value;

/// Indentation: a pad character repeated `width` times per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentConfig {
    pub pad: char,
    pub width: usize,
}

impl Default for IndentConfig {
    /// Four spaces.
    fn default() -> Self {
        Self { pad: ' ', width: 4 }
    }
}

impl IndentConfig {
    pub fn new(pad: char, width: usize) -> Self {
        Self { pad, width }
    }

    fn padding(&self, count: usize) -> String {
        std::iter::repeat(self.pad).take(count).collect()
    }
}

impl Node {
    /// Serialize this node through `out`, one text fragment at a time.
    pub fn dump<F: FnMut(&str)>(&self, out: &mut F, indent: &IndentConfig) {
        self.dump_at(out, indent, 0);
    }

    fn dump_at<F: FnMut(&str)>(&self, out: &mut F, indent: &IndentConfig, depth: usize) {
        match &*self.borrow_data() {
            NodeData::Object(map) => {
                out("{\n");
                let mut remaining = map.len();
                for (key, value) in map {
                    out(&format!("{}\"{}\": ", indent.padding(depth + indent.width), key));
                    value.dump_at(out, indent, depth + indent.width);
                    remaining -= 1;
                    if remaining != 0 {
                        out(",");
                    }
                    out("\n");
                }
                out(&format!("{}}}", indent.padding(depth)));
            }
            NodeData::Array(vec) => {
                out("[\n");
                let mut remaining = vec.len();
                for value in vec {
                    out(&indent.padding(depth + indent.width));
                    value.dump_at(out, indent, depth + indent.width);
                    remaining -= 1;
                    if remaining != 0 {
                        out(",");
                    }
                    out("\n");
                }
                out(&format!("{}]", indent.padding(depth)));
            }
            NodeData::Value(value) => match value {
                Value::String(s) => out(&format!("\"{s}\"")),
                other => out(&other.stringify()),
            },
        }
    }

    /// Serialize to a `String` with the default four-space indent.
    pub fn dump_to_string(&self) -> String {
        self.dump_to_string_with(&IndentConfig::default())
    }

    pub fn dump_to_string_with(&self, indent: &IndentConfig) -> String {
        let mut text = String::new();
        self.dump(&mut |fragment| text.push_str(fragment), indent);
        text
    }

    /// Serialize to stdout with the default four-space indent.
    pub fn dump_to_stdout(&self) {
        self.dump_to_stdout_with(&IndentConfig::default());
    }

    pub fn dump_to_stdout_with(&self, indent: &IndentConfig) {
        print!("{}", self.dump_to_string_with(indent));
    }

    /// Serialize into a file with the default four-space indent.
    ///
    /// Open/write failures surface as `FilesystemError` carrying the OS
    /// error text; the file is closed on every exit path.
    pub fn dump_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.dump_to_file_with(path, &IndentConfig::default())
    }

    pub fn dump_to_file_with(
        &self,
        path: impl AsRef<Path>,
        indent: &IndentConfig,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        fs::write(path, self.dump_to_string_with(indent)).map_err(|err| {
            Error::new(
                ErrorKind::FilesystemError,
                format!("couldn't write '{}': {}", path.display(), err),
            )
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump_to_string())
    }
}
