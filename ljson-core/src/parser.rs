//! The incremental parsing state machine and its entry points.
//!
//! The parser consumes one logical line at a time, one character at a time,
//! with no recursion and no backtracking. An explicit stack of grammar
//! contexts carries the nesting state across line boundaries, so a document
//! can be fed piecemeal ([`Parser::feed`]) and completed with
//! [`Parser::finish`]. The convenience entry points [`parse`] and
//! [`parse_file`] drive the same machine.
//!
//! Per character, a fixed-priority chain of handlers runs until one
//! consumes the character; the order matters, because several handlers can
//! match the same character in different contexts (a `}` may close an
//! object, finalize a pending scalar, or be literal text inside a string).
//! If no handler consumes it, the character is a syntax error reporting
//! what the innermost open context was expecting.
//!
//! The first malformed-input condition aborts the parse; there is no
//! recovery. A parser that has returned an error must be discarded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memchr::memchr3_iter;
use phf::phf_set;

use crate::error::{Error, ErrorKind};
use crate::node::{Node, NodeType};
use crate::value::{is_decimal_token, Value};

/// Characters that may legally follow a backslash inside a string value.
/// Unicode escapes (`\u`) are accepted but passed through undecoded.
// TODO: decode \uXXXX sequences instead of passing them through.
static VALID_ESCAPES: phf::Set<char> = phf_set! {
    '"', '\\', 't', 'b', 'f', 'n', 'r', 'u', '/',
};

/// Grammar context markers. The stack of these is exactly the history
/// needed to classify the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// The document's outermost `{` has been seen.
    OpeningBrace,
    /// Inside a nested object.
    Object,
    /// Inside an array.
    Array,
    /// Inside a `"`-quoted key span.
    DoubleQuote,
    /// Inside a `'`-quoted key span.
    SingleQuote,
    /// A `:` has been seen; a value is expected.
    Colon,
    /// Inside a quoted string value.
    StringValue,
    /// A container just closed; only `,`, whitespace or a further close
    /// may follow.
    TrailingSpace,
    /// Transient marker: an explicit flush of the pending scalar.
    FlushValue,
}

/// What the partial key in a frame currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum KeyKind {
    #[default]
    None,
    Simple,
    Object,
    Array,
}

/// Tentative classification of the pending scalar token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TokenKind {
    /// Nothing decided yet; classification happens at flush time.
    #[default]
    None,
    /// The token came from a quoted span.
    String,
    /// A backslash was just seen; the next character must be a legal
    /// escape.
    EscapePending,
}

/// One frame per open object level: the partially accumulated key.
#[derive(Debug, Default)]
struct KeyFrame {
    text: String,
    kind: KeyKind,
}

/// The incremental parser.
///
/// ```
/// use ljson_core::Parser;
///
/// let mut parser = Parser::new();
/// parser.feed("{").unwrap();
/// parser.feed("  \"name\": \"cat\",").unwrap();
/// parser.feed("  \"age\": 5").unwrap();
/// parser.feed("}").unwrap();
/// let node = parser.finish().unwrap();
/// assert_eq!(node.at("age").as_integer(), 5);
/// ```
pub struct Parser {
    root: Node,
    /// Grammar state, innermost last. Each entry remembers the line it
    /// opened on for error reporting.
    contexts: Vec<(Context, usize)>,
    /// Key frames, one per open object level (arrays push none).
    keys: Vec<KeyFrame>,
    /// Handles to the open containers, innermost last.
    nodes: Vec<Node>,
    /// Pending scalar token and its tentative kind.
    token: String,
    token_kind: TokenKind,
    /// Current line, with the logical newline appended.
    line: Vec<char>,
    line_text: String,
    i: usize,
    line_number: usize,
    /// Which quote character opened the current string value.
    string_quote: char,
    /// The document's first `{` has been seen.
    started: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        let root = Node::new(NodeType::Object);
        Self {
            nodes: vec![root.clone()],
            root,
            contexts: Vec::new(),
            keys: vec![KeyFrame { text: String::new(), kind: KeyKind::Simple }],
            token: String::new(),
            token_kind: TokenKind::None,
            line: Vec::new(),
            line_text: String::new(),
            i: 0,
            line_number: 1,
            string_quote: '"',
            started: false,
        }
    }

    /// Parse an in-memory document.
    ///
    /// The text is chunked at newline, comma and closing-brace boundaries
    /// and fed through the line-oriented machine. String values may span
    /// chunk boundaries; a raw line break never enters a string value.
    pub fn parse(text: &str) -> Result<Node, Error> {
        let mut parser = Parser::new();
        for chunk in chunk_statements(text) {
            parser.feed(chunk)?;
        }
        parser.finish()
    }

    /// Parse a file, reading it line by line.
    ///
    /// Open/read failures surface as `FilesystemError` carrying the OS
    /// error text; the handle is closed on every exit path.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Node, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::new(
                ErrorKind::FilesystemError,
                format!("couldn't open '{}': {}", path.display(), err),
            )
        })?;
        let reader = BufReader::new(file);

        let mut parser = Parser::new();
        for line in reader.lines() {
            parser.feed(&line?)?;
        }
        parser.finish()
    }

    /// Feed one logical line (without its newline; the machine supplies
    /// the line terminator itself).
    pub fn feed(&mut self, line: &str) -> Result<(), Error> {
        self.line_text.clear();
        self.line_text.push_str(line);
        self.line = line.chars().collect();
        self.line.push('\n');
        self.i = 0;
        while self.i < self.line.len() {
            self.step()?;
            self.i += 1;
        }
        self.line_number += 1;
        Ok(())
    }

    /// Consume the parser, returning the document root.
    ///
    /// A non-empty context stack means the input ended inside an open
    /// structure; that surfaces as a `ParsingError` naming the structure
    /// and the line it opened on, never as a silently truncated document.
    pub fn finish(self) -> Result<Node, Error> {
        match self.contexts.last() {
            None => Ok(self.root),
            Some(&(context, opened_at)) => Err(Error::parsing(format!(
                "unexpected end of input: {} (opened at line {})",
                unterminated_what(context),
                opened_at,
            ))),
        }
    }

    // -- dispatch ----------------------------------------------------------

    fn step(&mut self) -> Result<(), Error> {
        if self.run_till_end_of_statement() {
            return Ok(());
        }
        let handled = self.handle_empty()?
            || self.handle_quotes()
            || self.handle_key()
            || self.handle_colon()?
            || self.handle_value()?
            || self.handle_object()?
            || self.handle_array()?
            || self.handle_end_statement()?
            || self.handle_open_brace()
            || self.handle_closing_brace()?;
        if handled {
            Ok(())
        } else {
            self.syntax_error()
        }
    }

    #[inline]
    fn cur(&self) -> char {
        self.line[self.i]
    }

    #[inline]
    fn top_context(&self) -> Option<Context> {
        self.contexts.last().map(|&(c, _)| c)
    }

    fn push_context(&mut self, context: Context) {
        self.contexts.push((context, self.line_number));
    }

    /// In a quoted key span (not a string value).
    fn in_quote_span(&self) -> bool {
        matches!(self.top_context(), Some(Context::DoubleQuote | Context::SingleQuote))
    }

    /// The innermost open container is an array.
    fn current_is_array(&self) -> bool {
        self.nodes.last().is_some_and(Node::is_array)
    }

    // -- handlers, in priority order ---------------------------------------

    /// After a container close, a `,` or line end clears the trailing
    /// state and resets the key frame.
    fn run_till_end_of_statement(&mut self) -> bool {
        if self.top_context() != Some(Context::TrailingSpace) {
            return false;
        }
        let c = self.cur();
        if c == ',' || c == '\n' {
            self.contexts.pop();
            self.reset_key_frame();
            true
        } else {
            false
        }
    }

    /// Whitespace: skipped between tokens, literal inside quotes, and a
    /// flush trigger right after an unterminated bare scalar. A carriage
    /// return counts as whitespace so CRLF input parses.
    fn handle_empty(&mut self) -> Result<bool, Error> {
        let c = self.cur();
        if c != ' ' && c != '\t' && c != '\r' {
            return Ok(false);
        }
        if self.contexts.is_empty() {
            return Ok(true);
        }
        if self.in_quote_span() || self.top_context() == Some(Context::StringValue) {
            return Ok(false);
        }
        if self.token_kind == TokenKind::None && !self.token.is_empty() {
            // `5 ` - the space ends the bare token; the flush's lookahead
            // turns `3 5` into an error rather than `35`
            self.flush_value()?;
            return Ok(true);
        }
        Ok(true)
    }

    /// `"` and `'` open and close key spans and open string values. A
    /// span is only closed by the quote kind that opened it. Quotes inside
    /// a string value (closing or literal) belong to the value handler.
    fn handle_quotes(&mut self) -> bool {
        if self.contexts.is_empty() {
            return false;
        }
        let top = self.top_context();
        if top == Some(Context::StringValue) {
            return false;
        }
        let c = self.cur();
        let span = match c {
            '"' if top != Some(Context::SingleQuote) => Context::DoubleQuote,
            '\'' if top != Some(Context::DoubleQuote) => Context::SingleQuote,
            _ => return false,
        };

        if top == Some(span) {
            // closing a key span; an empty key is still a key
            if let Some(frame) = self.keys.last_mut() {
                if frame.text.is_empty() {
                    frame.kind = KeyKind::Simple;
                }
            }
            self.contexts.pop();
            return true;
        }

        match top {
            // a quote in value position opens a string value
            Some(Context::Colon) | Some(Context::Array) => {
                self.push_context(Context::StringValue);
                self.token_kind = TokenKind::String;
                self.string_quote = c;
                true
            }
            // anywhere else: a new key span
            _ => {
                self.push_context(span);
                true
            }
        }
    }

    /// Key accumulation: inside a key span every character except the
    /// line terminator belongs to the key, escapes included, verbatim.
    fn handle_key(&mut self) -> bool {
        if !self.in_quote_span() || self.current_is_array() {
            return false;
        }
        let c = self.cur();
        if let Some(frame) = self.keys.last_mut() {
            if c != '\n' {
                frame.text.push(c);
            }
            return true;
        }
        false
    }

    fn handle_colon(&mut self) -> Result<bool, Error> {
        if self.cur() != ':' {
            return Ok(false);
        }
        if self.contexts.is_empty() || self.nodes.is_empty() {
            return Ok(false);
        }
        if self.in_quote_span() || self.top_context() == Some(Context::StringValue) {
            return Ok(false);
        }
        if self.top_context() == Some(Context::Colon) {
            let key = self.keys.last().map(|f| f.text.as_str()).unwrap_or("");
            return Err(Error::parsing(format!(
                "two consecutive colons at line {}, key: '{}', val: '{}', line: '{}'",
                self.line_number, key, self.token, self.line_text,
            )));
        }
        self.push_context(Context::Colon);
        Ok(true)
    }

    /// Scalar accumulation, in two regimes: inside a string value
    /// (everything is literal except escapes and the closing quote), and
    /// bare tokens after a `:` or inside an array.
    fn handle_value(&mut self) -> Result<bool, Error> {
        if self.contexts.is_empty() || self.nodes.is_empty() {
            return Ok(false);
        }
        let c = self.cur();
        let top = self.top_context();
        let in_array = self.current_is_array();

        if top == Some(Context::StringValue) {
            if self.token_kind == TokenKind::EscapePending {
                if !VALID_ESCAPES.contains(&c) {
                    return Err(Error::parsing(format!(
                        "escape sequence is incorrect. expected [\", \\, t, b, f, n, r, u, /] \
                         found: '{}'\nline: '{}'",
                        c.escape_debug(),
                        self.line_text,
                    )));
                }
                self.token.push(c);
                self.token_kind = TokenKind::String;
                return Ok(true);
            }
            if !in_array {
                self.mark_simple_key();
            }
            if c == self.string_quote {
                // closing quote: finalize the string now, not at the
                // next delimiter
                self.contexts.pop();
                self.flush_value()?;
            } else if c == '\\' {
                self.token.push(c);
                self.token_kind = TokenKind::EscapePending;
            } else if c == '\n' {
                // a line break never enters a string value; the string
                // continues on the next chunk
            } else {
                self.token.push(c);
            }
            return Ok(true);
        }

        // bare token after ':' or as an array element
        if top != Some(Context::Colon) && !in_array {
            return Ok(false);
        }
        if matches!(c, ',' | '\n' | '{' | '}' | '[' | ']' | ' ' | '\t') {
            return Ok(false);
        }
        if !in_array {
            self.mark_simple_key();
        }
        self.token.push(c);
        Ok(true)
    }

    /// `{` opens a nested object (as an array element or the current
    /// key's value); `}` finalizes any pending scalar and closes the
    /// innermost object.
    fn handle_object(&mut self) -> Result<bool, Error> {
        match self.cur() {
            '{' => {
                if self.contexts.is_empty() || self.nodes.is_empty() {
                    return Ok(false);
                }
                if !self.token.is_empty() || self.token_kind != TokenKind::None {
                    return Ok(false); // `5{` is not a value
                }
                let child = Node::new(NodeType::Object);
                self.attach_child(child.clone())?;
                self.nodes.push(child);
                self.keys.push(KeyFrame { text: String::new(), kind: KeyKind::Simple });
                self.push_context(Context::Object);
                Ok(true)
            }
            '}' => {
                if self.contexts.is_empty() {
                    return Ok(false);
                }
                // `{"a": 5}` - the close is the value's terminator
                if !self.token.is_empty() || self.token_kind != TokenKind::None {
                    self.flush_value()?;
                }
                let effective = match self.top_context() {
                    Some(Context::TrailingSpace) => {
                        self.contexts.get(self.contexts.len().wrapping_sub(2)).map(|&(c, _)| c)
                    }
                    other => other,
                };
                match effective {
                    Some(Context::Object) => {
                        if self.top_context() == Some(Context::TrailingSpace) {
                            self.contexts.pop();
                        }
                        self.contexts.pop();
                        self.keys.pop();
                        self.nodes.pop();
                        if self.top_context() == Some(Context::Colon) {
                            self.contexts.pop();
                        }
                        self.reset_key_frame();
                        self.push_context(Context::TrailingSpace);
                        Ok(true)
                    }
                    Some(Context::OpeningBrace) => {
                        if self.top_context() == Some(Context::TrailingSpace) {
                            self.contexts.pop();
                        }
                        self.contexts.pop();
                        self.keys.pop();
                        self.nodes.pop();
                        self.push_context(Context::TrailingSpace);
                        Ok(true)
                    }
                    _ => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }

    /// `[`/`]`, symmetric to the object handlers; arrays nest inside both
    /// objects and other arrays and push no per-element key frame.
    fn handle_array(&mut self) -> Result<bool, Error> {
        match self.cur() {
            '[' => {
                if self.contexts.is_empty() || self.nodes.is_empty() {
                    return Ok(false);
                }
                if !self.token.is_empty() || self.token_kind != TokenKind::None {
                    return Ok(false);
                }
                let child = Node::new(NodeType::Array);
                let into_array = self.current_is_array();
                self.attach_child(child.clone())?;
                if !into_array {
                    if let Some(frame) = self.keys.last_mut() {
                        frame.kind = KeyKind::Array;
                    }
                }
                self.nodes.push(child);
                self.push_context(Context::Array);
                Ok(true)
            }
            ']' => {
                if self.contexts.is_empty() {
                    return Ok(false);
                }
                if !self.token.is_empty() || self.token_kind != TokenKind::None {
                    self.flush_value()?;
                }
                let effective = match self.top_context() {
                    Some(Context::TrailingSpace) => {
                        self.contexts.get(self.contexts.len().wrapping_sub(2)).map(|&(c, _)| c)
                    }
                    other => other,
                };
                if effective != Some(Context::Array) {
                    return Ok(false);
                }
                if self.top_context() == Some(Context::TrailingSpace) {
                    self.contexts.pop();
                }
                self.contexts.pop();
                self.nodes.pop();
                if self.top_context() == Some(Context::Colon) {
                    self.contexts.pop();
                }
                self.reset_key_frame();
                self.push_context(Context::TrailingSpace);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// End-of-statement: `,`, the end of the buffered line, or an explicit
    /// flush marker finalizes the pending scalar into the current
    /// container.
    fn handle_end_statement(&mut self) -> Result<bool, Error> {
        if !self.is_end_statement() || !self.there_is_a_value() {
            return Ok(false);
        }
        if self.top_context() == Some(Context::FlushValue) {
            self.contexts.pop();
        }

        let raw = std::mem::take(&mut self.token);
        let kind = std::mem::take(&mut self.token_kind);
        let quoted = kind == TokenKind::String;

        let value = if !quoted && raw == "null" {
            Value::Null
        } else if !quoted && (raw == "true" || raw == "false") {
            Value::Bool(raw == "true")
        } else if !quoted && is_decimal_token(&raw) {
            if self.embedded_space_follows() {
                return Err(Error::parsing_wrong_type(format!(
                    "type error: '{}', in line: '{}'",
                    raw, self.line_text,
                )));
            }
            if raw.contains('.') {
                raw.parse::<f64>().map(Value::Double).map_err(|_| {
                    Error::parsing_wrong_type(format!(
                        "bad number: '{}', in line: '{}'",
                        raw, self.line_text,
                    ))
                })?
            } else {
                raw.parse::<i64>().map(Value::Integer).map_err(|_| {
                    Error::parsing_wrong_type(format!(
                        "integer out of range: '{}', in line: '{}'",
                        raw, self.line_text,
                    ))
                })?
            }
        } else if !quoted && raw.is_empty() {
            // no value yet: blank statement, trailing comma
            return Ok(true);
        } else if !quoted {
            return Err(Error::parsing_wrong_type(format!(
                "unknown type: '{}', in line: '{}'",
                raw, self.line_text,
            )));
        } else {
            Value::String(raw)
        };

        let container = self
            .nodes
            .last()
            .cloned()
            .ok_or_else(|| self.internal_error("no open container"))?;

        if container.is_array() {
            container
                .push_back(Node::from(value))
                .map_err(|_| self.internal_error("adding value to array"))?;
            // the array context stays open until its ']'
            return Ok(true);
        }

        let frame = self.keys.last().ok_or_else(|| self.internal_error("no key frame"))?;
        if frame.kind != KeyKind::Simple {
            return Err(self.internal_error("adding value without a key"));
        }
        let key = frame.text.clone();
        container
            .insert(key, Node::from(value))
            .map_err(|_| self.internal_error("adding value to object"))?;

        self.reset_key_frame();
        self.contexts.pop(); // the colon this value answered
        Ok(true)
    }

    /// The document's first `{`.
    fn handle_open_brace(&mut self) -> bool {
        if self.cur() == '{' && self.contexts.is_empty() && !self.started {
            self.started = true;
            self.push_context(Context::OpeningBrace);
            true
        } else {
            false
        }
    }

    /// A `}` no other handler accepted is structurally wrong.
    fn handle_closing_brace(&mut self) -> Result<bool, Error> {
        if self.cur() != '}' {
            return Ok(false);
        }
        if self.contexts.is_empty() {
            return Err(Error::parsing(format!(
                "extra closing bracket at line {}",
                self.line_number,
            )));
        }
        Err(Error::parsing(format!(
            "syntax error: line: '{}'\n[error]: {}",
            self.line_text,
            self.expected_found(),
        )))
    }

    /// Final fallback: unconsumed characters are syntax errors, except
    /// bare statement terminators, which are benign.
    fn syntax_error(&self) -> Result<(), Error> {
        if self.is_end_statement() {
            return Ok(());
        }
        Err(Error::parsing(format!(
            "syntax error: line: '{}'\n[error]: {}",
            self.line_text,
            self.expected_found(),
        )))
    }

    // -- shared machinery --------------------------------------------------

    fn is_end_statement(&self) -> bool {
        self.top_context() == Some(Context::FlushValue) || matches!(self.cur(), ',' | '\n')
    }

    fn there_is_a_value(&self) -> bool {
        match self.top_context() {
            Some(Context::Colon) | Some(Context::FlushValue) => true,
            None => false,
            _ => self.current_is_array(),
        }
    }

    /// Force finalization of the pending scalar from a non-delimiter
    /// position (whitespace after a bare token, a closing bracket).
    fn flush_value(&mut self) -> Result<(), Error> {
        self.push_context(Context::FlushValue);
        self.handle_end_statement().map(|_| ())
    }

    /// Lookahead from the cursor: whitespace inside what would otherwise
    /// be one numeric token (`3 5`) is an error; whitespace running into a
    /// delimiter (`5 ,`, `5 }`) is not.
    fn embedded_space_follows(&self) -> bool {
        let mut seen_space = false;
        for &c in &self.line[self.i..] {
            match c {
                ' ' | '\t' | '\r' => seen_space = true,
                ',' | '\n' | '}' | ']' => return false,
                _ if seen_space => return true,
                _ => {}
            }
        }
        false
    }

    fn attach_child(&mut self, child: Node) -> Result<(), Error> {
        let parent = self
            .nodes
            .last()
            .cloned()
            .ok_or_else(|| self.internal_error("no open container"))?;
        if parent.is_array() {
            parent
                .push_back(child)
                .map_err(|_| self.internal_error("adding container to array"))
        } else {
            let key = self
                .keys
                .last()
                .map(|f| f.text.clone())
                .ok_or_else(|| self.internal_error("no key frame"))?;
            parent
                .insert(key, child)
                .map_err(|_| self.internal_error("adding container to object"))
        }
    }

    fn mark_simple_key(&mut self) {
        if let Some(frame) = self.keys.last_mut() {
            frame.kind = KeyKind::Simple;
        }
    }

    fn reset_key_frame(&mut self) {
        if let Some(frame) = self.keys.last_mut() {
            frame.text.clear();
            frame.kind = KeyKind::None;
        }
    }

    fn internal_error(&self, what: &str) -> Error {
        Error::parsing(format!(
            "internal parsing error: [{}] at line {}",
            what, self.line_number,
        ))
    }

    /// "expected X but found Y", with X derived from the innermost open
    /// context.
    fn expected_found(&self) -> String {
        let found = self.cur().escape_debug();
        match self.top_context() {
            None if !self.started => format!("expected '{{' but found '{found}'"),
            None => format!("expected end of input but found '{found}'"),
            Some(Context::Array) => format!("expected 'array values' but found '{found}'"),
            Some(Context::Object) => {
                format!("expected 'object key/value pairs' but found '{found}'")
            }
            Some(Context::OpeningBrace) => {
                format!("expected [EOF, key, array, object] but found '{found}'")
            }
            Some(Context::Colon) => format!("expected 'value' but found '{found}'"),
            Some(Context::StringValue) => format!("expected 'string value' but found '{found}'"),
            Some(Context::DoubleQuote) | Some(Context::SingleQuote) => {
                format!("expected [string value, quote] but found '{found}'")
            }
            Some(Context::TrailingSpace) if self.nodes.is_empty() => {
                format!("expected end of input but found '{found}'")
            }
            Some(Context::TrailingSpace) => {
                format!("expected [',', end of statement] but found '{found}'")
            }
            _ => format!("unexpected syntax: found '{found}'"),
        }
    }
}

fn unterminated_what(context: Context) -> &'static str {
    match context {
        Context::OpeningBrace => "the outermost object is never closed",
        Context::Object => "an object is never closed",
        Context::Array => "an array is never closed",
        Context::DoubleQuote | Context::SingleQuote => "a quoted key is never closed",
        Context::StringValue => "a string value is never closed",
        Context::Colon => "a key has no value",
        Context::TrailingSpace => "trailing content after a closed container",
        Context::FlushValue => "a value flush is pending",
    }
}

/// Split an in-memory document into logical lines for the machine:
/// after every newline, after every comma, and before every closing
/// brace. Boundaries inside string literals are harmless - the machine
/// treats the synthetic line break as a continuation of the string.
fn chunk_statements(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;
    for pos in memchr3_iter(b'\n', b',', b'}', bytes) {
        match bytes[pos] {
            b'\n' => {
                chunks.push(&text[start..pos]);
                start = pos + 1;
            }
            b',' => {
                chunks.push(&text[start..=pos]);
                start = pos + 1;
            }
            _ => {
                // closing brace starts its own chunk so the pending
                // statement ends at a line boundary first
                if pos > start {
                    chunks.push(&text[start..pos]);
                }
                start = pos;
            }
        }
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Parse an in-memory JSON document. See [`Parser::parse`].
pub fn parse(text: &str) -> Result<Node, Error> {
    Parser::parse(text)
}

/// Parse a JSON file. See [`Parser::parse_file`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Node, Error> {
    Parser::parse_file(path)
}
