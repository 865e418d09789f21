//! Schema element definitions.
//!
//! Every `.proto` construct the traversal engine knows about has one struct
//! here. Composite elements own their children as a `Vec<Visitee>`, so a
//! tree can never share a node between two parents or contain a cycle.
//!
//! Inline option lists on fields (`[deprecated = true]`) are payload, not
//! children: they are reachable through the field but not visited on their
//! own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Position, Visitee};

/// The root of a parsed `.proto` file.
///
/// `Proto` is the entry point of a walk. It is never delivered to a handler
/// itself; only its descendants are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proto {
    /// Name of the file this tree was parsed from.
    pub filename: String,
    /// Top-level elements in source order.
    pub elements: Vec<Visitee>,
}

impl Proto {
    /// Creates an empty file root.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            elements: Vec::new(),
        }
    }
}

/// `syntax = "proto3";`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Syntax {
    pub position: Position,
    pub value: String,
}

impl Syntax {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            value: value.into(),
        }
    }
}

/// `edition = "2023";`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edition {
    pub position: Position,
    pub value: String,
}

impl Edition {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            value: value.into(),
        }
    }
}

/// `package foo.bar;`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub position: Position,
    pub name: String,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
        }
    }
}

/// Import modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    #[default]
    Default,
    Weak,
    Public,
}

/// `import "other.proto";`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Import {
    pub position: Position,
    pub filename: String,
    pub kind: ImportKind,
}

impl Import {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            filename: filename.into(),
            kind: ImportKind::Default,
        }
    }

    /// Creates a `import public` statement.
    pub fn public(filename: impl Into<String>) -> Self {
        Self {
            kind: ImportKind::Public,
            ..Self::new(filename)
        }
    }

    /// Creates a `import weak` statement.
    pub fn weak(filename: impl Into<String>) -> Self {
        Self {
            kind: ImportKind::Weak,
            ..Self::new(filename)
        }
    }
}

/// An option statement or an inline field option.
///
/// `constant` holds the literal exactly as written, e.g. `true`, `"com.foo"`
/// or `{ a: 1 }` for aggregate options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtoOption {
    pub position: Position,
    pub name: String,
    pub constant: String,
    /// True for options written inside `[...]` on a field.
    pub is_embedded: bool,
}

impl ProtoOption {
    pub fn new(name: impl Into<String>, constant: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            constant: constant.into(),
            is_embedded: false,
        }
    }

    /// Creates an inline option as found in a field's `[...]` list.
    pub fn embedded(name: impl Into<String>, constant: impl Into<String>) -> Self {
        Self {
            is_embedded: true,
            ..Self::new(name, constant)
        }
    }
}

/// A comment block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub position: Position,
    /// Comment lines with the comment markers stripped.
    pub lines: Vec<String>,
    /// True for `/* ... */` comments.
    pub c_style: bool,
}

impl Comment {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            position: Position::default(),
            lines: lines.into_iter().map(Into::into).collect(),
            c_style: false,
        }
    }

    /// Returns the lines joined with newlines.
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }
}

/// `message Foo { ... }` or `extend Foo { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub position: Position,
    pub name: String,
    pub is_extend: bool,
    pub elements: Vec<Visitee>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            is_extend: false,
            elements: Vec::new(),
        }
    }

    /// Creates an `extend` block for the named message.
    pub fn extend(name: impl Into<String>) -> Self {
        Self {
            is_extend: true,
            ..Self::new(name)
        }
    }
}

/// `enum Color { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enum {
    pub position: Position,
    pub name: String,
    pub elements: Vec<Visitee>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            elements: Vec::new(),
        }
    }
}

/// `RED = 1 [deprecated = true];`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumField {
    pub position: Position,
    pub name: String,
    pub integer: i32,
    pub options: Vec<ProtoOption>,
}

impl EnumField {
    pub fn new(name: impl Into<String>, integer: i32) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            integer,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: ProtoOption) -> Self {
        self.options.push(option);
        self
    }
}

/// Data shared by every field flavor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub position: Position,
    pub name: String,
    pub type_name: String,
    pub sequence: i32,
    pub options: Vec<ProtoOption>,
}

impl Field {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, sequence: i32) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            type_name: type_name.into(),
            sequence,
            options: Vec::new(),
        }
    }
}

/// A regular message field, e.g. `repeated string tags = 3;`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalField {
    #[serde(flatten)]
    pub field: Field,
    pub repeated: bool,
    pub optional: bool,
    pub required: bool,
}

impl NormalField {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, sequence: i32) -> Self {
        Self {
            field: Field::new(type_name, name, sequence),
            repeated: false,
            optional: false,
            required: false,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_option(mut self, option: ProtoOption) -> Self {
        self.field.options.push(option);
        self
    }
}

/// `map<string, int32> counts = 4;`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapField {
    #[serde(flatten)]
    pub field: Field,
    pub key_type: String,
}

impl MapField {
    pub fn new(
        key_type: impl Into<String>,
        value_type: impl Into<String>,
        name: impl Into<String>,
        sequence: i32,
    ) -> Self {
        Self {
            field: Field::new(value_type, name, sequence),
            key_type: key_type.into(),
        }
    }
}

/// A field declared inside a `oneof` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneofField {
    #[serde(flatten)]
    pub field: Field,
}

impl OneofField {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>, sequence: i32) -> Self {
        Self {
            field: Field::new(type_name, name, sequence),
        }
    }
}

/// `oneof choice { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oneof {
    pub position: Position,
    pub name: String,
    pub elements: Vec<Visitee>,
}

impl Oneof {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            elements: Vec::new(),
        }
    }
}

/// Proto2 `group Result = 1 { ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub position: Position,
    pub name: String,
    pub sequence: i32,
    pub optional: bool,
    pub repeated: bool,
    pub required: bool,
    pub elements: Vec<Visitee>,
}

impl Group {
    pub fn new(name: impl Into<String>, sequence: i32) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            sequence,
            optional: false,
            repeated: false,
            required: false,
            elements: Vec::new(),
        }
    }
}

/// `service Greeter { ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub position: Position,
    pub name: String,
    pub elements: Vec<Visitee>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            elements: Vec::new(),
        }
    }
}

/// `rpc SayHello (HelloRequest) returns (stream HelloReply) { ... }`
///
/// The optional body holds options and comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rpc {
    pub position: Position,
    pub name: String,
    pub request_type: String,
    pub streams_request: bool,
    pub returns_type: String,
    pub streams_returns: bool,
    pub elements: Vec<Visitee>,
}

impl Rpc {
    pub fn new(
        name: impl Into<String>,
        request_type: impl Into<String>,
        returns_type: impl Into<String>,
    ) -> Self {
        Self {
            position: Position::default(),
            name: name.into(),
            request_type: request_type.into(),
            streams_request: false,
            returns_type: returns_type.into(),
            streams_returns: false,
            elements: Vec::new(),
        }
    }

    pub fn streaming_request(mut self) -> Self {
        self.streams_request = true;
        self
    }

    pub fn streaming_returns(mut self) -> Self {
        self.streams_returns = true;
        self
    }
}

/// A tag number range used by `reserved` and `extensions`.
///
/// A single number is stored with `from == to`; `max` marks `to max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    pub from: i32,
    pub to: i32,
    pub max: bool,
}

impl Range {
    pub const fn single(number: i32) -> Self {
        Self {
            from: number,
            to: number,
            max: false,
        }
    }

    pub const fn new(from: i32, to: i32) -> Self {
        Self {
            from,
            to,
            max: false,
        }
    }

    pub const fn to_max(from: i32) -> Self {
        Self {
            from,
            to: 0,
            max: true,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max {
            write!(f, "{} to max", self.from)
        } else if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{} to {}", self.from, self.to)
        }
    }
}

/// `reserved 2, 15, 9 to 11;` or `reserved "foo", "bar";`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reserved {
    pub position: Position,
    pub ranges: Vec<Range>,
    pub field_names: Vec<String>,
}

impl Reserved {
    pub fn ranges(ranges: impl IntoIterator<Item = Range>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn field_names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            field_names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// `extensions 100 to 199;`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extensions {
    pub position: Position,
    pub ranges: Vec<Range>,
}

impl Extensions {
    pub fn new(ranges: impl IntoIterator<Item = Range>) -> Self {
        Self {
            position: Position::default(),
            ranges: ranges.into_iter().collect(),
        }
    }
}

/// Implements `with_position` for nodes that store their position directly.
macro_rules! impl_with_position {
    ($($node:ty),* $(,)?) => {
        $(
            impl $node {
                /// Sets the source position of this node.
                pub fn with_position(mut self, position: Position) -> Self {
                    self.position = position;
                    self
                }
            }
        )*
    };
}

impl_with_position!(
    Syntax,
    Edition,
    Package,
    Import,
    ProtoOption,
    Comment,
    Message,
    Enum,
    EnumField,
    Field,
    Oneof,
    Group,
    Service,
    Rpc,
    Reserved,
    Extensions,
);

/// Implements `with_position` for field flavors wrapping a [`Field`].
macro_rules! impl_field_position {
    ($($node:ty),* $(,)?) => {
        $(
            impl $node {
                /// Sets the source position of this field.
                pub fn with_position(mut self, position: Position) -> Self {
                    self.field.position = position;
                    self
                }
            }
        )*
    };
}

impl_field_position!(NormalField, MapField, OneofField);

/// Implements the child-appending builders for composite nodes.
macro_rules! impl_element_builders {
    ($($node:ty),* $(,)?) => {
        $(
            impl $node {
                /// Appends a child element.
                pub fn with_element(mut self, element: impl Into<Visitee>) -> Self {
                    self.elements.push(element.into());
                    self
                }

                /// Appends several child elements, keeping their order.
                pub fn with_elements<I>(mut self, elements: I) -> Self
                where
                    I: IntoIterator,
                    I::Item: Into<Visitee>,
                {
                    self.elements.extend(elements.into_iter().map(Into::into));
                    self
                }
            }
        )*
    };
}

impl_element_builders!(Proto, Message, Enum, Oneof, Group, Service, Rpc);
