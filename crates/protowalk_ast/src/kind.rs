//! Variant tags for schema elements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The variant tag of a [`Visitee`](crate::Visitee).
///
/// This is a fieldless mirror of the `Visitee` enum, useful for filtering,
/// counting and printing nodes without borrowing their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisiteeKind {
    // File-level statements
    /// `syntax = "proto3";`
    Syntax,
    /// `edition = "2023";`
    Edition,
    /// `package foo.bar;`
    Package,
    /// `import "other.proto";`
    Import,
    /// `option java_package = "...";`
    Option,
    /// Comment block attached to nothing in particular.
    Comment,

    // Definitions
    /// Message (or `extend`) definition.
    Message,
    /// Enum definition.
    Enum,
    /// Value inside an enum.
    EnumField,
    /// Oneof block inside a message.
    Oneof,
    /// Field inside a oneof.
    OneofField,
    /// Regular message field.
    NormalField,
    /// `map<K, V>` field.
    MapField,
    /// Proto2 group.
    Group,
    /// `reserved` statement.
    Reserved,
    /// `extensions` statement.
    Extensions,

    // Services
    /// Service definition.
    Service,
    /// RPC method inside a service.
    Rpc,
}

impl VisiteeKind {
    /// Every kind, in declaration order.
    pub const ALL: [VisiteeKind; 18] = [
        VisiteeKind::Syntax,
        VisiteeKind::Edition,
        VisiteeKind::Package,
        VisiteeKind::Import,
        VisiteeKind::Option,
        VisiteeKind::Comment,
        VisiteeKind::Message,
        VisiteeKind::Enum,
        VisiteeKind::EnumField,
        VisiteeKind::Oneof,
        VisiteeKind::OneofField,
        VisiteeKind::NormalField,
        VisiteeKind::MapField,
        VisiteeKind::Group,
        VisiteeKind::Reserved,
        VisiteeKind::Extensions,
        VisiteeKind::Service,
        VisiteeKind::Rpc,
    ];

    /// Returns true if nodes of this kind own child elements.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            VisiteeKind::Message
                | VisiteeKind::Enum
                | VisiteeKind::Oneof
                | VisiteeKind::Group
                | VisiteeKind::Service
                | VisiteeKind::Rpc
        )
    }

    /// Returns true if this kind is one of the field variants.
    #[inline]
    pub const fn is_field(&self) -> bool {
        matches!(
            self,
            VisiteeKind::NormalField
                | VisiteeKind::MapField
                | VisiteeKind::OneofField
                | VisiteeKind::EnumField
        )
    }

    /// Returns the snake_case name used in JSON and CLI output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            VisiteeKind::Syntax => "syntax",
            VisiteeKind::Edition => "edition",
            VisiteeKind::Package => "package",
            VisiteeKind::Import => "import",
            VisiteeKind::Option => "option",
            VisiteeKind::Comment => "comment",
            VisiteeKind::Message => "message",
            VisiteeKind::Enum => "enum",
            VisiteeKind::EnumField => "enum_field",
            VisiteeKind::Oneof => "oneof",
            VisiteeKind::OneofField => "oneof_field",
            VisiteeKind::NormalField => "normal_field",
            VisiteeKind::MapField => "map_field",
            VisiteeKind::Group => "group",
            VisiteeKind::Reserved => "reserved",
            VisiteeKind::Extensions => "extensions",
            VisiteeKind::Service => "service",
            VisiteeKind::Rpc => "rpc",
        }
    }
}

impl fmt::Display for VisiteeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisiteeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        VisiteeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown element kind '{s}'"))
    }
}
