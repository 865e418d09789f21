//! The `Visitee` sum type.

use serde::{Deserialize, Serialize};

use crate::node::{
    Comment, Edition, Enum, EnumField, Extensions, Group, Import, MapField, Message, NormalField,
    Oneof, OneofField, Package, ProtoOption, Reserved, Rpc, Service, Syntax,
};
use crate::visitor::Visitor;
use crate::{ElementContainer, Position, VisiteeKind};

/// Any schema element that can be delivered to a handler during a walk.
///
/// The set of variants is closed: handlers and adapters discriminate with a
/// `match` rather than a runtime type probe. In JSON, elements are tagged
/// with a `type` field holding the [`VisiteeKind`] name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Visitee {
    Syntax(Syntax),
    Edition(Edition),
    Package(Package),
    Import(Import),
    Option(ProtoOption),
    Comment(Comment),
    Message(Message),
    Enum(Enum),
    EnumField(EnumField),
    Oneof(Oneof),
    OneofField(OneofField),
    NormalField(NormalField),
    MapField(MapField),
    Group(Group),
    Reserved(Reserved),
    Extensions(Extensions),
    Service(Service),
    Rpc(Rpc),
}

/// Generates `From<Node> for Visitee` and the narrowing accessors.
macro_rules! visitee_variants {
    ($($variant:ident($node:ty) => $as_fn:ident),* $(,)?) => {
        $(
            impl From<$node> for Visitee {
                #[inline]
                fn from(node: $node) -> Self {
                    Visitee::$variant(node)
                }
            }
        )*

        impl Visitee {
            /// Returns the variant tag of this element.
            pub const fn kind(&self) -> VisiteeKind {
                match self {
                    $(Visitee::$variant(_) => VisiteeKind::$variant,)*
                }
            }

            $(
                #[doc = concat!("Returns the inner `", stringify!($node), "` if this is a `", stringify!($variant), "`.")]
                #[inline]
                pub fn $as_fn(&self) -> Option<&$node> {
                    match self {
                        Visitee::$variant(node) => Some(node),
                        _ => None,
                    }
                }
            )*
        }
    };
}

visitee_variants! {
    Syntax(Syntax) => as_syntax,
    Edition(Edition) => as_edition,
    Package(Package) => as_package,
    Import(Import) => as_import,
    Option(ProtoOption) => as_option,
    Comment(Comment) => as_comment,
    Message(Message) => as_message,
    Enum(Enum) => as_enum,
    EnumField(EnumField) => as_enum_field,
    Oneof(Oneof) => as_oneof,
    OneofField(OneofField) => as_oneof_field,
    NormalField(NormalField) => as_normal_field,
    MapField(MapField) => as_map_field,
    Group(Group) => as_group,
    Reserved(Reserved) => as_reserved,
    Extensions(Extensions) => as_extensions,
    Service(Service) => as_service,
    Rpc(Rpc) => as_rpc,
}

impl Visitee {
    /// Returns the ordered children of a composite element.
    ///
    /// `Some` (possibly empty) for containers, `None` for leaves.
    pub fn elements(&self) -> Option<&[Visitee]> {
        match self {
            Visitee::Message(node) => Some(&node.elements),
            Visitee::Enum(node) => Some(&node.elements),
            Visitee::Oneof(node) => Some(&node.elements),
            Visitee::Group(node) => Some(&node.elements),
            Visitee::Service(node) => Some(&node.elements),
            Visitee::Rpc(node) => Some(&node.elements),
            Visitee::Syntax(_)
            | Visitee::Edition(_)
            | Visitee::Package(_)
            | Visitee::Import(_)
            | Visitee::Option(_)
            | Visitee::Comment(_)
            | Visitee::EnumField(_)
            | Visitee::OneofField(_)
            | Visitee::NormalField(_)
            | Visitee::MapField(_)
            | Visitee::Reserved(_)
            | Visitee::Extensions(_) => None,
        }
    }

    /// Returns this element as a container, if it is one.
    pub fn as_container(&self) -> Option<&dyn ElementContainer> {
        match self {
            Visitee::Message(node) => Some(node),
            Visitee::Enum(node) => Some(node),
            Visitee::Oneof(node) => Some(node),
            Visitee::Group(node) => Some(node),
            Visitee::Service(node) => Some(node),
            Visitee::Rpc(node) => Some(node),
            _ => None,
        }
    }

    /// Returns true if this element owns children.
    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns the declared name of the element, if it has one.
    ///
    /// Options report their option name, imports their file name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Visitee::Package(node) => Some(&node.name),
            Visitee::Import(node) => Some(&node.filename),
            Visitee::Option(node) => Some(&node.name),
            Visitee::Message(node) => Some(&node.name),
            Visitee::Enum(node) => Some(&node.name),
            Visitee::EnumField(node) => Some(&node.name),
            Visitee::Oneof(node) => Some(&node.name),
            Visitee::OneofField(node) => Some(&node.field.name),
            Visitee::NormalField(node) => Some(&node.field.name),
            Visitee::MapField(node) => Some(&node.field.name),
            Visitee::Group(node) => Some(&node.name),
            Visitee::Service(node) => Some(&node.name),
            Visitee::Rpc(node) => Some(&node.name),
            Visitee::Syntax(_)
            | Visitee::Edition(_)
            | Visitee::Comment(_)
            | Visitee::Reserved(_)
            | Visitee::Extensions(_) => None,
        }
    }

    /// Returns the source position of the element.
    pub fn position(&self) -> Position {
        match self {
            Visitee::Syntax(node) => node.position,
            Visitee::Edition(node) => node.position,
            Visitee::Package(node) => node.position,
            Visitee::Import(node) => node.position,
            Visitee::Option(node) => node.position,
            Visitee::Comment(node) => node.position,
            Visitee::Message(node) => node.position,
            Visitee::Enum(node) => node.position,
            Visitee::EnumField(node) => node.position,
            Visitee::Oneof(node) => node.position,
            Visitee::OneofField(node) => node.field.position,
            Visitee::NormalField(node) => node.field.position,
            Visitee::MapField(node) => node.field.position,
            Visitee::Group(node) => node.position,
            Visitee::Reserved(node) => node.position,
            Visitee::Extensions(node) => node.position,
            Visitee::Service(node) => node.position,
            Visitee::Rpc(node) => node.position,
        }
    }

    /// Dispatches to the `visit_*` method of `visitor` matching this variant.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Visitee::Syntax(node) => visitor.visit_syntax(node),
            Visitee::Edition(node) => visitor.visit_edition(node),
            Visitee::Package(node) => visitor.visit_package(node),
            Visitee::Import(node) => visitor.visit_import(node),
            Visitee::Option(node) => visitor.visit_option(node),
            Visitee::Comment(node) => visitor.visit_comment(node),
            Visitee::Message(node) => visitor.visit_message(node),
            Visitee::Enum(node) => visitor.visit_enum(node),
            Visitee::EnumField(node) => visitor.visit_enum_field(node),
            Visitee::Oneof(node) => visitor.visit_oneof(node),
            Visitee::OneofField(node) => visitor.visit_oneof_field(node),
            Visitee::NormalField(node) => visitor.visit_normal_field(node),
            Visitee::MapField(node) => visitor.visit_map_field(node),
            Visitee::Group(node) => visitor.visit_group(node),
            Visitee::Reserved(node) => visitor.visit_reserved(node),
            Visitee::Extensions(node) => visitor.visit_extensions(node),
            Visitee::Service(node) => visitor.visit_service(node),
            Visitee::Rpc(node) => visitor.visit_rpc(node),
        }
    }
}
