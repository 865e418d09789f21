//! Typed handler adapters.
//!
//! Each adapter wraps a callback over one concrete element type into a
//! generic [`Handler`]. The returned handler forwards nodes of the matching
//! variant and silently ignores every other variant. The `try_with_*` twins
//! do the same for [`TryHandler`]s, answering `Ok(())` on a mismatch.

use crate::Visitee;
use crate::node::{
    Comment, Edition, Enum, EnumField, Extensions, Group, Import, MapField, Message, NormalField,
    Oneof, OneofField, Package, ProtoOption, Reserved, Rpc, Service, Syntax,
};

use super::handler::{Handler, TryHandler};

macro_rules! typed_adapters {
    ($($variant:ident($node:ty) => $with_fn:ident, $try_with_fn:ident;)*) => {
        $(
            #[doc = concat!(
                "Returns a [`Handler`] that calls `apply` when the visitee is a `",
                stringify!($variant),
                "`."
            )]
            pub fn $with_fn<'h, C, F>(mut apply: F) -> Handler<'h, C>
            where
                C: ?Sized,
                F: FnMut(&C, &$node) + 'h,
            {
                Box::new(move |ctx: &C, visitee: &Visitee| {
                    if let Visitee::$variant(node) = visitee {
                        apply(ctx, node);
                    }
                })
            }

            #[doc = concat!(
                "Returns a [`TryHandler`] that calls `apply` when the visitee is a `",
                stringify!($variant),
                "`."
            )]
            pub fn $try_with_fn<'h, C, E, F>(mut apply: F) -> TryHandler<'h, C, E>
            where
                C: ?Sized,
                F: FnMut(&C, &$node) -> Result<(), E> + 'h,
            {
                Box::new(move |ctx: &C, visitee: &Visitee| match visitee {
                    Visitee::$variant(node) => apply(ctx, node),
                    _ => Ok(()),
                })
            }
        )*
    };
}

typed_adapters! {
    Syntax(Syntax) => with_syntax, try_with_syntax;
    Edition(Edition) => with_edition, try_with_edition;
    Package(Package) => with_package, try_with_package;
    Import(Import) => with_import, try_with_import;
    Option(ProtoOption) => with_option, try_with_option;
    Comment(Comment) => with_comment, try_with_comment;
    Message(Message) => with_message, try_with_message;
    Enum(Enum) => with_enum, try_with_enum;
    EnumField(EnumField) => with_enum_field, try_with_enum_field;
    Oneof(Oneof) => with_oneof, try_with_oneof;
    OneofField(OneofField) => with_oneof_field, try_with_oneof_field;
    NormalField(NormalField) => with_normal_field, try_with_normal_field;
    MapField(MapField) => with_map_field, try_with_map_field;
    Group(Group) => with_group, try_with_group;
    Reserved(Reserved) => with_reserved, try_with_reserved;
    Extensions(Extensions) => with_extensions, try_with_extensions;
    Service(Service) => with_service, try_with_service;
    Rpc(Rpc) => with_rpc, try_with_rpc;
}
