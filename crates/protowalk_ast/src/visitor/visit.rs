//! Visitor trait for per-variant callbacks.
//!
//! Each `visit_*` method defaults to a no-op, so an implementation overrides
//! only the element kinds it cares about. Traversal is not the visitor's
//! job: bridge it into a walk with [`with_visitor`](super::with_visitor),
//! or dispatch a single node with [`Visitee::accept`](crate::Visitee::accept).
//!
//! # Example
//!
//! ```rust
//! use protowalk_ast::{Message, Proto, Rpc, Service};
//! use protowalk_ast::visitor::{Visitor, walk, with_visitor};
//!
//! /// Collects fully qualified RPC names.
//! #[derive(Default)]
//! struct RpcNames {
//!     service: String,
//!     names: Vec<String>,
//! }
//!
//! impl Visitor for RpcNames {
//!     fn visit_service(&mut self, service: &Service) {
//!         self.service = service.name.clone();
//!     }
//!
//!     fn visit_rpc(&mut self, rpc: &Rpc) {
//!         self.names.push(format!("{}.{}", self.service, rpc.name));
//!     }
//! }
//!
//! let proto = Proto::new("greeter.proto").with_element(
//!     Service::new("Greeter").with_element(Rpc::new("SayHello", "HelloRequest", "HelloReply")),
//! );
//!
//! let mut names = RpcNames::default();
//! walk(&(), &proto, &mut [with_visitor(&mut names)]);
//! assert_eq!(names.names, vec!["Greeter.SayHello"]);
//! ```

use crate::node::{
    Comment, Edition, Enum, EnumField, Extensions, Group, Import, MapField, Message, NormalField,
    Oneof, OneofField, Package, ProtoOption, Reserved, Rpc, Service, Syntax,
};

/// Per-variant callbacks for schema elements.
pub trait Visitor {
    // === File-level statements ===

    fn visit_syntax(&mut self, _syntax: &Syntax) {}

    fn visit_edition(&mut self, _edition: &Edition) {}

    fn visit_package(&mut self, _package: &Package) {}

    fn visit_import(&mut self, _import: &Import) {}

    fn visit_option(&mut self, _option: &ProtoOption) {}

    fn visit_comment(&mut self, _comment: &Comment) {}

    // === Definitions ===

    fn visit_message(&mut self, _message: &Message) {}

    fn visit_enum(&mut self, _enum: &Enum) {}

    fn visit_enum_field(&mut self, _field: &EnumField) {}

    fn visit_oneof(&mut self, _oneof: &Oneof) {}

    fn visit_oneof_field(&mut self, _field: &OneofField) {}

    fn visit_normal_field(&mut self, _field: &NormalField) {}

    fn visit_map_field(&mut self, _field: &MapField) {}

    fn visit_group(&mut self, _group: &Group) {}

    fn visit_reserved(&mut self, _reserved: &Reserved) {}

    fn visit_extensions(&mut self, _extensions: &Extensions) {}

    // === Services ===

    fn visit_service(&mut self, _service: &Service) {}

    fn visit_rpc(&mut self, _rpc: &Rpc) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Visitee, VisiteeKind};

    /// Records the kind of every node it is dispatched.
    #[derive(Default)]
    struct KindRecorder {
        kinds: Vec<VisiteeKind>,
    }

    impl Visitor for KindRecorder {
        fn visit_syntax(&mut self, _: &Syntax) {
            self.kinds.push(VisiteeKind::Syntax);
        }

        fn visit_option(&mut self, _: &ProtoOption) {
            self.kinds.push(VisiteeKind::Option);
        }

        fn visit_map_field(&mut self, _: &MapField) {
            self.kinds.push(VisiteeKind::MapField);
        }
    }

    #[test]
    fn accept_calls_matching_method_only() {
        let nodes: Vec<Visitee> = vec![
            Syntax::new("proto3").into(),
            Package::new("foo").into(),
            ProtoOption::new("o", "1").into(),
            MapField::new("string", "int32", "m", 1).into(),
            Message::new("M").into(),
        ];

        let mut recorder = KindRecorder::default();
        for node in &nodes {
            node.accept(&mut recorder);
        }

        assert_eq!(
            recorder.kinds,
            vec![VisiteeKind::Syntax, VisiteeKind::Option, VisiteeKind::MapField]
        );
    }

    #[test]
    fn default_methods_are_noops() {
        struct Silent;
        impl Visitor for Silent {}

        let node: Visitee = Rpc::new("Call", "Req", "Res").into();
        node.accept(&mut Silent);
    }
}
