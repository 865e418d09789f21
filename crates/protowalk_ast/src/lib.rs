//! # protowalk_ast
//!
//! Protocol Buffers schema AST and traversal engine for protowalk.
//!
//! This crate provides the node types of an already-parsed `.proto` schema
//! and a traversal engine that visits every element reachable from a root,
//! invoking an ordered list of caller-supplied handlers on each node.
//!
//! ## Architecture
//!
//! - [`Visitee`] is a closed sum type with one variant per schema element
//! - Composite nodes own their children in a `Vec` and implement
//!   [`ElementContainer`]
//! - [`walk`] performs a pre-order, depth-first traversal and calls every
//!   [`Handler`] on every visited node
//! - Typed adapters such as [`with_message`] narrow a handler to one variant
//!
//! ## Example
//!
//! ```rust
//! use protowalk_ast::{Handler, Message, NormalField, Proto, ProtoOption, walk, with_message};
//!
//! let proto = Proto::new("hello.proto").with_element(
//!     Message::new("Greeting")
//!         .with_element(ProtoOption::new("deprecated", "true"))
//!         .with_element(NormalField::new("string", "text", 1)),
//! );
//!
//! let mut names = Vec::new();
//! let mut handlers: Vec<Handler<'_, ()>> = vec![with_message(|_, message| {
//!     names.push(message.name.clone());
//! })];
//! walk(&(), &proto, &mut handlers);
//! drop(handlers);
//!
//! assert_eq!(names, vec!["Greeting"]);
//! ```

mod container;
mod error;
mod kind;
mod node;
mod position;
mod visitee;
pub mod visitor;

pub use container::ElementContainer;
pub use error::WalkError;
pub use kind::VisiteeKind;
pub use node::{
    Comment, Edition, Enum, EnumField, Extensions, Field, Group, Import, ImportKind, MapField,
    Message, NormalField, Oneof, OneofField, Package, Proto, ProtoOption, Range, Reserved, Rpc,
    Service, Syntax,
};
pub use position::Position;
pub use visitee::Visitee;

// Re-export commonly used visitor items for convenience
pub use visitor::{
    Descendants, Handler, TryHandler, Visitor, WalkContext, check_cancelled, descendants,
    try_walk, try_with_comment, try_with_edition, try_with_enum, try_with_enum_field,
    try_with_extensions, try_with_group, try_with_import, try_with_map_field, try_with_message,
    try_with_normal_field, try_with_oneof, try_with_oneof_field, try_with_option,
    try_with_package, try_with_reserved, try_with_rpc, try_with_service, try_with_syntax, walk,
    with_comment, with_edition, with_enum, with_enum_field, with_extensions, with_group,
    with_import, with_map_field, with_message, with_normal_field, with_oneof, with_oneof_field,
    with_option, with_package, with_reserved, with_rpc, with_service, with_syntax, with_visitor,
};
