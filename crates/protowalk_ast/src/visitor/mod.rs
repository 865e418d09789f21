//! Handler-driven traversal of a schema AST.
//!
//! # Overview
//!
//! - [`walk`] - Pre-order traversal invoking every [`Handler`] on every node
//! - [`try_walk`] - Same traversal with fallible [`TryHandler`]s; stops at the first error
//! - `with_*` / `try_with_*` - Typed adapters narrowing a handler to one variant
//! - [`Visitor`] - Per-variant trait, bridged into a handler list by [`with_visitor`]
//! - [`descendants`] - Explicit-stack iterator yielding nodes in walk order
//! - [`WalkContext`] - Cancellation and deadline carrier for handlers
//!
//! # Examples
//!
//! ## Counting messages and options
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use protowalk_ast::{Message, NormalField, Proto, ProtoOption};
//! use protowalk_ast::visitor::{Handler, walk, with_message, with_option};
//!
//! let proto = Proto::new("a.proto").with_element(
//!     Message::new("M")
//!         .with_element(ProtoOption::new("deprecated", "true"))
//!         .with_element(NormalField::new("string", "f", 1)),
//! );
//!
//! let messages = Cell::new(0);
//! let options = Cell::new(0);
//! let mut handlers: Vec<Handler<'_, ()>> = vec![
//!     with_message(|_, _| messages.set(messages.get() + 1)),
//!     with_option(|_, _| options.set(options.get() + 1)),
//! ];
//! walk(&(), &proto, &mut handlers);
//!
//! assert_eq!(messages.get(), 1);
//! assert_eq!(options.get(), 1);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use protowalk_ast::{Message, Proto, Service};
//! use protowalk_ast::visitor::{TryHandler, try_walk, try_with_service};
//!
//! let proto = Proto::new("a.proto")
//!     .with_element(Service::new("Legacy"))
//!     .with_element(Message::new("After"));
//!
//! let mut handlers: Vec<TryHandler<'_, (), String>> = vec![try_with_service(|_, service| {
//!     Err(format!("services are not allowed: {}", service.name))
//! })];
//!
//! let result = try_walk(&(), &proto, &mut handlers);
//! assert_eq!(result, Err("services are not allowed: Legacy".to_string()));
//! ```

mod adapters;
mod context;
mod handler;
mod iter;
mod visit;
mod walk;

pub use adapters::{
    try_with_comment, try_with_edition, try_with_enum, try_with_enum_field, try_with_extensions,
    try_with_group, try_with_import, try_with_map_field, try_with_message, try_with_normal_field,
    try_with_oneof, try_with_oneof_field, try_with_option, try_with_package, try_with_reserved,
    try_with_rpc, try_with_service, try_with_syntax, with_comment, with_edition, with_enum,
    with_enum_field, with_extensions, with_group, with_import, with_map_field, with_message,
    with_normal_field, with_oneof, with_oneof_field, with_option, with_package, with_reserved,
    with_rpc, with_service, with_syntax,
};
pub use context::{WalkContext, check_cancelled};
pub use handler::{Handler, TryHandler, with_visitor};
pub use iter::{Descendants, descendants};
pub use visit::Visitor;
pub use walk::{try_walk, walk};
