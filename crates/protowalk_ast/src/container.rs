//! The `ElementContainer` capability.

use crate::node::{Enum, Group, Message, Oneof, Proto, Rpc, Service};
use crate::Visitee;

/// A node that owns an ordered, possibly empty sequence of child elements.
///
/// Only composite nodes implement this trait. An empty slice is the only
/// representation of "no children".
pub trait ElementContainer {
    /// Returns the children in source order.
    fn elements(&self) -> &[Visitee];
}

macro_rules! impl_element_container {
    ($($node:ty),* $(,)?) => {
        $(
            impl ElementContainer for $node {
                #[inline]
                fn elements(&self) -> &[Visitee] {
                    &self.elements
                }
            }
        )*
    };
}

impl_element_container!(Proto, Message, Enum, Oneof, Group, Service, Rpc);
