//! Handler callback shapes.

use crate::Visitee;

use super::visit::Visitor;

/// A callback invoked once per visited node.
///
/// `C` is the caller's context type. It is threaded through every call but
/// never inspected by the engine. `FnMut` lets a handler own accumulator
/// state; the `'h` lifetime lets it borrow state owned by the caller.
pub type Handler<'h, C> = Box<dyn FnMut(&C, &Visitee) + 'h>;

/// A fallible callback used by [`try_walk`](super::try_walk).
///
/// Returning `Err` aborts the walk; the error is handed back to the caller
/// unchanged.
pub type TryHandler<'h, C, E> = Box<dyn FnMut(&C, &Visitee) -> Result<(), E> + 'h>;

/// Returns a handler that dispatches every node to the matching `visit_*`
/// method of `visitor`.
///
/// The context is ignored; visitors that need it should be written as
/// closures instead.
pub fn with_visitor<'h, C, V>(visitor: &'h mut V) -> Handler<'h, C>
where
    C: ?Sized,
    V: Visitor + ?Sized,
{
    Box::new(move |_ctx: &C, visitee: &Visitee| visitee.accept(&mut *visitor))
}
