//! The traversal engine.
//!
//! Both entry points perform the same deterministic pre-order, depth-first
//! descent:
//!
//! 1. Iterate the container's children in stored order
//! 2. For each child, invoke every handler in list order
//! 3. If the child is itself a container, descend into it before moving on
//!    to the next sibling
//!
//! The root is never delivered to a handler; only its descendants are. The
//! context is threaded through every call but never inspected here.

use tracing::{debug, trace};

use crate::{ElementContainer, Visitee};

use super::handler::{Handler, TryHandler};

/// Visits every element reachable from `root` and calls each handler on it.
///
/// For every visited node, every handler runs exactly once, in list order,
/// before any deeper node is visited. An empty handler list still completes
/// the walk.
///
/// A panicking handler is not caught: the panic unwinds through `walk` and
/// the remaining siblings and descendants are not visited. Use [`try_walk`]
/// when handlers need a recoverable way to stop.
pub fn walk<C, T>(ctx: &C, root: &T, handlers: &mut [Handler<'_, C>])
where
    C: ?Sized,
    T: ElementContainer + ?Sized,
{
    debug!(handlers = handlers.len(), "walk started");
    let visited = walk_elements(ctx, root.elements(), handlers, 0);
    debug!(visited, "walk finished");
}

fn walk_elements<C>(
    ctx: &C,
    elements: &[Visitee],
    handlers: &mut [Handler<'_, C>],
    depth: usize,
) -> usize
where
    C: ?Sized,
{
    let mut visited = 0;
    for element in elements {
        trace!(kind = %element.kind(), depth, "visiting element");
        for handler in handlers.iter_mut() {
            handler(ctx, element);
        }
        visited += 1;

        if let Some(next) = element.as_container() {
            visited += walk_elements(ctx, next.elements(), handlers, depth + 1);
        }
    }
    visited
}

/// Visits every element reachable from `root` with fallible handlers.
///
/// Traversal order and per-node handler order are identical to [`walk`].
/// The first `Err` returned by any handler stops the walk immediately: the
/// remaining handlers for that node, its descendants and every later node
/// are skipped, and the error is returned unchanged.
pub fn try_walk<C, T, E>(
    ctx: &C,
    root: &T,
    handlers: &mut [TryHandler<'_, C, E>],
) -> Result<(), E>
where
    C: ?Sized,
    T: ElementContainer + ?Sized,
{
    debug!(handlers = handlers.len(), "walk started");
    let mut visited = 0;
    let result = try_walk_elements(ctx, root.elements(), handlers, 0, &mut visited);
    match result {
        Ok(()) => debug!(visited, "walk finished"),
        Err(_) => debug!(visited, "walk aborted by handler"),
    }
    result
}

fn try_walk_elements<C, E>(
    ctx: &C,
    elements: &[Visitee],
    handlers: &mut [TryHandler<'_, C, E>],
    depth: usize,
    visited: &mut usize,
) -> Result<(), E>
where
    C: ?Sized,
{
    for element in elements {
        trace!(kind = %element.kind(), depth, "visiting element");
        *visited += 1;
        for handler in handlers.iter_mut() {
            handler(ctx, element)?;
        }

        if let Some(next) = element.as_container() {
            try_walk_elements(ctx, next.elements(), handlers, depth + 1, visited)?;
        }
    }
    Ok(())
}
