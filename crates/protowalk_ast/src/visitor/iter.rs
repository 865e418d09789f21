//! Iterative pre-order traversal.

use std::iter::FusedIterator;
use std::slice;

use crate::{ElementContainer, Visitee};

/// Returns an iterator over every element reachable from `root`.
///
/// Items are `(depth, element)` pairs in exactly the order [`walk`](super::walk)
/// delivers nodes to its handlers. Direct children of `root` have depth 0.
/// The iterator keeps an explicit stack instead of recursing, so nesting
/// depth is bounded by heap rather than call stack.
pub fn descendants<T>(root: &T) -> Descendants<'_>
where
    T: ElementContainer + ?Sized,
{
    Descendants {
        stack: vec![root.elements().iter()],
    }
}

/// Pre-order iterator returned by [`descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Visitee>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (usize, &'a Visitee);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(element) => {
                    if let Some(children) = element.elements() {
                        self.stack.push(children.iter());
                    }
                    return Some((depth, element));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Descendants<'_> {}
