//! Subcommand implementations

pub mod list;
pub mod outline;
pub mod stats;

use protowalk_ast::{Range, Visitee};

/// Short human-readable label for an element: its name, or its value for
/// elements that have no name.
pub(crate) fn label(visitee: &Visitee) -> String {
    if let Some(name) = visitee.name() {
        return name.to_string();
    }
    match visitee {
        Visitee::Syntax(node) => node.value.clone(),
        Visitee::Edition(node) => node.value.clone(),
        Visitee::Comment(node) => node
            .lines
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default(),
        Visitee::Reserved(node) if !node.field_names.is_empty() => node.field_names.join(", "),
        Visitee::Reserved(node) => join_ranges(&node.ranges),
        Visitee::Extensions(node) => join_ranges(&node.ranges),
        _ => String::new(),
    }
}

fn join_ranges(ranges: &[Range]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
