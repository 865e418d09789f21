//! Outline command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use protowalk_ast::{Proto, descendants};
use serde::Serialize;

use super::label;
use crate::config::{Config, OutputFormat};
use crate::input::load_proto;

/// One line of the outline.
#[derive(Debug, Serialize, PartialEq)]
pub struct OutlineEntry {
    pub depth: usize,
    pub kind: &'static str,
    pub name: String,
    pub line: u32,
    pub column: u32,
}

pub fn run_outline(file: &Path, config: &Config) -> Result<()> {
    let proto = load_proto(file)?;

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&proto, config.indent)),
        OutputFormat::Json => {
            let entries = outline_entries(&proto);
            println!("{}", serde_json::to_string_pretty(&entries).into_diagnostic()?);
        }
    }
    Ok(())
}

pub fn outline_entries(proto: &Proto) -> Vec<OutlineEntry> {
    descendants(proto)
        .map(|(depth, visitee)| {
            let position = visitee.position();
            OutlineEntry {
                depth,
                kind: visitee.kind().as_str(),
                name: label(visitee),
                line: position.line,
                column: position.column,
            }
        })
        .collect()
}

/// Renders the outline as indented text, one element per line.
pub fn render_text(proto: &Proto, indent: usize) -> String {
    let mut out = String::new();
    for (depth, visitee) in descendants(proto) {
        let pad = " ".repeat(depth * indent);
        let name = label(visitee);
        let line = if name.is_empty() {
            format!("{pad}{}\n", visitee.kind())
        } else {
            format!("{pad}{} {name}\n", visitee.kind())
        };
        out.push_str(&line);
    }
    out
}
