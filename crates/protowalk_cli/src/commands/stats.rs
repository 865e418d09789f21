//! Stats command implementation

use std::cell::RefCell;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use protowalk_ast::{
    Handler, ImportKind, Proto, walk, with_enum, with_enum_field, with_import, with_map_field,
    with_message, with_normal_field, with_oneof, with_oneof_field, with_option, with_rpc,
    with_service,
};
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::input::load_proto;

/// Element counts for one schema file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub messages: usize,
    pub extends: usize,
    pub enums: usize,
    pub enum_values: usize,
    pub fields: usize,
    pub map_fields: usize,
    pub oneofs: usize,
    pub services: usize,
    pub rpcs: usize,
    pub streaming_rpcs: usize,
    pub options: usize,
    pub imports: usize,
    pub public_imports: usize,
}

pub fn run_stats(file: &Path, config: &Config) -> Result<()> {
    let proto = load_proto(file)?;
    let stats = collect_stats(&proto);

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&proto.filename, &stats)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": proto.filename,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        }
    }
    Ok(())
}

/// Counts the elements of `proto` with one typed handler per kind of interest.
pub fn collect_stats(proto: &Proto) -> Stats {
    let stats = RefCell::new(Stats::default());
    {
        let mut handlers: Vec<Handler<'_, ()>> = vec![
            with_message(|_, message| {
                let mut stats = stats.borrow_mut();
                if message.is_extend {
                    stats.extends += 1;
                } else {
                    stats.messages += 1;
                }
            }),
            with_enum(|_, _| stats.borrow_mut().enums += 1),
            with_enum_field(|_, _| stats.borrow_mut().enum_values += 1),
            with_normal_field(|_, _| stats.borrow_mut().fields += 1),
            with_oneof_field(|_, _| stats.borrow_mut().fields += 1),
            with_map_field(|_, _| {
                let mut stats = stats.borrow_mut();
                stats.fields += 1;
                stats.map_fields += 1;
            }),
            with_oneof(|_, _| stats.borrow_mut().oneofs += 1),
            with_service(|_, _| stats.borrow_mut().services += 1),
            with_rpc(|_, rpc| {
                let mut stats = stats.borrow_mut();
                stats.rpcs += 1;
                if rpc.streams_request || rpc.streams_returns {
                    stats.streaming_rpcs += 1;
                }
            }),
            with_option(|_, _| stats.borrow_mut().options += 1),
            with_import(|_, import| {
                let mut stats = stats.borrow_mut();
                stats.imports += 1;
                if import.kind == ImportKind::Public {
                    stats.public_imports += 1;
                }
            }),
        ];
        walk(&(), proto, &mut handlers);
    }
    stats.into_inner()
}

fn render_text(filename: &str, stats: &Stats) -> String {
    let rows = [
        ("messages", stats.messages),
        ("extends", stats.extends),
        ("enums", stats.enums),
        ("enum values", stats.enum_values),
        ("fields", stats.fields),
        ("map fields", stats.map_fields),
        ("oneofs", stats.oneofs),
        ("services", stats.services),
        ("rpcs", stats.rpcs),
        ("streaming rpcs", stats.streaming_rpcs),
        ("options", stats.options),
        ("imports", stats.imports),
        ("public imports", stats.public_imports),
    ];

    let body: String = rows
        .iter()
        .map(|(label, count)| format!("  {label:<15}{count}\n"))
        .collect();
    format!("{filename}\n{body}")
}
