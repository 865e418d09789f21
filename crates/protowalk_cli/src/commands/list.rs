//! List command implementation

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use protowalk_ast::{
    Position, Proto, TryHandler, Visitee, WalkContext, WalkError, check_cancelled, try_walk,
};
use serde::Serialize;
use tracing::{debug, info};

use super::label;
use crate::config::{Config, OutputFormat};
use crate::input::load_proto;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ListError {
    #[error("listing stopped: {0}")]
    #[diagnostic(
        code(protowalk::list::walk),
        help("raise `timeoutMs` in the configuration file")
    )]
    Walk(#[from] WalkError),
}

/// An element selected by `protowalk list`.
#[derive(Debug, Serialize, PartialEq)]
pub struct ListEntry {
    pub kind: &'static str,
    pub name: String,
    pub line: u32,
    pub column: u32,
}

impl ListEntry {
    fn new(visitee: &Visitee) -> Self {
        let Position { line, column, .. } = visitee.position();
        Self {
            kind: visitee.kind().as_str(),
            name: label(visitee),
            line,
            column,
        }
    }
}

pub fn run_list(file: &Path, config: &Config) -> Result<()> {
    let proto = load_proto(file)?;

    let mut ctx = WalkContext::new();
    if let Some(timeout) = config.timeout() {
        debug!("walk timeout: {:?}", timeout);
        ctx = ctx.with_timeout(timeout);
    }

    let entries = collect_entries(&ctx, &proto, config)?;

    match config.format {
        OutputFormat::Text => {
            for entry in &entries {
                if entry.name.is_empty() {
                    println!("{}:{} {}", entry.line, entry.column, entry.kind);
                } else {
                    println!("{}:{} {} {}", entry.line, entry.column, entry.kind, entry.name);
                }
            }
            info!("{} elements listed", entries.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries).into_diagnostic()?);
        }
    }
    Ok(())
}

/// Walks `proto` and collects every element whose kind `config` selects.
///
/// The walk stops as soon as `ctx` is cancelled or its deadline passes.
pub fn collect_entries(
    ctx: &WalkContext,
    proto: &Proto,
    config: &Config,
) -> Result<Vec<ListEntry>, ListError> {
    let mut entries = Vec::new();
    {
        let mut handlers: Vec<TryHandler<'_, WalkContext, ListError>> = vec![
            check_cancelled(),
            Box::new(|_: &WalkContext, visitee: &Visitee| {
                if config.selects(visitee.kind()) {
                    entries.push(ListEntry::new(visitee));
                }
                Ok(())
            }),
        ];
        try_walk(ctx, proto, &mut handlers)?;
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use pretty_assertions::assert_eq;
    use protowalk_ast::{Message, NormalField, Rpc, Service, VisiteeKind};

    fn sample() -> Proto {
        Proto::new("a.proto")
            .with_element(
                Message::new("Request")
                    .with_position(Position::new(3, 1))
                    .with_element(
                        NormalField::new("string", "query", 1).with_position(Position::new(4, 3)),
                    ),
            )
            .with_element(
                Service::new("Search")
                    .with_position(Position::new(7, 1))
                    .with_element(
                        Rpc::new("Find", "Request", "Response").with_position(Position::new(8, 3)),
                    ),
            )
    }

    #[test]
    fn test_collect_all_kinds() {
        let entries = collect_entries(&WalkContext::new(), &sample(), &Config::default()).unwrap();
        let kinds: Vec<_> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["message", "normal_field", "service", "rpc"]);
    }

    #[test]
    fn test_collect_selected_kinds() {
        let config = Config {
            kinds: vec![VisiteeKind::Rpc, VisiteeKind::NormalField],
            ..Config::default()
        };
        let entries = collect_entries(&WalkContext::new(), &sample(), &config).unwrap();
        assert_eq!(
            entries,
            vec![
                ListEntry {
                    kind: "normal_field",
                    name: "query".to_string(),
                    line: 4,
                    column: 3,
                },
                ListEntry {
                    kind: "rpc",
                    name: "Find".to_string(),
                    line: 8,
                    column: 3,
                },
            ]
        );
    }

    #[test]
    fn test_collect_cancelled() {
        let ctx = WalkContext::new();
        ctx.cancel();
        let err = collect_entries(&ctx, &sample(), &Config::default()).unwrap_err();
        assert!(matches!(err, ListError::Walk(WalkError::Cancelled)));
    }

    #[test]
    fn test_collect_deadline_exceeded() {
        let ctx = WalkContext::new().with_deadline(Instant::now() - Duration::from_secs(1));
        let err = collect_entries(&ctx, &sample(), &Config::default()).unwrap_err();
        assert!(matches!(err, ListError::Walk(WalkError::DeadlineExceeded)));
    }
}
