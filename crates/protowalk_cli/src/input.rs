//! Loading ASTs from disk.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use protowalk_ast::Proto;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an AST file.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(protowalk::input::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid schema AST", .path.display())]
    #[diagnostic(
        code(protowalk::input::decode),
        help("expected a JSON object with `filename` and `elements`")
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON-encoded [`Proto`] from `path`.
///
/// When the document has no `filename`, the file's own name is used.
pub fn load_proto(path: &Path) -> Result<Proto, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut proto = parse_proto(&content).map_err(|source| InputError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if proto.filename.is_empty() {
        proto.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    debug!(
        "loaded {} ({} top-level elements)",
        proto.filename,
        proto.elements.len()
    );
    Ok(proto)
}

/// Decodes a [`Proto`] from JSON text.
pub fn parse_proto(json: &str) -> Result<Proto, serde_json::Error> {
    serde_json::from_str(json)
}
