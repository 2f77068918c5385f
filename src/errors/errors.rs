use std::path::PathBuf;

use thiserror::Error;

/// Collaborator-side failures. Lexical problems never surface here: the
/// analyzer represents those as error tokens inside the stream. Only the
/// file-access collaborator and the CLI produce these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
