use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("element #{0} not found in document")]
    MissingElement(String),

    #[error("cannot read source directory {}: {source}", path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
