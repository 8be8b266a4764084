use std::ops::Range;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch document")]
    Fetch(#[from] ureq::Error),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document has no '{0}' marker")]
    MissingMarker(&'static str),
    #[error("malformed configuration block at bytes {}..{}", range.start, range.end)]
    Yaml {
        range: Range<usize>,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("option '{option}' has an unresolvable type: {declared}")]
    UnresolvedType { option: String, declared: String },
    #[error("options '{first}' and '{second}' both map to the field '{ident}'")]
    Collision {
        ident: String,
        first: String,
        second: String,
    },
    #[error("failed to render source")]
    Format(#[from] std::fmt::Error),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
