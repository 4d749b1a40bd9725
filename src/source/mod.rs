//! Data source selection.
//!
//! A session browses exactly one source: the bundled zip archive (static
//! flow) or a remote search index (remote flow). Sum type enforces exactly
//! one variant.

use std::path::PathBuf;
use thiserror::Error;

/// Where this session's records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Zip-bundled JSON dataset, loaded once at startup.
    Archive {
        /// Path to the archive.
        path: PathBuf,
    },
    /// Remote search index, queried on every query-state change.
    Remote {
        /// Index base URL.
        url: String,
        /// Index name.
        index: String,
    },
}

/// Errors selecting a data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Neither an archive path nor a remote URL was given.
    #[error("No data source: provide an archive path or --remote URL")]
    NoSource,

    /// Both an archive path and a remote URL were given.
    #[error("Both an archive path and a remote URL were given; choose one")]
    Ambiguous,
}

/// Pick the session's data source from the resolved inputs.
///
/// # Errors
///
/// Returns [`SourceError::NoSource`] when nothing was provided and
/// [`SourceError::Ambiguous`] when both flows were requested.
pub fn detect_data_source(
    archive: Option<PathBuf>,
    remote_url: Option<String>,
    index: String,
) -> Result<DataSource, SourceError> {
    match (archive, remote_url) {
        (Some(_), Some(_)) => Err(SourceError::Ambiguous),
        (Some(path), None) => Ok(DataSource::Archive { path }),
        (None, Some(url)) => Ok(DataSource::Remote { url, index }),
        (None, None) => Err(SourceError::NoSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_path_selects_static_flow() {
        let source =
            detect_data_source(Some(PathBuf::from("data.zip")), None, "articles".into()).unwrap();
        assert_eq!(
            source,
            DataSource::Archive {
                path: PathBuf::from("data.zip")
            }
        );
    }

    #[test]
    fn remote_url_selects_remote_flow() {
        let source = detect_data_source(
            None,
            Some("http://localhost:7700".into()),
            "articles".into(),
        )
        .unwrap();
        assert_eq!(
            source,
            DataSource::Remote {
                url: "http://localhost:7700".into(),
                index: "articles".into()
            }
        );
    }

    #[test]
    fn nothing_given_is_no_source() {
        let err = detect_data_source(None, None, "articles".into()).unwrap_err();
        assert_eq!(err, SourceError::NoSource);
    }

    #[test]
    fn both_given_is_ambiguous() {
        let err = detect_data_source(
            Some(PathBuf::from("data.zip")),
            Some("http://localhost:7700".into()),
            "articles".into(),
        )
        .unwrap_err();
        assert_eq!(err, SourceError::Ambiguous);
    }

    #[test]
    fn error_messages_are_actionable() {
        assert!(SourceError::NoSource.to_string().contains("--remote"));
        assert!(SourceError::Ambiguous.to_string().contains("choose one"));
    }
}
