use thiserror::Error;

/// Failure of a single dispatched command.
///
/// Both variants are handled identically at the dispatch boundary; the split
/// only exists so the diagnostic log names the actual cause.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} for {path}")]
    Status {
        path: &'static str,
        status: reqwest::StatusCode,
    },
}
