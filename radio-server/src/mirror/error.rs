//! Mirror client error types.

/// Why a single mirror attempt did not produce usable data.
///
/// Attempt failures are soft: the client logs them and moves on to the next
/// mirror. Only construction errors ([`MirrorError::InvalidMirror`],
/// [`MirrorError::NoMirrors`]) ever reach a caller.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// Connection failure, timeout or other transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Mirror answered with a non-success status code
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of the expected records
    #[error("JSON parse error: {message} (body: {body})")]
    Json { message: String, body: String },

    /// Body decoded to an empty list
    #[error("mirror returned no records")]
    Empty,

    /// A configured mirror base URL cannot be used
    #[error("invalid mirror URL {url:?}: {reason}")]
    InvalidMirror { url: String, reason: String },

    /// Neither tier contains any mirror
    #[error("no mirrors configured")]
    NoMirrors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MirrorError::Status { status: 503 };
        assert_eq!(err.to_string(), "unexpected status 503");

        let err = MirrorError::Empty;
        assert_eq!(err.to_string(), "mirror returned no records");

        let err = MirrorError::Json {
            message: "expected a sequence".into(),
            body: "{}".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected a sequence (body: {})"
        );

        let err = MirrorError::InvalidMirror {
            url: "ftp://x".into(),
            reason: "scheme must be http or https".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid mirror URL \"ftp://x\": scheme must be http or https"
        );
    }
}
