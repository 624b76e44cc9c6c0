use thiserror::Error;

/// Ways fetching a changelog can fail. None of them are retried.
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// The tracker answered with anything other than 200 OK.
    #[error("issue tracker responded with unexpected status {code}")]
    UnexpectedStatus { code: u16 },

    /// The request never completed (DNS, TLS, refused connection, timeout).
    #[error("request to issue tracker failed")]
    Transport(#[from] reqwest::Error),

    /// The body was not a JSON array of issues.
    #[error("malformed response from issue tracker: {detail}")]
    MalformedResponse { detail: String },
}
