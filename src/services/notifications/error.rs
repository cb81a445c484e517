use thiserror::Error;

/// Errors raised while delivering a notification
///
/// `Request` and `Status` are transport failures: the payload never reached
/// the channel. They are never retried here.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Unable to post payload: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

pub type NotificationResult<T> = Result<T, NotificationError>;
