use thiserror::Error;

/// The only way a request against the relay board can fail.
/// Every variant is reported to clients the same way (`{"error":"invalid"}`),
/// the variants only exist so the reason shows up in the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("unknown channel '{0}'")]
    UnknownChannel(String),

    #[error("unknown power command '{0}', expected 'on' or 'off'")]
    UnknownCommand(String),

    #[error("brightness '{0}' is not an integer in 0..=100")]
    BadBrightness(String),
}
