use cardfetch_core::variant::ParseError;

#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// No HTTP response was obtained at all
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered, but not in the expected shape
    #[error("Malformed upstream body: {0}")]
    MalformedBody(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MalformedBody(msg) => Error::MalformedBody(msg),
        }
    }
}
