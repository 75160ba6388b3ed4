use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Gist request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Gist payload error: {0}")]
    PayloadError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("You must include the GitHub Gist in the script's URL (eg. \"{example_url}\").")]
    MissingGistId { example_url: String },

    #[error("There was no \"{file}\" found in this Gist.")]
    MissingFile { file: String },

    #[error("No includable Gist code was found.")]
    NoEmbeddableFiles,

    #[error("No callback registered under \"{token}\"")]
    UnknownCallback { token: String },

    #[error("Malformed Gist response: {reason}")]
    MalformedPayload { reason: String },

    #[error("DOM operation failed: {reason}")]
    DomError { reason: String },
}

pub type Result<T> = std::result::Result<T, EmbedError>;
