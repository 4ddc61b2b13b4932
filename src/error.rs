use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing GEMINI_API_KEY in env")]
    MissingApiKey,

    #[error("Invalid request body: {0}")]
    RequestBody(#[source] serde_json::Error),

    #[error("Upstream returned a non-JSON body (status {status}): {source}")]
    UpstreamBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
