use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Reply lacked a string `output_path` (or carried a non-string `error`).
    #[error("unexpected response format")]
    UnexpectedResponse,

    /// Message reported by the inference service, passed through verbatim.
    #[error("{0}")]
    Service(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_error_displays_verbatim() {
        assert_eq!(Error::service("boom").to_string(), "boom");
    }

    #[test]
    fn test_unexpected_response_message() {
        assert_eq!(
            Error::UnexpectedResponse.to_string(),
            "unexpected response format"
        );
    }

    #[test]
    fn test_decode_error_prefix() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(Error::Decode(err).to_string().starts_with("Decode error: "));
    }
}
