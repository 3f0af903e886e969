use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// AviError: every failure surfaced by the session, the clients and the rest operations.
///
/// Variants only carry owned strings so errors can be cloned onto each `RestOp` of a batch.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum AviError {
    #[error("Encountered an error on {verb} request to URL {url}: HTTP code: {status}{}", controller_message(.message))]
    Controller {
        verb: String,
        url: String,
        status: u16,
        message: Option<String>,
    },
    #[error("Encountered an error on {verb} request to URL {url}: error: {raw_error_message}")]
    Transport {
        verb: String,
        url: String,
        raw_error_message: String,
    },
    #[error("Encountered an error on {verb} request to URL {url}: error: tried {attempts} times and failed")]
    RetriesExhausted { verb: String, url: String, attempts: u32 },
    #[error("Controller `{url}` is still unavailable after {attempts} status checks")]
    ControllerUnavailable { url: String, attempts: u32 },
    #[error("Cannot serialize payload of {verb} request to URL {url}: {raw_error_message}")]
    Serialization {
        verb: String,
        url: String,
        raw_error_message: String,
    },
    #[error("Cannot deserialize response of {verb} request to URL {url}: {raw_error_message}")]
    Deserialization {
        verb: String,
        url: String,
        raw_error_message: String,
    },
    #[error("No object of type {object_type} with name {name} is found")]
    ObjectNotFound { object_type: String, name: String },
    #[error("More than one object of type {object_type} with name {name} is found")]
    MultipleObjectsFound { object_type: String, name: String },
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("Invalid reference `{reference}`: {reason}")]
    InvalidReference { reference: String, reason: String },
    #[error("Object of type {object_type} has no uuid")]
    MissingUuid { object_type: String },
    #[error("Name not specified for object of type {object_type}")]
    MissingName { object_type: String },
    #[error("Aborted due to prev error")]
    Aborted,
    #[error("Error during {operation}: {message}")]
    WebSync { operation: String, message: String },
    #[error("I/O error: {raw_error_message}")]
    Io { raw_error_message: String },
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

fn controller_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!("; error from Controller: {message}"),
        None => ".".to_string(),
    }
}

impl AviError {
    /// Builds a controller error out of a non successful response body.
    /// The controller answers `{"error": "..."}`, any other body is kept as is.
    pub fn from_response(verb: &str, url: &str, status: StatusCode, body: &[u8]) -> Self {
        AviError::Controller {
            verb: verb.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            message: extract_controller_message(body),
        }
    }

    pub fn transport(verb: &str, url: &str, error: &reqwest::Error) -> Self {
        AviError::Transport {
            verb: verb.to_string(),
            url: url.to_string(),
            raw_error_message: error.to_string(),
        }
    }

    pub fn deserialization(verb: &str, url: &str, error: &serde_json::Error) -> Self {
        AviError::Deserialization {
            verb: verb.to_string(),
            url: url.to_string(),
            raw_error_message: error.to_string(),
        }
    }

    /// HTTP status code returned by the controller, if the error comes from a response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AviError::Controller { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AviError::ObjectNotFound { .. }) || self.http_status() == Some(404)
    }
}

impl From<std::io::Error> for AviError {
    fn from(error: std::io::Error) -> Self {
        AviError::Io {
            raw_error_message: error.to_string(),
        }
    }
}

fn extract_controller_message(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("error") {
            Some(Value::String(error)) => Some(error.to_string()),
            _ => Some(Value::Object(map).to_string()),
        },
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(String::from_utf8_lossy(body).trim().to_string()),
    }
}
