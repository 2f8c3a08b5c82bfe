//! Sending a report request to the server.

use maintenance_report::ReportResponse;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

/// Endpoint the report server listens on by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/generate";
/// File name requested for the generated report.
pub const DEFAULT_REPORT_NAME: &str = "maintenance_report.pdf";

#[derive(Serialize)]
struct Payload<'a> {
    folder: &'a str,
    filename: &'a str,
    records: &'a Value,
}

/// Result of a completed round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The server saved the report at this path.
    Saved(String),
    /// Any other answer, with the raw status code and response text.
    Failed { status: u16, body: String },
}

/// Blocking client for the `/generate` endpoint.
#[derive(Clone, Debug)]
pub struct ReportClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ReportClient {
    /// Creates a client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts `{folder, filename, records}` once and classifies the answer.
    ///
    /// Only an HTTP 200 whose body carries `"status": "success"` counts as saved.  Transport
    /// failures are returned as errors; the request is never retried.
    pub fn send(
        &self,
        folder: &str,
        filename: &str,
        records: &Value,
    ) -> Result<Outcome, ClientError> {
        let payload = Payload {
            folder,
            filename,
            records,
        };
        debug!("Posting report request to {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(|source| self.http_error(source))?;
        let status = response.status();
        let body = response.text().map_err(|source| self.http_error(source))?;

        if status == StatusCode::OK {
            if let Ok(ack) = serde_json::from_str::<ReportResponse>(&body) {
                if ack.is_success() {
                    return Ok(Outcome::Saved(ack.path().to_owned()));
                }
            }
        }

        Ok(Outcome::Failed {
            status: status.as_u16(),
            body,
        })
    }

    fn http_error(&self, source: reqwest::Error) -> ClientError {
        ClientError::Http {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
