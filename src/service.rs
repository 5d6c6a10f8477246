//! Remote compression service.
//!
//! The driver only sees [`CompressionService`]; [`TinifyClient`] speaks the
//! Tinify HTTP API: upload to `/shrink`, then POST a convert request to the
//! returned `Location` and read the image back from the response body.

use crate::constants::{API_USER, COMPRESSION_COUNT_HEADER, SHRINK_PATH};
use crate::error::{Result, ServiceErrorKind, SqueezeError};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Opaque reference to an uploaded, compressed image held by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedImage {
    pub data: Vec<u8>,
    /// Canonical extension of the chosen format, without the dot.
    pub extension: String,
}

#[async_trait]
pub trait CompressionService {
    /// Uploads raw image bytes for compression.
    async fn upload(&self, data: Vec<u8>) -> Result<SourceHandle>;

    /// Converts an uploaded image to whichever of `mime_types` the service
    /// picks, preferring earlier entries, and downloads the result.
    async fn convert(&self, source: &SourceHandle, mime_types: &[&str]) -> Result<ConvertedImage>;

    /// Compressions used this month, if the service has reported it.
    fn compression_count(&self) -> Option<u64> {
        None
    }
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    convert: ConvertTypes<'a>,
}

#[derive(Debug, Serialize)]
struct ConvertTypes<'a> {
    #[serde(rename = "type")]
    types: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub struct TinifyClient {
    http: Client,
    api_url: String,
    api_key: String,
    compression_count: Mutex<Option<u64>>,
}

impl TinifyClient {
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("tiny-squeeze/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            compression_count: Mutex::new(None),
        })
    }

    fn shrink_url(&self) -> String {
        format!("{}{}", self.api_url, SHRINK_PATH)
    }

    fn record_compression_count(&self, response: &Response) {
        let count = response
            .headers()
            .get(COMPRESSION_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        if let Some(count) = count {
            if let Ok(mut latest) = self.compression_count.lock() {
                *latest = Some(count);
            }
        }
    }

    /// Turns a non-success response into a service error.
    async fn check_status(&self, response: Response) -> Result<Response> {
        self.record_compression_count(&response);

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                crate::verbose!("Could not read error body for HTTP {}: {}", code, e);
                String::new()
            }
        };
        let (error, message) = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => (parsed.error, parsed.message),
            Err(_) => (
                status.canonical_reason().unwrap_or("Unknown").to_string(),
                format!("Error while parsing response: {}", body.trim()),
            ),
        };

        Err(SqueezeError::Service {
            kind: ServiceErrorKind::from_status(code),
            status: code,
            error,
            message,
        })
    }
}

#[async_trait]
impl CompressionService for TinifyClient {
    async fn upload(&self, data: Vec<u8>) -> Result<SourceHandle> {
        let response = self
            .http
            .post(self.shrink_url())
            .basic_auth(API_USER, Some(&self.api_key))
            .body(data)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                SqueezeError::InvalidResponse("upload response has no Location header".to_string())
            })?;

        Ok(SourceHandle(location.to_string()))
    }

    async fn convert(&self, source: &SourceHandle, mime_types: &[&str]) -> Result<ConvertedImage> {
        let request = ConvertRequest {
            convert: ConvertTypes { types: mime_types },
        };

        let response = self
            .http
            .post(&source.0)
            .basic_auth(API_USER, Some(&self.api_key))
            .json(&request)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                SqueezeError::InvalidResponse("convert response has no Content-Type".to_string())
            })?;
        let extension = extension_for_mime(content_type).ok_or_else(|| {
            SqueezeError::InvalidResponse(format!("unexpected Content-Type {}", content_type))
        })?;

        let data = response.bytes().await?.to_vec();

        Ok(ConvertedImage { data, extension })
    }

    fn compression_count(&self) -> Option<u64> {
        self.compression_count.lock().ok().and_then(|latest| *latest)
    }
}

/// `image/png; charset=binary` -> `png`. Anything that is not an image type yields `None`.
pub fn extension_for_mime(mime: &str) -> Option<String> {
    let essence = mime.split(';').next()?.trim();
    let (kind, subtype) = essence.split_once('/')?;

    if !kind.eq_ignore_ascii_case("image") || subtype.is_empty() {
        return None;
    }

    Some(subtype.to_ascii_lowercase())
}
