// Hand-crafted async HTTP client for the Forecourt CMMS backend.
//
// Base path: /api/
// Auth: optional `Authorization: Bearer <token>` header

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;

// ── Error response shape from the backend ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "error")]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Path templates ───────────────────────────────────────────────────

/// Substitute `:name` placeholders in a path template with values from
/// `params`, returning the resolved path segments.
///
/// An unresolved placeholder is a programmer error and fails fast with
/// [`Error::PathTemplate`] rather than producing a literal `:name` URL.
/// Values are percent-encoded when the segments are pushed onto the URL.
pub fn fill_path(template: &str, params: &[(&str, &str)]) -> Result<Vec<String>, Error> {
    template
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let Some(name) = segment.strip_prefix(':') else {
                return Ok(segment.to_owned());
            };
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
                .ok_or_else(|| Error::PathTemplate {
                    placeholder: name.to_owned(),
                    template: template.to_owned(),
                })
        })
        .collect()
}

/// Keep only filters that are actually active.
///
/// A filter at its sentinel default (`"all"`) or left empty is omitted
/// from the query string rather than sent literally.
pub fn active_filters<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
        .copied()
        .collect()
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Forecourt CMMS REST API.
///
/// JSON over HTTPS against a fixed base URL. Requests are issued exactly
/// once: no retries, no response caching, no in-flight deduplication.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client, optionally authenticated.
    ///
    /// When `token` is `None` the `Authorization` header is omitted and
    /// calls are attempted unauthenticated — the server decides, not the
    /// client.
    pub fn new(
        base_url: &str,
        token: Option<&SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| Error::Authentication {
                    message: format!("invalid token header value: {e}"),
                })?;
            bearer.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, bearer);
        }

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Resolve a path template against the base URL.
    ///
    /// `Url::path_segments_mut` percent-encodes each pushed segment, so
    /// parameter values with spaces or slashes cannot break the path.
    fn url(&self, template: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let segments = fill_path(template, params)?;
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|()| Error::Tls(format!("base URL cannot be a base: {}", self.base_url)))?;
            parts.pop_if_empty();
            for segment in &segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.url(template, params)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        template: &str,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.url(template, params)?;
        let query = active_filters(query);
        debug!("GET {url} query={query:?}");

        let resp = self.http.get(url).query(&query).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        template: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(template, params)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post_bytes<T: DeserializeOwned>(
        &self,
        template: &str,
        params: &[(&str, &str)],
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<T, Error> {
        let url = self.url(template, params)?;
        debug!("POST {url} ({} bytes)", body.len());

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        template: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(template, params)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(
        &self,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<(), Error> {
        let url = self.url(template, params)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    pub(crate) async fn post_no_response<B: Serialize + Sync>(
        &self,
        template: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(template, params)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // char-based so a multi-byte boundary can't panic
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            let message = serde_json::from_str::<ErrorResponse>(&raw)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "invalid or expired token".to_owned());
            return Error::Authentication { message };
        }

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }
}
