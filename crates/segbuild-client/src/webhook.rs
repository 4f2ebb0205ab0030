//! HTTP webhook delivery
//!
//! Posts the payload as `application/json` to a fixed URL. By default only
//! transport-level failures count as errors; any HTTP response, whatever its
//! status, is a completed delivery. Set
//! [`WebhookOptions::require_success_status`] to treat non-2xx as failure.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use segbuild_core::prelude::*;
use segbuild_core::SubmissionPayload;

use crate::sink::{Delivery, SegmentSink};

/// Connection options for [`WebhookClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookOptions {
    pub url: String,
    /// Whole-request timeout; `None` waits for the transport to give up
    pub timeout: Option<Duration>,
    pub require_success_status: bool,
}

impl WebhookOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            require_success_status: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_required_success_status(mut self, required: bool) -> Self {
        self.require_success_status = required;
        self
    }
}

/// Parse and validate an endpoint URL
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_endpoint(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Sink that POSTs segments to an HTTP endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
    require_success_status: bool,
}

impl WebhookClient {
    /// Build a client, validating the endpoint URL up front
    pub fn new(options: &WebhookOptions) -> Result<Self> {
        let endpoint = parse_endpoint(&options.url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            require_success_status: options.require_success_status,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SegmentSink for WebhookClient {
    async fn deliver(&self, payload: SubmissionPayload) -> Result<Delivery> {
        debug!(
            "POST {} (segment {:?}, {} schema fields)",
            self.endpoint,
            payload.segment_name,
            payload.schema.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let delivery = Delivery::with_status(response.status().as_u16());
        if delivery.is_error_status() {
            if self.require_success_status {
                return Err(Error::EndpointStatus {
                    status: response.status().as_u16(),
                });
            }
            warn!(
                "Endpoint answered HTTP {}; treating as delivered",
                response.status()
            );
        }

        Ok(delivery)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbuild_core::find_field;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn churned_payload() -> SubmissionPayload {
        SubmissionPayload::from_selection("Churned", [find_field("age").unwrap()])
    }

    #[test]
    fn test_parse_endpoint_accepts_http() {
        assert!(parse_endpoint("https://webhook.site/abc").is_ok());
        assert!(parse_endpoint("http://localhost:8080/hook").is_ok());
    }

    #[test]
    fn test_parse_endpoint_rejects_garbage() {
        let err = parse_endpoint("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));

        let err = parse_endpoint("ftp://example.com/drop").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "segment_name": "Churned",
                "schema": [{ "age": "Age" }]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = WebhookClient::new(&WebhookOptions::new(format!("{}/hook", server.uri())))
            .unwrap();
        let delivery = client.deliver(churned_payload()).await.unwrap();

        assert_eq!(delivery.status, Some(200));
    }

    #[tokio::test]
    async fn test_server_error_counts_as_delivered_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = WebhookClient::new(&WebhookOptions::new(server.uri())).unwrap();
        let delivery = client.deliver(churned_payload()).await.unwrap();

        assert_eq!(delivery.status, Some(500));
        assert!(delivery.is_error_status());
    }

    #[tokio::test]
    async fn test_server_error_fails_when_status_required() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422))
            .expect(1)
            .mount(&server)
            .await;

        let options = WebhookOptions::new(server.uri()).with_required_success_status(true);
        let client = WebhookClient::new(&options).unwrap();
        let err = client.deliver(churned_payload()).await.unwrap_err();

        assert!(matches!(err, Error::EndpointStatus { status: 422 }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = WebhookClient::new(&WebhookOptions::new(format!("http://{addr}/hook")))
            .unwrap();
        let err = client.deliver(churned_payload()).await.unwrap_err();

        assert!(matches!(err, Error::Transport { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_describe_is_endpoint() {
        let client = WebhookClient::new(&WebhookOptions::new("https://webhook.site/abc")).unwrap();
        assert_eq!(client.describe(), "https://webhook.site/abc");
    }
}
