//! Client side of the payment terminal's local HTTP API.
//!
//! Every call builds its own `reqwest::Client` and drops it when the call
//! returns, so no connection outlives the inbound request that caused it.

use log::{debug, info};
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

pub(crate) const DEVICE_TIMEOUT_SECONDS: u64 = 10;

/// Operations the terminal exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceOperation {
    /// start a payment
    Payment,
    /// poll the state of a started payment
    Query,
}

impl DeviceOperation {
    pub fn path(&self) -> &'static str {
        match self {
            DeviceOperation::Payment => "/api/payment",
            DeviceOperation::Query => "/api/query",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PaymentDevice {
    base_url: String,
    timeout: Duration,
}

impl PaymentDevice {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEVICE_TIMEOUT_SECONDS),
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self, op: DeviceOperation) -> String {
        format!("{}{}", self.base_url, op.path())
    }

    /// POST `payload` to the terminal as is and hand back its JSON reply.
    ///
    /// Connection failures, timeouts, non-2xx statuses and non-JSON replies
    /// all come back as the `reqwest::Error` that raised them.
    pub async fn forward(
        &self,
        op: DeviceOperation,
        payload: &Value,
    ) -> Result<Value, reqwest::Error> {
        let url = self.url(op);
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        debug!("forwarding {:?} to {}", op, url);

        let res = client
            .post(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        info!("device answered {} for {:?}", res.status(), op);
        res.json::<Value>().await
    }
}

/// Render an error with its whole source chain, `outer: inner: ...`.
///
/// reqwest keeps the interesting part (refused, timed out) in the sources.
pub(crate) fn describe(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !out.contains(&cause_text) {
            out.push_str(": ");
            out.push_str(&cause_text);
        }
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn operation_paths() {
        let device = PaymentDevice::new("http://192.168.1.100:8080");
        assert_eq!(
            device.url(DeviceOperation::Payment),
            "http://192.168.1.100:8080/api/payment"
        );
        assert_eq!(
            device.url(DeviceOperation::Query),
            "http://192.168.1.100:8080/api/query"
        );
    }

    #[actix_web::test]
    async fn forward_relays_body_both_ways() {
        let server = MockServer::start().await;
        let reply = json!({"data": {"uuid": "a1b2", "info": {"status": "paying"}}});
        Mock::given(method("POST"))
            .and(path("/api/payment"))
            .and(body_json(json!({"amount": 12.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let device = PaymentDevice::new(server.uri());
        let got = device
            .forward(DeviceOperation::Payment, &json!({"amount": 12.5}))
            .await
            .unwrap();
        assert_eq!(got, reply);
    }

    #[actix_web::test]
    async fn forward_fails_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/query"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = PaymentDevice::new(server.uri())
            .forward(DeviceOperation::Query, &json!({"uuid": "a1b2"}))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        assert!(describe(&err).contains("503"));
    }

    #[actix_web::test]
    async fn forward_fails_on_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let err = PaymentDevice::new(server.uri())
            .with_timeout(Duration::from_millis(200))
            .forward(DeviceOperation::Payment, &json!({}))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[actix_web::test]
    async fn forward_fails_on_non_json_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&server)
            .await;

        let err = PaymentDevice::new(server.uri())
            .forward(DeviceOperation::Payment, &json!({}))
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }
}
