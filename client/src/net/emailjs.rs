//! EmailJS REST transport.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds: the request body is still built (and tested), but sending
//! reports a network error since there is no browser fetch.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use async_trait::async_trait;
use serde::Serialize;

use super::gateway::{DeliveryError, EmailTransport};
use super::types::TemplatePayload;
use crate::config::{EMAILJS_SEND_URL, EmailJsCredentials};

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplatePayload,
}

impl<'a> SendRequest<'a> {
    pub fn new(credentials: &'a EmailJsCredentials, payload: &'a TemplatePayload) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
        }
    }
}

/// EmailJS answers `200 OK` on success; any 2xx is treated as accepted.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Browser transport for the EmailJS send endpoint.
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    endpoint: String,
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self { endpoint: EMAILJS_SEND_URL.to_owned() }
    }
}

impl EmailJsClient {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl EmailTransport for EmailJsClient {
    async fn send(&self, credentials: &EmailJsCredentials, payload: &TemplatePayload) -> Result<(), DeliveryError> {
        let body = SendRequest::new(credentials, payload);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&body)
                .map_err(|e| DeliveryError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| DeliveryError::Network(e.to_string()))?;
            let status = resp.status();
            if is_success(status) {
                return Ok(());
            }
            let body = match resp.text().await {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("read email service error body failed: {err}");
                    String::new()
                }
            };
            Err(DeliveryError::Rejected { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("email send to {} skipped for {}", self.endpoint, body.service_id);
            Err(DeliveryError::Network("remote delivery requires a browser".to_owned()))
        }
    }
}
