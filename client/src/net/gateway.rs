//! Submission gateway: remote delivery when configured, `mailto:` otherwise.
//!
//! DESIGN
//! ======
//! The gateway owns no I/O of its own. The remote call goes through an
//! [`EmailTransport`] and the local mail-client handoff through a
//! [`MailHandoff`], so the decision logic runs natively under test with
//! in-memory doubles while the browser build plugs in `gloo-net` and
//! `window.location`.
//!
//! ERROR HANDLING
//! ==============
//! Only the remote path can fail. The fallback path resolves as soon as the
//! handoff has been attempted; whether a mail client actually opened is not
//! observable from the page.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use async_trait::async_trait;

use super::mailto::mailto_href;
use super::types::{FieldValues, TemplatePayload};
use crate::config::{DeliveryConfig, EmailJsCredentials, FALLBACK_SUBJECT, SUPPORT_EMAIL};

/// Outcome of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The remote email service acknowledged the send.
    Remote,
    /// A prefilled `mailto:` link was handed to the browser.
    MailtoFallback { href: String },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Remote template-send API.
#[async_trait(?Send)]
pub trait EmailTransport {
    async fn send(&self, credentials: &EmailJsCredentials, payload: &TemplatePayload) -> Result<(), DeliveryError>;
}

/// Hands a `mailto:` link to the local mail client.
pub trait MailHandoff {
    fn open(&self, href: &str);
}

/// Routes a form submission to the configured delivery path.
pub struct SubmissionGateway<T, H> {
    config: DeliveryConfig,
    transport: T,
    handoff: H,
}

impl<T: EmailTransport, H: MailHandoff> SubmissionGateway<T, H> {
    pub fn new(config: DeliveryConfig, transport: T, handoff: H) -> Self {
        Self { config, transport, handoff }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Deliver one submission.
    ///
    /// With EmailJS configured the transport is called exactly once with
    /// `payload` and its result is returned unchanged. Otherwise `fields`
    /// become the body of a `mailto:` link that is handed off, and the call
    /// resolves with [`Delivery::MailtoFallback`].
    ///
    /// # Errors
    ///
    /// Returns the transport's [`DeliveryError`] on the remote path.
    pub async fn submit(&self, fields: &FieldValues, payload: &TemplatePayload) -> Result<Delivery, DeliveryError> {
        match &self.config {
            DeliveryConfig::EmailJs(credentials) => {
                self.transport.send(credentials, payload).await?;
                Ok(Delivery::Remote)
            }
            DeliveryConfig::MailtoOnly => {
                let href = mailto_href(SUPPORT_EMAIL, FALLBACK_SUBJECT, fields);
                log::info!("remote delivery not configured; opening mail client");
                self.handoff.open(&href);
                Ok(Delivery::MailtoFallback { href })
            }
        }
    }
}

/// Handoff that navigates the current window to the link.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHandoff;

impl MailHandoff for BrowserHandoff {
    fn open(&self, href: &str) {
        if !crate::util::browser::open_href(href) {
            log::debug!("mail client handoff was not accepted");
        }
    }
}

/// Gateway wired to the real browser transport and handoff.
pub type BrowserGateway = SubmissionGateway<super::emailjs::EmailJsClient, BrowserHandoff>;

impl BrowserGateway {
    pub fn for_browser(config: DeliveryConfig) -> Self {
        Self::new(config, super::emailjs::EmailJsClient::default(), BrowserHandoff)
    }
}
