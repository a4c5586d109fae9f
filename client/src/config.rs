//! Delivery configuration resolved once at startup.
//!
//! DESIGN
//! ======
//! EmailJS credentials are baked in at build time through `option_env!`.
//! Whether remote delivery is available is decided here, once, and carried
//! as a typed `DeliveryConfig` so nothing downstream inspects credential
//! strings again.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Marker used by unconfigured credential templates (`YOUR_SERVICE_ID`, ...).
pub const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Mailbox that receives fallback requests and is shown as the manual contact.
pub const SUPPORT_EMAIL: &str = "flashfyonlinestore@gmail.com";

/// Subject line of the `mailto:` fallback message.
pub const FALLBACK_SUBJECT: &str = "Flashfy request";

/// EmailJS REST endpoint for template sends.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the EmailJS template send call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// How lead forms are delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeliveryConfig {
    /// All three EmailJS credentials are present.
    EmailJs(EmailJsCredentials),
    /// No usable credentials; forms open the local mail client instead.
    #[default]
    MailtoOnly,
}

impl DeliveryConfig {
    /// Resolve raw credential values into a delivery mode.
    ///
    /// A credential counts as present when it is non-empty after trimming and
    /// does not contain [`PLACEHOLDER_MARKER`]. Remote delivery needs all three.
    pub fn resolve(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Self {
        match (credential(service_id), credential(template_id), credential(public_key)) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                Self::EmailJs(EmailJsCredentials { service_id, template_id, public_key })
            }
            _ => Self::MailtoOnly,
        }
    }

    /// Resolve from the `FLASHFY_EMAILJS_*` variables captured at build time.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("FLASHFY_EMAILJS_SERVICE_ID"),
            option_env!("FLASHFY_EMAILJS_TEMPLATE_ID"),
            option_env!("FLASHFY_EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::EmailJs(_))
    }
}

fn credential(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() || value.contains(PLACEHOLDER_MARKER) {
        return None;
    }
    Some(value.to_owned())
}
