//! Contact-form delivery through EmailJS.
//!
//! Client-side (csr): a JSON `POST` to the configured endpoint via `gloo-net`.
//! Native builds have no network path and report [`MailError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`MailError`] whose `Display` text is what the form
//! shows inline and in the error toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mail_test.rs"]
mod mail_test;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::state::contact::ContactPayload;

/// Body EmailJS returns for an accepted message.
pub const ACCEPTED_BODY: &str = "OK";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MailError {
    #[error("EmailJS configuration is missing. Please check your environment variables.")]
    NotConfigured,
    #[error("Failed to send message: {0}")]
    Transport(String),
    #[error("Failed to send message")]
    Rejected { status: u16, body: String },
    #[error("Mail delivery is not available in this build")]
    Unavailable,
}

/// JSON body of an EmailJS send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

/// Assemble the request body.
///
/// # Errors
///
/// Returns [`MailError::NotConfigured`] if any credential is missing.
pub fn build_request<'a>(
    config: &'a SiteConfig,
    payload: &'a ContactPayload,
) -> Result<EmailJsRequest<'a>, MailError> {
    match (
        config.emailjs_service_id.as_deref(),
        config.emailjs_template_id.as_deref(),
        config.emailjs_public_key.as_deref(),
    ) {
        (Some(service_id), Some(template_id), Some(user_id)) => {
            Ok(EmailJsRequest { service_id, template_id, user_id, template_params: payload })
        }
        _ => Err(MailError::NotConfigured),
    }
}

/// Classify the endpoint's answer. Only a 2xx carrying `OK` counts as sent.
///
/// # Errors
///
/// Returns [`MailError::Rejected`] for anything else.
pub fn interpret_response(status: u16, body: &str) -> Result<(), MailError> {
    if (200..300).contains(&status) && body.trim() == ACCEPTED_BODY {
        Ok(())
    } else {
        Err(MailError::Rejected { status, body: body.to_owned() })
    }
}

/// Deliver a contact message.
///
/// # Errors
///
/// See [`MailError`].
pub async fn send_contact(config: &SiteConfig, payload: &ContactPayload) -> Result<(), MailError> {
    let request = build_request(config, payload)?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.emailjs_endpoint)
            .json(&request)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| MailError::Transport(e.to_string()))?;
        let result = interpret_response(status, &body);
        if let Err(err) = &result {
            log::warn!("contact mail rejected: {err:?}");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("contact mail for {} not sent: no network in this build", request.template_params.user_email);
        Err(MailError::Unavailable)
    }
}
