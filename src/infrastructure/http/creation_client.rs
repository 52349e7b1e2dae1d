//! HTTP implementation of the wizard's creation gateway.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::PageSummary;
use crate::domain::wizard::{CreationGateway, WizardFormData};
use crate::error::AppError;

/// Creation gateway talking to a running flashpage service over HTTP.
///
/// Used by out-of-process wizard frontends (the terminal wizard); the
/// endpoints are the service's own `/api/pages` routes.
pub struct HttpCreationGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCreationGateway {
    /// Creates a gateway against the service at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CreationGateway for HttpCreationGateway {
    async fn check_slug(&self, slug: &str) -> Result<bool, AppError> {
        let response = self
            .http
            .get(format!("{}/api/pages/check/{}", self.base_url, slug))
            .send()
            .await?
            .error_for_status()?;

        let body: AvailabilityBody = response.json().await?;
        Ok(body.available)
    }

    async fn create(&self, form: &WizardFormData) -> Result<PageSummary, AppError> {
        let response = self
            .http
            .post(format!("{}/api/pages", self.base_url))
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: CreateBody = response.json().await?;
            return Ok(body.record);
        }

        // Carry the collaborator's message through so the wizard can
        // surface it verbatim.
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|e| e.error.message)
            .unwrap_or_default();

        Err(match status.as_u16() {
            409 => AppError::conflict(message, json!({})),
            400 => AppError::bad_request(message, json!({})),
            _ => AppError::upstream(message, json!({ "status": status.as_u16() })),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityBody {
    available: bool,
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    record: PageSummary,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
