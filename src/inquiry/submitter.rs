//! Delivery of finished inquiries.
//!
//! The controller does not care how a lead travels; it only awaits an
//! [`InquirySubmitter`]. Two adapters ship with the crate:
//! - [`HttpSubmitter`] posts the form as JSON to a configured endpoint
//! - [`LogSubmitter`] records the lead in the log when no endpoint is set

use super::{InquiryForm, SubmissionError};
use async_trait::async_trait;
use log::*;

/// Port for delivering a validated inquiry.
///
#[async_trait]
pub trait InquirySubmitter: Send + Sync {
    async fn submit(&self, form: &InquiryForm) -> Result<(), SubmissionError>;
}

/// Posts inquiries to an HTTP endpoint.
///
pub struct HttpSubmitter {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpSubmitter {
    /// Returns a new instance for the given endpoint URL.
    ///
    pub fn new(endpoint: &str) -> Self {
        HttpSubmitter {
            endpoint: endpoint.to_owned(),
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl InquirySubmitter for HttpSubmitter {
    async fn submit(&self, form: &InquiryForm) -> Result<(), SubmissionError> {
        debug!("Posting inquiry from '{}' to {}...", form.email, self.endpoint);
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!("Inquiry endpoint answered with status {}: {}", status, message);
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        info!("Inquiry delivered (status {}).", status);
        Ok(())
    }
}

/// Accepts every inquiry and writes it to the log.
///
#[derive(Default)]
pub struct LogSubmitter;

#[async_trait]
impl InquirySubmitter for LogSubmitter {
    async fn submit(&self, form: &InquiryForm) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(form)
            .map_err(|e| SubmissionError::Other(format!("Failed to encode inquiry: {}", e)))?;
        info!("Received inquiry: {}", payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::{Budget, ProjectType, Timeline};
    use httpmock::MockServer;
    use serde_json::json;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            project_type: Some(ProjectType::Product),
            budget: Some(Budget::Over100k),
            timeline: Some(Timeline::Flexible),
            requirements: "Haptics-ready training module for surgeons.".to_string(),
        }
    }

    #[tokio::test]
    async fn http_submit_success() -> Result<(), SubmissionError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/inquiries").json_body(json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "projectType": "product",
                    "budget": "gt100",
                    "timeline": "flexible",
                    "requirements": "Haptics-ready training module for surgeons.",
                }));
                then.status(201);
            })
            .await;

        let submitter = HttpSubmitter::new(&server.url("/inquiries"));
        submitter.submit(&form()).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn http_submit_rejected() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/inquiries");
                then.status(500).body("boom");
            })
            .await;

        let submitter = HttpSubmitter::new(&server.url("/inquiries"));
        match submitter.submit(&form()).await {
            Err(SubmissionError::Rejected { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn log_submit_always_succeeds() {
        assert!(LogSubmitter.submit(&form()).await.is_ok());
    }
}
