//! Mission review client.
//!
//! Missions are verified by an external coach service: the learner's note
//! plus screenshot evidence go out as a multipart form, and a structured
//! verdict comes back. The progress engine only sees the [`MissionReviewer`]
//! trait, so tests can swap in a local fake.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ReviewConfig;
use crate::types::Lang;

/// Review endpoint path on the coach service
const VERIFY_PATH: &str = "/api/coach/verify-screenshot";

/// Structured verdict returned by the coach service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionVerdict {
    pub passed: bool,
    pub score: u32,
    pub summary: String,
    /// Checkpoints confirmed in the evidence
    pub found: Vec<String>,
    /// Checkpoints the evidence failed to show
    pub missing: Vec<String>,
    pub next_action: String,
}

/// Screenshot (or other file) attached to a mission submission
#[derive(Debug, Clone)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Everything the coach service needs to judge one mission attempt
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub language: Lang,
    pub module_title: String,
    pub mission_title: String,
    pub learner_note: String,
    pub required_checks: Vec<String>,
    pub evidence: EvidenceFile,
}

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status and an error detail
    #[error("review service rejected the request: {0}")]
    Service(String),
    #[error("review response was malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait MissionReviewer: Send + Sync {
    async fn verify(&self, request: ReviewRequest) -> Result<MissionVerdict, ReviewError>;
}

/// Production reviewer talking to the coach service over HTTP
pub struct HttpReviewer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReviewer {
    pub fn from_config(config: &ReviewConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("building review HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    detail: Option<String>,
}

#[async_trait]
impl MissionReviewer for HttpReviewer {
    async fn verify(&self, request: ReviewRequest) -> Result<MissionVerdict, ReviewError> {
        let checks = serde_json::to_string(&request.required_checks)
            .map_err(|e| ReviewError::Malformed(e.to_string()))?;

        let file_part = multipart::Part::bytes(request.evidence.bytes)
            .file_name(request.evidence.file_name)
            .mime_str(&request.evidence.content_type)
            .map_err(ReviewError::Transport)?;

        let form = multipart::Form::new()
            .text("language", request.language.as_str())
            .text("module_title", request.module_title)
            .text("mission_title", request.mission_title)
            .text("learner_note", request.learner_note)
            .text("required_checks", checks)
            .part("screenshot", file_part);

        let url = format!("{}{}", self.base_url, VERIFY_PATH);
        debug!(%url, "submitting mission evidence for review");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("status {status}"));
            warn!(%status, %detail, "review service returned an error");
            return Err(ReviewError::Service(detail));
        }

        response
            .json::<MissionVerdict>()
            .await
            .map_err(|e| ReviewError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_fields_default_when_absent() {
        let verdict: MissionVerdict =
            serde_json::from_str(r#"{"passed": true, "score": 85}"#).unwrap();
        assert!(verdict.passed);
        assert_eq!(verdict.score, 85);
        assert!(verdict.summary.is_empty());
        assert!(verdict.found.is_empty());
        assert!(verdict.next_action.is_empty());
    }

    #[test]
    fn verdict_parses_full_service_payload() {
        let raw = r#"{
            "passed": false,
            "score": 40,
            "summary": "Prompt is visible but no output",
            "found": ["Learner prompt is visible"],
            "missing": ["AI output is visible"],
            "next_action": "Retake the screenshot with the model reply on screen"
        }"#;
        let verdict: MissionVerdict = serde_json::from_str(raw).unwrap();
        assert!(!verdict.passed);
        assert_eq!(verdict.missing.len(), 1);
        assert!(verdict.next_action.contains("screenshot"));
    }
}
