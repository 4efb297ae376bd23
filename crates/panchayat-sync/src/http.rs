//! HTTP client for the dispute backend's analyze and case-listing endpoints.
//!
//! The backend speaks camelCase JSON; the DTOs here are its wire shapes, not
//! the engine's local analysis type. The remote analysis is free text from a
//! different pipeline and carries its legal references as plain strings.

use chrono::{DateTime, Utc};
use panchayat_core::DisputeCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client for the dispute backend.
pub struct DisputeClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    claimant_arguments: &'a [String],
    respondent_arguments: &'a [String],
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    status: String,
    analysis: RemoteAnalysis,
}

/// Analysis as produced by the backend's own pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAnalysis {
    pub claimant_legal_references: Vec<String>,
    pub respondent_legal_references: Vec<String>,
    pub suggested_resolution: String,
    pub ethical_recommendations: Vec<String>,
}

/// A dispute case record from the backend's case list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DisputeCategory,
    pub status: String,
    /// ISO 8601 timestamp string.
    pub filing_date: String,
}

impl DisputeClient {
    /// Create a new client for the given backend base URL.
    ///
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit both parties' arguments for remote analysis.
    pub async fn analyze_remote(
        &self,
        claimant: &[String],
        respondent: &[String],
    ) -> Result<RemoteAnalysis, SyncError> {
        let url = format!("{}/analyze-dispute", self.base_url);

        info!(url = %url, "submitting dispute for remote analysis");
        let resp = self
            .client
            .post(&url)
            .json(&AnalyzeRequest {
                claimant_arguments: claimant,
                respondent_arguments: respondent,
            })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let result: AnalyzeResponse = resp.json().await?;
        info!(status = %result.status, "remote analysis complete");
        Ok(result.analysis)
    }

    /// Pull dispute cases from the backend.
    ///
    /// If `since` is provided, only cases filed after that timestamp are
    /// returned. Otherwise, all cases are returned.
    pub async fn pull_cases(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<RemoteCase>, SyncError> {
        let mut url = format!("{}/api/disputes", self.base_url);
        if let Some(ts) = since {
            url.push_str(&format!("?since={}", ts.to_rfc3339()));
        }

        info!(url = %url, "pulling dispute cases");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let cases: Vec<RemoteCase> = resp.json().await?;
        info!(count = cases.len(), "pulled cases");
        Ok(cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_uses_camel_case_wire_names() {
        let claimant = vec!["the contract was breached".to_string()];
        let respondent = vec!["delivery was delayed".to_string()];
        let json = serde_json::to_value(AnalyzeRequest {
            claimant_arguments: &claimant,
            respondent_arguments: &respondent,
        })
        .unwrap();
        assert!(json.get("claimantArguments").is_some());
        assert!(json.get("respondentArguments").is_some());
    }

    #[test]
    fn remote_analysis_json_roundtrip() {
        let json = r#"{
            "status": "success",
            "analysis": {
                "claimantLegalReferences": ["Section 73, Indian Contract Act, 1872"],
                "respondentLegalReferences": ["Section 55, Indian Contract Act, 1872"],
                "suggestedResolution": "Compensate the claimant for proven losses.",
                "ethicalRecommendations": ["Act in good faith"]
            }
        }"#;
        let parsed: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.analysis.claimant_legal_references.len(), 1);
        assert_eq!(
            parsed.analysis.suggested_resolution,
            "Compensate the claimant for proven losses."
        );
    }

    #[test]
    fn remote_case_json_roundtrip() {
        let case = RemoteCase {
            id: "1708500000000".into(),
            title: "Breach of supply agreement".into(),
            description: "Supplier failed to deliver on time.".into(),
            category: DisputeCategory::ContractLaw,
            status: "Pending".into(),
            filing_date: "2026-02-21T10:00:00Z".into(),
        };
        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("\"category\":\"Contract Law\""));
        assert!(json.contains("\"filingDate\""));
        let parsed: RemoteCase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, DisputeCategory::ContractLaw);
        assert_eq!(parsed.title, "Breach of supply agreement");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = DisputeClient::new("http://localhost:5000/".into());
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
