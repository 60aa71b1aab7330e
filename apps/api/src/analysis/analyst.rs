//! Career analysis behind a pluggable, trait-based seam.
//!
//! `AppState` holds an `Arc<dyn CareerAnalyst>`; production wires
//! `GeminiAnalyst`, tests wire non-network doubles.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::schema::analysis_response_schema;
use crate::analysis::validate::validate_analysis;
use crate::errors::AppError;
use crate::llm_client::GeminiClient;
use crate::models::analysis::{AnalysisRecord, CareerAnalysis};
use crate::models::profile::Profile;

/// The analyst trait. Implement this to swap backends without touching the
/// endpoint, handler, or session code.
#[async_trait]
pub trait CareerAnalyst: Send + Sync {
    async fn analyze(&self, profile: &Profile) -> Result<AnalysisRecord, AppError>;
}

/// Production analyst: one structured-output call per submission, then
/// validation before the record is admitted into the session.
pub struct GeminiAnalyst {
    llm: GeminiClient,
}

impl GeminiAnalyst {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CareerAnalyst for GeminiAnalyst {
    async fn analyze(&self, profile: &Profile) -> Result<AnalysisRecord, AppError> {
        let prompt = build_analysis_prompt(profile);

        let analysis: CareerAnalysis = self
            .llm
            .generate_json(&prompt, ANALYSIS_SYSTEM, analysis_response_schema())
            .await
            .map_err(|e| AppError::Llm(format!("career analysis failed: {e}")))?;

        let problems = validate_analysis(&analysis);
        if !problems.is_empty() {
            return Err(AppError::SchemaMismatch(problems.join("; ")));
        }

        info!(
            "analysis produced {} target roles, {} gap entries, {} roadmap phases",
            analysis.target_roles_analysis.len(),
            analysis.skill_gap_matrix.len(),
            analysis.career_architecture_roadmap.phases.len()
        );

        Ok(AnalysisRecord::new(analysis))
    }
}

#[cfg(test)]
pub(crate) mod doubles {
    use super::*;

    /// Returns a fixed analysis; records nothing, calls nothing.
    pub struct StaticAnalyst(pub CareerAnalysis);

    #[async_trait]
    impl CareerAnalyst for StaticAnalyst {
        async fn analyze(&self, _profile: &Profile) -> Result<AnalysisRecord, AppError> {
            Ok(AnalysisRecord::new(self.0.clone()))
        }
    }

    /// Simulates a transport failure at the call boundary.
    pub struct FailingAnalyst;

    #[async_trait]
    impl CareerAnalyst for FailingAnalyst {
        async fn analyze(&self, _profile: &Profile) -> Result<AnalysisRecord, AppError> {
            Err(AppError::Llm("connection reset by peer".to_string()))
        }
    }
}
