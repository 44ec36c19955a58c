//! Classification Request Flow
//!
//! `Idle → Classifying → {Ready, Failed}`. Empty or whitespace-only input is
//! rejected locally as a validation error without contacting the network.

use std::sync::Arc;

use crate::client::types::{ClassificationResult, ModelChoice, ModelInfo};
use crate::client::ClassifyBackend;
use crate::error::ClassifyError;

/// Lifecycle phase of one classification view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyPhase {
    Idle,
    Classifying,
    Ready,
    Failed,
}

/// State for the classification view.
pub struct ClassifierSession {
    backend: Arc<dyn ClassifyBackend>,
    phase: ClassifyPhase,
    model: ModelChoice,
    result: Option<ClassificationResult>,
    error: Option<String>,
    model_info: Option<ModelInfo>,
}

impl ClassifierSession {
    pub fn new(backend: Arc<dyn ClassifyBackend>, model: ModelChoice) -> Self {
        Self {
            backend,
            phase: ClassifyPhase::Idle,
            model,
            result: None,
            error: None,
            model_info: None,
        }
    }

    /// Classifies `text` under the currently chosen model.
    ///
    /// Empty input after trimming fails locally with
    /// [`ClassifyError::EmptyInput`]; no request is issued.
    pub async fn classify(&mut self, text: &str) -> Result<(), ClassifyError> {
        if text.trim().is_empty() {
            let err = ClassifyError::EmptyInput;
            self.error = Some(err.to_string());
            self.result = None;
            self.phase = ClassifyPhase::Failed;
            return Err(err);
        }

        self.phase = ClassifyPhase::Classifying;
        match self.backend.classify(text, self.model).await {
            Ok(result) => {
                tracing::debug!(
                    "Classified {} chars as {:?} ({:.2})",
                    result.text_length,
                    result.predicted_category,
                    result.confidence
                );
                self.result = Some(result);
                self.error = None;
                self.phase = ClassifyPhase::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Classification failed: {}", err);
                self.error = Some(err.to_string());
                self.result = None;
                self.phase = ClassifyPhase::Failed;
                Err(err.into())
            }
        }
    }

    /// Switches the model and refreshes its info.
    ///
    /// The info fetch is best-effort: a failure is logged and leaves both the
    /// previous info and the classification phase untouched.
    pub async fn set_model(&mut self, model: ModelChoice) {
        self.model = model;
        self.refresh_model_info().await;
    }

    /// Re-queries info for the current model, keeping stale info on failure.
    pub async fn refresh_model_info(&mut self) {
        match self.backend.model_info(self.model).await {
            Ok(info) => {
                self.model_info = Some(info);
            }
            Err(err) => {
                tracing::warn!(
                    "Model info fetch for {} failed (non-fatal): {}",
                    self.model.as_str(),
                    err
                );
            }
        }
    }

    // --- State accessors ---

    pub fn phase(&self) -> ClassifyPhase {
        self.phase
    }

    pub fn model(&self) -> ModelChoice {
        self.model
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.model_info.as_ref()
    }
}
