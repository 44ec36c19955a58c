use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One author of a publication.
///
/// The crawler emits authors either as bare name strings or as objects with a
/// profile link, depending on what the source page exposed; both shapes decode
/// into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AuthorWire")]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Accepts both author shapes seen on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorWire {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        link: Option<String>,
    },
}

impl From<AuthorWire> for Author {
    fn from(wire: AuthorWire) -> Self {
        match wire {
            AuthorWire::Name(name) => Author { name, link: None },
            AuthorWire::Full { name, link } => Author { name, link },
        }
    }
}

/// A single publication as returned by the search endpoint.
///
/// Immutable once decoded; the session controller only ever reorders the
/// containing `Vec`, never edits an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub published_date: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    /// Relevance score in [0, 1]. Zero for empty-query "browse all" results.
    #[serde(default)]
    pub score: f64,
}

/// Response of `GET /search`.
///
/// Authoritative for `total`, `page`, and `total_pages`; `results` ordering is
/// the server's relevance ranking at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Publication>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}

/// Which classification model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelChoice {
    NaiveBayes,
    LogisticRegression,
}

impl ModelChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelChoice::NaiveBayes => "naive_bayes",
            ModelChoice::LogisticRegression => "logistic_regression",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "naive_bayes" => Some(ModelChoice::NaiveBayes),
            "logistic_regression" => Some(ModelChoice::LogisticRegression),
            _ => None,
        }
    }
}

/// Request body of `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    pub model: ModelChoice,
}

/// Response of `POST /classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub predicted_category: String,
    pub confidence: f64,
    /// Per-category probability distribution.
    pub probabilities: HashMap<String, f64>,
    /// Human-readable justification generated by the service.
    #[serde(default)]
    pub explanation: Option<String>,
    pub model_used: String,
    pub text_length: usize,
    pub processed_text_length: usize,
}

/// Response of `GET /model-info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_type: String,
    pub is_trained: bool,
    pub total_documents: usize,
    pub categories: Vec<String>,
}
