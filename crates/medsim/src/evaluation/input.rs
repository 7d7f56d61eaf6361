use super::domain::Case;
use super::scores::MetricScores;
use crate::conversation::ConversationItem;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Document produced by the upstream evaluator for one exam attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evaluation_metric_scores: MetricScores,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversation_data: Vec<ConversationItem>,
}

impl EvaluationInput {
    /// Fallback used when no evaluator output is available.
    pub fn unknown() -> Self {
        Self {
            case: Some(Case::Unknown.name().to_string()),
            ..Self::default()
        }
    }

    pub fn resolved_case(&self) -> Case {
        self.case
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(Case::resolve)
            .unwrap_or(Case::Unknown)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read evaluator output, falling back to [`EvaluationInput::unknown`] when
    /// the file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::from_path(path.as_ref()) {
            Ok(input) => {
                info!(path = %path.as_ref().display(), "loaded evaluation input");
                input
            }
            Err(err) => {
                warn!(error = %err, "using default evaluation input");
                Self::unknown()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unable to read evaluation input {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("evaluation input {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
