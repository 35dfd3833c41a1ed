use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerMap, AnswerValue};
use crate::error::StoreError;

/// Storage namespace; also the default file stem.
pub const NAMESPACE: &str = "healer-assessment";

/// Answers and coach notes for one assessment session.
///
/// An explicit container owned by the caller. Scoring takes the answer map
/// by reference and never sees the store itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentStore {
    pub answers: AnswerMap,
    pub notes: String,
}

#[derive(Serialize, Deserialize)]
struct Persisted {
    #[serde(default)]
    namespace: String,
    #[serde(flatten)]
    state: AssessmentStore,
}

impl AssessmentStore {
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(format!("{NAMESPACE}.json"))
    }

    /// Loads the store from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no saved answers, starting empty");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let persisted: Persisted =
            serde_json::from_str(&contents).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if persisted.namespace != NAMESPACE {
            tracing::warn!(
                namespace = %persisted.namespace,
                "store written under a different namespace, loading anyway"
            );
        }
        tracing::debug!(
            path = %path.display(),
            answers = persisted.state.answers.len(),
            "loaded saved answers"
        );
        Ok(persisted.state)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let persisted = Persisted {
            namespace: NAMESPACE.to_string(),
            state: self.clone(),
        };
        let json = serde_json::to_string_pretty(&persisted).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved answers");
        Ok(())
    }

    pub fn set_answer(&mut self, id: &str, value: AnswerValue) {
        self.answers.insert(id.to_string(), value);
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Clears answers and notes.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.notes.clear();
    }
}
