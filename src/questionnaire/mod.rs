pub mod builtin;

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, DimensionMeta};
use crate::error::QuestionnaireError;

/// How a question is answered in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Scale,
    Single,
    Multi,
    Boolean,
    Text,
}

/// A selectable option with its normalized score value.
///
/// Multi-select answers reference options by `code`, falling back to `label`
/// when no code is assigned. Two options without codes that share a label
/// are indistinguishable to lookup; the first one wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl OptionItem {
    pub fn new(label: &str, value: f64) -> Self {
        OptionItem {
            label: label.to_string(),
            value,
            code: None,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    /// Key under which selections refer to this option.
    pub fn key(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
    pub dimension: Dimension,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Zero marks the question as informational.
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl QuestionSpec {
    pub fn is_scored(&self) -> bool {
        self.weight > 0.0
    }

    /// Finds the option a selection key refers to (code, else label).
    pub fn find_option(&self, key: &str) -> Option<&OptionItem> {
        self.options.iter().find(|option| option.key() == key)
    }
}

/// An ordered question list plus the dimension metadata it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub questions: Vec<QuestionSpec>,
    #[serde(default = "builtin::dimension_metas")]
    pub dimensions: Vec<DimensionMeta>,
}

#[derive(Deserialize)]
struct DefinitionFile {
    version: String,
    #[serde(flatten)]
    questionnaire: Questionnaire,
}

fn id_pattern() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("question id regex is invalid"))
}

impl Questionnaire {
    pub fn new(questions: Vec<QuestionSpec>, dimensions: Vec<DimensionMeta>) -> Self {
        Questionnaire {
            questions,
            dimensions,
        }
    }

    /// The authoritative built-in definition.
    pub fn builtin() -> Self {
        Questionnaire::new(builtin::questions(), builtin::dimension_metas())
    }

    pub fn from_path(path: &Path) -> Result<Self, QuestionnaireError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| QuestionnaireError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML definition and validates it. The `version` field must
    /// be a 1.x semantic version.
    pub fn from_toml_str(contents: &str) -> Result<Self, QuestionnaireError> {
        let file: DefinitionFile = toml::from_str(contents)?;
        let version =
            Version::parse(&file.version).map_err(|source| QuestionnaireError::InvalidVersion {
                version: file.version.clone(),
                source,
            })?;
        let supported = VersionReq::parse("^1").map_err(|source| {
            QuestionnaireError::InvalidVersion {
                version: file.version.clone(),
                source,
            }
        })?;
        if !supported.matches(&version) {
            return Err(QuestionnaireError::UnsupportedVersion(file.version));
        }
        file.questionnaire.validate()?;
        Ok(file.questionnaire)
    }

    /// Checks the structural invariants the scoring engine relies on.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let mut seen = HashSet::new();
        for q in &self.questions {
            if !id_pattern().is_match(&q.id) {
                return Err(QuestionnaireError::InvalidId(q.id.clone()));
            }
            if !seen.insert(q.id.as_str()) {
                return Err(QuestionnaireError::DuplicateId(q.id.clone()));
            }
            if !q.weight.is_finite() || q.weight < 0.0 {
                return Err(QuestionnaireError::InvalidWeight {
                    id: q.id.clone(),
                    weight: q.weight,
                });
            }
            if q.is_scored() && q.kind != QuestionType::Text && q.options.is_empty() {
                return Err(QuestionnaireError::MissingOptions(q.id.clone()));
            }
            if let Some(bad) = q
                .options
                .iter()
                .find(|o| !(0.0..=1.0).contains(&o.value))
            {
                return Err(QuestionnaireError::OptionOutOfRange {
                    id: q.id.clone(),
                    label: bad.label.clone(),
                    value: bad.value,
                });
            }
            if self.meta(q.dimension).is_none() {
                return Err(QuestionnaireError::MissingDimensionMeta(q.dimension));
            }
        }
        Ok(())
    }

    pub fn question(&self, id: &str) -> Option<&QuestionSpec> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn meta(&self, dimension: Dimension) -> Option<&DimensionMeta> {
        self.dimensions.iter().find(|m| m.key == dimension)
    }

    /// Display label for a dimension, falling back to its key.
    pub fn label(&self, dimension: Dimension) -> &str {
        self.meta(dimension)
            .map(|m| m.label.as_str())
            .unwrap_or_else(|| dimension.key())
    }

    /// Questions of one dimension, in definition order.
    pub fn by_dimension(&self, dimension: Dimension) -> impl Iterator<Item = &QuestionSpec> {
        self.questions
            .iter()
            .filter(move |q| q.dimension == dimension)
    }

    pub fn scored(&self) -> impl Iterator<Item = &QuestionSpec> {
        self.questions.iter().filter(|q| q.is_scored())
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::builtin()
    }
}
