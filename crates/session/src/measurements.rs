//! Body-measurement draft persistence.
//!
//! The measurements dialog saves whatever the shopper typed as a single
//! key-value entry: free-text fields plus a unit flag. There is no schema
//! versioning and no migration - the draft is a convenience, not a record.
//! The session core only writes it; reading it back is up to the caller
//! (the CLI shows it, custom-made orders may prefill from it).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Unit the shopper entered measurements in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[default]
    Cm,
    Inch,
}

impl std::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cm => write!(f, "cm"),
            Self::Inch => write!(f, "inch"),
        }
    }
}

impl std::str::FromStr for MeasurementUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Cm),
            "inch" => Ok(Self::Inch),
            _ => Err(format!("invalid measurement unit: {s}")),
        }
    }
}

/// The persisted measurement draft.
///
/// Fields are free text exactly as typed into the form; empty strings mean
/// the shopper left the field blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementDraft {
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub chest: String,
    #[serde(default)]
    pub waist: String,
    #[serde(default)]
    pub hips: String,
    #[serde(default)]
    pub shoulders: String,
    #[serde(default)]
    pub inseam: String,
    #[serde(default)]
    pub sleeve_length: String,
    #[serde(default)]
    pub bust: String,
    #[serde(default)]
    pub under_bust: String,
    #[serde(default)]
    pub dress_length: String,
    #[serde(default)]
    pub head_circumference: String,
    #[serde(default)]
    pub unit: MeasurementUnit,
}

impl MeasurementDraft {
    /// True when every field was left blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.height,
            &self.weight,
            &self.chest,
            &self.waist,
            &self.hips,
            &self.shoulders,
            &self.inseam,
            &self.sleeve_length,
            &self.bust,
            &self.under_bust,
            &self.dress_length,
            &self.head_circumference,
        ]
        .into_iter()
        .all(|field| field.trim().is_empty())
    }
}

/// Errors that can occur reading or writing a draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftStoreError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Synchronous draft persistence.
pub trait DraftStore {
    /// Persist the draft, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be written.
    fn save(&self, draft: &MeasurementDraft) -> Result<(), DraftStoreError>;

    /// Load the stored draft, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored draft exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<MeasurementDraft>, DraftStoreError>;
}

/// Draft store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    /// Create a store writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for JsonDraftStore {
    fn save(&self, draft: &MeasurementDraft) -> Result<(), DraftStoreError> {
        let json = serde_json::to_string_pretty(draft)
            .map_err(|e| DraftStoreError::Parse(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DraftStoreError::Io(e.to_string()))?;
            }
        }
        std::fs::write(&self.path, json).map_err(|e| DraftStoreError::Io(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "Saved measurement draft");
        Ok(())
    }

    fn load(&self) -> Result<Option<MeasurementDraft>, DraftStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DraftStoreError::Io(e.to_string())),
        };

        let draft =
            serde_json::from_str(&content).map_err(|e| DraftStoreError::Parse(e.to_string()))?;
        Ok(Some(draft))
    }
}
