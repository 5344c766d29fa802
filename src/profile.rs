//! Student profile stored as `me.yaml` at the project root.
//!
//! The notebooks read the same file to stamp reports with the student's
//! name and ID, so the field names are fixed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of digits in a student ID.
pub const STUDENT_ID_DIGITS: usize = 12;

/// The student running the experiments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_name: String,
    pub student_id: u64,
}

impl Student {
    /// The ID as entered, zero-padded to the full width.
    pub fn id_string(&self) -> String {
        format!("{:0width$}", self.student_id, width = STUDENT_ID_DIGITS)
    }
}

/// Profile storage errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found: {}. Run `sjphy me set` to create it.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid profile {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Student ID must be 12 digits, got '{0}'")]
    InvalidId(String),

    #[error("Failed to access profile: {0}")]
    Io(#[from] io::Error),
}

/// True for exactly twelve ASCII digits.
pub fn is_student_id(value: &str) -> bool {
    value.len() == STUDENT_ID_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a validated student ID.
pub fn parse_student_id(value: &str) -> Result<u64, ProfileError> {
    if !is_student_id(value) {
        return Err(ProfileError::InvalidId(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| ProfileError::InvalidId(value.to_string()))
}

/// Reads and writes the profile file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Student, ProfileError> {
        if !self.exists() {
            return Err(ProfileError::NotFound {
                path: self.path.clone(),
            });
        }
        let content = fs::read_to_string(&self.path)?;
        serde_yaml::from_str(&content).map_err(|source| ProfileError::Invalid {
            path: self.path.clone(),
            source,
        })
    }

    /// Create or overwrite the profile.
    pub fn save(&self, student: &Student) -> Result<(), ProfileError> {
        let content = serde_yaml::to_string(student).map_err(|source| ProfileError::Invalid {
            path: self.path.clone(),
            source,
        })?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }
}
