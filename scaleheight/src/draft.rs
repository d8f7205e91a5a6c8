//! The signup draft persisted between the two steps.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::validation::{ContactDetails, Credentials};

/// Name of the single slot the draft is kept in.
pub const DRAFT_FILE_NAME: &str = "scaleheight_signup_step1.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

impl SignupDraft {
    pub fn merge_credentials(&mut self, credentials: Credentials) {
        self.password = Some(credentials.password);
        self.coupon_code = Some(credentials.coupon_code);
    }
}

impl From<ContactDetails> for SignupDraft {
    fn from(details: ContactDetails) -> Self {
        Self {
            first_name: details.first_name,
            last_name: details.last_name,
            phone: details.phone,
            email: details.email,
            password: None,
            coupon_code: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Failed to access the signup draft: {0}")]
    Io(String),
    #[error("Failed to parse the signup draft: {0}")]
    Parse(String),
}

/// Reads and writes the draft slot on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, draft: &SignupDraft) -> Result<(), DraftError> {
        let content =
            serde_json::to_vec_pretty(draft).map_err(|e| DraftError::Parse(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| DraftError::Io(e.to_string()))?;
        debug!("Signup draft saved to {}", self.path.display());
        Ok(())
    }

    /// Returns `None` if no draft was ever saved or if it was cleared.
    pub fn load(&self) -> Result<Option<SignupDraft>, DraftError> {
        match std::fs::read(&self.path) {
            Ok(content) => serde_json::from_slice(&content)
                .map(Some)
                .map_err(|e| DraftError::Parse(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DraftError::Io(e.to_string())),
        }
    }

    pub fn clear(&self) -> Result<(), DraftError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Signup draft removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SignupDraft {
        SignupDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "0712345678".to_string(),
            email: "ada@example.com".to_string(),
            password: None,
            coupon_code: None,
        }
    }

    #[test]
    fn json_layout() {
        let value = serde_json::to_value(draft()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phone": "0712345678",
                "email": "ada@example.com",
            })
        );

        let mut d = draft();
        d.merge_credentials(Credentials {
            password: "secret1".to_string(),
            coupon_code: "WELCOME".to_string(),
        });
        let value = serde_json::to_value(&d).unwrap();
        assert_eq!(value["password"], "secret1");
        assert_eq!(value["couponCode"], "WELCOME");
    }

    #[test]
    fn save_load_clear() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DraftStore::new(tmp.path().join(DRAFT_FILE_NAME));

        assert_eq!(store.load().unwrap(), None);
        // Clearing an empty slot is fine.
        store.clear().unwrap();

        store.save(&draft()).unwrap();
        assert_eq!(store.load().unwrap(), Some(draft()));

        let mut other = draft();
        other.first_name = "Grace".to_string();
        store.save(&other).unwrap();
        assert_eq!(store.load().unwrap(), Some(other));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupted_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DraftStore::new(tmp.path().join(DRAFT_FILE_NAME));
        std::fs::write(store.path(), b"{ not json").unwrap();
        assert!(matches!(store.load(), Err(DraftError::Parse(_))));

        // Missing required field.
        std::fs::write(store.path(), br#"{"firstName":"Ada"}"#).unwrap();
        assert!(matches!(store.load(), Err(DraftError::Parse(_))));
    }

    #[test]
    fn missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DraftStore::new(tmp.path().join("nope").join(DRAFT_FILE_NAME));
        assert!(matches!(store.save(&draft()), Err(DraftError::Io(_))));
    }
}
