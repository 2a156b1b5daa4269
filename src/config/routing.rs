//! Email routing configuration

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::catalog::Department;

use super::error::ValidationError;

/// Email routing configuration
///
/// Controls the sender address of generated drafts and per-department
/// contact overrides. Departments without an override keep their built-in
/// address; display names with no match at all route to the fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Sender address placed in the From header of every draft
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Address used when a department display name cannot be resolved
    #[serde(default = "default_fallback_contact")]
    pub fallback_contact: String,

    /// Contact overrides keyed by department key (e.g. "fiscal")
    #[serde(default)]
    pub contacts: HashMap<String, String>,
}

impl RoutingConfig {
    /// Get the contact address for a department, override first
    pub fn contact_for(&self, department: Department) -> &str {
        self.contacts
            .get(department.key())
            .map(String::as_str)
            .unwrap_or_else(|| department.default_contact())
    }

    /// Resolve a department display name to a contact address
    ///
    /// Reviewed rows carry departments as free-form display names, so an
    /// edited name may no longer match any department. Those route to the
    /// fallback address rather than failing the bundle.
    pub fn contact_for_display_name(&self, display_name: &str) -> &str {
        match Department::from_display_name(display_name) {
            Some(department) => self.contact_for(department),
            None => &self.fallback_contact,
        }
    }

    /// Validate routing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.sender.contains('@') {
            return Err(ValidationError::InvalidSenderAddress);
        }
        if !self.fallback_contact.contains('@') {
            return Err(ValidationError::InvalidFallbackAddress);
        }
        for (key, address) in &self.contacts {
            if Department::from_key(key).is_none() {
                return Err(ValidationError::UnknownDepartmentKey(key.clone()));
            }
            if !address.contains('@') {
                return Err(ValidationError::InvalidContactAddress(key.clone()));
            }
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            fallback_contact: default_fallback_contact(),
            contacts: HashMap::new(),
        }
    }
}

fn default_sender() -> String {
    "diagnostic@cabinet.com".to_string()
}

fn default_fallback_contact() -> String {
    "info@cabinet.com".to_string()
}
