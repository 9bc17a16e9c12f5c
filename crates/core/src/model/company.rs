use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompanyError {
    #[error("company name is required")]
    MissingName,

    #[error("industry is required")]
    MissingIndustry,

    #[error("company size is required")]
    MissingSize,

    #[error("role is required")]
    MissingRole,
}

//
// ─── FIELDS ────────────────────────────────────────────────────────────────────
//

/// The four required company-profile fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    Industry,
    Size,
    Role,
}

impl CompanyField {
    pub const ALL: [CompanyField; 4] = [
        CompanyField::Name,
        CompanyField::Industry,
        CompanyField::Size,
        CompanyField::Role,
    ];

    /// Form label for the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CompanyField::Name => "Company Name",
            CompanyField::Industry => "Industry",
            CompanyField::Size => "Company Size",
            CompanyField::Role => "Your Role",
        }
    }
}

//
// ─── DRAFT & VALIDATED INFO ────────────────────────────────────────────────────
//

/// Unvalidated company-profile input as typed into the form.
///
/// Whitespace-only values count as empty everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    name: String,
    industry: String,
    size: String,
    role: String,
}

impl CompanyDraft {
    pub fn set(&mut self, field: CompanyField, value: impl Into<String>) {
        let slot = match field {
            CompanyField::Name => &mut self.name,
            CompanyField::Industry => &mut self.industry,
            CompanyField::Size => &mut self.size,
            CompanyField::Role => &mut self.role,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::Name => &self.name,
            CompanyField::Industry => &self.industry,
            CompanyField::Size => &self.size,
            CompanyField::Role => &self.role,
        }
    }

    #[must_use]
    pub fn is_filled(&self, field: CompanyField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Number of fields holding a non-empty value.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        CompanyField::ALL
            .iter()
            .filter(|field| self.is_filled(**field))
            .count()
    }

    /// Validates the draft into a `CompanyInfo`, trimming every field.
    ///
    /// # Errors
    ///
    /// Returns the `CompanyError` of the first empty field in form order.
    pub fn validate(&self) -> Result<CompanyInfo, CompanyError> {
        let require = |field: CompanyField, err: CompanyError| {
            let value = self.get(field).trim();
            if value.is_empty() {
                Err(err)
            } else {
                Ok(value.to_string())
            }
        };

        Ok(CompanyInfo {
            name: require(CompanyField::Name, CompanyError::MissingName)?,
            industry: require(CompanyField::Industry, CompanyError::MissingIndustry)?,
            size: require(CompanyField::Size, CompanyError::MissingSize)?,
            role: require(CompanyField::Role, CompanyError::MissingRole)?,
        })
    }
}

/// Validated company profile as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub role: String,
}
