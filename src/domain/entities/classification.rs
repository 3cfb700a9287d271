//! Result model for navigation input classification.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Destination kind a free-text navigation input was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationKind {
    /// A known tenant domain, bare or as an absolute URL.
    Domain,
    /// An internal path, either registry-known or generically well-formed.
    Path,
    /// `?site=<id>` / `/?site=<id>` syntax naming a known tenant.
    Parameter,
    /// A bare tenant site identifier.
    SiteId,
    /// An absolute URL on a host outside the registry.
    External,
    /// Nothing matched; carries an error message and suggestions.
    Invalid,
}

impl ClassificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Path => "path",
            Self::Parameter => "parameter",
            Self::SiteId => "site-id",
            Self::External => "external",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one navigation input string.
///
/// `is_valid` is false exactly when `kind` is [`ClassificationKind::Invalid`].
/// Invalid results carry an `error_message` and up to five `suggestions`,
/// most similar first. `metadata` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_valid: bool,
    pub kind: ClassificationKind,
    pub original_input: String,
    pub canonical_destination: String,
    pub display_label: String,
    pub is_external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ClassificationResult {
    /// Builds a successful result of the given kind.
    pub fn valid(
        kind: ClassificationKind,
        original_input: impl Into<String>,
        canonical_destination: impl Into<String>,
        display_label: impl Into<String>,
        is_external: bool,
    ) -> Self {
        Self {
            is_valid: true,
            kind,
            original_input: original_input.into(),
            canonical_destination: canonical_destination.into(),
            display_label: display_label.into(),
            is_external,
            error_message: None,
            suggestions: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Builds an invalid result with an error message and suggestions.
    pub fn invalid(
        original_input: impl Into<String>,
        error_message: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            is_valid: false,
            kind: ClassificationKind::Invalid,
            original_input: original_input.into(),
            canonical_destination: String::new(),
            display_label: String::new(),
            is_external: false,
            error_message: Some(error_message.into()),
            suggestions,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Tenant id recorded in the metadata, if any.
    pub fn site_id(&self) -> Option<&str> {
        self.metadata.get("siteId").map(String::as_str)
    }
}
