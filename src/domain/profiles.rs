//! Built-in tenant tables for each deployment profile.
//!
//! Both profiles share one tenant table; only the hosts of the Sanskrut
//! tenants differ between the production and staging custom domains.

use crate::domain::entities::{SELECTOR_SITE_ID, TenantConfig};
use crate::domain::registry::{RegistryError, SiteRegistry};
use std::fmt;
use std::str::FromStr;

/// Hosted preview deployment that always serves the landing view.
pub const PREVIEW_HOST: &str =
    "preview-dynamic-multi-page-website-kzmpb837xu3mka676gz7.vusercontent.net";

/// Placeholder domain of the selector tenant.
pub const LOCAL_HOST: &str = "localhost:3000";

/// Internal pages addressable from the navigator.
pub const KNOWN_PATHS: [&str; 7] = [
    "/profile/spacex",
    "/profile/groq",
    "/profile/perplexity",
    "/profile/xai",
    "/person/sandeep",
    "/person/dheeraj",
    "/person/praveen",
];

/// Deployment profile selecting which host set the registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Production,
    Staging,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
        }
    }

    fn sanskrut_tld(&self) -> &'static str {
        match self {
            Self::Production => "in",
            Self::Staging => "com",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown site profile '{0}', expected 'production' or 'staging'")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" | "stage" => Ok(Self::Staging),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

/// Builds the registry for a deployment profile.
///
/// # Errors
///
/// Returns a [`RegistryError`] if the built-in table violates a registry
/// invariant.
pub fn builtin_registry(profile: Profile) -> Result<SiteRegistry, RegistryError> {
    let tld = profile.sanskrut_tld();

    SiteRegistry::builder()
        .tenant(
            TenantConfig::new("srd.fund", "srd", "SRD Innovation Fund")
                .with_description("Investment portfolio and startup showcase")
                .with_theme("blue", "indigo"),
        )
        .tenant(
            TenantConfig::new(format!("corp.sanskrut.{tld}"), "sanskrut-corp", "Sanskrut Corp")
                .with_description("Incubation platform and early-stage ventures")
                .with_theme("green", "emerald"),
        )
        .tenant(
            TenantConfig::new(
                format!("ent.sanskrut.{tld}"),
                "sanskrut-enterprises",
                "Sanskrut Enterprises",
            )
            .with_description("Hospitality and real estate portfolio")
            .with_theme("purple", "violet"),
        )
        .tenant(
            TenantConfig::new(
                "sandeepkoduri.com",
                "sandeep",
                "Sandeep Koduri - Technology Leader",
            )
            .with_description("Personal portfolio and professional timeline")
            .with_theme("orange", "amber"),
        )
        .tenant(
            TenantConfig::new(LOCAL_HOST, SELECTOR_SITE_ID, "Portfolio Ecosystem")
                .with_description("Choose a site from the portfolio ecosystem")
                .with_theme("slate", "gray"),
        )
        .host_alias(PREVIEW_HOST, SELECTOR_SITE_ID)
        .known_paths(KNOWN_PATHS)
        .build()
}
