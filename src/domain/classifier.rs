//! Classification of free-text navigation input.
//!
//! The classifier turns whatever a user typed into the navigator into a
//! [`ClassificationResult`]. Branches are tried in strict order and the first
//! one that applies wins:
//!
//! 1. Empty input
//! 2. Absolute `http(s)://` URL (tenant domain or external host)
//! 3. Bare tenant domain, optionally `www.`-prefixed
//! 4. `?site=<id>` / `/?site=<id>` parameter syntax
//! 5. Bare site id
//! 6. Path (`/...`): known path, near-miss of a known path, or generic path
//! 7. Fuzzy suggestions over every known destination
//!
//! Input is trimmed and lowercased before matching. Every input yields a
//! result; failures are `invalid` results carrying suggestions.

use crate::domain::entities::{ClassificationKind, ClassificationResult, TenantConfig};
use crate::domain::registry::SiteRegistry;
use crate::domain::resolver::SITE_PARAM;
use crate::utils::levenshtein;
use crate::utils::url_normalizer::{hostname, parse_absolute_url};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Maximum edit distance for a known path to count as a near miss.
pub const PATH_DISTANCE_THRESHOLD: usize = 2;

/// Maximum edit distance for the general fuzzy fallback.
pub const FALLBACK_DISTANCE_THRESHOLD: usize = 3;

/// Maximum number of suggestions returned for an invalid input.
pub const MAX_SUGGESTIONS: usize = 5;

/// Characters allowed in a generic internal path.
static GENERIC_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[a-zA-Z0-9\-_/]*$").unwrap());

/// Classifies navigation input against a site registry.
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    registry: Arc<SiteRegistry>,
}

impl UrlClassifier {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Classifies one input string.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_router::domain::classifier::UrlClassifier;
    /// use site_router::domain::entities::ClassificationKind;
    /// use site_router::domain::profiles::{Profile, builtin_registry};
    /// use std::sync::Arc;
    ///
    /// let registry = Arc::new(builtin_registry(Profile::Production).unwrap());
    /// let classifier = UrlClassifier::new(registry);
    ///
    /// let result = classifier.classify("srd");
    /// assert_eq!(result.kind, ClassificationKind::SiteId);
    /// assert_eq!(result.canonical_destination, "/?site=srd");
    /// ```
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let normalized = input.trim().to_lowercase();

        let result = if normalized.is_empty() {
            ClassificationResult::invalid(input, "Input cannot be empty", self.example_suggestions())
        } else if let Some(result) = self.classify_absolute_url(input, &normalized) {
            result
        } else if let Some(result) = self.classify_bare_domain(input, &normalized) {
            result
        } else if let Some(result) = self.classify_site_parameter(input, &normalized) {
            result
        } else if let Some(result) = self.classify_site_id(input, &normalized) {
            result
        } else if let Some(result) = self.classify_path(input, &normalized) {
            result
        } else {
            self.suggest(input, &normalized)
        };

        self.enforce_registered_site(result)
    }

    fn classify_absolute_url(&self, input: &str, normalized: &str) -> Option<ClassificationResult> {
        let url = parse_absolute_url(normalized).ok()?;
        let host = hostname(&url);
        let destination = input.trim();

        let result = match self.registry.site_by_domain(&host) {
            Some(tenant) => domain_result(input, destination, tenant),
            None => ClassificationResult::valid(
                ClassificationKind::External,
                input,
                destination,
                format!("External: {host}"),
                true,
            )
            .with_metadata("domain", host),
        };

        Some(result)
    }

    fn classify_bare_domain(&self, input: &str, normalized: &str) -> Option<ClassificationResult> {
        let candidate = normalized.strip_prefix("www.").unwrap_or(normalized);
        let tenant = self.registry.site_by_domain(candidate)?;

        Some(domain_result(
            input,
            &format!("https://{}", tenant.domain),
            tenant,
        ))
    }

    fn classify_site_parameter(
        &self,
        input: &str,
        normalized: &str,
    ) -> Option<ClassificationResult> {
        let query = normalized
            .strip_prefix("/?")
            .or_else(|| normalized.strip_prefix('?'))?;
        if !query.starts_with("site=") {
            return None;
        }

        let site_id = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SITE_PARAM)
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        let result = match self.registry.site(&site_id) {
            Some(tenant) => site_result(ClassificationKind::Parameter, input, tenant),
            None => ClassificationResult::invalid(
                input,
                format!("Unknown site identifier: {site_id}"),
                self.registry.sites().map(TenantConfig::internal_url).collect(),
            ),
        };

        Some(result)
    }

    fn classify_site_id(&self, input: &str, normalized: &str) -> Option<ClassificationResult> {
        let tenant = self.registry.site(normalized)?;
        Some(site_result(ClassificationKind::SiteId, input, tenant))
    }

    fn classify_path(&self, input: &str, normalized: &str) -> Option<ClassificationResult> {
        if !normalized.starts_with('/') {
            return None;
        }

        let known = self.registry.known_paths();

        if known.iter().any(|p| p.eq_ignore_ascii_case(normalized)) {
            return Some(known_path_result(input, normalized));
        }

        let needle = &normalized[1..];
        let near_misses = rank(
            known.iter().map(String::as_str),
            |path| path.to_lowercase().contains(needle),
            normalized,
            PATH_DISTANCE_THRESHOLD,
        );
        if !near_misses.is_empty() {
            return Some(ClassificationResult::invalid(
                input,
                format!("Path not found: {normalized}"),
                near_misses,
            ));
        }

        if is_generic_path(normalized) {
            return Some(
                ClassificationResult::valid(
                    ClassificationKind::Path,
                    input,
                    normalized,
                    format!("Internal path: {normalized}"),
                    false,
                )
                .with_metadata("pathType", "generic"),
            );
        }

        None
    }

    fn suggest(&self, input: &str, normalized: &str) -> ClassificationResult {
        let candidates = self
            .registry
            .sites()
            .map(|t| t.domain.as_str())
            .chain(self.registry.sites().map(|t| t.site_id.as_str()))
            .chain(self.registry.known_paths().iter().map(String::as_str));

        let mut suggestions = rank(
            candidates,
            |candidate| candidate.to_lowercase().contains(normalized),
            normalized,
            FALLBACK_DISTANCE_THRESHOLD,
        );
        if suggestions.is_empty() {
            suggestions = self.example_suggestions();
        }

        ClassificationResult::invalid(
            input,
            format!("No matching destination found for: {}", input.trim()),
            suggestions,
        )
    }

    /// Fixed examples: first domain, first site parameter, first known path.
    fn example_suggestions(&self) -> Vec<String> {
        let first_site = self.registry.sites().next();

        first_site
            .map(|t| t.domain.clone())
            .into_iter()
            .chain(first_site.map(TenantConfig::internal_url))
            .chain(self.registry.known_paths().first().cloned())
            .collect()
    }

    /// Rejects a valid result whose `siteId` metadata is not registered.
    ///
    /// Every branch takes its site id from the registry, so a failure here is
    /// a classifier bug. Debug builds panic; release builds log and degrade
    /// the result to `invalid`.
    fn enforce_registered_site(&self, result: ClassificationResult) -> ClassificationResult {
        let registered = self.has_registered_site(&result);
        debug_assert!(
            registered,
            "classifier produced unregistered site id {:?} for {:?}",
            result.site_id(),
            result.original_input
        );

        if registered {
            result
        } else {
            self.degrade_unregistered(result)
        }
    }

    /// True unless `result` is valid and names a site id the registry lacks.
    fn has_registered_site(&self, result: &ClassificationResult) -> bool {
        !result.is_valid
            || result
                .site_id()
                .is_none_or(|site_id| self.registry.contains_site_id(site_id))
    }

    fn degrade_unregistered(&self, result: ClassificationResult) -> ClassificationResult {
        let site_id = result.site_id().unwrap_or_default().to_string();

        tracing::error!(
            site_id,
            input = %result.original_input,
            "Registry inconsistency: classified site id is not registered"
        );

        ClassificationResult::invalid(
            result.original_input,
            format!("Unknown site identifier: {site_id}"),
            self.example_suggestions(),
        )
    }
}

fn domain_result(input: &str, destination: &str, tenant: &TenantConfig) -> ClassificationResult {
    ClassificationResult::valid(
        ClassificationKind::Domain,
        input,
        destination,
        tenant.display_name.clone(),
        true,
    )
    .with_metadata("domain", tenant.domain.clone())
    .with_metadata("description", tenant.description.clone())
    .with_metadata("siteId", tenant.site_id.clone())
}

fn site_result(
    kind: ClassificationKind,
    input: &str,
    tenant: &TenantConfig,
) -> ClassificationResult {
    ClassificationResult::valid(
        kind,
        input,
        tenant.internal_url(),
        tenant.display_name.clone(),
        false,
    )
    .with_metadata("siteId", tenant.site_id.clone())
}

fn known_path_result(input: &str, path: &str) -> ClassificationResult {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let path_type = segments.next().unwrap_or_default().to_string();
    let identifier = segments.next().unwrap_or_default().to_string();

    let mut result = ClassificationResult::valid(
        ClassificationKind::Path,
        input,
        path,
        format!("{path_type}: {}", identifier.replace('-', " ")),
        false,
    )
    .with_metadata("pathType", path_type);

    if !identifier.is_empty() {
        result = result.with_metadata("identifier", identifier);
    }
    result
}

/// Returns true for well-formed internal paths outside the known-path list.
pub fn is_generic_path(path: &str) -> bool {
    path.len() > 1 && !path.contains("..") && GENERIC_PATH_REGEX.is_match(path)
}

/// Filters and orders suggestion candidates.
///
/// A candidate qualifies when `is_substring` holds or its edit distance to
/// `input` is within `threshold`. Substring matches rank first, then
/// ascending edit distance, then registry order. At most
/// [`MAX_SUGGESTIONS`] are returned.
fn rank<'a>(
    candidates: impl Iterator<Item = &'a str>,
    is_substring: impl Fn(&str) -> bool,
    input: &str,
    threshold: usize,
) -> Vec<String> {
    let mut scored: Vec<(bool, usize, usize, &str)> = candidates
        .enumerate()
        .filter_map(|(order, candidate)| {
            let substring = is_substring(candidate);
            let distance = levenshtein::distance(candidate, input);
            (substring || distance <= threshold).then_some((!substring, distance, order, candidate))
        })
        .collect();

    scored.sort_unstable_by_key(|&(not_substring, distance, order, _)| (not_substring, distance, order));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, _, _, candidate)| candidate.to_string())
        .collect()
}
