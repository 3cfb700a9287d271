//! Navigation input classification service.

use crate::domain::classifier::UrlClassifier;
use crate::domain::entities::ClassificationResult;
use crate::domain::registry::SiteRegistry;
use std::sync::Arc;
use tracing::debug;

/// Classifies navigator input and records classification metrics.
///
/// Emits `navigation_classifications_total` labelled by result kind through
/// the `metrics` facade. No exporter is installed here; without one the
/// counter is a no-op.
#[derive(Debug, Clone)]
pub struct NavigationService {
    classifier: UrlClassifier,
}

impl NavigationService {
    pub fn new(registry: Arc<SiteRegistry>) -> Self {
        Self {
            classifier: UrlClassifier::new(registry),
        }
    }

    /// Classifies `input`. Never fails; unmatched input yields an `invalid`
    /// result with suggestions.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let result = self.classifier.classify(input);

        metrics::counter!("navigation_classifications_total", "kind" => result.kind.as_str())
            .increment(1);
        debug!(
            kind = %result.kind,
            destination = %result.canonical_destination,
            suggestions = result.suggestions.len(),
            "Classified navigation input"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClassificationKind;
    use crate::domain::profiles::{Profile, builtin_registry};

    #[test]
    fn test_classify_delegates() {
        let service = NavigationService::new(Arc::new(builtin_registry(Profile::Production).unwrap()));

        assert_eq!(service.classify("srd.fund").kind, ClassificationKind::Domain);
        assert_eq!(service.classify("/profile/xai").kind, ClassificationKind::Path);
        assert_eq!(service.classify("").kind, ClassificationKind::Invalid);
    }
}
