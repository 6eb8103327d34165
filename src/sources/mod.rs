//! Deal source trait and the built-in static providers

mod primary;
mod secondary;

pub use primary::{list_primary_source, PrimarySource};
pub use secondary::{list_secondary_source, SecondarySource};

use crate::types::{Deal, Result, SearchContext};

/// Provider of rental offers
pub trait DealSource: Send + Sync {
    /// Source name (e.g., "primary")
    fn name(&self) -> &str;

    /// Produce this source's deals for `context`, in the source's own order
    fn fetch(&self, context: &SearchContext) -> Result<Vec<Deal>>;
}

/// Ordered registry of deal sources
pub struct SourceRegistry {
    sources: Vec<Box<dyn DealSource>>,
}

impl SourceRegistry {
    /// Create a new registry with the default sources: primary, then secondary
    pub fn new() -> Self {
        Self::with_sources(vec![
            Box::new(PrimarySource::new()),
            Box::new(SecondarySource::new()),
        ])
    }

    /// Create a registry from explicit sources, queried in the given order
    pub fn with_sources(sources: Vec<Box<dyn DealSource>>) -> Self {
        Self { sources }
    }

    /// Get all registered sources
    pub fn sources(&self) -> &[Box<dyn DealSource>] {
        &self.sources
    }

    /// Find a source by name
    pub fn get(&self, name: &str) -> Option<&dyn DealSource> {
        self.sources
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_default_sources() {
        let registry = SourceRegistry::new();
        assert_eq!(registry.sources().len(), 2);
        assert_eq!(registry.sources()[0].name(), "primary");
        assert_eq!(registry.sources()[1].name(), "secondary");
    }

    #[test]
    fn test_registry_get() {
        let registry = SourceRegistry::new();
        assert!(registry.get("primary").is_some());
        assert!(registry.get("secondary").is_some());
        assert!(registry.get("unknown-source").is_none());
    }

    #[test]
    fn test_registry_empty() {
        let registry = SourceRegistry::with_sources(Vec::new());
        assert!(registry.sources().is_empty());
    }

    #[test]
    fn test_sources_ignore_context() {
        let registry = SourceRegistry::new();
        let marseille = SearchContext::new("Marseille, France");
        let mut elsewhere = SearchContext::new("Reykjavik");
        elsewhere.pickup_date = "1999-12-31".into();
        for source in registry.sources() {
            assert_eq!(
                source.fetch(&marseille).unwrap(),
                source.fetch(&elsewhere).unwrap()
            );
        }
    }
}
