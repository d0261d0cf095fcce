//! Icon requests and the resolutions they settle into

use crate::catalog::AssetSet;

/// A logical icon request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Icon name to look up in the catalog
    pub name: String,
    /// Requested pixel size; no fallback is attempted when absent
    pub size: Option<u32>,
    /// Variant to pin, if any
    pub variant: Option<u32>,
    /// Substitute the catalog's first asset when the size is unavailable
    pub fallback: bool,
}

impl IconRequest {
    /// Request an icon by name, with fallback enabled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            variant: None,
            fallback: true,
        }
    }

    /// Set the requested size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Pin a variant
    pub fn with_variant(mut self, variant: u32) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Enable or disable the fallback
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Whether both requests are answered by the same catalog query
    pub fn same_query(&self, other: &IconRequest) -> bool {
        self.name == other.name
    }
}

/// Lifecycle of a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionState {
    /// Waiting on the catalog provider
    #[default]
    Unsettled,
    /// Asset set arrived and selection ran
    Settled,
}

/// Outcome of resolving a request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Selected reference, absent when nothing matched or not yet settled
    pub reference: Option<String>,
    /// Every asset the catalog holds for the requested name
    pub available_assets: AssetSet,
    /// Whether the asset set has arrived
    pub state: ResolutionState,
}

impl Resolution {
    /// Resolution of a request still waiting on its catalog query
    pub fn unsettled() -> Self {
        Self::default()
    }

    /// A settled resolution
    pub fn settled(reference: Option<String>, available_assets: AssetSet) -> Self {
        Self {
            reference,
            available_assets,
            state: ResolutionState::Settled,
        }
    }

    /// Whether the asset set has arrived
    pub fn is_settled(&self) -> bool {
        self.state == ResolutionState::Settled
    }

    /// Selected reference, if any
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = IconRequest::new("bat");
        assert_eq!(request.size, None);
        assert_eq!(request.variant, None);
        assert!(request.fallback);
    }

    #[test]
    fn test_builder_pattern() {
        let request = IconRequest::new("bat")
            .with_size(32)
            .with_variant(2)
            .with_fallback(false);

        assert_eq!(request.size, Some(32));
        assert_eq!(request.variant, Some(2));
        assert!(!request.fallback);
    }

    #[test]
    fn test_same_query_ignores_selection_fields() {
        let a = IconRequest::new("bat").with_size(16);
        let b = IconRequest::new("bat").with_size(64).with_variant(2);
        let c = IconRequest::new("owl").with_size(16);

        assert!(a.same_query(&b));
        assert!(!a.same_query(&c));
    }

    #[test]
    fn test_unsettled_is_empty() {
        let resolution = Resolution::unsettled();
        assert!(!resolution.is_settled());
        assert_eq!(resolution.reference(), None);
        assert!(resolution.available_assets.is_empty());
    }
}
