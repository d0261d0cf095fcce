//! Asset descriptors and the ordered asset sets handed out by providers

use std::fmt;
use std::sync::Arc;

use crate::error::CatalogError;

/// Default variant assigned when a catalog entry does not name one
pub const DEFAULT_VARIANT: u32 = 1;

/// One pre-rendered asset of an icon
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetDescriptor {
    size: u32,
    variant: u32,
    reference: String,
}

impl AssetDescriptor {
    /// Create a descriptor, rejecting zero sizes and empty references
    pub fn new(size: u32, variant: u32, reference: impl Into<String>) -> Result<Self, CatalogError> {
        let reference = reference.into();
        if size == 0 {
            return Err(CatalogError::ZeroSize { reference });
        }
        if reference.is_empty() {
            return Err(CatalogError::EmptyReference { size, variant });
        }

        Ok(Self {
            size,
            variant,
            reference,
        })
    }

    /// Pixel size of the asset
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Variant tag of the asset
    pub fn variant(&self) -> u32 {
        self.variant
    }

    /// Opaque reference (usually a URL) handed to the renderer
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px/v{} -> {}", self.size, self.variant, self.reference)
    }
}

/// Ordered snapshot of every asset known for one icon name
///
/// The order is whatever the provider returned and is never re-sorted: the
/// first descriptor is the fallback candidate. Cloning is cheap, so each
/// resolution can hold its own snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetSet {
    assets: Arc<[AssetDescriptor]>,
}

impl AssetSet {
    /// Create a set from descriptors in catalog order
    pub fn new(assets: Vec<AssetDescriptor>) -> Self {
        Self {
            assets: assets.into(),
        }
    }

    /// An empty set, as returned for unknown names
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of descriptors
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the set holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First descriptor in catalog order
    pub fn first(&self) -> Option<&AssetDescriptor> {
        self.assets.first()
    }

    /// Iterate descriptors in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, AssetDescriptor> {
        self.assets.iter()
    }

    /// All descriptors of the given size, in catalog order
    pub fn with_size(&self, size: u32) -> Vec<&AssetDescriptor> {
        self.assets.iter().filter(|a| a.size == size).collect()
    }

    /// Distinct sizes in order of first appearance
    pub fn sizes(&self) -> Vec<u32> {
        let mut sizes = Vec::new();
        for asset in self.assets.iter() {
            if !sizes.contains(&asset.size) {
                sizes.push(asset.size);
            }
        }
        sizes
    }

    /// Variants available at a given size, in catalog order
    pub fn variants(&self, size: u32) -> Vec<u32> {
        self.with_size(size).iter().map(|a| a.variant).collect()
    }

    /// Borrow the descriptors as a slice
    pub fn as_slice(&self) -> &[AssetDescriptor] {
        &self.assets
    }
}

impl From<Vec<AssetDescriptor>> for AssetSet {
    fn from(assets: Vec<AssetDescriptor>) -> Self {
        Self::new(assets)
    }
}

impl FromIterator<AssetDescriptor> for AssetSet {
    fn from_iter<I: IntoIterator<Item = AssetDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AssetSet {
    type Item = &'a AssetDescriptor;
    type IntoIter = std::slice::Iter<'a, AssetDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(size: u32, variant: u32, reference: &str) -> AssetDescriptor {
        AssetDescriptor::new(size, variant, reference).expect("valid descriptor")
    }

    fn bat() -> AssetSet {
        AssetSet::new(vec![
            asset(16, 1, "u16"),
            asset(32, 1, "u32a"),
            asset(32, 2, "u32b"),
            asset(64, 1, "u64"),
        ])
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = AssetDescriptor::new(0, 1, "u0");
        assert!(matches!(result, Err(CatalogError::ZeroSize { .. })));
    }

    #[test]
    fn test_rejects_empty_reference() {
        let result = AssetDescriptor::new(16, 1, "");
        assert!(matches!(
            result,
            Err(CatalogError::EmptyReference {
                size: 16,
                variant: 1
            })
        ));
    }

    #[test]
    fn test_variants_are_distinct_descriptors() {
        let set = bat();
        let same_size = set.with_size(32);
        assert_eq!(same_size.len(), 2);
        assert_ne!(same_size[0], same_size[1]);
        assert_eq!(set.variants(32), vec![1, 2]);
    }

    #[test]
    fn test_sizes_keep_catalog_order() {
        let set = AssetSet::new(vec![
            asset(64, 1, "a"),
            asset(16, 1, "b"),
            asset(64, 2, "c"),
        ]);
        assert_eq!(set.sizes(), vec![64, 16]);
        assert_eq!(set.first().map(|a| a.reference()), Some("a"));
    }

    #[test]
    fn test_clones_share_storage() {
        let set = bat();
        let copy = set.clone();
        assert!(std::ptr::eq(set.as_slice(), copy.as_slice()));
    }

    #[test]
    fn test_display() {
        assert_eq!(asset(32, 2, "u32b").to_string(), "32px/v2 -> u32b");
    }
}
