//! Icon catalogs
//!
//! A catalog maps icon names to the ordered set of pre-rendered assets
//! available for them. Catalogs are usually described by a TOML manifest:
//!
//! ```toml
//! [[icons.bat]]
//! size = 16
//! url = "https://cdn.example.com/bat-16.png"
//!
//! [[icons.bat]]
//! size = 32
//! variant = 2
//! file = "bat-32-alt.svg"
//! ```
//!
//! and served to resolvers through a [`CatalogProvider`].

mod descriptor;
mod provider;
mod registry;

pub use descriptor::{AssetDescriptor, AssetSet, DEFAULT_VARIANT};
pub use provider::{CachedProvider, CatalogProvider, StaticProvider};
pub use registry::{data_url, IconRegistry};

/// Render an asset set as a `size  variant  reference` table in catalog order
pub fn format_listing(set: &AssetSet) -> String {
    let mut lines = vec![format!("{:<6}{:<9}{}", "size", "variant", "reference")];
    for asset in set {
        lines.push(format!(
            "{:<6}{:<9}{}",
            asset.size(),
            asset.variant(),
            asset.reference()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_listing() {
        let set = AssetSet::new(vec![
            AssetDescriptor::new(16, 1, "u16").expect("valid"),
            AssetDescriptor::new(32, 1, "u32a").expect("valid"),
            AssetDescriptor::new(32, 2, "u32b").expect("valid"),
        ]);

        insta::assert_snapshot!(format_listing(&set), @r"
        size  variant  reference
        16    1        u16
        32    1        u32a
        32    2        u32b
        ");
    }

    #[test]
    fn test_format_listing_empty() {
        insta::assert_snapshot!(format_listing(&AssetSet::empty()), @"size  variant  reference");
    }
}
