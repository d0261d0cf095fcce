//! Icon Resolver - pick a concrete icon asset for a logical icon request
//!
//! A catalog holds, for each icon name, an ordered list of pre-rendered assets
//! tagged with a pixel size and a variant. A request names an icon and,
//! optionally, a size and a variant; resolution selects the matching asset,
//! falls back to the catalog's first asset when the size is unavailable, and
//! always reports every asset available for the name.
//!
//! # Example
//!
//! ```rust
//! use icon_resolver::{resolve, IconRegistry, IconRequest, StaticProvider};
//!
//! let registry = IconRegistry::from_str(r#"
//!     [[icons.bat]]
//!     size = 16
//!     url = "https://cdn.example.com/bat-16.png"
//!
//!     [[icons.bat]]
//!     size = 32
//!     url = "https://cdn.example.com/bat-32.png"
//! "#).unwrap();
//! let provider = StaticProvider::new(registry);
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let resolution = rt.block_on(resolve(&provider, &IconRequest::new("bat").with_size(48)));
//!
//! assert_eq!(resolution.reference(), Some("https://cdn.example.com/bat-16.png"));
//! assert_eq!(resolution.available_assets.len(), 2);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;

pub use catalog::{
    AssetDescriptor, AssetSet, CachedProvider, CatalogProvider, IconRegistry, StaticProvider,
};
pub use config::{ConfigError, ResolverConfig};
pub use error::CatalogError;
pub use resolver::{resolve, IconRequest, IconResolver, Resolution, ResolutionState};
