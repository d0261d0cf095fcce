//! Icon registry for storing asset descriptors by icon name

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use super::descriptor::{AssetDescriptor, AssetSet, DEFAULT_VARIANT};
use crate::error::CatalogError;

/// TOML structure for deserializing catalog manifests
#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    icons: toml::Table,
}

/// One `[[icons.<name>]]` entry
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlEntry {
    size: u32,
    variant: Option<u32>,
    url: Option<String>,
    file: Option<PathBuf>,
}

/// Registry of every icon known to a catalog
///
/// Descriptors keep the order they were registered in; that order is the
/// catalog order seen by resolvers.
#[derive(Debug, Default, Clone)]
pub struct IconRegistry {
    icons: HashMap<String, Vec<AssetDescriptor>>,
    /// Icon names in first-registration order
    order: Vec<String>,
    /// Base path for resolving `file` entries
    base_path: Option<PathBuf>,
}

impl IconRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new registry with a base path for file resolution
    pub fn with_base_path(base_path: PathBuf) -> Self {
        Self {
            base_path: Some(base_path),
            ..Self::default()
        }
    }

    /// Append a descriptor to an icon's asset list
    pub fn register(&mut self, name: &str, descriptor: AssetDescriptor) {
        self.entry(name).push(descriptor);
    }

    /// Replace an icon's asset list
    pub fn register_set(&mut self, name: &str, set: &AssetSet) {
        let entry = self.entry(name);
        entry.clear();
        entry.extend(set.iter().cloned());
    }

    fn entry(&mut self, name: &str) -> &mut Vec<AssetDescriptor> {
        if !self.icons.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.icons.entry(name.to_string()).or_default()
    }

    /// Snapshot of an icon's assets; empty for unknown names
    pub fn get(&self, name: &str) -> AssetSet {
        self.icons
            .get(name)
            .map(|assets| AssetSet::new(assets.clone()))
            .unwrap_or_default()
    }

    /// Check if an icon exists
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Get all icon names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Number of registered icons
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no icons are registered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the base path for file resolution
    pub fn base_path(&self) -> Option<&PathBuf> {
        self.base_path.as_ref()
    }

    /// Resolve a relative path against the base path
    pub fn resolve_path(&self, relative: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(relative),
            None => relative.to_path_buf(),
        }
    }

    /// Load a catalog manifest from disk
    ///
    /// `file` entries are read relative to the manifest's directory.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut registry = Self::with_base_path(base);
        registry.load_manifest(&content)?;
        Ok(registry)
    }

    /// Load a catalog manifest from a TOML string
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        registry.load_manifest(content)?;
        Ok(registry)
    }

    /// Merge every icon of a manifest into this registry
    pub fn load_manifest(&mut self, content: &str) -> Result<(), CatalogError> {
        let manifest: TomlManifest = toml::from_str(content)?;

        for (name, value) in manifest.icons {
            let entries: Vec<TomlEntry> = value.try_into()?;
            for (index, entry) in entries.into_iter().enumerate() {
                let descriptor = self.build_descriptor(&name, index, entry)?;
                self.register(&name, descriptor);
            }
        }

        tracing::debug!(icons = self.len(), "catalog manifest loaded");
        Ok(())
    }

    fn build_descriptor(
        &self,
        name: &str,
        index: usize,
        entry: TomlEntry,
    ) -> Result<AssetDescriptor, CatalogError> {
        let variant = entry.variant.unwrap_or(DEFAULT_VARIANT);
        let reference = match (entry.url, entry.file) {
            (Some(url), None) => url,
            (None, Some(file)) => self.inline_file(&file)?,
            (Some(_), Some(_)) => {
                return Err(CatalogError::invalid_entry(
                    name,
                    index,
                    "both `url` and `file` given",
                ))
            }
            (None, None) => {
                return Err(CatalogError::invalid_entry(
                    name,
                    index,
                    "one of `url` or `file` is required",
                ))
            }
        };

        AssetDescriptor::new(entry.size, variant, reference)
    }

    /// Read an asset file and encode it as a `data:` URL
    fn inline_file(&self, file: &Path) -> Result<String, CatalogError> {
        let full_path = self.resolve_path(file);
        let bytes = std::fs::read(&full_path).map_err(|e| CatalogError::io(&full_path, e))?;
        Ok(data_url(mime_for(&full_path), &bytes))
    }
}

/// Encode raw bytes as a base64 `data:` URL
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guess a MIME type from a file extension
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
