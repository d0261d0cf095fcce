//! Asset selection: exact match, then fallback to the catalog's first entry

use crate::catalog::{AssetDescriptor, AssetSet};

use super::request::IconRequest;

/// How an asset was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Size (and variant, if pinned) matched exactly
    Exact(&'a AssetDescriptor),
    /// Size was unavailable; the catalog's first asset was substituted
    Fallback(&'a AssetDescriptor),
    /// Nothing selected
    None,
}

impl<'a> Selection<'a> {
    /// The selected descriptor, if any
    pub fn descriptor(&self) -> Option<&'a AssetDescriptor> {
        match *self {
            Selection::Exact(asset) | Selection::Fallback(asset) => Some(asset),
            Selection::None => None,
        }
    }
}

/// Select an asset for a request
///
/// 1. The first asset, in catalog order, whose size equals the requested
///    size and, when a variant is pinned, whose variant matches too.
/// 2. Without a requested size nothing is selected.
/// 3. Otherwise the first asset of the catalog when fallback is enabled.
pub fn select_with_kind<'a>(assets: &'a AssetSet, request: &IconRequest) -> Selection<'a> {
    let Some(size) = request.size else {
        return Selection::None;
    };

    let exact = assets.iter().find(|asset| {
        asset.size() == size && request.variant.map_or(true, |v| asset.variant() == v)
    });
    if let Some(asset) = exact {
        return Selection::Exact(asset);
    }

    if !request.fallback {
        return Selection::None;
    }

    match assets.first() {
        Some(asset) => Selection::Fallback(asset),
        None => Selection::None,
    }
}

/// Select an asset for a request, see [`select_with_kind`]
pub fn select<'a>(assets: &'a AssetSet, request: &IconRequest) -> Option<&'a AssetDescriptor> {
    select_with_kind(assets, request).descriptor()
}
