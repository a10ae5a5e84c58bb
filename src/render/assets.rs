//! Per-render asset lookup.

use std::collections::HashMap;

use crate::document::Asset;

/// Identifier → asset map for one render call.
///
/// Borrows the assets; built once at the start of a render and dropped with
/// it. If an identifier occurs twice the first descriptor wins.
#[derive(Debug, Default)]
pub struct AssetIndex<'a> {
    by_id: HashMap<&'a str, &'a Asset>,
}

impl<'a> AssetIndex<'a> {
    pub fn new<I>(assets: I) -> Self
    where
        I: IntoIterator<Item = &'a Asset>,
    {
        let mut by_id = HashMap::new();
        for asset in assets {
            by_id.entry(asset.id.as_str()).or_insert(asset);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Asset> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
