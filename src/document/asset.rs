//! Embedded media descriptors from the `links` side channel.

use serde::Deserialize;

/// An embedded media asset referenced by a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset identifier (`sys.id` on the wire).
    #[serde(rename = "sys", deserialize_with = "sys_id")]
    pub id: String,
    /// Empty when the CMS sent no URL.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Asset {
    /// Create an asset with an identifier and URL.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Alternate text: the description when non-empty, else the title.
    pub fn alt_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}

/// The asset lists carried alongside a document.
///
/// The CMS splits assets by where they are referenced from: embedded blocks
/// and hyperlinks. Both are resolvable by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Links {
    /// Assets referenced by `embedded-asset-block` nodes.
    pub block_assets: Vec<Asset>,
    /// Assets referenced by `asset-hyperlink` nodes.
    pub hyperlink_assets: Vec<Asset>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links with only block assets.
    pub fn with_block_assets(assets: Vec<Asset>) -> Self {
        Self {
            block_assets: assets,
            hyperlink_assets: Vec::new(),
        }
    }

    /// All assets, block assets first.
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.block_assets.iter().chain(self.hyperlink_assets.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.block_assets.is_empty() && self.hyperlink_assets.is_empty()
    }
}

#[derive(Deserialize)]
struct Sys {
    id: String,
}

fn sys_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Sys::deserialize(deserializer).map(|sys| sys.id)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text_prefers_description() {
        let asset = Asset::new("a1", "https://img.test/a.jpg")
            .with_title("Title")
            .with_description("A dog on a beach");
        assert_eq!(asset.alt_text(), "A dog on a beach");
    }

    #[test]
    fn test_alt_text_falls_back_to_title() {
        let asset = Asset::new("a1", "https://img.test/a.jpg")
            .with_title("Title")
            .with_description("");
        assert_eq!(asset.alt_text(), "Title");

        let asset = Asset::new("a1", "https://img.test/a.jpg").with_title("Title");
        assert_eq!(asset.alt_text(), "Title");
    }

    #[test]
    fn test_alt_text_empty_when_nothing_known() {
        let asset = Asset::new("a1", "https://img.test/a.jpg");
        assert_eq!(asset.alt_text(), "");
    }

    #[test]
    fn test_deserialize_graphql_asset() {
        let json = r#"{
            "sys": { "id": "5x7" },
            "url": "https://images.ctfassets.net/space/5x7/pentu.jpg",
            "title": "Pentu",
            "description": "Kolme pentua",
            "width": 1200,
            "height": 800,
            "fileName": "pentu.jpg",
            "contentType": "image/jpeg"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, "5x7");
        assert_eq!(asset.width, Some(1200));
        assert_eq!(asset.file_name.as_deref(), Some("pentu.jpg"));
        assert_eq!(asset.content_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_deserialize_null_url() {
        let asset: Asset = serde_json::from_str(r#"{ "sys": { "id": "a" }, "url": null }"#).unwrap();
        assert_eq!(asset.id, "a");
        assert!(asset.url.is_empty());

        let missing_sys = serde_json::from_str::<Asset>(r#"{ "url": "https://img.test/a.jpg" }"#);
        assert!(missing_sys.is_err());
    }

    #[test]
    fn test_links_iterates_all_assets() {
        let links = Links {
            block_assets: vec![Asset::new("a", "u1")],
            hyperlink_assets: vec![Asset::new("b", "u2")],
        };
        let ids: Vec<_> = links.assets().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!links.is_empty());
        assert!(Links::new().is_empty());
    }
}
