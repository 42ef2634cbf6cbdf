//! Stylesheet and script registration for the module.
//!
//! The view asks an [`AssetManager`] to include the module bundle. The bundled
//! implementation, [`WebAssetRegistry`], resolves names against a
//! `joomla.asset.json` style manifest and remembers each asset once so the
//! page head can link it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AssetError;

pub const STYLE_ASSET: &str = "mod_unwetterwarnung.default.style";
pub const SCRIPT_ASSET: &str = "mod_unwetterwarnung.default.script";

/// Paths linked directly when the registry cannot provide the bundle.
pub const FALLBACK_STYLESHEET: &str = "media/mod_unwetterwarnung/css/mod_unwetterwarnung.css";
pub const FALLBACK_SCRIPT: &str = "media/mod_unwetterwarnung/js/mod_unwetterwarnung.js";

const BUILTIN_MANIFEST: &str = include_str!("../media/joomla.asset.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Style,
    Script,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub uri: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl AssetDefinition {
    fn is_deferred(&self) -> bool {
        matches!(self.attributes.get("defer"), Some(Value::Bool(true)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

impl AssetManifest {
    /// The manifest shipped with the module.
    pub fn builtin() -> Result<Self, AssetError> {
        Self::from_json(BUILTIN_MANIFEST)
    }

    pub fn from_json(source: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn find(&self, name: &str) -> Option<&AssetDefinition> {
        self.assets.iter().find(|a| a.name == name)
    }
}

/// A `<link>` or `<script>` element to place on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTag {
    pub kind: AssetKind,
    pub href: String,
    pub defer: bool,
}

impl AssetTag {
    pub fn is_style(&self) -> bool {
        self.kind == AssetKind::Style
    }

    /// Direct link to the module stylesheet, bypassing any registry.
    pub fn fallback_style() -> AssetTag {
        AssetTag {
            kind: AssetKind::Style,
            href: FALLBACK_STYLESHEET.to_string(),
            defer: false,
        }
    }

    /// Direct link to the module script, bypassing any registry.
    pub fn fallback_script() -> AssetTag {
        AssetTag {
            kind: AssetKind::Script,
            href: FALLBACK_SCRIPT.to_string(),
            defer: true,
        }
    }
}

impl From<&AssetDefinition> for AssetTag {
    fn from(asset: &AssetDefinition) -> Self {
        Self {
            kind: asset.kind,
            href: asset.uri.clone(),
            defer: asset.is_deferred(),
        }
    }
}

/// Page-level registry the view asks to include its bundle.
pub trait AssetManager {
    fn use_style(&mut self, name: &str) -> Result<(), AssetError>;
    fn use_script(&mut self, name: &str) -> Result<(), AssetError>;
}

/// Per-page [`AssetManager`] backed by a shared manifest.
#[derive(Debug, Clone)]
pub struct WebAssetRegistry {
    manifest: Arc<AssetManifest>,
    used: Vec<String>,
}

impl WebAssetRegistry {
    pub fn new(manifest: Arc<AssetManifest>) -> Self {
        Self {
            manifest,
            used: Vec::new(),
        }
    }

    fn enable(&mut self, name: &str, kind: AssetKind) -> Result<(), AssetError> {
        let asset = self
            .manifest
            .find(name)
            .ok_or_else(|| AssetError::UnknownAsset(name.to_string()))?;
        if asset.kind != kind {
            return Err(AssetError::WrongKind {
                name: name.to_string(),
                expected: kind,
            });
        }
        if !self.used.iter().any(|u| u == name) {
            self.used.push(name.to_string());
        }
        Ok(())
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.iter().any(|u| u == name)
    }

    /// Tags for every enabled asset, stylesheets first.
    pub fn tags(&self) -> Vec<AssetTag> {
        let mut tags: Vec<AssetTag> = self
            .used
            .iter()
            .filter_map(|name| self.manifest.find(name))
            .map(AssetTag::from)
            .collect();
        tags.sort_by_key(|t| !t.is_style());
        tags
    }
}

impl AssetManager for WebAssetRegistry {
    fn use_style(&mut self, name: &str) -> Result<(), AssetError> {
        self.enable(name, AssetKind::Style)
    }

    fn use_script(&mut self, name: &str) -> Result<(), AssetError> {
        self.enable(name, AssetKind::Script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WebAssetRegistry {
        WebAssetRegistry::new(Arc::new(AssetManifest::builtin().unwrap()))
    }

    #[test]
    fn test_builtin_manifest_declares_bundle() {
        let manifest = AssetManifest::builtin().unwrap();
        assert_eq!(manifest.find(STYLE_ASSET).map(|a| a.uri.as_str()), Some(FALLBACK_STYLESHEET));
        assert_eq!(manifest.find(SCRIPT_ASSET).map(|a| a.uri.as_str()), Some(FALLBACK_SCRIPT));
    }

    #[test]
    fn test_assets_are_used_once() {
        let mut assets = registry();
        assets.use_script(SCRIPT_ASSET).unwrap();
        assets.use_style(STYLE_ASSET).unwrap();
        assets.use_script(SCRIPT_ASSET).unwrap();

        let tags = assets.tags();
        assert_eq!(tags.len(), 2);
        assert!(tags[0].is_style());
        assert_eq!(tags[1].href, FALLBACK_SCRIPT);
        assert!(tags[1].defer);
    }

    #[test]
    fn test_unknown_asset_fails() {
        let mut assets = registry();
        let err = assets.use_style("mod_other.style").unwrap_err();
        assert!(matches!(err, AssetError::UnknownAsset(name) if name == "mod_other.style"));
        assert!(assets.tags().is_empty());
    }

    #[test]
    fn test_wrong_kind_fails() {
        let mut assets = registry();
        let err = assets.use_script(STYLE_ASSET).unwrap_err();
        assert!(matches!(err, AssetError::WrongKind { expected: AssetKind::Script, .. }));
        assert!(!assets.is_used(STYLE_ASSET));
    }

    #[test]
    fn test_bad_manifest() {
        assert!(matches!(
            AssetManifest::from_json("{\"assets\": [{\"name\": 1}]}"),
            Err(AssetError::Manifest(_))
        ));
    }
}
