//! TOML export manifests
//!
//! A manifest replaces the built-in asset tables with a caller-provided
//! one:
//!
//! ```toml
//! [[asset]]
//! name = "small"
//! size = 48
//! path = "icons/small.png"
//! source = "procedural"            # or "vector"
//! foreground_padding = 172         # optional, vector only
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;
use crate::export::{AssetEntry, AssetSource};

/// Parsed export manifest
#[derive(Debug, Deserialize)]
pub struct ExportManifest {
    #[serde(default, rename = "asset")]
    assets: Vec<ManifestAsset>,
}

#[derive(Debug, Deserialize)]
struct ManifestAsset {
    name: String,
    size: u32,
    path: String,
    source: SourceKind,
    #[serde(default)]
    foreground_padding: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SourceKind {
    Procedural,
    Vector,
}

impl ExportManifest {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, PipelineError> {
        Ok(toml::from_str(text)?)
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Convert into the export table
    pub fn into_entries(self) -> Vec<AssetEntry> {
        self.assets
            .into_iter()
            .map(|asset| {
                let source = match asset.source {
                    SourceKind::Procedural => AssetSource::Procedural,
                    SourceKind::Vector => AssetSource::Vector {
                        foreground_padding: asset.foreground_padding,
                    },
                };
                AssetEntry {
                    name: asset.name,
                    size: asset.size,
                    path: asset.path.into(),
                    source,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = ExportManifest::parse(
            r#"
            [[asset]]
            name = "small"
            size = 48
            path = "icons/small.png"
            source = "procedural"

            [[asset]]
            name = "fg"
            size = 512
            path = "icons/fg.png"
            source = "vector"
            foreground_padding = 86
            "#,
        )
        .unwrap();

        let entries = manifest.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "small");
        assert_eq!(entries[0].source, AssetSource::Procedural);
        assert_eq!(
            entries[1].source,
            AssetSource::Vector {
                foreground_padding: Some(86)
            }
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = ExportManifest::parse("").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_invalid_source_kind_rejected() {
        let err = ExportManifest::parse(
            r#"
            [[asset]]
            name = "x"
            size = 48
            path = "x.png"
            source = "handdrawn"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Manifest(_)));
    }
}
