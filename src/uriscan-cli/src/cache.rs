//! On-disk cache of raw token URIs and their decoded artifacts
//!
//! Layout of one dataset directory (e.g. `cache/assets`):
//!
//! ```text
//! raw/0, raw/1, ..., raw/contract   raw `data:` URIs, one per file
//! json/<id>.json                    decoded metadata
//! md/<id>.md                        metadata description
//! svg/<id>.svg                      decoded image
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uriscan::{ArtifactSink, DecodedAsset, RecordId, RecordSource};

pub const RAW_DIR: &str = "raw";
pub const JSON_DIR: &str = "json";
pub const MD_DIR: &str = "md";
pub const SVG_DIR: &str = "svg";

/// One dataset directory of the cache
#[derive(Debug, Clone)]
pub struct CacheDir {
    root: PathBuf,
}

impl CacheDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(RAW_DIR)
    }

    /// Whether the raw input directory exists
    pub fn is_initialized(&self) -> bool {
        self.raw_dir().is_dir()
    }

    pub fn raw_path(&self, id: RecordId) -> PathBuf {
        self.raw_dir().join(id.file_stem())
    }

    /// Create the raw and output directories. Returns the directories that
    /// did not exist before.
    pub fn bootstrap(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for name in [RAW_DIR, JSON_DIR, MD_DIR, SVG_DIR] {
            let dir = self.root.join(name);
            if !dir.is_dir() {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                created.push(dir);
            }
        }
        Ok(created)
    }

    /// Writer for decoded artifacts under this directory
    pub fn writer(&self) -> Result<ArtifactWriter> {
        for name in [JSON_DIR, MD_DIR, SVG_DIR] {
            let dir = self.root.join(name);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(ArtifactWriter {
            root: self.root.clone(),
        })
    }
}

/// Parse a raw file name as an asset index (`"12"` -> 12)
fn asset_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

impl RecordSource for CacheDir {
    /// Counts files in `raw/` named by an integer; `contract` is not counted.
    fn asset_count(&self) -> io::Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(self.raw_dir())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if entry.file_name().to_str().and_then(asset_index).is_some() {
                count += 1;
            }
        }
        Ok(count)
    }

    fn read(&self, id: RecordId) -> io::Result<String> {
        fs::read_to_string(self.raw_path(id))
    }
}

/// Writes `json/`, `md/` and `svg/` artifacts for each decoded record
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn paths(&self, id: RecordId) -> [PathBuf; 3] {
        let stem = id.file_stem();
        [
            self.root.join(JSON_DIR).join(format!("{}.json", stem)),
            self.root.join(MD_DIR).join(format!("{}.md", stem)),
            self.root.join(SVG_DIR).join(format!("{}.svg", stem)),
        ]
    }
}

impl ArtifactSink for ArtifactWriter {
    fn write(&mut self, id: RecordId, asset: &DecodedAsset) -> io::Result<()> {
        let [json, md, svg] = self.paths(id);
        fs::write(json, &asset.json)?;
        fs::write(md, asset.description())?;
        fs::write(svg, &asset.svg)?;
        Ok(())
    }
}
