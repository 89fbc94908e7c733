use crate::error::AppError;
use crate::metadata::GifMetadata;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// In-memory mapping from file path to extracted/edited metadata,
/// persisted as a pretty-printed JSON object.
#[derive(Debug, Default)]
pub struct MetadataStore {
    entries: HashMap<String, GifMetadata>,
}

impl MetadataStore {
    pub fn new() -> Self {
        MetadataStore::default()
    }

    /// Loads the store from a JSON sidecar. A missing or malformed file is
    /// not fatal: the store starts empty.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::info!("No prior metadata at {:?} ({}), starting empty", path, e);
                return MetadataStore::new();
            }
        };
        match serde_json::from_str::<HashMap<String, GifMetadata>>(&contents) {
            Ok(entries) => {
                log::info!("Loaded {} metadata records from {:?}", entries.len(), path);
                MetadataStore { entries }
            }
            Err(e) => {
                log::warn!(
                    "Malformed metadata file {:?} ({}), starting empty",
                    path,
                    e
                );
                MetadataStore::new()
            }
        }
    }

    /// Writes the full mapping to `path`, replacing any prior contents.
    /// Indented with 4 spaces.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.entries.serialize(&mut serializer)?;
        log::info!("Saved {} metadata records to {:?}", self.entries.len(), path);
        Ok(())
    }

    pub fn insert(&mut self, path: String, metadata: GifMetadata) {
        self.entries.insert(path, metadata);
    }

    pub fn get(&self, path: &str) -> Option<&GifMetadata> {
        self.entries.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut GifMetadata> {
        self.entries.get_mut(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{COMPRESSION_LZW, NOT_AVAILABLE};

    fn sample_metadata() -> GifMetadata {
        GifMetadata {
            version: "GIF89a".to_string(),
            size: "6x4".to_string(),
            colors: 2,
            background_color: 0,
            compression_type: COMPRESSION_LZW.to_string(),
            numeric_format: NOT_AVAILABLE.to_string(),
            image_count: 1,
            creation_date: "2024-01-01 00:00:00".to_string(),
            modification_date: "2024-01-02 00:00:00".to_string(),
            comments: NOT_AVAILABLE.to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = dir.path().join("metadata.json");

        let mut store = MetadataStore::new();
        store.insert("/gifs/a.gif".to_string(), sample_metadata());
        store.insert(
            "/gifs/b.gif".to_string(),
            GifMetadata {
                size: "100x50".to_string(),
                colors: 256,
                ..sample_metadata()
            },
        );
        store.save(&sidecar).unwrap();

        let loaded = MetadataStore::load(&sidecar);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("/gifs/a.gif"), store.get("/gifs/a.gif"));
        assert_eq!(loaded.get("/gifs/b.gif"), store.get("/gifs/b.gif"));
    }

    #[test]
    fn saved_file_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = dir.path().join("metadata.json");

        let mut store = MetadataStore::new();
        store.insert("/gifs/a.gif".to_string(), sample_metadata());
        store.save(&sidecar).unwrap();

        let text = std::fs::read_to_string(&sidecar).unwrap();
        assert!(text.contains("\n    \"/gifs/a.gif\""));
        assert!(text.contains("\n        \"version\""));
    }

    #[test]
    fn missing_sidecar_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MetadataStore::load(&dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_sidecar_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = dir.path().join("metadata.json");
        std::fs::write(&sidecar, "{ not json").unwrap();

        let store = MetadataStore::load(&sidecar);
        assert!(store.is_empty());
    }

    #[test]
    fn save_overwrites_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let sidecar = dir.path().join("metadata.json");

        let mut store = MetadataStore::new();
        store.insert("/gifs/old.gif".to_string(), sample_metadata());
        store.save(&sidecar).unwrap();

        let mut replacement = MetadataStore::new();
        replacement.insert("/gifs/new.gif".to_string(), sample_metadata());
        replacement.save(&sidecar).unwrap();

        let loaded = MetadataStore::load(&sidecar);
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("/gifs/old.gif").is_none());
        assert!(loaded.get("/gifs/new.gif").is_some());
    }
}
