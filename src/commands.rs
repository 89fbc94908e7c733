use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::GifMetadata;
use crate::processor;
use crate::store::MetadataStore;
use crate::walker;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct ScanRequest {
    pub folder: PathBuf,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub indexed: Vec<String>,
    pub skipped: usize,
}

/// Field overwrites for one stored record. Values arrive as user-typed
/// strings; numeric fields are parsed back to their integer types before
/// anything is applied.
#[derive(Debug, Default)]
pub struct EditRequest {
    pub path: String,
    pub version: Option<String>,
    pub size: Option<String>,
    pub colors: Option<String>,
    pub background_color: Option<String>,
    pub compression_type: Option<String>,
    pub numeric_format: Option<String>,
    pub image_count: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
    pub comments: Option<String>,
}

/// Store key for a file path: absolute where the filesystem can resolve
/// it, the path as given otherwise.
pub fn store_key(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Walks the requested folder and indexes every GIF found, overwriting any
/// prior record for the same path. Per-file failures are logged and
/// counted, never fatal to the scan.
pub fn scan_folder(
    config: &AppConfig,
    store: &mut MetadataStore,
    request: &ScanRequest,
) -> ScanOutcome {
    log::info!("Scanning folder {:?}", request.folder);
    let files = walker::find_gif_files(&request.folder, &config.allowed_extensions);

    let mut outcome = ScanOutcome::default();
    for path in files {
        match processor::process_gif(&path) {
            Ok(metadata) => {
                let key = store_key(&path);
                log::debug!("Indexed {}: {:?}", key, metadata);
                store.insert(key.clone(), metadata);
                outcome.indexed.push(key);
            }
            Err(e) => {
                log::warn!("Failed to process {:?}: {}", path, e);
                outcome.skipped += 1;
            }
        }
    }

    log::info!(
        "Scan complete: {} indexed, {} skipped",
        outcome.indexed.len(),
        outcome.skipped
    );
    outcome
}

pub fn get_metadata<'a>(store: &'a MetadataStore, path: &str) -> Option<&'a GifMetadata> {
    store.get(path)
}

/// Applies a field-by-field overwrite to an existing record. Numeric
/// values are parsed up front so a bad one leaves the record untouched.
pub fn edit_metadata(store: &mut MetadataStore, request: &EditRequest) -> Result<(), AppError> {
    let colors = parse_field::<u32>("colors", request.colors.as_deref())?;
    let background_color =
        parse_field::<u8>("background_color", request.background_color.as_deref())?;
    let image_count = parse_field::<u32>("image_count", request.image_count.as_deref())?;

    let metadata = store
        .get_mut(&request.path)
        .ok_or_else(|| AppError::NotFound(request.path.clone()))?;

    if let Some(v) = &request.version {
        metadata.version = v.clone();
    }
    if let Some(v) = &request.size {
        metadata.size = v.clone();
    }
    if let Some(v) = colors {
        metadata.colors = v;
    }
    if let Some(v) = background_color {
        metadata.background_color = v;
    }
    if let Some(v) = &request.compression_type {
        metadata.compression_type = v.clone();
    }
    if let Some(v) = &request.numeric_format {
        metadata.numeric_format = v.clone();
    }
    if let Some(v) = image_count {
        metadata.image_count = v;
    }
    if let Some(v) = &request.creation_date {
        metadata.creation_date = v.clone();
    }
    if let Some(v) = &request.modification_date {
        metadata.modification_date = v.clone();
    }
    if let Some(v) = &request.comments {
        metadata.comments = v.clone();
    }

    log::info!("Updated metadata for {}", request.path);
    Ok(())
}

fn parse_field<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, AppError> {
    value
        .map(|v| {
            v.trim().parse().map_err(|_| AppError::InvalidField {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}
