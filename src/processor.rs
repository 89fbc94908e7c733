use crate::error::AppError;
use crate::gif;
use crate::metadata::{GifMetadata, COMPRESSION_LZW, NOT_AVAILABLE};
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::SystemTime;

/// Extracts the metadata record for one GIF file: header fields, block
/// counts and filesystem timestamps. Errors are returned to the caller,
/// which skips the file and keeps scanning.
pub fn process_gif(path: &Path) -> Result<GifMetadata, AppError> {
    log::trace!("Reading GIF header for {:?}", path);
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let header = gif::parse_header(&mut reader)?;
    log::debug!(
        "Header for {:?}: {} {}x{}, {} colors",
        path,
        header.version,
        header.width,
        header.height,
        header.color_count
    );

    let summary = gif::scan_blocks(&mut reader);
    log::debug!(
        "Block scan for {:?}: {} image descriptors",
        path,
        summary.image_count
    );

    let fs_meta = std::fs::metadata(path)?;
    // created() is unsupported on some platforms/filesystems.
    let creation_date = fs_meta
        .created()
        .map(format_timestamp)
        .unwrap_or_else(|_| NOT_AVAILABLE.to_string());
    let modification_date = fs_meta
        .modified()
        .map(format_timestamp)
        .unwrap_or_else(|_| NOT_AVAILABLE.to_string());

    Ok(GifMetadata {
        version: header.version,
        size: format!("{}x{}", header.width, header.height),
        colors: header.color_count,
        background_color: header.background_color,
        compression_type: COMPRESSION_LZW.to_string(),
        numeric_format: NOT_AVAILABLE.to_string(),
        image_count: summary.image_count,
        creation_date,
        modification_date,
        comments: summary
            .comments
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
