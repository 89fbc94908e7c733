// src/metadata.rs

use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";
pub const COMPRESSION_LZW: &str = "LZW";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GifMetadata {
    pub version: String,
    pub size: String,
    pub colors: u32,
    pub background_color: u8,
    pub compression_type: String,
    pub numeric_format: String,
    pub image_count: u32,
    pub creation_date: String,
    pub modification_date: String,
    pub comments: String,
}
