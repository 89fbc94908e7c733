use crate::error::AppError;
use std::io::Read;

// Fixed prefix: 6-byte signature + 7-byte logical screen descriptor.
pub const HEADER_LEN: usize = 13;

const IMAGE_SEPARATOR: u8 = 0x2C;
const EXTENSION_INTRODUCER: u8 = 0x21;
const COMMENT_LABEL: u8 = 0xFE;
const TRAILER: u8 = 0x3B;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifHeader {
    pub version: String,
    pub width: u16,
    pub height: u16,
    pub color_count: u32,
    pub background_color: u8,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BlockSummary {
    pub image_count: u32,
    pub comments: Option<String>,
}

/// Reads the fixed 13-byte GIF prefix: signature/version, logical screen
/// size, the packed fields byte and the background color index. The
/// signature is decoded as UTF-8 but not validated against "GIF8[79]a".
pub fn parse_header<R: Read>(reader: &mut R) -> Result<GifHeader, AppError> {
    let mut header = [0u8; HEADER_LEN];
    if let Err(e) = reader.read_exact(&mut header) {
        return Err(if e.kind() == std::io::ErrorKind::UnexpectedEof {
            AppError::TruncatedHeader { expected: HEADER_LEN }
        } else {
            AppError::Io(e)
        });
    }

    let version = String::from_utf8(header[..6].to_vec())?;
    let width = u16::from_le_bytes([header[6], header[7]]);
    let height = u16::from_le_bytes([header[8], header[9]]);

    let packed_fields = header[10];
    let color_flag = (packed_fields & 0b1000_0000) >> 7;
    let color_bits = (packed_fields & 0b0111_0000) >> 4;
    let color_count = if color_flag == 1 {
        1u32 << (color_bits + 1)
    } else {
        0
    };

    // header[12] is the pixel aspect ratio; nothing downstream uses it.
    Ok(GifHeader {
        version,
        width,
        height,
        color_count,
        background_color: header[11],
    })
}

/// Walks the stream after the fixed header byte-by-byte, counting image
/// descriptors (0x2C) and collecting comment extension text (0x21 0xFE),
/// until the trailer (0x3B) or end of stream.
///
/// The walk does not skip color tables or compressed pixel data between
/// blocks, so the image count is best-effort. Running out of bytes in the
/// middle of a comment sub-block stops the scan with whatever was
/// collected so far.
pub fn scan_blocks<R: Read>(reader: &mut R) -> BlockSummary {
    let mut image_count = 0u32;
    let mut comments = String::new();

    loop {
        let byte = match read_byte(reader) {
            Some(b) => b,
            None => break,
        };
        match byte {
            IMAGE_SEPARATOR => image_count += 1,
            EXTENSION_INTRODUCER => match read_byte(reader) {
                Some(COMMENT_LABEL) => {
                    if !read_comment_sub_blocks(reader, &mut comments) {
                        break;
                    }
                }
                Some(_) => {}
                None => break,
            },
            TRAILER => break,
            _ => {}
        }
    }

    BlockSummary {
        image_count,
        comments: if comments.is_empty() {
            None
        } else {
            Some(comments)
        },
    }
}

/// Consumes length-prefixed sub-blocks (1-byte length, 0 terminates),
/// appending each as lossy UTF-8 text. Returns false when the stream ends
/// mid-block.
fn read_comment_sub_blocks<R: Read>(reader: &mut R, out: &mut String) -> bool {
    loop {
        let len = match read_byte(reader) {
            Some(0) => return true,
            Some(n) => n as usize,
            None => return false,
        };
        let mut block = vec![0u8; len];
        match reader.read_exact(&mut block) {
            Ok(()) => out.push_str(&String::from_utf8_lossy(&block)),
            Err(_) => return false,
        }
    }
}

fn read_byte<R: Read>(reader: &mut R) -> Option<u8> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) => Some(byte[0]),
        Err(_) => None,
    }
}
