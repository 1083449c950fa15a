//! PNG and data URI encoding, plus output file naming

use crate::generator::seed::hash_seed;
use crate::io::configuration::{DATA_URI_PREFIX, EMPTY_SEED_STEM, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{PatternError, Result, file_system_error};
use base64::Engine;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encode `image` as PNG bytes
///
/// # Errors
///
/// Returns an error if the PNG encoder rejects the image
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode `image` as a base64 PNG data URI usable as an HTML or CSS image source
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_data_uri(image: &RgbaImage) -> Result<String> {
    let png = encode_png(image)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    Ok(format!("{DATA_URI_PREFIX}{encoded}"))
}

/// Recover the PNG bytes from a data URI produced by [`encode_data_uri`]
///
/// Returns `None` if the prefix is missing or the payload is not valid base64.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX)?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()
}

/// Save `image` to `path` as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| PatternError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// File-name-safe stem for a seed
///
/// ASCII letters, digits, `-`, `_` and `.` are kept; every other character
/// becomes `_`. The empty seed maps to a fixed stem. Whenever the stem is not
/// the seed itself, or the seed is that fixed stem, the seed hash is appended
/// as `-xxxxxxxx` so distinct seeds such as `"a b"` and `"a_b"` get distinct
/// files.
pub fn seed_file_stem(seed: &str) -> String {
    let sanitized: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized == seed && seed != EMPTY_SEED_STEM && !seed.is_empty() {
        return sanitized;
    }

    let base = if seed.is_empty() {
        EMPTY_SEED_STEM
    } else {
        sanitized.as_str()
    };
    format!("{base}-{:08x}", hash_seed(seed) as u32)
}

/// Path the CLI writes the pattern for `seed` to inside `output_dir`
pub fn output_path(output_dir: &Path, seed: &str) -> PathBuf {
    output_dir.join(format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        seed_file_stem(seed)
    ))
}
