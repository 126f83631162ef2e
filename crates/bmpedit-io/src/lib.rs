//! bmpedit-io - Bitmap image I/O
//!
//! Decodes and encodes uncompressed 24 bits-per-pixel BMP files into and
//! out of [`Image`].
//!
//! Writing encodes the whole file in memory before touching the
//! destination, so an encode never leaves a partial file behind.

pub mod bmp;
mod error;
pub mod header;

pub use bmp::{decode_bmp, encode_bmp, read_bmp, write_bmp};
pub use error::{IoError, IoResult};
pub use header::{BmpHeader, read_bmp_header};

use bmpedit_core::Image;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a bitmap file from a path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path).map_err(IoError::Io)?;
    let img = read_bmp(BufReader::new(file))?;
    log::debug!(
        "read {}: {}x{}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Write an image to a path as a bitmap file.
///
/// The destination is created or truncated only after encoding succeeds.
pub fn write_image<P: AsRef<Path>>(img: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let data = encode_bmp(img);
    std::fs::write(path, &data).map_err(IoError::Io)?;
    log::debug!("wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}
