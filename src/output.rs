use crate::error::Result;
use crate::render::PixelBuffer;
use log::info;
use std::ffi::OsStr;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const PPM_COMMENT: &str = "# output.ppm";
const MAX_SAMPLE: u8 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PpmFormat {
    /// P3, whitespace separated decimal samples
    Ascii,
    /// P6, raw bytes
    Binary,
}

impl PpmFormat {
    pub fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

impl Default for PpmFormat {
    fn default() -> Self {
        PpmFormat::Ascii
    }
}

impl fmt::Display for PpmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

impl FromStr for PpmFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p3" | "ascii" => Ok(PpmFormat::Ascii),
            "p6" | "binary" => Ok(PpmFormat::Binary),
            _ => Err(format!("unknown ppm format \"{}\"", s)),
        }
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W, format: PpmFormat) -> io::Result<()> {
    write!(
        writer,
        "{}\n{}\n{} {}\n{}\n",
        format.magic(),
        PPM_COMMENT,
        buffer.width(),
        buffer.height(),
        MAX_SAMPLE
    )?;

    match format {
        PpmFormat::Binary => writer.write_all(buffer.as_raw())?,
        PpmFormat::Ascii => {
            for row in buffer.rows() {
                for pixel in row.chunks_exact(PixelBuffer::CHANNELS) {
                    write!(writer, "{} {} {} ", pixel[0], pixel[1], pixel[2])?;
                }
                writeln!(writer)?;
            }
        }
    }

    writer.flush()
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |extension| extension.eq_ignore_ascii_case("ppm"))
}

/// Writes `buffer` to `path`. `.ppm` files use `ppm_format`; any other
/// extension is encoded by the `image` crate.
pub fn save(buffer: &PixelBuffer, path: &Path, ppm_format: PpmFormat) -> Result<()> {
    if is_ppm(path) {
        let file = BufWriter::new(File::create(path)?);
        write_ppm(buffer, file, ppm_format)?;
    } else {
        buffer.to_image().save(path)?;
    }
    info!("Wrote {}x{} image to {}", buffer.width(), buffer.height(), path.display());

    Ok(())
}
