use nom::{bytes::complete::tag, IResult};

use crate::chunks::{self, ihdr::IHDRChunk, plte::PLTEChunk, Chunk};
use crate::error::DecodeError;
use crate::image_data::decompress_data;
use crate::pixel::{resolve, Pixel};
use crate::samples::SampleReader;
use crate::scanlines::reconstruct_scanlines;

/// A decoded image, fully resolved to 16-bit RGBA.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PNG {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PNG {
    /// Decodes a PNG byte stream. Chunk checksums are not verified.
    pub fn decode(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::run_pipeline(bytes, false)
    }

    /// Like [`PNG::decode`], but fails on any chunk whose stored CRC does
    /// not match its contents.
    pub fn decode_strict(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::run_pipeline(bytes, true)
    }

    fn run_pipeline(bytes: &[u8], verify_crc: bool) -> anyhow::Result<Self> {
        let (rest, _) = parse_signature(bytes).map_err(|_| DecodeError::Signature)?;
        let mut header: Option<IHDRChunk> = None;
        let mut palette: Option<PLTEChunk> = None;
        let mut compressed = Vec::new();
        for chunk in chunks::iter_chunks(rest, verify_crc) {
            match chunk? {
                Chunk::IHDR(ihdr) => {
                    if header.is_some() {
                        return Err(DecodeError::Format("duplicate IHDR chunk".to_string()).into());
                    }
                    log::debug!(
                        "parsed header: {}x{}, bit depth {}, color type {:?}",
                        ihdr.width,
                        ihdr.height,
                        ihdr.bit_depth,
                        ihdr.color_type
                    );
                    header = Some(ihdr);
                }
                Chunk::PLTE(plte) => {
                    if header.is_none() {
                        return Err(
                            DecodeError::Format("PLTE chunk before IHDR".to_string()).into()
                        );
                    }
                    if palette.is_some() {
                        return Err(DecodeError::Format("duplicate PLTE chunk".to_string()).into());
                    }
                    palette = Some(plte);
                }
                Chunk::IDAT(idat) => {
                    if header.is_none() {
                        return Err(
                            DecodeError::Format("IDAT chunk before IHDR".to_string()).into()
                        );
                    }
                    compressed.extend_from_slice(idat.data);
                }
                Chunk::IEND => break,
                Chunk::Unknown(raw) => {
                    log::debug!(
                        "skipping {} chunk ({} bytes)",
                        String::from_utf8_lossy(raw.chunk_type),
                        raw.data.len()
                    );
                }
            }
        }
        let header =
            header.ok_or_else(|| DecodeError::Format("missing IHDR chunk".to_string()))?;
        if compressed.is_empty() {
            return Err(DecodeError::Format("missing image data".to_string()).into());
        }
        let data = decompress_data(&compressed)?;
        log::debug!(
            "inflated {} bytes of image data into {}",
            compressed.len(),
            data.len()
        );
        let rows = reconstruct_scanlines(&data, &header)?;
        let pixels = extract_pixels(&rows, &header, palette.as_ref())?;
        Ok(PNG {
            width: header.width,
            height: header.height,
            pixels,
        })
    }

    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }
}

fn extract_pixels(
    rows: &[u8],
    header: &IHDRChunk,
    palette: Option<&PLTEChunk>,
) -> Result<Vec<Pixel>, DecodeError> {
    let channel_count = header.color_type.channel_count() as usize;
    let width = header.width as usize;
    let height = header.height as usize;
    let mut reader = SampleReader::new(rows, header.bit_depth);
    let mut samples = vec![0u16; channel_count];
    let mut pixels = Vec::with_capacity(width * height);
    for _ in 0..height {
        for _ in 0..width {
            for sample in samples.iter_mut() {
                *sample = reader.read_sample();
            }
            pixels.push(resolve(&samples, header, palette)?);
        }
        reader.align();
    }
    Ok(pixels)
}

fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(b"\x89PNG\x0d\x0a\x1a\x0a")(input)
}
