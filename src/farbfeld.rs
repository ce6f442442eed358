//! The farbfeld interchange format: an 8-byte magic, big-endian u32
//! dimensions, then one big-endian RGBA16 quadruple per pixel.

use nom::{bytes::complete::tag, number::complete::be_u32, sequence::tuple, IResult};

use crate::error::DecodeError;
use crate::pixel::Pixel;
use crate::png::PNG;

const MAGIC: &[u8; 8] = b"farbfeld";

pub fn encode(image: &PNG) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16 + image.pixels().len() * 8);
    bytes.extend(MAGIC);
    bytes.extend(image.width().to_be_bytes());
    bytes.extend(image.height().to_be_bytes());
    for pixel in image.pixels() {
        bytes.extend(pixel.red.to_be_bytes());
        bytes.extend(pixel.green.to_be_bytes());
        bytes.extend(pixel.blue.to_be_bytes());
        bytes.extend(pixel.alpha.to_be_bytes());
    }
    bytes
}

pub fn decode(bytes: &[u8]) -> anyhow::Result<PNG> {
    let parsed: IResult<_, _> = tuple((tag(MAGIC.as_slice()), be_u32, be_u32))(bytes);
    let (rest, (_, width, height)) = parsed.map_err(|_| {
        DecodeError::Format("input does not start with a farbfeld header".to_string())
    })?;
    if width == 0 || height == 0 {
        return Err(DecodeError::Format(format!(
            "invalid farbfeld dimensions {width}x{height}"
        ))
        .into());
    }
    // Dimensions are full u32s here, so the product can exceed u64.
    let expected = width as u128 * height as u128 * 8;
    if rest.len() as u128 != expected {
        return Err(DecodeError::Format(format!(
            "farbfeld payload is {} bytes, expected {}",
            rest.len(),
            expected
        ))
        .into());
    }
    let pixels = rest
        .chunks_exact(8)
        .map(|quad| {
            Pixel::new(
                u16::from_be_bytes([quad[0], quad[1]]),
                u16::from_be_bytes([quad[2], quad[3]]),
                u16::from_be_bytes([quad[4], quad[5]]),
                u16::from_be_bytes([quad[6], quad[7]]),
            )
        })
        .collect();
    Ok(PNG::from_parts(width, height, pixels))
}
