use crate::chunks::ihdr::{ColorType, IHDRChunk};
use crate::chunks::plte::PLTEChunk;
use crate::error::DecodeError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Pixel {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub alpha: u16,
}

impl Pixel {
    pub fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

// Linear rescale from the sample's native range to the full 16-bit range,
// rounded to nearest. 2^depth - 1 divides 65535 for every legal depth, so
// the result is exact; depth 16 passes through untouched.
pub(crate) fn scale_sample(sample: u16, bit_depth: u8) -> u16 {
    if bit_depth == 16 {
        return sample;
    }
    let max = (1u32 << bit_depth) - 1;
    ((sample as u32 * u16::MAX as u32 + max / 2) / max) as u16
}

pub(crate) fn resolve(
    samples: &[u16],
    header: &IHDRChunk,
    palette: Option<&PLTEChunk>,
) -> Result<Pixel, DecodeError> {
    let scaled = |i: usize| scale_sample(samples[i], header.bit_depth);
    match header.color_type {
        ColorType::Greyscale => Ok(Pixel::new(scaled(0), scaled(0), scaled(0), u16::MAX)),
        ColorType::Truecolor => Ok(Pixel::new(scaled(0), scaled(1), scaled(2), u16::MAX)),
        ColorType::IndexedColor => {
            let palette = palette.ok_or_else(|| {
                DecodeError::Format("indexed image without PLTE chunk".to_owned())
            })?;
            // palette entries are already full 16-bit values, and the
            // index is the raw sample, never rescaled
            let index = samples[0] as usize;
            palette
                .color(index)
                .copied()
                .ok_or(DecodeError::PaletteIndex {
                    index,
                    palette_len: palette.len(),
                })
        }
        ColorType::GreyscaleWithAlpha => Ok(Pixel::new(scaled(0), scaled(0), scaled(0), scaled(1))),
        ColorType::TruecolorWithAlpha => Ok(Pixel::new(scaled(0), scaled(1), scaled(2), scaled(3))),
    }
}
