use nom::{bytes::complete::take, combinator::map, multi::count, IResult};

use crate::error::DecodeError;
use crate::pixel::{scale_sample, Pixel};

use super::ParseableChunk;

/// Palette entries are stored as finished pixels. The file carries 8-bit
/// RGB triplets, widened here once so lookups never rescale.
#[derive(Debug)]
pub struct PLTEChunk {
    colors: Vec<Pixel>,
}
impl PLTEChunk {
    pub(crate) fn color(&self, index: usize) -> Option<&Pixel> {
        self.colors.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }
}
impl<'a> ParseableChunk<'a> for PLTEChunk {
    const HEADER: &'static [u8; 4] = b"PLTE";

    fn from_bytes(chunk_data: &'a [u8]) -> Result<Self, DecodeError> {
        if chunk_data.len() % 3 != 0 {
            return Err(DecodeError::Format(format!(
                "PLTE length {} is not a multiple of 3",
                chunk_data.len()
            )));
        }
        let entry_count = chunk_data.len() / 3;
        let parsed: IResult<_, _> = count(
            map(take(3usize), |rgb: &[u8]| {
                Pixel::new(
                    scale_sample(rgb[0] as u16, 8),
                    scale_sample(rgb[1] as u16, 8),
                    scale_sample(rgb[2] as u16, 8),
                    u16::MAX,
                )
            }),
            entry_count,
        )(chunk_data);
        let (_, colors) =
            parsed.map_err(|_| DecodeError::Format("malformed PLTE chunk".to_string()))?;
        Ok(PLTEChunk { colors })
    }
}
