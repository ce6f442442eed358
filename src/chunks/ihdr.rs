use nom::{bytes::complete::take, number::complete::be_u32, sequence::tuple};

use crate::error::DecodeError;

use super::ParseableChunk;

#[derive(Debug, Default)]
pub struct IHDRChunk {
    pub width: u32,
    pub height: u32,
    pub(crate) bit_depth: u8,
    pub(crate) color_type: ColorType,
    pub(crate) compression_method: u8,
    pub(crate) filter_method: u8,
    pub(crate) interlace_method: Interlacing,
}
impl IHDRChunk {
    fn validate(&self) -> Result<(), DecodeError> {
        if self.width == 0 || self.width > i32::MAX as u32 {
            return Err(DecodeError::Format(format!(
                "invalid image width {}",
                self.width
            )));
        }
        if self.height == 0 || self.height > i32::MAX as u32 {
            return Err(DecodeError::Format(format!(
                "invalid image height {}",
                self.height
            )));
        }
        let depth_is_legal = match self.color_type {
            ColorType::Greyscale => matches!(self.bit_depth, 1 | 2 | 4 | 8 | 16),
            ColorType::IndexedColor => matches!(self.bit_depth, 1 | 2 | 4 | 8),
            ColorType::Truecolor
            | ColorType::GreyscaleWithAlpha
            | ColorType::TruecolorWithAlpha => matches!(self.bit_depth, 8 | 16),
        };
        if !depth_is_legal {
            return Err(DecodeError::Format(format!(
                "bit depth {} is not valid for color type {:?}",
                self.bit_depth, self.color_type
            )));
        }
        if self.compression_method != 0 {
            return Err(DecodeError::Format(format!(
                "unrecognized compression method {}",
                self.compression_method
            )));
        }
        if self.filter_method != 0 {
            return Err(DecodeError::Format(format!(
                "unrecognized filter method {}",
                self.filter_method
            )));
        }
        if let Interlacing::Adam7 = self.interlace_method {
            return Err(DecodeError::Format(
                "interlaced images are not supported".to_string(),
            ));
        }
        Ok(())
    }

    /// How many bytes a filter reaches back per pixel, at minimum one.
    pub(crate) fn filter_width(&self) -> u8 {
        let channel_count = self.color_type.channel_count();
        let sample_width = u8::max(self.bit_depth / 8, 1);
        channel_count * sample_width
    }

    pub(crate) fn pixel_width(&self) -> u8 {
        self.color_type.channel_count() * self.bit_depth
    }

    /// Bytes per row, including the leading filter byte.
    pub(crate) fn scanline_size(&self) -> usize {
        (self.width as usize * self.pixel_width() as usize).div_ceil(8) + 1
    }
}
impl<'a> ParseableChunk<'a> for IHDRChunk {
    const HEADER: &'static [u8; 4] = b"IHDR";

    fn from_bytes(chunk_data: &'a [u8]) -> Result<Self, DecodeError> {
        let parsed: nom::IResult<_, _> = tuple((be_u32, be_u32, take(5usize)))(chunk_data);
        let (rest, (width, height, other_bytes)) = parsed
            .map_err(|_| DecodeError::Format("IHDR payload must be 13 bytes".to_string()))?;
        if !rest.is_empty() {
            return Err(DecodeError::Format("IHDR payload must be 13 bytes".to_string()));
        }
        let header = IHDRChunk {
            width,
            height,
            bit_depth: other_bytes[0],
            color_type: other_bytes[1].try_into()?,
            compression_method: other_bytes[2],
            filter_method: other_bytes[3],
            interlace_method: other_bytes[4].try_into()?,
        };
        header.validate()?;
        Ok(header)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) enum ColorType {
    #[default]
    Greyscale = 0,
    Truecolor = 2,
    IndexedColor = 3,
    GreyscaleWithAlpha = 4,
    TruecolorWithAlpha = 6,
}
impl TryFrom<u8> for ColorType {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleWithAlpha),
            6 => Ok(Self::TruecolorWithAlpha),
            _ => Err(DecodeError::Format(format!(
                "unrecognized color type {value}"
            ))),
        }
    }
}
impl ColorType {
    pub(crate) fn channel_count(&self) -> u8 {
        match self {
            Self::Greyscale => 1,
            Self::IndexedColor => 1,
            Self::GreyscaleWithAlpha => 2,
            Self::Truecolor => 3,
            Self::TruecolorWithAlpha => 4,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) enum Interlacing {
    #[default]
    None,
    Adam7,
}
impl TryFrom<u8> for Interlacing {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Adam7),
            _ => Err(DecodeError::Format(format!(
                "unrecognized interlace method {value}"
            ))),
        }
    }
}
