use nom::{
    bytes::complete::take, combinator::map, number::complete::be_u32, sequence::tuple, IResult,
};

use crate::error::DecodeError;

mod crc;
pub(crate) mod idat;
pub(crate) mod iend;
pub(crate) mod ihdr;
pub(crate) mod plte;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub(crate) enum Chunk<'a> {
    IHDR(ihdr::IHDRChunk),
    PLTE(plte::PLTEChunk),
    IDAT(idat::IDATChunk<'a>),
    IEND,
    Unknown(RawChunk<'a>),
}

pub(crate) fn iter_chunks(source: &[u8], verify_crc: bool) -> ChunkIter {
    ChunkIter {
        source,
        verify_crc,
        finished: false,
    }
}

pub(crate) struct ChunkIter<'a> {
    source: &'a [u8],
    verify_crc: bool,
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<Chunk<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.source.is_empty() {
            return None;
        }
        match parse_chunk(self.source, self.verify_crc) {
            Ok((rest, chunk)) => {
                self.source = rest;
                if matches!(chunk, Chunk::IEND) {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn parse_chunk(input: &[u8], verify_crc: bool) -> Result<(&[u8], Chunk<'_>), DecodeError> {
    let (rest, raw) = raw_chunk(input)
        .map_err(|_| DecodeError::Format("chunk runs past the end of the input".to_string()))?;
    if verify_crc {
        raw.check_crc()?;
    }
    let chunk = match raw.chunk_type {
        ihdr::IHDRChunk::HEADER => Chunk::IHDR(ihdr::IHDRChunk::from_bytes(raw.data)?),
        plte::PLTEChunk::HEADER => Chunk::PLTE(plte::PLTEChunk::from_bytes(raw.data)?),
        idat::IDATChunk::HEADER => Chunk::IDAT(idat::IDATChunk::from_bytes(raw.data)?),
        iend::IENDChunk::HEADER => Chunk::IEND,
        _ => Chunk::Unknown(raw),
    };
    Ok((rest, chunk))
}

#[derive(Debug)]
pub(crate) struct RawChunk<'a> {
    pub(crate) chunk_type: &'a [u8; 4],
    pub(crate) data: &'a [u8],
    stored_crc: u32,
}

impl<'a> RawChunk<'a> {
    fn check_crc(&self) -> Result<(), DecodeError> {
        let computed = crc::calculate_crc(
            self.chunk_type
                .iter()
                .copied()
                .chain(self.data.iter().copied()),
        );
        if computed != self.stored_crc {
            return Err(DecodeError::Format(format!(
                "crc mismatch in {} chunk (stored {:08x}, computed {:08x})",
                String::from_utf8_lossy(self.chunk_type),
                self.stored_crc,
                computed
            )));
        }
        Ok(())
    }
}

fn raw_chunk(input: &[u8]) -> IResult<&[u8], RawChunk<'_>> {
    let (input, length) = be_u32(input)?;
    let (input, chunk_type) = map(take(4usize), |v: &[u8]| {
        v.try_into().expect("4 bytes should have been taken")
    })(input)?;
    let (input, (data, stored_crc)) = tuple((take(length as usize), be_u32))(input)?;
    Ok((
        input,
        RawChunk {
            chunk_type,
            data,
            stored_crc,
        },
    ))
}

pub(crate) trait ParseableChunk<'a>: Sized {
    const HEADER: &'static [u8; 4];

    fn from_bytes(chunk_data: &'a [u8]) -> Result<Self, DecodeError>;
}
