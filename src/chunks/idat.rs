use crate::error::DecodeError;

use super::ParseableChunk;

/// One slice of the compressed image data stream. Consecutive IDAT
/// payloads concatenate into a single zlib stream.
#[derive(Debug)]
pub(crate) struct IDATChunk<'a> {
    pub(crate) data: &'a [u8],
}
impl<'a> ParseableChunk<'a> for IDATChunk<'a> {
    const HEADER: &'static [u8; 4] = b"IDAT";

    fn from_bytes(chunk_data: &'a [u8]) -> Result<Self, DecodeError> {
        Ok(IDATChunk { data: chunk_data })
    }
}
