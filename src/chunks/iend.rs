use crate::error::DecodeError;

use super::ParseableChunk;

pub(crate) struct IENDChunk;
impl<'a> ParseableChunk<'a> for IENDChunk {
    const HEADER: &'static [u8; 4] = b"IEND";

    fn from_bytes(_chunk_data: &'a [u8]) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}
