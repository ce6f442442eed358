use miniz_oxide::inflate::decompress_to_vec_zlib;

use crate::error::DecodeError;

/// Inflates the concatenated IDAT payloads as one zlib stream.
pub(crate) fn decompress_data(compressed_data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decompress_to_vec_zlib(compressed_data).map_err(|e| DecodeError::Compression(e.to_string()))
}
