use crate::chunks::ihdr::IHDRChunk;
use crate::error::DecodeError;
use crate::filters::Filter;

/// Undoes per-row filtering. Input is the inflated stream, one filter
/// byte then `scanline_size - 1` data bytes per row. Output is the bare
/// row data, concatenated.
pub(crate) fn reconstruct_scanlines(
    data: &[u8],
    header: &IHDRChunk,
) -> Result<Vec<u8>, DecodeError> {
    let scanline_size = header.scanline_size();
    let row_bytes = scanline_size - 1;
    let height = header.height as usize;
    // A well-formed header can claim i32::MAX by i32::MAX pixels, whose
    // expected byte count does not fit in 64 bits.
    let expected = scanline_size as u128 * height as u128;
    if data.len() as u128 != expected {
        return Err(DecodeError::Format(format!(
            "decompressed image data is {} bytes, expected {}",
            data.len(),
            expected
        )));
    }
    let bpp = header.filter_width() as usize;
    let mut out = vec![0u8; data.len() - height];
    for row in 0..height {
        let line = &data[row * scanline_size..(row + 1) * scanline_size];
        let filter = Filter::try_from(line[0]).map_err(|_| {
            DecodeError::Format(format!("unrecognized filter type {} in row {row}", line[0]))
        })?;
        let out_start = row * row_bytes;
        for i in 0..row_bytes {
            let x = line[1 + i];
            let a = if i >= bpp { out[out_start + i - bpp] } else { 0 };
            let b = if row > 0 {
                out[out_start + i - row_bytes]
            } else {
                0
            };
            let c = if row > 0 && i >= bpp {
                out[out_start + i - row_bytes - bpp]
            } else {
                0
            };
            out[out_start + i] = filter.reconstruct(x, a, b, c);
        }
    }
    Ok(out)
}
