use crate::error::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Filter {
    None,
    Sub,
    Up,
    Average,
    Paeth,
}

impl Filter {
    // x is the filtered byte; a, b and c are the already-reconstructed
    // left, up and up-left neighbor bytes (zero where those fall outside
    // the image). All additions wrap modulo 256.
    pub(crate) fn reconstruct(self, x: u8, a: u8, b: u8, c: u8) -> u8 {
        match self {
            Filter::None => x,
            Filter::Sub => x.wrapping_add(a),
            Filter::Up => x.wrapping_add(b),
            Filter::Average => x.wrapping_add(((a as u16 + b as u16) / 2) as u8),
            Filter::Paeth => x.wrapping_add(paeth_predict(a, b, c)),
        }
    }
}

impl TryFrom<u8> for Filter {
    type Error = DecodeError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Sub),
            2 => Ok(Self::Up),
            3 => Ok(Self::Average),
            4 => Ok(Self::Paeth),
            i => Err(DecodeError::Format(format!("unrecognized filter type {i}"))),
        }
    }
}

fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i32 + b as i32 - c as i32;
    let pa = (p - a as i32).abs();
    let pb = (p - b as i32).abs();
    let pc = (p - c as i32).abs();
    // The evaluation order is part of the format: ties go to the left
    // neighbor first, then up, then up-left.
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}
