mod bits;
mod chunks;
mod error;
pub mod farbfeld;
mod filters;
mod image_data;
mod pixel;
mod png;
mod samples;
mod scanlines;

pub use error::DecodeError;
pub use pixel::Pixel;
pub use png::PNG;
