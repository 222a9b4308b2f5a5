//! Bitmap to thermal raster conversion
//!
//! Images go through two steps before reaching the printer: [dithering](generate_dithered), which turns every pixel into pure black or pure white while spreading the quantization error over the neighbours, and [packing](pack_bits), which squeezes the result into one bit per dot.

pub use self::algorithm::Algorithm;
pub use self::dither::{generate_dithered, DEFAULT_THRESHOLD};
pub use self::kernel::DitherKernel;
pub use self::pack::{pack_bits, is_not_white, fit_width};

mod algorithm;
mod dither;
mod kernel;
mod pack;
