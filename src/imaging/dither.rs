use super::{Algorithm, DitherKernel};
use image::{Rgba, RgbaImage};

/// Luma under which a pixel turns black
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Reduces the image to pure black and white pixels
///
/// Pixels are visited once, row by row from the top, left to right. Alpha is kept as is. Every kernel except [OneBpp](Algorithm::OneBpp) pushes the quantization error of each pixel onto the neighbours the scan has not reached yet, so the pass is inherently sequential.
///
/// ```rust
/// use thermal_rs::imaging::{generate_dithered, Algorithm};
/// use image::{Rgba, RgbaImage};
///
/// let gray = RgbaImage::from_pixel(4, 4, Rgba([100, 100, 100, 255]));
/// let dithered = generate_dithered(&gray, Algorithm::OneBpp, 128);
/// assert!(dithered.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
/// ```
pub fn generate_dithered(image: &RgbaImage, algorithm: Algorithm, threshold: u8) -> RgbaImage {
    match algorithm {
        Algorithm::OneBpp => threshold_only(image, threshold),
        other => diffuse(image, &other.kernel(threshold))
    }
}

fn luma(pixel: &Rgba<u8>) -> f64 {
    0.299 * pixel[0] as f64 + 0.587 * pixel[1] as f64 + 0.114 * pixel[2] as f64
}

fn grayed(pixel: &Rgba<u8>, threshold: u8) -> Rgba<u8> {
    let level = if luma(pixel) < threshold as f64 { 0 } else { 255 };
    Rgba([level, level, level, pixel[3]])
}

fn threshold_only(image: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut target = image.clone();
    for pixel in target.pixels_mut() {
        *pixel = grayed(pixel, threshold);
    }
    target
}

/// Error diffusion with an arbitrary kernel
pub(crate) fn diffuse(image: &RgbaImage, kernel: &DitherKernel) -> RgbaImage {
    let mut work = image.clone();
    let (width, height) = (work.width() as isize, work.height() as isize);

    for y in 0..height {
        for x in 0..width {
            let original = *work.get_pixel(x as u32, y as u32);
            let gray = grayed(&original, kernel.threshold());
            work.put_pixel(x as u32, y as u32, gray);

            // Alpha survives graying, so its error is always zero
            let error = [
                original[0] as i32 - gray[0] as i32,
                original[1] as i32 - gray[1] as i32,
                original[2] as i32 - gray[2] as i32
            ];
            if error == [0, 0, 0] {
                continue;
            }

            for (row, weights) in kernel.matrix().iter().enumerate() {
                for (col, weight) in weights.iter().enumerate() {
                    if *weight == 0 {
                        continue;
                    }
                    let target_x = x + col as isize - kernel.anchor_offset();
                    let target_y = y + row as isize;
                    // The top row and left column never receive error
                    if target_x <= 0 || target_y <= 0 || target_x >= width || target_y >= height {
                        continue;
                    }
                    let target = work.get_pixel_mut(target_x as u32, target_y as u32);
                    for channel in 0..3 {
                        let value = target[channel] as i32 + kernel.scale(error[channel], *weight);
                        target[channel] = value.max(0).min(255) as u8;
                    }
                }
            }
        }
    }
    work
}
