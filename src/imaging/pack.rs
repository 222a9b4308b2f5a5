use image::{imageops, imageops::FilterType, Rgba, RgbaImage};

/// Whether a pixel prints a dot
///
/// Averages alpha, red and green (blue is not part of the average) and compares against full white.
pub fn is_not_white(pixel: &Rgba<u8>) -> bool {
    (pixel[3] as u32 + pixel[0] as u32 + pixel[1] as u32) / 3 != 255
}

/// Packs the image into one bit per pixel
///
/// The leftmost pixel of each group of eight lands in the most significant bit, and every row is padded with white up to a whole byte, so each row takes `ceil(width / 8)` bytes.
///
/// ```rust
/// use thermal_rs::imaging::pack_bits;
/// use image::{Rgba, RgbaImage};
///
/// let mut image = RgbaImage::from_pixel(10, 1, Rgba([255, 255, 255, 255]));
/// image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
/// image.put_pixel(9, 0, Rgba([0, 0, 0, 255]));
/// assert_eq!(vec![0x80, 0x40], pack_bits(&image));
/// ```
pub fn pack_bits(image: &RgbaImage) -> Vec<u8> {
    let width_bytes = (image.width() as usize + 7) / 8;
    let mut packed = vec![0u8; width_bytes * image.height() as usize];
    for (x, y, pixel) in image.enumerate_pixels() {
        if is_not_white(pixel) {
            let idx = y as usize * width_bytes + x as usize / 8;
            packed[idx] |= 0x80 >> (x % 8);
        }
    }
    packed
}

/// Scales the image down to `max_width` dots, keeping the aspect ratio
///
/// Images already narrow enough are returned untouched.
pub fn fit_width(image: &RgbaImage, max_width: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width <= max_width || max_width == 0 {
        return image.clone();
    }
    let aspect_ratio = (width as f64) / (height as f64);
    let new_height = ((max_width as f64) / aspect_ratio).floor().max(1.0) as u32;
    imageops::resize(image, max_width, new_height, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_is_ignored() {
        assert!(!is_not_white(&Rgba([255, 255, 0, 255])));
        assert!(is_not_white(&Rgba([255, 0, 255, 255])));
        // Transparent white still prints
        assert!(is_not_white(&Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn rows_are_padded() {
        let image = RgbaImage::from_pixel(9, 3, Rgba([0, 0, 0, 255]));
        assert_eq!(vec![0xff, 0x80, 0xff, 0x80, 0xff, 0x80], pack_bits(&image));
    }

    #[test]
    fn white_packs_to_zero() {
        let image = RgbaImage::from_pixel(16, 2, Rgba([255, 255, 255, 255]));
        assert!(pack_bits(&image).iter().all(|b| *b == 0));
    }

    #[test]
    fn wide_images_shrink() {
        let image = RgbaImage::new(1000, 500);
        assert_eq!((576, 288), fit_width(&image, 576).dimensions());
        assert_eq!((1000, 500), fit_width(&image, 1200).dimensions());
    }
}
