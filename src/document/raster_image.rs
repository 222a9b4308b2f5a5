use crate::{Error, imaging::{self, Algorithm}};
use image::{DynamicImage, RgbaImage};
use serde::{Serialize, Deserialize, ser::Serializer, de::Deserializer};
use serde::ser::SerializeTuple;

use base64::{Engine, engine::general_purpose::STANDARD};

/// Image ready for the printer
///
/// Holds the packed, one bit per dot raster of an already dithered picture. Building one is the costly step, so it is done once, and the raster can be printed (or stored, it serializes to base64) as many times as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    /// Width, in dots
    width: u32,
    /// Height, in dots
    height: u32,
    /// Rows of `ceil(width / 8)` bytes, most significant bit first
    data: Vec<u8>
}

impl RasterImage {
    /// Dithers and packs an image
    ///
    /// Images wider than `max_width` dots are scaled down first (keeping the aspect ratio). Pass the printer's head width, 384 dots for 58mm paper or 576 for 80mm paper.
    pub fn from_image(image: &DynamicImage, algorithm: Algorithm, threshold: u8, max_width: u32) -> RasterImage {
        let rgba = imaging::fit_width(&image.to_rgba8(), max_width);
        let dithered = imaging::generate_dithered(&rgba, algorithm, threshold);
        RasterImage::from_dithered(&dithered)
    }

    /// Attempts to create a raster from an encoded picture (png, jpeg, bmp...)
    pub fn from_bytes<A: AsRef<[u8]>>(source: A, algorithm: Algorithm, threshold: u8, max_width: u32) -> Result<RasterImage, Error> {
        let image = image::load_from_memory(source.as_ref())?;
        Ok(RasterImage::from_image(&image, algorithm, threshold, max_width))
    }

    /// Packs an image that is already black and white
    pub fn from_dithered(image: &RgbaImage) -> RasterImage {
        RasterImage {
            width: image.width(),
            height: image.height(),
            data: imaging::pack_bits(image)
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per raster row
    pub fn width_bytes(&self) -> u32 {
        (self.width + 7) / 8
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// `GS v 0` raster command, followed by the packed bits
    ///
    /// ```rust
    /// use thermal_rs::RasterImage;
    /// use image::{Rgba, RgbaImage};
    ///
    /// let raster = RasterImage::from_dithered(&RgbaImage::from_pixel(12, 2, Rgba([0, 0, 0, 255])));
    /// assert_eq!(
    ///     vec![0x1d, 0x76, 0x30, 0x00, 0x02, 0x00, 0x02, 0x00, 0xff, 0xf0, 0xff, 0xf0],
    ///     raster.command()
    /// );
    /// ```
    ///
    /// Rasters whose width in bytes or height do not fit the 16 bit header fields produce an empty command.
    pub fn command(&self) -> Vec<u8> {
        if self.data.is_empty() {
            return Vec::new();
        }
        let width_bytes = self.width_bytes();
        if width_bytes > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            log::warn!("Raster of {}x{} dots does not fit the raster command", self.width, self.height);
            return Vec::new();
        }
        let mut feed = Vec::with_capacity(8 + self.data.len());
        feed.extend_from_slice(&[0x1d, 0x76, 0x30, 0x00]);
        feed.push((width_bytes % 256) as u8); // xL
        feed.push((width_bytes / 256) as u8); // xH
        feed.push((self.height % 256) as u8); // yL
        feed.push((self.height / 256) as u8); // yH
        feed.extend_from_slice(&self.data);
        feed
    }
}

// Manual implementation of serialization
impl Serialize for RasterImage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.width)?;
        tup.serialize_element(&self.height)?;
        tup.serialize_element(&STANDARD.encode(&self.data))?;
        tup.end()
    }
}

struct RasterImageVisitor;

impl<'de> serde::de::Visitor<'de> for RasterImageVisitor {
    type Value = RasterImage;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a tuple containing the width, the height and the base64 encoded raster")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: serde::de::SeqAccess<'de> {
        let width: u32 = seq.next_element()?.ok_or_else(|| serde::de::Error::custom("width missing"))?;
        let height: u32 = seq.next_element()?.ok_or_else(|| serde::de::Error::custom("height missing"))?;
        let encoded: String = seq.next_element()?.ok_or_else(|| serde::de::Error::custom("raster missing"))?;
        let data = match STANDARD.decode(encoded.as_bytes()) {
            Ok(v) => v,
            Err(_) => return Err(serde::de::Error::custom("string is not a valid base64 sequence"))
        };
        let expected = ((width as usize + 7) / 8) * height as usize;
        if data.len() != expected {
            return Err(serde::de::Error::custom(format!("raster holds {} bytes, {} expected", data.len(), expected)));
        }
        Ok(RasterImage {
            width,
            height,
            data
        })
    }
}

// Manual implementation of deserialization
impl<'de> Deserialize<'de> for RasterImage {
    fn deserialize<D>(deserializer: D) -> Result<RasterImage, D::Error>
    where D: Deserializer<'de> {
        deserializer.deserialize_tuple(3, RasterImageVisitor)
    }
}
