pub use self::document::Document;
pub use self::section::{Section, SectionContent};
pub use self::raster_image::RasterImage;

mod document;
mod section;
mod raster_image;
