use super::RasterImage;
use crate::{
    barcode::Barcode,
    command::{Codepage, Font, FontEffects, Justification, FontWidthScalar, FontHeightScalar}
};
use serde::{Serialize, Deserialize};

/// What a section prints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum SectionContent {
    /// Text, encoded with the document's codepage
    Text {
        content: String
    },
    /// Barcode, generated by the printer firmware
    Barcode {
        barcode: Barcode
    },
    /// Raster image, dithered beforehand
    Image {
        image: RasterImage
    },
    /// Reserves a slot, to be replaced by a real section later
    Placeholder
}

/// Unit of a [Document](crate::Document)
///
/// Besides its content, each section carries the display state it wants. The printer applies it before sending the content, and reverts it right after, so sections never leak state onto each other.
///
/// ```rust
/// use thermal_rs::{Section, command::{FontEffects, Justification, Codepage}};
///
/// let section = Section::text("Total")
///     .with_effects(FontEffects::BOLD)
///     .with_justification(Justification::Right)
///     .with_auto_newline(true);
/// assert_eq!(b"Total".to_vec(), section.content_buffer(Codepage::Cp437));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    pub content: SectionContent,
    pub effects: FontEffects,
    pub justification: Justification,
    pub width: FontWidthScalar,
    pub height: FontHeightScalar,
    pub font: Font,
    /// Sends a newline once the content is out
    pub auto_newline: bool
}

impl Section {
    fn with_content(content: SectionContent) -> Section {
        Section {
            content,
            effects: FontEffects::empty(),
            justification: Justification::NoOp,
            width: FontWidthScalar::W1,
            height: FontHeightScalar::H1,
            font: Font::NoOp,
            auto_newline: false
        }
    }

    pub fn text<A: Into<String>>(content: A) -> Section {
        Section::with_content(SectionContent::Text{content: content.into()})
    }

    /// Barcodes are centered by default
    pub fn barcode<B: Into<Barcode>>(barcode: B) -> Section {
        Section::with_content(SectionContent::Barcode{barcode: barcode.into()})
            .with_justification(Justification::Center)
    }

    pub fn image(image: RasterImage) -> Section {
        Section::with_content(SectionContent::Image{image})
    }

    /// Empty section, with no effects and no-op justification and font
    pub fn placeholder() -> Section {
        Section::with_content(SectionContent::Placeholder)
    }

    pub fn with_effects(mut self, effects: FontEffects) -> Section {
        self.effects = effects;
        self
    }

    pub fn with_justification(mut self, justification: Justification) -> Section {
        self.justification = justification;
        self
    }

    pub fn with_scalars(mut self, width: FontWidthScalar, height: FontHeightScalar) -> Section {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font(mut self, font: Font) -> Section {
        self.font = font;
        self
    }

    pub fn with_auto_newline(mut self, auto_newline: bool) -> Section {
        self.auto_newline = auto_newline;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        match self.content {
            SectionContent::Placeholder => true,
            _ => false
        }
    }

    /// Bytes of the content, to be sent verbatim
    ///
    /// Barcodes with invalid input produce an empty buffer, and so does a placeholder.
    pub fn content_buffer(&self, codepage: Codepage) -> Vec<u8> {
        match &self.content {
            SectionContent::Text{content} => codepage.encode(content),
            SectionContent::Barcode{barcode} => barcode.build(),
            SectionContent::Image{image} => image.command(),
            SectionContent::Placeholder => Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::Itf;

    #[test]
    fn placeholder_is_inert() {
        let placeholder = Section::placeholder();
        assert!(placeholder.is_placeholder());
        assert!(placeholder.effects.is_empty());
        assert_eq!(Justification::NoOp, placeholder.justification);
        assert_eq!(Font::NoOp, placeholder.font);
        assert!(!placeholder.auto_newline);
        assert!(placeholder.content_buffer(Codepage::Cp437).is_empty());
    }

    #[test]
    fn invalid_barcode_is_empty() {
        let section = Section::barcode(Itf::new("123"));
        assert_eq!(Justification::Center, section.justification);
        assert!(section.content_buffer(Codepage::Ascii).is_empty());
    }

    #[test]
    fn text_uses_codepage() {
        let section = Section::text("é");
        assert_eq!(vec![0x82], section.content_buffer(Codepage::Cp437));
        assert_eq!(vec![b'?'], section.content_buffer(Codepage::Ascii));
    }
}
