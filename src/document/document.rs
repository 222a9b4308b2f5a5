use super::Section;
use crate::command::Codepage;
use serde::{Serialize, Deserialize};

/// Ordered list of sections, printed in one go
///
/// Sections can be reserved with [placeholders](Section::placeholder) and filled in later through [replace](Document::replace), without shifting the other indices.
///
/// ```rust
/// use thermal_rs::{Document, Section};
///
/// let mut document = Document::new() + Section::text("Header") + Section::placeholder();
/// document += Section::text("Footer");
/// let old = document.replace(1, Section::text("Logo goes here"));
/// assert!(old.map(|section| section.is_placeholder()).unwrap_or(false));
/// assert_eq!(3, document.len());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
    /// Codepage used to encode the text sections
    pub codepage: Codepage
}

impl Document {
    pub fn new() -> Document {
        Document {
            sections: Vec::new(),
            codepage: Codepage::Cp437
        }
    }

    pub fn with_codepage(mut self, codepage: Codepage) -> Document {
        self.codepage = codepage;
        self
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Swaps the section at `index`, returning the previous one. Out of range indices leave the document untouched.
    pub fn replace(&mut self, index: usize, section: Section) -> Option<Section> {
        self.sections.get_mut(index).map(|slot| std::mem::replace(slot, section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }
}

/// Section addition
impl std::ops::Add<Section> for Document {
    type Output = Document;
    fn add(mut self, rhs: Section) -> Self::Output {
        self.sections.push(rhs);
        self
    }
}

/// Mutable addition for documents
impl std::ops::AddAssign<Section> for Document {
    fn add_assign(&mut self, other: Section) {
        self.sections.push(other);
    }
}

/// Document concatenation, the left codepage is kept
impl std::ops::Add<Document> for Document {
    type Output = Document;
    fn add(mut self, mut rhs: Document) -> Self::Output {
        self.sections.append(&mut rhs.sections);
        self
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;
    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
