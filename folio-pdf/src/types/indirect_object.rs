use std::fmt::Display;

use snafu::Snafu;

use crate::types::Dictionary;

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Represents a PDF indirect object reference.
///
/// PDF references consist of:
/// - An object ID (positive integer)
/// - A generation number (always 0 for freshly written documents)
/// - The `R` keyword
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Default, Copy)]
pub struct IndirectReference {
    pub id: u32,
    pub gen_id: u16,
}

impl IndirectReference {
    pub fn new(id: u32, gen_id: u16) -> Self {
        Self { id, gen_id }
    }
}

impl Display for IndirectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen_id)
    }
}

/// Represents a PDF indirect object: a numbered body entry.
///
/// PDF indirect objects consist of:
/// - An object ID (positive integer)
/// - A generation number (non-negative integer)
/// - The `obj` keyword
/// - A dictionary, optionally followed by its stream
/// - The `endobj` keyword
///
/// Two indirect objects are equal when their numbers are: a number is
/// never issued twice within one document.
#[derive(Debug, Clone)]
pub struct IndirectObject {
    pub id: u32,
    pub gen_id: u16,
    dictionary: Dictionary,
}

impl IndirectObject {
    pub fn new(id: u32, gen_id: u16, dictionary: Dictionary) -> Self {
        Self {
            id,
            gen_id,
            dictionary,
        }
    }

    pub fn reference(&self) -> IndirectReference {
        IndirectReference::new(self.id, self.gen_id)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let mut result = format!("{} {} obj\n", self.id, self.gen_id).into_bytes();
        result.extend(self.dictionary.as_bytes());
        result.extend_from_slice(b"\nendobj\n");
        result
    }
}

impl PartialEq for IndirectObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IndirectObject {}

/// The shapes a composed node can take once it has been numbered.
///
/// Not every shape can answer every question: asking a [`Indirect::Fragment`]
/// for its reference, or a [`Indirect::Reference`] for its dictionary, is a
/// programming error reported as [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub enum Indirect {
    /// A numbered object written to the body.
    Object(IndirectObject),
    /// A dictionary that was never numbered, such as a resource entry about
    /// to be merged into a page's combined resources.
    Fragment(Dictionary),
    /// A number whose object is written elsewhere, such as a resource
    /// already emitted for an earlier page.
    Reference(IndirectReference),
    /// A parent followed by the full bytes of the subtrees it owns.
    Bundle {
        head: Box<Indirect>,
        children: Vec<Indirect>,
    },
}

impl Indirect {
    pub fn bundle(head: Indirect, children: Vec<Indirect>) -> Self {
        Indirect::Bundle {
            head: Box::new(head),
            children,
        }
    }

    pub fn reference(&self) -> Result<IndirectReference> {
        match self {
            Indirect::Object(object) => Ok(object.reference()),
            Indirect::Reference(reference) => Ok(*reference),
            Indirect::Bundle { head, .. } => head.reference(),
            Indirect::Fragment(dictionary) => Err(error::Error::MissingReference {
                dictionary: dictionary.clone(),
            }
            .into()),
        }
    }

    pub fn dictionary(&self) -> Result<&Dictionary> {
        match self {
            Indirect::Object(object) => Ok(object.dictionary()),
            Indirect::Fragment(dictionary) => Ok(dictionary),
            Indirect::Bundle { head, .. } => head.dictionary(),
            Indirect::Reference(reference) => {
                Err(error::Error::MissingDictionary {
                    reference: *reference,
                }
                .into())
            }
        }
    }

    /// Bytes this node contributes to the document body.
    ///
    /// Fragments and bare references contribute nothing.
    pub fn as_bytes(&self) -> Vec<u8> {
        match self {
            Indirect::Object(object) => object.as_bytes(),
            Indirect::Fragment(_) | Indirect::Reference(_) => Vec::new(),
            Indirect::Bundle { head, children } => {
                let mut result = head.as_bytes();
                for child in children {
                    result.extend(child.as_bytes());
                }
                result
            }
        }
    }

    /// Number of indirect objects this node writes to the body.
    pub fn count(&self) -> usize {
        match self {
            Indirect::Object(_) => 1,
            Indirect::Fragment(_) | Indirect::Reference(_) => 0,
            Indirect::Bundle { head, children } => {
                head.count() + children.iter().map(Indirect::count).sum::<usize>()
            }
        }
    }
}

mod error {
    use snafu::Snafu;

    use crate::types::{Dictionary, IndirectReference};

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)))]
    pub(super) enum Error {
        #[snafu(display("Dictionary {dictionary} was never numbered and has no reference"))]
        MissingReference { dictionary: Dictionary },

        #[snafu(display("Object {reference} is emitted elsewhere and has no dictionary here"))]
        MissingDictionary { reference: IndirectReference },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::Name;

    #[test]
    fn indirect_object_rendering() {
        let object = IndirectObject::new(
            2,
            0,
            Dictionary::new().with("Type", Name::from("Catalog")),
        );

        assert_eq!(
            object.as_bytes(),
            b"2 0 obj\n<< /Type /Catalog >>\nendobj\n".to_vec()
        );
        assert_eq!(object.reference().to_string(), "2 0 R");
    }

    #[test]
    fn indirect_object_with_stream() {
        let object = IndirectObject::new(7, 0, Dictionary::new().with_stream(b"q Q".to_vec()));

        assert_eq!(
            object.as_bytes(),
            b"7 0 obj\n<< /Length 3 >>\nstream\nq Q\nendstream\nendobj\n".to_vec()
        );
    }

    #[test]
    fn equality_is_by_number() {
        let font = IndirectObject::new(6, 0, Dictionary::new().with("Type", Name::from("Font")));
        let other = IndirectObject::new(6, 0, Dictionary::new());

        assert_eq!(font, other);
        assert_ne!(font, IndirectObject::new(7, 0, Dictionary::new()));
    }

    #[test]
    fn shapes_without_reference_or_dictionary_fail() {
        let fragment = Indirect::Fragment(Dictionary::new().with("Font", Dictionary::new()));
        let reference = Indirect::Reference(IndirectReference::new(6, 0));

        assert!(fragment.reference().is_err());
        assert!(fragment.dictionary().is_ok());
        assert!(reference.dictionary().is_err());
        assert_eq!(reference.reference().ok(), Some(IndirectReference::new(6, 0)));
        assert!(fragment.as_bytes().is_empty());
        assert!(reference.as_bytes().is_empty());
    }

    #[test]
    fn bundle_concatenates_in_order() -> std::result::Result<(), Error> {
        let bundle = Indirect::bundle(
            Indirect::Object(IndirectObject::new(3, 0, Dictionary::new())),
            vec![
                Indirect::Object(IndirectObject::new(4, 0, Dictionary::new())),
                Indirect::Reference(IndirectReference::new(1, 0)),
                Indirect::Object(IndirectObject::new(5, 0, Dictionary::new())),
            ],
        );

        assert_eq!(bundle.reference()?, IndirectReference::new(3, 0));
        assert_eq!(bundle.count(), 3);
        assert_eq!(
            bundle.as_bytes(),
            b"3 0 obj\n<< >>\nendobj\n4 0 obj\n<< >>\nendobj\n5 0 obj\n<< >>\nendobj\n".to_vec()
        );
        Ok(())
    }
}
