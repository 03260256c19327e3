use std::fmt::Display;

pub mod rectangle;

pub use rectangle::Rectangle;

use crate::types::Object;

/// A PDF array object that contains an ordered collection of PDF objects.
///
/// Arrays are rendered as a space separated sequence enclosed in square
/// brackets. Like [`crate::types::Dictionary`], an array is never changed in
/// place: [`Array::with`] returns an extended copy, so one base array can be
/// shared by several owners.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Array {
    data: Vec<Object>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the array with `object` appended.
    pub fn with(&self, object: impl Into<Object>) -> Self {
        let mut data = self.data.clone();
        data.push(object.into());

        Self { data }
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl From<Vec<Object>> for Array {
    fn from(data: Vec<Object>) -> Self {
        Self { data }
    }
}

impl<T: Into<Object>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::ops::Deref for Array {
    type Target = Vec<Object>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, object) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{object}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::{Name, Numeric};

    #[test]
    fn array_is_space_joined() {
        let array = Array::from(vec![
            Object::Numeric(Numeric::Integer(0)),
            Object::Name(Name::from("PDF")),
            Object::Boolean(true),
        ]);

        assert_eq!(array.to_string(), "[0 /PDF true]");
        assert_eq!(Array::new().to_string(), "[]");
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base = Array::new().with(Name::from("PDF"));
        let text = base.with(Name::from("Text"));
        let image = base.with(Name::from("ImageB"));

        assert_eq!(base.to_string(), "[/PDF]");
        assert_eq!(text.to_string(), "[/PDF /Text]");
        assert_eq!(image.to_string(), "[/PDF /ImageB]");
    }
}
