use std::fmt::Display;

use smol_str::SmolStr;

/// A PDF name object, rendered with its leading solidus: `/Type`.
///
/// The stored text never includes the solidus itself.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Name {
    data: SmolStr,
}

impl<T: std::convert::Into<SmolStr>> From<T> for Name {
    fn from(value: T) -> Self {
        Self { data: value.into() }
    }
}

impl std::ops::Deref for Name {
    type Target = SmolStr;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.data)
    }
}
