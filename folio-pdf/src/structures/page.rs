use snafu::ResultExt;

use crate::{
    content::Content,
    structures::{Contents, Context, Resources, Result, error},
    types::{Array, Dictionary, Indirect, IndirectObject, IndirectReference, Name},
};

/// A single page and the contents drawn on it.
///
/// Its size comes from the `/MediaBox` of the enclosing page tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    contents: Contents,
}

impl Page {
    pub fn new(contents: Contents) -> Self {
        Self { contents }
    }

    pub fn with(&self, content: impl Into<Content>) -> Self {
        Self {
            contents: self.contents.with(content),
        }
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn rotated(self, rotation: Rotation) -> PageNode {
        PageNode::from(self).rotated(rotation)
    }

    /// Numbers the page, then its resources, then its contents.
    ///
    /// `entries` are merged into the page dictionary last.
    fn indirect(
        &self,
        context: &mut Context,
        parent: IndirectReference,
        entries: &Dictionary,
    ) -> Result<Indirect> {
        let number = context.next_number();

        let resources = Resources::new(self.contents.resources()).indirect(context)?;
        let contents = self.contents.indirect(context)?;

        let references = contents
            .iter()
            .map(Indirect::reference)
            .collect::<std::result::Result<Vec<_>, _>>()
            .context(error::ShapeSnafu)?;

        let dictionary = Dictionary::new()
            .with("Type", Name::from("Page"))
            .with(
                "Resources",
                resources.reference().context(error::ShapeSnafu)?,
            )
            .with("Contents", references.into_iter().collect::<Array>())
            .with("Parent", parent)
            .merge(entries);
        tracing::trace!(number, contents = contents.len(), "page object");

        let mut children = vec![resources];
        children.extend(contents);

        Ok(Indirect::bundle(
            Indirect::Object(IndirectObject::new(number, 0, dictionary)),
            children,
        ))
    }
}

/// Clockwise page rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Quarter,
    Half,
    ThreeQuarters,
}

impl Rotation {
    pub fn degrees(&self) -> i64 {
        match self {
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarters => 270,
        }
    }
}

impl TryFrom<i64> for Rotation {
    type Error = crate::structures::Error;

    fn try_from(degrees: i64) -> Result<Self> {
        match degrees {
            90 => Ok(Rotation::Quarter),
            180 => Ok(Rotation::Half),
            270 => Ok(Rotation::ThreeQuarters),
            _ => Err(error::Error::InvalidRotation { degrees }.into()),
        }
    }
}

/// A page that is shown rotated; its contents are untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotated {
    inner: Box<PageNode>,
    rotation: Rotation,
}

impl Rotated {
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

/// An entry of the page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PageNode {
    Page(Page),
    Rotated(Rotated),
}

impl PageNode {
    pub fn rotated(self, rotation: Rotation) -> Self {
        PageNode::Rotated(Rotated {
            inner: Box::new(self),
            rotation,
        })
    }

    pub(super) fn indirect(
        &self,
        context: &mut Context,
        parent: IndirectReference,
    ) -> Result<Indirect> {
        self.indirect_with(context, parent, &Dictionary::new())
    }

    fn indirect_with(
        &self,
        context: &mut Context,
        parent: IndirectReference,
        entries: &Dictionary,
    ) -> Result<Indirect> {
        match self {
            PageNode::Page(page) => page.indirect(context, parent, entries),
            PageNode::Rotated(rotated) => {
                let entries = Dictionary::new()
                    .with("Rotate", rotated.rotation.degrees())
                    .merge(entries);
                rotated.inner.indirect_with(context, parent, &entries)
            }
        }
    }
}

impl From<Page> for PageNode {
    fn from(value: Page) -> Self {
        PageNode::Page(value)
    }
}
