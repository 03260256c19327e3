use snafu::ResultExt;

use crate::{
    format::PageFormat,
    structures::{Context, PageNode, Result, error},
    types::{Array, Dictionary, Indirect, IndirectObject, IndirectReference, Name},
};

/// The page tree root: every page of the document in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pages {
    format: PageFormat,
    kids: Vec<PageNode>,
}

impl Pages {
    pub fn new(format: PageFormat) -> Self {
        Self {
            format,
            kids: Vec::new(),
        }
    }

    pub fn with(&self, page: impl Into<PageNode>) -> Self {
        let mut kids = self.kids.clone();
        kids.push(page.into());
        Self {
            format: self.format,
            kids,
        }
    }

    pub fn format(&self) -> PageFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.kids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kids.is_empty()
    }

    /// Takes its number before any page so pages can point back at it.
    pub fn indirect(&self, context: &mut Context) -> Result<Indirect> {
        let number = context.next_number();
        let parent = IndirectReference::new(number, 0);

        let kids = self
            .kids
            .iter()
            .map(|kid| kid.indirect(context, parent))
            .collect::<Result<Vec<_>>>()?;

        let references = kids
            .iter()
            .map(Indirect::reference)
            .collect::<std::result::Result<Vec<_>, _>>()
            .context(error::ShapeSnafu)?;

        let dictionary = Dictionary::new()
            .with("Type", Name::from("Pages"))
            .with("Kids", references.into_iter().collect::<Array>())
            .with("Count", kids.len())
            .with("MediaBox", Array::from(self.format.media_box()));
        tracing::trace!(number, count = kids.len(), "page tree");

        Ok(Indirect::bundle(
            Indirect::Object(IndirectObject::new(number, 0, dictionary)),
            kids,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::structures::Page;

    #[test]
    fn test_pages_dictionary() -> std::result::Result<(), Box<dyn std::error::Error>> {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            pages: Pages,
            expected: &'static str,
        }

        let test_cases = [
            TestCase {
                name: "no pages",
                pages: Pages::new(PageFormat::A4),
                expected: "<< /Type /Pages /Kids [] /Count 0 /MediaBox [0 0 595 842] >>",
            },
            TestCase {
                name: "two empty letter pages",
                pages: Pages::new(PageFormat::LETTER)
                    .with(Page::default())
                    .with(Page::default()),
                expected: "<< /Type /Pages /Kids [2 0 R 4 0 R] /Count 2 /MediaBox [0 0 612 792] >>",
            },
            TestCase {
                name: "landscape",
                pages: Pages::new(PageFormat::A4.landscape()).with(Page::default()),
                expected: "<< /Type /Pages /Kids [2 0 R] /Count 1 /MediaBox [0 0 842 595] >>",
            },
        ];

        for case in &test_cases {
            let mut context = Context::new();
            let node = case.pages.indirect(&mut context)?;

            assert_eq!(
                node.dictionary()?.to_string(),
                case.expected,
                "Test '{}' failed",
                case.name
            );
        }
        Ok(())
    }

    #[test]
    fn pages_point_back_at_tree() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let pages = Pages::default().with(Page::default());
        let mut context = Context::new();
        context.next_number();

        let bytes = pages.indirect(&mut context)?.as_bytes();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.starts_with("2 0 obj\n<< /Type /Pages /Kids [3 0 R]"));
        assert!(text.contains("3 0 obj\n<< /Type /Page /Resources 4 0 R /Contents [] /Parent 2 0 R >>"));
        Ok(())
    }
}
