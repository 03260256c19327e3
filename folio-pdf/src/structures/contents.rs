use snafu::ResultExt;

use crate::{
    content::Content,
    structures::{Context, Resource, Result, error},
    types::Indirect,
};

/// The content streams of one page, drawn in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contents {
    contents: Vec<Content>,
}

impl Contents {
    pub fn new(contents: Vec<Content>) -> Self {
        Self { contents }
    }

    pub fn with(&self, content: impl Into<Content>) -> Self {
        let mut contents = self.contents.clone();
        contents.push(content.into());
        Self { contents }
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        self.contents.iter()
    }

    /// Resources of every content, in first use order.
    pub fn resources(&self) -> Vec<Resource> {
        self.contents.iter().flat_map(Content::resources).collect()
    }

    /// Numbers every content object in order.
    pub fn indirect(&self, context: &mut Context) -> Result<Vec<Indirect>> {
        self.contents
            .iter()
            .map(|content| {
                content
                    .indirect(context)
                    .context(error::ContentSnafu)
                    .map_err(Into::into)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        content::Text,
        font::{Base14, Font},
    };

    #[test]
    fn contents_are_numbered_in_order() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let font = Font::new("F1", Base14::Helvetica);
        let contents = Contents::default()
            .with(Text::new(font.clone(), 12.0, "first"))
            .with(Text::new(font.clone(), 12.0, "second"));

        let mut context = Context::new();
        context.next_number();

        let nodes = contents.indirect(&mut context)?;
        let references = nodes
            .iter()
            .map(|node| node.reference().map(|reference| reference.to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        assert_eq!(references, ["2 0 R", "3 0 R"]);
        assert_eq!(contents.resources(), vec![Resource::Font(font.clone()); 2]);
        Ok(())
    }
}
