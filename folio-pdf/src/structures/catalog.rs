use snafu::ResultExt;

use crate::{
    structures::{Context, Pages, Result, error},
    types::{Dictionary, Indirect, IndirectObject, Name},
};

/// Document catalog, the root of the object graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pages: Pages,
}

impl Catalog {
    pub fn new(pages: Pages) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn indirect(&self, context: &mut Context) -> Result<Indirect> {
        let number = context.next_number();
        let pages = self.pages.indirect(context)?;

        let dictionary = Dictionary::new()
            .with("Type", Name::from("Catalog"))
            .with("Pages", pages.reference().context(error::ShapeSnafu)?);

        Ok(Indirect::bundle(
            Indirect::Object(IndirectObject::new(number, 0, dictionary)),
            vec![pages],
        ))
    }
}
