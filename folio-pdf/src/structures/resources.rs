use snafu::ResultExt;

use crate::{
    font::Font,
    image::{ColorSpace, XObject},
    structures::{Context, Result, error},
    types::{Array, Dictionary, Indirect, IndirectObject, IndirectReference, Name},
};

/// Procedure sets in the order they are listed in `/ProcSet`.
const PROC_SETS: [&str; 5] = ["PDF", "Text", "ImageB", "ImageC", "ImageI"];

/// Something a content stream refers to by label.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Font(Font),
    Image(XObject),
}

impl Resource {
    pub fn label(&self) -> &str {
        match self {
            Resource::Font(font) => font.label(),
            Resource::Image(xobject) => xobject.label(),
        }
    }

    /// Key of the `/Resources` subdictionary the label lives in. Labels
    /// only have to be unique within a category.
    pub fn category(&self) -> &'static str {
        match self {
            Resource::Font(_) => "Font",
            Resource::Image(_) => "XObject",
        }
    }

    fn proc_sets(&self) -> &'static [&'static str] {
        match self {
            Resource::Font(_) => &["PDF", "Text"],
            Resource::Image(_) => &["PDF", "ImageB", "ImageC", "ImageI"],
        }
    }

    /// Entry of this resource in its category, e.g. `<< /F1 6 0 R >>`.
    fn fragment(&self, reference: IndirectReference) -> Indirect {
        Indirect::Fragment(Dictionary::new().with(self.label(), reference))
    }

    /// Numbers and renders the resource object. An indexed image is
    /// followed by its palette.
    pub(super) fn indirect(&self, context: &mut Context) -> Result<Indirect> {
        let number = context.next_number();

        match self {
            Resource::Font(font) => {
                tracing::trace!(number, label = font.label(), font = %font.family(), "font object");
                Ok(Indirect::Object(IndirectObject::new(
                    number,
                    0,
                    font.dictionary(),
                )))
            }
            Resource::Image(xobject) => {
                let label = xobject.label();
                let source = xobject.source();
                let raw = source
                    .raw()
                    .with_context(|_| error::ImageSnafu { label })?;

                let palette = match raw.header.color_space {
                    ColorSpace::Indexed => Some(IndirectObject::new(
                        context.next_number(),
                        0,
                        Dictionary::new().with_stream(raw.palette.clone()),
                    )),
                    _ => None,
                };

                let dictionary = source
                    .dictionary(palette.as_ref().map(IndirectObject::reference))
                    .with_context(|_| error::ImageSnafu { label })?;
                tracing::trace!(number, label, "image object");

                let image = Indirect::Object(IndirectObject::new(number, 0, dictionary));
                Ok(match palette {
                    Some(palette) => Indirect::bundle(image, vec![Indirect::Object(palette)]),
                    None => image,
                })
            }
        }
    }
}

/// The combined resources of one page.
///
/// Written as one object listing every font and image the page's contents
/// use, followed by the resource objects numbered for the first time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    resources: Vec<Resource>,
}

impl Resources {
    pub fn new(resources: impl IntoIterator<Item = Resource>) -> Self {
        let mut result: Vec<Resource> = Vec::new();
        for resource in resources {
            if !result.contains(&resource) {
                result.push(resource);
            }
        }

        Self { resources: result }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn indirect(&self, context: &mut Context) -> Result<Indirect> {
        let number = context.next_number();

        let mut fonts = Dictionary::new();
        let mut xobjects = Dictionary::new();
        let mut declared = vec!["PDF"];
        let mut children = Vec::new();

        for resource in &self.resources {
            let node = context.register(resource)?;
            let fragment = resource.fragment(node.reference().context(error::ShapeSnafu)?);
            let entry = fragment.dictionary().context(error::ShapeSnafu)?;

            match resource {
                Resource::Font(_) => fonts = fonts.merge(entry),
                Resource::Image(_) => xobjects = xobjects.merge(entry),
            }
            declared.extend_from_slice(resource.proc_sets());
            children.push(node);
        }

        let proc_set: Array = PROC_SETS
            .iter()
            .filter(|name| declared.contains(*name))
            .map(|name| Name::from(*name))
            .collect();

        let mut dictionary = Dictionary::new().with("ProcSet", proc_set);
        if !fonts.is_empty() {
            dictionary = dictionary.with("Font", fonts);
        }
        if !xobjects.is_empty() {
            dictionary = dictionary.with("XObject", xobjects);
        }

        Ok(Indirect::bundle(
            Indirect::Object(IndirectObject::new(number, 0, dictionary)),
            children,
        ))
    }
}
