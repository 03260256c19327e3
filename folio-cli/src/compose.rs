use std::path::{Path, PathBuf};

use folio_pdf::{
    Content, Document, Font, Information, Page, PageFormat, PageNode, Pages, Rotation,
    content::{Image, Text},
    image::{ImageSource, XObject},
    text::multiline,
};
use snafu::{OptionExt, ResultExt, ensure};

use crate::{
    cli::{ImageArgs, PageArgs, TextArgs},
    error::{self, Result},
};

const LEADING: f64 = 1.2;

/// Lays the text out over as many pages as its wrapped lines need.
pub fn text(args: &TextArgs, source: &str) -> Result<Document> {
    let format = PageFormat::from(args.page.format);
    let font = Font::new("F1", args.font);
    let margins = args.margins;

    let (_, top) = margins.origin(&format);
    let room = top - margins.bottom * folio_pdf::format::POINTS_PER_CM;
    let per_page = (room / (args.size * LEADING)).floor();
    ensure!(per_page >= 1.0, error::NoRoom);

    let lines = multiline(source, args.width);
    let pages = lines.chunks(per_page as usize).map(|chunk| {
        let mut content =
            Content::from(Text::new(font.clone(), args.size, chunk.join("\n")));
        if args.justify {
            content = content.justified(format, margins);
        }
        content = content.margined(format, margins);

        Page::default().with(content)
    });

    tracing::debug!(lines = lines.len(), per_page, "laid out text");

    finish(&args.page, format, pages)
}

/// Places the image in the top left corner inside the margins, scaled
/// down to fit the page when needed.
pub fn image(args: &ImageArgs, bytes: Vec<u8>) -> Result<Document> {
    let format = PageFormat::from(args.page.format);
    let path = &args.file;

    let source = ImageSource::from_bytes(bytes).context(error::Image { path })?;
    let xobject = XObject::new("I1", source);
    let header = xobject.header().context(error::Image { path })?;
    let (width, height) = (f64::from(header.width), f64::from(header.height));

    let (left, top) = args.margins.origin(&format);
    let room_x = args.margins.usable_width(&format);
    let room_y = top - args.margins.bottom * folio_pdf::format::POINTS_PER_CM;
    ensure!(room_x > 0.0 && room_y > 0.0, error::NoRoom);

    let scale = (room_x / width).min(room_y / height).min(1.0);
    let image = Image::new(xobject)
        .scaled(width * scale, height * scale)
        .at(left, top - height * scale);

    finish(&args.page, format, [Page::default().with(image)])
}

fn finish(
    args: &PageArgs,
    format: PageFormat,
    pages: impl IntoIterator<Item = Page>,
) -> Result<Document> {
    let rotation = args
        .rotate
        .map(Rotation::try_from)
        .transpose()
        .context(error::Rotation)?;

    let mut tree = Pages::new(format);
    for page in pages {
        let page = if args.compress { compressed(&page) } else { page };
        let node = match rotation {
            Some(rotation) => page.rotated(rotation),
            None => PageNode::from(page),
        };
        tree = tree.with(node);
    }

    let mut information = Information::default().creator("folio");
    if let Some(title) = &args.title {
        information = information.title(title);
    }
    if let Some(author) = &args.author {
        information = information.author(author);
    }

    Ok(Document::new(tree).with_information(information))
}

fn compressed(page: &Page) -> Page {
    page.contents()
        .iter()
        .fold(Page::default(), |result, content| {
            result.with(content.clone().compressed())
        })
}

/// `<input stem>.pdf` in the working directory.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().context(error::OutputName { path: input })?;
    Ok(PathBuf::from(stem).with_extension("pdf"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    use crate::cli::{Cli, Command};

    fn text_args(arguments: &[&str]) -> TextArgs {
        let cli = Cli::try_parse_from(["folio", "text", "input.txt"].iter().chain(arguments));
        match cli.map(|cli| cli.command) {
            Ok(Command::Text(args)) => args,
            _ => panic!("invalid test arguments {arguments:?}"),
        }
    }

    #[test]
    fn test_pagination() -> std::result::Result<(), Box<crate::error::Error>> {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            arguments: &'static [&'static str],
            words: usize,
            expected_pages: usize,
        }

        let test_cases = [
            TestCase {
                name: "empty input still makes a page",
                arguments: &[],
                words: 0,
                expected_pages: 1,
            },
            TestCase {
                name: "one word per line",
                arguments: &["--width", "4", "--size", "10", "--margins", "0"],
                words: 71,
                expected_pages: 2,
            },
            TestCase {
                name: "exactly one page",
                arguments: &["--width", "4", "--size", "10", "--margins", "0"],
                words: 70,
                expected_pages: 1,
            },
        ];

        for case in &test_cases {
            let args = text_args(case.arguments);
            let source = vec!["word"; case.words].join(" ");

            let document = text(&args, &source)?;
            assert_eq!(
                document.pages().len(),
                case.expected_pages,
                "Test '{}' failed",
                case.name
            );
        }
        Ok(())
    }

    #[test]
    fn margins_too_large() {
        let args = text_args(&["--margins", "15,0,15,0"]);
        assert!(text(&args, "hello").is_err());
    }

    #[test]
    fn invalid_rotation() {
        let args = text_args(&["--rotate", "45"]);
        assert!(text(&args, "hello").is_err());
    }

    #[test]
    fn test_output_path() -> std::result::Result<(), Box<crate::error::Error>> {
        assert_eq!(
            output_path(Path::new("notes/letter.txt"))?,
            PathBuf::from("letter.pdf")
        );
        assert_eq!(output_path(Path::new("scan.jpeg"))?, PathBuf::from("scan.pdf"));
        assert!(output_path(Path::new("..")).is_err());
        Ok(())
    }
}
