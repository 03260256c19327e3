mod cli;
mod compose;
mod error;

use snafu::ResultExt;
use tracing::Level;

use crate::cli::Command;

fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), Box<error::Error>> {
    let cli = cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level(cli.verbose))
        .init();

    let (input, page) = match &cli.command {
        Command::Text(args) => (&args.file, &args.page),
        Command::Image(args) => (&args.file, &args.page),
    };
    let output = match &page.output {
        Some(output) => output.clone(),
        None => compose::output_path(input)?,
    };

    let document = match &cli.command {
        Command::Text(args) => {
            let source =
                std::fs::read_to_string(input).context(error::Read { path: input })?;
            compose::text(args, &source)?
        }
        Command::Image(args) => {
            let bytes = std::fs::read(input).context(error::Read { path: input })?;
            compose::image(args, bytes)?
        }
    };

    let bytes = document.as_bytes().context(error::Pdf)?;
    std::fs::write(&output, bytes).context(error::Write { path: &output })?;

    tracing::info!(output = %output.display(), pages = document.pages().len(), "wrote document");

    Ok(())
}
