//! kirjo - render CMS rich text to XHTML

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info};

use kirjo::export::to_xhtml_document;
use kirjo::{RenderOptions, RichText, render_rich_text};

#[derive(Parser)]
#[command(name = "kirjo")]
#[command(version, about = "Render CMS rich-text documents to XHTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    kirjo post.json                     Print the post body as XHTML
    kirjo post.json -o post.html        Write the body to a file
    kirjo -t excerpt.json               Print plain text
    kirjo --title Pennut page.json      Wrap the body in a full XHTML page
    BASE_URL=https://example.com kirjo page.json")]
struct Cli {
    /// Rich-text JSON (GraphQL field with links, or a bare document); '-' reads stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to standard output)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Site base URL; links under it open in the same tab
    #[arg(long, env = "BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Drop nodes nested deeper than this
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Emit plain text instead of XHTML
    #[arg(short, long, conflicts_with = "title")]
    text: bool,

    /// Wrap the output in a complete XHTML document with this title
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet href for the complete document
    #[arg(long, requires = "title", value_name = "HREF")]
    stylesheet: Option<String>,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> kirjo::Result<()> {
    let output = render_input(cli)?;

    match &cli.output {
        Some(path) => std::fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

/// Load the input and render it in the requested output form.
fn render_input(cli: &Cli) -> kirjo::Result<String> {
    let rich_text = if cli.input == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        RichText::from_bytes(&bytes)?
    } else {
        RichText::open(&cli.input)?
    };

    let mut options = RenderOptions::new();
    if let Some(base_url) = &cli.base_url {
        options = options.with_base_url(base_url.as_str());
    }
    if let Some(max_depth) = cli.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let rendered = render_rich_text(&rich_text, &options);
    info!(
        input = %cli.input,
        assets = rich_text.links.assets().count(),
        "rendered document"
    );

    Ok(if cli.text {
        rendered.to_text()
    } else if let Some(title) = &cli.title {
        to_xhtml_document(&rendered.fragments, title, cli.stylesheet.as_deref())
    } else {
        rendered.to_xhtml()
    })
}
