use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use post_markup::{render_post, Config, RichText};

#[derive(Parser, Debug)]
#[command(
    name = "post-markup",
    version,
    about = "Render forum post markup into a styled element tree"
)]
struct Cli {
    /// Post to render: a rich text JSON document, or raw markup with --plain
    input: PathBuf,

    /// Read the input as raw markup without style runs
    #[arg(long)]
    plain: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let source = if cli.plain {
        RichText::plain(content)
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to decode rich text from {}", cli.input.display()))?
    };

    let rendered = render_post(&source, &config);
    log::info!(
        "Rendered {} elements with {} diagnostics",
        rendered.elements.len(),
        rendered.diagnostics.len()
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&rendered)?
    } else {
        serde_json::to_string(&rendered)?
    };
    println!("{}", json);

    Ok(())
}
