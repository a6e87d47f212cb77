//! Command-line arguments and the command they drive

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel_core::{BASE_URL, CarouselScraper, Extraction, ExtractorConfig, to_json_string};
use clap::Parser;
use tracing::info;

/// Saved page read when no input is given
pub const DEFAULT_INPUT: &str = "files/van-gogh-paintings.html";

/// JSON file written when no output is given
pub const DEFAULT_OUTPUT: &str = "extracted_paintings.json";

#[derive(Debug, Parser)]
#[command(
    name = "carousel-scraper",
    version,
    about = "Extract carousel entries from a saved search results page into JSON"
)]
pub struct Cli {
    /// Saved HTML page to read
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Origin prepended to every item link
    #[arg(long, default_value = BASE_URL)]
    pub origin: String,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn config(&self) -> ExtractorConfig {
        ExtractorConfig::default().with_origin(self.origin.clone())
    }
}

/// Run the pipeline described by `cli`
///
/// JSON goes to `out` when `--stdout` is set, otherwise to the output file.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Extraction> {
    let scraper = CarouselScraper::with_config(cli.config())?;

    let extraction = if cli.stdout {
        let extraction = scraper.scrape_file(&cli.input)?;
        let json = to_json_string(&extraction.records)?;
        writeln!(out, "{}", json).context("failed to write JSON to stdout")?;
        extraction
    } else {
        scraper.run(&cli.input, &cli.output)?
    };

    if !extraction.skipped.is_empty() {
        info!(
            "Skipped {} of {} carousel items",
            extraction.skipped.len(),
            extraction.skipped.len() + extraction.len()
        );
    }

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::{CarouselError, Record};
    use std::fs;

    const PAGE: &str = r#"<g-scrolling-carousel>
        <a class="klitem" href="/search?q=irises">
            <div class="klic"><img class="rISBZc" data-src="irises.jpg"></div>
            <div class="kltat">Irises</div>
            <div class="klmeta">1889</div>
        </a>
        <a class="klitem"><div class="kltat">Orphan</div></a>
    </g-scrolling-carousel>"#;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["carousel-scraper"]);
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.origin, "https://www.google.com");
        assert!(!cli.stdout);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "carousel-scraper",
            "page.html",
            "-o",
            "out.json",
            "--origin",
            "https://www.google.de",
            "--stdout",
            "-v",
        ]);
        assert_eq!(cli.input, PathBuf::from("page.html"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.config().origin, "https://www.google.de");
        assert!(cli.stdout);
        assert!(cli.verbose);
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("out.json");
        fs::write(&input, PAGE).unwrap();

        let cli = Cli::parse_from([
            "carousel-scraper",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let mut stdout: Vec<u8> = Vec::new();
        let extraction = run(&cli, &mut stdout).unwrap();

        assert_eq!(extraction.len(), 1);
        assert_eq!(extraction.skipped.len(), 1);
        assert!(stdout.is_empty());

        let written: Vec<Record> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0].link, "https://www.google.com/search?q=irises");
    }

    #[test]
    fn test_run_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("out.json");
        fs::write(&input, PAGE).unwrap();

        let cli = Cli::parse_from([
            "carousel-scraper",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--stdout",
        ]);
        let mut stdout: Vec<u8> = Vec::new();
        run(&cli, &mut stdout).unwrap();

        assert!(!output.exists());
        let printed: Vec<Record> = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].thumbnail.as_deref(), Some("irises.jpg"));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent_file.html");

        let cli = Cli::parse_from(["carousel-scraper", missing.to_str().unwrap()]);
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();

        match err.downcast_ref::<CarouselError>() {
            Some(CarouselError::FileNotFound { path, .. }) => assert_eq!(path, &missing),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }
}
