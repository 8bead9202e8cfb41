use chrono::Datelike;
use clap::{Parser, Subcommand};
use guide_bundle::assets::{self, CollisionPolicy};
use guide_bundle::{config, generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guide-bundle")]
#[command(about = "Bundle an exported style guide into a single HTML page")]
#[command(long_about = "\
Bundle an exported style guide into a single HTML page

Reads the pages a documentation site exported as HTML, keeps only each
page's article body, and concatenates them into one document grouped by
section. Images from the per-page _files folders are copied into one flat
directory next to the output.

Source structure:

  t-bank/
  ├── Полезно.html          # Page; its filename picks the section
  ├── Полезно_files/        # Images referenced by the page
  │   └── hero.png
  ├── Тире.html
  └── Тире_files/

Pages whose filename matches no keyword, or which have no article body,
are skipped with a warning. Set RUST_LOG=debug for per-file detail.

Run 'guide-bundle gen-config' to print the stock keyword table and texts.")]
#[command(version)]
struct Cli {
    /// Directory of exported pages
    #[arg(long, default_value = "t-bank", global = true)]
    source: PathBuf,

    /// Output HTML file
    #[arg(long, default_value = "t-bank-copywriting.html", global = true)]
    output: PathBuf,

    /// TOML file overriding the stock configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Copy assets, extract pages and write the bundled document (default)
    Build,
    /// Classify and extract pages, print the layout, write nothing
    Check,
    /// Print the stock configuration as TOML
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(cli.config.as_deref())?;
            let table = config.classification_table();
            // Rewritten image sources are relative to the output file
            let assets_dir = sibling_of(&cli.output, &config.assets_dir_name);

            println!("==> Copying assets from {}", cli.source.display());
            let report = assets::copy_assets(
                &cli.source,
                &assets_dir,
                CollisionPolicy::FirstWriterWins,
            )?;
            output::print_asset_output(&report, &assets_dir);

            println!("==> Extracting pages");
            let manifest = scan::scan(&cli.source, &table, &config.assets_dir_name)?;
            output::print_scan_output(&manifest, &config.sections);

            println!("==> Writing {}", cli.output.display());
            let year = chrono::Local::now().year();
            let sections = generate::generate(&manifest.articles, &config, year, &cli.output)?;
            output::print_generate_output(&sections, &cli.output);
        }
        Command::Check => {
            let config = config::load_config(cli.config.as_deref())?;
            let table = config.classification_table();
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source, &table, &config.assets_dir_name)?;
            output::print_scan_output(&manifest, &config.sections);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml()?);
        }
    }

    Ok(())
}

/// Path of a directory named `name` next to `file`.
fn sibling_of(file: &std::path::Path, name: &str) -> PathBuf {
    match file.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
