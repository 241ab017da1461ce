use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;

use preach::config::{DEFAULT_CSS_DIR, DEFAULT_DOCS_DIR};
use preach::{generate, logging, GenerateReport, GeneratorConfig};
use preach_render::DEFAULT_PREFIX;

/// Generate CSS custom properties and a demo page from a color palette.
#[derive(Debug, Parser)]
#[command(name = "preach", version, about)]
struct Cli {
    /// YAML palette file (defaults to the builtin preach palette)
    #[arg(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Directory for preach.css and preach.min.css
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CSS_DIR)]
    css_dir: PathBuf,

    /// Directory for the demo page, its stylesheet and preach.js
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DOCS_DIR)]
    docs_dir: PathBuf,

    /// Prefix for every CSS variable
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Skip index.html and main.js
    #[arg(long)]
    no_demo: bool,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new()
            .css_dir(&self.css_dir)
            .docs_dir(&self.docs_dir)
            .prefix(&self.prefix)
            .demo(!self.no_demo);
        match &self.palette {
            Some(path) => config.palette_file(path),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<GenerateReport> {
    let config = cli.config();
    generate(&config).with_context(|| match &config.palette {
        preach::PaletteSource::Builtin => "generating from the builtin palette".to_string(),
        preach::PaletteSource::File(path) => format!("generating from {}", path.display()),
    })
}

fn print_summary(report: &GenerateReport) {
    println!(
        "{} {} variables, {} files",
        style("✓").green().bold(),
        report.variables,
        report.written.len()
    );
    for path in &report.written {
        println!("  {}", style(path.display()).dim());
    }

    let warnings = report.issues.len() + report.duplicates.len() + report.missing_dark.len();
    if warnings > 0 {
        println!(
            "{} {} warning{}, see log output",
            style("!").yellow().bold(),
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }
}
