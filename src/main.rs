use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use workshop_site::config::{self, SiteConfig};
use workshop_site::convert::PulldownConverter;
use workshop_site::source::DirSource;
use workshop_site::{check, generate, output};

#[derive(Parser)]
#[command(name = "workshop-site")]
#[command(about = "Static site generator for sequential markdown workshops")]
#[command(long_about = "\
Static site generator for sequential markdown workshops

An ordered list of exercise documents becomes a website: one page per
exercise with previous/next navigation, a landing page, and a stylesheet.

Source structure:

  exercises/
  ├── site.toml                    # Document list and site settings (optional)
  ├── intro.md                     # Landing page intro (optional, set in site.toml)
  ├── 00-introduction-setup.md     # Exercise 0
  ├── 01-compile-go-unchanged.md   # Exercise 1
  └── ...

Output:

  website/
  ├── index.html
  ├── style.css
  ├── 00-introduction-setup.html
  └── ...

Links between exercises (03-x.md, ../exercises/03-x.md) become links between
pages; ../README.md becomes the landing page.

Run 'workshop-site gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the markdown exercises
    #[arg(long, default_value = "exercises", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "website", global = true)]
    output: PathBuf,

    /// Config file (defaults to site.toml in the source directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the website
    Build,
    /// Read and convert every exercise and report problems, without writing
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            let site = load_config(&cli.source, cli.config.as_deref())?;
            let report = generate::generate(
                &site,
                &DirSource::new(&cli.source),
                &PulldownConverter::new(),
                &cli.output,
            )?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let site = load_config(&cli.source, cli.config.as_deref())?;
            let report = check::check(&site, &DirSource::new(&cli.source), &PulldownConverter::new())?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }
    Ok(())
}

fn load_config(source: &Path, config_path: Option<&Path>) -> Result<SiteConfig, config::ConfigError> {
    let site = config::load_config(source, config_path)?;
    tracing::debug!("Loaded {} documents from config", site.documents.len());
    Ok(site)
}
