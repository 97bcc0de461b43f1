use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::{Config, is_valid_base_path};
use markdown_sitegen_engine::{SiteOptions, build_site, extract_title, io, markdown_to_html};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(version, about = "Build a static site from a directory of markdown files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and generate every page into the output directory
    Build(BuildArgs),
    /// Print the HTML body of one markdown file
    Render {
        /// Markdown file to convert
        file: PathBuf,
    },
    /// Print the title (first `# ` heading) of one markdown file
    Title {
        /// Markdown file to read
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct BuildArgs {
    /// Config file (defaults to ./sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown sources
    #[arg(long = "content")]
    content_dir: Option<PathBuf>,

    /// Directory of assets copied verbatim
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Page template with {{ Title }} and {{ Content }} placeholders
    #[arg(long = "template")]
    template_path: Option<PathBuf>,

    /// Output directory, recreated on every build
    #[arg(short, long = "output")]
    output_dir: Option<PathBuf>,

    /// URL prefix the site is served under, starting with '/'
    #[arg(long, value_parser = parse_base_path)]
    base_path: Option<String>,
}

impl BuildArgs {
    fn load_config(&self) -> Result<Config> {
        let loaded = match &self.config {
            Some(path) => match Config::load_from_path(path)? {
                Some(config) => Some(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            },
            None => Config::load()?,
        };

        match loaded {
            Some(config) => Ok(config),
            None => {
                log::info!(
                    "No {} found, using defaults",
                    Config::config_path().display()
                );
                Ok(Config::default())
            }
        }
    }

    /// Command line flags win over the config file.
    fn site_options(self, config: Config) -> SiteOptions {
        SiteOptions {
            content_dir: self.content_dir.unwrap_or(config.content_dir),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            template_path: self.template_path.unwrap_or(config.template_path),
            output_dir: self.output_dir.unwrap_or(config.output_dir),
            base_path: self.base_path.unwrap_or(config.base_path),
        }
    }
}

fn parse_base_path(value: &str) -> Result<String, String> {
    if is_valid_base_path(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' must start with '/'"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => build(args),
        Command::Render { file } => {
            println!("{}", render(&file)?);
            Ok(())
        }
        Command::Title { file } => {
            println!("{}", title(&file)?);
            Ok(())
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = args.load_config()?;
    let options = args.site_options(config);

    let pages = build_site(&options).with_context(|| {
        format!(
            "Failed to build site from '{}' into '{}'",
            options.content_dir.display(),
            options.output_dir.display()
        )
    })?;

    log::info!("Built {pages} pages into {}", options.output_dir.display());
    Ok(())
}

fn render(file: &Path) -> Result<String> {
    let markdown = io::read_file(file)?;
    markdown_to_html(&markdown).with_context(|| format!("Failed to convert '{}'", file.display()))
}

fn title(file: &Path) -> Result<String> {
    let markdown = io::read_file(file)?;
    extract_title(&markdown).with_context(|| format!("No title in '{}'", file.display()))
}
