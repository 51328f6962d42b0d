//! auto-mit CLI entrypoint
//! Parses command-line arguments and dispatches to the license generator.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use auto_mit::{
    application::{
        DEFAULT_OUTPUT, DialoguerPrompter, GenerateLicenseRequest, GenerateLicenseUseCase,
        collect_interactive,
    },
    config::LicenseConfig,
    generation::{GenerationError, GenerationOrchestrator, RawLicenseParams, parse_year},
    infrastructure::{FileSystemOutputService, TeraTemplateRenderer, VariantRegistry},
    server::{self, AppState, ServerConfig},
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "auto-mit")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the installed license variants
    List {
        /// Additional directory of *.html.tera license templates
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
    /// Serve license generation over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
        /// Directory of theme stylesheets served under /themes
        #[arg(long, default_value = "themes")]
        themes_dir: PathBuf,
        /// YAML or JSON file with default license parameters
        #[arg(long)]
        defaults: Option<PathBuf>,
        /// Additional directory of *.html.tera license templates
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },
}

/// Options for generating a license file
#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Copyright holder
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Option<String>,
    /// Copyright holder (same as --name)
    #[arg(value_name = "NAME", conflicts_with = "name")]
    holder: Option<String>,
    /// Contact email
    #[arg(short, long)]
    email: Option<String>,
    /// Website URL
    #[arg(short, long)]
    url: Option<String>,
    /// Copyright year, used for both bounds unless given explicitly
    #[arg(short, long, value_parser = parse_year)]
    year: Option<i32>,
    /// First copyright year
    #[arg(short, long, value_parser = parse_year)]
    start_year: Option<i32>,
    /// Last copyright year
    #[arg(long, value_parser = parse_year)]
    end_year: Option<i32>,
    /// License variant (case-insensitive)
    #[arg(short, long)]
    license: Option<String>,
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Prompt for every parameter
    #[arg(short, long)]
    interactive: bool,
    /// YAML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Additional directory of *.html.tera license templates
    #[arg(long)]
    template_dir: Option<PathBuf>,
}

impl GenerateArgs {
    fn params(&self) -> RawLicenseParams {
        RawLicenseParams {
            copyright: self.name.clone().or_else(|| self.holder.clone()),
            email: self.email.clone(),
            url: self.url.clone(),
            year: self.year,
            start_year: self.start_year,
            end_year: self.end_year,
            license: self.license.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // One-shot generation stays quiet unless RUST_LOG says otherwise
    let default_level = match cli.command {
        Some(Commands::Serve { .. }) => "info",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::List { template_dir }) => list_variants(template_dir.as_deref()).await?,
        Some(Commands::Serve {
            port,
            themes_dir,
            defaults,
            template_dir,
        }) => run_server(port, themes_dir, defaults.as_deref(), template_dir.as_deref()).await?,
        None => generate_license(cli.generate).await?,
    }
    Ok(())
}

async fn load_registry(template_dir: Option<&Path>) -> anyhow::Result<VariantRegistry> {
    VariantRegistry::with_template_dir(template_dir)
        .await
        .context("Failed to load license templates")
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LicenseConfig> {
    match path {
        Some(path) => LicenseConfig::load(path).context("Failed to load configuration"),
        None => Ok(LicenseConfig::default()),
    }
}

fn build_orchestrator(registry: VariantRegistry, theme: Option<String>) -> GenerationOrchestrator {
    let orchestrator =
        GenerationOrchestrator::new(Arc::new(registry), Arc::new(TeraTemplateRenderer::new()));
    match theme {
        Some(theme) => orchestrator.with_theme(theme),
        None => orchestrator,
    }
}

async fn generate_license(args: GenerateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut params = config.params.merge(args.params());
    let reference_year = chrono::Local::now().year();

    let registry = load_registry(args.template_dir.as_deref()).await?;
    let orchestrator = build_orchestrator(registry, config.theme);

    if args.interactive || !params.has_copyright_holder() {
        if !std::io::stdin().is_terminal() {
            if !params.has_copyright_holder() {
                return Err(GenerationError::MissingCopyrightHolder.into());
            }
            warn!("stdin is not a terminal, interactive prompts skipped");
        } else {
            let mut prompter = DialoguerPrompter::new();
            params = collect_interactive(
                &mut prompter,
                &params,
                reference_year,
                &orchestrator.variants(),
            )?;
        }
    }

    let use_case = GenerateLicenseUseCase::new(
        Arc::new(orchestrator),
        Arc::new(FileSystemOutputService::new()),
    );
    let response = use_case
        .execute(GenerateLicenseRequest::new(params, args.output), reference_year)
        .await?;

    println!(
        "Wrote {} license to {}",
        response.variant,
        response.output_path.display()
    );
    println!("Copyright (c) {}", response.copyright_line);
    Ok(())
}

async fn list_variants(template_dir: Option<&Path>) -> anyhow::Result<()> {
    let registry = load_registry(template_dir).await?;
    for template in registry.templates() {
        println!("{}\t{}", template.variant, template.source);
    }
    Ok(())
}

async fn run_server(
    port: u16,
    themes_dir: PathBuf,
    defaults: Option<&Path>,
    template_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(defaults)?;
    let registry = load_registry(template_dir).await?;
    info!(variants = registry.len(), "Starting license server");

    let orchestrator = build_orchestrator(registry, config.theme);
    let state = AppState::new(Arc::new(orchestrator), config.params);

    server::serve(state, ServerConfig { port, themes_dir })
        .await
        .context("License server failed")
}
