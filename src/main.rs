//! Command line entry point for inlining webview resources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use webview_resource_inliner::{
  BundleInjector, BundleResolution, BundledAsset, FrontendResources, InlinerConfig,
};

/// Inline extension-bundled stylesheets and images for a sandboxed webview.
#[derive(Debug, Parser)]
#[command(name = "resource-inliner", version, about)]
struct Cli {
  /// Log successful inlines as well as failures.
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the resource bundle as JSON.
  Bundle {
    #[command(flatten)]
    source: SourceArgs,
    /// Resolve bundle assets one after another instead of concurrently.
    #[arg(long)]
    sequential: bool,
  },
  /// Print the head fragment: inlined stylesheets plus the front-end configuration.
  Inject {
    #[command(flatten)]
    source: SourceArgs,
    /// Base location for assets that could not be inlined.
    #[arg(long)]
    base_uri: Option<String>,
    /// Root-relative stylesheet to inline; repeat to add more.
    #[arg(long = "stylesheet", value_name = "PATH")]
    stylesheets: Vec<String>,
  },
  /// Print the source the front-end would use for one bundled asset.
  Resolve {
    #[command(flatten)]
    source: SourceArgs,
    /// Base location for assets that could not be inlined.
    #[arg(long)]
    base_uri: Option<String>,
    /// Bundle key (e.g. `rooLogoSvg`) or file name (e.g. `roo-logo.svg`).
    asset: String,
  },
}

#[derive(Debug, Args)]
struct SourceArgs {
  /// Extension root that bundled asset paths are relative to.
  #[arg(long)]
  root: PathBuf,
  /// Explicit configuration file; defaults to the one discovered in the root.
  #[arg(long)]
  config: Option<PathBuf>,
}

impl SourceArgs {
  fn load_config(&self) -> Result<InlinerConfig> {
    match &self.config {
      Some(path) => InlinerConfig::from_path(path)
        .with_context(|| format!("failed to load configuration {}", path.display())),
      None => Ok(InlinerConfig::discover(&self.root)),
    }
  }
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

async fn print_bundle(root: &Path, config: &InlinerConfig, sequential: bool) -> Result<()> {
  let mut inliner = config.to_inliner(root);
  if sequential {
    inliner = inliner.with_resolution(BundleResolution::Sequential);
  }

  let bundle = inliner.build_resource_bundle().await;
  let json = serde_json::to_string_pretty(&bundle).context("failed to serialize bundle")?;
  println!("{json}");
  Ok(())
}

async fn print_head_fragment(root: &Path, config: InlinerConfig) -> Result<()> {
  let inliner = config.to_inliner(root);
  let fragment = BundleInjector::new(&inliner, config.images_base_uri.as_str())
    .with_stylesheets(config.stylesheet_references())
    .with_element_id(config.element_id.as_str())
    .head_fragment()
    .await
    .context("failed to render front-end configuration")?;
  println!("{fragment}");
  Ok(())
}

async fn print_resolved(root: &Path, config: &InlinerConfig, asset: &str) -> Result<()> {
  let asset = BundledAsset::from_key(asset).ok_or_else(|| {
    let known: Vec<&str> = BundledAsset::ALL.iter().map(|asset| asset.key()).collect();
    anyhow!("unknown asset `{asset}`; expected one of {}", known.join(", "))
  })?;

  let inliner = config.to_inliner(root);
  let resources = FrontendResources::new(
    config.images_base_uri.clone(),
    inliner.build_resource_bundle().await,
  );
  println!("{}", resources.resolve_src(asset));
  Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match cli.command {
    Command::Bundle { source, sequential } => {
      let config = source.load_config()?;
      print_bundle(&source.root, &config, sequential).await
    }
    Command::Inject {
      source,
      base_uri,
      stylesheets,
    } => {
      let mut config = source.load_config()?;
      if let Some(base_uri) = base_uri {
        config.images_base_uri = base_uri;
      }
      config.stylesheets.extend(stylesheets);
      print_head_fragment(&source.root, config).await
    }
    Command::Resolve {
      source,
      base_uri,
      asset,
    } => {
      let mut config = source.load_config()?;
      if let Some(base_uri) = base_uri {
        config.images_base_uri = base_uri;
      }
      print_resolved(&source.root, &config, &asset).await
    }
  }
}
