use clap::{Parser, Subcommand};
use component_docs::config::{self, ConfigOverrides};
use component_docs::logging::{self, LogFormat};
use component_docs::{output, pipeline, scan};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "component-docs")]
#[command(about = "Static documentation site generator for web components")]
#[command(long_about = "\
Static documentation site generator for web components

Every folder named `docs` under the source root that holds a
configuration.json becomes one page. Each page lists example cards whose
content comes from HTML fragments next to the configuration.

Source structure:

  src/
  └── widgets/
      ├── widget.js
      └── docs/
          ├── configuration.json   # id, title, tagName, subtitle, category, cards
          └── basic.html           # #preview, #markup, #additional_info

Templates (in --template-dir):

  page_template.html   # title, a#main_header_link, ul#{category}_menu,
                       # li#{category}, h1#content_title,
                       # small#content_subtitle, div#cards_container
  card_template.html   # h4.card-title, h6.card-subtitle,
                       # div.example-container, div.example-preview,
                       # div.example-markup, div#additional_info

WARNING: `build` deletes everything in the destination directory first.

Run 'component-docs gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file (default: component-docs.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output website directory [default: docs]
    #[arg(long, global = true, alias = "destDocsPath")]
    dest_docs_path: Option<PathBuf>,

    /// Compiled project script to embed [default: dist/app.min.js]
    #[arg(long, global = true, alias = "scriptPath")]
    script_path: Option<PathBuf>,

    /// Project source root scanned for docs folders [default: src]
    #[arg(long, global = true, alias = "srcPath")]
    src_path: Option<PathBuf>,

    /// Display name used in page titles and headers
    #[arg(long, global = true, alias = "projectName")]
    project_name: Option<String>,

    /// Directory holding page_template.html and card_template.html [default: docs-template]
    #[arg(long, global = true)]
    template_dir: Option<PathBuf>,

    /// Static assets copied into the output [default: docs-template/assets]
    #[arg(long, global = true)]
    assets_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_name: self.project_name.clone(),
            src_path: self.src_path.clone(),
            dest_docs_path: self.dest_docs_path.clone(),
            script_path: self.script_path.clone(),
            template_dir: self.template_dir.clone(),
            assets_dir: self.assets_dir.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Publish assets, scan for docs folders, and generate every page
    Build,
    /// List discovered pages and cards without writing anything
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.verbose);

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let site = config::load_config(cli.config.as_deref(), &cli.overrides())?;

    match cli.command {
        Command::Build => {
            init_thread_pool(&site.processing);
            println!(
                "==> Building {} → {}",
                site.src_path.display(),
                site.dest_docs_path.display()
            );
            let report = pipeline::run(&site)?;
            output::print_build_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", site.src_path.display());
            let docs = scan::scan(&site.src_path)?;
            output::print_scan_output(&docs, &site.src_path);
            for path in output::missing_contents(&docs) {
                warn!(path = %path.display(), "card content file does not exist");
            }
        }
        Command::GenConfig => {}
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
