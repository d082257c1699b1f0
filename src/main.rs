#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::main()
}

// The browser build starts from `web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::{Parser, Subcommand};
    use eframe::egui;
    use mukherji_site::app::{Launch, SiteApp};
    use mukherji_site::config::Config;
    use mukherji_site::content::loader::spawn_remote_load;
    use mukherji_site::content::remote::RemoteConfig;
    use mukherji_site::content::ContentStore;
    use mukherji_site::generator::{self, watch, GeneratorOptions};
    use mukherji_site::head::{self, MemoryHead};
    use mukherji_site::pages::{PageCatalog, STUDIO_DESCRIPTION};
    use mukherji_site::router::MemoryHistory;
    use mukherji_site::view::{EguiHead, ImageResolver};
    use std::path::PathBuf;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Option<Command>,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Open the site in a native window
        Run {
            /// Initial route, e.g. /project/p3 or /#contact
            #[arg(long)]
            path: Option<String>,
        },
        /// Scan the project image tree and write the content dataset
        Generate {
            #[arg(long, default_value = "public/images/projects")]
            source: PathBuf,
            #[arg(long, default_value = "assets/content")]
            out: PathBuf,
            /// Keep running and regenerate on changes
            #[arg(long)]
            watch: bool,
        },
        /// Manage the configuration file
        Config {
            /// Write the default configuration
            #[arg(long)]
            init: bool,
        },
    }

    pub fn main() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse();
        let config = Config::load();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        match cli.command.unwrap_or(Command::Run { path: None }) {
            Command::Run { path } => run(config, path),
            Command::Generate { source, out, watch: keep_watching } => {
                let options = GeneratorOptions { source, out };
                if keep_watching {
                    watch::watch(&options)?;
                } else {
                    generator::generate(&options)?;
                }
                Ok(())
            }
            Command::Config { init } => {
                if init {
                    let path = Config::create_default()?;
                    println!("Wrote {}", path.display());
                } else if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                }
                Ok(())
            }
        }
    }

    fn run(config: Config, path: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
        let content = match &config.content.generated_dir {
            Some(dir) => ContentStore::from_dir(dir)?,
            None => ContentStore::bundled()?,
        };
        let catalog = PageCatalog::load()?;
        let initial = path.unwrap_or_else(|| "/".to_string());
        info!("starting at {initial}");

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.window.width, config.window.height])
                .with_title(config.window.title.clone()),
            ..Default::default()
        };

        let title = config.window.title.clone();
        eframe::run_native(
            "mukherji-site",
            options,
            Box::new(move |cc| {
                let head = EguiHead::new(
                    cc.egui_ctx.clone(),
                    MemoryHead::with_site_defaults(&title, STUDIO_DESCRIPTION),
                );
                let launch = Launch {
                    history: Box::new(MemoryHistory::new(initial)),
                    head: head::shared(head),
                    content,
                    catalog,
                    images: ImageResolver::new(config.content.public_dir.clone()),
                    timing: config.scroll,
                };
                let app = SiteApp::new(cc, launch);
                let app = if config.content.remote {
                    app.with_loader(spawn_remote_load(cc.egui_ctx.clone(), RemoteConfig::from_env()))
                } else {
                    app
                };
                Ok(Box::new(app))
            }),
        )?;
        Ok(())
    }
}
