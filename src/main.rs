use std::fs;
use std::io::Write;
use std::process;

use clap::Parser;
use log::{error, info, warn};

mod binder;
mod binders;
mod boot;
mod config;
mod loader;
mod models;
mod page;
mod regions;
mod render;
mod tabs;


use binder::PageController;
use config::{Cli, Config};
use loader::ContentSource;
use page::HtmlPage;

/// Write the bound page to a file, or to stdout for `-`.
fn write_output(config: &Config, html: &str) -> Result<(), String> {
    if config.writes_to_stdout() {
        let mut out = std::io::stdout().lock();
        out.write_all(html.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| format!("Failed to write page to stdout: {}", e))
    } else {
        fs::write(&config.output, html)
            .map_err(|e| format!("Failed to write {}: {}", config.output, e))
    }
}

fn fail(message: String) -> ! {
    error!("{}", message);
    process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config).unwrap_or_else(|e| fail(e));

    // Boot check: host page readable, output writable, regions present
    let source_html = boot::run(&config).unwrap_or_else(|e| fail(e));

    let source = ContentSource::from_root(&config.content_root, config.timeout())
        .unwrap_or_else(|e| fail(e));

    let bundle = loader::load_all(&source, &config.documents).await;

    let mut controller = PageController::new(HtmlPage::new(source_html));
    controller.bind(&bundle);

    if let Some(tab) = config.initial_tab.as_deref() {
        if !controller.switch_tab(tab) {
            warn!("initial_tab {:?} does not match a menu panel, keeping the first", tab);
        }
    }

    write_output(&config, &controller.into_html()).unwrap_or_else(|e| fail(e));

    if !config.writes_to_stdout() {
        info!("Wrote {}", config.output);
    }
}
