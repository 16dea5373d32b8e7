mod cli;
mod report;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use recorder_common::{ConfigError, Event, EventBus, RecorderError};
use recorder_config::RecorderConfig;
use recorder_core::{
    parse_shortcut, ControllerOptions, InputSourceId, ResourceBundle, ShortcutController,
    StaticLayoutProvider,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&str>) -> Result<RecorderConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = recorder_config::load_from_path(Path::new(path))?;
            recorder_config::validation::validate(&config)?;
            Ok(config)
        }
        None => recorder_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Missing resources are fatal once a directory is configured.
fn load_resources(args: &cli::Args, config: &RecorderConfig) -> Result<ResourceBundle, RecorderError> {
    let directory = args
        .resources
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.resources.directory.clone());

    match directory {
        Some(directory) => Ok(ResourceBundle::locate(directory)?),
        None => {
            tracing::info!("No resource directory configured, using untranslated strings");
            Ok(ResourceBundle::untranslated())
        }
    }
}

fn run(args: &cli::Args, config: &RecorderConfig) -> Result<(), RecorderError> {
    let bundle = load_resources(args, config)?;

    let provider = Rc::new(StaticLayoutProvider::with_builtin_layouts());
    let record_source = InputSourceId::from(args.record_source.as_str());
    provider.select(&record_source)?;

    let shortcut = parse_shortcut(&args.shortcut, &*provider, &record_source)?;
    tracing::info!("Recording {shortcut} under {record_source}");

    let events = EventBus::default();
    let options = ControllerOptions::for_layout(config, &*provider)?;
    let mut controller = ShortcutController::new(provider.clone(), events.clone(), options);
    controller.observe(|view| match view {
        Some(view) => tracing::info!(
            input_source = %view.input_source(),
            display = view.display_string(),
            "Derived view updated"
        ),
        None => tracing::info!("Shortcut cleared"),
    });
    controller.set_shortcut(shortcut);

    if let Some(ref target) = args.switch_to {
        provider.select(&InputSourceId::from(target.as_str()))?;
        events.publish(Event::SelectedInputSourceChanged);
        controller.process_pending_events();
    }

    let view = controller
        .view()
        .ok_or_else(|| RecorderError::Other("no shortcut held".into()))?;
    let output = if args.json {
        report::to_json(view, &bundle)?
    } else {
        report::to_text(view, &bundle)
    };
    println!("{output}");
    Ok(())
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can apply
    let config = load_config(args.config.as_deref());

    let directive = args.log_level.clone().unwrap_or_else(|| match &config {
        Ok(config) => config.logging.level.as_directive().to_string(),
        Err(_) => "info".to_string(),
    });
    init_logging(&directive);

    tracing::info!("shortcut-inspect v{}", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        RecorderConfig::default()
    });

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        eprintln!("shortcut-inspect: {e}");
        std::process::exit(1);
    }
}
