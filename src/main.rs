use pets_nursery::config::DEFAULT_CONFIG_FILE;
use pets_nursery::utils::logger;
use pets_nursery::{JsonFileStorage, Registry, RegistryConfig, RegistryShell};
use std::io;

fn main() -> anyhow::Result<()> {
    let (config, config_error) = match RegistryConfig::load(DEFAULT_CONFIG_FILE) {
        Ok(config) => (config, None),
        Err(e) => (RegistryConfig::default(), Some(e)),
    };

    logger::init_cli_logger(config.verbose);

    if let Some(e) = config_error {
        tracing::warn!("Ignoring {}: {}; using defaults", DEFAULT_CONFIG_FILE, e);
        eprintln!("{}", e.user_friendly_message());
    }

    tracing::info!("Starting pets-nursery");
    tracing::debug!("Config: {:?}", config);

    let storage = JsonFileStorage::new(config.data_file());
    let mut registry = Registry::open(storage, config.date_format())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    RegistryShell::new(&mut registry, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("Session finished");
    Ok(())
}
