use crate::config::Config;
use crate::core::cli::CliPaths;
use crate::core::roster::Roster;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub roster: Roster,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub data_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(paths: CliPaths) -> Result<Self> {
        let config = Config::load_from(&paths.config_path)?;

        // CLI flag wins over the configured default.
        let data_path = paths
            .data_path
            .unwrap_or_else(|| config.data_path().to_path_buf());

        let logger = Logger::new();
        logger.set_log_dir(&paths.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            roster: Roster::new(),
            logger,
            startup_displayed: false,
            data_path,
            config_path: paths.config_path,
            logs_dir: paths.logs_dir,
        })
    }
}
