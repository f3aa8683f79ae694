use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::fmt;

use super::constants::LOG_PATTERN;

const PATH: &str = "lib/error";
const FN_INIT_LOG: &str = "init_logging";

#[derive(Debug)]
pub struct AppError {
    pub msg: String,
}

impl AppError {
    pub fn new(path: &str, method: &str, tag: &str, err: &str) -> Self {
        log::error!("{} | {} | {} | {}", path, method, tag, err);
        AppError {
            msg: err.to_string(),
        }
    }

    pub fn init_logging(log_path: &str) -> Result<(), AppError> {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)
            .map_err(|e| AppError::new(PATH, FN_INIT_LOG, "00", &e.to_string()))?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(LevelFilter::Info))
            .map_err(|e| AppError::new(PATH, FN_INIT_LOG, "01", &e.to_string()))?;

        log4rs::init_config(config)
            .map_err(|e| AppError::new(PATH, FN_INIT_LOG, "02", &e.to_string()))?;

        Ok(())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for AppError {}
