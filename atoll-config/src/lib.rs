use envconfig::Envconfig;
use lazy_static::lazy_static;

#[derive(Debug, Envconfig)]
pub struct Config {
    #[envconfig(from = "ATOLL_LOG_LEVEL", default = "info")]
    pub log_level: String,
    /// Compute a content checksum for every reported byte stream.
    #[envconfig(from = "ATOLL_CHECKSUM", default = "false")]
    pub checksum: bool,
    /// Default storage report format: "plain" or "json".
    #[envconfig(from = "ATOLL_REPORT_FORMAT", default = "plain")]
    pub report_format: String,
}

impl Config {
    pub fn init() -> Config {
        Config::init_from_env().expect("Failed to load config")
    }
}

lazy_static! {
    pub static ref CONFIG: Config = Config::init();
}
