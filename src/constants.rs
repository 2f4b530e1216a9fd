pub const PROJECT_ROOT_ENV: &str = "GAUGE_PROJECT_ROOT";
pub const REPORTS_DIR_ENV: &str = "gauge_reports_dir";
pub const PORT_ENV: &str = "plugin_connection_port";
pub const OVERWRITE_REPORTS_ENV: &str = "overwrite_reports";
pub const PLUGIN_ACTION_ENV: &str = "xml-report_action";

pub const EXECUTION_ACTION: &str = "execution";
pub const GAUGE_HOST: &str = "127.0.0.1";

pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const XML_REPORT_DIR: &str = "xml-report";
pub const RESULT_FILE: &str = "result.xml";

/// `YYYY-MM-DD HH.MM.SS`, local time.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H.%M.%S";

#[cfg(unix)]
pub const DIRECTORY_MODE: u32 = 0o755;
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o644;

pub const EVENT_CHANNEL_SIZE: usize = 16;

pub const EXIT_FAILURE: u8 = 1;
