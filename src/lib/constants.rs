pub const FN_NEW: &str = "new";

pub const LOG_FILE: &str = "timing.log";
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} - {m}{n}";

pub const DEFAULT_LABEL: &str = "timing";
pub const DEFAULT_SEP: &str = "\n";

pub const SHELL: &str = "sh";
pub const SHELL_ARG: &str = "-c";

pub const NANOS_PER_MICRO: u64 = 1_000;
pub const NANOS_PER_MILLI: u64 = 1_000_000;
pub const NANOS_PER_SEC: u64 = 1_000_000_000;
pub const SECS_PER_MIN: u64 = 60;
pub const SECS_PER_HOUR: u64 = 3_600;
