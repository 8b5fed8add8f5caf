/// Minimum age at which a person counts as an adult.
pub const ADULT_AGE: u32 = 18;

/// Simulated latency of a single fetch in milliseconds.
pub const FETCH_DELAY_MILLIS: u64 = 100;

/// Keys every configuration map must contain.
pub const REQUIRED_CONFIG_KEYS: [&str; 2] = ["name", "version"];

/// Target of the driver's file write.
pub const OUTPUT_PATH: &str = "/tmp/test.txt";

/// Contents written by the driver.
pub const OUTPUT_CONTENTS: &str = "Hello, World!";

/// How long the pipeline consumer waits for each value before giving up.
pub const PIPELINE_RECV_TIMEOUT_MILLIS: u64 = 1000;
