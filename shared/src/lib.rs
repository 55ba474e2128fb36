mod logging;

pub use logging::{LogFormat, LoggingError, init_logging, init_test_logging};
