pub mod calculator;
pub mod config;
pub mod error;
pub mod fetch;
pub mod numeric;
pub mod person;
pub mod pipeline;
pub mod shapes;
pub mod showcase;
pub mod timing;
pub mod validation;

pub use calculator::Calculator;
pub use error::{CalculationError, ConfigError};
pub use fetch::{fetch_data, process_urls, FetchResult};
pub use person::Person;
pub use shapes::{Circle, Drawable, Rectangle};
pub use timing::{timed, timed_async, Stopwatch};
pub use validation::validate_config;
