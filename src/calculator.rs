use log::debug;

use crate::{error::CalculationError, timing::timed};

/// Simple calculator with history.
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        timed("add", || {
            let result = a + b;
            self.record(format!("{} + {} = {}", a, b, result));
            result
        })
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculationError> {
        timed("divide", || {
            if b == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            let result = a / b;
            self.record(format!("{} / {} = {}", a, b, result));
            Ok(result)
        })
    }

    /// Entries in the order the operations were performed.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn record(&mut self, entry: String) {
        debug!("Recording: {}", entry);
        self.history.push(entry);
    }
}
