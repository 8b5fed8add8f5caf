//! Producer task feeding doubled values through a bounded channel, drained
//! with a per-value timeout.

use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc;

/// Values received before the channel closed or a receive timed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drained {
    pub values: Vec<i64>,
    pub timed_out: bool,
}

/// Spawns a producer that sends each number doubled, then closes the channel.
pub fn double_values(nums: Vec<i64>) -> mpsc::Receiver<i64> {
    let (tx, rx) = mpsc::channel(nums.len().max(1));

    tokio::spawn(async move {
        for num in nums {
            if tx.send(num * 2).await.is_err() {
                debug!("Receiver dropped, stopping producer");
                break;
            }
        }
    });

    rx
}

/// Receives until the channel closes, or until no value arrives within `timeout`.
pub async fn drain_with_timeout(mut rx: mpsc::Receiver<i64>, timeout: Duration) -> Drained {
    let mut values = Vec::new();

    loop {
        match tokio::time::timeout(timeout, rx.recv()).await {
            Ok(Some(value)) => values.push(value),
            Ok(None) => {
                return Drained {
                    values,
                    timed_out: false,
                }
            }
            Err(_) => {
                warn!("Timed out after {} values", values.len());
                return Drained {
                    values,
                    timed_out: true,
                };
            }
        }
    }
}
