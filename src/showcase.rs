//! Driver routine exercising every feature of the crate in sequence.

use anyhow::{Context, Result};
use log::info;
use std::{path::Path, time::Duration};
use tokio::{fs::File, io::AsyncWriteExt};

use crate::{
    calculator::Calculator,
    config::{OUTPUT_CONTENTS, PIPELINE_RECV_TIMEOUT_MILLIS},
    fetch::process_urls,
    numeric::{calculate_sum, find_max, grade, multiply},
    person::Person,
    pipeline::{double_values, drain_with_timeout},
    shapes::{Circle, Drawable, Rectangle},
    timing::timed_async,
};

/// URLs fetched by [`run`].
pub const DEMO_URLS: [&str; 3] = ["api1.com", "api2.com", "api3.com"];

/// Scores graded by [`run`].
pub const SCORES: [(&str, u32); 2] = [("Alice", 100), ("Bob", 85)];

/// Squares of the even numbers below `limit`.
pub fn even_squares(limit: u32) -> Vec<u32> {
    (0..limit).filter(|x| x % 2 == 0).map(|x| x * x).collect()
}

/// Writes [`OUTPUT_CONTENTS`] to `path`; the handle is closed on every exit path.
pub async fn write_greeting(path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(OUTPUT_CONTENTS.as_bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub async fn run(output_path: &Path) -> Result<()> {
    info!("Running feature showcase");

    let person = Person::new("Alice", 30).with_email("alice@example.com");
    println!("Person: {}", person);
    println!("Is adult: {}", person.is_adult());

    let mut calc = Calculator::new();
    let result = calc.add(10.0, 5.0);
    println!("Result: {}", result);
    let quotient = calc.divide(20.0, 4.0)?;
    println!("20 / 4 = {}", quotient);

    let data = timed_async("process_urls", process_urls(DEMO_URLS)).await;
    println!("Fetched {} items", data.len());

    let squares = even_squares(5);
    println!("Even squares: {:?}", squares);

    if let Some(max) = find_max(&[3, 1, 4, 1, 5, 9]) {
        println!("Max: {}", max);
    }
    println!("Sum: {}", calculate_sum(5, 3));
    println!("6 * 7 = {}", multiply(6, 7));

    let shapes: Vec<Box<dyn Drawable>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Rectangle {
            width: 10.0,
            height: 20.0,
        }),
    ];
    for shape in &shapes {
        println!("{}", shape.draw());
    }

    for (name, score) in SCORES {
        println!("{}: {} ({})", name, score, grade(score));
    }

    let doubled = drain_with_timeout(
        double_values(vec![1, 2, 3, 4, 5]),
        Duration::from_millis(PIPELINE_RECV_TIMEOUT_MILLIS),
    )
    .await;
    for value in &doubled.values {
        println!("Doubled: {}", value);
    }
    if doubled.timed_out {
        println!("Timeout");
    }

    write_greeting(output_path).await?;
    info!("Wrote {}", output_path.display());

    Ok(())
}
