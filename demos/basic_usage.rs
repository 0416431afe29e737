// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration container.
//!
//! This example demonstrates:
//! - Seeding a container from already-parsed nested data
//! - Reading values by key, by dotted path and by index
//! - Conditional defaults with `set_if_absent`
//! - Locking the container and handling rejected writes
//! - Exporting back to a plain mapping
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use nestcfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== nestcfg: Basic Usage ===\n");

    // An external loader would normally produce this mapping from a file.
    let parsed = Mapping::from([
        ("app", Value::from(Mapping::from([("name", "shop"), ("env", "dev")]))),
        (
            "database",
            Value::from(Mapping::from([
                ("host", Value::from("localhost")),
                ("port", Value::from(5432)),
            ])),
        ),
    ]);

    let mut config = Config::from_mapping(parsed, false);
    println!("Loaded {} top-level entries.\n", config.len());

    println!("--- Reading ---");
    println!("app.name      = {}", config.get_config("app")?.get_str("name")?);
    println!("database.port = {:?}", config.get_path("database.port"));
    println!("missing       = {:?}", config["missing"]);
    println!("timeout       = {:?}", config.get_or("timeout", 30));

    println!("\n--- Defaults ---");
    let wrote = config.set_if_absent("log_level", "info")?;
    println!("log_level default applied: {}", wrote);
    let wrote = config.set_if_absent("log_level", "trace")?;
    println!("log_level default applied again: {}", wrote);

    config.set_path("database.pool.max", 16)?;
    println!("database.pool.max = {:?}", config.get_path("database.pool.max"));

    println!("\n--- Locking ---");
    config.read_only();
    match config.set("log_level", "debug") {
        Ok(()) => println!("✗ write unexpectedly succeeded"),
        Err(e) => println!("✓ write rejected: {}", e),
    }
    match config.set_path("database.port", 6543) {
        Ok(()) => println!("✗ nested write unexpectedly succeeded"),
        Err(e) => println!("✓ nested write rejected: {}", e),
    }

    println!("\n--- Export ---");
    for (key, value) in config.to_mapping().iter() {
        println!("{} => {:?}", key, value);
    }

    Ok(())
}
