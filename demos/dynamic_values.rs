//! Building and converting DebugValues at runtime.
//!
//! Run with: cargo run --example dynamic_values

use guardtext::{debug_value, to_debug_text, to_value, DebugTextOptions, DebugValue};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    manager: Option<String>,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build a value with the debug_value! macro
    let config = debug_value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", null, "metrics"],
        "debug": true
    });

    println!("Config: {}\n", config);

    if let Some(map) = config.as_map() {
        if let Some(port) = map.get("port").and_then(DebugValue::as_i64) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(features) = map.get("features").and_then(DebugValue::as_sequence) {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Convert an existing struct
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        manager: None,
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as value: {}", user_value);
    println!("  is_map:      {}", user_value.is_map());
    println!("  is_sequence: {}\n", user_value.is_sequence());

    println!(
        "User debug text: {}",
        to_debug_text(&user, &DebugTextOptions::new().with_prefix("User"))?
    );
    println!(
        "Without nulls:   {}",
        to_debug_text(&user, &DebugTextOptions::new().with_prefix("User").excluding_nulls())?
    );

    Ok(())
}
