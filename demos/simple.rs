//! Formatting named values into one line of debug text.
//!
//! Run with: cargo run --example simple

use guardtext::{debug_text, format_debug_text, format_debug_text2, DebugValue};

fn main() {
    let attempts: Vec<Option<u32>> = vec![Some(120), None, Some(95)];

    let text = format_debug_text(
        &[
            ("endpoint", DebugValue::from("https://example.com/health")),
            ("region", DebugValue::Null),
            ("latency_ms", DebugValue::from(attempts.clone())),
        ],
        true,
        Some("Probe"),
    );
    println!("{}", text);

    let text = format_debug_text(
        &[
            ("endpoint", DebugValue::from("https://example.com/health")),
            ("region", DebugValue::Null),
            ("latency_ms", DebugValue::from(attempts)),
        ],
        false,
        Some("Probe"),
    );
    println!("{}", text);

    println!("{}", format_debug_text2("user", "ann", "session", None::<&str>, false, None));
    println!("{}", debug_text!("retries" => 3u8, "last_error" => "timeout"));
}
