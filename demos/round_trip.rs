//! Parse JSON, edit it, and write it back with the key order intact.
//!
//! Run with: cargo run --example round_trip

use serde_ordermap::{from_str, to_string, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"{
        "name": "ordered-config",
        "version": 3,
        "dependencies": { "zlib": "1.2", "openssl": "3.0", "curl": "8.4" },
        "targets": [
            { "os": "linux", "arch": "x86_64" },
            { "arch": "aarch64", "os": "macos" }
        ]
    }"#;

    // Keys come back in the order they were written, at every depth
    let config = from_str(input)?;
    println!("Top-level keys: {:?}", config.keys());

    let deps = config.get("dependencies");
    if let Some(deps) = deps.as_object() {
        println!("Dependencies:   {:?}", deps.keys());
    }

    // `set` edits in place, `add` moves the key to the end
    config.set("version", 4);
    config.add("name", "ordered-config-renamed");
    config.add("license", Value::from("MIT"));

    println!("\nCompact:\n{}", to_string(&config)?);
    println!("\nPretty:\n{}", to_string_pretty(&config)?);

    // Writing and re-reading is stable
    let written = to_string(&config)?;
    let reread = from_str(&written)?;
    assert_eq!(reread, config);
    println!("\n✓ Round-trip successful");

    Ok(())
}
