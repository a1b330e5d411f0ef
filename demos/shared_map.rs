//! Sharing one `OrderedMap` between threads.
//!
//! Run with: cargo run --example shared_map

use serde_ordermap::{to_string_pretty, OrderedMap};
use std::error::Error;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), Box<dyn Error>> {
    let registry = Arc::new(OrderedMap::new());
    println!("Locking enabled: {}", registry.is_safe());

    let workers: Vec<_> = ["ingest", "transform", "export"]
        .into_iter()
        .map(|stage| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for step in 0..3 {
                    registry.set(format!("{}.step{}", stage, step), "done");
                }
                registry.add("last_finished", stage);
            })
        })
        .collect();

    for worker in workers {
        worker.join().map_err(|_| "worker panicked")?;
    }

    println!("{} entries recorded", registry.len());
    println!("Last stage to finish: {}", registry.get_string("last_finished"));

    // Snapshot without holding the lock while printing
    let snapshot = registry.keys();
    for key in snapshot.iter().take(4) {
        println!("  {}", key);
    }

    registry.sort_keys();
    println!("\nSorted:\n{}", to_string_pretty(&*registry)?);

    Ok(())
}
