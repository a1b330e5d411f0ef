//! Reordering an `OrderedMap`: key sorts, value sorts, custom comparators,
//! flip and merge.
//!
//! Run with: cargo run --example sorting

use serde_ordermap::{value, LocalOrderedMap, OrderedMap};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let scores = OrderedMap::new();
    scores
        .add("carol", 72)
        .add("alice", 91)
        .add("bob", 85)
        .add("dave", 91);

    println!("Insertion order: {}", scores.to_json()?);

    scores.sort_keys();
    println!("By name:         {}", scores.to_json()?);

    scores.rsort_keys();
    println!("By name, desc:   {}", scores.to_json()?);

    // Stable: alice and dave tie and keep their current order
    scores.sort_by(|a, b| b.value().as_i64().cmp(&a.value().as_i64()));
    println!("By score, desc:  {}", scores.to_json()?);

    // Value sorts compare string forms, so "100" < "72"
    scores.add("erin", 100);
    scores.sort_values();
    println!("By value text:   {}", scores.to_json()?);

    // Flip: values become keys; the first occurrence fixes the position
    let by_score = scores.clone();
    by_score.flip();
    println!("Flipped:         {}", by_score.to_json()?);

    // Merge a single-threaded map into a shared one
    let extra = LocalOrderedMap::new_local();
    extra.add("frank", 64).add("alice", 95);
    scores.merge(&extra);
    println!("Merged:          {}", scores.to_json()?);

    if let Some(team) = value!({ "lead": "alice", "members": ["bob", "carol"] }).as_object() {
        println!("Team keys:       {:?}", team.keys());
    }

    Ok(())
}
