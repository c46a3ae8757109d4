//! Tax and Memory
//!
//! This example demonstrates the GST shortcut keys and the memory register.
//!
//! Key concepts:
//! - Tax presets come from a validated session configuration
//! - Applying tax records a history entry
//! - Memory keys act on the value currently shown
//! - Snapshots serialize to JSON for a presentation layer
//!
//! Run with: cargo run --example tax_and_memory

use tallybox::builder::SessionBuilder;
use tallybox::core::InputEvent;

fn main() {
    println!("=== Tax and Memory ===\n");

    let mut session = SessionBuilder::new()
        .tax_presets([5.0, 12.0, 18.0])
        .build()
        .unwrap();

    let presets: Vec<String> = session
        .tax_rates()
        .iter()
        .map(|rate| format!("{}%", rate.percent()))
        .collect();
    println!("Tax presets: {}\n", presets.join(", "));

    println!("Price 250, plus 18% GST, into memory:");
    session.dispatch_all("250".chars().map(|c| InputEvent::digit(c).unwrap()));
    let snapshot = session.apply_tax_preset(2).unwrap();
    println!("  display: {}", snapshot.display);
    let snapshot = session.dispatch(InputEvent::MemoryAdd);
    println!("  memory:  {}\n", snapshot.memory_display);

    println!("Price 80, plus 5% GST, added to memory:");
    session.dispatch(InputEvent::Clear);
    session.dispatch_all("80".chars().map(|c| InputEvent::digit(c).unwrap()));
    session.apply_tax_preset(0);
    let snapshot = session.dispatch(InputEvent::MemoryAdd);
    println!("  display: {}", snapshot.display);
    println!("  memory:  {}\n", snapshot.memory_display);

    println!("Recall the running total:");
    let snapshot = session.dispatch(InputEvent::MemoryRecall);
    println!("  display: {}\n", snapshot.display);

    println!("Invalid presets are rejected before a session exists:");
    match SessionBuilder::new().tax_presets([18.0, -2.0, 18.0]).build() {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  {}", err),
    }

    println!("\nSnapshot as JSON:");
    println!("{}", session.snapshot().to_json_pretty().unwrap());

    println!("\n=== Example Complete ===");
}
