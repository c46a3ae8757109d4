//! Undo and Redo
//!
//! This example demonstrates the session's undo stack over immutable states.
//!
//! Key concepts:
//! - Previous states are kept whole, so undo is a swap
//! - Events that change nothing are not recorded
//! - A new event after undo drops the redo stack
//! - The undo stack is bounded by configuration
//!
//! Run with: cargo run --example undo_redo

use tallybox::builder::SessionBuilder;
use tallybox::core::InputEvent;

fn show(label: &str, display: String) {
    println!("  {:<16} {}", label, display);
}

fn main() {
    println!("=== Undo and Redo ===\n");

    let mut session = SessionBuilder::new().undo_depth(3).build().unwrap();

    for key in ["1", "2", "3", "4", "5"] {
        session.press_key(key);
    }
    show("typed 12345:", session.snapshot().display);

    println!("\nUndo is bounded to 3 steps:");
    while session.undo() {
        show("undo:", session.snapshot().display);
    }
    println!("  can_undo = {}", session.can_undo());

    println!("\nRedo replays the undone states:");
    session.redo();
    show("redo:", session.snapshot().display);

    println!("\nNo-op events leave the stacks alone:");
    session.dispatch(InputEvent::Equals);
    println!("  can_redo after '=' with nothing pending: {}", session.can_redo());

    println!("\nA new event discards redo:");
    session.press_key("9");
    show("typed 9:", session.snapshot().display);
    println!("  can_redo = {}", session.can_redo());

    println!("\n=== Example Complete ===");
}
