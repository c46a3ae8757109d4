//! Basic Session
//!
//! This example walks a session through ordinary arithmetic.
//!
//! Key concepts:
//! - Keystrokes arrive as `InputEvent`s or key names
//! - Every event replaces the whole state
//! - Chained operators evaluate left to right
//! - Division by zero latches the error phase
//!
//! Run with: cargo run --example basic_session

use tallybox::core::{InputEvent, Operator};
use tallybox::Session;

fn press(session: &mut Session, keys: &str) {
    for key in keys.chars() {
        session.press_key(&key.to_string());
    }
    println!("  {:<10} -> {}", keys, session.snapshot().display);
}

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut session = Session::new();
    println!("Session {} started", session.id());
    println!("Initial display: {}\n", session.snapshot().display);

    println!("Chained operators evaluate left to right:");
    press(&mut session, "12");
    press(&mut session, "+");
    press(&mut session, "7");
    press(&mut session, "*");
    press(&mut session, "3");
    press(&mut session, "=");
    println!();

    println!("Typing after a result starts a new operand:");
    press(&mut session, "2.5");
    press(&mut session, "/");
    press(&mut session, "0");
    press(&mut session, "=");
    println!("  phase: {:?}\n", session.snapshot().phase);

    println!("A digit recovers from the error:");
    let snapshot = session.dispatch(InputEvent::digit('4').unwrap());
    println!("  4          -> {}", snapshot.display);
    session.dispatch(InputEvent::Operator(Operator::Sub));
    session.dispatch(InputEvent::digit('9').unwrap());
    let snapshot = session.dispatch(InputEvent::Equals);
    println!("  - 9 =      -> {}\n", snapshot.display);

    println!("History:");
    for line in session.state().history().lines() {
        println!("  {}", line);
    }

    println!("\nPhase changes recorded: {}", session.timeline().transitions().len());
    println!("Errors hit: {}", session.timeline().error_count());

    println!("\n=== Example Complete ===");
}
