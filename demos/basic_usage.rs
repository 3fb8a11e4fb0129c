// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// precision-loss and clamping events.

use scaled_magnitude::prelude::*;

fn main() -> Result<(), MagnitudeError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Scaled Magnitude Example ===\n");

    // Load a balance from its stored form
    let mut balance = ScaledMagnitude::from_stored("999.9a")?;
    println!("Loaded balance: {}", balance);

    // Add rewards
    println!("\nAdding rewards...");
    for reward in ["250", "1.5a", "42b"] {
        let reward: ScaledMagnitude = reward.parse()?;
        balance += reward;
        println!("  +{:<8} -> {} ({:e})", reward.to_string(), balance, balance);
    }

    // A reward far below the balance is dropped entirely
    let dust = ScaledMagnitude::new(1.0, 0)?;
    let big = ScaledMagnitude::new(3.0, 9)?;
    println!("\n{} + {} = {}", big, dust, big + dust);

    // Multiplication saturates at the last suffix
    let mut runaway = ScaledMagnitude::new(2.0, 40)?;
    runaway *= ScaledMagnitude::new(1.0, 20)?;
    println!("\nSaturated product: {}", runaway);

    // Division and modulo are fallible
    let price = ScaledMagnitude::new(7.0, 1)?;
    println!("\n{} / {} = {}", balance, price, balance.divide(price)?);
    println!("{} % {} = {}", balance, price, balance.modulo(price)?);
    match price.divide(balance) {
        Ok(q) => println!("{} / {} = {}", price, balance, q),
        Err(e) => println!("{} / {} failed: {}", price, balance, e),
    }

    // Random loot between two bounds
    println!("\n=== Random Loot ===");
    let lower = ScaledMagnitude::new(10.0, 1)?;
    let upper = ScaledMagnitude::new(5.0, 3)?;
    for _ in 0..5 {
        println!("  {}", ScaledMagnitude::random_next(lower, upper)?);
    }

    // Store the final balance
    println!("\n=== Final Balance ===");
    println!("Stored:      {}", balance.to_stored());
    println!(
        "Exponential: {}",
        balance.format_with(&DisplayConfig::exponential())
    );

    Ok(())
}
