use std::time::Instant;

use hamcycle::generate;

fn main() {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size: u16 = args.next().and_then(|s| s.parse().ok()).unwrap_or(128);
    let iterations: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let start = Instant::now();
    for seed in 0..iterations {
        if let Err(error) = generate(size, size, Some(seed)) {
            eprintln!("seed {seed}: {error}");
        }
    }
    let elapsed = start.elapsed();
    println!(
        "{iterations} runs of {size}x{size} in {:.3}s ({:.1}ms each)",
        elapsed.as_secs_f64(),
        elapsed.as_secs_f64() * 1000.0 / iterations as f64
    );
}
