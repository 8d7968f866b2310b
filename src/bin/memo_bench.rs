//! Memo cache demo binary - times Fibonacci with and without memoization
//!
//! Usage:
//!   cargo run --bin memo-bench               # range 30..=36
//!   cargo run --bin memo-bench -- 40         # range 30..=40

use anyhow::{Context, Result};
use lettershift::memo::MemoCache;
use std::time::Instant;
use tracing::info;

const RANGE_START: u64 = 30;
const DEFAULT_RANGE_END: u64 = 36;

fn fib_plain(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_plain(n - 1) + fib_plain(n - 2)
    }
}

fn fib_cached(n: u64, cache: &mut MemoCache<u64, u64>) -> u64 {
    if n < 2 {
        return n;
    }
    if let Some(&value) = cache.get(&n) {
        return value;
    }
    let value = fib_cached(n - 1, cache) + fib_cached(n - 2, cache);
    cache.insert(n, value);
    value
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lettershift=info".parse()?),
        )
        .init();

    let range_end = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("range end is not an integer: {raw}"))?,
        None => DEFAULT_RANGE_END,
    };

    info!(
        "Computing fib({}..={}) with and without a memo cache",
        RANGE_START, range_end
    );

    println!("--- Without cache ---");
    let start = Instant::now();
    for n in RANGE_START..=range_end {
        println!("fib({}) = {}", n, fib_plain(n));
    }
    let plain_elapsed = start.elapsed();
    println!("Took {:?}", plain_elapsed);
    println!();

    println!("--- With cache ---");
    let mut cache = MemoCache::new();
    let start = Instant::now();
    for n in RANGE_START..=range_end {
        println!("fib({}) = {}", n, fib_cached(n, &mut cache));
    }
    let cached_elapsed = start.elapsed();
    println!("Took {:?}", cached_elapsed);
    println!();

    println!("--- Cache stats ---");
    println!("{}", serde_json::to_string_pretty(&cache.stats())?);

    Ok(())
}
