//! Write a deterministic products CSV for trying out `csv-sieve`.
//!
//! Usage: `generate_sample [OUTPUT] [ROWS]` (defaults: `sample_products.csv`, 50).

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Product {
    name: String,
    brand: &'static str,
    price: u32,
    rating: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const BRANDS: [(&str, &[&str]); 4] = [
    ("apple", &["iphone 15", "iphone 15 pro", "iphone se"]),
    ("samsung", &["galaxy s23", "galaxy s23 ultra", "galaxy a54"]),
    ("xiaomi", &["redmi note 12", "poco x5 pro", "xiaomi 13"]),
    ("google", &["pixel 8", "pixel 8 pro", "pixel 7a"]),
];

fn product(rng: &mut SimpleRng, id: usize) -> Product {
    let (brand, models) = rng.pick(&BRANDS);
    let model = rng.pick(models);
    // Prices 149..=1299 in steps of 50, ratings 3.5..=5.0 with one decimal.
    let price = 149 + 50 * (rng.next_u64() % 24) as u32;
    let rating = (35.0 + (rng.next_f64() * 15.0).round()) / 10.0;
    Product {
        name: format!("{model} #{id}"),
        brand,
        price,
        rating,
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "sample_products.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count {n:?}"))?,
        None => 50,
    };

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for id in 1..=rows {
        writer.serialize(product(&mut rng, id))?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {rows} products to {output_path}");
    Ok(())
}
