#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use chainmap::{hash_index, ChainedTable};
use plotters::prelude::*;
use rand::Rng;

// Bucket count under inspection; matches the library default.
const BUCKET_COUNT: usize = 32;
// Number of distinct random keys to load before measuring.
const KEYS_AMOUNT: usize = 512;
const MIN_KEY_LEN: usize = 3;
const MAX_KEY_LEN: usize = 12;
const OUTPUT_FILE: &str = "chain_lengths.png";

// Random lowercase ASCII key, the shape the rolling hash sees in practice.
fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(MIN_KEY_LEN..=MAX_KEY_LEN);
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut table = ChainedTable::with_buckets(BUCKET_COUNT);

    while table.len() < KEYS_AMOUNT {
        let key = random_key(&mut rng);
        let value = random_key(&mut rng);
        table.push(&key, &value)?;
    }

    // Recompute each key's bucket through the public index function so the
    // histogram doubles as a spot check of the bucket invariant.
    let mut lengths = vec![0usize; BUCKET_COUNT];
    for (key, _) in table.iter() {
        lengths[hash_index(key, BUCKET_COUNT)] += 1;
    }

    let longest = lengths.iter().copied().max().unwrap_or(0);
    let occupied = lengths.iter().filter(|&&len| len > 0).count();
    let average = table.len() as f64 / BUCKET_COUNT as f64;

    println!("records: {}", table.len());
    println!("buckets: {BUCKET_COUNT} ({occupied} occupied)");
    println!("average chain length: {average:.2}");
    println!("longest chain: {longest}");

    let root = BitMapBackend::new(OUTPUT_FILE, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain length per bucket", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..BUCKET_COUNT, 0..longest + 1)?;

    chart
        .configure_mesh()
        .x_desc("bucket index")
        .y_desc("chain length")
        .draw()?;

    chart.draw_series(lengths.iter().enumerate().map(|(index, &len)| {
        Rectangle::new([(index, 0), (index + 1, len)], BLUE.filled())
    }))?;

    root.present()?;
    println!("wrote {OUTPUT_FILE}");

    Ok(())
}
