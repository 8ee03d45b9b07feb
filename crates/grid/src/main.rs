//! Terminal renderer for the product grid.
//!
//! Mounts the grid against the file store, optionally filters by the
//! category given as the first argument, and prints the visible cards.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use towelshop_grid::{ProductCard, ProductGrid};
use towelshop_store::FileStore;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = FileStore::open_default().context("failed to open product store")?;
    let mut grid = ProductGrid::mount(&store).context("failed to mount product grid")?;

    if let Some(category) = std::env::args().nth(1) {
        grid.select(category);
    }

    let selected = grid.selected().to_string();
    let bar: Vec<String> = grid
        .categories()
        .into_iter()
        .map(|label| {
            if label == selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    println!("{}", bar.join("  "));
    println!();

    for product in grid.visible() {
        println!("{}", ProductCard::from(product));
    }

    Ok(())
}
