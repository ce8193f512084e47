//! `unshort resolve <url>...` – resolve URLs without a CSV file.

use anyhow::Result;
use unshort_core::config::UnshortConfig;
use unshort_core::resolve::{CurlResolver, Resolution, Resolver, ResolverSettings};

pub fn run_resolve(cfg: &UnshortConfig, urls: &[String]) -> Result<()> {
    let mut resolver = CurlResolver::new(ResolverSettings::from(cfg));
    for url in urls {
        let resolution = resolver.resolve(url);
        match &resolution {
            Resolution::Resolved { hops, .. } => {
                println!("{url} -> {} ({hops} hops)", resolution.cell_value());
            }
            Resolution::Failed(_) => println!("{url} -> {}", resolution.cell_value()),
        }
    }
    Ok(())
}
