//! The demo walkthrough.

use std::io::Write;

use anyhow::Context;

use storefront_catalog::{CatalogRegistry, Category, ConfirmPriceDrop, PriceUpdate, Product};

use crate::config::CliConfig;
use crate::seed;

const SEPARATOR: &str = "############ separator ############";

/// Price changes tried after the listings, by product name.
const PRICE_CHANGES: &[(&str, f64)] = &[
    ("Apples", 45000.0),
    ("TV", -1000.0),
    ("Samsung", 25000.0),
    ("Samsung", 35000.0),
];

/// Pair whose combined stock value is reported at the end.
const COMBINED: (&str, &str) = ("Samsung", "TV");

pub fn run<W: Write>(
    config: &CliConfig,
    out: &mut W,
    confirm: &mut dyn ConfirmPriceDrop,
) -> anyhow::Result<()> {
    let seeds = seed::load(config.seed_path.as_deref()).context("failed to load seed catalog")?;
    let mut registry = CatalogRegistry::new();
    let mut categories = seed::build(&mut registry, &seeds).context("failed to build catalog")?;

    print_listings(out, &categories)?;

    writeln!(out)?;
    for category in &categories {
        writeln!(out, "{category} (average price: {:.2})", category.average_price())?;
    }
    writeln!(
        out,
        "categories: {}, products: {}",
        registry.categories_created(),
        registry.products_added()
    )?;

    writeln!(out)?;
    for (name, new_price) in PRICE_CHANGES {
        let Some(product) = find_mut(&mut categories, name) else {
            tracing::info!(product = %name, "no such product; skipping price change");
            continue;
        };
        let update = product.set_price(*new_price, &mut *confirm);
        writeln!(out, "{}", describe_update(product, *new_price, update))?;
    }

    let (left, right) = COMBINED;
    if let (Some(a), Some(b)) = (find(&categories, left), find(&categories, right)) {
        let total = (a + b).with_context(|| format!("cannot combine '{left}' and '{right}'"))?;
        writeln!(out, "combined stock value of {left} and {right}: {total}")?;
    }

    Ok(())
}

fn print_listings<W: Write>(out: &mut W, categories: &[Category]) -> std::io::Result<()> {
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            writeln!(out, "{SEPARATOR}")?;
        }
        writeln!(out, "{}", category.listing())?;
    }
    Ok(())
}

fn find<'a>(categories: &'a [Category], name: &str) -> Option<&'a Product> {
    categories.iter().find_map(|c| c.find(name))
}

fn find_mut<'a>(categories: &'a mut [Category], name: &str) -> Option<&'a mut Product> {
    categories.iter_mut().find_map(|c| c.find_mut(name))
}

fn describe_update(product: &Product, requested: f64, update: PriceUpdate) -> String {
    match update {
        PriceUpdate::Accepted => format!("{}: price set to {}", product.name(), product.price()),
        PriceUpdate::Lowered => format!("{}: price lowered to {}", product.name(), product.price()),
        PriceUpdate::Cancelled => format!(
            "{}: price drop to {requested} cancelled, still {}",
            product.name(),
            product.price()
        ),
        PriceUpdate::Rejected => format!(
            "{}: price {requested} rejected, still {}",
            product.name(),
            product.price()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{AssumeNo, AssumeYes};

    fn run_to_string(confirm: &mut dyn ConfirmPriceDrop) -> String {
        let mut out = Vec::new();
        run(&CliConfig::default(), &mut out, confirm).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_listings_and_totals() {
        let output = run_to_string(&mut AssumeNo);
        assert!(output.starts_with("Apples, 15.5 rub. Remaining: 55 pcs.\n############ separator"));
        assert!(output.contains("Electronics, products in stock: 25 pcs. (average price: 53333.00)"));
        assert!(output.contains("categories: 3, products: 5"));
    }

    #[test]
    fn confirmed_walkthrough() {
        let output = run_to_string(&mut AssumeYes);
        assert!(output.contains("Apples: price set to 45000"));
        assert!(output.contains("TV: price -1000 rejected, still 50000"));
        assert!(output.contains("Samsung: price lowered to 25000"));
        assert!(output.contains("Samsung: price set to 35000"));
        assert!(output.contains("combined stock value of Samsung and TV: 675000"));
    }

    #[test]
    fn cancelled_drop_keeps_price() {
        let output = run_to_string(&mut AssumeNo);
        assert!(output.contains("Samsung: price drop to 25000 cancelled, still 30000"));
    }
}
