//! Interactive price-drop confirmation.

use std::io::{BufRead, StdinLock, Stdout, Write};

use storefront_catalog::{ConfirmPriceDrop, Price, Product};

/// Asks `(y/n)` on `output` and reads the answer from `input`.
///
/// Only `y` (any case, surrounding whitespace ignored) confirms; anything
/// else, including EOF or a read error, cancels.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R, W> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmPriceDrop for PromptConfirm<R, W> {
    fn confirm(&mut self, product: &Product, new_price: Price) -> bool {
        let asked = write!(
            self.output,
            "Lower the price of '{}' from {} to {}? (y/n): ",
            product.name(),
            product.price(),
            new_price
        )
        .and_then(|_| self.output.flush());
        if let Err(err) = asked {
            tracing::warn!(error = %err, "could not write confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
            Err(err) => {
                tracing::warn!(error = %err, "could not read confirmation");
                false
            }
        }
    }
}
