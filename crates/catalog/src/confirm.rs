//! Confirmation hook for lowering a product's price.

use crate::{Price, Product};

/// Decides whether a price drop may go ahead.
///
/// Raising a price never consults this; only a strictly lower, valid price does.
pub trait ConfirmPriceDrop {
    fn confirm(&mut self, product: &Product, new_price: Price) -> bool;
}

/// Approves every price drop.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

/// Refuses every price drop.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeNo;

impl ConfirmPriceDrop for AssumeYes {
    fn confirm(&mut self, _product: &Product, _new_price: Price) -> bool {
        true
    }
}

impl ConfirmPriceDrop for AssumeNo {
    fn confirm(&mut self, _product: &Product, _new_price: Price) -> bool {
        false
    }
}

/// Adapter turning a closure into a [`ConfirmPriceDrop`].
pub struct ConfirmFn<F>(F);

/// Wrap a closure so it can answer price-drop confirmations.
pub fn confirm_with<F>(f: F) -> ConfirmFn<F>
where
    F: FnMut(&Product, Price) -> bool,
{
    ConfirmFn(f)
}

impl<F> ConfirmPriceDrop for ConfirmFn<F>
where
    F: FnMut(&Product, Price) -> bool,
{
    fn confirm(&mut self, product: &Product, new_price: Price) -> bool {
        (self.0)(product, new_price)
    }
}
