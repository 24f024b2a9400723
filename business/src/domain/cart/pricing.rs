use serde::Serialize;

use super::model::LineItem;

/// HST fraction applied to subtotal plus shipping. Not part of the admin
/// settings payload, so it is fixed at engine construction.
pub const DEFAULT_TAX_RATE: f64 = 0.13;

/// Pure cart quote computation. Holds the three pricing parameters and
/// derives every amount from the item list it is given; no hidden state,
/// no item-order dependence. Amounts stay unrounded, rounding to two
/// decimals is a presentation concern.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingEngine {
    pub tax_rate: f64,
    pub shipping_cost: f64,
    pub premium_unit_price: f64,
}

/// Derived cart amounts, recomputed as a whole on every cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    pub item_count: i64,
    pub subtotal: f64,
    pub premium_packaging_total: f64,
    pub shipping_cost: f64,
    pub tax_amount: f64,
    pub total: f64,
}

impl PricingEngine {
    pub fn new(tax_rate: f64, shipping_cost: f64, premium_unit_price: f64) -> Self {
        Self {
            tax_rate,
            shipping_cost,
            premium_unit_price,
        }
    }

    pub fn subtotal(&self, items: &[LineItem]) -> f64 {
        items.iter().map(LineItem::line_total).sum()
    }

    pub fn premium_packaging_total(&self, items: &[LineItem]) -> f64 {
        items
            .iter()
            .filter(|item| item.premium_packaging)
            .map(|item| self.premium_unit_price * item.quantity as f64)
            .sum()
    }

    /// Premium packaging is excluded from the taxable base.
    pub fn tax_amount(&self, items: &[LineItem]) -> f64 {
        (self.subtotal(items) + self.shipping_cost) * self.tax_rate
    }

    pub fn total(&self, items: &[LineItem]) -> f64 {
        self.subtotal(items)
            + self.shipping_cost
            + self.premium_packaging_total(items)
            + self.tax_amount(items)
    }

    pub fn totals(&self, items: &[LineItem]) -> CartTotals {
        CartTotals {
            item_count: items.iter().map(|item| item.quantity).sum(),
            subtotal: self.subtotal(items),
            premium_packaging_total: self.premium_packaging_total(items),
            shipping_cost: self.shipping_cost,
            tax_amount: self.tax_amount(items),
            total: self.total(items),
        }
    }
}
