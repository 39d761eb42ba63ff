use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::balances::BalanceSet;
use crate::constants::USD_DECIMAL_PLACES;
use crate::portfolio::valuation::Valuation;
use crate::pricing::PriceSet;

/// Round a USD amount to cents, half away from zero.
pub fn round_usd(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(USD_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Values every held asset in USD.
///
/// Each asset's value is `quantity × price` rounded to cents; an asset
/// without a price is worth zero. The total is the sum of the rounded
/// per-asset values, rounded again. This is total: no input makes it fail.
///
/// # Arguments
///
/// * `balances` - Quantities per symbol.
/// * `prices` - USD unit prices; may omit symbols.
///
pub fn calculate_valuation(balances: &BalanceSet, prices: &PriceSet) -> Valuation {
    let mut valuation = Valuation::default();
    let mut sum = Decimal::ZERO;

    for (symbol, quantity) in balances.iter() {
        let value = match prices.get(symbol) {
            Some(price) => round_usd(quantity.saturating_mul(price)),
            None => {
                debug!("No price for {}. Value treated as ZERO.", symbol);
                Decimal::ZERO
            }
        };
        sum = sum.saturating_add(value);
        valuation.values.insert(symbol.to_string(), value);
    }

    valuation.total = round_usd(sum);
    valuation
}
