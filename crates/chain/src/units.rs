//! Conversion of raw on-chain integer amounts into decimal quantities.

use rust_decimal::Decimal;
use walli_core::constants::MAX_ASSET_DECIMALS;
use walli_core::errors::BalanceSourceError;

/// Scale a raw base-unit amount (wei, token base units) by `decimals`.
///
/// The result is exact whenever it fits the 96-bit decimal mantissa. Larger
/// amounts drop their least significant fractional digits until they fit.
pub fn scale_raw_amount(raw: &str, decimals: u32) -> Result<Decimal, BalanceSourceError> {
    if decimals > MAX_ASSET_DECIMALS {
        return Err(BalanceSourceError::InvalidResponse(format!(
            "unsupported precision of {} decimals",
            decimals
        )));
    }

    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BalanceSourceError::InvalidResponse(format!(
            "'{}' is not an unsigned integer amount",
            raw
        )));
    }

    let value: u128 = raw.parse().map_err(|_| {
        BalanceSourceError::InvalidResponse(format!("amount '{}' is out of range", raw))
    })?;
    let mut mantissa = i128::try_from(value).map_err(|_| {
        BalanceSourceError::InvalidResponse(format!("amount '{}' is out of range", raw))
    })?;

    let mut scale = decimals;
    loop {
        match Decimal::try_from_i128_with_scale(mantissa, scale) {
            Ok(amount) => return Ok(amount.normalize()),
            Err(_) if scale > 0 => {
                mantissa /= 10;
                scale -= 1;
            }
            Err(_) => {
                return Err(BalanceSourceError::InvalidResponse(format!(
                    "amount '{}' is out of range",
                    raw
                )))
            }
        }
    }
}
