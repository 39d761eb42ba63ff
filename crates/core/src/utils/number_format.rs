use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with exactly `places` decimals, rounding half away from zero.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Formats `value` with `places` decimals and comma thousands separators,
/// e.g. `1234567.891` with 2 places becomes `1,234,567.89`.
pub fn format_grouped(value: Decimal, places: u32) -> String {
    let fixed = format_fixed(value, places);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// USD amount with cents and thousands separators, without the `$` sign.
pub fn format_usd(value: Decimal) -> String {
    format_grouped(value, 2)
}
