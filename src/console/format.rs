use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as dollars with thousands separators, e.g. `$1,234.56`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{sign}${}.{fraction}", group_thousands(integer))
}

/// Inserts a comma between every group of three digits, e.g. `1200` -> `1,200`.
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
