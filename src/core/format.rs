/// Compact rupee amount: `₹1.25Cr`, `₹4.50L`, `₹12.00K`, `₹950`.
/// Negative amounts never reach a unit and print whole, as `₹-300000`.
pub fn format_compact_currency(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("₹{:.2}Cr", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("₹{:.2}L", amount / 100_000.0)
    } else if amount >= 1_000.0 {
        format!("₹{:.2}K", amount / 1_000.0)
    } else {
        format!("₹{amount:.0}")
    }
}

/// Rounds to a whole number and groups digits the Indian way: the last
/// three together, then pairs (`12,34,567`).
pub fn format_indian_number(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{sign}{},{last_three}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_currency_picks_unit_by_magnitude() {
        assert_eq!(format_compact_currency(25_000_000.0), "₹2.50Cr");
        assert_eq!(format_compact_currency(420_000.0), "₹4.20L");
        assert_eq!(format_compact_currency(12_000.0), "₹12.00K");
        assert_eq!(format_compact_currency(950.4), "₹950");
        assert_eq!(format_compact_currency(-300_000.0), "₹-300000");
    }

    #[test]
    fn indian_grouping_uses_pairs_after_thousands() {
        assert_eq!(format_indian_number(0.0), "0");
        assert_eq!(format_indian_number(999.0), "999");
        assert_eq!(format_indian_number(1_000.0), "1,000");
        assert_eq!(format_indian_number(43_391.4), "43,391");
        assert_eq!(format_indian_number(150_000.0), "1,50,000");
        assert_eq!(format_indian_number(5_000_000.0), "50,00,000");
        assert_eq!(format_indian_number(123_456_789.0), "12,34,56,789");
        assert_eq!(format_indian_number(-12_345.0), "-12,345");
    }
}
