//! Rupee formatting for calculator output.

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Short form used on slider labels: `₹1.2Cr`, `₹4.5L`, `₹85K`.
pub fn format_compact_inr(amount: f64) -> String {
    if amount >= CRORE {
        format!("₹{:.1}Cr", amount / CRORE)
    } else if amount >= LAKH {
        format!("₹{:.1}L", amount / LAKH)
    } else {
        format!("₹{:.0}K", amount / 1000.0)
    }
}

/// Whole rupees with Indian digit grouping (`₹1,04,13,879`).
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{sign}₹{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_units_follow_lakh_and_crore_thresholds() {
        assert_eq!(format_compact_inr(50_000_000.0), "₹5.0Cr");
        assert_eq!(format_compact_inr(4_339_116.0), "₹43.4L");
        assert_eq!(format_compact_inr(43_391.0), "₹43K");
    }

    #[test]
    fn groups_digits_the_indian_way() {
        assert_eq!(format_inr(0.4), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(43_391.16), "₹43,391");
        assert_eq!(format_inr(10_413_878.8), "₹1,04,13,879");
        assert_eq!(format_inr(-125_000.0), "-₹1,25,000");
    }
}
