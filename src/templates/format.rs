// templates/format.rs

/// Whole rupees with Indian digit grouping: 1,20,000 / 12,34,56,789.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{sign}{},{last3}", groups.join(","))
}

/// Plain number for odometer readings; no decimals for whole values.
pub fn format_plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
