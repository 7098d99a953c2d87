use std::borrow::Cow;

/// Formats an integer with comma thousands separators: `1250` -> `"1,250"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with separators: `125000` -> `"$125,000"`.
pub fn currency(value: u64) -> String {
    format!("${}", group_thousands(value))
}

/// Formats a raw amount as currency, leaving text that is already
/// formatted (`$` prefix) untouched. Unparseable input is returned as is.
pub fn ensure_currency(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim();
    if trimmed.starts_with('$') {
        return Cow::Borrowed(value);
    }
    match trimmed.replace(',', "").parse::<u64>() {
        Ok(n) => Cow::Owned(currency(n)),
        Err(_) => Cow::Borrowed(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(125000), "125,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn currency_prefix() {
        assert_eq!(currency(28000), "$28,000");
        assert_eq!(currency(5), "$5");
    }

    #[test]
    fn ensure_currency_is_idempotent() {
        let once = ensure_currency("125000").into_owned();
        assert_eq!(once, "$125,000");
        let twice = ensure_currency(&once);
        assert!(matches!(twice, Cow::Borrowed(_)));
        assert_eq!(twice, "$125,000");
    }

    #[test]
    fn ensure_currency_leaves_garbage_alone() {
        assert_eq!(ensure_currency("n/a"), "n/a");
    }
}
