/// Parsing for the `tabindex` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabIndex;

impl TabIndex {
    /// Parse a raw attribute value with the rules of a JavaScript `Number()`
    /// conversion.
    ///
    /// An empty value reads as `0`. Decimals truncate toward zero and the
    /// result saturates at the `i32` bounds, so `Infinity` is `i32::MAX`.
    /// Unsigned `0x`, `0o` and `0b` literals are accepted. Returns `None`
    /// when the value is not a number.
    pub fn parse(value: &str) -> Option<i32> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Some(0);
        }
        if let Ok(n) = trimmed.parse::<i32>() {
            return Some(n);
        }
        let number = match trimmed {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ => match Self::radix_prefix(trimmed) {
                Some((radix, digits)) => Self::parse_radix(digits, radix)?,
                None => Self::parse_decimal(trimmed)?,
            },
        };
        Some(number.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
    }

    fn radix_prefix(value: &str) -> Option<(u32, &str)> {
        let radix = match value.get(..2)? {
            "0x" | "0X" => 16,
            "0o" | "0O" => 8,
            "0b" | "0B" => 2,
            _ => return None,
        };
        Some((radix, &value[2..]))
    }

    fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
        if digits.is_empty() {
            return None;
        }
        digits.chars().try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
    }

    // Rust's float grammar also takes `inf` and `nan`, which are not numbers here
    fn parse_decimal(value: &str) -> Option<f64> {
        if value
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
        {
            return None;
        }
        value.parse::<f64>().ok()
    }

    /// Ordering hint used when sorting the tabbable set: positive values come
    /// first, everything else keeps document order.
    pub fn sort_key(value: Option<&str>) -> (u8, i32) {
        match value.and_then(Self::parse) {
            Some(n) if n > 0 => (0, n),
            _ => (1, 0),
        }
    }
}
