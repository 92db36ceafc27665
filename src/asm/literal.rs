//! C-style integer literal parsing: leading `0x`/`0X` is hex, leading `0` is octal,
//! otherwise decimal. An optional leading `-` is allowed. The literal must consume the
//! entire string; trailing whitespace is tolerated.

pub fn parse_integer(text: &str) -> Option<i32> {
    let trimmed_trailing = text.trim_end();
    let (negative, digits) = match trimmed_trailing.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed_trailing),
    };

    let (radix, digits) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    if digits.is_empty() {
        return None;
    }

    // Hex and octal literals span the full 32-bit pattern space (a literal like
    // 0xABCD1234 is a valid bit pattern even though it exceeds i32::MAX); decimal
    // literals stay within the signed range.
    if radix != 10 {
        let bits = u32::from_str_radix(digits, radix).ok()?;
        let value = bits as i32;
        return Some(if negative { value.wrapping_neg() } else { value });
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}
