//! en-US style number formatting for amounts and rates.

/// Formats an amount with thousands separators and between 2 and 4
/// fraction digits, e.g. `1234.5` → `"1,234.50"`, `0.12345` → `"0.1235"`.
pub fn format_amount(value: f64) -> String {
    format_with(value, 2, 4)
}

/// Formats a unit rate with exactly 4 fraction digits, e.g. `0.85` → `"0.8500"`.
pub fn format_rate(value: f64) -> String {
    format_with(value, 4, 4)
}

fn format_with(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let (int_part, frac_part) = round_shortest(value.abs(), max_fraction);

    let mut frac = frac_part.trim_end_matches('0');
    if frac.len() < min_fraction {
        frac = &frac_part[..min_fraction];
    }

    let mut out = String::with_capacity(int_part.len() * 4 / 3 + frac_part.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Rounds the shortest decimal form of `value` to exactly `digits` fraction
/// digits, halves away from zero, and returns the integer and fraction
/// digits. `1.00005` becomes `("1", "0001")`.
fn round_shortest(value: f64, digits: usize) -> (String, String) {
    // f64's Display is the shortest round-tripping form and never uses an
    // exponent.
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if frac_part.len() <= digits {
        return (int_part.to_string(), format!("{:0<width$}", frac_part, width = digits));
    }

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part[..digits].bytes()).collect();
    if frac_part.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let text = |bytes: &[u8]| bytes.iter().copied().map(char::from).collect::<String>();
    (text(&kept[..split]), text(&kept[split..]))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
