// src/formatting.rs

/// Formats integer cents as US dollars, e.g. `123456` -> `"$1,234.56"`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = group_thousands(abs / 100);
    format!("{sign}${dollars}.{:02}", abs % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `word` for exactly one, `word + "s"` otherwise.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
