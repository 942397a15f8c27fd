// Small formatting helpers shared by the panels.

pub fn format_combo(combo: u32) -> String {
    format!("{}x", combo)
}

/// Groups thousands with commas, e.g. `12,340`.
pub fn format_score(score: u64) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
