use crate::frequency::RankedEntry;

pub const BAR_GLYPH: char = '|';
const COLUMN_GUTTER: &str = "    ";

/// Power of ten that every count is divided by before drawing its bar,
/// chosen from the top entry so the longest bar stays under 100 glyphs.
pub fn normalization_exponent(ranked: &[RankedEntry]) -> u32 {
    match ranked.first() {
        Some(top) if top.count > 0 => top.count.ilog10().saturating_sub(1),
        _ => 0,
    }
}

/// Bar of `count / 10^exponent` glyphs; empty when the divisor overflows.
pub fn render_bar(count: usize, exponent: u32) -> String {
    let len = match 10usize.checked_pow(exponent) {
        Some(divisor) => count / divisor,
        None => 0,
    };
    std::iter::repeat_n(BAR_GLYPH, len).collect()
}

/// One line per entry: `token: `, then optionally bars aligned on the
/// longest token, then optionally the count.
pub fn render(ranked: &[RankedEntry], with_histogram: bool, with_count: bool) -> Vec<String> {
    let exponent = normalization_exponent(ranked);
    let longest = ranked
        .iter()
        .map(|e| e.token.chars().count())
        .max()
        .unwrap_or(0);

    ranked
        .iter()
        .map(|entry| {
            let mut line = format!("{}: ", entry.token);
            if with_histogram {
                let pad = longest - entry.token.chars().count() + 1;
                line.push_str(&" ".repeat(pad));
                line.push_str(&render_bar(entry.count, exponent));
            }
            if with_count {
                line.push(' ');
                line.push_str(&entry.count.to_string());
            }
            line
        })
        .collect()
}

/// Lay two blocks of lines out as columns.
pub fn side_by_side(left: &[String], right: &[String]) -> Vec<String> {
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|i| {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = right.get(i).map(String::as_str).unwrap_or("");
            let pad = width - l.chars().count();
            let line = format!("{l}{}{COLUMN_GUTTER}{r}", " ".repeat(pad));
            line.trim_end().to_string()
        })
        .collect()
}
