/// Render ranked instances as `"<text>: <count>"` lines.
pub fn render_lines(ranked: &[(String, u64)]) -> Vec<String> {
    ranked
        .iter()
        .map(|(text, count)| format!("{text}: {count}"))
        .collect()
}
