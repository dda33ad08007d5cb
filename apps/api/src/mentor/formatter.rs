//! Bullet formatter — reshapes raw model text into headings and bullet lines.

/// Lines starting with "month"/"step" (any case) or ending in ':' become bold headings
/// preceded by a blank line; every other non-blank line becomes a bullet.
pub fn format_as_bullets(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if is_heading(line) {
                format!("\n\n**{line}**")
            } else {
                format!("• {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_heading(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("month") || lower.starts_with("step") || line.ends_with(':')
}
