/// Greedy word-wrap of shaped display text against a pixel width budget.
///
/// Words are accumulated left-to-right with single-space joins; a word that
/// would push the current line past `max_width_px` closes the line and opens
/// a new one. The final open line is always pushed, so even empty input
/// yields one (empty) line. The result is then reversed: the drawing surface
/// stacks lines top-to-bottom while the packed order of right-to-left text
/// reads bottom-to-top, so display order is the reverse of packing order.
///
/// A single word wider than the budget is placed alone on its own line; there
/// is no hyphenation or splitting.
pub fn wrap_lines<M>(display_text: &str, max_width_px: u32, measure: M) -> Vec<String>
where
    M: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in display_text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) <= max_width_px || line.is_empty() {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    lines.push(line);

    lines.reverse();
    lines
}

/// Top edge of a vertically centered block of `line_count` lines.
pub fn vertical_origin(line_count: usize, canvas_height: u32, line_pitch: u32) -> i32 {
    (canvas_height as i32 - line_count as i32 * line_pitch as i32) / 2
}
