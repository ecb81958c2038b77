use mev_lexer::Span;

/// Render an error against the expression text, rustc style:
///
/// ```text
/// error: unexpected token ')'
///  --> line 1, col 5
///   |
/// 1 | 1 + )
///   |     ^
/// ```
///
/// Without a span only the message line is produced. Spans that fall outside
/// `source` or off a char boundary are clamped.
pub fn render_snippet(message: &str, span: Option<Span>, source: &str) -> String {
    let mut out = format!("error: {message}");
    let Some(span) = span else {
        return out;
    };

    let start = floor_boundary(source, span.start);
    let end = floor_boundary(source, span.end.max(start));

    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let line_no = source[..line_start].matches('\n').count() + 1;
    let line = source[line_start..line_end].trim_end_matches('\r');

    let col = source[line_start..start].chars().count() + 1;
    // Underline stays on the first line of a multi-line span
    let width = source[start..end.min(line_end)].chars().count().max(1);

    let gutter = line_no.to_string();
    let pad = " ".repeat(gutter.len());

    out.push_str(&format!("\n{pad}--> line {line_no}, col {col}"));
    out.push_str(&format!("\n{pad} |"));
    out.push_str(&format!("\n{gutter} | {line}"));
    out.push_str(&format!(
        "\n{pad} | {}{}",
        " ".repeat(col - 1),
        underline(width)
    ));
    out
}

fn underline(width: usize) -> String {
    let mut mark = String::from("^");
    mark.push_str(&"~".repeat(width - 1));
    mark
}

fn floor_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
