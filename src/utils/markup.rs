use iced::widget::markdown;
use iced::Theme;

/// Parses a free-text field value into renderable markdown items.
pub fn render_markup(source: &str) -> Vec<markdown::Item> {
    markdown::parse(&soft_breaks(source)).collect()
}

/// Shared style for rendered field values. Kept in line with `App::theme`.
pub fn markdown_style() -> markdown::Style {
    markdown::Style::from_palette(Theme::Dark.palette())
}

/// Markdown treats a single newline as a soft break. Chart notes use
/// single newlines as real line breaks, so every intra-paragraph line end
/// gets a hard break appended. Fenced code blocks are left untouched.
pub fn soft_breaks(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut output = String::with_capacity(source.len() + lines.len() * 2);
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        output.push_str(line);

        if i + 1 < lines.len() {
            let breakable = !in_fence
                && !line.trim().is_empty()
                && !lines[i + 1].trim().is_empty()
                && !line.ends_with("  ");
            if breakable {
                output.push_str("  ");
            }
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_newline_becomes_hard_break() {
        assert_eq!(soft_breaks("line one\nline two"), "line one  \nline two");
    }

    #[test]
    fn test_paragraph_break_untouched() {
        assert_eq!(soft_breaks("para one\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn test_existing_hard_break_not_doubled() {
        assert_eq!(soft_breaks("line one  \nline two"), "line one  \nline two");
    }

    #[test]
    fn test_fenced_code_untouched() {
        let source = "```\nlet x = 1;\nlet y = 2;\n```";
        assert_eq!(soft_breaks(source), source);
    }

    #[test]
    fn test_single_line_untouched() {
        assert_eq!(soft_breaks("just one line"), "just one line");
    }

    #[test]
    fn test_render_markup_produces_items() {
        assert!(!render_markup("**Stable**, discharged to quarters.").is_empty());
        assert!(!render_markup("fever\nchills\nfatigue").is_empty());
    }

    #[test]
    fn test_render_markup_empty_input() {
        assert!(render_markup("").is_empty());
    }
}
