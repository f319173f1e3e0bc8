use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Focus;
use crate::quiz::RenderedQuestion;
use crate::storage::Storage;

// Borders plus one column of padding on each side.
const HORIZONTAL_CHROME: u16 = 4;

pub fn render<C: Storage, L: Storage>(frame: &mut Frame, area: Rect, app: &App<C, L>) {
    let focused = app.focus() == Focus::Questions;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }))
        .title(" Questions ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if app.is_loading() {
        let widget = Paragraph::new("Loading questions...")
            .alignment(Alignment::Center)
            .fg(Color::Yellow)
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let sheet = app.sheet();
    if sheet.is_empty() {
        let widget = Paragraph::new("No questions loaded.")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray)
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let width = area.width.saturating_sub(HORIZONTAL_CHROME) as usize;
    let blocks: Vec<Vec<Line>> = sheet
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            question_lines(
                index,
                question,
                app.selections().checked(index),
                focused && index == app.current_question(),
                width,
            )
        })
        .collect();

    // Every line is pre-wrapped, so line counts are row counts.
    let current = app.current_question();
    let top: usize = blocks.iter().take(current).map(Vec::len).sum();
    let bottom = top + blocks.get(current).map_or(0, Vec::len);
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = bottom.saturating_sub(inner_height).min(top);

    let lines: Vec<Line> = blocks.into_iter().flatten().collect();
    let widget = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn question_lines(
    index: usize,
    question: &RenderedQuestion,
    checked: Option<usize>,
    highlighted: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let title_style = if highlighted {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if highlighted { "> " } else { "  " };

    let mut lines = hanging_lines(
        format!("{}{:2}. ", marker, index + 1),
        &question.text,
        title_style,
        width,
    );

    let meta = [question.category.as_deref(), question.difficulty.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    if !meta.is_empty() {
        lines.extend(hanging_lines(
            "      ".to_string(),
            &meta,
            Style::default().fg(Color::DarkGray),
            width,
        ));
    }

    for (option, label) in question.options.iter().enumerate() {
        let is_checked = checked == Some(option);
        let radio = if is_checked { "(•)" } else { "( )" };
        let style = if is_checked {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.extend(hanging_lines(
            format!("      {} {}. ", radio, option + 1),
            label,
            style,
            width,
        ));
    }
    lines.push(Line::from(""));

    lines
}

/// `prefix` then `text` wrapped to `width`, continuation rows indented to
/// line up under the first word.
fn hanging_lines(prefix: String, text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    let indent = Span::raw(prefix.as_str()).width();
    let rows = wrap(text, width.saturating_sub(indent));

    rows.into_iter()
        .enumerate()
        .map(|(row, content)| {
            let lead = if row == 0 {
                prefix.clone()
            } else {
                " ".repeat(indent)
            };
            Line::from(vec![
                Span::styled(lead, style),
                Span::styled(content, style),
            ])
        })
        .collect()
}

/// Greedy word wrap. Words wider than a row are split between characters.
/// Always returns at least one row.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();

        if row_width > 0 && row_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if row_width > 0 {
            row.push(' ');
            row_width += 1;
        }

        if word_width <= width {
            row.push_str(word);
            row_width += word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = Span::raw(c.to_string()).width();
            if row_width > 0 && row_width + char_width > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("which planet is the red one", 12),
            vec!["which planet", "is the red", "one"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_keeps_one_row() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
