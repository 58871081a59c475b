//! Terminal implementation of the engine's renderer contract.
//!
//! Words are drawn on the alternate screen, vertically centered, with
//! the ORP grapheme bold in the theme's anchor color. Padding is drawn
//! as real spaces, so centering the fixed-width line keeps the focus
//! column perfectly still from word to word.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use unicode_width::UnicodeWidthStr;

use crate::engine::config::PIXELS_PER_CHAR;
use crate::engine::layout::FormattedUnit;
use crate::engine::renderer::{Renderer, RendererError};
use crate::ui::theme::Theme;

pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    viewport_cols: Option<u16>,
}

impl TerminalRenderer {
    /// Enters raw mode and the alternate screen. Both are restored on
    /// drop, including the panic path.
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme,
            viewport_cols: None,
        })
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

static PANIC_HOOK_SET: std::sync::Once = std::sync::Once::new();

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            previous(panic_info);
        }));
    });
}

/// The fixed-width line for one unit: padding, prefix, anchor-colored
/// focus grapheme, suffix, padding.
fn word_line(unit: &FormattedUnit, theme: &Theme) -> Line<'static> {
    let body = Style::default().fg(theme.text);
    let mut spans = vec![Span::styled(" ".repeat(unit.left_pad), body)];
    if !unit.prefix.is_empty() {
        spans.push(Span::styled(unit.prefix.clone(), body));
    }
    if !unit.focus.is_empty() {
        spans.push(Span::styled(
            unit.focus.clone(),
            Style::default()
                .fg(theme.anchor)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if !unit.suffix.is_empty() {
        spans.push(Span::styled(unit.suffix.clone(), body));
    }
    spans.push(Span::styled(" ".repeat(unit.right_pad), body));
    Line::from(spans)
}

/// Center a `width`-column band inside `area`.
fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

impl Renderer for TerminalRenderer {
    fn set_viewport(&mut self, width_px: u32, _height_px: u32) -> Result<(), RendererError> {
        let cols = (width_px / PIXELS_PER_CHAR).max(1) as u16;
        self.viewport_cols = Some(cols);
        self.terminal
            .clear()
            .map_err(|e| RendererError::Viewport(e.to_string()))
    }

    fn show(&mut self, unit: &FormattedUnit, duration_ms: u64) -> Result<(), RendererError> {
        let theme = self.theme;
        // Wide graphemes (CJK, emoji) occupy two columns, so the band is
        // sized from display width, not grapheme count.
        let line_cols = (unit.left_pad
            + UnicodeWidthStr::width(unit.text().as_str())
            + unit.right_pad) as u16;
        let band = self.viewport_cols.unwrap_or(0).max(line_cols);
        let line = word_line(unit, &theme);

        self.terminal
            .draw(|frame| {
                let area = frame.area();
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Percentage(45),
                        Constraint::Length(1),
                        Constraint::Min(0),
                        Constraint::Length(1),
                    ])
                    .split(area);

                let word_area = centered_columns(rows[1], band);
                frame.render_widget(
                    Paragraph::new(line)
                        .alignment(Alignment::Center)
                        .style(Style::default().bg(theme.background)),
                    word_area,
                );

                let status = Line::from(Span::styled(
                    format!("{duration_ms} ms/word"),
                    Style::default().fg(theme.dimmed),
                ));
                frame.render_widget(
                    Paragraph::new(status).alignment(Alignment::Center),
                    rows[3],
                );
            })
            .map_err(|e| RendererError::Display(e.to_string()))?;
        Ok(())
    }

    fn reset_viewport(&mut self) -> Result<(), RendererError> {
        self.viewport_cols = None;
        self.terminal
            .clear()
            .map_err(|e| RendererError::Viewport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_unit() -> FormattedUnit {
        FormattedUnit {
            left_pad: 3,
            prefix: "re".to_string(),
            focus: "a".to_string(),
            suffix: "ding".to_string(),
            right_pad: 2,
        }
    }

    #[test]
    fn test_word_line_span_count() {
        let line = word_line(&sample_unit(), &Theme::dark());
        // left pad, prefix, focus, suffix, right pad
        assert_eq!(line.spans.len(), 5);
    }

    #[test]
    fn test_word_line_skips_empty_fragments() {
        let unit = FormattedUnit {
            left_pad: 4,
            prefix: String::new(),
            focus: "I".to_string(),
            suffix: String::new(),
            right_pad: 4,
        };
        let line = word_line(&unit, &Theme::light());
        // left pad, focus, right pad
        assert_eq!(line.spans.len(), 3);
    }

    #[test]
    fn test_word_line_width_matches_unit() {
        let unit = sample_unit();
        let line = word_line(&unit, &Theme::light());
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, unit.line());
        assert_eq!(rendered.chars().count(), unit.width());
    }

    #[test]
    fn test_centered_columns_centers() {
        let area = Rect::new(0, 0, 100, 1);
        let band = centered_columns(area, 20);
        assert_eq!(band.x, 40);
        assert_eq!(band.width, 20);
    }

    #[test]
    fn test_centered_columns_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 1);
        let band = centered_columns(area, 50);
        assert_eq!(band.x, 0);
        assert_eq!(band.width, 10);
    }
}
