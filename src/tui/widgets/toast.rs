//! Toast overlay widget
//!
//! Renders one surface element as a centered, rounded box with white text
//! on black. A fading element is drawn dimmed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::toast::surface::{Element, Rgb, TextAlign};
use crate::tui::layout::centered_rect_fixed;

/// Narrowest toast box, in columns
pub const MIN_WIDTH_COLS: u16 = 20;

/// Horizontal padding inside the border, per side
const PADDING_COLS: u16 = 2;

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Where an element is drawn within `area`
pub fn toast_area(element: &Element, area: Rect) -> Rect {
    let text_width = element
        .lines
        .iter()
        .map(|l| Line::from(l.as_str()).width())
        .max()
        .unwrap_or(0);
    let width = (text_width as u16)
        .saturating_add(2 * PADDING_COLS + 2)
        .max(MIN_WIDTH_COLS);
    let height = (element.lines.len() as u16).saturating_add(2);

    centered_rect_fixed(width, height, area)
}

/// Widget for rendering a toast element
pub struct ToastWidget<'a> {
    element: &'a Element,
}

impl<'a> ToastWidget<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = &self.element.style;

        let mut text_style = Style::default()
            .fg(color(style.color))
            .bg(color(style.background));
        if style.is_fading() {
            text_style = text_style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
        }

        let alignment = match style.text_align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        };

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(text_style)
            .style(text_style);

        let lines: Vec<Line> = self
            .element
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        Paragraph::new(lines)
            .alignment(alignment)
            .style(text_style)
            .block(block)
            .render(area, buf);
    }
}
