//! Segmented PIN dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::layout::{centered_rect_fixed, create_popup_block, fill_background};
use crate::pin::surface::Field;

const CELL_WIDTH: u16 = 3;
const CELL_GAP: u16 = 1;
const MIN_DIALOG_WIDTH: u16 = 32;
const DIALOG_HEIGHT: u16 = 7;
const PROMPT_ROW: u16 = 0;
const CELLS_ROW: u16 = 2;
const ERROR_ROW: u16 = 4;

pub struct PinDialog<'a> {
    title: &'a str,
    prompt: &'a str,
    fields: &'a [Field],
    focused: Option<usize>,
    masked: bool,
    error: Option<&'a str>,
}

impl<'a> PinDialog<'a> {
    pub fn new(title: &'a str, prompt: &'a str, fields: &'a [Field]) -> Self {
        Self { title, prompt, fields, focused: None, masked: true, error: None }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn error(mut self, err: &'a str) -> Self {
        self.error = Some(err);
        self
    }

    fn cells_width(&self) -> u16 {
        let count = self.fields.len() as u16;
        (count * CELL_WIDTH + count.saturating_sub(1) * CELL_GAP).max(1)
    }
}

impl Widget for PinDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells_width = self.cells_width();
        let dialog_width = (cells_width + 4).max(MIN_DIALOG_WIDTH);
        let popup_area = centered_rect_fixed(dialog_width, DIALOG_HEIGHT, area);
        Clear.render(popup_area, buf);

        let block = create_popup_block(self.title, Color::Magenta);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        if inner.is_empty() {
            return;
        }

        if let Some(y) = row(inner, PROMPT_ROW) {
            buf.set_stringn(inner.x, y, self.prompt, inner.width as usize, Style::default().fg(Color::White));
        }

        if let Some(y) = row(inner, CELLS_ROW) {
            let cells_x = inner.x + inner.width.saturating_sub(cells_width) / 2;
            for (index, field) in self.fields.iter().enumerate() {
                let x = cells_x + index as u16 * (CELL_WIDTH + CELL_GAP);
                let focused = self.focused == Some(index);
                render_cell(buf, x, y, field, focused, self.masked);
            }
        }

        if let (Some(err), Some(y)) = (self.error, row(inner, ERROR_ROW)) {
            buf.set_stringn(inner.x, y, err, inner.width as usize, Style::default().fg(Color::Red));
        }
    }
}

/// Absolute y of `offset` inside `inner`, if that row is on screen.
fn row(inner: Rect, offset: u16) -> Option<u16> {
    let y = inner.y.checked_add(offset)?;
    (y < inner.bottom()).then_some(y)
}

fn cell_symbol(field: &Field, masked: bool) -> &str {
    match (field.is_empty(), masked) {
        (true, _) => "_",
        (false, true) => "•",
        (false, false) => field.value(),
    }
}

fn render_cell(buf: &mut Buffer, x: u16, y: u16, field: &Field, focused: bool, masked: bool) {
    let (bg, fg) = if focused { (Color::Magenta, Color::Black) } else { (Color::DarkGray, Color::Yellow) };
    fill_background(buf, x, y, CELL_WIDTH, bg);

    let mut style = Style::default().fg(fg).bg(bg);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    buf.set_string(x + CELL_WIDTH / 2, y, cell_symbol(field, masked), style);
}
