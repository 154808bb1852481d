//! Status Line Component
//!
//! Displays the entry indicator, messages, and fill progress.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    masked: bool,
    message: Option<(&'a str, MessageType)>,
    progress: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(masked: bool) -> Self {
        Self { masked, message: None, progress: None }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn progress(mut self, filled: usize, total: usize) -> Self {
        self.progress = Some((filled, total));
        self
    }
}

fn render_indicator(buf: &mut Buffer, area: Rect, masked: bool) -> u16 {
    let (text, bg) = if masked { (" PIN ", Color::Magenta) } else { (" PIN (shown) ", Color::Yellow) };
    let style = Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD);
    buf.set_string(area.x, area.y, text, style);
    text.len() as u16
}

fn render_progress(buf: &mut Buffer, area: Rect, filled: usize, total: usize) {
    let line = Line::from(vec![
        Span::styled(
            filled.to_string(),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
        Span::styled("/", Style::default().fg(Color::White).bg(Color::DarkGray)),
        Span::styled(total.to_string(), Style::default().fg(Color::Cyan).bg(Color::DarkGray)),
    ]);
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    buf.set_line(x, area.y, &line, width);
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let x = area.x + render_indicator(buf, area, self.masked) + 1;
        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().bg(Color::DarkGray).fg(msg_type.color()));
        }

        if let Some((filled, total)) = self.progress {
            render_progress(buf, area, filled, total);
        }
    }
}

pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_pin() -> Self {
        Self::new(vec![
            ("0-9", "digit"),
            ("bksp", "erase"),
            ("←/→", "move"),
            ("ctrl+u", "clear"),
            ("tab", "show/hide"),
            ("enter", "submit"),
            ("esc", "quit"),
        ])
    }
}

fn build_hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(build_hint_spans(&self.hints));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
