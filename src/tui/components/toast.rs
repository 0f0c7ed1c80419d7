//! Toast notifications
//!
//! Short-lived notice in the bottom-right corner, drawn over everything
//! else. The border color follows the outcome it reports.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Failure,
}

pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + TOAST_TTL,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Failure, message)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Leading glyph plus message
    fn text(&self) -> String {
        match self.kind {
            ToastKind::Info => self.message.clone(),
            ToastKind::Success => format!("✓ {}", self.message),
            ToastKind::Failure => format!("✗ {}", self.message),
        }
    }

    fn accent(&self, theme: &Theme) -> Color {
        match self.kind {
            ToastKind::Info => theme.highlight,
            ToastKind::Success => theme.success,
            ToastKind::Failure => theme.error,
        }
    }

    /// Anchored two cells in from the bottom-right of `area`
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = self.text();
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let rect = Rect::new(x, y, width, height);

        let toast = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(self.accent(theme)))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(Clear, rect);
        f.render_widget(toast, rect);
    }
}
