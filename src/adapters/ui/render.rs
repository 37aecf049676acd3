//! Draws a ResultView (and the current selection) to the terminal.

use crate::usecases::view::NO_PLACES_TEXT;
use crate::usecases::{ResultView, UploadClient};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Name,
    Detail,
    Rating,
    Muted,
    Error,
}

impl LineKind {
    fn color(self) -> Color {
        match self {
            LineKind::Heading => Color::Red,
            LineKind::Name => Color::White,
            LineKind::Detail => Color::Grey,
            LineKind::Rating => Color::Yellow,
            LineKind::Muted => Color::DarkGrey,
            LineKind::Error => Color::DarkRed,
        }
    }
}

pub type Line = (LineKind, String);

/// Lines for a stored reply: places panel first, then the error panel.
pub fn view_lines(view: &ResultView) -> Vec<Line> {
    let mut lines = Vec::new();

    if let Some(panel) = &view.places {
        lines.push((LineKind::Heading, "Nearby Places".to_string()));
        if let Some(at) = view.searched_at {
            lines.push((LineKind::Muted, format!("around {}", at)));
        }
        if panel.entries.is_empty() {
            let note = panel.note.as_deref().unwrap_or(NO_PLACES_TEXT);
            lines.push((LineKind::Detail, note.to_string()));
        }
        for (i, entry) in panel.entries.iter().enumerate() {
            lines.push((LineKind::Name, format!("{}. {}", i + 1, entry.name)));
            if !entry.address.is_empty() {
                lines.push((LineKind::Detail, format!("   {}", entry.address)));
            }
            lines.push((LineKind::Rating, format!("   ⭐ {}", entry.rating_label())));
            if !entry.categories.is_empty() {
                lines.push((LineKind::Muted, format!("   {}", entry.categories)));
            }
            if let Some(photo) = &entry.photo {
                lines.push((LineKind::Muted, format!("   {}", photo)));
            }
        }
    }

    if let Some(err) = &view.error {
        lines.push((LineKind::Error, "Error".to_string()));
        lines.push((LineKind::Error, err.message.clone()));
    }

    lines
}

/// One-line summary of what is selected and where.
pub fn status_line(client: &UploadClient) -> String {
    let photo = client
        .preview()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "no photo".to_string());
    let location = client
        .coordinates()
        .map(|c| format!("📍 Location: {}", c))
        .unwrap_or_else(|| "no location".to_string());
    format!("{} | {}", photo, location)
}

pub fn print_lines(lines: &[Line]) {
    let mut out = stdout();
    for (kind, text) in lines {
        let _ = out.execute(SetForegroundColor(kind.color()));
        let _ = out.execute(Print(text));
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print("\r\n"));
    }
    let _ = out.flush();
}

pub fn print_view(view: &ResultView) {
    print_lines(&view_lines(view));
}
