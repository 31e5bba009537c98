//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use skyadmin_app::state::StatusLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Key hint style ("Ctrl+S", "Esc")
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Style of a status line message by its level
pub fn status_level(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default().fg(palette::STATUS_BLUE),
        StatusLevel::Success => Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        StatusLevel::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_status_levels_are_distinct() {
        assert_eq!(status_level(StatusLevel::Error).fg, Some(palette::STATUS_RED));
        assert_eq!(
            status_level(StatusLevel::Success).fg,
            Some(palette::STATUS_GREEN)
        );
        assert_ne!(
            status_level(StatusLevel::Info),
            status_level(StatusLevel::Error)
        );
    }
}
