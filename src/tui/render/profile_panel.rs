use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Up to two initials from a display name ("Reige J Bongo" → "RJ")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Render the profile panel (avatar initials, name, e-mail)
pub fn render_profile_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.panel;
    let profile = &app.config.profile;
    // Two cells of left margin, one for the border
    let room = (area.width as usize).saturating_sub(3);

    let mut lines = vec![Line::default()];
    let avatar = initials(&profile.name);
    if !avatar.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  ( {} )", avatar),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", unicode::truncate_to_width(&profile.name, room)),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    if !profile.email.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", unicode::truncate_to_width(&profile.email, room)),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
