//! Step 1: choose campaign type

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::key_hints;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_choose_type(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 1. Choose Campaign Type ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Min(6),    // Cards
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let description = self
            .catalog
            .steps
            .first()
            .map(|s| s.description.clone())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(description).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );

        let selected = self.selected_campaign_type();
        let items: Vec<ListItem> = self
            .catalog
            .campaign_types
            .iter()
            .map(|opt| {
                let chosen = selected == Some(opt.id);
                let marker = if chosen { "(•) " } else { "( ) " };
                let title_style = if chosen {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker),
                        Span::raw(format!("{} ", opt.icon.glyph())),
                        Span::styled(opt.title.clone(), title_style),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", opt.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.type_state);

        let hints = key_hints(&[
            ("↑/↓", "move"),
            ("Space", "select"),
            ("Enter", "next"),
            ("Esc", "quit"),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[2]);
    }

    /// Free-text entry shown when "Other" is the selected type
    pub(crate) fn render_other_text(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 1. Choose Campaign Type ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Text field
                Constraint::Min(0),    // Spacer
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Tell us what kind of campaign you're running.")
                .style(Style::default().fg(Color::Gray)),
            chunks[0],
        );

        self.other_text.render(frame, chunks[1], true);

        let mut hints = vec![("Esc", "back to types")];
        if self.can_proceed() {
            hints.insert(0, ("Enter", "next"));
        }
        frame.render_widget(
            Paragraph::new(key_hints(&hints)).alignment(Alignment::Center),
            chunks[3],
        );
    }
}
