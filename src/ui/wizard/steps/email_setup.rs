//! Step 4: email setup and the generated draft sub-mode

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::key_hints;
use crate::ui::wizard::{DraftFocus, SetupFocus, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_email_setup(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 4. Email Setup ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Length(6), // Providers
                Constraint::Length(3), // Search
                Constraint::Min(4),    // Connected emails
                Constraint::Length(1), // Generate hint
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let description = self
            .catalog
            .steps
            .get(4)
            .map(|s| s.description.clone())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(description).style(Style::default().fg(Color::Gray)),
            chunks[0],
        );

        self.render_providers(frame, chunks[1]);

        self.email_search
            .render(frame, chunks[2], self.setup_focus == SetupFocus::Search);

        self.render_connected_emails(frame, chunks[3]);

        // Generate is dimmed while no sender is connected
        let generate_line = if self.connected_emails.is_empty() {
            Line::from(Span::styled(
                "Generate Email (connect an email first)",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" Generate Email"),
            ])
        };
        frame.render_widget(
            Paragraph::new(generate_line).alignment(Alignment::Center),
            chunks[4],
        );

        let hints = key_hints(&[
            ("Tab", "focus"),
            ("d", "remove email"),
            ("Esc", "back"),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[5]);
    }

    fn render_providers(&mut self, frame: &mut Frame, area: Rect) {
        let chosen = self.selected_provider_index();
        let items: Vec<ListItem> = self
            .catalog
            .email_providers
            .iter()
            .enumerate()
            .map(|(i, provider)| {
                let marker = if i == chosen { "(•) " } else { "( ) " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(
                            provider.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", provider.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Provider ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(
                        if self.setup_focus == SetupFocus::Providers {
                            Color::Cyan
                        } else {
                            Color::Gray
                        },
                    )),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.provider_state);
    }

    fn render_connected_emails(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.connected_emails.is_empty() {
            vec![ListItem::new(Span::styled(
                "(no connected emails)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.connected_emails
                .iter()
                .map(|email| {
                    ListItem::new(Line::from(vec![
                        Span::styled("✉ ", Style::default().fg(Color::Cyan)),
                        Span::raw(email.address.clone()),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Connected Emails ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(
                        if self.setup_focus == SetupFocus::Connected {
                            Color::Cyan
                        } else {
                            Color::Gray
                        },
                    )),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.email_state);
    }

    /// Draft sub-mode: edit the generated subject and body, then launch
    pub(crate) fn render_email_draft(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 4. Review Email Draft ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Subject
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        self.email_subject
            .render(frame, chunks[0], self.draft_focus == DraftFocus::Subject);
        self.email_body
            .render(frame, chunks[1], self.draft_focus == DraftFocus::Body);

        let hints = key_hints(&[
            ("Tab", "focus"),
            ("Ctrl+L", "launch campaign"),
            ("Esc", "back to setup"),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[2]);
    }
}
