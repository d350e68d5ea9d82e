//! Step 3: add integrations

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{key_hints, render_rule_list};
use crate::ui::wizard::{IntegrationsFocus, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_integrations(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 3. Add Integrations ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Sheet URL entry only takes space while the integration is on
        let url_rows = if self.sheet_enabled { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),        // Description
                Constraint::Length(4),        // Sheets card
                Constraint::Length(url_rows), // Sheet URL + tip
                Constraint::Length(2),        // Disabled integrations
                Constraint::Min(5),           // Tracking rules
                Constraint::Length(1),        // Footer
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Connect your tools to save time and reduce manual work.")
                .style(Style::default().fg(Color::Gray)),
            chunks[0],
        );

        self.render_sheets_card(frame, chunks[1]);
        if self.sheet_enabled {
            self.render_sheet_url(frame, chunks[2]);
        }
        self.render_disabled_integrations(frame, chunks[3]);

        render_rule_list(
            frame,
            chunks[4],
            "What to Track",
            &self.tracking_rules,
            &mut self.tracking_rule_state,
            self.integrations_focus == IntegrationsFocus::Tracking,
        );

        let hints = key_hints(&[
            ("Tab", "focus"),
            ("Space", "toggle"),
            ("a/e/d", "rules"),
            ("Enter", "next"),
            ("Esc", "back"),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[5]);
    }

    fn render_sheets_card(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for integration in self.catalog.integrations.iter().filter(|i| i.enabled) {
            let toggle = if self.sheet_enabled { "[on] " } else { "[off]" };
            let toggle_style = if self.sheet_enabled {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::styled(toggle, toggle_style),
                Span::raw(format!(" {} ", integration.icon.glyph())),
                Span::styled(
                    integration.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {}", integration.description),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let focused = self.integrations_focus == IntegrationsFocus::SheetToggle;
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray })),
        );
        frame.render_widget(card, area);
    }

    fn render_sheet_url(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        self.sheet_url.render(
            frame,
            chunks[0],
            self.integrations_focus == IntegrationsFocus::SheetUrl,
        );

        if let Some(tip) = self
            .catalog
            .integrations
            .iter()
            .find(|i| i.enabled)
            .and_then(|i| i.tip.as_ref())
        {
            frame.render_widget(
                Paragraph::new(tip.clone()).style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        }
    }

    /// Integrations that aren't available yet, rendered dimmed
    fn render_disabled_integrations(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .catalog
            .integrations
            .iter()
            .filter(|i| !i.enabled)
            .map(|integration| {
                Line::from(vec![
                    Span::styled("[--] ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{} {}", integration.icon.glyph(), integration.name),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("  {}", integration.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
