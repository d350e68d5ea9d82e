//! Per-step panel rendering for the wizard

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::ui::centered_rect;
use crate::ui::wizard::{Rule, WizardScreen};

mod campaign_info;
mod campaign_type;
mod email_setup;
mod integrations;

impl WizardScreen {
    /// Left-hand progress rail showing the five logical sub-steps
    pub(crate) fn render_progress_rail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Cheerful",
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Create Campaign",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Step {}/4", self.current_step()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        for sub in self.sub_steps() {
            let (marker, style) = if sub.active {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if sub.completed {
                ("✓ ", Style::default().fg(Color::Green))
            } else {
                ("○ ", Style::default().fg(Color::DarkGray))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{}. {}", sub.id, sub.title), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    /// Centered modal shown while a simulated operation is in flight
    pub(crate) fn render_loading_overlay(&self, frame: &mut Frame, message: &str) {
        let area = centered_rect(40, 20, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This usually takes a few seconds",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, inner);
    }

    /// Inline rule editor modal
    pub(crate) fn render_rule_editor(&self, frame: &mut Frame) {
        let Some(editor) = self.rule_editor.as_ref() else {
            return;
        };

        let area = centered_rect(60, 20, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Edit Rule ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(inner);

        editor.field.render(frame, chunks[0], true);
        frame.render_widget(
            Paragraph::new(key_hints(&[("Enter", "save"), ("Esc", "cancel")]))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}

/// Numbered rule list with a selection highlight
pub(crate) fn render_rule_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rules: &[Rule],
    state: &mut ListState,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let items: Vec<ListItem> = if rules.is_empty() {
        vec![ListItem::new(Span::styled(
            "(no rules yet, press 'a' to add one)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        rules
            .iter()
            .map(|rule| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", rule.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(rule.text.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, state);
}

/// Footer line of key hints, "Key action" pairs
pub(crate) fn key_hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }
    Line::from(spans)
}
