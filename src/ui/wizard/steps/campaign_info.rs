//! Step 2: add campaign info (upload or existing product) and review sub-mode

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{key_hints, render_rule_list};
use crate::ui::wizard::{InfoFocus, ReviewFocus, WizardScreen};

impl WizardScreen {
    pub(crate) fn render_campaign_info(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 2. Add Campaign Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Length(1), // Spacer
                Constraint::Min(8),    // Tab body
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let on_new_tab = self.info_focus.on_new_product_tab();
        let tab_style = |active: bool| {
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" New Product ", tab_style(on_new_tab)),
                Span::raw("  "),
                Span::styled(" Existing Product ", tab_style(!on_new_tab)),
            ])),
            chunks[0],
        );

        if on_new_tab {
            self.render_upload_tab(frame, chunks[2]);
        } else {
            self.render_existing_tab(frame, chunks[2]);
        }

        let hints = if on_new_tab {
            key_hints(&[
                ("Tab", "focus"),
                ("u", "upload file"),
                ("d", "remove"),
                ("Enter", "scan"),
                ("Esc", "back"),
            ])
        } else {
            key_hints(&[("Tab", "focus"), ("Enter", "use product"), ("Esc", "back")])
        };
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[3]);
    }

    fn render_upload_tab(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Product URL
                Constraint::Min(5),    // Upload list
                Constraint::Length(1), // Scan hint
            ])
            .split(area);

        self.product_url
            .render(frame, chunks[0], self.info_focus == InfoFocus::ProductUrl);

        let items: Vec<ListItem> = if self.uploads.is_empty() {
            vec![ListItem::new(Span::styled(
                "(no files yet, press 'u' to upload one)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.uploads
                .iter()
                .map(|file| {
                    let status = if file.uploading {
                        Span::styled(
                            format!("  {}%", file.progress),
                            Style::default().fg(Color::Yellow),
                        )
                    } else {
                        Span::styled("  done", Style::default().fg(Color::Green))
                    };
                    ListItem::new(Line::from(vec![Span::raw(file.name.clone()), status]))
                })
                .collect()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Files ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(
                        if self.info_focus == InfoFocus::FileList {
                            Color::Cyan
                        } else {
                            Color::Gray
                        },
                    )),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.upload_state);

        // Scan is dimmed until at least one upload has finished
        let scan_line = if self.scan_ready() {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" Scan & Continue"),
            ])
        } else {
            Line::from(Span::styled(
                "Scan & Continue (upload a file first)",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(
            Paragraph::new(scan_line).alignment(Alignment::Center),
            chunks[2],
        );
    }

    fn render_existing_tab(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter
                Constraint::Min(5),    // Product list
            ])
            .split(area);

        self.existing_filter.render(
            frame,
            chunks[0],
            self.info_focus == InfoFocus::ExistingFilter,
        );

        let items: Vec<ListItem> = self
            .filtered_existing_products()
            .iter()
            .map(|product| {
                ListItem::new(Line::from(vec![
                    Span::raw(product.name.clone()),
                    Span::styled(
                        format!("  created {}", product.created),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Products ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(
                        if self.info_focus == InfoFocus::ExistingList {
                            Color::Cyan
                        } else {
                            Color::Gray
                        },
                    )),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.existing_state);
    }

    /// Review sub-mode: edit the extracted product info and campaign rules
    pub(crate) fn render_review(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" 2. Review Campaign Info ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Product name
                Constraint::Length(6), // Description
                Constraint::Min(5),    // Campaign rules
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        self.product_name
            .render(frame, chunks[0], self.review_focus == ReviewFocus::ProductName);
        self.product_description.render(
            frame,
            chunks[1],
            self.review_focus == ReviewFocus::Description,
        );
        render_rule_list(
            frame,
            chunks[2],
            "Campaign Rules",
            &self.campaign_rules,
            &mut self.campaign_rule_state,
            self.review_focus == ReviewFocus::Rules,
        );

        let hints = key_hints(&[
            ("Tab", "focus"),
            ("a/e/d", "rules"),
            ("Enter", "next"),
            ("Esc", "back to upload"),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), chunks[3]);
    }
}
