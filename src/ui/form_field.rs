//! Reusable text input widgets for the wizard panels

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

/// Single-line text input with cursor and placeholder
pub struct TextField {
    value: String,
    cursor_pos: usize,
    placeholder: String,
}

impl TextField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn with_value(placeholder: &str, value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor_pos: value.len(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        self.cursor_pos = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// True when the trimmed value is empty
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.value[..self.cursor_pos]
                        .char_indices()
                        .last()
                        .map_or(0, |(i, _)| i);
                    self.value.remove(prev);
                    self.cursor_pos = prev;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_pos < self.value.len() {
                    self.value.remove(self.cursor_pos);
                }
                true
            }
            KeyCode::Left => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = self.value[..self.cursor_pos]
                        .char_indices()
                        .last()
                        .map_or(0, |(i, _)| i);
                }
                true
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    let c = self.value[self.cursor_pos..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.cursor_pos += c;
                }
                true
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                true
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
                true
            }
            _ => false,
        }
    }

    /// Render the field as a single bordered line
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text = self.value.clone();
            if focused {
                if self.cursor_pos < text.len() {
                    text.insert(self.cursor_pos, '|');
                } else {
                    text.push('|');
                }
            }
            Line::from(Span::raw(text))
        };

        let para = Paragraph::new(content)
            .style(Style::default().fg(if focused { Color::White } else { Color::Gray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(para, area);
    }
}

/// Multi-line text editor backed by tui-textarea
pub struct TextEditor {
    textarea: Box<TextArea<'static>>,
    placeholder: String,
}

impl TextEditor {
    pub fn new(placeholder: &str) -> Self {
        Self {
            textarea: Box::new(TextArea::default()),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_text(&mut self, new_value: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(new_value);
    }

    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.trim().is_empty())
    }

    /// Forward a key event to the textarea (consumes Enter as a newline)
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        if self.is_blank() && !focused {
            self.textarea.set_placeholder_text(self.placeholder.clone());
            self.textarea
                .set_placeholder_style(Style::default().fg(Color::DarkGray));
        }

        frame.render_widget(&*self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_handles_chars() {
        let mut field = TextField::new("test");
        assert!(field.handle_key(KeyCode::Char('h')));
        assert!(field.handle_key(KeyCode::Char('i')));
        assert_eq!(field.value(), "hi");
    }

    #[test]
    fn test_text_field_backspace_and_cursor() {
        let mut field = TextField::with_value("test", "abc");
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "ac");

        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value(), "c");
    }

    #[test]
    fn test_text_field_blank_detection() {
        let mut field = TextField::new("test");
        assert!(field.is_blank());
        field.set_value("   ");
        assert!(field.is_blank());
        field.set_value("promo");
        assert!(!field.is_blank());
    }

    #[test]
    fn test_text_editor_roundtrip() {
        let mut editor = TextEditor::new("test");
        assert!(editor.is_blank());
        editor.set_text("line one\nline two");
        assert_eq!(editor.text(), "line one\nline two");
        editor.set_text("replaced");
        assert_eq!(editor.text(), "replaced");
    }
}
