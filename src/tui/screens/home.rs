//! Home screen: the top-level menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::tui::app::HomeAction;

/// Menu entries: label, hint, and what Enter does.
const MENU: &[(&str, &str, HomeAction)] = &[
    (
        "Wizard",
        "walk the cycle step by step",
        HomeAction::Wizard,
    ),
    (
        "Phases",
        "browse every phase in full",
        HomeAction::Phases,
    ),
    (
        "Stakeholders",
        "influence / interest grid",
        HomeAction::Stakeholders,
    ),
];

pub struct HomeScreen {
    /// Shown under the title, e.g. "12 of 90 steps complete".
    progress: String,
    selected: usize,
}

impl HomeScreen {
    pub fn new(progress: String) -> Self {
        Self {
            progress,
            selected: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < MENU.len() {
            self.selected += 1;
        }
    }

    pub fn select(&self) -> Option<HomeAction> {
        MENU.get(self.selected).map(|(_, _, action)| *action)
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(4), // title + progress
            Constraint::Min(0),    // menu
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let title = Paragraph::new(vec![
            Line::from(Span::styled("ADM Guide", highlight)),
            Line::from(Span::styled(self.progress.as_str(), muted)),
        ])
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MENU
            .iter()
            .enumerate()
            .map(|(i, (label, hint, _))| {
                let style = if i == self.selected { highlight } else { normal };
                let pointer = if i == self.selected { "› " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(format!("{label:<14}"), style),
                    Span::styled(*hint, muted),
                ]))
            })
            .collect();

        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(list, chunks[1]);

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ navigate  ⏎ select  q quit",
            muted,
        )]));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_within_the_menu() {
        let mut home = HomeScreen::new(String::new());
        home.move_up();
        assert_eq!(home.select(), Some(HomeAction::Wizard));

        for _ in 0..10 {
            home.move_down();
        }
        assert_eq!(home.select(), Some(HomeAction::Stakeholders));
    }
}
