//! Stakeholder grid: the four influence/interest quadrants.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::model::Stakeholder;
use crate::stakeholders::{Quadrant, Registry};

pub struct StakeholderScreen {
    registry: Registry,
}

impl StakeholderScreen {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Seed the example sponsor into an empty registry. Returns it if added.
    pub fn add_example(&mut self) -> Option<&Stakeholder> {
        if !self.registry.is_empty() {
            return None;
        }
        Some(self.registry.add_example())
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title
            Constraint::Min(0),    // grid
            Constraint::Length(1), // unplaced
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("Stakeholders", highlight),
            Span::styled(format!("  {} total", self.registry.len()), muted),
        ]))
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        let cells = [top[0], top[1], bottom[0], bottom[1]];

        let quadrants = self.registry.quadrants();
        for (quadrant, cell) in Quadrant::ALL.into_iter().zip(cells) {
            let names: Vec<String> = quadrants
                .get(quadrant)
                .iter()
                .map(|s| format!("{} · {}", s.name, s.role))
                .collect();
            render_quadrant(frame, cell, quadrant, &names);
        }

        let unplaced = self.registry.len() - quadrants.placed();
        let note = if self.registry.is_empty() {
            " No stakeholders yet. Press e to add an example.".to_string()
        } else if unplaced > 0 {
            format!(" {unplaced} rated medium on an axis, not placed")
        } else {
            String::new()
        };
        frame.render_widget(Paragraph::new(Span::styled(note, muted)), chunks[2]);

        let help = Paragraph::new(Line::from(Span::styled(
            " e add example  esc back  q quit   edit with `adm stakeholder`",
            muted,
        )));
        frame.render_widget(help, chunks[3]);
    }
}

fn render_quadrant(frame: &mut Frame, area: Rect, quadrant: Quadrant, names: &[String]) {
    let accent = match quadrant {
        Quadrant::HighHigh => Color::Red,
        Quadrant::HighLow => Color::Yellow,
        Quadrant::LowHigh => Color::Cyan,
        Quadrant::LowLow => Color::DarkGray,
    };
    let mut lines = vec![Line::from(Span::styled(
        quadrant.subtitle(),
        Style::default().fg(Color::DarkGray),
    ))];
    if names.is_empty() {
        lines.push(Line::from(Span::styled("(none)", Style::default().fg(Color::DarkGray))));
    }
    lines.extend(names.iter().map(|n| Line::from(n.clone())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ({}) ", quadrant.title(), names.len()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_is_only_added_to_an_empty_registry() {
        let mut screen = StakeholderScreen::new(Registry::default());
        assert_eq!(screen.add_example().unwrap().name, "Example: CIO");
        assert!(screen.add_example().is_none());
        assert_eq!(screen.registry.len(), 1);
    }
}
