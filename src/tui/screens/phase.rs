//! Phase browser: the phase list on the left, the selected phase in full on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph, Wrap};

use crate::catalog;
use crate::model::{ArtifactKind, Phase};

pub struct PhaseScreen {
    phases: &'static [Phase],
    selected: usize,
    scroll: u16,
}

impl PhaseScreen {
    pub fn new() -> Self {
        Self {
            phases: catalog::all_phases(),
            selected: 0,
            scroll: 0,
        }
    }

    /// Index of the highlighted phase.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll = 0;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.phases.len() {
            self.selected += 1;
            self.scroll = 0;
        }
    }

    /// Follow the catalog's prev/next links.
    pub fn follow(&mut self, forward: bool) {
        let current = self.phases[self.selected].id;
        let nav = catalog::navigation(current);
        let target = if forward { nav.next } else { nav.prev };
        if let Some(index) = target.and_then(|p| catalog::position(p.id)) {
            self.selected = index;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Min(0),    // list + detail
            Constraint::Length(1), // help
        ])
        .split(area);
        let body = Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).split(chunks[0]);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let items: Vec<ListItem> = self
            .phases
            .iter()
            .enumerate()
            .map(|(i, phase)| {
                let style = if i == self.selected { highlight } else { normal };
                let pointer = if i == self.selected { "› " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(format!("{:<6}", phase.code), muted),
                    Span::styled(phase.name, style),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().padding(Padding::new(2, 1, 1, 0)));
        frame.render_widget(list, body[0]);

        let detail = Paragraph::new(detail_lines(&self.phases[self.selected]))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().padding(Padding::new(1, 2, 1, 0)));
        frame.render_widget(detail, body[1]);

        let help = Paragraph::new(Line::from(vec![Span::styled(
            " ↑↓ phase  ←→ prev/next  pgup/pgdn scroll  ⏎ open in wizard  esc back",
            muted,
        )]));
        frame.render_widget(help, chunks[1]);
    }
}

impl Default for PhaseScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The detail pane's text, one section after another.
fn detail_lines(phase: &Phase) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(format!("{}  {}", phase.code, phase.full_name), heading)),
        Line::from(phase.description),
    ];

    let mut section = |title: &'static str, items: Vec<String>| {
        if items.is_empty() {
            return;
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(title, heading)));
        lines.extend(items.into_iter().map(Line::from));
    };

    let plain = |items: &[&str]| items.iter().map(|i| format!("• {i}")).collect::<Vec<_>>();

    section("Objectives", plain(phase.objectives));
    section("Inputs", plain(phase.inputs));
    section("Outputs", plain(phase.outputs));
    section(
        "Steps",
        phase
            .steps
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{:>2}. {}", i + 1, s.name))
            .collect(),
    );
    section(
        "Deliverables",
        phase
            .deliverables
            .iter()
            .map(|d| {
                let marker = if d.required { "*" } else { "•" };
                format!("{marker} {}", d.name)
            })
            .collect(),
    );
    for kind in ArtifactKind::ALL {
        section(
            kind.heading(),
            phase
                .artifacts
                .iter()
                .filter(|a| a.kind == kind)
                .map(|a| format!("• {}", a.name))
                .collect(),
        );
    }
    section("Key questions", plain(phase.key_questions));
    section("Stakeholder focus", plain(phase.stakeholder_focus));
    section("Tips", plain(phase.tips));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("* required", muted)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_moves_along_the_cycle_and_stops_at_the_ends() {
        let mut screen = PhaseScreen::new();
        screen.follow(false);
        assert_eq!(screen.selected(), 0);

        screen.follow(true);
        assert_eq!(screen.selected(), 1);

        for _ in 0..20 {
            screen.follow(true);
        }
        assert_eq!(screen.selected(), 10);
    }

    #[test]
    fn moving_resets_scroll() {
        let mut screen = PhaseScreen::new();
        screen.scroll_down();
        screen.scroll_down();
        screen.move_down();
        assert_eq!(screen.scroll, 0);
    }

    #[test]
    fn detail_groups_artifacts_by_kind() {
        let phase = catalog::phase_by_id("phase-b").unwrap();
        let text: Vec<String> = detail_lines(phase).iter().map(ToString::to_string).collect();
        let catalogs = text.iter().position(|l| l == "Catalogs").unwrap();
        let diagrams = text.iter().position(|l| l == "Diagrams").unwrap();
        assert!(catalogs < diagrams);
        assert!(text.iter().any(|l| l.starts_with(" 1. ")));
    }
}
