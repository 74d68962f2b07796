//! Wizard screen: one step at a time, with the phase strip and overall progress.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, Padding, Paragraph, Wrap};

use crate::wizard::Wizard;

pub struct WizardScreen {
    wizard: Wizard<'static>,

    /// Feedback from the last move that did nothing or was rejected.
    notice: Option<String>,
}

impl WizardScreen {
    pub fn new(wizard: Wizard<'static>) -> Self {
        Self {
            wizard,
            notice: None,
        }
    }

    pub fn wizard(&self) -> &Wizard<'static> {
        &self.wizard
    }

    pub fn advance(&mut self) {
        self.notice = (!self.wizard.advance()).then(|| "Already at the last step.".to_string());
    }

    pub fn retreat(&mut self) {
        self.notice = (!self.wizard.retreat()).then(|| "Already at the first step.".to_string());
    }

    pub fn jump_to_phase(&mut self, index: usize) {
        self.notice = self.wizard.jump_to_phase(index).err().map(|e| e.to_string());
    }

    /// Tab: the next phase, wrapping to the first.
    pub fn next_phase(&mut self) {
        let count = self.wizard.phases().len();
        self.jump_to_phase((self.wizard.state().phase_index + 1) % count);
    }

    /// Shift-Tab: the previous phase, wrapping to the last.
    pub fn prev_phase(&mut self) {
        let count = self.wizard.phases().len();
        self.jump_to_phase((self.wizard.state().phase_index + count - 1) % count);
    }

    /// Move the step pointer within the current phase without crossing into another.
    pub fn step_up(&mut self) {
        let index = self.wizard.state().step_index;
        if index > 0 {
            self.notice = self.wizard.jump_to_step(index - 1).err().map(|e| e.to_string());
        }
    }

    pub fn step_down(&mut self) {
        let index = self.wizard.state().step_index;
        if index + 1 < self.wizard.current_phase().steps.len() {
            self.notice = self.wizard.jump_to_step(index + 1).err().map(|e| e.to_string());
        }
    }

    pub fn toggle_current(&mut self) {
        let id = self.wizard.current_step().id;
        self.wizard.toggle_step_complete(id);
        self.notice = None;
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // title + phase strip
            Constraint::Length(1), // separator
            Constraint::Min(0),    // steps + detail
            Constraint::Length(1), // progress
            Constraint::Length(1), // notice or help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let done = Style::default().fg(Color::Green);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let state = self.wizard.state();
        let phase = self.wizard.current_phase();

        // Phase strip: every code, the current one reversed, finished ones green.
        let mut strip = Vec::new();
        for (i, p) in self.wizard.phases().iter().enumerate() {
            let finished = self
                .wizard
                .phase_progress(i)
                .is_some_and(|(d, total)| d == total);
            let style = if i == state.phase_index {
                highlight.add_modifier(Modifier::REVERSED)
            } else if finished {
                done
            } else {
                muted
            };
            strip.push(Span::styled(format!(" {} ", p.code), style));
            strip.push(Span::raw(" "));
        }
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{}  {}", phase.code, phase.full_name),
                highlight,
            )),
            Line::from(strip),
        ])
        .block(Block::default().padding(Padding::new(2, 0, 0, 0)));
        frame.render_widget(header, chunks[0]);

        let sep = Paragraph::new(Line::from(Span::styled(
            "─".repeat(area.width.saturating_sub(4) as usize),
            muted,
        )))
        .block(Block::default().padding(Padding::new(2, 0, 0, 0)));
        frame.render_widget(sep, chunks[1]);

        let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        let steps: Vec<ListItem> = phase
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let current = i == state.step_index;
                let complete = self.wizard.is_complete(step.id);
                let style = if current { highlight } else { normal };
                let pointer = if current { "› " } else { "  " };
                let check = if complete { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(check, done),
                    Span::styled(step.name, style),
                ]))
            })
            .collect();
        let list = List::new(steps).block(Block::default().padding(Padding::new(2, 1, 1, 0)));
        frame.render_widget(list, body[0]);

        let step = self.wizard.current_step();
        let mut detail = vec![
            Line::from(Span::styled(
                format!("Step {} of {}", state.step_index + 1, phase.steps.len()),
                muted,
            )),
            Line::from(Span::styled(step.name, highlight)),
            Line::default(),
            Line::from(Span::styled(step.description, normal)),
        ];
        if !step.tips.is_empty() {
            detail.push(Line::default());
            detail.push(Line::from(Span::styled("Tips", muted)));
            for tip in step.tips {
                detail.push(Line::from(Span::styled(format!("• {tip}"), normal)));
            }
        }
        let detail = Paragraph::new(detail)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::new(1, 2, 1, 0)));
        frame.render_widget(detail, body[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(self.wizard.progress_fraction().clamp(0.0, 1.0))
            .label(format!(
                "{}/{} steps",
                self.wizard.completed_count(),
                self.wizard.total_steps()
            ));
        frame.render_widget(gauge, chunks[3]);

        let footer = match &self.notice {
            Some(notice) => Span::styled(format!(" {notice}"), Style::default().fg(Color::Yellow)),
            None => Span::styled(
                " ←→ step  ↑↓ within phase  1-9 0 Tab phase  space done  esc back  q quit",
                muted,
            ),
        };
        frame.render_widget(Paragraph::new(Line::from(footer)), chunks[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog;

    fn screen() -> WizardScreen {
        WizardScreen::new(Wizard::new(catalog::all_phases()).unwrap())
    }

    fn at(screen: &WizardScreen) -> (usize, usize) {
        let state = screen.wizard().state();
        (state.phase_index, state.step_index)
    }

    #[test]
    fn retreat_at_start_leaves_a_notice() {
        let mut s = screen();
        s.retreat();
        assert_eq!(at(&s), (0, 0));
        assert!(s.notice.is_some());

        s.advance();
        assert_eq!(at(&s), (0, 1));
        assert!(s.notice.is_none());
    }

    #[test]
    fn tab_wraps_around_the_cycle() {
        let mut s = screen();
        s.prev_phase();
        assert_eq!(at(&s), (10, 0));
        s.next_phase();
        assert_eq!(at(&s), (0, 0));
    }

    #[test]
    fn out_of_range_jump_is_reported_not_applied() {
        let mut s = screen();
        s.jump_to_phase(3);
        s.jump_to_phase(11);
        assert_eq!(at(&s), (3, 0));
        assert!(s.notice.is_some());
    }

    #[test]
    fn step_keys_stay_inside_the_phase() {
        let mut s = screen();
        s.step_up();
        assert_eq!(at(&s), (0, 0));
        for _ in 0..20 {
            s.step_down();
        }
        assert_eq!(at(&s), (0, 5));
    }

    #[test]
    fn space_toggles_the_current_step() {
        let mut s = screen();
        let id = s.wizard().current_step().id;
        s.toggle_current();
        assert!(s.wizard().is_complete(id));
        assert_eq!(s.wizard().completed_count(), 1);
        s.toggle_current();
        assert_eq!(s.wizard().completed_count(), 0);
    }
}
