//! Application loop and screen routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::catalog;
use crate::stakeholders::Registry;
use crate::storage::Storage;
use crate::wizard::Wizard;

use super::screens::{HomeScreen, PhaseScreen, StakeholderScreen, WizardScreen};

/// Which screen is currently displayed.
enum Screen {
    Home(HomeScreen),
    Wizard(WizardScreen),
    Phases(PhaseScreen),
    Stakeholders(StakeholderScreen),
}

/// Runs the TUI event loop until the user quits.
pub fn run(storage: &Storage) -> io::Result<()> {
    info!("guide opened");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, storage);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, storage: &Storage) -> io::Result<()> {
    let mut screen = Screen::Home(load_home_screen(storage)?);

    loop {
        terminal.draw(|frame| match &screen {
            Screen::Home(s) => s.render(frame),
            Screen::Wizard(s) => s.render(frame),
            Screen::Phases(s) => s.render(frame),
            Screen::Stakeholders(s) => s.render(frame),
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match &mut screen {
            Screen::Home(home) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => home.move_up(),
                KeyCode::Down | KeyCode::Char('j') => home.move_down(),
                KeyCode::Enter => {
                    if let Some(action) = home.select() {
                        debug!(?action, "opening screen");
                        screen = match action {
                            HomeAction::Wizard => {
                                Screen::Wizard(WizardScreen::new(load_wizard(storage)?))
                            }
                            HomeAction::Phases => Screen::Phases(PhaseScreen::new()),
                            HomeAction::Stakeholders => {
                                Screen::Stakeholders(load_stakeholder_screen(storage)?)
                            }
                        };
                    }
                }
                _ => {}
            },
            Screen::Wizard(w) => match key.code {
                KeyCode::Char('q') => {
                    save_progress(storage, w.wizard())?;
                    return Ok(());
                }
                KeyCode::Esc => {
                    save_progress(storage, w.wizard())?;
                    screen = Screen::Home(load_home_screen(storage)?);
                }
                KeyCode::Right | KeyCode::Char('l') => w.advance(),
                KeyCode::Left | KeyCode::Char('h') => w.retreat(),
                KeyCode::Up | KeyCode::Char('k') => w.step_up(),
                KeyCode::Down | KeyCode::Char('j') => w.step_down(),
                KeyCode::Tab => w.next_phase(),
                KeyCode::BackTab => w.prev_phase(),
                KeyCode::Char(' ') => w.toggle_current(),
                KeyCode::Char(c) => {
                    if let Some(index) = phase_for_key(c) {
                        w.jump_to_phase(index);
                    }
                }
                _ => {}
            },
            Screen::Phases(p) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => screen = Screen::Home(load_home_screen(storage)?),
                KeyCode::Up | KeyCode::Char('k') => p.move_up(),
                KeyCode::Down | KeyCode::Char('j') => p.move_down(),
                KeyCode::Left | KeyCode::Char('h') => p.follow(false),
                KeyCode::Right | KeyCode::Char('l') => p.follow(true),
                KeyCode::PageDown => p.scroll_down(),
                KeyCode::PageUp => p.scroll_up(),
                KeyCode::Enter => {
                    let mut wizard = load_wizard(storage)?;
                    wizard
                        .jump_to_phase(p.selected())
                        .map_err(io::Error::other)?;
                    screen = Screen::Wizard(WizardScreen::new(wizard));
                }
                _ => {}
            },
            Screen::Stakeholders(s) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => screen = Screen::Home(load_home_screen(storage)?),
                KeyCode::Char('e') => {
                    if let Some(example) = s.add_example() {
                        storage
                            .save_stakeholder(example)
                            .map_err(io::Error::other)?;
                    }
                }
                _ => {}
            },
        }
    }
}

/// Map a digit key to a phase index: `1`-`9` are the first nine, `0` the tenth.
fn phase_for_key(c: char) -> Option<usize> {
    let digit = usize::try_from(c.to_digit(10)?).ok()?;
    Some(if digit == 0 { 9 } else { digit - 1 })
}

fn load_wizard(storage: &Storage) -> io::Result<Wizard<'static>> {
    let saved = storage.load_wizard_state().map_err(io::Error::other)?;
    Wizard::restore(catalog::all_phases(), saved).map_err(io::Error::other)
}

fn save_progress(storage: &Storage, wizard: &Wizard<'_>) -> io::Result<()> {
    storage
        .save_wizard_state(wizard.state())
        .map_err(io::Error::other)?;
    debug!(completed = wizard.completed_count(), "wizard progress saved");
    Ok(())
}

fn load_home_screen(storage: &Storage) -> io::Result<HomeScreen> {
    let wizard = load_wizard(storage)?;
    let progress = format!(
        "{} of {} steps complete",
        wizard.completed_count(),
        wizard.total_steps()
    );
    Ok(HomeScreen::new(progress))
}

fn load_stakeholder_screen(storage: &Storage) -> io::Result<StakeholderScreen> {
    let stakeholders = storage.load_stakeholders().map_err(io::Error::other)?;
    Ok(StakeholderScreen::new(Registry::from_stakeholders(stakeholders)))
}

/// What the home screen wants to happen when the user presses Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Wizard,
    Phases,
    Stakeholders,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_pick_phases() {
        assert_eq!(phase_for_key('1'), Some(0));
        assert_eq!(phase_for_key('9'), Some(8));
        assert_eq!(phase_for_key('0'), Some(9));
        assert_eq!(phase_for_key('x'), None);
    }

    #[test]
    fn home_reports_saved_progress() {
        let storage = Storage::open_in_memory().unwrap();
        let mut wizard = load_wizard(&storage).unwrap();
        wizard.toggle_step_complete("a1");
        save_progress(&storage, &wizard).unwrap();

        let reloaded = load_wizard(&storage).unwrap();
        assert_eq!(reloaded.completed_count(), 1);
        assert!(load_home_screen(&storage).is_ok());
    }
}
