//! Terminal event mapping.
//!
//! The game has exactly one input, activate. Everything else here is shell
//! plumbing: quitting and ignoring noise.

use crate::game::logic::GameInput;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(GameInput),
    Quit,
    Ignore,
}

pub fn map_event(event: &Event) -> Command {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => Command::Ignore,
    }
}

fn map_key(key: &KeyEvent) -> Command {
    // Some platforms report releases too; only presses count
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => Command::Game(GameInput::Activate),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::Ignore,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Command {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Command::Game(GameInput::Activate),
        _ => Command::Ignore,
    }
}
