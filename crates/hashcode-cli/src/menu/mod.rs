//! Menu loop
//!
//! Draws the menu, waits for a single key and dispatches to a
//! demonstration until the exit key is pressed.

mod keys;


pub use keys::{Key, KeySource, ScriptedKeys, TerminalKeys};

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use hashcode::DemoConfig;
use tracing::{debug, info};

use crate::demo::{run_demo, Strategy};
use crate::error::CliError;

/// Menu text, one entry per line.
pub const MENU_LINES: [&str; 5] = [
    "1. Manual hash combining",
    "2. Reflective hash combining (field descriptors)",
    "3. Selector hash combining (field selectors)",
    "X. Exit",
    "Choose a menu item or 'x' to exit",
];

/// Printed after a demonstration when the menu waits for a key.
pub const PAUSE_PROMPT: &str = "Press any key to return to the menu.";

/// Lifecycle of a [`MenuController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Created, `run` not called yet.
    Idle,
    /// Drawing the menu and handling keys.
    Running,
    /// The exit key was pressed.
    Exiting,
}

/// What a key press asks the menu to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Demonstrate(Strategy),
    Exit,
}

impl MenuCommand {
    /// Maps a key to a command; unrecognized keys map to `None`.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('1') => Some(MenuCommand::Demonstrate(Strategy::Manual)),
            Key::Char('2') => Some(MenuCommand::Demonstrate(Strategy::Reflective)),
            Key::Char('3') => Some(MenuCommand::Demonstrate(Strategy::Selector)),
            Key::Char('x') | Key::Char('X') | Key::Interrupt => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

/// Runs the menu against a key source and an output sink.
pub struct MenuController<K, W> {
    keys: K,
    out: W,
    config: DemoConfig,
    state: MenuState,
}

impl<K: KeySource, W: Write> MenuController<K, W> {
    /// Creates a new MenuController in the `Idle` state.
    pub fn new(keys: K, out: W, config: DemoConfig) -> Self {
        MenuController {
            keys,
            out,
            config,
            state: MenuState::Idle,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Loops until the exit key is pressed.
    ///
    /// Nothing is written after the exit key.
    ///
    /// # Errors
    ///
    /// Returns the first input, output or field resolution error; the menu
    /// does not recover from it.
    pub fn run(&mut self) -> Result<(), CliError> {
        self.state = MenuState::Running;
        info!(event = "menu_start");

        while self.state == MenuState::Running {
            self.render_menu()?;
            let key = self.keys.read_key()?;
            debug!(event = "menu_key", key = %key);

            match MenuCommand::from_key(key) {
                Some(MenuCommand::Exit) => self.state = MenuState::Exiting,
                Some(MenuCommand::Demonstrate(strategy)) => self.demonstrate(strategy)?,
                None => {}
            }
        }

        info!(event = "menu_exit");
        Ok(())
    }

    /// Consumes the controller, returning its key source and output.
    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.out)
    }

    fn render_menu(&mut self) -> Result<(), CliError> {
        self.clear()?;
        for line in MENU_LINES {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn demonstrate(&mut self, strategy: Strategy) -> Result<(), CliError> {
        self.clear()?;

        let outcome = run_demo(strategy, &self.config)?;
        if let Some(line) = outcome.result_line() {
            writeln!(self.out, "{}", line)?;
        }

        if self.config.menu.pause_after_demo {
            writeln!(self.out, "{}", PAUSE_PROMPT)?;
            self.out.flush()?;
            self.keys.read_key()?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CliError> {
        if self.config.menu.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}
