//! [`Prompter`] backed by the controlling terminal.
use crate::menu::{SelectState, PAGE_SIZE};
use crate::*;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, BufRead, IsTerminal, Write};

/// Keeps the terminal in raw mode while alive.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("unable to switch terminal to raw mode")?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Default, Debug)]
pub struct TerminalPrompter {
    /// Lines of the menu currently on screen
    drawn: u16,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn erase(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.drawn > 0 {
            queue!(out, MoveUp(self.drawn))?;
        }
        self.drawn = 0;
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
    }

    fn draw(
        &mut self,
        out: &mut impl Write,
        label: &str,
        names: &[&str],
        state: &SelectState,
    ) -> io::Result<()> {
        self.erase(out)?;
        queue!(out, Print(format!("{}?", label).bold()), Print("\r\n"))?;
        let mut lines = 1;
        for i in state.visible() {
            let marker = if i == state.cursor() { "➜ " } else { "  " };
            queue!(out, Print(marker), Print(names[i].cyan()), Print("\r\n"))?;
            lines += 1;
        }
        self.drawn = lines;
        out.flush()
    }
}

impl Prompter for TerminalPrompter {
    fn select_index(&mut self, label: &str, names: &[&str]) -> Result<usize> {
        if !io::stdin().is_terminal() {
            bail!("stdin is not a terminal")
        }
        let mut state = SelectState::new(names.len(), PAGE_SIZE);
        let mut out = io::stdout();

        let raw = RawMode::enable()?;
        execute!(out, Hide)?;
        self.draw(&mut out, label, names, &state)?;

        loop {
            let key = match event::read()? {
                Event::Key(
                    k @ KeyEvent {
                        kind: KeyEventKind::Press,
                        ..
                    },
                ) => k,
                _ => continue,
            };
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => state.up(),
                KeyCode::Down | KeyCode::Char('j') => state.down(),
                KeyCode::Enter => break,
                KeyCode::Char('c') | KeyCode::Char('d')
                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    self.erase(&mut out)?;
                    out.flush()?;
                    bail!("interrupted")
                }
                KeyCode::Esc => {
                    self.erase(&mut out)?;
                    out.flush()?;
                    bail!("interrupted")
                }
                _ => continue,
            }
            self.draw(&mut out, label, names, &state)?;
        }

        self.erase(&mut out)?;
        queue!(
            out,
            Print(format!("✔ {}: ", label)),
            Print(names[state.cursor()].yellow()),
            Print("\r\n")
        )?;
        out.flush()?;
        drop(raw);
        Ok(state.cursor())
    }

    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        let mut out = io::stdout();
        write!(out, "{}: ", label.bold())?;
        out.flush()?;

        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, reason: &str) -> Result<()> {
        println!("{} {}", "✗".red(), reason);
        Ok(())
    }
}
