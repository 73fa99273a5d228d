//! Line-oriented event loop: one command per input line, one render per visible change.

use std::io::{self, BufRead, Write};

use directory_core::{update, DirectoryState, Msg};
use directory_logging::directory_debug;

use crate::command::{parse_command, Command, HELP};
use crate::render::render;

const PROMPT: &str = "> ";

pub struct Session<W: Write> {
    state: DirectoryState,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(state: DirectoryState, out: W) -> Self {
        Self { state, out }
    }

    /// Renders the initial page, then processes `input` until it ends or the user quits.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.render()?;
        self.prompt()?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Command::Quit => break,
                Command::Update(msg) => self.dispatch_msg(msg)?,
                Command::Show => self.render()?,
                Command::Help => writeln!(self.out, "{HELP}")?,
                Command::Usage(message) => writeln!(self.out, "{message}")?,
            }
            self.prompt()?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        directory_debug!("dispatch {:?}", msg);
        let is_noop = msg == Msg::NoOp;
        let state = std::mem::take(&mut self.state);
        self.state = update(state, msg);
        if self.state.consume_dirty() {
            self.render()
        } else if is_noop {
            Ok(())
        } else {
            writeln!(
                self.out,
                "(page {} of {}, nothing changed)",
                self.state.page(),
                self.state.total_pages()
            )
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        write!(self.out, "{}", render(&view))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }
}
