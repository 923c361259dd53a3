//! Interactive shell
//!
//! The shell subscribes to its storefront and redraws from the published
//! snapshot whenever an action changes state. Input errors are reported
//! and the session continues.

use crate::command::{parse_command, CommandError, ShellCommand, HELP};
use crate::render::{format_money, Screen};
use nursery_core::{Outcome, Snapshot, Storefront};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

/// Result of executing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; print the text if any
    Continue(Option<String>),
    /// Leave the shell
    Quit,
}

/// Line-oriented storefront session
#[derive(Debug)]
pub struct Shell {
    store: Storefront,
    pending: Rc<RefCell<Option<Snapshot>>>,
}

impl Shell {
    /// Wrap a storefront and subscribe to its changes
    #[must_use]
    pub fn new(mut store: Storefront) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        store.subscribe(move |_, snapshot| {
            *sink.borrow_mut() = Some(snapshot.clone());
        });
        Self { store, pending }
    }

    /// Underlying storefront
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Storefront {
        &self.store
    }

    /// Render the current state
    #[must_use]
    pub fn screen(&self) -> String {
        self.render(&self.store.snapshot())
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        Screen::new(self.store.config(), self.store.catalog(), snapshot).to_string()
    }

    /// Execute one input line
    ///
    /// # Errors
    /// Returns a [`CommandError`] for unparseable input; state is untouched
    pub fn execute(&mut self, line: &str) -> Result<Step, CommandError> {
        let Some(command) = parse_command(line)? else {
            return Ok(Step::Continue(None));
        };

        let text = match command {
            ShellCommand::Quit => return Ok(Step::Quit),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Show => self.screen(),
            ShellCommand::Action(action) => match self.store.dispatch(action) {
                Outcome::Changed(_) => match self.pending.borrow_mut().take() {
                    Some(snapshot) => self.render(&snapshot),
                    None => self.screen(),
                },
                Outcome::Unchanged => "(no change)".to_string(),
                Outcome::CheckedOut(ack) => format!(
                    "{}\nItems: {}    Total: {}",
                    ack.message,
                    ack.total_quantity,
                    format_money(ack.total_cost, &self.store.config().currency_symbol)
                ),
            },
        };
        Ok(Step::Continue(Some(text)))
    }

    /// Read commands until `quit` or end of input
    ///
    /// # Errors
    /// Returns IO errors from the reader or writer
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.screen())?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(Step::Quit) => break,
                Ok(Step::Continue(Some(text))) => writeln!(output, "{text}")?,
                Ok(Step::Continue(None)) => {}
                Err(e) => {
                    tracing::debug!(input = %line, error = %e, "rejected shell input");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        writeln!(output, "Goodbye from {}!", self.store.config().store_name)
    }
}
