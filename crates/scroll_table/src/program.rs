//! A small terminal host loop.
//!
//! [`Program`] puts the terminal in raw mode, feeds crossterm events to a
//! [`Model`] as [`Msg`] values, and redraws the model's view whenever it
//! changes. The terminal is restored when the loop ends, whether it ended
//! normally or with an error.
//!
//! [`ScrollTable`] is itself a [`Model`], so a table can be run directly:
//!
//! ```rust,no_run
//! use scroll_table::ScrollTable;
//! use scroll_table::program::Program;
//!
//! let table = ScrollTable::new(vec!["Name"], vec![vec!["Alice"], vec!["Bob"]]);
//! let table = Program::new(table).with_alt_screen().run()?;
//! println!("{:?}", table.all_data());
//! # Ok::<(), scroll_table::program::ProgramError>(())
//! ```

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, trace};

use crate::key::{KeyMsg, KeyType, from_crossterm_key};
use crate::table::{Outcome, ScrollTable};

/// Errors from running a [`Program`].
#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    /// I/O error during terminal setup or teardown.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable raw mode.
    ///
    /// Usually means standard input is not a terminal.
    #[error("failed to enable raw mode: {0}")]
    RawMode(#[source] io::Error),

    /// Failed to poll or read terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(#[source] io::Error),

    /// Failed to write the view.
    #[error("failed to render view: {0}")]
    Render(#[source] io::Error),
}

/// Input delivered to a [`Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key press.
    Key(KeyMsg),
    /// The terminal size, sent once at start and on every resize.
    Resize {
        /// Columns.
        width: usize,
        /// Lines.
        height: usize,
    },
    /// Text pasted with bracketed paste.
    Paste(String),
    /// Ctrl+C.
    Interrupt,
}

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Stop and return the model.
    Quit,
}

/// Something the [`Program`] can run.
pub trait Model {
    /// Called once before the first update.
    fn init(&mut self) {}

    /// Handles a message.
    fn update(&mut self, msg: Msg) -> Control;

    /// Renders the current state.
    fn view(&self) -> String;
}

impl Model for ScrollTable {
    fn update(&mut self, msg: Msg) -> Control {
        let key = match msg {
            Msg::Key(key) => key,
            Msg::Paste(text) => KeyMsg::from_runes(text.chars().collect()).with_paste(),
            Msg::Resize { width, height } => {
                self.set_size(width, height);
                return Control::Continue;
            }
            Msg::Interrupt => return Control::Quit,
        };
        match ScrollTable::update(self, &key) {
            Outcome::Quit => Control::Quit,
            _ => Control::Continue,
        }
    }

    fn view(&self) -> String {
        ScrollTable::view(self)
    }
}

/// Converts a crossterm event into a [`Msg`].
///
/// Only key presses are kept; releases, repeats, mouse, and focus events are
/// dropped. Ctrl+C becomes [`Msg::Interrupt`].
#[must_use]
pub fn translate_event(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let key = from_crossterm_key(key.code, key.modifiers);
            if key.key_type == KeyType::CtrlC {
                Some(Msg::Interrupt)
            } else {
                Some(Msg::Key(key))
            }
        }
        Event::Resize(width, height) => Some(Msg::Resize {
            width: usize::from(width),
            height: usize::from(height),
        }),
        Event::Paste(text) => Some(Msg::Paste(text)),
        _ => None,
    }
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Enable bracketed paste.
    pub bracketed_paste: bool,
    /// Longest wait for input between checks, as frames per second.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            bracketed_paste: true,
            fps: 60,
        }
    }
}

/// Runs a [`Model`] in the terminal.
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Creates a program for `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Uses the alternate screen buffer.
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Disables bracketed paste.
    #[must_use]
    pub fn without_bracketed_paste(mut self) -> Self {
        self.options.bracketed_paste = false;
        self
    }

    /// Sets the polling rate. Clamped to 1-120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Runs on stdout until the model quits and returns the final model.
    ///
    /// # Errors
    /// Returns [`ProgramError`] if the terminal cannot be set up, read, or
    /// written.
    pub fn run(self) -> Result<M, ProgramError> {
        self.run_with_writer(io::stdout())
    }

    /// Runs with output going to `writer`.
    ///
    /// # Errors
    /// Returns [`ProgramError`] if the terminal cannot be set up, read, or
    /// written.
    pub fn run_with_writer<W: Write>(mut self, mut writer: W) -> Result<M, ProgramError> {
        let options = self.options.clone();
        enable_raw_mode().map_err(ProgramError::RawMode)?;

        let result = Self::setup(&options, &mut writer).and_then(|()| self.event_loop(&mut writer));

        if options.bracketed_paste {
            let _ = execute!(writer, DisableBracketedPaste);
        }
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        debug!("terminal restored");

        result.map(|()| self.model)
    }

    fn setup<W: Write>(options: &ProgramOptions, writer: &mut W) -> Result<(), ProgramError> {
        if options.alt_screen {
            execute!(writer, EnterAlternateScreen)?;
        }
        execute!(writer, Hide)?;
        if options.bracketed_paste {
            execute!(writer, EnableBracketedPaste)?;
        }
        Ok(())
    }

    fn event_loop<W: Write>(&mut self, writer: &mut W) -> Result<(), ProgramError> {
        self.model.init();
        if let Ok((width, height)) = terminal::size() {
            let msg = Msg::Resize {
                width: usize::from(width),
                height: usize::from(height),
            };
            if self.model.update(msg) == Control::Quit {
                return Ok(());
            }
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));
        loop {
            if !event::poll(frame).map_err(ProgramError::EventPoll)? {
                continue;
            }
            let event = event::read().map_err(ProgramError::EventPoll)?;
            let Some(msg) = translate_event(event) else {
                continue;
            };
            trace!(?msg, "message");
            if self.model.update(msg) == Control::Quit {
                debug!("model quit");
                return Ok(());
            }
            self.render(writer, &mut last_view)?;
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<(), ProgramError> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }
        // Raw mode does not turn "\n" into a carriage return.
        let frame = view.replace('\n', "\r\n");
        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(ProgramError::Render)?;
        write!(writer, "{frame}").map_err(ProgramError::Render)?;
        writer.flush().map_err(ProgramError::Render)?;
        *last_view = view;
        Ok(())
    }
}
