//! Terminal front end for the calculator.
//!
//! The session is the presentation layer: it turns each input line into
//! key presses, forwards them to the state it owns and prints the display.
//! It holds no arithmetic of its own.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::calculator::{
    Button, CalculatorState, Evaluation, Tape, copy_and_wait, copy_to_clipboard, parse_keys,
};
use crate::config::Config;
use crate::error::ClipboardError;

/// Destination for copied text.
pub trait CopyTarget {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl CopyTarget for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_to_clipboard(text)
    }
}

/// The system clipboard, kept alive until another client replaces the text.
///
/// For processes that exit right after copying.
#[derive(Debug, Default)]
pub struct PersistentClipboard;

impl CopyTarget for PersistentClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_and_wait(text)
    }
}

/// Press one key sequence on a fresh calculator and print the outcome.
///
/// Prints the display, or the state as JSON when `json` is set. With a
/// clipboard, the final display is copied after printing.
pub fn run_once<W: Write, C: CopyTarget>(
    keys: &str,
    json: bool,
    mut out: W,
    clipboard: Option<C>,
) -> anyhow::Result<CalculatorState> {
    let buttons = parse_keys(keys).with_context(|| format!("Invalid key sequence {keys:?}"))?;

    let mut state = CalculatorState::new();
    for button in buttons {
        tracing::debug!(%button, "press");
        state.press(button);
    }

    if json {
        serde_json::to_writer_pretty(&mut out, &state)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", state.display())?;
    }
    out.flush()?;

    if let Some(mut clipboard) = clipboard {
        clipboard
            .copy(state.display())
            .context("Failed to copy result")?;
    }

    Ok(state)
}

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive calculator session writing to `out`.
pub struct Session<W: Write, C: CopyTarget = SystemClipboard> {
    state: CalculatorState,
    tape: Tape,
    config: Config,
    clipboard: C,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self::with_clipboard(config, out, SystemClipboard)
    }
}

impl<W: Write, C: CopyTarget> Session<W, C> {
    pub fn with_clipboard(config: Config, out: W, clipboard: C) -> Self {
        Self {
            state: CalculatorState::new(),
            tape: Tape::new(config.tape_capacity),
            config,
            clipboard,
            out,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Consume the session and return the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read lines from `input` until EOF or a quit command.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.render()?;
        self.prompt()?;
        for line in input.lines() {
            if self.feed(&line?)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    /// Handle one line of input.
    pub fn feed(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim();
        match line {
            "" => self.render()?,
            ":q" | ":quit" => return Ok(Flow::Quit),
            ":state" => self.print_state()?,
            ":tape" => self.print_tape()?,
            ":copy" => {
                let display = self.state.display().to_string();
                self.copy(&display)?;
            }
            ":copylast" => match self.tape.last() {
                Some(entry) => {
                    let text = entry.text_for_clipboard().to_string();
                    self.copy(&text)?;
                }
                None => writeln!(self.out, "(tape is empty)")?,
            },
            ":keys" => writeln!(self.out, "{}", Button::keypad())?,
            _ if line.starts_with(':') => {
                writeln!(self.out, "unknown command: {line}")?;
            }
            _ => self.press_keys(line)?,
        }
        Ok(Flow::Continue)
    }

    /// Press every key in `keys`, then render once.
    pub fn press_keys(&mut self, keys: &str) -> io::Result<()> {
        let buttons = match parse_keys(keys) {
            Ok(buttons) => buttons,
            Err(err) => {
                tracing::debug!(input = keys, %err, "rejected key sequence");
                return writeln!(self.out, "{err}");
            }
        };

        for button in buttons {
            tracing::debug!(%button, "press");
            if let Some(eval) = self.state.press(button) {
                self.on_evaluation(&eval)?;
            }
        }
        self.render()
    }

    fn on_evaluation(&mut self, eval: &Evaluation) -> io::Result<()> {
        tracing::debug!(
            lhs = eval.lhs,
            operator = eval.operator.label(),
            rhs = eval.rhs,
            result = %eval.display,
            "evaluated"
        );
        self.tape.record(eval);
        if self.config.copy_on_equals {
            self.copy(&eval.display)?;
        }
        Ok(())
    }

    fn copy(&mut self, text: &str) -> io::Result<()> {
        match self.clipboard.copy(text) {
            Ok(()) => writeln!(self.out, "copied {text}"),
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                writeln!(self.out, "{err}")
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.state.display())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.config.prompt)?;
        self.out.flush()
    }

    fn print_state(&mut self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.state).map_err(io::Error::other)?;
        writeln!(self.out, "{json}")
    }

    fn print_tape(&mut self) -> io::Result<()> {
        if self.tape.is_empty() {
            return writeln!(self.out, "(tape is empty)");
        }
        for entry in self.tape.entries() {
            writeln!(self.out, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl CopyTarget for &mut RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Access("no display".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn session(
        config: Config,
        clipboard: &mut RecordingClipboard,
    ) -> Session<Vec<u8>, &mut RecordingClipboard> {
        Session::with_clipboard(config, Vec::new(), clipboard)
    }

    fn output<C: CopyTarget>(session: Session<Vec<u8>, C>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_keys_render_final_display() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        assert_eq!(s.feed("7 + 3 =").unwrap(), Flow::Continue);
        assert_eq!(s.state().display(), "10.0");
        assert_eq!(output(s), "10.0\n");
    }

    #[test]
    fn test_state_persists_across_lines() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed("12").unwrap();
        s.feed("×").unwrap();
        s.feed("2=").unwrap();
        assert_eq!(output(s), "12\n12\n24.0\n");
    }

    #[test]
    fn test_bad_keys_change_nothing() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed("5").unwrap();
        s.feed("5 + z").unwrap();
        assert_eq!(s.state().display(), "5");
        assert_eq!(output(s), "5\nunrecognized key 'z' at position 4\n");
    }

    #[test]
    fn test_quit() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        assert_eq!(s.feed(":q").unwrap(), Flow::Quit);
        assert_eq!(s.feed(":quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed(":frobnicate").unwrap();
        assert_eq!(output(s), "unknown command: :frobnicate\n");
    }

    #[test]
    fn test_tape_records_evaluations() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed(":tape").unwrap();
        s.feed("7+3=").unwrap();
        s.feed("5/0=").unwrap();
        s.feed("=").unwrap();
        assert_eq!(s.tape().len(), 2);
        s.feed(":tape").unwrap();
        assert_eq!(
            output(s),
            "(tape is empty)\n10.0\nError\nError\n7.0 + 3.0 = 10.0\n5.0 ÷ 0.0 = Error\n"
        );
    }

    #[test]
    fn test_state_command_prints_json() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed("4-").unwrap();
        s.feed(":state").unwrap();
        let out = output(s);
        let json = out.strip_prefix("4\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["pending_operator"], "subtract");
        assert_eq!(value["first_operand"], 4.0);
    }

    #[test]
    fn test_copy_command() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed("2 5 %").unwrap();
        s.feed(":copy").unwrap();
        assert_eq!(output(s), "0.25\ncopied 0.25\n");
        assert_eq!(clipboard.copied, ["0.25"]);
    }

    #[test]
    fn test_copy_last_tape_entry() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        s.feed(":copylast").unwrap();
        s.feed("9÷3=").unwrap();
        s.feed("C").unwrap();
        s.feed(":copylast").unwrap();
        assert_eq!(output(s), "(tape is empty)\n3.0\n0\ncopied 3.0\n");
        assert_eq!(clipboard.copied, ["3.0"]);
    }

    #[test]
    fn test_copy_on_equals() {
        let config = Config {
            copy_on_equals: true,
            ..Config::default()
        };
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(config, &mut clipboard);
        s.feed("6*7=").unwrap();
        s.feed("1+").unwrap();
        drop(s);
        assert_eq!(clipboard.copied, ["42.0"]);
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        let mut s = session(Config::default(), &mut clipboard);
        s.feed(":copy").unwrap();
        assert_eq!(s.state().display(), "0");
        assert_eq!(output(s), "failed to access clipboard: no display\n");
    }

    #[test]
    fn test_run_once_prints_display() {
        let mut out = Vec::new();
        let state = run_once::<_, SystemClipboard>("7+3=", false, &mut out, None).unwrap();
        assert_eq!(state.display(), "10.0");
        assert_eq!(String::from_utf8(out).unwrap(), "10.0\n");
    }

    #[test]
    fn test_run_once_json() {
        let mut out = Vec::new();
        run_once::<_, SystemClipboard>("5÷", true, &mut out, None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["display"], "5");
        assert_eq!(value["pending_operator"], "divide");
    }

    #[test]
    fn test_run_once_copies_through_target() {
        let mut clipboard = RecordingClipboard::default();
        let mut out = Vec::new();
        run_once("25%", false, &mut out, Some(&mut clipboard)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.25\n");
        assert_eq!(clipboard.copied, ["0.25"]);
    }

    #[test]
    fn test_run_once_reports_errors() {
        let mut out = Vec::new();
        let err = run_once::<_, SystemClipboard>("1+q", false, &mut out, None).unwrap_err();
        assert!(err.to_string().contains("Invalid key sequence"));
        assert!(out.is_empty());

        let mut clipboard = RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        };
        let err = run_once("1", false, Vec::new(), Some(&mut clipboard)).unwrap_err();
        assert!(err.to_string().contains("Failed to copy result"));
    }

    #[test]
    fn test_run_until_quit() {
        let mut clipboard = RecordingClipboard::default();
        let mut s = session(Config::default(), &mut clipboard);
        let input = "9\n+\n1=\n:q\n8\n";
        s.run(input.as_bytes()).unwrap();
        assert_eq!(s.state().display(), "10.0");
        assert_eq!(output(s), "0\n> 9\n> 9\n> 10.0\n> ");
    }

    #[test]
    fn test_run_until_eof() {
        let mut clipboard = RecordingClipboard::default();
        let config = Config {
            prompt: String::new(),
            ..Config::default()
        };
        let mut s = session(config, &mut clipboard);
        s.run("C\n\n".as_bytes()).unwrap();
        assert_eq!(output(s), "0\n0\n0\n");
    }
}
