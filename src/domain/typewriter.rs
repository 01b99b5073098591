// SPDX-License-Identifier: MPL-2.0
//! Typewriter reveal for the hero heading.
//!
//! The heading is a lead-in followed by a name. Characters are revealed one
//! per tick; the name portion is rendered with emphasis as soon as its first
//! character appears. Once everything is revealed the blinking cursor lingers
//! for one more delay and is then removed.
//!
//! ```text
//! Idle --start--> Pending --delay--> RevealingPrefix --> RevealingName
//!                                                             |
//!                              Done <--linger-- Finishing <---+
//! ```
//!
//! Counting is per `char`, so multi-byte scripts reveal one glyph at a time.

use std::time::{Duration, Instant};

/// Delay between activation and the first revealed character.
pub const DEFAULT_START_DELAY: Duration = Duration::from_millis(1000);
/// Delay between two revealed characters.
pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(100);
/// How long the cursor stays once the text is complete.
pub const DEFAULT_CURSOR_LINGER: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub start_delay: Duration,
    pub char_interval: Duration,
    pub cursor_linger: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            start_delay: DEFAULT_START_DELAY,
            char_interval: DEFAULT_CHAR_INTERVAL,
            cursor_linger: DEFAULT_CURSOR_LINGER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not activated yet.
    Idle,
    /// Activated, waiting for the start delay.
    Pending,
    /// Revealing the lead-in text.
    RevealingPrefix,
    /// Revealing the emphasized name.
    RevealingName,
    /// Fully revealed, cursor still showing.
    Finishing,
    /// Final static text.
    Done,
}

/// What the heading should display right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Revealed part of the lead-in.
    pub lead_in: &'a str,
    /// Revealed part of the name, shown with emphasis.
    pub name: &'a str,
    /// Whether the blinking cursor follows the text.
    pub cursor: bool,
}

impl Frame<'_> {
    /// The revealed text without any markers.
    #[must_use]
    pub fn plain_text(&self) -> String {
        format!("{}{}", self.lead_in, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lead_in: String,
    name: String,
    lead_in_len: usize,
    total_len: usize,
    revealed: usize,
    phase: Phase,
    timing: TypewriterTiming,
    next_due: Option<Instant>,
}

impl Typewriter {
    #[must_use]
    pub fn new(lead_in: impl Into<String>, name: impl Into<String>, timing: TypewriterTiming) -> Self {
        let lead_in = lead_in.into();
        let name = name.into();
        let lead_in_len = lead_in.chars().count();
        let total_len = lead_in_len + name.chars().count();
        Self {
            lead_in,
            name,
            lead_in_len,
            total_len,
            revealed: 0,
            phase: Phase::Idle,
            timing,
            next_due: None,
        }
    }

    /// Activates the sequence.
    ///
    /// Only the first activation counts; later calls return `false` and
    /// leave the running sequence untouched.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Pending;
        self.next_due = Some(now + self.timing.start_delay);
        true
    }

    /// Reveals one more character and returns the new phase.
    ///
    /// Has no effect once every character is revealed.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Idle | Phase::Pending | Phase::RevealingPrefix | Phase::RevealingName => {
                if self.revealed < self.total_len {
                    self.revealed += 1;
                }
                self.phase = if self.revealed == self.total_len {
                    Phase::Finishing
                } else if self.revealed <= self.lead_in_len {
                    Phase::RevealingPrefix
                } else {
                    Phase::RevealingName
                };
            }
            Phase::Finishing | Phase::Done => {}
        }
        self.phase
    }

    /// Removes the cursor, completing the sequence.
    pub fn finish(&mut self) {
        self.revealed = self.total_len;
        self.phase = Phase::Done;
        self.next_due = None;
    }

    /// Advances every step that is due at `now`.
    ///
    /// Returns whether anything visible changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.next_due {
            if now < due {
                break;
            }
            changed = true;
            match self.phase {
                Phase::Finishing => self.finish(),
                Phase::Idle | Phase::Done => self.next_due = None,
                Phase::Pending | Phase::RevealingPrefix | Phase::RevealingName => {
                    let delay = if self.step() == Phase::Finishing {
                        self.timing.cursor_linger
                    } else {
                        self.timing.char_interval
                    };
                    self.next_due = Some(due + delay);
                }
            }
        }
        changed
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Returns whether the sequence still has timed work ahead.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns what should currently be displayed.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let lead_in_shown = self.revealed.min(self.lead_in_len);
        let name_shown = self.revealed.saturating_sub(self.lead_in_len);
        Frame {
            lead_in: char_prefix(&self.lead_in, lead_in_shown),
            name: char_prefix(&self.name, name_shown),
            cursor: matches!(
                self.phase,
                Phase::RevealingPrefix | Phase::RevealingName | Phase::Finishing
            ),
        }
    }
}

/// Returns the first `count` chars of `text`.
fn char_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn greeting() -> Typewriter {
        Typewriter::new("Hi, I'm ", "Al", TypewriterTiming::default())
    }

    #[test]
    fn ten_steps_reveal_lead_in_and_name() {
        let mut writer = greeting();
        for _ in 0..10 {
            writer.step();
        }

        let frame = writer.frame();
        assert_eq!(frame.plain_text(), "Hi, I'm Al");
        assert_eq!(frame.lead_in, "Hi, I'm ");
        assert_eq!(frame.name, "Al");
        assert!(frame.cursor);
        assert_eq!(writer.phase(), Phase::Finishing);

        writer.finish();
        let frame = writer.frame();
        assert_eq!(frame.plain_text(), "Hi, I'm Al");
        assert!(!frame.cursor);
        assert!(writer.is_done());
    }

    #[test]
    fn name_is_not_emphasized_until_reached() {
        let mut writer = greeting();
        for _ in 0..8 {
            writer.step();
        }
        assert_eq!(writer.phase(), Phase::RevealingPrefix);
        assert_eq!(writer.frame().name, "");

        writer.step();
        assert_eq!(writer.phase(), Phase::RevealingName);
        assert_eq!(writer.frame().name, "A");
    }

    #[test]
    fn nothing_is_shown_before_start_delay() {
        let t0 = Instant::now();
        let mut writer = greeting();
        assert!(writer.start(t0));

        assert!(!writer.poll(t0 + ms(999)));
        assert_eq!(writer.frame().plain_text(), "");
        assert!(!writer.frame().cursor);

        assert!(writer.poll(t0 + ms(1000)));
        assert_eq!(writer.frame().plain_text(), "H");
    }

    #[test]
    fn timed_sequence_reaches_done() {
        let t0 = Instant::now();
        let mut writer = greeting();
        writer.start(t0);

        // Tenth char lands at 1000 + 9 * 100.
        writer.poll(t0 + ms(1900));
        assert_eq!(writer.revealed_count(), 10);
        assert_eq!(writer.phase(), Phase::Finishing);

        writer.poll(t0 + ms(2899));
        assert!(writer.frame().cursor);

        writer.poll(t0 + ms(2900));
        assert!(writer.is_done());
        assert!(!writer.is_running());
    }

    #[test]
    fn late_poll_catches_up() {
        let t0 = Instant::now();
        let mut writer = greeting();
        writer.start(t0);
        writer.poll(t0 + ms(60_000));
        assert!(writer.is_done());
        assert_eq!(writer.frame().plain_text(), "Hi, I'm Al");
    }

    #[test]
    fn second_start_is_ignored() {
        let t0 = Instant::now();
        let mut writer = greeting();
        assert!(writer.start(t0));
        writer.poll(t0 + ms(1200));
        let revealed = writer.revealed_count();

        assert!(!writer.start(t0 + ms(1200)));
        assert_eq!(writer.revealed_count(), revealed);
        assert!(!writer.poll(t0 + ms(1299)));
        assert!(writer.poll(t0 + ms(1300)));
        assert_eq!(writer.revealed_count(), revealed + 1);
    }

    #[test]
    fn multibyte_text_reveals_per_char() {
        let mut writer = Typewriter::new("你好，我是 ", "张三", TypewriterTiming::default());
        for _ in 0..7 {
            writer.step();
        }
        assert_eq!(writer.frame().plain_text(), "你好，我是 张");
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let mut writer = Typewriter::new("", "", TypewriterTiming::default());
        assert_eq!(writer.step(), Phase::Finishing);
        assert_eq!(writer.frame().plain_text(), "");
    }
}
