/// Which stage of the reveal effect the widget is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing,
    Done,
}

/// State machine behind the code-window typewriter effect.
///
/// One `tick()` reveals exactly one character. The scheduler (an interval on
/// the client) owns the timing; this struct only tracks how much of the text
/// is visible and whether typing has finished, so the reveal logic can be
/// tested without a browser.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    // byte offset just past each character, so `visible` never splits a code point
    offsets: Vec<usize>,
    revealed: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let offsets = char_ends(&text);
        Self {
            text,
            offsets,
            revealed: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Total number of characters in the source text.
    pub fn total(&self) -> usize {
        self.offsets.len()
    }

    /// Number of characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Begin typing. An empty text has nothing to reveal and is immediately done.
    pub fn start(&mut self) {
        self.revealed = 0;
        self.phase = if self.offsets.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
    }

    /// Reveal one character. Returns `true` on the tick that reveals the last
    /// character, i.e. "done" is signaled exactly once.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        self.revealed += 1;
        if self.revealed == self.total() {
            self.phase = Phase::Done;
            return true;
        }
        false
    }

    /// The revealed prefix of the source text.
    pub fn visible(&self) -> &str {
        if self.revealed == 0 {
            return "";
        }
        &self.text[..self.offsets[self.revealed - 1]]
    }

    /// Replace the source text and drop back to `Idle` with nothing revealed.
    /// The caller restarts ticking with `start()`.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.offsets = char_ends(&self.text);
        self.revealed = 0;
        self.phase = Phase::Idle;
    }
}

fn char_ends(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick() {
        let text = "fn main() {}";
        let mut tw = Typewriter::new(text);
        tw.start();
        for i in 1..=text.len() {
            let finished = tw.tick();
            assert_eq!(tw.revealed(), i);
            assert_eq!(tw.visible(), &text[..i]);
            assert_eq!(finished, i == text.len());
        }
        assert!(tw.is_done());
    }

    #[test]
    fn done_signaled_exactly_once() {
        let mut tw = Typewriter::new("abc");
        tw.start();
        let mut done_count = 0;
        // extra ticks past the end must be no-ops
        for _ in 0..10 {
            if tw.tick() {
                done_count += 1;
            }
        }
        assert_eq!(done_count, 1);
        assert_eq!(tw.revealed(), 3);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn empty_text_is_done_at_start() {
        let mut tw = Typewriter::new("");
        assert_eq!(tw.phase(), Phase::Idle);
        tw.start();
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn reset_returns_to_idle_with_nothing_revealed() {
        let mut tw = Typewriter::new("hello world");
        tw.start();
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.revealed(), 3);

        tw.reset("print('hi')");
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.revealed(), 0);
        assert_eq!(tw.visible(), "");

        // no ticks land before start()
        assert!(!tw.tick());
        assert_eq!(tw.revealed(), 0);

        tw.start();
        let total = tw.total();
        let mut appended = 0;
        while !tw.is_done() {
            tw.tick();
            appended += 1;
        }
        assert_eq!(appended, total);
    }

    #[test]
    fn multibyte_text_never_splits_a_code_point() {
        let text = "let wave = \"👋 héllo\";";
        let mut tw = Typewriter::new(text);
        tw.start();
        let mut last_len = 0;
        while !tw.is_done() {
            tw.tick();
            let visible = tw.visible();
            assert!(text.starts_with(visible));
            assert!(visible.len() >= last_len);
            last_len = visible.len();
        }
        assert_eq!(tw.visible(), text);
        assert_eq!(tw.total(), text.chars().count());
    }
}
