/// Timings for [`Typewriter`], in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub type_speed: u32,
    pub back_speed: u32,
    /// Pause on a fully typed string before erasing it.
    pub back_delay: u32,
    pub looping: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_speed: 40,
            back_speed: 30,
            back_delay: 700,
            looping: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// Types a list of strings one character at a time, erases them, and
/// moves on to the next.
///
/// Erasing stops early when the visible text is already a prefix of the next
/// string, so shared openings like "Je " are typed once. Wrapping around from
/// the last string to the first always erases everything.
#[derive(Debug, Clone)]
pub struct Typewriter {
    strings: Vec<Vec<char>>,
    config: TypingConfig,
    index: usize,
    visible: usize,
    phase: Phase,
    wait: u32,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(strings: &[S], config: TypingConfig) -> Self {
        let strings = strings
            .iter()
            .map(|s| s.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let phase = if strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            strings,
            config,
            index: 0,
            visible: 0,
            phase,
            wait: config.type_speed.max(1),
        }
    }

    pub fn text(&self) -> String {
        match self.strings.get(self.index) {
            Some(s) => s[..self.visible].iter().collect(),
            None => String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Consumes `elapsed` milliseconds. Returns whether the visible text changed.
    pub fn advance(&mut self, elapsed: u32) -> bool {
        let mut elapsed = elapsed;
        let mut changed = false;
        while self.phase != Phase::Done && elapsed >= self.wait {
            elapsed -= self.wait;
            changed |= self.step();
        }
        if self.phase != Phase::Done {
            self.wait -= elapsed;
        }
        changed
    }

    fn current_len(&self) -> usize {
        self.strings[self.index].len()
    }

    /// Length of the prefix shared with the next string, if erasing may stop there.
    fn keep_on_erase(&self) -> usize {
        let Some(next) = self.strings.get(self.index + 1) else {
            return 0;
        };
        let current = &self.strings[self.index];
        current
            .iter()
            .zip(next.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn step(&mut self) -> bool {
        match self.phase {
            Phase::Typing => {
                if self.visible < self.current_len() {
                    self.visible += 1;
                    self.wait = self.config.type_speed.max(1);
                    return true;
                }
                let is_last = self.index + 1 == self.strings.len();
                if is_last && !self.config.looping {
                    self.phase = Phase::Done;
                } else {
                    self.phase = Phase::Holding;
                    self.wait = self.config.back_delay.max(1);
                }
                false
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.wait = self.config.back_speed.max(1);
                false
            }
            Phase::Deleting => {
                if self.visible > self.keep_on_erase() {
                    self.visible -= 1;
                    self.wait = self.config.back_speed.max(1);
                    return true;
                }
                self.index = (self.index + 1) % self.strings.len();
                self.phase = Phase::Typing;
                self.wait = self.config.type_speed.max(1);
                false
            }
            Phase::Done => false,
        }
    }
}
