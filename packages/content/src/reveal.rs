//! Symbol-to-letter reveal of the name heading.
//!
//! Character `i` stays hidden behind a random symbol until frame
//! `frames * 3 / 10 + 2 * i`; spaces are never hidden. The final tick always
//! yields the exact target string, whatever the frame count.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{RevealConfig, DEFAULT_SYMBOLS};

#[derive(Clone, Debug)]
pub struct NameReveal {
    target: String,
    chars: Vec<char>,
    thresholds: Vec<u64>,
    symbols: Vec<char>,
    frames: u32,
    frame: u32,
    finished: bool,
}

impl NameReveal {
    pub fn new(target: &str, config: &RevealConfig) -> Self {
        let chars: Vec<char> = target.chars().collect();
        // u64 so that any configured frame count stays in range.
        let first = u64::from(config.frames) * 3 / 10;
        let thresholds = (0..chars.len() as u64).map(|i| first + 2 * i).collect();

        let symbols = if config.symbols.is_empty() {
            DEFAULT_SYMBOLS
        } else {
            config.symbols.as_str()
        };

        Self {
            target: target.to_string(),
            chars,
            thresholds,
            symbols: symbols.chars().collect(),
            frames: config.frames,
            frame: 0,
            finished: false,
        }
    }

    /// Frame at which each character shows its true value.
    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one timer tick and return the text to display, or `None` once
    /// the animation is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.finished {
            return None;
        }

        let text = self.scramble(rng);
        self.frame += 1;

        if self.frame >= self.frames {
            self.finished = true;
            return Some(self.target.clone());
        }
        Some(text)
    }

    fn scramble<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.chars
            .iter()
            .zip(&self.thresholds)
            .map(|(&c, &threshold)| {
                if c == ' ' || u64::from(self.frame) >= threshold {
                    c
                } else {
                    *self.symbols.choose(&mut *rng).unwrap_or(&c)
                }
            })
            .collect()
    }
}
