//! Static [`WordSource`]: a fixed answer list, accepted guesses are answers plus extras.

use std::collections::HashSet;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::ports::WordSource;
use crate::core::word::normalize;
use crate::types::WORD_LENGTH;

/// Answers shipped with the game
pub const BUILTIN_ANSWERS: &[&str] = &[
    "about", "above", "actor", "adapt", "adore", "after", "agent", "alarm", "album", "alert",
    "alive", "angle", "apple", "arena", "badge", "baker", "beach", "berry", "blame", "blend",
    "board", "brave", "bread", "brick", "cabin", "candy", "chair", "charm", "chess", "cider",
    "clock", "cloud", "crane", "crisp", "crown", "dance", "delta", "drift", "eagle", "earth",
    "elbow", "ember", "fable", "feast", "flame", "flint", "frost", "giant", "glove", "grape",
    "heart", "honey", "house", "ivory", "jelly", "knife", "lemon", "level", "lever", "light",
    "maple", "medal", "mango", "noble", "ocean", "olive", "pearl", "piano", "plant", "queen",
    "quiet", "raven", "river", "robin", "salad", "scale", "shade", "slate", "smile", "spice",
    "stone", "storm", "sugar", "table", "tiger", "toast", "trail", "tulip", "vivid", "waltz",
    "whale", "wheat", "yacht", "zebra",
];

/// Extra words accepted as guesses but never chosen as answers
const BUILTIN_EXTRA_GUESSES: &[&str] = &[
    "abide", "cater", "eerie", "geese", "level", "mamma", "speed", "those", "trace", "crate",
];

#[derive(Debug)]
pub struct StaticWordSource {
    answers: Vec<String>,
    allowed: HashSet<String>,
    rng: Mutex<StdRng>,
}

impl StaticWordSource {
    /// Build from an answer list. Entries of the wrong length and repeats are dropped,
    /// keeping first-seen order; if nothing usable remains, the built-in list is used.
    pub fn new<I, S>(answers: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut answers: Vec<String> = answers
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| word.chars().count() == WORD_LENGTH)
            .filter(|word| seen.insert(word.clone()))
            .collect();
        if answers.is_empty() {
            answers = BUILTIN_ANSWERS.iter().map(|w| w.to_string()).collect();
        }

        let allowed = answers
            .iter()
            .cloned()
            .chain(BUILTIN_EXTRA_GUESSES.iter().map(|w| w.to_string()))
            .collect();

        Self {
            answers,
            allowed,
            rng: Mutex::new(rng),
        }
    }

    pub fn builtin(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(BUILTIN_ANSWERS.iter().copied(), rng)
    }
}

impl WordSource for StaticWordSource {
    fn is_valid_word(&self, token: &str) -> bool {
        self.allowed.contains(&normalize(token))
    }

    fn pick_random_answer(&self) -> String {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // `answers` is never empty, see `new`.
        self.answers
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_else(|| BUILTIN_ANSWERS[0].to_string())
    }

    fn list_all_answers(&self) -> Vec<String> {
        self.answers.clone()
    }
}
