use std::cmp::Ordering;

/// A distinct word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub value: String,
    pub count: usize,
}

impl WordCount {
    #[must_use]
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }

    /// Number of decimal digits in `count`.
    #[must_use]
    pub fn count_width(&self) -> usize {
        self.count.checked_ilog10().map_or(1, |d| d as usize + 1)
    }
}

/// Collapse runs of equal tokens into counts, most frequent first.
///
/// `tokens` must already be sorted; equal words that are not adjacent end up
/// as separate entries.
#[must_use]
pub fn aggregate(tokens: Vec<String>) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match words.last_mut() {
            Some(last) if last.value == token => last.count += 1,
            _ => words.push(WordCount::new(token, 1)),
        }
    }

    sort_by_frequency(&mut words);
    log::debug!("aggregated {} distinct words", words.len());
    words
}

/// Order by count descending. Equal counts fall back to ascending word order.
pub fn sort_by_frequency(words: &mut [WordCount]) {
    words.sort_by(by_frequency);
}

fn by_frequency(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value))
}
