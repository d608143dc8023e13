//! The dataset - the flat list of integers every structure and algorithm
//! animates over.
//!
//! The dataset starts empty, is populated by user actions, and is fully
//! replaced by "generate random" and "clear". It is never persisted.

use rand::Rng;

/// Bounds for randomly generated datasets
const RANDOM_MIN_LEN: usize = 5;
const RANDOM_MAX_LEN: usize = 14;
const RANDOM_MAX_VALUE: i64 = 100;

/// Ordered sequence of integers, no uniqueness constraint
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a value at the end (array push / list append / stack push /
    /// queue enqueue all share this)
    pub fn insert(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Remove the first occurrence of `value`, if any
    pub fn delete(&mut self, value: i64) -> bool {
        match self.values.iter().position(|&v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the last value (stack pop)
    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop()
    }

    /// Remove and return the first value (queue dequeue)
    pub fn dequeue(&mut self) -> Option<i64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.remove(0))
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Replace the whole dataset (used when a sort run commits its result)
    pub fn replace(&mut self, values: Vec<i64>) {
        self.values = values;
    }

    /// Replace the dataset with 5-14 random values in 1..=100
    pub fn generate_random(&mut self) {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(RANDOM_MIN_LEN..=RANDOM_MAX_LEN);
        self.values = (0..count).map(|_| rng.gen_range(1..=RANDOM_MAX_VALUE)).collect();
    }
}

/// Parse a typed value. Anything that is not an integer is silently ignored.
pub fn parse_value(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete_first_occurrence() {
        let mut data = Dataset::new();
        data.insert(5);
        data.insert(3);
        data.insert(5);

        assert!(data.delete(5));
        assert_eq!(data.values(), &[3, 5]);

        assert!(!data.delete(42));
        assert_eq!(data.values(), &[3, 5]);
    }

    #[test]
    fn test_pop_and_dequeue() {
        let mut data = Dataset::new();
        data.insert(1);
        data.insert(2);
        data.insert(3);

        assert_eq!(data.pop(), Some(3));
        assert_eq!(data.dequeue(), Some(1));
        assert_eq!(data.values(), &[2]);

        data.clear();
        assert_eq!(data.pop(), None);
        assert_eq!(data.dequeue(), None);
    }

    #[test]
    fn test_generate_random_bounds() {
        let mut data = Dataset::new();
        for _ in 0..20 {
            data.generate_random();
            assert!(data.len() >= RANDOM_MIN_LEN && data.len() <= RANDOM_MAX_LEN);
            assert!(data.values().iter().all(|&v| (1..=RANDOM_MAX_VALUE).contains(&v)));
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), Some(42));
        assert_eq!(parse_value(" -7 "), Some(-7));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("4.2"), None);
    }
}
