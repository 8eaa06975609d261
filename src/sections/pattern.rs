//! Pattern analysis section - detects repetitive and sequential runs.

use secrecy::{ExposeSecret, SecretString};

const MIN_REPEAT_RUN: usize = 3;
const MIN_SEQUENCE_RUN: usize = 4;

/// Characters that add nothing to the search space because they continue a
/// run started by the character before them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFindings {
    /// From runs like `aaa`.
    pub repeated: usize,
    /// From runs like `1234` or `dcba`.
    pub sequential: usize,
}

impl PatternFindings {
    pub fn redundant_chars(&self) -> usize {
        self.repeated + self.sequential
    }

    pub fn is_empty(&self) -> bool {
        self.redundant_chars() == 0
    }
}

/// Counts the characters that continue a repeated or sequential run.
///
/// Repeats count from three identical characters, sequences from four
/// consecutive code points in one direction.
pub fn pattern_analysis_section(password: &SecretString) -> PatternFindings {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let step = |a: char, b: char| b as i64 - a as i64;
    PatternFindings {
        repeated: run_excess(&chars, MIN_REPEAT_RUN, |a, b| step(a, b) == 0),
        sequential: run_excess(&chars, MIN_SEQUENCE_RUN, |a, b| step(a, b) == 1)
            + run_excess(&chars, MIN_SEQUENCE_RUN, |a, b| step(a, b) == -1),
    }
}

fn run_excess(chars: &[char], min_run: usize, linked: impl Fn(char, char) -> bool) -> usize {
    let mut excess = 0;
    let mut run = 1;
    for pair in chars.windows(2) {
        if linked(pair[0], pair[1]) {
            run += 1;
            continue;
        }
        if run >= min_run {
            excess += run - 1;
        }
        run = 1;
    }
    if run >= min_run {
        excess += run - 1;
    }
    excess
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(pwd: &str) -> PatternFindings {
        pattern_analysis_section(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let found = findings("aaaaBBBB1111");
        assert_eq!(found.repeated, 9);
        assert_eq!(found.sequential, 0);
    }

    #[test]
    fn test_pattern_section_short_repeat_ignored() {
        assert!(findings("aabbcc").is_empty());
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        let found = findings("test1234abcd");
        assert_eq!(found.sequential, 6);
    }

    #[test]
    fn test_pattern_section_descending_sequence() {
        assert_eq!(findings("x9876y").sequential, 3);
    }

    #[test]
    fn test_pattern_section_alternating_is_not_sequential() {
        assert!(findings("abababab").is_empty());
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert!(findings("RandomPass123!@#Word").is_empty());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert!(findings("ab").is_empty());
        assert!(findings("").is_empty());
    }
}
