//! The tactical rule table.
//!
//! Rules are ordered by urgency: completing an own five comes first, blocking
//! an opponent's five second, and so on down to simply extending a lone
//! stone. The table is consulted twice by the selector, once to gate which
//! cells are worth playing ([`match_priority`]) and once to break ties
//! between them ([`score_weight`]).

use crate::scan::LineScan;

/// Whose stones a rule is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    /// The player choosing the move.
    Own,
    /// Any other player.
    Opponent,
}

/// One row of the rule table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub subject: Subject,
    pub min_hits: usize,
    pub min_open_ends: usize,
}

impl Rule {
    const fn new(subject: Subject, min_hits: usize, min_open_ends: usize) -> Self {
        Self {
            subject,
            min_hits,
            min_open_ends,
        }
    }

    /// Whether `scan` satisfies this rule's shape, ignoring the subject.
    ///
    /// A run that can no longer grow to a winning length never matches.
    pub fn matches(&self, scan: &LineScan) -> bool {
        scan.hits >= self.min_hits
            && scan.open_ends() >= self.min_open_ends
            && scan.can_reach_goal()
    }
}

use Subject::{Opponent as Opp, Own};

/// Rule table, most urgent first.
pub const RULES: [Rule; 17] = [
    Rule::new(Own, 5, 1),
    Rule::new(Opp, 5, 1),
    Rule::new(Own, 4, 2),
    Rule::new(Own, 4, 1),
    Rule::new(Opp, 4, 2),
    Rule::new(Own, 3, 2),
    Rule::new(Opp, 3, 2),
    Rule::new(Opp, 4, 1),
    Rule::new(Own, 3, 1),
    Rule::new(Own, 2, 2),
    Rule::new(Own, 2, 1),
    Rule::new(Opp, 3, 1),
    Rule::new(Opp, 2, 2),
    Rule::new(Opp, 2, 1),
    Rule::new(Own, 2, 0),
    Rule::new(Opp, 2, 0),
    Rule::new(Own, 1, 0),
];

/// Index of the first rule about `subject` that `scan` matches.
pub fn match_priority(subject: Subject, scan: &LineScan) -> Option<usize> {
    RULES
        .iter()
        .position(|rule| rule.subject == subject && rule.matches(scan))
}

/// Tie-break weight of `scan`: `RULES.len() - i` for the first matching rule
/// `i` of either subject, or 0.
pub fn score_weight(scan: &LineScan) -> usize {
    RULES
        .iter()
        .position(|rule| rule.matches(scan))
        .map_or(0, |i| RULES.len() - i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(hits: usize, blank_prev: usize, blank_next: usize) -> LineScan {
        LineScan {
            direction: (1, 0),
            hits,
            blank_prev,
            blank_next,
            ends: [(0, 0), (0, 0)],
        }
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(RULES.len(), 17);
        assert_eq!(RULES[0], Rule::new(Own, 5, 1));
        assert_eq!(RULES[7], Rule::new(Opp, 4, 1));
        assert_eq!(RULES[16], Rule::new(Own, 1, 0));
    }

    #[test]
    fn test_matches_requires_room_to_five() {
        let rule = Rule::new(Own, 2, 2);
        assert!(rule.matches(&line(2, 2, 1)));
        assert!(!rule.matches(&line(2, 1, 1)));
        assert!(!rule.matches(&line(2, 0, 5)));
    }

    #[test]
    fn test_match_priority_by_subject() {
        // Open four on one side only.
        let four = line(4, 0, 1);
        assert_eq!(match_priority(Subject::Own, &four), Some(3));
        assert_eq!(match_priority(Subject::Opponent, &four), Some(7));

        let open_three = line(3, 1, 1);
        assert_eq!(match_priority(Subject::Own, &open_three), Some(5));
        assert_eq!(match_priority(Subject::Opponent, &open_three), Some(6));

        let dead = line(4, 0, 0);
        assert_eq!(match_priority(Subject::Own, &dead), None);
        assert_eq!(match_priority(Subject::Opponent, &dead), None);
    }

    #[test]
    fn test_five_needs_an_open_end() {
        assert_eq!(match_priority(Subject::Own, &line(5, 0, 1)), Some(0));
        // Enclosed five: only the last own rule still fits.
        assert_eq!(match_priority(Subject::Own, &line(5, 0, 0)), Some(14));
    }

    #[test]
    fn test_score_weight_ignores_subject() {
        assert_eq!(score_weight(&line(5, 1, 0)), 17);
        assert_eq!(score_weight(&line(4, 1, 1)), 15);
        assert_eq!(score_weight(&line(3, 1, 1)), 12);
        assert_eq!(score_weight(&line(1, 2, 2)), 1);
        assert_eq!(score_weight(&line(1, 1, 2)), 0);
    }
}
