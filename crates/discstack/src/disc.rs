use crate::{PLACEHOLDER_COUNT, PLACEHOLDER_SCORE, REST_ANGLE};

#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub score: f64,
    /// Score relative to the reference disc of the last committed gesture.
    /// `None` until a gesture has referenced this disc.
    pub score_percent: Option<f64>,
    pub angle_degrees: f64,
    pub visible: bool,
    pub label: String,
}

impl Disc {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            score_percent: None,
            angle_degrees: REST_ANGLE,
            visible: true,
            label: format_score(score),
        }
    }

    /// Scale the disc rests at while it sits on the orbit.
    pub fn resting_scale(&self) -> f64 {
        self.score_percent.unwrap_or(1.0)
    }
}

/// Discs sorted by score, highest first. Index 0 is the centre disc and the
/// active index points at the disc currently on top of the centre stack.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscStack {
    discs: Vec<Disc>,
    active: usize,
}

impl DiscStack {
    pub fn from_scores(scores: &[f64]) -> Self {
        let mut sorted = if scores.is_empty() {
            vec![PLACEHOLDER_SCORE; PLACEHOLDER_COUNT]
        } else {
            scores.to_vec()
        };
        sorted.sort_by(|a, b| b.total_cmp(a));

        let discs: Vec<Disc> = sorted.into_iter().map(Disc::new).collect();
        debug_assert!(!discs.is_empty(), "disc stack built with no discs");
        let active = discs.len() - 1;

        Self { discs, active }
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub(crate) fn discs_mut(&mut self) -> &mut [Disc] {
        &mut self.discs
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.discs.len() - 1
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub(crate) fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.discs.len());
        self.active = index;
    }

    pub fn get(&self, index: usize) -> Option<&Disc> {
        self.discs.get(index)
    }

    /// Whether the disc rests on the orbit rather than in the centre stack.
    pub fn is_orbiting(&self, index: usize) -> bool {
        index > self.active
    }
}

/// At most two decimals, without trailing zeros.
pub fn format_score(score: f64) -> String {
    let s = format!("{score:.2}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    match s {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// `score / reference`, clamped to [0, 1]. A non-positive reference only admits
/// an equal score as full size.
pub fn score_percent(score: f64, reference: f64) -> f64 {
    if reference > 0.0 {
        (score / reference).clamp(0.0, 1.0)
    } else if score == reference {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(stack: &DiscStack) -> Vec<f64> {
        stack.discs().iter().map(|d| d.score).collect()
    }

    #[test]
    fn test_stack_sorted_descending() {
        let stack = DiscStack::from_scores(&[60.0, 75.0, 75.0, 75.0, 80.0, 90.0, 100.0, 60.0]);
        assert_eq!(
            scores(&stack),
            vec![100.0, 90.0, 80.0, 75.0, 75.0, 75.0, 60.0, 60.0]
        );
        assert_eq!(stack.active_index(), 7);
        assert_eq!(stack.active_index(), stack.last_index());
    }

    #[test]
    fn test_stack_invariants_for_many_inputs() {
        let inputs: Vec<Vec<f64>> = vec![
            vec![1.0],
            vec![3.0, 1.0, 2.0],
            vec![0.5, 0.25, 0.75, 0.25],
            vec![-1.0, 0.0, 2.5],
            (0..40).map(|i| ((i * 37) % 11) as f64).collect(),
        ];

        for input in inputs {
            let stack = DiscStack::from_scores(&input);
            assert_eq!(stack.len(), input.len());
            assert!(stack.discs().windows(2).all(|w| w[0].score >= w[1].score));
            assert_eq!(stack.active_index(), input.len() - 1);
            assert!(stack.discs().iter().all(|d| d.visible && d.score_percent.is_none()));
        }
    }

    #[test]
    fn test_empty_scores_use_placeholders() {
        let stack = DiscStack::from_scores(&[]);
        assert_eq!(stack.len(), PLACEHOLDER_COUNT);
        assert!(stack.discs().iter().all(|d| d.score == PLACEHOLDER_SCORE));
        assert_eq!(stack.active_index(), PLACEHOLDER_COUNT - 1);
    }

    #[test]
    fn test_format_score() {
        let cases = vec![
            (75.0, "75"),
            (0.5, "0.5"),
            (1.234, "1.23"),
            (2.999, "3"),
            (100.10, "100.1"),
            (-0.001, "0"),
            (-2.5, "-2.5"),
        ];

        for (score, expected) in cases {
            assert_eq!(format_score(score), expected);
        }
    }

    #[test]
    fn test_score_percent() {
        assert_eq!(score_percent(60.0, 75.0), 0.8);
        assert_eq!(score_percent(75.0, 75.0), 1.0);
        assert_eq!(score_percent(90.0, 75.0), 1.0);
        assert_eq!(score_percent(-1.0, 5.0), 0.0);
        assert_eq!(score_percent(0.0, 0.0), 1.0);
        assert_eq!(score_percent(-3.0, 0.0), 0.0);
    }
}
