use derive_more::{AsRef, Deref, From, Into};
use serde_with::DeserializeFromStr;
use std::str::FromStr;
use thiserror::Error;

const SEPARATORS: &[char] = &[',', ';', '\n', '\r'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreInputError {
    #[error("No numbers found. Enter scores separated by commas or new lines.")]
    Empty,
}

/// Splits on commas and line breaks, keeping every token that reads as a
/// finite number and silently dropping the rest.
pub fn parse_scores(text: &str) -> Result<Vec<f64>, ScoreInputError> {
    let scores: Vec<f64> = text
        .split(SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|score| score.is_finite())
        .collect();

    if scores.is_empty() {
        return Err(ScoreInputError::Empty);
    }
    Ok(scores)
}

#[derive(Debug, Clone, PartialEq, Default, Deref, From, Into, AsRef, DeserializeFromStr)]
pub struct ScoreList(Vec<f64>);

impl FromStr for ScoreList {
    type Err = ScoreInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scores(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scores() {
        let cases = vec![
            ("60, 75, 100", vec![60.0, 75.0, 100.0]),
            ("1\n2\r\n3", vec![1.0, 2.0, 3.0]),
            ("  4.5 ;; 0.25 ,", vec![4.5, 0.25]),
            ("abc, 7, x9, 8", vec![7.0, 8.0]),
            ("-2, nan, inf, 1e2", vec![-2.0, 100.0]),
        ];

        for (text, expected) in cases {
            assert_eq!(parse_scores(text).unwrap(), expected, "input {text:?}");
        }
    }

    #[test]
    fn test_parse_scores_empty() {
        for text in ["", "   ", ",,\n", "one, two"] {
            assert_eq!(parse_scores(text), Err(ScoreInputError::Empty));
        }
    }

    #[test]
    fn test_score_list_deserialization() {
        let list: ScoreList = serde_json::from_str("\"3, 1.5\n2\"").unwrap();
        assert_eq!(*list, vec![3.0, 1.5, 2.0]);

        assert!(serde_json::from_str::<ScoreList>("\"none\"").is_err());
    }
}
