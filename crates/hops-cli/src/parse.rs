//! Line-oriented puzzle input.
//!
//! ```text
//! 2            number of test cases
//! 5 5          width height
//! 0 0 4 4      start x, start y, finish x, finish y
//! 1            number of obstacles
//! 2 2 2 2      left right upper lower   (one line per obstacle)
//! 3 3          ...next test case
//! 0 0 2 2
//! 0
//! ```
//!
//! Every line is trimmed and blank lines are skipped, so indented or
//! double-spaced input parses the same. Anything after the last test case is
//! ignored.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use hops_core::{ObstacleRect, Point, TestCase};
use thiserror::Error;

/// Where in the input a [`ParseError`] happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    /// One-based test case number, if inside a test case.
    pub case: Option<usize>,
    /// One-based obstacle number within the test case.
    pub obstacle: Option<usize>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(case) = self.case {
            write!(f, " at test case {case}")?;
        }
        if let Some(obstacle) = self.obstacle {
            write!(f, ", obstacle {obstacle}")?;
        }
        Ok(())
    }
}

/// Malformed puzzle input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended before a required line.
    #[error("missing {what}{at}")]
    MissingLine { what: &'static str, at: Location },

    /// A line has the wrong number of whitespace-separated values.
    #[error("expected {expected} value(s) for {what}{at}, found {found}")]
    FieldCount {
        what: &'static str,
        at: Location,
        expected: usize,
        found: usize,
    },

    /// A value is not an integer of the expected kind.
    #[error("invalid {what}{at}: {token:?}")]
    InvalidNumber {
        what: &'static str,
        at: Location,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Trimmed, non-blank input lines.
struct Lines<I> {
    iter: I,
}

impl<'a, I: Iterator<Item = &'a str>> Lines<I> {
    fn new(lines: I) -> Self {
        Self { iter: lines }
    }

    /// Read the next line as exactly `N` integers.
    fn numbers<T, const N: usize>(
        &mut self,
        what: &'static str,
        at: Location,
    ) -> Result<[T; N], ParseError>
    where
        T: FromStr<Err = ParseIntError> + Copy + Default,
    {
        let line = self
            .iter
            .next()
            .ok_or(ParseError::MissingLine { what, at })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != N {
            return Err(ParseError::FieldCount {
                what,
                at,
                expected: N,
                found: tokens.len(),
            });
        }
        let mut out = [T::default(); N];
        for (slot, token) in out.iter_mut().zip(tokens) {
            *slot = token.parse().map_err(|source| ParseError::InvalidNumber {
                what,
                at,
                token: token.to_string(),
                source,
            })?;
        }
        Ok(out)
    }
}

/// Parse the whole input into test cases, in input order.
pub fn parse_input(input: &str) -> Result<Vec<TestCase>, ParseError> {
    let mut lines = Lines::new(input.lines().map(str::trim).filter(|l| !l.is_empty()));
    let [count] = lines.numbers::<usize, 1>("number of test cases", Location::default())?;

    let mut cases = Vec::new();
    for n in 1..=count {
        let at = Location {
            case: Some(n),
            obstacle: None,
        };
        let [width, height] = lines.numbers::<i32, 2>("grid dimensions", at)?;
        let [sx, sy, fx, fy] = lines.numbers::<i32, 4>("start/finish points", at)?;
        let [obstacle_count] = lines.numbers::<usize, 1>("number of obstacles", at)?;

        let mut obstacles = Vec::new();
        for o in 1..=obstacle_count {
            let at = Location {
                obstacle: Some(o),
                ..at
            };
            let [left, right, upper, lower] = lines.numbers::<i32, 4>("obstacle bounds", at)?;
            obstacles.push(ObstacleRect::new(left, right, upper, lower));
        }

        cases.push(TestCase {
            width,
            height,
            start: Point::new(sx, sy),
            finish: Point::new(fx, fy),
            obstacles,
        });
    }
    log::debug!("parsed {} test case(s)", cases.len());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CASES: &str = "
        2
        5 5
        0 0 4 4
        1
        2 2 2 2
        3 3
        0 0 2 2
        1
        1 1 1 1
    ";

    #[test]
    fn single_case_without_obstacles() {
        let cases = parse_input("1\n5 5\n0 0 4 4\n0\n").unwrap();
        assert_eq!(
            cases,
            vec![TestCase::new(5, 5, Point::new(0, 0), Point::new(4, 4))]
        );
    }

    #[test]
    fn indented_multi_case_input() {
        let cases = parse_input(TWO_CASES).unwrap();
        assert_eq!(
            cases,
            vec![
                TestCase::new(5, 5, Point::new(0, 0), Point::new(4, 4))
                    .with_obstacle(ObstacleRect::new(2, 2, 2, 2)),
                TestCase::new(3, 3, Point::new(0, 0), Point::new(2, 2))
                    .with_obstacle(ObstacleRect::new(1, 1, 1, 1)),
            ]
        );
    }

    #[test]
    fn obstacle_fields_in_left_right_upper_lower_order() {
        let cases = parse_input("1\n6 6\n0 0 5 5\n1\n1 3 2 4").unwrap();
        assert_eq!(cases[0].obstacles, vec![ObstacleRect::new(1, 3, 2, 4)]);
    }

    #[test]
    fn zero_cases() {
        assert_eq!(parse_input("0"), Ok(vec![]));
    }

    #[test]
    fn invalid_case_count() {
        let err = parse_input("abc\n5 5\n0 0 4 4\n0").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                what: "number of test cases",
                ..
            }
        ));
        assert_eq!(err.to_string(), r#"invalid number of test cases: "abc""#);
    }

    #[test]
    fn invalid_grid_dimensions() {
        let err = parse_input("1\n5 abc\n0 0 4 4\n0").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid grid dimensions at test case 1: "abc""#
        );
    }

    #[test]
    fn invalid_start_finish() {
        let err = parse_input("1\n5 5\n0 abc 4 4\n0").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                what: "start/finish points",
                ..
            }
        ));
    }

    #[test]
    fn invalid_obstacle_count() {
        let err = parse_input("1\n5 5\n0 0 4 4\nabc").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                what: "number of obstacles",
                ..
            }
        ));
        let err = parse_input("1\n5 5\n0 0 4 4\n-1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn invalid_obstacle_coordinates() {
        let err = parse_input("2\n3 3\n0 0 2 2\n0\n5 5\n0 0 4 4\n2\n1 1 1 1\n2 abc 2 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid obstacle bounds at test case 2, obstacle 2: "abc""#
        );
    }

    #[test]
    fn wrong_field_count() {
        let err = parse_input("1\n5 5 5\n0 0 4 4\n0").unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldCount {
                what: "grid dimensions",
                at: Location {
                    case: Some(1),
                    obstacle: None
                },
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn truncated_input() {
        let err = parse_input("2\n5 5\n0 0 4 4\n0\n").unwrap_err();
        assert_eq!(err.to_string(), "missing grid dimensions at test case 2");
        assert!(matches!(
            parse_input(""),
            Err(ParseError::MissingLine {
                what: "number of test cases",
                ..
            })
        ));
    }

    #[test]
    fn trailing_lines_ignored() {
        let cases = parse_input("1\n1 1\n0 0 0 0\n0\nleftover").unwrap();
        assert_eq!(cases.len(), 1);
    }
}
