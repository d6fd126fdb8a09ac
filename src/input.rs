//! Parsing of comma-separated numeric input.
//!
//! Triangles are entered as `a,b,c` and query points as `x,y`. Tokens are
//! trimmed of surrounding whitespace, so `3, 4, 5` is accepted. The decimal
//! separator is always `.` since `,` delimits values.

use crate::error::{Result, TriangleError};
use crate::primitives::Point2;
use num_traits::Float;
use std::str::FromStr;

/// Splits `input` on commas and parses exactly `N` numbers.
///
/// The token count is checked before any token is parsed.
pub fn parse_values<F: FromStr, const N: usize>(input: &str) -> Result<[F; N]> {
    let tokens: Vec<&str> = input.trim_end_matches(['\r', '\n']).split(',').collect();
    if tokens.len() != N {
        return Err(TriangleError::WrongValueCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let values = tokens
        .into_iter()
        .map(parse_number)
        .collect::<Result<Vec<F>>>()?;

    values
        .try_into()
        .map_err(|rest: Vec<F>| TriangleError::WrongValueCount {
            expected: N,
            found: rest.len(),
        })
}

/// Parses a query point written as `x,y`.
pub fn parse_point<F: Float + FromStr>(input: &str) -> Result<Point2<F>> {
    let [x, y] = parse_values::<F, 2>(input)?;
    Ok(Point2::new(x, y))
}

fn parse_number<F: FromStr>(token: &str) -> Result<F> {
    let token = token.trim();
    token.parse().map_err(|_| TriangleError::InvalidNumber {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_values() {
        let values: [f64; 3] = parse_values("3,4,5").unwrap();
        assert_eq!(values, [3.0, 4.0, 5.0]);

        let values: [f64; 3] = parse_values(" 1.5 , 2 ,2.5\n").unwrap();
        assert_eq!(values, [1.5, 2.0, 2.5]);
    }

    #[test]
    fn test_wrong_count() {
        let err = parse_values::<f64, 3>("1,2").unwrap_err();
        assert!(matches!(
            err,
            TriangleError::WrongValueCount {
                expected: 3,
                found: 2
            }
        ));

        let err = parse_values::<f64, 3>("").unwrap_err();
        assert!(matches!(err, TriangleError::WrongValueCount { found: 1, .. }));

        let err = parse_values::<f64, 2>("1,2,3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_count_checked_before_numbers() {
        let err = parse_values::<f64, 3>("a,b").unwrap_err();
        assert!(matches!(err, TriangleError::WrongValueCount { .. }));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_values::<f64, 3>("1, x ,3").unwrap_err();
        match err {
            TriangleError::InvalidNumber { token } => assert_eq!(token, "x"),
            other => panic!("unexpected error: {other:?}"),
        }

        // Decimal commas split into extra tokens.
        let err = parse_values::<f64, 3>("1,5,2,3").unwrap_err();
        assert!(matches!(err, TriangleError::WrongValueCount { found: 4, .. }));
    }

    #[test]
    fn test_parse_point() {
        let p: Point2<f64> = parse_point("1,-2.5").unwrap();
        assert_eq!(p, Point2::new(1.0, -2.5));

        assert!(parse_point::<f64>("1").is_err());
        assert!(parse_point::<f64>("1;2").is_err());
    }
}
