//! Line-oriented textual polygon format.
//!
//! The format is a whitespace-separated token stream: the contour count
//! first, then for every contour a header of `point-count 1` (the `1` is a
//! nesting-level placeholder) followed by one `x y` pair per point.
//!
//! ```text
//! 1
//! 4 1
//!     0 0
//!     1 0
//!     1 1
//!     0 1
//! ```
//!
//! The decoder drops adjacent duplicate points and a trailing point equal to
//! the first, and discards contours left with fewer than three points.
//!
//! # Example
//!
//! ```
//! use polybool::io::{decode_polygon, encode_polygon};
//! use polybool::Polygon;
//!
//! let polygon: Polygon<f64> = decode_polygon("1\n3 1\n\t0 0\n\t4 0\n\t4 4\n").unwrap();
//! let text = encode_polygon(&polygon);
//! assert_eq!(decode_polygon::<f64>(&text).unwrap(), polygon);
//! ```

use crate::polygon::{Contour, Polygon};
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::fmt::Write;

/// Error type for polygon decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input ended before all promised values were read.
    UnexpectedEnd,
    /// A count field did not parse as a non-negative integer.
    InvalidCount(String),
    /// A coordinate did not parse as a number.
    InvalidCoordinate(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEnd => write!(f, "Unexpected end of input"),
            DecodeError::InvalidCount(token) => write!(f, "Invalid count '{}'", token),
            DecodeError::InvalidCoordinate(token) => {
                write!(f, "Invalid coordinate '{}'", token)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Serializes a polygon.
pub fn encode_polygon<F: Float>(polygon: &Polygon<F>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", polygon.contours.len());
    for contour in &polygon.contours {
        let _ = writeln!(out, "{} 1", contour.len());
        for p in contour {
            let x = p.x.to_f64().unwrap_or(f64::NAN);
            let y = p.y.to_f64().unwrap_or(f64::NAN);
            let _ = writeln!(out, "\t{} {}", x, y);
        }
    }
    out
}

/// Parses a polygon serialized by [`encode_polygon`].
pub fn decode_polygon<F: Float>(input: &str) -> Result<Polygon<F>, DecodeError> {
    let mut tokens = input.split_whitespace();

    let num_contours = read_count(&mut tokens)?;
    let mut polygon = Polygon::new();
    for _ in 0..num_contours {
        let num_points = read_count(&mut tokens)?;
        let _level = read_count(&mut tokens)?;

        let mut contour = Contour::new();
        for j in 0..num_points {
            let x = read_coordinate::<F>(&mut tokens)?;
            let y = read_coordinate::<F>(&mut tokens)?;
            let p = Point2::new(x, y);
            if j > 0 && p == *contour.points.last().unwrap() {
                continue;
            }
            if j == num_points - 1 && !contour.is_empty() && p == contour.points[0] {
                continue;
            }
            contour.push(p);
        }
        if contour.len() < 3 {
            continue;
        }
        polygon.add(contour);
    }
    Ok(polygon)
}

fn read_count<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, DecodeError> {
    let token = tokens.next().ok_or(DecodeError::UnexpectedEnd)?;
    token
        .parse()
        .map_err(|_| DecodeError::InvalidCount(token.to_string()))
}

fn read_coordinate<'a, F: Float>(
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<F, DecodeError> {
    let token = tokens.next().ok_or(DecodeError::UnexpectedEnd)?;
    let value: f64 = token
        .parse()
        .map_err(|_| DecodeError::InvalidCoordinate(token.to_string()))?;
    F::from(value).ok_or_else(|| DecodeError::InvalidCoordinate(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(contours: &[&[(f64, f64)]]) -> Polygon<f64> {
        Polygon::from_contours(
            contours
                .iter()
                .map(|pts| {
                    Contour::from(
                        pts.iter()
                            .map(|&(x, y)| Point2::new(x, y))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_round_trip() {
        let poly = polygon(&[
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            &[(1.0, 1.0), (2.0, 1.5), (1.5, 2.0)],
        ]);
        let text = encode_polygon(&poly);
        let back: Polygon<f64> = decode_polygon(&text).unwrap();
        assert_eq!(back, poly);
    }

    #[test]
    fn test_encode_format() {
        let poly = polygon(&[&[(0.0, 0.0), (1.0, 0.0), (0.5, 2.5)]]);
        let text = encode_polygon(&poly);
        assert_eq!(text, "1\n3 1\n\t0 0\n\t1 0\n\t0.5 2.5\n");
    }

    #[test]
    fn test_decode_drops_duplicates() {
        // Adjacent duplicates and a trailing point equal to the first are
        // removed on read.
        let text = "1\n6 1\n0 0\n0 0\n1 0\n1 1\n1 1\n0 0\n";
        let poly: Polygon<f64> = decode_polygon(text).unwrap();
        assert_eq!(poly.contours.len(), 1);
        assert_eq!(poly.contours[0].len(), 3);
        assert_eq!(
            poly.contours[0].points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_decode_discards_short_contours() {
        let text = "2\n2 1\n0 0\n1 1\n3 1\n0 0\n1 0\n0 1\n";
        let poly: Polygon<f64> = decode_polygon(text).unwrap();
        assert_eq!(poly.contours.len(), 1);
        assert_eq!(poly.contours[0].len(), 3);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode_polygon::<f64>("").unwrap_err(),
            DecodeError::UnexpectedEnd
        );
        assert_eq!(
            decode_polygon::<f64>("1\n3 1\n0 0\n1\n").unwrap_err(),
            DecodeError::UnexpectedEnd
        );
        assert_eq!(
            decode_polygon::<f64>("x").unwrap_err(),
            DecodeError::InvalidCount("x".to_string())
        );
        assert_eq!(
            decode_polygon::<f64>("1\n3 1\n0 zero\n").unwrap_err(),
            DecodeError::InvalidCoordinate("zero".to_string())
        );
    }
}
