//! Drawable path parsing
//!
//! Supports the absolute subset of SVG path data used by the catalog:
//! `M` (move, extra pairs are implicit line-tos), `L` (line-to, any number of
//! pairs), `C` (cubic Bézier, pairs in groups of three) and `Z` (close).
//! Curves are flattened into line segments at parse time.

use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::opt;
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::{preceded, separated_pair};
use nom::{IResult, Parser};

use crate::core::error::{Result, TimelineError};
use crate::core::types::Point;

/// Line segments per flattened cubic curve
pub const CUBIC_STEPS: usize = 8;

/// A connected run of points, optionally closed back to its start
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl SubPath {
    fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
            closed: false,
        }
    }

    /// Consecutive point pairs, including the closing edge when closed
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if first != last => Some((*last, *first)),
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Move,
    Line,
    Cubic,
    Close,
}

#[derive(Debug)]
struct Segment {
    verb: Verb,
    points: Vec<Point>,
    /// Input length remaining where the segment started, for error offsets
    remaining: usize,
}

fn coord(input: &str) -> IResult<&str, Point> {
    separated_pair(double, (multispace0, char(','), multispace0), double)
        .map(|(x, y)| Point::new(x, y))
        .parse(input)
}

fn separator(input: &str) -> IResult<&str, ()> {
    (multispace0, opt(char(',')), multispace0)
        .map(|_| ())
        .parse(input)
}

fn verb(input: &str) -> IResult<&str, Verb> {
    one_of("MLCZ")
        .map(|c| match c {
            'M' => Verb::Move,
            'L' => Verb::Line,
            'C' => Verb::Cubic,
            _ => Verb::Close,
        })
        .parse(input)
}

fn segment(input: &str) -> IResult<&str, Segment> {
    let (input, _) = multispace0(input)?;
    let remaining = input.len();
    let (input, verb) = verb(input)?;
    let (input, points) = many0(preceded(separator, coord)).parse(input)?;
    Ok((
        input,
        Segment {
            verb,
            points,
            remaining,
        },
    ))
}

fn segments(input: &str) -> Result<Vec<Segment>> {
    let (rest, segments) = many0(segment)
        .parse(input)
        .map_err(|e| path_error(input, e))?;
    let rest = rest.trim_start();
    if !rest.is_empty() {
        return Err(TimelineError::PathParse {
            offset: input.len() - rest.len(),
            message: format!("unexpected '{}'", rest.chars().next().unwrap_or(' ')),
        });
    }
    Ok(segments)
}

fn path_error(input: &str, e: nom::Err<nom::error::Error<&str>>) -> TimelineError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => TimelineError::PathParse {
            offset: input.len() - e.input.len(),
            message: format!("{:?}", e.code),
        },
        nom::Err::Incomplete(_) => TimelineError::PathParse {
            offset: input.len(),
            message: "incomplete path".into(),
        },
    }
}

fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Parse path data into flattened subpaths
pub fn parse_path(input: &str) -> Result<Vec<SubPath>> {
    let mut subpaths = Vec::new();
    let mut current: Option<SubPath> = None;

    for segment in segments(input)? {
        let offset = input.len() - segment.remaining;
        let fail = |message: &str| TimelineError::PathParse {
            offset,
            message: message.to_string(),
        };

        match segment.verb {
            Verb::Move => {
                let (first, rest) = segment
                    .points
                    .split_first()
                    .ok_or_else(|| fail("M needs a coordinate"))?;
                if let Some(done) = current.take().filter(|s| s.points.len() > 1) {
                    subpaths.push(done);
                }
                let mut subpath = SubPath::starting_at(*first);
                subpath.points.extend_from_slice(rest);
                current = Some(subpath);
            }
            Verb::Line => {
                if segment.points.is_empty() {
                    return Err(fail("L needs a coordinate"));
                }
                let subpath = current.as_mut().ok_or_else(|| fail("path must start with M"))?;
                subpath.points.extend_from_slice(&segment.points);
            }
            Verb::Cubic => {
                if segment.points.is_empty() || segment.points.len() % 3 != 0 {
                    return Err(fail("C needs coordinates in groups of three"));
                }
                let subpath = current.as_mut().ok_or_else(|| fail("path must start with M"))?;
                for chunk in segment.points.chunks(3) {
                    let start = *subpath.points.last().unwrap_or(&chunk[0]);
                    for step in 1..=CUBIC_STEPS {
                        let t = step as f64 / CUBIC_STEPS as f64;
                        subpath
                            .points
                            .push(cubic(start, chunk[0], chunk[1], chunk[2], t));
                    }
                }
            }
            Verb::Close => {
                if !segment.points.is_empty() {
                    return Err(fail("Z takes no coordinates"));
                }
                let mut subpath = current.take().ok_or_else(|| fail("path must start with M"))?;
                subpath.closed = true;
                let start = subpath.points[0];
                subpaths.push(subpath);
                // Drawing may continue from the start of the closed subpath
                current = Some(SubPath::starting_at(start));
            }
        }
    }

    if let Some(last) = current {
        if last.points.len() > 1 {
            subpaths.push(last);
        }
    }

    Ok(subpaths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_triangle() {
        let subpaths = parse_path("M 0,0 L 10,0 L 10,10 Z").unwrap();
        assert_eq!(subpaths.len(), 1);
        assert!(subpaths[0].closed);
        assert_eq!(subpaths[0].points.len(), 3);
        assert_eq!(subpaths[0].edges().count(), 3);
    }

    #[test]
    fn test_implicit_line_pairs() {
        let subpaths = parse_path("M 0,0 L 1,1 2,2 3,3").unwrap();
        assert_eq!(subpaths[0].points.len(), 4);
        assert!(!subpaths[0].closed);
    }

    #[test]
    fn test_cubic_is_flattened_to_endpoint() {
        let subpaths = parse_path("M 0,0 C 0,10 10,10 10,0").unwrap();
        let points = &subpaths[0].points;
        assert_eq!(points.len(), 1 + CUBIC_STEPS);
        assert_eq!(*points.last().unwrap(), Point::new(10.0, 0.0));
        // Control points pull the midpoint upward
        assert!(points[CUBIC_STEPS / 2].y > 5.0);
    }

    #[test]
    fn test_multiple_closed_subpaths() {
        let subpaths =
            parse_path("M 0,0 L 1,0 L 1,1 Z M 5,5 L 6,5 L 6,6 Z M 9,9 L 10,9 L 10,10 Z").unwrap();
        assert_eq!(subpaths.len(), 3);
        assert!(subpaths.iter().all(|s| s.closed));
    }

    #[test]
    fn test_multiline_whitespace() {
        let subpaths = parse_path("\n  M 1,2 L 3,4\n  L 5,6\n").unwrap();
        assert_eq!(subpaths[0].points.len(), 3);
    }

    #[test]
    fn test_rejects_unknown_command() {
        match parse_path("M 0,0 Q 1,1 2,2") {
            Err(TimelineError::PathParse { offset, .. }) => assert_eq!(offset, 6),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_line_before_move() {
        assert!(parse_path("L 1,1").is_err());
    }

    #[test]
    fn test_rejects_partial_cubic() {
        assert!(parse_path("M 0,0 C 1,1 2,2").is_err());
    }
}
