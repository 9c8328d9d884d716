//! Validated data series.

use thiserror::Error;

use crate::geom::Point;
use crate::view::{DataBounds, Range};

/// Errors returned when building a [`Series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
    /// X values decrease at the given index.
    ///
    /// Use [`Series::from_unsorted`] to sort the input instead.
    #[error("x value at point {index} is smaller than the previous one")]
    UnsortedX {
        /// Index of the first point that breaks the ordering.
        index: usize,
    },
}

/// An ordered sequence of finite points, sorted by X.
///
/// Sortedness is what allows the X range to be read from the first and last
/// points without scanning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Create an empty series.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from points already sorted by X.
    pub fn new<I, P>(points: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        check_finite(&points)?;
        if let Some(index) = points.windows(2).position(|pair| pair[1].x < pair[0].x) {
            return Err(SeriesError::UnsortedX { index: index + 1 });
        }
        Ok(Self { points })
    }

    /// Build a series from points in any order, sorting them by X.
    ///
    /// The sort is stable, so points sharing an X keep their input order.
    pub fn from_unsorted<I, P>(points: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let mut points: Vec<Point> = points.into_iter().map(Into::into).collect();
        check_finite(&points)?;
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(Self { points })
    }

    /// Build a series by sampling `function` at `samples` evenly spaced X
    /// values across `x_range`.
    ///
    /// Samples where the function is not finite are skipped.
    pub fn from_fn(function: impl Fn(f64) -> f64, x_range: Range, samples: usize) -> Self {
        let points = match samples {
            0 => Vec::new(),
            1 => vec![Point::new(x_range.min, function(x_range.min))],
            _ => {
                let step = x_range.span() / (samples - 1) as f64;
                (0..samples)
                    .map(|i| {
                        let x = x_range.min + step * i as f64;
                        Point::new(x, function(x))
                    })
                    .collect()
            }
        };
        Self {
            points: points.into_iter().filter(Point::is_finite).collect(),
        }
    }

    /// Access the points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw (unpadded) data bounds.
    ///
    /// X comes from the first and last points; Y from a scan over all points.
    pub fn bounds(&self) -> Option<DataBounds> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let mut y = Range::new(first.y, first.y);
        for point in &self.points[1..] {
            y.expand_to_include(point.y);
        }
        Some(DataBounds::new(Range::new(first.x, last.x), y))
    }
}

fn check_finite(points: &[Point]) -> Result<(), SeriesError> {
    match points.iter().position(|point| !point.is_finite()) {
        Some(index) => Err(SeriesError::NonFinite { index }),
        None => Ok(()),
    }
}
