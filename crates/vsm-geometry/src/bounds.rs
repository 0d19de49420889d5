//! Axis-aligned extent of a point set, for fitting a view to the layout.

use crate::Point;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// View used when there is nothing to show.
    pub const DEFAULT_VIEW: Self = Self {
        min_x: -2.0,
        min_y: -2.0,
        max_x: 2.0,
        max_y: 2.0,
    };

    /// Margin used when an axis has zero extent.
    pub const DEGENERATE_MARGIN: f64 = 1.0;

    /// Smallest rectangle containing every point, or `None` if there are none.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(iter.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Grow each axis by `fraction` of its extent on both sides. An axis
    /// with zero extent grows by [`Self::DEGENERATE_MARGIN`] instead.
    pub fn with_margin(&self, fraction: f64) -> Self {
        let margin = |extent: f64| {
            if extent == 0.0 {
                Self::DEGENERATE_MARGIN
            } else {
                extent * fraction
            }
        };
        let mx = margin(self.width());
        let my = margin(self.height());
        Self {
            min_x: self.min_x - mx,
            min_y: self.min_y - my,
            max_x: self.max_x + mx,
            max_y: self.max_y + my,
        }
    }

    /// View fitted to `points` with a 20% margin, or the default view.
    pub fn view_of<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self::enclosing(points)
            .map(|b| b.with_margin(0.2))
            .unwrap_or(Self::DEFAULT_VIEW)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }
}
