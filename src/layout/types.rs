//! Core types for the layout engine

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Grid cell assigned to one pole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolePlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Top-left corner of the pole's local coordinate system
    pub origin: Point,
}

/// One wrapped line of a care tip
#[derive(Debug, Clone, PartialEq)]
pub struct TipLine {
    /// Index of the tip this line belongs to
    pub tip: usize,
    pub text: String,
    /// Only the first line of a tip carries a bullet
    pub bullet: bool,
    /// Text start and baseline
    pub position: Point,
}

/// Geometry of the care tips panel
#[derive(Debug, Clone, PartialEq)]
pub struct TipsPanelLayout {
    pub bounds: BoundingBox,
    /// Header text start and baseline
    pub header: Point,
    pub lines: Vec<TipLine>,
}

/// Complete geometry of one guide
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub num_rows: usize,
    /// Number of occupied columns in the widest row
    pub columns: usize,
    pub side_padding: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,
    /// Title anchor (horizontal center, baseline) when the title is shown
    pub title_anchor: Option<Point>,
    pub tips_panel: Option<TipsPanelLayout>,
    pub poles: Vec<PolePlacement>,
}

impl Layout {
    /// The `viewBox` value for this canvas
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
    }
}
