//! Geometric primitives in page space.
//!
//! Page space follows PDF conventions: the origin is the bottom-left corner
//! of the page and y grows upward.

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinic_export::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in page space, anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X coordinate of the bottom-left corner
    pub x: f32,
    /// Y coordinate of the bottom-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinic_export::geometry::Rect;
    ///
    /// let rect = Rect::new(48.0, 400.0, 516.0, 220.0);
    /// assert_eq!(rect.top(), 620.0);
    /// assert_eq!(rect.right(), 564.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle by `padding` on every side.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinic_export::geometry::Rect;
    ///
    /// let plot = Rect::new(0.0, 0.0, 100.0, 80.0).inset(10.0);
    /// assert_eq!(plot, Rect::new(10.0, 10.0, 80.0, 60.0));
    /// ```
    pub fn inset(&self, padding: f32) -> Rect {
        Rect::new(
            self.x + padding,
            self.y + padding,
            self.width - 2.0 * padding,
            self.height - 2.0 * padding,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 20.0);
        assert_eq!(rect.top(), 70.0);
    }

    #[test]
    fn test_inset() {
        let rect = Rect::new(48.0, 400.0, 516.0, 220.0).inset(28.0);
        assert_eq!(rect.x, 76.0);
        assert_eq!(rect.y, 428.0);
        assert_eq!(rect.width, 460.0);
        assert_eq!(rect.height, 164.0);
    }
}
