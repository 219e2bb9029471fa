use tilestar_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Distance between the rows of two points, ignoring columns.
#[inline]
pub fn row_distance(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn row_distance_ignores_columns() {
        assert_eq!(row_distance(Point::new(2, 0), Point::new(7, 40)), 5);
        assert_eq!(row_distance(Point::new(3, 9), Point::new(3, 0)), 0);
    }
}
