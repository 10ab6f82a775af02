//! Dot grid - the engine's only drawable state
//!
//! A fixed-size grid where every cell holds one [`Color`]. Uses a flat
//! row-major `Vec` (index `y * width + x`) for O(1) access; the grid is
//! allocated eagerly at construction and never resized.
//! Coordinates: (x, y) with x growing right and y growing down.

use thiserror::Error;

use crate::types::Color;

/// Out-of-bounds access to the dot grid.
///
/// The y coordinate is validated before x, so a dot that is outside the grid
/// on both axes always reports the y failure. These surface user-logic bugs
/// and are never caught inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("dot ({x}, {y}): y is out of bounds of the {width}x{height} grid")]
    YOutOfBounds { x: i32, y: i32, width: u32, height: u32 },
    #[error("dot ({x}, {y}): x is out of bounds of the {width}x{height} grid")]
    XOutOfBounds { x: i32, y: i32, width: u32, height: u32 },
}

/// The dot grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGrid {
    width: u32,
    height: u32,
    /// Flat cell storage, row-major order (y * width + x)
    cells: Vec<Color>,
}

impl DotGrid {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Dimensions must already be resolved to positive values by the
    /// configuration layer.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Validate (x, y) and return the flat index. y is checked first.
    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if y < 0 || y as u32 >= self.height {
            return Err(GridError::YOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if x < 0 || x as u32 >= self.width {
            return Err(GridError::XOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get the color of a dot. No side effects.
    pub fn get(&self, x: i32, y: i32) -> Result<Color, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the color of a dot. Rendering is deferred to the flush.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = color;
        Ok(())
    }

    /// Overwrite every cell with `fill`.
    pub fn clear_all(&mut self, fill: Color) {
        self.cells.fill(fill);
    }

    /// Iterate all cells in flush order (row-major: y outer, x inner).
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &color)| ((idx % width) as i32, (idx / width) as i32, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_filled() {
        let grid = DotGrid::new(3, 2, Color::Green);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid.get(x, y), Ok(Color::Green));
            }
        }
    }

    #[test]
    fn test_y_is_checked_before_x() {
        let grid = DotGrid::new(4, 4, Color::Gray);
        // Both axes out of bounds: the y failure wins.
        assert_eq!(
            grid.get(9, 9),
            Err(GridError::YOutOfBounds {
                x: 9,
                y: 9,
                width: 4,
                height: 4
            })
        );
        assert_eq!(
            grid.get(-1, -1),
            Err(GridError::YOutOfBounds {
                x: -1,
                y: -1,
                width: 4,
                height: 4
            })
        );
    }

    #[test]
    fn test_error_messages_name_the_failing_axis() {
        let grid = DotGrid::new(4, 4, Color::Gray);
        let err = grid.get(4, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dot (4, 0): x is out of bounds of the 4x4 grid"
        );
        let err = grid.get(0, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dot (0, 4): y is out of bounds of the 4x4 grid"
        );
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = DotGrid::new(2, 2, Color::Gray);
        grid.set(1, 0, Color::Red).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Color::Gray),
                (1, 0, Color::Red),
                (0, 1, Color::Gray),
                (1, 1, Color::Gray),
            ]
        );
    }
}
