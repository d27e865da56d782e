//! RGB color triples and the fixed-size pixel grid exchanged with the
//! generation engine and the image codec.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A single RGB cell value, one byte per channel. Default is black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ---------------------------------------------------------------------------
// ColorGrid
// ---------------------------------------------------------------------------

/// A 2D grid of [`Color`] cells with dimensions fixed at construction.
///
/// Backed by a single contiguous `height * width * 3` byte buffer in
/// row-major `(row, col, channel)` order. The cell accessors and the raw
/// byte view are two surfaces over the same allocation, so a mutation
/// through either is visible through the other. Cloning the grid is the
/// only way to get an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    height: u32,
    width: u32,
    data: Vec<u8>,
}

impl ColorGrid {
    /// An all-black grid of the given dimensions.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            data: vec![0; height as usize * width as usize * 3],
        }
    }

    /// A grid with every cell set to `color`.
    pub fn filled(height: u32, width: u32, color: Color) -> Self {
        let mut grid = Self::new(height, width);
        for chunk in grid.data.chunks_exact_mut(3) {
            chunk.copy_from_slice(&[color.r, color.g, color.b]);
        }
        grid
    }

    /// Adopt an existing byte buffer as a grid without copying.
    ///
    /// Returns `None` if `data.len() != height * width * 3`.
    pub fn from_raw(height: u32, width: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != height as usize * width as usize * 3 {
            return None;
        }
        Some(Self {
            height,
            width,
            data,
        })
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Byte offset of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    fn offset(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.height,
            self.width,
        );
        (row as usize * self.width as usize + col as usize) * 3
    }

    pub fn get(&self, row: u32, col: u32) -> Color {
        let i = self.offset(row, col);
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    pub fn set(&mut self, row: u32, col: u32, color: Color) {
        let i = self.offset(row, col);
        self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Raw byte view with shape `(height, width, 3)`, sharing storage with
    /// the cell accessors.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw byte view, sharing storage with the cell accessors.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid, yielding its backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_default_is_black() {
        let c = Color::default();
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
    }

    #[test]
    fn color_comparing() {
        let c1 = Color::new(1, 2, 3);
        let c2 = Color::new(1, 2, 3);
        let c3 = Color::new(4, 5, 6);
        assert_eq!(c1, c2);
        assert_ne!(c2, c3);
    }

    #[test]
    fn grid_constructing_basic() {
        let g = ColorGrid::new(2, 3);
        assert_eq!((g.height(), g.width()), (2, 3));
        assert_eq!(g.get(1, 2), Color::default());
    }

    #[test]
    fn grid_constructing_filled() {
        let g = ColorGrid::filled(4, 5, Color::new(1, 2, 3));
        assert_eq!((g.height(), g.width()), (4, 5));
        assert_eq!(g.get(3, 4), Color::new(1, 2, 3));
    }

    #[test]
    fn grid_from_raw_adopts_buffer() {
        let bytes: Vec<u8> = (0..6 * 7 * 3).map(|i| i as u8).collect();
        let g = ColorGrid::from_raw(6, 7, bytes).unwrap();
        assert_eq!((g.height(), g.width()), (6, 7));
        let i = (2 * 7 + 3) * 3;
        assert_eq!(g.get(2, 3), Color::new(i as u8, (i + 1) as u8, (i + 2) as u8));
    }

    #[test]
    fn grid_from_raw_rejects_wrong_length() {
        assert!(ColorGrid::from_raw(6, 7, vec![0; 5]).is_none());
    }

    #[test]
    fn grid_raw_view_shares_storage() {
        let mut g = ColorGrid::new(6, 7);
        g.set(2, 3, Color::new(0, 1, 2));

        let i = (2 * 7 + 3) * 3;
        assert_eq!(&g.as_raw()[i..i + 3], &[0, 1, 2]);

        g.as_raw_mut()[i] = 9;
        assert_eq!(g.get(2, 3), Color::new(9, 1, 2));
    }

    #[test]
    #[should_panic]
    fn grid_get_out_of_range_panics() {
        ColorGrid::new(2, 2).get(2, 0);
    }
}
