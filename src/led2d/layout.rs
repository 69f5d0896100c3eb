//! Compile-time description of how a matrix's `(x, y)` grid maps onto its wiring order.
//!
//! See [`LedLayout`] for the serpentine wiring used by common 8-row matrix panels.

/// Compile-time mapping from `(x, y)` matrix coordinates to serial (wiring-order) indices.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` increases to the right across `W` columns, and `y` increases downward across
/// `H` rows. The table is stored row by row: `map[y][x]` is the serial index of the LED
/// at `(x, y)`.
///
/// Layouts are validated when built (at compile time in `const` context):
/// - every entry must be below `N`
/// - every serial index must appear exactly once
///
/// # Example
///
/// ```
/// use pixel_led::led2d::layout::LedLayout;
///
/// const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine();
/// const EXPECTED: LedLayout<6, 3, 2> = LedLayout::new([[0, 3, 4], [1, 2, 5]]);
/// const _: () = assert!(SERPENTINE.equals(&EXPECTED)); // Compile-time assert
/// ```
///
/// ```text
/// Serpentine 3×2: the strip runs down column 0, up column 1, down column 2.
///
///     LED0  LED3  LED4
///     LED1  LED2  LED5
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [[u16; W]; H],
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "const table loops stay below W, H and N, and N fits in u16"
)]
impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Constructor: verifies the table covers every serial index exactly once.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in `const` context) if `W * H != N`, if an entry is not
    /// below `N`, or if an entry repeats.
    ///
    /// ```
    /// use pixel_led::led2d::layout::LedLayout;
    ///
    /// // Two rows wired left-to-right, one after the other.
    /// const ROWS: LedLayout<6, 3, 2> = LedLayout::new([[0, 1, 2], [3, 4, 5]]);
    /// assert_eq!(ROWS.index(2, 1), Some(5));
    /// ```
    #[must_use]
    pub const fn new(map: [[u16; W]; H]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(N <= u16::MAX as usize, "total LEDs must fit in u16");

        let mut seen = [false; N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let serial = map[y_index][x_index] as usize;
                assert!(serial < N, "serial index out of bounds in layout");
                assert!(!seen[serial], "duplicate serial index in layout");
                seen[serial] = true;
                x_index += 1;
            }
            y_index += 1;
        }

        Self { map }
    }

    /// Serpentine wiring: the strip runs down even columns and back up odd ones.
    ///
    /// Row `y` starts at serial index `y`, then alternates between
    /// `pair * 2H - 1 - y` and `pair * 2H + y` for `pair = 1, 2, ...` until the row
    /// holds `W` entries.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`new`](Self::new).
    ///
    /// ```
    /// use pixel_led::led2d::layout::LedLayout;
    ///
    /// const PANEL: LedLayout<256, 32, 8> = LedLayout::serpentine();
    /// let top = PANEL.row(0).expect("row 0 exists");
    /// let bottom = PANEL.row(7).expect("row 7 exists");
    /// assert_eq!(top[..4], [0, 15, 16, 31]);
    /// assert_eq!(bottom[..4], [7, 8, 23, 24]);
    /// ```
    #[must_use]
    pub const fn serpentine() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");

        let mut map = [[0_u16; W]; H];
        let mut y_index = 0;
        while y_index < H {
            map[y_index][0] = y_index as u16;
            let mut x_index = 1;
            let mut pair = 1;
            while x_index < W {
                // Odd column: bottom-to-top
                map[y_index][x_index] = (pair * 2 * H - 1 - y_index) as u16;
                x_index += 1;
                if x_index < W {
                    // Even column: top-to-bottom
                    map[y_index][x_index] = (pair * 2 * H + y_index) as u16;
                    x_index += 1;
                }
                pair += 1;
            }
            y_index += 1;
        }
        Self::new(map)
    }

    /// Serial index of the LED at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < W && y < H {
            Some(self.map[y][x] as usize)
        } else {
            None
        }
    }

    /// Serial indices of row `y`, left to right, or `None` below the grid.
    #[must_use]
    pub const fn row(&self, y: usize) -> Option<[u16; W]> {
        if y < H { Some(self.map[y]) } else { None }
    }

    /// Serial indices of column `x`, top to bottom, or `None` right of the grid.
    #[must_use]
    pub const fn column(&self, x: usize) -> Option<[u16; H]> {
        if x >= W {
            return None;
        }
        let mut column = [0_u16; H];
        let mut y_index = 0;
        while y_index < H {
            column[y_index] = self.map[y_index][x];
            y_index += 1;
        }
        Some(column)
    }

    /// Inverse table: `(x, y)` of every LED in wiring order.
    ///
    /// ```
    /// use pixel_led::led2d::layout::LedLayout;
    ///
    /// const XY: [(u16, u16); 6] = LedLayout::<6, 3, 2>::serpentine().index_to_xy();
    /// assert_eq!(XY, [(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]);
    /// ```
    #[must_use]
    pub const fn index_to_xy(&self) -> [(u16, u16); N] {
        let mut xy = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                xy[self.map[y_index][x_index] as usize] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        xy
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a layout without LEDs, which `new` never builds.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Const equality helper for compile-time asserts.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                if self.map[y_index][x_index] != other.map[y_index][x_index] {
                    return false;
                }
                x_index += 1;
            }
            y_index += 1;
        }
        true
    }
}
