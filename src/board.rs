use crate::color::Color;
use crate::params::Params;
use crate::surface::Surface;
use crate::utils::wrap_index;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected a positive dimension, got: {0}")]
    Dimension(usize),
    #[error("expected coordinates in [0, {rows}) x [0, {cols}), got: ({i}, {j})")]
    Coordinate {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
}

/// Toroidal grid of colors capable of being animated.
///
/// Each step applies a stochastic rotational kick, linear decay, and a
/// 5-point Laplacian diffusion term to every cell, integrated forward by
/// `params.dt` and trimmed back into the displayable range. Neighbor access
/// wraps around both axes, so the last row and column sit next to the first.
pub struct ColorBoard {
    rows: usize,
    cols: usize,
    matrix: Vec<Vec<Color>>,
    pub params: Params,
    rng: SmallRng,
}

impl ColorBoard {
    /// Creates a `rows x cols` board filled with random colors.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_rng(rows, cols, SmallRng::from_entropy())
    }

    /// Like [`ColorBoard::new`] but with a seeded generator, for
    /// reproducible runs.
    pub fn from_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(rows, cols, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rows: usize, cols: usize, rng: SmallRng) -> Result<Self, BoardError> {
        if rows == 0 {
            return Err(BoardError::Dimension(rows));
        }
        if cols == 0 {
            return Err(BoardError::Dimension(cols));
        }

        let mut board = Self {
            rows,
            cols,
            matrix: Vec::new(),
            params: Params::default(),
            rng,
        };
        board.randomize();

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Refills every cell with an independent random color, keeping the
    /// current dimensions.
    pub fn randomize(&mut self) {
        let mut matrix = Vec::with_capacity(self.rows);
        for _ in 0..self.rows {
            let mut row = Vec::with_capacity(self.cols);
            for _ in 0..self.cols {
                row.push(Color::random(&mut self.rng));
            }
            matrix.push(row);
        }

        self.matrix = matrix;
    }

    /// Changes the row count, preserving existing content: shrinking
    /// truncates, growing repeats the existing rows cyclically. No new
    /// random content is introduced.
    pub fn resize_rows(&mut self, rows: usize) -> Result<(), BoardError> {
        if rows == 0 {
            return Err(BoardError::Dimension(rows));
        }

        if rows < self.rows {
            self.matrix.truncate(rows);
        } else if rows > self.rows {
            let repeats = rows / self.rows;
            let leftover = rows - repeats * self.rows;

            let original = self.matrix.clone();
            for _ in 1..repeats {
                self.matrix.extend_from_slice(&original);
            }
            self.matrix.extend_from_slice(&original[..leftover]);
        }

        self.rows = rows;
        Ok(())
    }

    /// Changes the column count. Same recycling rule as
    /// [`ColorBoard::resize_rows`], applied to each row independently.
    pub fn resize_cols(&mut self, cols: usize) -> Result<(), BoardError> {
        if cols == 0 {
            return Err(BoardError::Dimension(cols));
        }

        if cols < self.cols {
            for row in &mut self.matrix {
                row.truncate(cols);
            }
        } else if cols > self.cols {
            let repeats = cols / self.cols;
            let leftover = cols - repeats * self.cols;

            for row in &mut self.matrix {
                let original = row.clone();
                for _ in 1..repeats {
                    row.extend_from_slice(&original);
                }
                row.extend_from_slice(&original[..leftover]);
            }
        }

        self.cols = cols;
        Ok(())
    }

    /// Returns the color at the given location, toroidally: indices wrap
    /// modulo the board dimensions, so any `isize` pair is valid.
    pub fn at(&self, i: isize, j: isize) -> Color {
        self.matrix[wrap_index(i, self.rows)][wrap_index(j, self.cols)]
    }

    /// Overwrites the color at the given location, toroidally.
    pub fn set_at(&mut self, i: isize, j: isize, color: Color) {
        self.matrix[wrap_index(i, self.rows)][wrap_index(j, self.cols)] = color;
    }

    /// Computes the next color at `(i, j)`, drawing the stochastic kick
    /// from the board's own generator. Unlike [`ColorBoard::at`] the
    /// coordinates are bounds-checked, not wrapped.
    pub fn next_at(&mut self, i: usize, j: usize) -> Result<Color, BoardError> {
        let kick = Color::random_components_between(&mut self.rng, 0.0, 2.0);
        self.next_at_with(i, j, kick)
    }

    /// Computes the next color at `(i, j)` with a caller-supplied
    /// perturbation vector, making the update a pure function of the
    /// 5-cell neighborhood and the parameters.
    pub fn next_at_with(&self, i: usize, j: usize, kick: Color) -> Result<Color, BoardError> {
        if i >= self.rows || j >= self.cols {
            return Err(BoardError::Coordinate {
                i,
                j,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(self.step_cell(i, j, kick))
    }

    /// The update rule proper. Coordinates must already be in bounds.
    fn step_cell(&self, i: usize, j: usize, kick: Color) -> Color {
        let Params {
            dt,
            k_decay,
            k_color,
            k_space,
        } = self.params;

        let color = self.matrix[i][j];

        // rotational kick minus decay, weighted by color-color coupling
        let dc_color = (color.cross(kick) - color.scale(k_decay)).scale(k_color);

        // 5-point Laplacian over the wrapped neighborhood, weighted by
        // color-space coupling
        let (i, j) = (i as isize, j as isize);
        let dc_space = (color.scale(-4.0)
            + self.at(i + 1, j)
            + self.at(i - 1, j)
            + self.at(i, j + 1)
            + self.at(i, j - 1))
        .scale(k_space);

        (color + (dc_color + dc_space).scale(dt)).trim()
    }

    /// Advances the whole board one step. The new state is built into a
    /// separate buffer so every neighbor read observes the pre-step board,
    /// then swapped in. Returns `&mut self` for chaining into
    /// [`ColorBoard::render_to`].
    pub fn next(&mut self) -> &mut Self {
        let mut buffer = Vec::with_capacity(self.rows);
        for i in 0..self.rows {
            let mut row = Vec::with_capacity(self.cols);
            for j in 0..self.cols {
                let kick = Color::random_components_between(&mut self.rng, 0.0, 2.0);
                row.push(self.step_cell(i, j, kick));
            }
            buffer.push(row);
        }

        self.matrix = buffer;
        self
    }

    /// Draws the board onto a surface, one filled rectangle per cell. Cell
    /// dimensions are rounded up so the last row and column reach the far
    /// edges with no gap.
    pub fn render_to<S: Surface>(&self, surface: &mut S) {
        let cell_width = surface.width().div_ceil(self.cols as u32);
        let cell_height = surface.height().div_ceil(self.rows as u32);

        surface.clear();

        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                surface.fill_rect(
                    j as u32 * cell_width,
                    i as u32 * cell_height,
                    cell_width,
                    cell_height,
                    color,
                );
            }
        }
    }
}
