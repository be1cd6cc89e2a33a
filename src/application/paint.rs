use crate::domain::TileColor;

/// Receiver of paint notifications (the render bridge).
///
/// The world calls `initialize` once before any mutation, `paint_solid_color`
/// once per directly replaced cell, and `close` at shutdown. Sinks must not
/// block; the world never waits on them.
pub trait PaintSink {
    fn initialize(&mut self, rows: usize, cols: usize);

    fn paint_solid_color(&mut self, row: usize, col: usize, color: TileColor);

    fn close(&mut self) {}
}

/// A sink that discards every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PaintSink for NullSink {
    fn initialize(&mut self, _rows: usize, _cols: usize) {}

    fn paint_solid_color(&mut self, _row: usize, _col: usize, _color: TileColor) {}
}

/// Canvas remembers the last color painted on every cell and how many times
/// each cell was painted. The GUI draws from it; tests inspect it.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    colors: Vec<Option<TileColor>>,
    paint_counts: Vec<u32>,
    initialized: bool,
    closed: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Last color painted at a position, `None` if never painted or out of range
    pub fn color(&self, row: usize, col: usize) -> Option<TileColor> {
        self.index(row, col).and_then(|idx| self.colors[idx])
    }

    pub fn paint_count(&self, row: usize, col: usize) -> u32 {
        self.index(row, col).map_or(0, |idx| self.paint_counts[idx])
    }

    pub fn total_paints(&self) -> u64 {
        self.paint_counts.iter().map(|&n| u64::from(n)).sum()
    }

    /// Forget paint counts, keeping colors
    pub fn reset_counts(&mut self) {
        self.paint_counts.iter_mut().for_each(|n| *n = 0);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl PaintSink for Canvas {
    fn initialize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.colors = vec![None; rows * cols];
        self.paint_counts = vec![0; rows * cols];
        self.initialized = true;
        self.closed = false;
    }

    /// Paints outside the initialized area are ignored
    fn paint_solid_color(&mut self, row: usize, col: usize, color: TileColor) {
        if let Some(idx) = self.index(row, col) {
            self.colors[idx] = Some(color);
            self.paint_counts[idx] += 1;
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
