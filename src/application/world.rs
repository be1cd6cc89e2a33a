use tracing::{debug, info};

use super::PaintSink;
use crate::domain::{Algorithm, Cell, Command, CopycatPattern, Grid, Shape, Tile, TileKind};
use crate::error::{EngineError, Result};

/// Whether command processing should keep reading input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// World interprets commands against the grid.
/// This is the application layer that coordinates domain logic with the
/// render bridge: every direct cell replacement is painted exactly once.
pub struct World<S: PaintSink> {
    grid: Grid,
    sink: S,
    algorithm: Algorithm,
    generation: u64,
}

impl<S: PaintSink> World<S> {
    /// Create a world of dormant constant tiles, initialize the sink and
    /// paint every cell once with the dormant color
    pub fn new(rows: usize, cols: usize, mut sink: S) -> Result<Self> {
        let grid = Grid::new(rows, cols)?;
        sink.initialize(rows, cols);
        let mut world = Self {
            grid,
            sink,
            algorithm: Algorithm::default(),
            generation: 0,
        };
        world.repaint_all()?;
        Ok(world)
    }

    /// Select the evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Number of generations evolved so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Raw cell at a position (copycats unresolved)
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.grid.get(row, col)
    }

    /// The tile a position shows; a copycat answers with its leader's tile
    pub fn get_tile(&self, row: usize, col: usize) -> Result<Tile> {
        self.grid.tile(row, col)
    }

    /// Replace one cell with a tile and paint it
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) -> Result<()> {
        self.set_cell(row, col, Cell::Tile(tile))
    }

    /// Replace one cell and paint it with the color it now shows, then
    /// repaint every copycat following it
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.grid.set(row, col, cell)?;
        self.paint(row, col)?;
        let followers: Vec<_> = self.grid.followers(row, col).collect();
        for (r, c) in followers {
            self.paint(r, c)?;
        }
        Ok(())
    }

    /// Replace every cell with a fresh tile, painting each cell once
    pub fn fill(&mut self, kind: TileKind, age: u64) {
        let tile = Tile::new(kind, age);
        self.grid.fill(tile);
        let (rows, cols) = self.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                self.sink.paint_solid_color(row, col, tile.color());
            }
        }
    }

    /// Stamp a shape with its top-left corner at (row, col), wrapping around
    /// the edges. Alive cells become mono tiles of age 1; the rest is untouched.
    pub fn set_shape(&mut self, row: usize, col: usize, shape: &Shape) -> Result<()> {
        self.grid.get(row, col)?;
        let (rows, cols) = self.dimensions();
        let alive = Tile::new(TileKind::Mono, 1);
        for (r, c) in shape.positions(row, col, rows, cols) {
            self.set_tile(r, c, alive)?;
        }
        Ok(())
    }

    /// Install copycat cells according to a pattern.
    ///
    /// Leaders and followed cells are checked before anything is replaced, so
    /// a rejected pattern leaves the grid as it was.
    pub fn set_copycats(&mut self, pattern: CopycatPattern) -> Result<()> {
        let (rows, cols) = self.dimensions();
        let links = pattern.links(rows, cols);

        if let Some(&(_, (row, col))) = links
            .iter()
            .find(|(_, (lr, lc))| self.grid.get(*lr, *lc).is_ok_and(|cell| cell.is_copycat()))
        {
            return Err(EngineError::CopycatChain { row, col });
        }
        if let Some(&((row, col), _)) = links
            .iter()
            .find(|((r, c), _)| self.grid.followers(*r, *c).next().is_some())
        {
            return Err(EngineError::CopycatChain { row, col });
        }

        for ((row, col), (leader_row, leader_col)) in links {
            self.set_cell(row, col, Cell::copycat(leader_row, leader_col))?;
        }
        Ok(())
    }

    /// Advance the whole grid `steps` generations.
    ///
    /// Each generation is computed from the previous one into a new grid and
    /// swapped in only when complete. If a step fails the world stays at the
    /// last completed generation. Afterwards every cell is repainted once.
    pub fn evolve(&mut self, steps: u64) -> Result<()> {
        let mut completed = 0u64;
        let outcome = (0..steps).try_for_each(|_| {
            self.grid = match self.algorithm {
                Algorithm::Serial => self.grid.evolve()?,
                Algorithm::Parallel => self.grid.evolve_parallel()?,
            };
            self.generation += 1;
            completed += 1;
            Ok::<_, EngineError>(())
        });

        if completed > 0 {
            self.repaint_all()?;
            info!(
                steps = completed,
                generation = self.generation,
                algorithm = self.algorithm.name(),
                "evolved"
            );
        }
        outcome
    }

    /// Parse and apply one command line. Blank lines are ignored.
    pub fn process_command(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Apply an already parsed command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(command = command.keyword(), "executing {:?}", command);
        match command {
            Command::Set { row, col, kind, age } => {
                let (row, col) = self.position(row, col)?;
                self.set_tile(row, col, Tile::new(kind, age))?;
            }
            Command::Fill { kind, age } => self.fill(kind, age),
            Command::SetShape { row, col, shape } => {
                let (row, col) = self.position(row, col)?;
                self.set_shape(row, col, &shape)?;
            }
            Command::SetCopycats { pattern } => self.set_copycats(pattern)?,
            Command::Evolve { steps, secondary } => {
                debug!(secondary, "evolve secondary argument ignored");
                self.evolve(steps)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Text picture of the grid: one color abbreviation per cell, rows framed by `|`
    pub fn illustrate(&self) -> Result<String> {
        let (rows, cols) = self.dimensions();
        let mut out = String::with_capacity(rows * (cols + 3));
        for row in 0..rows {
            out.push('|');
            for col in 0..cols {
                out.push(self.grid.tile(row, col)?.color().abbreviation());
            }
            out.push_str("|\n");
        }
        Ok(out)
    }

    /// Close the sink and hand it back
    pub fn close(mut self) -> S {
        self.sink.close();
        self.sink
    }

    /// Command coordinates are signed; anything negative is out of bounds
    fn position(&self, row: i64, col: i64) -> Result<(usize, usize)> {
        let (rows, cols) = self.dimensions();
        let out_of_bounds = EngineError::OutOfBounds { row, col, rows, cols };
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < rows && c < cols => Ok((r, c)),
            _ => Err(out_of_bounds),
        }
    }

    fn paint(&mut self, row: usize, col: usize) -> Result<()> {
        let color = self.grid.tile(row, col)?.color();
        self.sink.paint_solid_color(row, col, color);
        Ok(())
    }

    fn repaint_all(&mut self) -> Result<()> {
        let (rows, cols) = self.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                self.paint(row, col)?;
            }
        }
        Ok(())
    }
}
