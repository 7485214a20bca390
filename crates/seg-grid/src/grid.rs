//! The toroidal single-occupancy grid.

use seg_core::{AgentId, Coord, SimRng};

use crate::{GridError, GridResult};

/// A fixed-size 2D toroidal grid where each cell holds at most one agent.
///
/// Occupancy is stored as a dense row-major `Vec<AgentId>`; the
/// `AgentId::INVALID` sentinel marks an empty cell.  The grid enforces
/// single occupancy: [`place`][Self::place] onto an occupied cell and
/// [`relocate`][Self::relocate] onto an occupied destination both fail
/// rather than silently overwriting.
pub struct TorusGrid {
    width: u32,
    height: u32,
    /// Row-major occupancy array, length `width * height`.
    cells: Vec<AgentId>,
    /// Cached count of occupied cells for O(1) queries.
    occupied: usize,
}

impl TorusGrid {
    /// Create an empty grid.  Dimensions must be ≥ 1.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![AgentId::INVALID; width as usize * height as usize],
            occupied: 0,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    // ── Coordinate handling ───────────────────────────────────────────────

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        c.y as usize * self.width as usize + c.x as usize
    }

    #[inline]
    fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Wrap signed coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord {
            x: x.rem_euclid(self.width as i64) as u32,
            y: y.rem_euclid(self.height as i64) as u32,
        }
    }

    /// Iterator over all coordinates in row-major order.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord { x, y }))
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// The agent on `c`, or `None` if the cell is empty or out of bounds.
    #[inline]
    pub fn occupant(&self, c: Coord) -> Option<AgentId> {
        if !self.in_bounds(c) {
            return None;
        }
        let id = self.cells[self.idx(c)];
        (id != AgentId::INVALID).then_some(id)
    }

    /// `true` if `c` is in bounds and holds no agent.
    #[inline]
    pub fn is_cell_empty(&self, c: Coord) -> bool {
        self.in_bounds(c) && self.cells[self.idx(c)] == AgentId::INVALID
    }

    /// All currently-empty coordinates, in row-major order.
    ///
    /// O(cells) scan.  An explicit query beats a maintained free-list at this
    /// scale; relocation frequency never exceeds the agent count per tick.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coord_iter()
            .filter(|&c| self.cells[self.idx(c)] == AgentId::INVALID)
            .collect()
    }

    /// Uniformly sample one empty cell, or `None` if the grid is full.
    pub fn random_empty(&self, rng: &mut SimRng) -> Option<Coord> {
        rng.choose(&self.empty_cells()).copied()
    }

    // ── Moore neighborhood ────────────────────────────────────────────────

    /// The distinct cells of the Moore neighborhood of `c` (8 on any grid at
    /// least 3 cells wide and tall; fewer when wrap-around makes offsets
    /// coincide).  The center cell is never included.
    pub fn moore_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + use<> {
        let mut buf = [Coord::default(); 8];
        let mut n = 0;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let w = self.wrap(c.x as i64 + dx, c.y as i64 + dy);
                if w == c || buf[..n].contains(&w) {
                    continue;
                }
                buf[n] = w;
                n += 1;
            }
        }
        buf.into_iter().take(n)
    }

    /// The agents occupying the Moore neighborhood of `c`.
    pub fn neighbor_agents(&self, c: Coord) -> impl Iterator<Item = AgentId> + '_ {
        self.moore_neighbors(c).filter_map(|nc| self.occupant(nc))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` on cell `c`.
    pub fn place(&mut self, agent: AgentId, c: Coord) -> GridResult<()> {
        if !self.in_bounds(c) {
            return Err(GridError::OutOfBounds(c));
        }
        let i = self.idx(c);
        if self.cells[i] != AgentId::INVALID {
            return Err(GridError::CellOccupied(c));
        }
        self.cells[i] = agent;
        self.occupied += 1;
        Ok(())
    }

    /// Clear cell `c`, returning the agent that was on it.
    pub fn remove(&mut self, c: Coord) -> GridResult<AgentId> {
        if !self.in_bounds(c) {
            return Err(GridError::OutOfBounds(c));
        }
        let i = self.idx(c);
        let id = self.cells[i];
        if id == AgentId::INVALID {
            return Err(GridError::CellEmpty(c));
        }
        self.cells[i] = AgentId::INVALID;
        self.occupied -= 1;
        Ok(id)
    }

    /// Move the agent on `from` to the empty cell `to`.
    ///
    /// Fails without modifying the grid if `from` is empty or `to` is
    /// occupied, so the single-occupancy invariant can never be broken.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> GridResult<AgentId> {
        if !self.in_bounds(to) {
            return Err(GridError::OutOfBounds(to));
        }
        if !self.is_cell_empty(to) {
            return Err(GridError::CellOccupied(to));
        }
        let agent = self.remove(from)?;
        self.place(agent, to)?;
        Ok(agent)
    }
}
