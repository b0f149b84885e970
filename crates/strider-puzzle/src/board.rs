//! The puzzle board: tile grid, blank tracking, and move generation.

use std::fmt;

use rand::{Rng, RngExt};
use strider_core::{Point, Range};
use strider_search::{SearchState, Visited};

/// The tile value that marks the blank slot.
pub const BLANK: u8 = 0;

/// A direction the blank can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// All four directions, in the order successor generation enumerates
    /// them.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// The grid offset of one slide in this direction.
    #[inline]
    pub fn delta(self) -> Point {
        match self {
            Dir::Up => Point::new(0, -1),
            Dir::Down => Point::new(0, 1),
            Dir::Left => Point::new(-1, 0),
            Dir::Right => Point::new(1, 0),
        }
    }

    /// The direction that undoes this one.
    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dir::Up => "Up",
            Dir::Down => "Down",
            Dir::Left => "Left",
            Dir::Right => "Right",
        };
        f.write_str(s)
    }
}

/// A width×width sliding-tile board.
///
/// Tiles are stored row-major; the blank's position is tracked explicitly
/// so move generation never rescans the grid. Boards are immutable values:
/// [`shift`](Board::shift) returns a new board rather than editing in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub(crate) width: i32,
    pub(crate) tiles: Vec<u8>,
    pub(crate) blank: Point,
}

impl Board {
    /// Build a board from a square array of rows.
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Board {
        let tiles = rows.iter().flatten().copied().collect();
        Board::from_tiles(N as i32, tiles)
    }

    /// Build a board from row-major tiles.
    ///
    /// The blank position is located by scanning for [`BLANK`]. No
    /// validation happens here: run [`is_valid`](Board::is_valid) before
    /// searching with a board from untrusted input.
    pub fn from_tiles(width: i32, tiles: Vec<u8>) -> Board {
        let blank = match tiles.iter().position(|&t| t == BLANK) {
            Some(i) => Point::new(i as i32 % width, i as i32 / width),
            None => Point::new(-1, -1),
        };
        Board {
            width,
            tiles,
            blank,
        }
    }

    /// The canonical solved board: tiles 1..width² in row-major order with
    /// the blank in the bottom-right corner.
    pub fn solved(width: i32) -> Board {
        let n = (width * width) as u8;
        let mut tiles: Vec<u8> = (1..n).collect();
        tiles.push(BLANK);
        Board {
            width,
            tiles,
            blank: Point::new(width - 1, width - 1),
        }
    }

    /// A solvable board produced by applying `steps` random slides to the
    /// solved board.
    pub fn scrambled(width: i32, steps: u32, rng: &mut impl Rng) -> Board {
        let mut board = Board::solved(width);
        for _ in 0..steps {
            let dir = Dir::ALL[rng.random_range(0..Dir::ALL.len())];
            if let Some(next) = board.shift(dir) {
                board = next;
            }
        }
        board
    }

    /// Board width (and height).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The board rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.width)
    }

    /// Position of the blank slot.
    #[inline]
    pub fn blank(&self) -> Point {
        self.blank
    }

    /// The tile at `p`. `p` must be inside [`bounds`](Board::bounds).
    #[inline]
    pub fn tile(&self, p: Point) -> u8 {
        self.tiles[self.idx(p)]
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Slide the blank one cell in `dir`, swapping it with the neighbouring
    /// tile.
    ///
    /// Pure: returns a new board with an updated blank position, or `None`
    /// when the move would leave the grid.
    pub fn shift(&self, dir: Dir) -> Option<Board> {
        let dest = self.blank + dir.delta();
        if !self.bounds().contains(dest) {
            return None;
        }
        let mut tiles = self.tiles.clone();
        tiles.swap(self.idx(self.blank), self.idx(dest));
        Some(Board {
            width: self.width,
            tiles,
            blank: dest,
        })
    }

    /// Sum over every non-blank tile of the Manhattan distance between its
    /// position here and its position in `goal`.
    ///
    /// Admissible: one slide changes one tile's distance by at most 1, so
    /// this never overestimates the remaining move count. Both boards must
    /// carry the same tile multiset for the result to mean anything.
    pub fn manhattan_to(&self, goal: &Board) -> i32 {
        let mut pos = [Point::ZERO; u8::MAX as usize + 1];
        for p in goal.bounds() {
            pos[goal.tile(p) as usize] = p;
        }
        let mut h = 0;
        for p in self.bounds() {
            let t = self.tile(p);
            if t != BLANK {
                h += p.manhattan(pos[t as usize]);
            }
        }
        h
    }

    /// Whether the board contains exactly one blank slot.
    pub fn is_valid(&self) -> bool {
        self.tiles.iter().filter(|&&t| t == BLANK).count() == 1
    }

    /// Whether the two boards carry the same multiset of tile values.
    ///
    /// A search between boards with differing tile sets never terminates
    /// successfully, so check this alongside [`is_valid`](Board::is_valid)
    /// before solving.
    pub fn same_tile_set(&self, other: &Board) -> bool {
        if self.tiles.len() != other.tiles.len() {
            return false;
        }
        let mut a = self.tiles.clone();
        let mut b = other.tiles.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl fmt::Display for Board {
    /// Renders the grid one row per line, with the blank drawn as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.width {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let t = self.tile(Point::new(x, y));
                if t == BLANK {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{t:>2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl SearchState for Board {
    /// The flattened grid: row-major tiles.
    type Key = Vec<u8>;
    type Action = Dir;

    fn key(&self) -> Vec<u8> {
        self.tiles.clone()
    }

    fn matches(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }

    fn estimate(&self, goal: &Self) -> i32 {
        self.manhattan_to(goal)
    }

    fn successors(&self, visited: &Visited<Self>, buf: &mut Vec<(Self, Dir)>) {
        for dir in Dir::ALL {
            if let Some(next) = self.shift(dir) {
                if !visited.contains(next.tiles.as_slice()) {
                    buf.push((next, dir));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvability::is_solvable;
    use strider_search::{Astar, Step};

    fn goal3() -> Board {
        Board::solved(3)
    }

    /// Checks the whole-path contract: the first step is the bare initial
    /// state, and every later step is the previous state shifted by the
    /// step's own action.
    fn assert_path_is_valid(path: &[Step<Board>], initial: &Board, goal: &Board) {
        assert_eq!(&path[0].state, initial);
        assert_eq!(path[0].action, None);
        assert_eq!(path[0].cost, 0);
        for (i, pair) in path.windows(2).enumerate() {
            let dir = pair[1].action.expect("non-root step has an action");
            let expected = pair[0].state.shift(dir).expect("action must be legal");
            assert_eq!(pair[1].state, expected);
            assert_eq!(pair[1].cost, i as i32 + 1);
        }
        assert_eq!(&path[path.len() - 1].state, goal);
    }

    // -----------------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------------

    #[test]
    fn shift_swaps_blank_with_neighbour() {
        let b = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let up = b.shift(Dir::Up).unwrap();
        assert_eq!(up, Board::from_rows([[1, 0, 3], [4, 2, 6], [7, 5, 8]]));
        assert_eq!(up.blank(), Point::new(1, 0));
        assert_eq!(up.tile(up.blank()), BLANK);
        // The source board is untouched.
        assert_eq!(b.blank(), Point::new(1, 1));
    }

    #[test]
    fn shift_off_the_edge_is_rejected() {
        let b = goal3(); // blank in the bottom-right corner
        assert!(b.shift(Dir::Down).is_none());
        assert!(b.shift(Dir::Right).is_none());
        assert!(b.shift(Dir::Up).is_some());
        assert!(b.shift(Dir::Left).is_some());
    }

    #[test]
    fn moves_are_reversible() {
        let b = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        for dir in Dir::ALL {
            let there = b.shift(dir).expect("centre blank can move anywhere");
            let back = there.shift(dir.opposite()).unwrap();
            assert_eq!(back, b);
        }
    }

    // -----------------------------------------------------------------------
    // Equality and validity
    // -----------------------------------------------------------------------

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let b = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let c = goal3();
        assert!(a.matches(&a));
        assert!(a.matches(&b) && b.matches(&a));
        assert!(!a.matches(&c) && !c.matches(&a));
    }

    #[test]
    fn validity_requires_exactly_one_blank() {
        assert!(goal3().is_valid());
        assert!(!Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 0, 8]]).is_valid());
        assert!(!Board::from_rows([[1, 2], [3, 4]]).is_valid());
    }

    #[test]
    fn tile_set_comparison() {
        let a = Board::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let b = Board::from_rows([[8, 3, 2], [4, 7, 1], [0, 5, 6]]);
        assert!(a.same_tile_set(&b));
        // A duplicated value breaks the multiset.
        let c = Board::from_rows([[8, 3, 2], [4, 7, 1], [0, 5, 5]]);
        assert!(!a.same_tile_set(&c));
    }

    // -----------------------------------------------------------------------
    // Heuristic
    // -----------------------------------------------------------------------

    #[test]
    fn heuristic_is_zero_at_the_goal() {
        assert_eq!(goal3().manhattan_to(&goal3()), 0);
    }

    #[test]
    fn heuristic_counts_tile_displacement() {
        // Tiles 5 and 8 are each one cell from home.
        let b = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(b.manhattan_to(&goal3()), 2);
    }

    #[test]
    fn heuristic_never_exceeds_the_solved_move_count() {
        let mut rng = rand::rng();
        let mut astar = Astar::new();
        for steps in [4, 12, 24] {
            let b = Board::scrambled(3, steps, &mut rng);
            let path = astar.solve(&b, &goal3()).expect("scrambles stay solvable");
            let moves = path.len() as i32 - 1;
            assert!(b.manhattan_to(&goal3()) <= moves);
            // A* is optimal here, so the scramble bounds the answer too.
            assert!(moves <= steps as i32);
        }
    }

    // -----------------------------------------------------------------------
    // End-to-end solves
    // -----------------------------------------------------------------------

    #[test]
    fn solving_the_goal_yields_a_single_step() {
        let path = Astar::new().solve(&goal3(), &goal3()).unwrap();
        assert_eq!(path.len(), 1);
        assert_path_is_valid(&path, &goal3(), &goal3());
    }

    #[test]
    fn solve_two_move_instance() {
        let initial = Board::from_rows([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let path = Astar::new().solve(&initial, &goal3()).unwrap();
        assert_eq!(path.len(), 3);
        assert_path_is_valid(&path, &initial, &goal3());
        assert_eq!(path[1].action, Some(Dir::Down));
        assert_eq!(path[2].action, Some(Dir::Right));
    }

    #[test]
    fn solve_three_move_instance() {
        let initial = Board::from_rows([[1, 0, 3], [4, 2, 5], [7, 8, 6]]);
        let path = Astar::new().solve(&initial, &goal3()).unwrap();
        assert_eq!(path.len(), 4);
        assert_path_is_valid(&path, &initial, &goal3());
    }

    #[test]
    fn solve_deep_instance() {
        // 24 optimal moves between these two boards.
        let initial = Board::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let goal = Board::from_rows([[8, 3, 2], [4, 7, 1], [0, 5, 6]]);
        assert!(is_solvable(&initial, &goal));
        let path = Astar::new().solve(&initial, &goal).unwrap();
        assert_eq!(path.len(), 25);
        assert_path_is_valid(&path, &initial, &goal);
    }

    #[test]
    fn unsolvable_pair_exhausts_the_frontier() {
        // One transposition away from the goal: odd permutation parity with
        // the blank fixed, so the goal is outside the reachable component.
        // Width 2 keeps that component tiny (12 states).
        let initial = Board::from_rows([[2, 1], [3, 0]]);
        let goal = Board::solved(2);
        assert!(!is_solvable(&initial, &goal));
        let mut astar = Astar::new();
        assert!(astar.solve(&initial, &goal).is_none());
        assert_eq!(astar.expanded(), 12);
    }

    #[test]
    fn solvability_agrees_with_search_on_scrambles() {
        let mut rng = rand::rng();
        let mut astar = Astar::new();
        for steps in [6, 18, 30] {
            let b = Board::scrambled(3, steps, &mut rng);
            assert!(b.is_valid());
            assert!(b.same_tile_set(&goal3()));
            assert!(is_solvable(&b, &goal3()));
            assert!(astar.solve(&b, &goal3()).is_some());
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn display_renders_rows_with_a_dot_blank() {
        let b = Board::from_rows([[1, 2], [3, 0]]);
        assert_eq!(b.to_string(), " 1  2\n 3  .\n");
    }
}
