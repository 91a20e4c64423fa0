use std::collections::VecDeque;

use puzzle_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    garden: Garden,
    regions: Option<Vec<Region>>,
}

/// Rectangular map of plant types, one byte per plot.
#[derive(Debug)]
struct Garden {
    width: usize,
    height: usize,
    plots: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    area: u64,
    perimeter: u64,
    sides: u64,
}

const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Garden {
    fn plant(&self, row: isize, col: isize) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.height && col < self.width).then(|| self.plots[row * self.width + col])
    }

    fn same(&self, row: isize, col: isize, plant: u8) -> bool {
        self.plant(row, col) == Some(plant)
    }

    /// Flood-fills every region once.
    ///
    /// Sides are counted as corners: a plot contributes an outer corner where
    /// both orthogonal neighbours towards a diagonal differ, and an inner
    /// corner where both match but the diagonal itself differs.
    fn regions(&self) -> Vec<Region> {
        let mut visited = vec![false; self.plots.len()];
        let mut regions = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..self.plots.len() {
            if visited[start] {
                continue;
            }
            let plant = self.plots[start];
            let mut region = Region {
                area: 0,
                perimeter: 0,
                sides: 0,
            };
            visited[start] = true;
            queue.push_back(start);

            while let Some(index) = queue.pop_front() {
                let row = (index / self.width) as isize;
                let col = (index % self.width) as isize;
                region.area += 1;

                for (dr, dc) in ORTHOGONAL {
                    let (nr, nc) = (row + dr, col + dc);
                    if self.same(nr, nc, plant) {
                        let next = nr as usize * self.width + nc as usize;
                        if !visited[next] {
                            visited[next] = true;
                            queue.push_back(next);
                        }
                    } else {
                        region.perimeter += 1;
                    }
                }

                for (dr, dc) in DIAGONAL {
                    let vertical = self.same(row + dr, col, plant);
                    let horizontal = self.same(row, col + dc, plant);
                    let diagonal = self.same(row + dr, col + dc, plant);
                    if (!vertical && !horizontal) || (vertical && horizontal && !diagonal) {
                        region.sides += 1;
                    }
                }
            }

            regions.push(region);
        }

        regions
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<&[u8]> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();

        let Some(first) = rows.first() else {
            return Err(ParseError::MissingData("a garden".into()));
        };
        let width = first.len();
        if let Some((row_idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) expected {} plots, got {}",
                row_idx + 1,
                width,
                row.len()
            )));
        }

        Ok(SharedData {
            garden: Garden {
                width,
                height: rows.len(),
                plots: rows.concat(),
            },
            regions: None,
        })
    }
}

fn regions(shared: &mut SharedData) -> &[Region] {
    let garden = &shared.garden;
    shared.regions.get_or_insert_with(|| garden.regions())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}
