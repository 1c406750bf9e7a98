use crate::core::Grid;

/// Recomputes every cell's score for the current round.
///
/// A cell's score is the sum of its payoffs against every cell in its
/// in-grid Moore neighborhood, itself included (each agent plays one game
/// against itself per round). Neighbors outside the grid contribute
/// nothing, so edge and corner cells simply earn less. Previous scores are
/// discarded, never accumulated across rounds.
pub fn update_scores(grid: &mut Grid, defection_bonus: f64) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let me = grid.cell(row, col).strategy();
            let score: f64 = grid
                .moore_neighborhood(row, col)
                .map(|(r, c)| me.payoff_against(grid.cell(r, c).strategy(), defection_bonus))
                .sum();
            grid.set_score(row, col, score);
        }
    }
}

/// Computes the next generation of strategies and commits it.
///
/// Each cell's candidate starts as the cell itself and is replaced only by
/// a neighbor whose score is strictly greater, scanning the Moore
/// neighborhood in row-major order. Ties therefore resolve to the earliest
/// maximal cell in scan order, with the cell itself as the default.
///
/// Every candidate is computed from the same pre-update snapshot of scores
/// and strategies; the staged strategies are committed together once the
/// whole grid has been scanned, so no cell can observe a neighbor's
/// mid-round switch.
pub fn update_strategies(grid: &mut Grid) {
    let mut staged = Vec::with_capacity(grid.rows() * grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let mut best = (row, col);
            let mut best_score = grid.cell(row, col).score();
            for (r, c) in grid.moore_neighborhood(row, col) {
                let score = grid.cell(r, c).score();
                if score > best_score {
                    best = (r, c);
                    best_score = score;
                }
            }
            staged.push(grid.cell(best.0, best.1).strategy());
        }
    }
    grid.commit_strategies(&staged);
}

/// Evolves the grid through `steps` generations of the spatial game.
///
/// The initial grid counts as the first generation, so a step count of `n`
/// plays n - 1 full (score, update) rounds; `0` and `1` both leave the grid
/// untouched. The computation is deterministic: the same grid, step count,
/// and bonus always produce the same final grid.
///
/// The engine does not validate `defection_bonus`; callers must keep it
/// positive for the game to be meaningful.
pub fn evolve(grid: &mut Grid, steps: usize, defection_bonus: f64) {
    for _ in 1..steps {
        update_scores(grid, defection_bonus);
        update_strategies(grid);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_symbol_rows(rows).unwrap()
    }

    fn symbols(grid: &Grid) -> Vec<String> {
        grid.symbol_rows().collect()
    }

    fn scores(grid: &Grid) -> Vec<f64> {
        (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| (r, c)))
            .map(|(r, c)| grid.cell(r, c).score())
            .collect()
    }

    #[test]
    fn all_cooperate_scores_count_in_grid_neighbors() {
        let mut field = grid(&["CCC", "CCC", "CCC"]);
        update_scores(&mut field, 2.0);
        // Interior cell sees the full 3x3 block, an edge six cells, a
        // corner four.
        assert_eq!(field.cell(1, 1).score(), 9.0);
        assert_eq!(field.cell(0, 1).score(), 6.0);
        assert_eq!(field.cell(0, 0).score(), 4.0);
    }

    #[test]
    fn center_defector_score_sheet() {
        let mut field = grid(&["CCC", "CDC", "CCC"]);
        update_scores(&mut field, 3.0);
        // The defector: eight cooperating neighbors at b each, a worthless
        // self game.
        assert_eq!(field.cell(1, 1).score(), 24.0);
        // Corner cooperators: three cooperating neighbors plus the defector.
        assert_eq!(field.cell(0, 0).score(), 3.0);
        assert_eq!(field.cell(2, 2).score(), 3.0);
        // Edge cooperators: five cooperating neighbors plus the defector.
        assert_eq!(field.cell(0, 1).score(), 5.0);
        assert_eq!(field.cell(1, 0).score(), 5.0);
    }

    #[test]
    fn center_defector_takes_over_in_one_round() {
        let mut field = grid(&["CCC", "CDC", "CCC"]);
        update_scores(&mut field, 3.0);
        update_strategies(&mut field);
        assert_eq!(symbols(&field), ["DDD", "DDD", "DDD"]);
    }

    #[test]
    fn ties_keep_the_cell_itself() {
        // With b = 2 every cell in this row scores exactly 2, so no
        // neighbor is strictly better and every cell keeps its strategy.
        let mut field = grid(&["CCD"]);
        update_scores(&mut field, 2.0);
        for col in 0..3 {
            assert_eq!(field.cell(0, col).score(), 2.0);
        }
        update_strategies(&mut field);
        assert_eq!(symbols(&field), ["CCD"]);
    }

    #[test]
    fn updates_read_the_pre_round_snapshot() {
        // At b = 3 the corner defector scores 9 and the center cooperator 8,
        // so the center itself switches to Defect this round. Cells whose
        // best neighbor is the center must still adopt its pre-round
        // Cooperate; seeing Defect there would mean the commit leaked into
        // the scan.
        let mut field = grid(&["DCC", "CCC", "CCC"]);
        update_scores(&mut field, 3.0);
        assert_eq!(field.cell(0, 0).score(), 9.0);
        assert_eq!(field.cell(1, 1).score(), 8.0);
        update_strategies(&mut field);
        assert_eq!(symbols(&field), ["DDC", "DDC", "CCC"]);
    }

    #[test]
    fn scores_are_recomputed_not_accumulated() {
        let mut field = grid(&["CD", "DC"]);
        update_scores(&mut field, 1.5);
        let first = scores(&field);
        update_scores(&mut field, 1.5);
        assert_eq!(scores(&field), first);
    }

    #[test]
    fn zero_and_one_step_are_identity() {
        let initial = grid(&["CDC", "DCD"]);
        let mut field = initial.clone();
        evolve(&mut field, 0, 1.9);
        assert_eq!(field, initial);
        evolve(&mut field, 1, 1.9);
        assert_eq!(field, initial);
    }

    #[test]
    fn evolve_runs_one_round_per_generation_after_the_first() {
        let mut field = grid(&["CCC", "CDC", "CCC"]);
        evolve(&mut field, 2, 3.0);
        assert_eq!(symbols(&field), ["DDD", "DDD", "DDD"]);
    }

    #[test]
    fn homogeneous_grids_are_fixed_points() {
        for rows in [["CCCC"; 4], ["DDDD"; 4]] {
            let mut field = grid(&rows);
            let before = symbols(&field);
            evolve(&mut field, 6, 1.7);
            assert_eq!(symbols(&field), before);
        }
    }

    #[test]
    fn single_cell_only_plays_itself() {
        let mut field = grid(&["C"]);
        update_scores(&mut field, 5.0);
        assert_eq!(field.cell(0, 0).score(), 1.0);
        update_strategies(&mut field);
        assert_eq!(symbols(&field), ["C"]);

        let mut field = grid(&["D"]);
        update_scores(&mut field, 5.0);
        assert_eq!(field.cell(0, 0).score(), 0.0);
        evolve(&mut field, 10, 5.0);
        assert_eq!(symbols(&field), ["D"]);
    }

    #[test]
    fn evolution_is_deterministic() {
        let initial = grid(&["CCDCC", "CDDDC", "CCDCC", "CCCCC"]);
        let mut first = initial.clone();
        let mut second = initial.clone();
        evolve(&mut first, 8, 1.85);
        evolve(&mut second, 8, 1.85);
        assert_eq!(first, second);
    }
}
