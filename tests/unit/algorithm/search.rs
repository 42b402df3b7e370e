//! Tests for the backtracking search, its observer hooks and its options

#[cfg(test)]
mod tests {
    use rectcover::algorithm::search::{
        NoopObserver, SearchObserver, SearchOptions, SearchOutcome, Solver, solve, solve_with,
    };
    use rectcover::spatial::{Orientation, Piece, Placement, Puzzle};

    #[derive(Default)]
    struct Recorder {
        attempts: Vec<(usize, Orientation, usize)>,
        nodes: usize,
        backtracks: usize,
    }

    impl SearchObserver for Recorder {
        fn on_node(&mut self, _depth: usize) {
            self.nodes += 1;
        }

        fn on_attempt(&mut self, piece: usize, orientation: Orientation, cell: usize) {
            self.attempts.push((piece, orientation, cell));
        }

        fn on_backtrack(&mut self, _depth: usize) {
            self.backtracks += 1;
        }
    }

    fn pieces(dimensions: &[(usize, usize)]) -> Vec<Piece> {
        dimensions
            .iter()
            .filter_map(|&(w, h)| Piece::new(w, h).ok())
            .collect()
    }

    const fn orientation(width: usize, height: usize) -> Orientation {
        Orientation { width, height }
    }

    // Tests two 4x2 pieces stack at y=0 and y=2
    // Verified by passing the anchor cell instead of anchor + 1 as the floor
    #[test]
    fn test_stacked_halves() {
        let report = Solver::new(4, pieces(&[(4, 2), (4, 2)]))
            .and_then(Solver::run)
            .ok();
        let Some(report) = report else {
            unreachable!("search on a valid board should not fail");
        };

        let Some(solution) = report.outcome.solution() else {
            unreachable!("two halves tile the board");
        };
        assert_eq!(
            solution.placements(),
            &[
                Placement {
                    piece: 0,
                    x: 0,
                    y: 0,
                    width: 4,
                    height: 2
                },
                Placement {
                    piece: 1,
                    x: 0,
                    y: 2,
                    width: 4,
                    height: 2
                },
            ]
        );
        assert!(report.board.is_full());
        assert_eq!(report.board.occupied_cells(), 16);
    }

    // Tests a single 2x2 piece cannot cover a 4x4 board and the board is restored
    // Verified by returning true when the pool is exhausted
    #[test]
    fn test_insufficient_area_exhausts() {
        let report = Solver::new(4, pieces(&[(2, 2)])).and_then(Solver::run).ok();
        let Some(report) = report else {
            unreachable!("search on a valid board should not fail");
        };

        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.board.free_cells(), 16);
        assert_eq!(report.board.occupied_cells(), 0);
        assert_eq!(report.stats.placements, report.stats.backtracks);
    }

    // Tests both orientations of a non-square piece are tried at the anchor
    // Verified by skipping the rotated orientation
    #[test]
    fn test_non_square_tries_both_orientations() {
        let mut recorder = Recorder::default();
        let result = Solver::new(4, pieces(&[(1, 2)]))
            .map(|solver| solver.with_observer(&mut recorder))
            .and_then(Solver::run);
        assert!(result.is_ok_and(|report| !report.outcome.is_solved()));

        assert_eq!(
            recorder.attempts,
            vec![(0, orientation(1, 2), 0), (0, orientation(2, 1), 0)]
        );
        assert_eq!(recorder.backtracks, 2);
    }

    // Tests a square piece is tried only once per cell
    // Verified by always yielding the rotated orientation
    #[test]
    fn test_square_tries_one_orientation() {
        let mut recorder = Recorder::default();
        let result = Solver::new(4, pieces(&[(2, 2)]))
            .map(|solver| solver.with_observer(&mut recorder))
            .and_then(Solver::run);
        assert!(result.is_ok());

        assert_eq!(recorder.attempts, vec![(0, orientation(2, 2), 0)]);
    }

    // Tests a piece that does not fit in its first orientation is placed rotated
    // Verified by returning after the first orientation fails
    #[test]
    fn test_rotation_used_when_needed() {
        let result = Solver::new(2, pieces(&[(1, 2), (2, 1)])).and_then(Solver::run);
        let Ok(report) = result else {
            unreachable!("search on a valid board should not fail");
        };
        let Some(solution) = report.outcome.solution() else {
            unreachable!("two dominoes tile a 2x2 board");
        };

        // First domino goes upright, the second one has to stand up as well
        let orientations: Vec<Orientation> = solution
            .placements()
            .iter()
            .map(Placement::orientation)
            .collect();
        assert_eq!(orientations, vec![orientation(1, 2), orientation(1, 2)]);
        assert!(solution.verify().is_ok());
    }

    // Tests duplicate skipping prunes attempts without changing the trail
    // Verified by recording shapes without checking them
    #[test]
    fn test_duplicate_skipping_keeps_trail() {
        let list = pieces(&[(3, 1), (3, 1), (3, 1), (2, 2), (1, 1), (1, 1), (1, 1)]);

        let mut pruned = Recorder::default();
        let mut plain = Recorder::default();

        let with_skip = Solver::new(4, list.clone())
            .map(|solver| solver.with_observer(&mut pruned))
            .and_then(Solver::run);
        let without_skip = Solver::new(4, list)
            .map(|solver| {
                solver
                    .with_options(SearchOptions {
                        skip_duplicate_pieces: false,
                    })
                    .with_observer(&mut plain)
            })
            .and_then(Solver::run);

        let (Ok(with_skip), Ok(without_skip)) = (with_skip, without_skip) else {
            unreachable!("search on a valid board should not fail");
        };

        let trail = |outcome: &SearchOutcome| {
            outcome.solution().map(|solution| {
                solution
                    .placements()
                    .iter()
                    .map(|p| (p.x, p.y, p.width, p.height))
                    .collect::<Vec<_>>()
            })
        };
        assert_eq!(trail(&with_skip.outcome), trail(&without_skip.outcome));
        assert!(with_skip.outcome.is_solved());
        assert!(pruned.attempts.len() <= plain.attempts.len());
    }

    // Tests duplicate skipping prunes attempts on an unsolvable instance
    // Verified by disabling the shape check
    #[test]
    fn test_duplicate_skipping_prunes_exhaustion() {
        let list = pieces(&[(3, 3), (2, 1), (2, 1), (2, 1)]);

        let pruned = Solver::new(4, list.clone()).and_then(Solver::run);
        let plain = Solver::new(4, list)
            .map(|solver| {
                solver.with_options(SearchOptions {
                    skip_duplicate_pieces: false,
                })
            })
            .and_then(Solver::run);

        let (Ok(pruned), Ok(plain)) = (pruned, plain) else {
            unreachable!("search on a valid board should not fail");
        };
        assert_eq!(pruned.outcome, SearchOutcome::Exhausted);
        assert_eq!(plain.outcome, SearchOutcome::Exhausted);
        assert!(pruned.stats.attempts < plain.stats.attempts);
    }

    // Tests an empty piece list is exhausted without attempts
    // Verified by removing the empty-pool check
    #[test]
    fn test_empty_pool() {
        let mut recorder = Recorder::default();
        let result = Solver::new(3, Vec::new())
            .map(|solver| solver.with_observer(&mut recorder))
            .and_then(Solver::run);
        assert!(result.is_ok_and(|report| report.outcome == SearchOutcome::Exhausted));
        assert!(recorder.attempts.is_empty());
        assert_eq!(recorder.nodes, 1);
    }

    // Tests oversized pieces are attempted in both orientations but never placed
    // Verified by removing the bounds check in is_free
    #[test]
    fn test_oversized_piece_never_fits() {
        let mut recorder = Recorder::default();
        let result = Solver::new(3, pieces(&[(4, 1)]))
            .map(|solver| solver.with_observer(&mut recorder))
            .and_then(Solver::run);
        let Ok(report) = result else {
            unreachable!("search on a valid board should not fail");
        };
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.stats.placements, 0);
        assert_eq!(recorder.attempts.len(), 2);
    }

    // Tests a full board ends the search even when pieces remain in the pool
    // Verified by requiring an empty pool for success
    #[test]
    fn test_full_board_ends_search() {
        let result = Solver::new(3, pieces(&[(3, 3), (1, 1)])).and_then(Solver::run);
        let Ok(report) = result else {
            unreachable!("search on a valid board should not fail");
        };
        let Some(solution) = report.outcome.solution() else {
            unreachable!("the 3x3 piece covers the board");
        };
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.total_area(), 9);
        assert_eq!(report.unplaced, 1);
    }

    // Tests solve orders pieces by area before searching
    // Verified by passing the input order straight to the solver
    #[test]
    fn test_solve_uses_area_order() {
        let puzzle = Puzzle::from_dimensions(3, &[(1, 3), (2, 3)]);
        let Ok(report) = puzzle.and_then(|puzzle| solve(&puzzle)) else {
            unreachable!("search on a valid board should not fail");
        };
        let Some(solution) = report.outcome.solution() else {
            unreachable!("two strips tile the board");
        };
        let first = solution.placements().first().map(|p| (p.width, p.height));
        assert_eq!(first, Some((2, 3)));
    }

    // Tests repeated runs give identical reports
    // Verified by shuffling the pool iteration order
    #[test]
    fn test_deterministic() {
        let puzzle = Puzzle::from_dimensions(5, &[(2, 3), (3, 2), (3, 3), (2, 2), (1, 2)]);
        let Ok(puzzle) = puzzle else {
            unreachable!("valid puzzle");
        };
        let first = solve_with(&puzzle, SearchOptions::default(), NoopObserver);
        let second = solve_with(&puzzle, SearchOptions::default(), NoopObserver);
        let (Ok(first), Ok(second)) = (first, second) else {
            unreachable!("search on a valid board should not fail");
        };
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.stats, second.stats);
    }

    // Tests the statistics agree with the observer
    // Verified by counting attempts after the fit test
    #[test]
    fn test_stats_match_observer() {
        let mut recorder = Recorder::default();
        let puzzle = Puzzle::from_dimensions(4, &[(2, 4), (1, 4), (1, 2), (1, 2)]);
        let Ok(puzzle) = puzzle else {
            unreachable!("valid puzzle");
        };
        let Ok(report) = solve_with(&puzzle, SearchOptions::default(), &mut recorder) else {
            unreachable!("search on a valid board should not fail");
        };
        assert!(report.outcome.is_solved());
        assert_eq!(report.stats.attempts, recorder.attempts.len() as u64);
        assert_eq!(report.stats.nodes, recorder.nodes as u64);
        assert_eq!(report.stats.backtracks, recorder.backtracks as u64);
        assert_eq!(report.stats.deepest, 4);
    }

    // Tests an invalid board size is rejected before searching
    // Verified by skipping size validation in Board::new
    #[test]
    fn test_invalid_size() {
        assert!(Solver::new(0, pieces(&[(1, 1)])).is_err());
        assert!(Solver::new(65, pieces(&[(1, 1)])).is_err());
    }
}
