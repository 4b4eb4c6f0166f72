#[cfg(test)]
mod _tests_partition {
    use super::super::errors::KPathError;
    use super::super::partition::*;
    use crate::config::MAX_TOTAL_POINTS;
    use approx::assert_relative_eq;

    // Deterministic set of awkward length combinations for property checks
    fn length_sets() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 1.0],
            vec![1.0, 2.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 2.0],
            vec![0.5, 0.7071067811865476, 0.8660254037844386, 0.5],
            vec![0.01, 1.0, 0.02, 3.0],
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
            vec![2.0_f64.sqrt(), 3.0_f64.sqrt(), 5.0_f64.sqrt(), 1.0 / 3.0, 0.25],
            vec![1e-3, 1e3],
        ]
    }

    // ==================== Scenarios ====================

    #[test]
    fn test_equal_segments_split_evenly() {
        let allocation = allocate(&[1.0, 1.0], 5).unwrap();
        assert_eq!(allocation.initial, vec![2, 2]);
        assert_eq!(allocation.residual, 0);
        assert_eq!(allocation.partition, vec![2, 2]);
        assert!(allocation.score_trace.is_empty());
    }

    #[test]
    fn test_proportional_split_without_residual() {
        let allocation = allocate(&[1.0, 2.0], 7).unwrap();
        assert_eq!(allocation.partition, vec![2, 4]);
        assert_eq!(allocation.residual, 0);
    }

    #[test]
    fn test_one_point_per_segment() {
        let allocation = allocate(&[1.0, 1.0, 1.0], 4).unwrap();
        assert_eq!(allocation.partition, vec![1, 1, 1]);
        assert_eq!(allocation.total_points(), 4);
    }

    #[test]
    fn test_missing_point_goes_to_lowest_index_on_tie() {
        let allocation = allocate(&[1.0, 1.0, 1.0], 5).unwrap();
        assert_eq!(allocation.initial, vec![1, 1, 1]);
        assert_eq!(allocation.residual, 1);
        assert_eq!(allocation.corrections(), 1);
        assert_eq!(allocation.partition, vec![2, 1, 1]);

        // Reproducible across runs
        for _ in 0..10 {
            assert_eq!(allocate(&[1.0, 1.0, 1.0], 5).unwrap(), allocation);
        }
    }

    #[test]
    fn test_zero_length_is_degenerate() {
        assert_eq!(
            allocate(&[1.0, 0.0, 1.0], 10),
            Err(KPathError::DegenerateSegment { index: 1 })
        );
        assert_eq!(
            allocate(&[0.0], 10),
            Err(KPathError::DegenerateSegment { index: 0 })
        );
    }

    #[test]
    fn test_non_finite_length_is_degenerate() {
        assert_eq!(
            allocate(&[1.0, f64::NAN], 10),
            Err(KPathError::DegenerateSegment { index: 1 })
        );
        assert_eq!(
            allocate(&[f64::INFINITY, 1.0], 10),
            Err(KPathError::DegenerateSegment { index: 0 })
        );
    }

    #[test]
    fn test_budget_below_segment_count_is_rejected() {
        assert_eq!(
            allocate(&[1.0, 1.0, 1.0], 3),
            Err(KPathError::InsufficientBudget {
                total_points: 3,
                segments: 3
            })
        );
        assert!(matches!(
            allocate(&[1.0], 0),
            Err(KPathError::InsufficientBudget { .. })
        ));
        assert!(allocate(&[1.0, 1.0, 1.0], 4).is_ok());
    }

    #[test]
    fn test_empty_lengths_are_invalid() {
        assert!(matches!(allocate(&[], 5), Err(KPathError::InvalidPath(_))));
    }

    // ==================== Rounding and correction ====================

    #[test]
    fn test_initial_estimate_rounds_half_to_even() {
        // 3 slots over two equal segments: 1.5 and 1.5 both round to 2
        assert_eq!(initial_estimate(&[1.0, 1.0], 4), vec![2, 2]);
        // 5 slots: 1.25, 1.25, 2.5 -> 1, 1, 2
        assert_eq!(initial_estimate(&[1.0, 1.0, 2.0], 6), vec![1, 1, 2]);
        // 1 slot: 0.5 rounds down to 0
        assert_eq!(initial_estimate(&[1.0, 1.0], 2), vec![0, 0]);
    }

    #[test]
    fn test_surplus_is_removed_from_lowest_index_on_tie() {
        let allocation = allocate(&[1.0, 1.0], 4).unwrap();
        assert_eq!(allocation.initial, vec![2, 2]);
        assert_eq!(allocation.residual, -1);
        assert_eq!(allocation.partition, vec![1, 2]);
        assert_relative_eq!(allocation.score_trace[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_point_goes_to_sparsest_segment() {
        // Densities after rounding are [1, 1, 1]; only the long segment can take
        // a point without becoming denser than the others by a full unit.
        let allocation = allocate(&[1.0, 1.0, 2.0], 6).unwrap();
        assert_eq!(allocation.residual, 1);
        assert_eq!(allocation.partition, vec![1, 1, 3]);
    }

    #[test]
    fn test_smallest_budget_gives_one_point_each() {
        let allocation = allocate(&[1.0, 1.0], 3).unwrap();
        assert_eq!(allocation.initial, vec![1, 1]);
        assert_eq!(allocation.partition, vec![1, 1]);

        let allocation = allocate(&[1.0, 1.0], 2);
        assert!(matches!(allocation, Err(KPathError::InsufficientBudget { .. })));
    }

    #[test]
    fn test_decrease_never_goes_negative() {
        let mut partition = vec![0, 3];
        let (index, _) = correction_step(&mut partition, &[1.0, 1.0], Direction::Decrease).unwrap();
        assert_eq!(index, 1);
        assert_eq!(partition, vec![0, 2]);
    }

    #[test]
    fn test_no_valid_candidate_is_insufficient_budget() {
        let mut partition = vec![0, 0];
        let result = correction_step(&mut partition, &[1.0, 2.0], Direction::Decrease);
        assert_eq!(
            result,
            Err(KPathError::InsufficientBudget {
                total_points: 1,
                segments: 2
            })
        );
        assert_eq!(partition, vec![0, 0]);
    }

    #[test]
    fn test_uniformity_score_is_population_std() {
        // densities [2, 1, 1]: mean 4/3, variance 2/9
        let score = uniformity_score(&[2, 1, 1], &[1.0, 1.0, 1.0]);
        assert_relative_eq!(score, (2.0_f64 / 9.0).sqrt(), epsilon = 1e-12);

        assert_eq!(uniformity_score(&[2, 4], &[1.0, 2.0]), 0.0);
        assert_eq!(density_vector(&[3, 3], &[1.0, 2.0]), vec![3.0, 1.5]);
    }

    // ==================== Properties ====================

    #[test]
    fn test_partition_conserves_budget() {
        for lengths in length_sets() {
            for total_points in (lengths.len() + 1)..(lengths.len() + 60) {
                let allocation = allocate(&lengths, total_points).unwrap();
                assert_eq!(
                    allocation.partition.iter().sum::<usize>(),
                    total_points - 1,
                    "lengths {:?}, total {}",
                    lengths,
                    total_points
                );
                assert_eq!(allocation.partition.len(), lengths.len());
                assert_eq!(allocation.score_trace.len(), allocation.corrections());
            }
        }
    }

    #[test]
    fn test_each_correction_picks_the_most_uniform_candidate() {
        for lengths in length_sets() {
            for total_points in (lengths.len() + 1)..(lengths.len() + 40) {
                let allocation = allocate(&lengths, total_points).unwrap();
                let direction = if allocation.residual > 0 {
                    Direction::Increase
                } else {
                    Direction::Decrease
                };

                let mut partition = allocation.initial.clone();
                for expected in &allocation.score_trace {
                    let mut best = f64::INFINITY;
                    for j in 0..partition.len() {
                        let mut candidate = partition.clone();
                        match direction {
                            Direction::Increase => candidate[j] += 1,
                            Direction::Decrease if candidate[j] == 0 => continue,
                            Direction::Decrease => candidate[j] -= 1,
                        }
                        best = best.min(uniformity_score(&candidate, &lengths));
                    }

                    let (_, score) = correction_step(&mut partition, &lengths, direction).unwrap();
                    assert_eq!(score, *expected);
                    assert!(score <= best + 1e-9, "{} > {}", score, best);
                }
                assert_eq!(partition, allocation.partition);
            }
        }
    }

    #[test]
    fn test_allocation_is_deterministic() {
        for lengths in length_sets() {
            let first = allocate(&lengths, 37).unwrap();
            let second = allocate(&lengths, 37).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_short_segments_can_receive_no_points() {
        let allocation = allocate(&[1e-3, 1e3], 3).unwrap();
        assert_eq!(allocation.partition, vec![0, 2]);
    }

    #[test]
    fn test_budget_beyond_exact_range_is_rejected() {
        assert_eq!(
            allocate(&[1.0, 1.0], usize::MAX),
            Err(KPathError::BudgetTooLarge {
                total_points: usize::MAX,
                limit: MAX_TOTAL_POINTS,
            })
        );
        assert_eq!(
            check_budget(MAX_TOTAL_POINTS + 1, 2),
            Err(KPathError::BudgetTooLarge {
                total_points: MAX_TOTAL_POINTS + 1,
                limit: MAX_TOTAL_POINTS,
            })
        );
    }

    #[test]
    fn test_largest_budget_is_apportioned_exactly() {
        let allocation = allocate(&[1.0, 1.0], MAX_TOTAL_POINTS).unwrap();
        assert_eq!(allocation.total_points(), MAX_TOTAL_POINTS);
        assert_eq!(allocation.corrections(), 1);
    }
}
