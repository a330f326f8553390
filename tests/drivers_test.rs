// Integration tests for the sorting drivers

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::algorithms::Algorithm;
use sortty::dataset::Dataset;
use sortty::frame::Trace;
use sortty::tracker::SortedRegion;

/// Run `algorithm` over `input` with a zero-delay trace
fn run(algorithm: Algorithm, input: &[u32]) -> (Vec<u32>, SortedRegion, Trace) {
    let mut values = input.to_vec();
    let mut sorted = SortedRegion::new();
    let mut trace = Trace::default();
    let frames = algorithm.run(&mut values, &mut sorted, &mut trace);
    assert_eq!(frames, trace.frames.len(), "{algorithm}: frame count mismatch");
    (values, sorted, trace)
}

fn inputs() -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut cases = vec![
        vec![],
        vec![42],
        vec![7, 7, 7, 7, 7],
        (0..16).collect(),
        (0..16).rev().collect(),
        vec![5, 3, 8, 1],
        vec![1, 0],
    ];
    for len in [10, 33, 64, 101] {
        cases.push((0..len).map(|_| rng.random_range(0..500)).collect());
    }
    // heavy duplicates
    cases.push((0..50).map(|_| rng.random_range(0..4)).collect());
    cases
}

#[test]
fn test_every_driver_sorts_every_input() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let (values, sorted, _) = run(algorithm, &input);
            let result = Dataset::from(values);

            assert!(result.is_sorted(), "{algorithm} left {input:?} unsorted");
            assert!(
                result.is_permutation_of(&input),
                "{algorithm} changed the magnitudes of {input:?}"
            );
            assert!(
                sorted.is_complete(input.len()),
                "{algorithm} did not mark all of {input:?} sorted"
            );
        }
    }
}

#[test]
fn test_every_frame_is_a_permutation_with_valid_highlight() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let (_, _, trace) = run(algorithm, &input);
            for frame in &trace.frames {
                assert!(Dataset::from(frame.values.clone()).is_permutation_of(&input));
                assert!(!frame.active.is_empty() && frame.active.len() <= 2);
                assert!(frame.active.iter().all(|&i| i < input.len()));
            }
        }
    }
}

#[test]
fn test_sorted_region_never_shrinks() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            let (_, _, trace) = run(algorithm, &input);
            let mut previous: Vec<usize> = Vec::new();
            for frame in trace.frames.iter().chain(trace.settled.iter()) {
                assert!(
                    previous.iter().all(|i| frame.sorted.contains(i)),
                    "{algorithm} dropped a sorted index"
                );
                previous = frame.sorted.clone();
            }
        }
    }
}

#[test]
fn test_sorted_region_full_only_at_completion() {
    let input: Vec<u32> = vec![9, 4, 7, 1, 8, 2, 6, 3, 5, 0];
    for algorithm in Algorithm::ALL {
        let (_, _, trace) = run(algorithm, &input);
        let n = input.len();
        // the last frame may complete the region; none before it can
        let (last, earlier) = trace.frames.split_last().expect("frames");
        assert!(earlier.iter().all(|f| f.sorted.len() < n), "{algorithm}");

        let final_sorted = trace.settled.as_ref().unwrap_or(last);
        assert_eq!(final_sorted.sorted, (0..n).collect::<Vec<_>>(), "{algorithm}");
    }
}

#[test]
fn test_bubble_frame_count_is_n_choose_2() {
    for n in [2u32, 5, 9, 20] {
        let descending: Vec<u32> = (0..n).rev().collect();
        let (_, _, trace) = run(Algorithm::Bubble, &descending);
        let n = n as usize;
        assert_eq!(trace.frames.len(), n * (n - 1) / 2);
    }

    // independent of the data
    let (_, _, trace) = run(Algorithm::Bubble, &[1, 2, 3, 4, 5]);
    assert_eq!(trace.frames.len(), 10);
}

#[test]
fn test_selection_and_insertion_frame_counts() {
    let ascending: Vec<u32> = (0..8).collect();
    let descending: Vec<u32> = (0..8).rev().collect();
    let mixed: Vec<u32> = vec![4, 7, 0, 3, 6, 1, 5, 2];
    for input in [&ascending, &descending, &mixed] {
        let (_, _, trace) = run(Algorithm::Selection, input);
        assert_eq!(trace.frames.len(), 8 * 7 / 2, "{input:?}");
    }

    let (_, _, trace) = run(Algorithm::Insertion, &ascending);
    assert!(trace.frames.is_empty());

    // one frame per inversion
    let (_, _, trace) = run(Algorithm::Insertion, &descending);
    assert_eq!(trace.frames.len(), 8 * 7 / 2);
}

#[test]
fn test_rerun_on_sorted_data_swaps_nothing() {
    let input: Vec<u32> = vec![31, 4, 15, 9, 26, 5, 35, 8, 9, 7];
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ] {
        let (first, _, _) = run(algorithm, &input);
        let (second, _, trace) = run(algorithm, &first);

        assert_eq!(second, first, "{algorithm}");
        assert_eq!(trace.mutating_frames(), 0, "{algorithm} swapped sorted data");
    }

    // heap sort reorders while building the heap but lands on the same result
    let (first, _, _) = run(Algorithm::Heap, &input);
    let (second, _, _) = run(Algorithm::Heap, &first);
    assert_eq!(second, first);
}

#[test]
fn test_bubble_scenario() {
    let (values, sorted, _) = run(Algorithm::Bubble, &[5, 3, 8, 1]);
    assert_eq!(values, vec![1, 3, 5, 8]);
    assert_eq!(sorted.to_sorted_vec(), vec![0, 1, 2, 3]);
}

#[test]
fn test_empty_dataset_emits_nothing() {
    for algorithm in Algorithm::ALL {
        let (values, sorted, trace) = run(algorithm, &[]);
        assert!(values.is_empty());
        assert!(sorted.is_empty());
        assert!(trace.frames.is_empty());
        assert!(trace.settled.is_none());
    }
}

#[test]
fn test_singleton_dataset_emits_no_frames() {
    for algorithm in Algorithm::ALL {
        let (values, sorted, trace) = run(algorithm, &[42]);
        assert_eq!(values, vec![42]);
        assert_eq!(sorted.to_sorted_vec(), vec![0]);
        assert!(trace.frames.is_empty(), "{algorithm}");
        let settled = trace.settled.expect("sorted mark is still published");
        assert_eq!(settled.sorted, vec![0]);
    }
}

#[test]
fn test_merge_scenario_shows_inner_merges_first() {
    let (values, _, trace) = run(Algorithm::Merge, &[9, 1, 7, 3]);
    let states: Vec<Vec<u32>> = trace.frames.iter().map(|f| f.values.clone()).collect();

    assert_eq!(
        states,
        vec![
            vec![1, 9, 7, 3], // [9] + [1]
            vec![1, 9, 3, 7], // [7] + [3]
            vec![1, 9, 3, 7], // 1 vs 3
            vec![1, 3, 9, 7], // 9 vs 3
            vec![1, 3, 7, 9], // 9 vs 7
        ]
    );
    assert_eq!(trace.frames[0].active, vec![0, 1]);
    assert_eq!(trace.frames[1].active, vec![2, 3]);
    assert_eq!(trace.frames[2].active, vec![0, 2]);
    assert_eq!(values, vec![1, 3, 7, 9]);
}
