// Integration tests for the run lifecycle: generate, start, playback, complete

use sortty::algorithms::Algorithm;
use sortty::config::SortConfig;
use sortty::controller::{Controller, RunState};
use sortty::error::ControlError;
use sortty::frame::Trace;
use sortty::tracker::SortedRegion;

fn config(algorithm: Algorithm, count: usize) -> SortConfig {
    SortConfig {
        algorithm,
        element_count: count,
        seed: Some(5),
        ..SortConfig::default()
    }
}

#[test]
fn test_playback_matches_direct_run() {
    for algorithm in Algorithm::ALL {
        let mut controller = Controller::new(&config(algorithm, 30)).unwrap();
        let input = controller.values().to_vec();

        let mut values = input.clone();
        let mut sorted = SortedRegion::new();
        let mut trace = Trace::default();
        algorithm.run(&mut values, &mut sorted, &mut trace);

        let summary = controller.start().unwrap();
        assert_eq!(summary.frames, trace.frames.len());
        assert_eq!(summary.elements, 30);

        // every frame is observable, the last one included
        for (i, live) in trace.frames.iter().enumerate() {
            assert_eq!(controller.advance(), Ok(true), "{algorithm} frame {i}");
            assert_eq!(controller.values(), live.values.as_slice());
            assert_eq!(controller.active(), live.active.as_slice());
            assert_eq!(controller.sorted().to_sorted_vec(), live.sorted);
        }

        // the trailing marks land on one more tick
        assert_eq!(controller.advance(), Ok(false));
        assert_eq!(controller.state(), RunState::Complete);
        assert!(controller.active().is_empty());
        assert_eq!(controller.values(), values.as_slice());
        assert!(controller.sorted().is_complete(30));
        assert!(controller.dataset().is_sorted());
    }
}

#[test]
fn test_state_machine() {
    let mut controller = Controller::new(&config(Algorithm::Insertion, 10)).unwrap();
    assert_eq!(controller.state(), RunState::Idle);
    assert_eq!(controller.progress(), None);

    controller.start().unwrap();
    assert_eq!(controller.state(), RunState::Running);
    assert_eq!(controller.progress().map(|(pos, _)| pos), Some(0));

    while controller.advance().unwrap() {
        assert_eq!(controller.state(), RunState::Running);
        assert!(!controller.sorted().is_complete(10));
    }
    assert_eq!(controller.state(), RunState::Complete);
    assert_eq!(controller.advance(), Err(ControlError::NotRunning));

    // a finished dataset can be sorted again
    let summary = controller.start().unwrap();
    assert_eq!(summary.frames, 0);
    assert_eq!(controller.state(), RunState::Complete);
}

#[test]
fn test_sorted_region_never_shrinks_during_playback() {
    let mut controller = Controller::new(&config(Algorithm::Heap, 40)).unwrap();
    controller.start().unwrap();

    let mut previous = 0;
    loop {
        let more = controller.advance().unwrap();
        let current = controller.sorted().len();
        assert!(current >= previous);
        previous = current;
        if !more {
            break;
        }
    }
    assert_eq!(previous, 40);
}

#[test]
fn test_regenerate_blocked_until_run_ends() {
    let mut controller = Controller::new(&config(Algorithm::Quick, 50)).unwrap();
    let original = controller.values().to_vec();
    controller.start().unwrap();
    controller.advance().unwrap();

    assert_eq!(controller.generate(), Err(ControlError::RunInProgress));
    controller.finish().unwrap();

    let mut expected = original.clone();
    expected.sort_unstable();
    assert_eq!(controller.values(), expected.as_slice());

    controller.generate().unwrap();
    assert_eq!(controller.state(), RunState::Idle);
    assert!(controller.sorted().is_empty());
    assert!(controller.active().is_empty());
}

#[test]
fn test_tiny_datasets_complete_on_start() {
    for values in [vec![], vec![42]] {
        let len = values.len();
        let mut controller = Controller::with_dataset(values, Algorithm::Merge);
        let summary = controller.start().unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(controller.state(), RunState::Complete);
        assert!(controller.sorted().is_complete(len));
    }
}

#[test]
fn test_same_seed_same_dataset() {
    let a = Controller::new(&config(Algorithm::Bubble, 100)).unwrap();
    let b = Controller::new(&config(Algorithm::Bubble, 100)).unwrap();
    assert_eq!(a.values(), b.values());
}
