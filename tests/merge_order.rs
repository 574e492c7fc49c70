//! Merge-order independence of the aggregated totals

use primesweep::stats::aggregator::{GlobalState, MergeStrategy, PrimeTotals};
use primesweep::stats::LocalResult;
use primesweep::worker::partition::partition;
use primesweep::worker::scan_range;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn local_results(start: i64, end: i64, workers: usize) -> Vec<LocalResult> {
    partition(start, end, workers)
        .unwrap()
        .into_iter()
        .map(scan_range)
        .collect()
}

fn merge_all(results: &[LocalResult], strategy: MergeStrategy) -> PrimeTotals {
    let global = GlobalState::new(strategy);
    for result in results {
        global.merge(result);
    }
    global.finalize()
}

#[test]
fn test_any_order_gives_same_totals() {
    let results = local_results(2, 30_000, 8);
    let baseline = merge_all(&results, MergeStrategy::Slotwise);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let mut shuffled = results.clone();
        shuffled.shuffle(&mut rng);

        let totals = merge_all(&shuffled, MergeStrategy::Slotwise);
        assert_eq!(totals.count, baseline.count);
        assert_eq!(totals.sum, baseline.sum);
        assert_eq!(totals.top[0], baseline.top[0]);
        // Slot-wise maximum is itself order-independent
        assert_eq!(totals.top, baseline.top);
    }
}

#[test]
fn test_exact_any_order_gives_true_top() {
    let results = local_results(2, 30_000, 8);
    let whole = scan_range(primesweep::Range::new(2, 30_000));

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let mut shuffled = results.clone();
        shuffled.shuffle(&mut rng);

        let totals = merge_all(&shuffled, MergeStrategy::Exact);
        assert_eq!(totals.count, whole.count);
        assert_eq!(totals.sum, whole.sum);
        assert_eq!(totals.top, whole.top);
    }
}

#[test]
fn test_concurrent_merges_match_sequential() {
    let results = local_results(2, 50_000, 16);
    let sequential = merge_all(&results, MergeStrategy::Slotwise);

    for _ in 0..10 {
        let global = GlobalState::new(MergeStrategy::Slotwise);
        std::thread::scope(|s| {
            for result in &results {
                let global = &global;
                s.spawn(move || global.merge(result));
            }
        });

        let totals = global.finalize();
        assert_eq!(totals.count, sequential.count);
        assert_eq!(totals.sum, sequential.sum);
        assert_eq!(totals.top, sequential.top);
        assert_eq!(totals.merges, 16);
    }
}

#[test]
fn test_sum_and_count_match_single_scan() {
    let whole = scan_range(primesweep::Range::new(2, 30_000));
    for workers in [1, 2, 7, 8, 64] {
        let totals = merge_all(&local_results(2, 30_000, workers), MergeStrategy::Slotwise);
        assert_eq!(totals.count, whole.count, "workers = {}", workers);
        assert_eq!(totals.sum, whole.sum, "workers = {}", workers);
        assert_eq!(totals.top[0], whole.top[0], "workers = {}", workers);
    }
}
