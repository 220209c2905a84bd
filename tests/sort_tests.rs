use dirseek::prelude::*;
use dirseek::sort::{bubble_sort, quick_sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_directory(rng: &mut StdRng, count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let len = rng.random_range(0..6);
            let name: String = (0..len)
                .map(|_| rng.random_range(b'A'..=b'F') as char)
                .collect();
            Entry::parse(format!("{i} {name}"))
        })
        .collect()
}

fn assert_sorted_permutation(sorted: &[Entry], original: &[Entry]) {
    for pair in sorted.windows(2) {
        assert!(
            pair[0].key() <= pair[1].key(),
            "out of order: {:?} > {:?}",
            pair[0].key(),
            pair[1].key()
        );
    }
    assert_same_entries(sorted, original);
}

fn assert_same_entries(actual: &[Entry], original: &[Entry]) {
    let mut a: Vec<&str> = actual.iter().map(Entry::raw).collect();
    let mut b: Vec<&str> = original.iter().map(Entry::raw).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation of the input");
}

#[test]
fn test_basic_sort_entries() {
    for kind in SortKind::ALL {
        let mut dir: Vec<Entry> = ["1 Alice", "2 Charlie", "3 Bob"]
            .into_iter()
            .map(Entry::parse)
            .collect();

        let status = kind.sort(&mut dir, &Deadline::unbounded());
        assert_eq!(status, SortStatus::Completed, "{kind}");

        // Entries move whole: Bob keeps number 3.
        let raws: Vec<&str> = dir.iter().map(Entry::raw).collect();
        assert_eq!(raws, vec!["1 Alice", "3 Bob", "2 Charlie"], "{kind}");
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let count = rng.random_range(0..60);
        let original = random_directory(&mut rng, count);

        for kind in SortKind::ALL {
            let mut dir = original.clone();
            assert_eq!(kind.sort(&mut dir, &Deadline::unbounded()), SortStatus::Completed);
            assert_sorted_permutation(&dir, &original);
        }
    }
}

#[test]
fn test_edge_cases() {
    for kind in SortKind::ALL {
        // Empty and single.
        let mut empty: Vec<Entry> = vec![];
        assert_eq!(kind.sort(&mut empty, &Deadline::unbounded()), SortStatus::Completed);
        let mut one = vec![Entry::parse("1 Solo")];
        assert_eq!(kind.sort(&mut one, &Deadline::unbounded()), SortStatus::Completed);
        assert_eq!(one[0].raw(), "1 Solo");

        // All same key.
        let same: Vec<Entry> = (0..50).map(|i| Entry::parse(format!("{i} Sam"))).collect();
        let mut dir = same.clone();
        kind.sort(&mut dir, &Deadline::unbounded());
        assert_sorted_permutation(&dir, &same);

        // Reversed.
        let reversed: Vec<Entry> = (0..50)
            .rev()
            .map(|i| Entry::parse(format!("{i} n{i:03}")))
            .collect();
        let mut dir = reversed.clone();
        kind.sort(&mut dir, &Deadline::unbounded());
        assert_sorted_permutation(&dir, &reversed);
        assert_eq!(dir[0].key(), "n000");
        assert_eq!(dir[49].key(), "n049");
    }
}

#[test]
fn test_sorting_sorted_input() {
    let sorted: Vec<Entry> = (0..200)
        .map(|i| Entry::parse(format!("{i} k{i:04}")))
        .collect();

    let mut dir = sorted.clone();
    bubble_sort(&mut dir, &Deadline::unbounded());
    assert_eq!(dir, sorted);

    let mut dir = sorted.clone();
    quick_sort(&mut dir, &Deadline::unbounded());
    assert_eq!(dir, sorted);

    // Equal keys may be reordered by quicksort but stay ordered.
    let dup_sorted: Vec<Entry> = (0..100)
        .map(|i| Entry::parse(format!("{i} k{:02}", i / 10)))
        .collect();
    let mut dir = dup_sorted.clone();
    bubble_sort(&mut dir, &Deadline::unbounded());
    assert_eq!(dir, dup_sorted);
    let mut dir = dup_sorted.clone();
    quick_sort(&mut dir, &Deadline::unbounded());
    assert_sorted_permutation(&dir, &dup_sorted);
}

#[test]
fn test_quick_sort_large_sorted_input() {
    // Last-element pivot on sorted input is the worst case for recursion depth.
    let sorted: Vec<String> = (0..4_000).map(|i| format!("{i:08}")).collect();
    let mut data = sorted.clone();
    assert_eq!(quick_sort(&mut data, &Deadline::unbounded()), SortStatus::Completed);
    assert_eq!(data, sorted);
}

#[test]
fn test_zero_budget_aborts() {
    let mut rng = StdRng::seed_from_u64(5);
    let budget = TimeBudget::fixed(Duration::ZERO);

    for count in [2, 3, 10, 500] {
        let original = random_directory(&mut rng, count);
        for kind in SortKind::ALL {
            let mut dir = original.clone();
            assert_eq!(kind.sort(&mut dir, &budget.start()), SortStatus::Aborted, "{kind} n={count}");
            assert_same_entries(&dir, &original);
        }
    }
}

#[test]
fn test_zero_budget_trivial_inputs_complete() {
    let budget = TimeBudget::fixed(Duration::ZERO);
    for kind in SortKind::ALL {
        let mut one = vec![Entry::parse("1 Solo")];
        assert_eq!(kind.sort(&mut one, &budget.start()), SortStatus::Completed);
    }
}

#[test]
fn test_abort_mid_sort_keeps_permutation() {
    let mut rng = StdRng::seed_from_u64(9);
    let original = random_directory(&mut rng, 3_000);
    let budget = TimeBudget::fixed(Duration::from_micros(200));

    for kind in SortKind::ALL {
        let mut dir = original.clone();
        let status = kind.sort(&mut dir, &budget.start());
        if status.is_completed() {
            assert_sorted_permutation(&dir, &original);
        } else {
            assert_same_entries(&dir, &original);
        }
    }
}

#[test]
fn test_sort_kind_names() {
    assert_eq!("bubble".parse::<SortKind>().unwrap(), SortKind::Bubble);
    assert_eq!("quick".parse::<SortKind>().unwrap(), SortKind::Quick);
    assert_eq!(SortKind::Quick.to_string(), "quick");

    let err = "merge".parse::<SortKind>().unwrap_err();
    assert!(matches!(err, dirseek::Error::UnknownSort(name) if name == "merge"));
}
