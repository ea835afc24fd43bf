use classic_algorithms::searching::binary_search::binary_search;
use classic_algorithms::searching::binary_search_on_answer::binary_search_on_answer;
use classic_algorithms::searching::exponential_search::exponential_search;
use classic_algorithms::searching::fibonacci_search::fibonacci_search;
use classic_algorithms::searching::hash_search::hash_search;
use classic_algorithms::searching::interpolation_search::interpolation_search;
use classic_algorithms::searching::jump_search::jump_search;
use classic_algorithms::searching::linear_search::linear_search;
use classic_algorithms::searching::sentinel_search::sentinel_search;
use classic_algorithms::searching::ternary_search::ternary_search;

const SORTED: [i64; 11] = [10, 22, 35, 40, 45, 50, 80, 82, 85, 90, 100];

#[test]
fn linear_search_finds_first_match() {
    assert_eq!(linear_search(&[3, 1, 4, 1, 5], &1), Some(1));
    assert_eq!(linear_search(&[3, 1, 4], &9), None);
    assert_eq!(linear_search::<i32>(&[], &1), None);
}

#[test]
fn sentinel_search_restores_the_array() {
    let mut arr = [10, 20, 35, 40, 50];
    assert_eq!(sentinel_search(&mut arr, &35), Some(2));
    assert_eq!(arr, [10, 20, 35, 40, 50], "sentinel slot restored");

    assert_eq!(sentinel_search(&mut arr, &99), None);
    assert_eq!(arr, [10, 20, 35, 40, 50]);
}

#[test]
fn sentinel_search_edges() {
    let mut one = [5];
    assert_eq!(sentinel_search(&mut one, &5), Some(0));
    assert_eq!(sentinel_search(&mut one, &6), None);

    let mut empty: [i32; 0] = [];
    assert_eq!(sentinel_search(&mut empty, &1), None);

    let mut arr = [1, 2, 3];
    assert_eq!(sentinel_search(&mut arr, &3), Some(2), "match in the sentinel slot itself");
}

#[test]
fn binary_search_over_sorted_input() {
    for (i, value) in SORTED.iter().enumerate() {
        assert_eq!(binary_search(&SORTED, value), Some(i));
    }
    assert_eq!(binary_search(&SORTED, &41), None);
    assert_eq!(binary_search(&SORTED, &5), None);
    assert_eq!(binary_search(&SORTED, &999), None);
    assert_eq!(binary_search::<i64>(&[], &1), None);
}

#[test]
fn exponential_search_matches_binary_search() {
    for (i, value) in SORTED.iter().enumerate() {
        assert_eq!(exponential_search(&SORTED, value), Some(i));
    }
    assert_eq!(exponential_search(&SORTED, &41), None);
    assert_eq!(exponential_search(&SORTED, &5), None);
    assert_eq!(exponential_search::<i64>(&[], &1), None);
}

#[test]
fn fibonacci_search_over_sorted_input() {
    for (i, value) in SORTED.iter().enumerate() {
        assert_eq!(fibonacci_search(&SORTED, value), Some(i));
    }
    assert_eq!(fibonacci_search(&SORTED, &83), None);
    assert_eq!(fibonacci_search(&[5], &5), Some(0));
    assert_eq!(fibonacci_search(&[5], &7), None);
    assert_eq!(fibonacci_search::<i64>(&[], &1), None);
}

#[test]
fn jump_search_over_sorted_input() {
    for (i, value) in SORTED.iter().enumerate() {
        assert_eq!(jump_search(&SORTED, value), Some(i));
    }
    assert_eq!(jump_search(&SORTED, &60), None);
    assert_eq!(jump_search(&SORTED, &1), None);
    assert_eq!(jump_search(&SORTED, &200), None);
    assert_eq!(jump_search::<i64>(&[], &1), None);
}

#[test]
fn ternary_search_over_sorted_input() {
    for (i, value) in SORTED.iter().enumerate() {
        assert_eq!(ternary_search(&SORTED, value), Some(i));
    }
    assert_eq!(ternary_search(&SORTED, &60), None);
    assert_eq!(ternary_search::<i64>(&[], &1), None);
}

#[test]
fn interpolation_search_over_uniform_keys() {
    for (i, &value) in SORTED.iter().enumerate() {
        assert_eq!(interpolation_search(&SORTED, value), Some(i));
    }
    assert_eq!(interpolation_search(&SORTED, 60), None);
    assert_eq!(interpolation_search(&SORTED, -4), None);
    assert_eq!(interpolation_search(&[], 1), None);
    assert_eq!(interpolation_search(&[7, 7, 7], 7), Some(0), "flat range short-circuits");
}

#[test]
fn hash_search_returns_first_occurrence() {
    assert_eq!(hash_search(&["x", "y", "x"], &"x"), Some(0));
    assert_eq!(hash_search(&["x", "y", "x"], &"z"), None);
    assert_eq!(hash_search::<&str>(&[], &"x"), None);
}

#[test]
fn binary_search_on_answer_finds_smallest_feasible() {
    // Smallest x in [1, 100] with x^2 >= 12.
    assert_eq!(binary_search_on_answer(1, 100, |x| x * x >= 12), Some(4));
    assert_eq!(binary_search_on_answer(1, 100, |_| true), Some(1));
    assert_eq!(binary_search_on_answer(1, 100, |_| false), None);
    assert_eq!(binary_search_on_answer(0, 10, |_| true), Some(0));
}
