use evosearch::AlleleIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_index() -> AlleleIndex<&'static str> {
    let mut index = AlleleIndex::new();
    index.add("a", 0.10);
    index.add("b", 0.25);
    index.add("c", 0.25);
    index.add("d", 0.60);
    index.add("e", 0.90);
    index
}

#[test]
fn range_and_complement_partition_the_index() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut index = AlleleIndex::new();
        for item in 0..20 {
            index.add_uniform(item, &mut rng);
        }
        let (a, b) = (rng.gen::<f64>(), rng.gen::<f64>());
        let (start, stop) = if a <= b { (a, b) } else { (b, a) };

        let inside = index.range(start, stop);
        let outside = index.complement(start, stop);
        assert_eq!(inside.len() + outside.len(), index.len());

        let mut recombined: Vec<(i32, f64)> = inside
            .iter()
            .chain(outside.iter())
            .map(|(item, pos)| (*item, pos))
            .collect();
        let mut original: Vec<(i32, f64)> =
            index.iter().map(|(item, pos)| (*item, pos)).collect();
        recombined.sort_by(|x, y| x.partial_cmp(y).unwrap());
        original.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(recombined, original);
    }
}

#[test]
fn range_bounds_are_inclusive() {
    let index = sample_index();
    let picked: Vec<&str> = index.range(0.25, 0.60).items().copied().collect();
    assert_eq!(picked, vec!["b", "c", "d"]);
}

#[test]
fn complement_excludes_the_closed_range() {
    let index = sample_index();
    let picked: Vec<&str> = index.complement(0.25, 0.60).items().copied().collect();
    assert_eq!(picked, vec!["a", "e"]);
}

#[test]
fn empty_results_are_not_errors() {
    let index = sample_index();
    assert!(index.range(0.61, 0.89).is_empty());
    // inverted endpoints match nothing
    assert!(index.range(0.7, 0.3).is_empty());

    let empty = AlleleIndex::<&str>::new();
    assert!(empty.range(0.0, 1.0).is_empty());
    assert!(empty.complement(0.0, 1.0).is_empty());
}

#[test]
fn clone_is_an_independent_snapshot() {
    let original = sample_index();
    let mut copy = original.clone();

    copy.remove(0.0, 0.5);
    assert_eq!(copy.len(), 2);
    assert_eq!(original.len(), 5);

    // survivors keep their positions
    let survivors: Vec<f64> = copy.positions().collect();
    assert_eq!(survivors, vec![0.60, 0.90]);
}

#[test]
fn uniform_positions_stay_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut index = AlleleIndex::new();
    for item in 0..200 {
        index.add_uniform(item, &mut rng);
    }
    assert!(index.positions().all(|p| (0.0..1.0).contains(&p)));
}
