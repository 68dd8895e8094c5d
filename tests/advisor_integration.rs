//! End-to-end properties of the fixed tip model.

use fuzzy_tip::advisor::{Quality, TipAdvisor, RULE_TABLE};
use fuzzy_tip::FuzzyError;

fn advisor() -> TipAdvisor {
    TipAdvisor::new().expect("the fixed configuration builds")
}

#[test]
fn output_stays_in_range_over_the_full_grid() {
    let advisor = advisor();
    for i in 0..=20 {
        for j in 0..=20 {
            let service = i as f64 * 0.5;
            let food = j as f64 * 0.5;
            let tip = advisor.evaluate(service, food).unwrap();
            assert!(
                (0.0..=25.0).contains(&tip),
                "evaluate({service}, {food}) = {tip} out of range"
            );
        }
    }
}

#[test]
fn extreme_inputs_map_to_the_extreme_bands() {
    let advisor = advisor();
    let worst = advisor.evaluate(0.0, 0.0).unwrap();
    let best = advisor.evaluate(10.0, 10.0).unwrap();

    assert!(best >= worst);
    // Centroid smoothing keeps both extremes away from the universe edges.
    assert!(
        (3.8..=4.9).contains(&worst),
        "low extreme {worst} outside the expected band"
    );
    assert!(
        (20.0..=22.0).contains(&best),
        "high extreme {best} outside the expected band"
    );
}

#[test]
fn concrete_scenarios_match_the_reference_outputs() {
    let advisor = advisor();
    // Reference values computed for the fixed control points with the
    // 26-sample output universe and centroid defuzzification.
    let scenarios = [
        (6.5, 6.0, 12.89),
        (10.0, 10.0, 21.00),
        (2.0, 8.0, 11.64),
        (9.0, 4.0, 12.40),
        (1.0, 1.0, 8.18),
        (7.5, 8.5, 14.05),
        (3.5, 5.5, 12.08),
        (0.0, 0.0, 4.33),
    ];
    for (service, food, expected) in scenarios {
        let tip = advisor.evaluate(service, food).unwrap();
        assert!(
            (tip - expected).abs() < 0.5,
            "evaluate({service}, {food}) = {tip}, expected about {expected}"
        );
    }
}

#[test]
fn mixed_scenarios_land_in_the_low_to_medium_band() {
    let advisor = advisor();
    let tip = advisor.evaluate(2.0, 8.0).unwrap();
    assert!((11.0..=14.0).contains(&tip), "got {tip}");
}

#[test]
fn rule_table_covers_every_combination_exactly_once() {
    for service in Quality::ALL {
        for food in Quality::ALL {
            let hits = RULE_TABLE
                .iter()
                .filter(|&&(s, f, _)| s == service && f == food)
                .count();
            assert_eq!(
                hits,
                1,
                "({}, {}) appears {} times in the rule table",
                service.label(),
                food.label(),
                hits
            );
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let advisor = advisor();
    let first = advisor.evaluate(6.5, 6.0).unwrap();
    for _ in 0..10 {
        let next = advisor.evaluate(6.5, 6.0).unwrap();
        assert_eq!(first.to_bits(), next.to_bits());
    }
}

#[test]
fn out_of_range_ratings_are_rejected() {
    let advisor = advisor();
    for (service, food) in [(-1.0, 5.0), (15.0, 5.0), (5.0, -0.01), (5.0, 10.01)] {
        let result = advisor.evaluate(service, food);
        assert!(
            matches!(result, Err(FuzzyError::OutOfRange { .. })),
            "evaluate({service}, {food}) should be rejected"
        );
    }
}

#[test]
fn a_shared_advisor_evaluates_from_many_threads() {
    let advisor = advisor();
    std::thread::scope(|scope| {
        for offset in 0..4 {
            let advisor = &advisor;
            scope.spawn(move || {
                for i in 0..=10 {
                    let service = i as f64;
                    let food = ((i + offset) % 11) as f64;
                    let tip = advisor.evaluate(service, food).unwrap();
                    assert!((0.0..=25.0).contains(&tip));
                }
            });
        }
    });
}
