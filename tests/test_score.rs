use space_invaders::score::Score;

#[test]
fn new_score_is_zero() {
    assert_eq!(Score::new().value, 0);
}

#[test]
fn increase_and_set() {
    let mut s = Score::new();
    s.increase_score(1);
    s.increase_score(1);
    assert_eq!(s.value, 2);
    s.increase_score(5);
    assert_eq!(s.value, 7);
    s.set_score(0);
    assert_eq!(s.value, 0);
}

#[test]
fn negative_scores_are_representable() {
    let mut s = Score::new();
    s.set_score(-3);
    assert_eq!(s.value, -3);
    assert_eq!(s.to_string(), "Score: -3");
}

#[test]
fn label_format() {
    let mut s = Score::new();
    s.set_score(42);
    assert_eq!(s.to_string(), "Score: 42");
}
