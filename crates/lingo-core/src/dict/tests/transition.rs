use crate::dict::transition::{char_code, NUM_CODES, OTHER_CODE};
use crate::dict::{build_matrix, TransitionMatrix};

#[test]
fn char_code_caps_at_other_bucket() {
    assert_eq!(char_code('a'), 97);
    assert_eq!(char_code('é'), 0xE9);
    assert_eq!(char_code('ÿ'), 255);
    assert_eq!(char_code('Ā'), OTHER_CODE);
    assert_eq!(char_code('漢'), OTHER_CODE);
}

#[test]
fn counts_adjacent_pairs_and_normalizes() {
    // ab, bc, ab -> 3 transitions
    let m = build_matrix(&["abc", "ab"]);
    assert_eq!(m.total_transitions(), 3);
    assert!((m.transition('a', 'b') - 2.0 / 3.0).abs() < 1e-12);
    assert!((m.transition('b', 'c') - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(m.transition('c', 'a'), 0.0);
    assert!((m.sum() - 1.0).abs() < 1e-9);
}

#[test]
fn pairs_do_not_cross_word_boundaries() {
    let m = build_matrix(&["ab", "cd"]);
    assert_eq!(m.transition('b', 'c'), 0.0);
    assert_eq!(m.total_transitions(), 2);
}

#[test]
fn short_words_give_zero_matrix() {
    let m = build_matrix(&["a", "b", "", "é"]);
    assert_eq!(m.total_transitions(), 0);
    assert!(m.is_zero());
    assert!(m.sum().is_finite());
}

#[test]
fn empty_list_gives_zero_matrix() {
    let m = TransitionMatrix::from_words::<&str>(&[]);
    assert!(m.is_zero());
    assert_eq!(m.sum(), 0.0);
}

#[test]
fn non_latin1_chars_share_one_bucket() {
    let m = build_matrix(&["aж", "aщ"]);
    assert!((m.get(97, OTHER_CODE) - 1.0).abs() < 1e-12);
    assert_eq!(m.transition('a', 'ж'), m.transition('a', 'щ'));
}

#[test]
fn out_of_range_codes_clamp() {
    let m = build_matrix(&["aж"]);
    assert_eq!(m.get(97, 9999), m.get(97, OTHER_CODE));
}

#[test]
fn default_is_zeroed() {
    let m = TransitionMatrix::default();
    assert!(m.is_zero());
    assert_eq!(m.get(NUM_CODES as u16 - 1, 0), 0.0);
}
