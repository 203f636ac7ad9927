use super::*;

#[test]
fn next_frame_cycles_one_to_three() {
    assert_eq!(next_frame(1), 2);
    assert_eq!(next_frame(2), 3);
    assert_eq!(next_frame(3), 1);
}

#[test]
fn next_frame_recovers_from_out_of_range_values() {
    assert_eq!(next_frame(0), 1);
    assert!((1..=MAX_DOTS).contains(&next_frame(7)));
}
