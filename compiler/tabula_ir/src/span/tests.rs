use super::*;

#[test]
fn point_covers_no_bytes() {
    let span = Span::point(7);
    assert_eq!(span, Span::new(7, 7));
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn try_from_range_rejects_oversized_bounds() {
    let too_large = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_large..too_large + 1),
        Err(SpanError::StartTooLarge(too_large))
    );
    assert_eq!(
        Span::try_from_range(0..too_large),
        Err(SpanError::EndTooLarge(too_large))
    );
    assert_eq!(Span::try_from_range(3..5), Ok(Span::new(3, 5)));
}

#[test]
fn debug_and_display_agree() {
    let span = Span::new(1, 3);
    assert_eq!(format!("{span}"), "1..3");
    assert_eq!(format!("{span:?}"), "1..3");
}
