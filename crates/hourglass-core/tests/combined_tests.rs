use hourglass_core::classify;

fn canonical(input: &str) -> String {
    classify(input).unwrap_or_else(|| panic!("expected '{input}' to classify"))
}

fn rejected(input: &str) {
    assert!(
        classify(input).is_none(),
        "expected '{input}' to be rejected, got {:?}",
        classify(input)
    );
}

// ============================================================================
// Calendar date + time, with connectors
// ============================================================================

#[test]
fn long_date_at_time() {
    assert_eq!(
        canonical("January 1, 2019 at 2 pm"),
        "until 2 pm on 1 January 2019"
    );
}

#[test]
fn time_on_long_date() {
    assert_eq!(
        canonical("2 pm on January 1, 2019"),
        "until 2 pm on 1 January 2019"
    );
}

#[test]
fn numeric_date_at_time() {
    assert_eq!(canonical("01/01/2019 at 2 pm"), "until 2 pm on 1 January 2019");
}

#[test]
fn time_on_numeric_date() {
    assert_eq!(canonical("2 pm on 01/01/2019"), "until 2 pm on 1 January 2019");
}

// ============================================================================
// Calendar date + time, plain adjacency
// ============================================================================

#[test]
fn long_date_then_time() {
    assert_eq!(canonical("January 1, 2019 2 pm"), "until 2 pm on 1 January 2019");
}

#[test]
fn time_then_long_date() {
    assert_eq!(canonical("2 pm January 1, 2019"), "until 2 pm on 1 January 2019");
}

#[test]
fn numeric_date_then_time() {
    assert_eq!(canonical("01/01/2019 2 pm"), "until 2 pm on 1 January 2019");
}

#[test]
fn time_then_numeric_date() {
    assert_eq!(canonical("2 pm 01/01/2019"), "until 2 pm on 1 January 2019");
}

#[test]
fn compact_date_with_time() {
    assert_eq!(canonical("Jan1 at 2:30 pm"), "until 2:30 pm on 1 January");
}

// ============================================================================
// Weekday + time
// ============================================================================

#[test]
fn weekday_at_time() {
    assert_eq!(canonical("Wednesday at 2 pm"), "until 2 pm on Wednesday");
}

#[test]
fn time_on_weekday() {
    assert_eq!(canonical("2 pm on Wednesday"), "until 2 pm on Wednesday");
}

#[test]
fn weekday_adjacency() {
    assert_eq!(canonical("Wednesday 2 pm"), "until 2 pm on Wednesday");
    assert_eq!(canonical("2 pm Wednesday"), "until 2 pm on Wednesday");
}

#[test]
fn weekday_prefix_expands_on_the_date_side() {
    assert_eq!(canonical("Wed at 2 pm"), "until 2 pm on Wednesday");
}

#[test]
fn weekday_with_twenty_four_hour_time() {
    assert_eq!(canonical("Wednesday at 14:10"), "until 14:10 on Wednesday");
}

// ============================================================================
// tomorrow + time — no "on" connector in the output
// ============================================================================

#[test]
fn tomorrow_at_time() {
    assert_eq!(canonical("tomorrow at 2 pm"), "until 2 pm tomorrow");
}

#[test]
fn time_tomorrow() {
    assert_eq!(canonical("2 pm tomorrow"), "until 2 pm tomorrow");
    assert_eq!(canonical("tomorrow 2 pm"), "until 2 pm tomorrow");
}

// ============================================================================
// Non-splits — phrases that must not be torn apart
// ============================================================================

#[test]
fn plain_long_date_is_not_a_combined_phrase() {
    // "2019" must not be misread as a 20:19 clock time on a split.
    assert_eq!(canonical("January 1, 2019"), "1 January 2019");
}

#[test]
fn unit_duration_is_not_a_combined_phrase() {
    assert_eq!(canonical("7 hours 30 minutes"), "7 hours 30 minutes");
}

#[test]
fn relative_weekday_is_not_a_combined_phrase() {
    assert_eq!(canonical("Wednesday next week"), "Wednesday next week");
}

#[test]
fn date_with_no_time_side_does_not_combine() {
    rejected("January 1 pizza");
}

#[test]
fn time_with_no_date_side_does_not_combine() {
    rejected("2 pm pizza");
}

#[test]
fn undelimited_hhmm_is_not_a_combined_time_side() {
    // The time side takes the narrow clock shape, so an HHMM run needs a
    // separator or am/pm to combine with a date.
    rejected("Wednesday at 1410");
    assert_eq!(canonical("Wednesday at 210pm"), "until 2:10 pm on Wednesday");
}
