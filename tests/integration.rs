use almanac::{DateRange, Error, MutableClock, Quarter, YearQuarter};
use chrono::{Duration, NaiveDate};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 7, d).unwrap()
}

/// A small universe of ranges: every bounded range over an eight-day
/// window (empties included), half-bounded ranges at each edge, and the
/// fully unbounded range.
fn universe() -> Vec<DateRange> {
    let mut ranges = vec![DateRange::ALL];
    for start in 1..=8 {
        for end in start..=8 {
            ranges.push(DateRange::new(day(start), day(end)).unwrap());
        }
        ranges.push(DateRange::unbounded_start(day(start)).unwrap());
        ranges.push(DateRange::unbounded_end(day(start)).unwrap());
    }
    ranges
}

#[test]
fn construction_round_trips_its_bounds() {
    for r in universe() {
        assert_eq!(DateRange::new(r.start(), r.end()).unwrap(), r);
    }
}

#[test]
fn connectivity_agrees_with_overlaps_and_abuts() {
    for a in universe() {
        for b in universe() {
            assert_eq!(
                a.is_connected(&b),
                a.overlaps(&b) || a.abuts(&b),
                "connectivity mismatch for {a} vs {b}"
            );
            assert_eq!(
                a.overlaps(&b),
                a.is_connected(&b) && !a.abuts(&b),
                "overlap mismatch for {a} vs {b}"
            );
        }
    }
}

#[test]
fn span_encloses_both_inputs() {
    for a in universe() {
        for b in universe() {
            let span = a.span(&b);
            // The lone exception to enclosure is an empty input anchored
            // exactly at the span's exclusive end, which the boundary
            // asymmetry of `encloses` places just outside.
            if !(a.is_empty() && a.start() == span.end()) {
                assert!(span.encloses(&a), "span {span} misses {a}");
            }
            if !(b.is_empty() && b.start() == span.end()) {
                assert!(span.encloses(&b), "span {span} misses {b}");
            }
        }
    }
}

#[test]
fn intersection_and_union_are_symmetric() {
    for a in universe() {
        for b in universe() {
            if a.is_connected(&b) {
                assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
                assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
            } else {
                assert!(a.intersection(&b).is_err());
                assert!(a.union(&b).is_err());
            }
        }
    }
}

#[test]
fn combinators_are_idempotent_across_the_universe() {
    for a in universe() {
        assert_eq!(a.intersection(&a).unwrap(), a);
        assert_eq!(a.union(&a).unwrap(), a);
        assert_eq!(a.span(&a), a);
    }
}

#[test]
fn before_and_after_are_dual_and_exclude_overlap() {
    for a in universe() {
        for b in universe() {
            assert_eq!(a.is_before(&b), b.is_after(&a));
            if a.overlaps(&b) {
                assert!(!a.is_before(&b) && !a.is_after(&b));
            }
        }
    }
}

#[test]
fn parse_is_the_inverse_of_format() {
    for r in universe() {
        assert_eq!(r.to_string().parse::<DateRange>().unwrap(), r);
    }
}

#[test]
fn bounded_range_scenario() {
    let r = DateRange::new(day(28), day(31)).unwrap();
    assert_eq!(r.length_in_days(), 3);
    assert_eq!(r.to_string(), "2012-07-28/2012-07-31");
    assert_eq!(r.end_inclusive(), day(30));
}

#[test]
fn empty_range_scenario() {
    let r = DateRange::new(day(30), day(30)).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.length_in_days(), 0);
}

#[test]
fn unbounded_start_scenario() {
    let r = DateRange::new(NaiveDate::MIN, day(31)).unwrap();
    assert!(r.is_unbounded_start());
    assert_eq!(r.length_in_days(), i32::MAX);
}

#[test]
fn intersection_scenario() {
    let a = DateRange::new(day(28), day(31)).unwrap();
    let b = DateRange::new(day(29), NaiveDate::from_ymd_opt(2012, 8, 1).unwrap()).unwrap();
    assert_eq!(
        a.intersection(&b).unwrap(),
        DateRange::new(day(29), day(31)).unwrap()
    );
}

#[test]
fn abutting_union_and_disconnected_intersection_scenario() {
    let a = DateRange::new(day(1), day(28)).unwrap();
    let abutting = DateRange::new(day(28), day(30)).unwrap();
    assert_eq!(
        a.union(&abutting).unwrap(),
        DateRange::new(day(1), day(30)).unwrap()
    );

    let separate = DateRange::new(day(29), day(30)).unwrap();
    assert!(matches!(
        a.intersection(&separate),
        Err(Error::NotConnected { .. })
    ));
}

#[test]
fn inverted_bounds_scenario() {
    assert!(matches!(
        DateRange::new(day(31), day(30)),
        Err(Error::InvalidRange { .. })
    ));
}

#[test]
fn every_date_of_a_range_lands_in_its_year_quarter() {
    let r = DateRange::new(
        NaiveDate::from_ymd_opt(2012, 6, 25).unwrap(),
        NaiveDate::from_ymd_opt(2012, 7, 5).unwrap(),
    )
    .unwrap();
    for date in &r {
        let quarter = YearQuarter::from_date(date);
        assert!(quarter.contains(date));
        assert_eq!(quarter.quarter(), Quarter::from_date(date));
    }
}

#[test]
fn steered_clock_walks_a_range() {
    let r = DateRange::new(day(1), day(4)).unwrap();
    let clock = MutableClock::epoch_utc();
    clock.set_instant(r.start().and_hms_opt(0, 0, 0).unwrap().and_utc());

    let mut visited = Vec::new();
    for _ in 0..r.length_in_days() {
        visited.push(clock.now().date_naive());
        clock.advance(Duration::days(1)).unwrap();
    }
    assert_eq!(visited, r.iter().collect::<Vec<_>>());
}

#[cfg(feature = "serde")]
#[test]
fn serde_range_uses_named_bound_fields() {
    let r = DateRange::new(day(28), day(31)).unwrap();
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"start\""));
    assert!(json.contains("\"end\""));
    assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), r);
}
