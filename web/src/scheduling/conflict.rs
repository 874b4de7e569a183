use chrono::{DateTime, Local, Utc};
use shared_types::{BoardConfig, BookingWithRelations};

/// Best-effort client-side double-booking check, run synchronously against
/// the currently loaded booking set before every create, update and
/// drag-move. The store's exclusion constraint remains the authoritative
/// guard for races this scan cannot see.
///
/// Scans bookings whose resource-of-record (per the board's lane scheme)
/// matches `resource_id`, skipping `exclude_id` so an edit does not conflict
/// with itself. Overlap uses half-open `[start, end)` semantics: touching
/// intervals are allowed. There is deliberately no calendar-day gate; a
/// day boundary (in any timezone) between two overlapping instants must not
/// hide the collision.
pub fn find_conflict<'a>(
    bookings: &'a [BookingWithRelations],
    config: &BoardConfig,
    resource_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_id: Option<&str>,
) -> Option<&'a BookingWithRelations> {
    bookings.iter().find(|b| {
        if exclude_id == Some(b.booking.id.as_str()) {
            return false;
        }
        if config.resource_of_record(&b.booking) != Some(resource_id) {
            return false;
        }
        b.booking.start_at < end && start < b.booking.end_at
    })
}

/// Human-readable message naming the colliding local time range.
pub fn conflict_message(conflicting: &BookingWithRelations) -> String {
    let start = conflicting
        .booking
        .start_at
        .with_timezone(&Local)
        .format("%H:%M");
    let end = conflicting
        .booking
        .end_at
        .with_timezone(&Local)
        .format("%H:%M");
    format!(
        "Conflicts with an existing booking from {} to {}",
        start, end
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::{Booking, BookingStatus, LaneScheme};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
    }

    fn booking(id: &str, staff: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> BookingWithRelations {
        BookingWithRelations {
            booking: Booking {
                id: id.into(),
                customer_id: "c1".into(),
                staff_id: staff.into(),
                treatment_id: None,
                branch_id: None,
                room_id: None,
                start_at: start,
                end_at: end,
                status: BookingStatus::Confirmed,
                note: None,
                created_at: None,
                updated_at: None,
            },
            customer: None,
            staff: None,
            treatment: None,
            branch: None,
        }
    }

    const CONFIG: BoardConfig = BoardConfig::new(LaneScheme::ByStaff);

    #[test]
    fn touching_intervals_do_not_conflict() {
        let existing = vec![booking("b1", "s1", at(10, 0), at(10, 45))];
        assert!(find_conflict(&existing, &CONFIG, "s1", at(10, 45), at(11, 30), None).is_none());
        assert!(find_conflict(&existing, &CONFIG, "s1", at(9, 0), at(10, 0), None).is_none());
    }

    #[test]
    fn overlapping_interval_reports_the_colliding_booking() {
        // staff already booked 14:15-14:45; candidate 14:00-14:30 must be rejected
        let existing = vec![booking("b1", "s1", at(14, 15), at(14, 45))];
        let hit = find_conflict(&existing, &CONFIG, "s1", at(14, 0), at(14, 30), None)
            .expect("overlap must be detected");
        assert_eq!(hit.booking.id, "b1");
    }

    #[test]
    fn containment_counts_as_overlap() {
        let existing = vec![booking("b1", "s1", at(10, 0), at(12, 0))];
        assert!(find_conflict(&existing, &CONFIG, "s1", at(10, 30), at(11, 0), None).is_some());
        assert!(find_conflict(&existing, &CONFIG, "s1", at(9, 0), at(13, 0), None).is_some());
    }

    #[test]
    fn other_staff_and_other_days_are_ignored() {
        let existing = vec![
            booking("b1", "s2", at(10, 0), at(11, 0)),
            booking(
                "b2",
                "s1",
                Utc.with_ymd_and_hms(2025, 3, 11, 10, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 11, 11, 0, 0).unwrap(),
            ),
        ];
        assert!(find_conflict(&existing, &CONFIG, "s1", at(10, 0), at(11, 0), None).is_none());
    }

    #[test]
    fn overlap_straddling_midnight_is_detected() {
        // booked 00:00-01:00 UTC; a candidate starting 23:30 the previous
        // evening still collides even though the two starts fall on
        // different calendar days
        let existing = vec![booking(
            "b1",
            "s1",
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 1, 0, 0).unwrap(),
        )];
        let hit = find_conflict(
            &existing,
            &CONFIG,
            "s1",
            Utc.with_ymd_and_hms(2025, 1, 14, 23, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 30, 0).unwrap(),
            None,
        )
        .expect("overlapping booking was not detected");
        assert_eq!(hit.booking.id, "b1");
    }

    #[test]
    fn edit_does_not_conflict_with_itself() {
        let existing = vec![booking("b1", "s1", at(10, 0), at(11, 0))];
        assert!(
            find_conflict(&existing, &CONFIG, "s1", at(10, 15), at(10, 45), Some("b1")).is_none()
        );
        // but it still conflicts with a different booking
        let two = vec![
            booking("b1", "s1", at(10, 0), at(11, 0)),
            booking("b2", "s1", at(10, 30), at(11, 30)),
        ];
        let hit = find_conflict(&two, &CONFIG, "s1", at(10, 15), at(10, 45), Some("b1")).unwrap();
        assert_eq!(hit.booking.id, "b2");
    }

    #[test]
    fn room_scheme_keys_on_room_id() {
        let mut b = booking("b1", "s1", at(10, 0), at(11, 0));
        b.booking.room_id = Some("r1".into());
        let existing = vec![b];
        let by_room = BoardConfig::new(LaneScheme::ByRoom);
        assert!(find_conflict(&existing, &by_room, "r1", at(10, 30), at(11, 30), None).is_some());
        assert!(find_conflict(&existing, &by_room, "r2", at(10, 30), at(11, 30), None).is_none());
    }

    #[test]
    fn message_names_the_colliding_range() {
        let b = booking("b1", "s1", at(14, 15), at(14, 45));
        let msg = conflict_message(&b);
        let expected_start = at(14, 15).with_timezone(&Local).format("%H:%M").to_string();
        let expected_end = at(14, 45).with_timezone(&Local).format("%H:%M").to_string();
        assert!(msg.contains(&expected_start));
        assert!(msg.contains(&expected_end));
    }
}
