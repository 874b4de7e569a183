use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use shared_types::{BookingPayload, BookingStatus, BookingWithRelations};

/// Form state for the booking panel. Field values are plain strings bound to
/// the inputs; times are local wall clock and only become UTC when the draft
/// is turned into a payload.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingDraft {
    /// `Some` when editing an existing booking, `None` for a new one.
    pub id: Option<String>,
    pub customer_id: String,
    pub staff_id: String,
    pub treatment_id: String,
    pub branch_id: String,
    pub day: NaiveDate,
    pub start_min: i64,
    pub duration_min: i64,
    pub status: BookingStatus,
    pub note: String,
}

pub const DEFAULT_DURATION_MIN: i64 = 45;

impl BookingDraft {
    /// A fresh draft for a click on an empty slot: the lane's staff member
    /// and the clicked time are prefilled, everything else starts empty.
    pub fn for_slot(day: NaiveDate, staff_id: &str, start_min: i64) -> Self {
        BookingDraft {
            id: None,
            customer_id: String::new(),
            staff_id: staff_id.to_string(),
            treatment_id: String::new(),
            branch_id: String::new(),
            day,
            start_min,
            duration_min: DEFAULT_DURATION_MIN,
            status: BookingStatus::Scheduled,
            note: String::new(),
        }
    }

    /// Editing draft seeded from a stored booking, times shifted to local.
    pub fn for_booking(booking: &BookingWithRelations) -> Self {
        let start_local = booking.booking.start_at.with_timezone(&Local);
        let end_local = booking.booking.end_at.with_timezone(&Local);
        let start_min = minutes_of_day(&start_local);
        let duration_min = (end_local - start_local).num_minutes();
        BookingDraft {
            id: Some(booking.booking.id.clone()),
            customer_id: booking.booking.customer_id.clone(),
            staff_id: booking.booking.staff_id.clone(),
            treatment_id: booking.booking.treatment_id.clone().unwrap_or_default(),
            branch_id: booking.booking.branch_id.clone().unwrap_or_default(),
            day: start_local.date_naive(),
            start_min,
            duration_min,
            status: booking.booking.status,
            note: booking.booking.note.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        local_instant(self.day, self.start_min)
    }

    pub fn end_at(&self) -> Option<DateTime<Utc>> {
        self.start_at()
            .map(|start| start + Duration::minutes(self.duration_min))
    }

    /// Field-level validation, returning the first human-readable problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id.is_empty() {
            return Err("Please select a customer".to_string());
        }
        if self.staff_id.is_empty() {
            return Err("Please select a staff member".to_string());
        }
        if self.duration_min <= 0 {
            return Err("Duration must be positive".to_string());
        }
        if self.start_at().is_none() {
            return Err("The selected time is not valid".to_string());
        }
        Ok(())
    }

    /// Wire payload for a create or a full edit. `validate` must have passed;
    /// a draft that fails validation yields `None`.
    pub fn payload(&self) -> Option<BookingPayload> {
        let start_at = self.start_at()?;
        let end_at = self.end_at()?;
        Some(BookingPayload {
            customer_id: Some(self.customer_id.clone()),
            staff_id: Some(self.staff_id.clone()),
            treatment_id: Some(non_empty(&self.treatment_id)),
            branch_id: Some(non_empty(&self.branch_id)),
            room_id: None,
            start_at: Some(start_at),
            end_at: Some(end_at),
            status: Some(self.status),
            note: Some(non_empty(&self.note)),
        })
    }
}

/// Local wall-clock `day` + minutes-from-midnight as a UTC instant. A time
/// skipped by a DST jump yields `None`.
pub fn local_instant(day: NaiveDate, minutes: i64) -> Option<DateTime<Utc>> {
    let time = day.and_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)?;
    Local
        .from_local_datetime(&time)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn minutes_of_day(dt: &DateTime<Local>) -> i64 {
    use chrono::Timelike;
    (dt.hour() * 60 + dt.minute()) as i64
}

/// Payload for a drag-move: only the owning staff member and the time pair
/// change, every other field is left untouched by the patch.
pub fn move_payload(
    staff_id: &str,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
) -> BookingPayload {
    BookingPayload {
        staff_id: Some(staff_id.to_string()),
        start_at: Some(start_at),
        end_at: Some(end_at),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::Booking;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    #[test]
    fn slot_draft_prefills_lane_and_time() {
        let draft = BookingDraft::for_slot(day(), "s1", 10 * 60 + 30);
        assert_eq!(draft.staff_id, "s1");
        assert_eq!(draft.start_min, 630);
        assert_eq!(draft.duration_min, DEFAULT_DURATION_MIN);
        assert_eq!(draft.status, BookingStatus::Scheduled);
        assert!(!draft.is_edit());
    }

    #[test]
    fn end_follows_start_by_duration() {
        let mut draft = BookingDraft::for_slot(day(), "s1", 9 * 60);
        draft.customer_id = "c1".into();
        draft.duration_min = 75;
        let start = draft.start_at().unwrap();
        let end = draft.end_at().unwrap();
        assert_eq!(end - start, Duration::minutes(75));
    }

    #[test]
    fn validation_requires_customer_and_staff() {
        let mut draft = BookingDraft::for_slot(day(), "s1", 9 * 60);
        assert!(draft.validate().unwrap_err().contains("customer"));
        draft.customer_id = "c1".into();
        draft.staff_id = String::new();
        assert!(draft.validate().unwrap_err().contains("staff"));
        draft.staff_id = "s1".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn validation_rejects_nonpositive_duration() {
        let mut draft = BookingDraft::for_slot(day(), "s1", 9 * 60);
        draft.customer_id = "c1".into();
        draft.duration_min = 0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn payload_blanks_become_none() {
        let mut draft = BookingDraft::for_slot(day(), "s1", 9 * 60);
        draft.customer_id = "c1".into();
        draft.note = "  ".into();
        let payload = draft.payload().unwrap();
        assert_eq!(payload.treatment_id, Some(None));
        assert_eq!(payload.branch_id, Some(None));
        assert_eq!(payload.note, Some(None));
        assert_eq!(payload.customer_id.as_deref(), Some("c1"));
    }

    #[test]
    fn booking_draft_round_trips_ids_and_duration() {
        let start = Utc.with_ymd_and_hms(2025, 6, 18, 12, 0, 0).unwrap();
        let source = BookingWithRelations {
            booking: Booking {
                id: "b1".into(),
                customer_id: "c1".into(),
                staff_id: "s1".into(),
                treatment_id: Some("t1".into()),
                branch_id: None,
                room_id: None,
                start_at: start,
                end_at: start + Duration::minutes(60),
                status: BookingStatus::Confirmed,
                note: Some("first visit".into()),
                created_at: None,
                updated_at: None,
            },
            customer: None,
            staff: None,
            treatment: None,
            branch: None,
        };
        let draft = BookingDraft::for_booking(&source);
        assert_eq!(draft.id.as_deref(), Some("b1"));
        assert_eq!(draft.treatment_id, "t1");
        assert_eq!(draft.duration_min, 60);
        assert_eq!(draft.status, BookingStatus::Confirmed);
        // rebuilt payload spans the same instant pair
        let payload = draft.payload().unwrap();
        assert_eq!(payload.start_at, Some(source.booking.start_at));
        assert_eq!(payload.end_at, Some(source.booking.end_at));
    }

    #[test]
    fn move_payload_touches_only_staff_and_times() {
        let start = Utc.with_ymd_and_hms(2025, 6, 18, 9, 0, 0).unwrap();
        let payload = move_payload("s2", start, start + Duration::minutes(30));
        assert!(payload.customer_id.is_none());
        assert!(payload.status.is_none());
        assert!(payload.note.is_none());
        assert_eq!(payload.staff_id.as_deref(), Some("s2"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
