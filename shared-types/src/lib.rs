use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking. Transitions are free by default; the
/// strict table in [`BookingStatus::can_transition_to`] is opt-in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Scheduled,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "Scheduled",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::NoShow => "No-show",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }

    pub fn parse(s: &str) -> Option<BookingStatus> {
        Self::ALL.iter().copied().find(|st| st.as_str() == s)
    }

    /// With `strict = false` (the current UI default) every transition is
    /// allowed. The strict table treats completed and cancelled as terminal.
    pub fn can_transition_to(&self, next: BookingStatus, strict: bool) -> bool {
        if !strict {
            return true;
        }
        match self {
            BookingStatus::Completed | BookingStatus::Cancelled => *self == next,
            _ => true,
        }
    }
}

/// A booking row as stored remotely. `start_at`/`end_at` are UTC on the
/// wire; duration is always derived from the pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub staff_id: String,
    pub treatment_id: Option<String>,
    pub branch_id: Option<String>,
    pub room_id: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: BookingStatus,
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CustomerSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StaffSummary {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TreatmentSummary {
    pub id: String,
    pub name: String,
    pub duration_min: i32,
    pub price_eur: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BranchSummary {
    pub id: String,
    pub name: String,
}

/// Denormalized booking view model. The relation fields are `None` when the
/// store cannot serve the joined query and the facade fell back to a plain
/// select; everything downstream renders blanks instead of probing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingWithRelations {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(default)]
    pub customer: Option<CustomerSummary>,
    #[serde(default)]
    pub staff: Option<StaffSummary>,
    #[serde(default)]
    pub treatment: Option<TreatmentSummary>,
    #[serde(default)]
    pub branch: Option<BranchSummary>,
}

impl BookingWithRelations {
    pub fn customer_label(&self) -> String {
        self.customer
            .as_ref()
            .map(|c| c.full_name())
            .unwrap_or_default()
    }

    pub fn staff_label(&self) -> String {
        self.staff.as_ref().map(|s| s.name.clone()).unwrap_or_default()
    }

    pub fn treatment_label(&self) -> String {
        self.treatment
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default()
    }

    pub fn branch_label(&self) -> String {
        self.branch.as_ref().map(|b| b.name.clone()).unwrap_or_default()
    }
}

/// Partial insert/update payload for a booking. `None` fields are omitted
/// from the wire so the same shape serves both creates and patches (a
/// drag-move patches only staff and the time pair).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BookingPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub color: Option<String>,
    pub branch_id: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub duration_min: i32,
    pub price_eur: f64,
    pub color: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
}

/// Insert/update shape for a customer row (id is store-assigned).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StaffPayload {
    pub name: String,
    pub role: Option<String>,
    pub color: Option<String>,
    pub branch_id: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TreatmentPayload {
    pub name: String,
    pub duration_min: i32,
    pub price_eur: f64,
    pub color: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BranchPayload {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
}

/// Which axis the board groups bookings into lanes by. Declared statically
/// per board instead of being inferred from row shape.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaneScheme {
    ByStaff,
    ByRoom,
    ByDay,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoardConfig {
    pub lane_scheme: LaneScheme,
}

impl BoardConfig {
    pub const fn new(lane_scheme: LaneScheme) -> Self {
        BoardConfig { lane_scheme }
    }

    /// The reference the active scheme uses as the uniqueness key for
    /// conflict checking. Day lanes still key conflicts on the staff member.
    pub fn resource_of_record<'a>(&self, booking: &'a Booking) -> Option<&'a str> {
        match self.lane_scheme {
            LaneScheme::ByStaff | LaneScheme::ByDay => Some(booking.staff_id.as_str()),
            LaneScheme::ByRoom => booking.room_id.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn booking() -> Booking {
        Booking {
            id: "b1".into(),
            customer_id: "c1".into(),
            staff_id: "s1".into(),
            treatment_id: None,
            branch_id: None,
            room_id: Some("r1".into()),
            start_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 3, 10, 9, 45, 0).unwrap(),
            status: BookingStatus::Confirmed,
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn status_round_trips_snake_case() {
        let json = serde_json::to_string(&BookingStatus::NoShow).unwrap();
        assert_eq!(json, "\"no_show\"");
        let back: BookingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BookingStatus::NoShow);
    }

    #[test]
    fn permissive_transitions_allow_everything() {
        for from in BookingStatus::ALL {
            for to in BookingStatus::ALL {
                assert!(from.can_transition_to(to, false));
            }
        }
    }

    #[test]
    fn strict_transitions_keep_terminal_states() {
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed, true));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Scheduled, true));
        assert!(BookingStatus::Scheduled.can_transition_to(BookingStatus::Cancelled, true));
    }

    #[test]
    fn payload_omits_unset_fields() {
        let patch = BookingPayload {
            staff_id: Some("s2".into()),
            start_at: Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap()),
            end_at: Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 45, 0).unwrap()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("staff_id"));
        assert!(!obj.contains_key("customer_id"));
    }

    #[test]
    fn unjoined_row_deserializes_with_null_relations() {
        let row = serde_json::to_value(booking()).unwrap();
        let with_rel: BookingWithRelations = serde_json::from_value(row).unwrap();
        assert!(with_rel.customer.is_none());
        assert!(with_rel.staff.is_none());
        assert_eq!(with_rel.booking.id, "b1");
    }

    #[test]
    fn resource_of_record_follows_lane_scheme() {
        let b = booking();
        assert_eq!(
            BoardConfig::new(LaneScheme::ByStaff).resource_of_record(&b),
            Some("s1")
        );
        assert_eq!(
            BoardConfig::new(LaneScheme::ByDay).resource_of_record(&b),
            Some("s1")
        );
        assert_eq!(
            BoardConfig::new(LaneScheme::ByRoom).resource_of_record(&b),
            Some("r1")
        );
    }
}
