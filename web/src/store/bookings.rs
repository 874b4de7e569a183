use chrono::{DateTime, NaiveDate, Utc};
use shared_types::{Booking, BookingPayload, BookingStatus, BookingWithRelations};

use super::client::store;
use super::error::{retry_unjoined, StoreError};

const TABLE: &str = "bookings";

// Embedded-relations select. Works only when the store's foreign keys are in
// place; list/get calls fall back to a plain select when it is rejected.
const RELATIONS_SELECT: &str = "*,\
customer:customer_id(id,first_name,last_name,email,phone),\
staff:staff_id(id,name),\
treatment:treatment_id(id,name,duration_min,price_eur),\
branch:branch_id(id,name)";

fn param(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

/// Run the joined select; on a schema-shape rejection retry unjoined. The
/// fallback rows deserialize with every relation as `None`, so a partially
/// migrated schema degrades to blank relation labels instead of an error.
async fn select_with_fallback(
    filters: &[(String, String)],
) -> Result<Vec<BookingWithRelations>, StoreError> {
    let client = store()?;

    let mut joined = filters.to_vec();
    joined.push(param("select", RELATIONS_SELECT));
    let first = client.select(TABLE, &joined).await;
    if retry_unjoined(&first) {
        let mut plain = filters.to_vec();
        plain.push(param("select", "*"));
        return client.select(TABLE, &plain).await;
    }
    first
}

pub async fn list_all() -> Result<Vec<BookingWithRelations>, StoreError> {
    select_with_fallback(&[param("order", "start_at.desc")]).await
}

pub async fn list_by_date_range(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<BookingWithRelations>, StoreError> {
    select_with_fallback(&[
        param("start_at", format!("gte.{}", start.to_rfc3339())),
        param("start_at", format!("lte.{}", end.to_rfc3339())),
        param("order", "start_at.asc"),
    ])
    .await
}

pub async fn list_by_staff(
    staff_id: &str,
    day: NaiveDate,
) -> Result<Vec<BookingWithRelations>, StoreError> {
    select_with_fallback(&[
        param("staff_id", format!("eq.{}", staff_id)),
        param("start_at", format!("gte.{}T00:00:00Z", day)),
        param("start_at", format!("lte.{}T23:59:59Z", day)),
        param("order", "start_at.asc"),
    ])
    .await
}

pub async fn get_by_id(id: &str) -> Result<Option<BookingWithRelations>, StoreError> {
    let rows = select_with_fallback(&[param("id", format!("eq.{}", id))]).await?;
    Ok(rows.into_iter().next())
}

/// Create a booking. The store's exclusion constraint is the authoritative
/// double-booking guard; its violation surfaces as `StoreError::Conflict`
/// with the same user-facing wording the client-side detector uses.
pub async fn create(payload: &BookingPayload) -> Result<Booking, StoreError> {
    store()?.insert(TABLE, payload).await
}

pub async fn update(id: &str, payload: &BookingPayload) -> Result<Booking, StoreError> {
    store()?
        .update(TABLE, &[param("id", format!("eq.{}", id))], payload)
        .await
}

pub async fn update_status(id: &str, status: BookingStatus) -> Result<Booking, StoreError> {
    store()?
        .update(
            TABLE,
            &[param("id", format!("eq.{}", id))],
            &serde_json::json!({ "status": status }),
        )
        .await
}

pub async fn delete(id: &str) -> Result<(), StoreError> {
    store()?
        .delete(TABLE, &[param("id", format!("eq.{}", id))])
        .await
}
