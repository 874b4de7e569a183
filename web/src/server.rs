use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;
use leptos::server;
use shared_types::{
    Booking, BookingPayload, BookingStatus, BookingWithRelations, Branch, BranchPayload, Customer,
    CustomerPayload, Staff, StaffPayload, Treatment, TreatmentPayload,
};

#[server]
pub async fn list_bookings() -> Result<Vec<BookingWithRelations>, ServerFnError> {
    match crate::store::bookings::list_all().await {
        Ok(bookings) => Ok(bookings),
        Err(e) => Err(ServerFnError::new(format!("Failed to load bookings: {}", e))),
    }
}

#[server]
pub async fn list_bookings_in_range(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<BookingWithRelations>, ServerFnError> {
    match crate::store::bookings::list_by_date_range(start, end).await {
        Ok(bookings) => Ok(bookings),
        Err(e) => Err(ServerFnError::new(format!("Failed to load bookings: {}", e))),
    }
}

#[server]
pub async fn list_bookings_for_staff(
    staff_id: String,
    day: NaiveDate,
) -> Result<Vec<BookingWithRelations>, ServerFnError> {
    match crate::store::bookings::list_by_staff(&staff_id, day).await {
        Ok(bookings) => Ok(bookings),
        Err(e) => Err(ServerFnError::new(format!("Failed to load bookings: {}", e))),
    }
}

#[server]
pub async fn get_booking(id: String) -> Result<Option<BookingWithRelations>, ServerFnError> {
    match crate::store::bookings::get_by_id(&id).await {
        Ok(booking) => Ok(booking),
        Err(e) => Err(ServerFnError::new(format!("Failed to load booking: {}", e))),
    }
}

#[server]
pub async fn create_booking(payload: BookingPayload) -> Result<Booking, ServerFnError> {
    match crate::store::bookings::create(&payload).await {
        Ok(booking) => Ok(booking),
        // conflict wording passes through untouched so the board can show it inline
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

#[server]
pub async fn update_booking(id: String, payload: BookingPayload) -> Result<Booking, ServerFnError> {
    match crate::store::bookings::update(&id, &payload).await {
        Ok(booking) => Ok(booking),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

#[server]
pub async fn update_booking_status(
    id: String,
    status: BookingStatus,
) -> Result<Booking, ServerFnError> {
    match crate::store::bookings::update_status(&id, status).await {
        Ok(booking) => Ok(booking),
        Err(e) => Err(ServerFnError::new(format!("Failed to update status: {}", e))),
    }
}

#[server]
pub async fn delete_booking(id: String) -> Result<(), ServerFnError> {
    match crate::store::bookings::delete(&id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Failed to delete booking: {}", e))),
    }
}

#[server]
pub async fn list_customers() -> Result<Vec<Customer>, ServerFnError> {
    match crate::store::catalog::list_customers().await {
        Ok(customers) => Ok(customers),
        Err(e) => Err(ServerFnError::new(format!("Failed to load customers: {}", e))),
    }
}

#[server]
pub async fn create_customer(payload: CustomerPayload) -> Result<Customer, ServerFnError> {
    match crate::store::catalog::create_customer(&payload).await {
        Ok(customer) => Ok(customer),
        Err(e) => Err(ServerFnError::new(format!("Failed to create customer: {}", e))),
    }
}

#[server]
pub async fn update_customer(
    id: String,
    payload: CustomerPayload,
) -> Result<Customer, ServerFnError> {
    match crate::store::catalog::update_customer(&id, &payload).await {
        Ok(customer) => Ok(customer),
        Err(e) => Err(ServerFnError::new(format!("Failed to update customer: {}", e))),
    }
}

#[server]
pub async fn delete_customer(id: String) -> Result<(), ServerFnError> {
    match crate::store::catalog::delete_customer(&id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Failed to delete customer: {}", e))),
    }
}

#[server]
pub async fn list_staff() -> Result<Vec<Staff>, ServerFnError> {
    match crate::store::catalog::list_staff().await {
        Ok(staff) => Ok(staff),
        Err(e) => Err(ServerFnError::new(format!("Failed to load staff: {}", e))),
    }
}

#[server]
pub async fn list_active_staff() -> Result<Vec<Staff>, ServerFnError> {
    match crate::store::catalog::list_active_staff().await {
        Ok(staff) => Ok(staff),
        Err(e) => Err(ServerFnError::new(format!("Failed to load staff: {}", e))),
    }
}

#[server]
pub async fn create_staff(payload: StaffPayload) -> Result<Staff, ServerFnError> {
    match crate::store::catalog::create_staff(&payload).await {
        Ok(staff) => Ok(staff),
        Err(e) => Err(ServerFnError::new(format!(
            "Failed to create staff member: {}",
            e
        ))),
    }
}

#[server]
pub async fn update_staff(id: String, payload: StaffPayload) -> Result<Staff, ServerFnError> {
    match crate::store::catalog::update_staff(&id, &payload).await {
        Ok(staff) => Ok(staff),
        Err(e) => Err(ServerFnError::new(format!(
            "Failed to update staff member: {}",
            e
        ))),
    }
}

#[server]
pub async fn delete_staff(id: String) -> Result<(), ServerFnError> {
    match crate::store::catalog::delete_staff(&id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!(
            "Failed to delete staff member: {}",
            e
        ))),
    }
}

#[server]
pub async fn list_treatments() -> Result<Vec<Treatment>, ServerFnError> {
    match crate::store::catalog::list_treatments().await {
        Ok(treatments) => Ok(treatments),
        Err(e) => Err(ServerFnError::new(format!("Failed to load treatments: {}", e))),
    }
}

#[server]
pub async fn list_active_treatments() -> Result<Vec<Treatment>, ServerFnError> {
    match crate::store::catalog::list_active_treatments().await {
        Ok(treatments) => Ok(treatments),
        Err(e) => Err(ServerFnError::new(format!("Failed to load treatments: {}", e))),
    }
}

#[server]
pub async fn create_treatment(payload: TreatmentPayload) -> Result<Treatment, ServerFnError> {
    match crate::store::catalog::create_treatment(&payload).await {
        Ok(treatment) => Ok(treatment),
        Err(e) => Err(ServerFnError::new(format!("Failed to create treatment: {}", e))),
    }
}

#[server]
pub async fn update_treatment(
    id: String,
    payload: TreatmentPayload,
) -> Result<Treatment, ServerFnError> {
    match crate::store::catalog::update_treatment(&id, &payload).await {
        Ok(treatment) => Ok(treatment),
        Err(e) => Err(ServerFnError::new(format!("Failed to update treatment: {}", e))),
    }
}

#[server]
pub async fn delete_treatment(id: String) -> Result<(), ServerFnError> {
    match crate::store::catalog::delete_treatment(&id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Failed to delete treatment: {}", e))),
    }
}

#[server]
pub async fn list_branches() -> Result<Vec<Branch>, ServerFnError> {
    match crate::store::catalog::list_branches().await {
        Ok(branches) => Ok(branches),
        Err(e) => Err(ServerFnError::new(format!("Failed to load branches: {}", e))),
    }
}

#[server]
pub async fn list_active_branches() -> Result<Vec<Branch>, ServerFnError> {
    match crate::store::catalog::list_active_branches().await {
        Ok(branches) => Ok(branches),
        Err(e) => Err(ServerFnError::new(format!("Failed to load branches: {}", e))),
    }
}

#[server]
pub async fn create_branch(payload: BranchPayload) -> Result<Branch, ServerFnError> {
    match crate::store::catalog::create_branch(&payload).await {
        Ok(branch) => Ok(branch),
        Err(e) => Err(ServerFnError::new(format!("Failed to create branch: {}", e))),
    }
}

#[server]
pub async fn update_branch(id: String, payload: BranchPayload) -> Result<Branch, ServerFnError> {
    match crate::store::catalog::update_branch(&id, &payload).await {
        Ok(branch) => Ok(branch),
        Err(e) => Err(ServerFnError::new(format!("Failed to update branch: {}", e))),
    }
}

#[server]
pub async fn delete_branch(id: String) -> Result<(), ServerFnError> {
    match crate::store::catalog::delete_branch(&id).await {
        Ok(()) => Ok(()),
        Err(e) => Err(ServerFnError::new(format!("Failed to delete branch: {}", e))),
    }
}
