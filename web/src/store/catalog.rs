//! Repositories for the flat reference tables joined into bookings:
//! customers, staff, treatments and branches. Same shape for each: list
//! (plus an active-only list where the record carries an active flag),
//! create, update, delete.

use shared_types::{
    Branch, BranchPayload, Customer, CustomerPayload, Staff, StaffPayload, Treatment,
    TreatmentPayload,
};

use super::client::store;
use super::error::StoreError;

fn param(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

fn by_id(id: &str) -> [(String, String); 1] {
    [param("id", format!("eq.{}", id))]
}

pub async fn list_customers() -> Result<Vec<Customer>, StoreError> {
    store()?
        .select("customers", &[param("order", "last_name.asc")])
        .await
}

pub async fn create_customer(payload: &CustomerPayload) -> Result<Customer, StoreError> {
    store()?.insert("customers", payload).await
}

pub async fn update_customer(id: &str, payload: &CustomerPayload) -> Result<Customer, StoreError> {
    store()?.update("customers", &by_id(id), payload).await
}

pub async fn delete_customer(id: &str) -> Result<(), StoreError> {
    store()?.delete("customers", &by_id(id)).await
}

pub async fn list_staff() -> Result<Vec<Staff>, StoreError> {
    store()?.select("staff", &[param("order", "name.asc")]).await
}

pub async fn list_active_staff() -> Result<Vec<Staff>, StoreError> {
    store()?
        .select(
            "staff",
            &[param("active", "eq.true"), param("order", "name.asc")],
        )
        .await
}

pub async fn create_staff(payload: &StaffPayload) -> Result<Staff, StoreError> {
    store()?.insert("staff", payload).await
}

pub async fn update_staff(id: &str, payload: &StaffPayload) -> Result<Staff, StoreError> {
    store()?.update("staff", &by_id(id), payload).await
}

pub async fn delete_staff(id: &str) -> Result<(), StoreError> {
    store()?.delete("staff", &by_id(id)).await
}

pub async fn list_treatments() -> Result<Vec<Treatment>, StoreError> {
    store()?
        .select("treatments", &[param("order", "name.asc")])
        .await
}

pub async fn list_active_treatments() -> Result<Vec<Treatment>, StoreError> {
    store()?
        .select(
            "treatments",
            &[param("active", "eq.true"), param("order", "name.asc")],
        )
        .await
}

pub async fn create_treatment(payload: &TreatmentPayload) -> Result<Treatment, StoreError> {
    store()?.insert("treatments", payload).await
}

pub async fn update_treatment(id: &str, payload: &TreatmentPayload) -> Result<Treatment, StoreError> {
    store()?.update("treatments", &by_id(id), payload).await
}

pub async fn delete_treatment(id: &str) -> Result<(), StoreError> {
    store()?.delete("treatments", &by_id(id)).await
}

pub async fn list_branches() -> Result<Vec<Branch>, StoreError> {
    store()?
        .select("branches", &[param("order", "name.asc")])
        .await
}

pub async fn list_active_branches() -> Result<Vec<Branch>, StoreError> {
    store()?
        .select(
            "branches",
            &[param("active", "eq.true"), param("order", "name.asc")],
        )
        .await
}

pub async fn create_branch(payload: &BranchPayload) -> Result<Branch, StoreError> {
    store()?.insert("branches", payload).await
}

pub async fn update_branch(id: &str, payload: &BranchPayload) -> Result<Branch, StoreError> {
    store()?.update("branches", &by_id(id), payload).await
}

pub async fn delete_branch(id: &str) -> Result<(), StoreError> {
    store()?.delete("branches", &by_id(id)).await
}
