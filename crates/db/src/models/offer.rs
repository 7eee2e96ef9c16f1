use coop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Offer {
    pub id: DbId,
    pub position_id: DbId,
    pub selected_student_id: DbId,
    pub offer_letter_url: Option<String>,
    pub marked_pending_at: Timestamp,
}

/// An offer made to a student, with the position title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentOffer {
    pub id: DbId,
    pub position_id: DbId,
    pub position_title: String,
    pub offer_letter_url: Option<String>,
    pub marked_pending_at: Timestamp,
}

/// DTO for creating an offer.
#[derive(Debug)]
pub struct CreateOffer {
    pub position_id: DbId,
    pub selected_student_id: DbId,
    pub offer_letter_url: Option<String>,
}
