//! Repository for the `offers` table.

use chrono::Utc;
use coop_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::offer::{CreateOffer, Offer, StudentOffer};

const COLUMNS: &str = "id, position_id, selected_student_id, offer_letter_url, marked_pending_at";

pub struct OfferRepo;

impl OfferRepo {
    /// Record an offer, stamped with the current time.
    pub async fn create(pool: &SqlitePool, input: &CreateOffer) -> Result<Offer, sqlx::Error> {
        let query = format!(
            "INSERT INTO offers (position_id, selected_student_id, offer_letter_url, marked_pending_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Offer>(&query)
            .bind(input.position_id)
            .bind(input.selected_student_id)
            .bind(&input.offer_letter_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Offers made to a student, oldest first.
    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: DbId,
    ) -> Result<Vec<StudentOffer>, sqlx::Error> {
        sqlx::query_as::<_, StudentOffer>(
            "SELECT o.id, o.position_id, p.title AS position_title, o.offer_letter_url,
                    o.marked_pending_at
             FROM offers o
             JOIN positions p ON p.id = o.position_id
             WHERE o.selected_student_id = ?
             ORDER BY o.id",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
