//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process wide counter, used to keep generated names unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a stadium, a venue in it and a published court in the venue.
///
/// # Returns
/// - `Ok((stadium, venue, court))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_court_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::stadium::Model,
        entity::venue::Model,
        entity::court::Model,
    ),
    DbErr,
> {
    let stadium = crate::factory::stadium::create_stadium(db).await?;
    let venue = crate::factory::venue::create_venue(db, stadium.id).await?;
    let court = crate::factory::court::create_court(db, venue.id).await?;

    Ok((stadium, venue, court))
}

/// Creates a court hierarchy, an account and a default reservation managed by
/// that account.
///
/// # Returns
/// - `Ok((manager, venue, court, reservation))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_manager(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::venue::Model,
        entity::court::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (_, venue, court) = create_court_with_dependencies(db).await?;
    let manager = crate::factory::account::create_account(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, &venue, &court).await?;
    crate::factory::reservation_member::create_manager(db, reservation.id, manager.id).await?;

    Ok((manager, venue, court, reservation))
}
