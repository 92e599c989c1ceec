//! Favorite repository port — persistence for the favorite join tables.

use std::future::Future;

use holocron_domain::error::HolocronError;
use holocron_domain::favorite::{Favorite, FavoriteKind};
use holocron_domain::id::{FavoriteId, UserId};

/// Repository over the three favorite tables, selected by [`FavoriteKind`].
pub trait FavoriteRepository {
    /// Insert a row pointing at `target_id`. No user is recorded.
    fn create(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Favorite, HolocronError>> + Send;

    /// Get all rows of one kind in store order.
    fn get_all(
        &self,
        kind: FavoriteKind,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send;

    /// Get the oldest row of one kind pointing at `target_id`.
    fn find_first_by_target(
        &self,
        kind: FavoriteKind,
        target_id: i64,
    ) -> impl Future<Output = Result<Option<Favorite>, HolocronError>> + Send;

    /// Get the rows of one kind attributed to `user_id`.
    fn find_by_user(
        &self,
        kind: FavoriteKind,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Favorite>, HolocronError>> + Send;

    /// Delete a single row.
    fn delete(
        &self,
        kind: FavoriteKind,
        id: FavoriteId,
    ) -> impl Future<Output = Result<(), HolocronError>> + Send;
}
