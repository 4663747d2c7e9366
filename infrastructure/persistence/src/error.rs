use business::domain::errors::RepositoryError;

/// Maps a driver error onto the domain's repository error.
///
/// Unique violations surface as `Duplicated`; decode failures as
/// `Persistence`; everything else (unreachable store, timeouts, rejected
/// statements) as `DatabaseError`.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "Product store operation failed");
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::duplicated(),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
            RepositoryError::persistence()
        }
        _ => RepositoryError::database_error(),
    }
}
