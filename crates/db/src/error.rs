/// Opaque failure returned by every data-access operation.
///
/// The underlying `sqlx::Error` is logged where it happens and then
/// discarded, so callers cannot branch on connectivity vs. constraint vs.
/// syntax failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database operation failed.")]
    OperationFailed,
}

/// Build the translator applied to every query result.
///
/// ```ignore
/// sqlx::query(..).execute(pool).await.map_err(store_failure("delete"))?;
/// ```
pub(crate) fn store_failure(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |err| {
        tracing::error!(operation, error = ?err, "Database query error");
        StoreError::OperationFailed
    }
}
