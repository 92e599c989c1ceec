//! Generic row mapper.
//!
//! Each repository implements `FromRow` for `Wrapper<ItsDomainType>`, which
//! keeps database concerns out of the domain structs.

/// Newtype that sqlx decodes rows into.
pub(crate) struct Wrapper<T>(pub(crate) T);

impl<T> Wrapper<T> {
    pub(crate) fn maybe(value: Option<Self>) -> Option<T> {
        value.map(|w| w.0)
    }

    pub(crate) fn many(rows: Vec<Self>) -> Vec<T> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

/// Turn a value-conversion failure into a sqlx decode error.
pub(crate) fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}
