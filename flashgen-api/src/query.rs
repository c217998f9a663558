//! Pieces shared by the cursor-paginated list queries.

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Common accessors of `?limit=&cursor=` list queries. Cursors are opaque
/// tokens handed out in `meta.nextCursor`.
pub trait CursorQuery {
    fn limit(&self) -> Option<u32>;
    fn cursor(&self) -> Option<&str>;

    /// Requested page size, defaulted and clamped to `1..=MAX_LIMIT`.
    fn page_size(&self) -> u32 {
        self.limit().unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Implements [`CursorQuery`] for a struct with `limit` and `cursor` fields.
macro_rules! impl_cursor_query {
    ($ty:ty) => {
        impl $crate::query::CursorQuery for $ty {
            fn limit(&self) -> Option<u32> {
                self.limit
            }

            fn cursor(&self) -> Option<&str> {
                self.cursor.as_deref()
            }
        }
    };
}

pub(crate) use impl_cursor_query;
