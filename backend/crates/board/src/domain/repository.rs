//! Repository Traits

use crate::error::BoardResult;

/// Post view counter
#[trait_variant::make(PostViewRepository: Send)]
pub trait LocalPostViewRepository {
    /// Atomically add one view to `post_id`.
    ///
    /// The identifier is opaque here and handed to the store unmodified;
    /// the store decides whether it is valid.
    async fn increment_view_count(&self, post_id: &str) -> BoardResult<()>;
}
