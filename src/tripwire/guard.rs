//! TI-005: Self-invocation guard.
//!
//! The wrapper must never run a copy of itself: if the companion path holds
//! the same bytes as the running executable, the run stops before spawning.

use super::hasher;
use crate::error::{Error, Result};
use std::path::Path;

/// Hash `own` on a scoped helper thread while hashing `companion` here.
/// Both results are joined before returning; the first error wins, own first.
pub fn digest_pair(own: &Path, companion: &Path) -> Result<(String, String)> {
    std::thread::scope(|s| -> Result<(String, String)> {
        let helper = s.spawn(|| hasher::hash_file(own));
        let companion_sum = hasher::hash_file(companion);
        let own_sum = helper
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        Ok((own_sum?, companion_sum?))
    })
}

/// Fail with [`Error::SelfInvocation`] when both files have the same digest.
pub fn check_not_self(own: &Path, companion: &Path) -> Result<()> {
    let (own_sum, companion_sum) = digest_pair(own, companion)?;
    tracing::debug!(own = %own_sum, companion = %companion_sum, "digests computed");
    if own_sum == companion_sum {
        return Err(Error::SelfInvocation);
    }
    Ok(())
}
