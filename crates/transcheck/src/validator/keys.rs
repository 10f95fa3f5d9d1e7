//! Case-insensitive replace-key collision detection.

use std::collections::HashMap;

use crate::validator::ValidationError;

/// Tracks the replace keys already processed by discard.
///
/// The check runs interleaved with discard, once per key before its
/// placeholder probe, so a collision report names the first-seen literal in
/// real processing order (longest key first).
#[derive(Debug, Default)]
pub(crate) struct SeenKeys {
    /// Case-folded key -> first-seen literal.
    seen: HashMap<String, String>,
}

impl SeenKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`, failing if its case-folded form was already seen.
    pub fn check(&mut self, key: &str) -> Result<(), ValidationError> {
        let folded = key.to_lowercase();
        if let Some(first) = self.seen.get(&folded) {
            return Err(ValidationError::KeyCollision {
                first_key: first.clone(),
                second_key: key.to_string(),
            });
        }
        self.seen.insert(folded, key.to_string());
        Ok(())
    }
}
