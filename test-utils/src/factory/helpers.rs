use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to generate unique default values (emails, names) so that
/// multiple factory calls within one test never collide on unique constraints.
pub fn next_id() -> u32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
