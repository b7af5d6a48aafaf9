mod content_sync;

pub use content_sync::{CommitError, CommitOutcome, ContentSync, LoadOutcome};
