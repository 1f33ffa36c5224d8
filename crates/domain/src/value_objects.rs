//! Count value objects re-exported from the shared kernel.

pub use readability_shared_kernel::value_objects::{
    CharCount, PolysyllableCount, SentenceCount, SyllableCount, WordCount,
};
