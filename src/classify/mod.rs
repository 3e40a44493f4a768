/*! Comment classification.

The decision pipeline deciding, per comment, whether the text is
genuine dialect content worth keeping. Classification is stateless:
a [Classifier] borrows nothing mutable and can be shared across
threads.
!*/
mod classifier;
mod stats;
mod verdict;

pub use classifier::Classifier;
pub use stats::TokenStats;
pub use verdict::{CleanedComment, DropReason, LangHint, Verdict};
