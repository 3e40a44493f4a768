/*! Comment sources.

Record schemas for raw and processed comments, plus the converter for
the secondary Instagram dump.
!*/
mod comment;
pub mod instagram;

pub use comment::{AcceptedComment, RawComment, RejectedComment, Source};
