//! docparity comparison core.
//!
//! Sits on top of the signature and alignment layers and answers the
//! operator's question: are these two renditions of a document equivalent,
//! and if not, where do they diverge?
//!
//! - [`compare_signatures`] decides per-channel equality for one page pair.
//!   The four channels (TEXT, ASSETS, TYPOGRAPHY, VISUAL) are peers; all four
//!   are always evaluated so callers get the complete divergence set.
//! - [`compare_page`] is the per-page entry point: signatures, channel
//!   verdict, and optional block-level localization of text changes.
//! - [`compare_documents`] drives the whole run: compares the overlapping
//!   page range, records a page-count mismatch as data (never an error), and
//!   emits verdicts in ascending page order whether pages were processed
//!   sequentially or on the rayon pool.
//!
//! Divergence is data and flows into [`ComparisonResult`]; only extraction
//! failures are errors, and those abort the run immediately.

mod channel;
mod engine;
mod error;
mod options;
mod verdict;

pub use crate::channel::{compare_signatures, Channel};
pub use crate::engine::{compare_documents, compare_page};
pub use crate::error::{CompareError, Side};
pub use crate::options::CompareOptions;
pub use crate::verdict::{ComparisonResult, PageVerdict};
