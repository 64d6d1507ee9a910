//! Shared configuration types

use serde::{Deserialize, Serialize};

/// Which candidate to report when two adjacent order statistics both satisfy
/// the weighted-median condition
///
/// This happens when the weight splits exactly in half, e.g. an even number
/// of equally weighted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Report the smaller candidate
    #[default]
    Lower,
    /// Report the larger candidate
    Higher,
}
