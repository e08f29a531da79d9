use std::collections::BTreeSet;
use std::fmt;

use parity_signature::PageSignature;
use serde::{Deserialize, Serialize};

/// One independent axis of page equivalence.
///
/// Channels have no priority among them; the enum order only fixes a stable
/// iteration/serialization order for verdict sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Channel {
    /// Whitespace-normalized page text.
    Text,
    /// Embedded-asset byte fingerprints.
    Assets,
    /// Distinct (font, size, color) span styles.
    Typography,
    /// Rendered-pixel fingerprint at the configured resolution.
    Visual,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Text => "TEXT",
            Channel::Assets => "ASSETS",
            Channel::Typography => "TYPOGRAPHY",
            Channel::Visual => "VISUAL",
        };
        f.write_str(name)
    }
}

/// Decide per-channel equality for one page pair.
///
/// Every channel compares its field by value: exact equality for text and the
/// visual fingerprint, set equality for the two set-valued channels. All four
/// checks run unconditionally; the result is the complete divergence set, not
/// just the first failure.
pub fn compare_signatures(before: &PageSignature, after: &PageSignature) -> BTreeSet<Channel> {
    let mut diverging = BTreeSet::new();
    if before.text != after.text {
        diverging.insert(Channel::Text);
    }
    if before.asset_fingerprints != after.asset_fingerprints {
        diverging.insert(Channel::Assets);
    }
    if before.typography_fingerprints != after.typography_fingerprints {
        diverging.insert(Channel::Typography);
    }
    if before.visual_fingerprint != after.visual_fingerprint {
        diverging.insert(Channel::Visual);
    }
    diverging
}
