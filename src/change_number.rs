use derive_more::{Display, From, Into};

/// A Gerrit change number.
///
/// Unlike a change ID, this is a number.
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct ChangeNumber(u64);
