use std::convert::TryFrom;

use crate::id::Id;

/// A vote value with a magnitude of exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteValue(i8);

impl VoteValue {
    pub fn as_i8(self) -> i8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteValueOutOfRange;

impl TryFrom<i8> for VoteValue {
    type Error = VoteValueOutOfRange;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 | -1 => Ok(Self(value)),
            _ => Err(VoteValueOutOfRange),
        }
    }
}

impl From<VoteValue> for i8 {
    fn from(from: VoteValue) -> Self {
        from.0
    }
}

/// One vote per (user, spot); last write wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub user_id: Id,
    pub spot_id: Id,
    pub value: VoteValue,
}

/// A (user, spot) bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favourite {
    pub user_id: Id,
    pub spot_id: Id,
}
