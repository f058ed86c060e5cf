pub mod motion;
pub mod mp;
pub mod party;

pub use motion::{
    Motion, MotionCategory, MotionClassification, MotionStatus, MotionSummary, PartyVote,
    SponsorRef, UserVote,
};
pub use mp::{
    BallotChoice, ContactInfo, DisclosureType, Mp, PLACEHOLDER_IMAGE, ParliamentaryActivity,
    SocialMedia, Speech, SpendingItem, TransparencyItem, Vote,
};
pub use party::PartyName;
