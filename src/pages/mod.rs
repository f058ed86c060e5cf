pub mod about;
pub mod feed;
pub mod mp_profile;
pub mod mp_search;
pub mod notice;

pub use about::AboutPage;
pub use feed::{FeedPage, VoteOutcome};
pub use mp_profile::{MpProfile, MpProfilePage, ProfileState, ProfileTab};
pub use mp_search::{MpSearchPage, normalize_postal_code};
pub use notice::{Notice, NoticeLevel, Notices};
