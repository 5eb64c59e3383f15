//! Profile module - who the user is, for coaching purposes.
//!
//! A profile is the `(Gender, MBTI)` pair a consult session is started with.
//! Both halves are self-validating value objects: once constructed they are
//! always valid.

mod gender;
mod mbti;
mod user_profile;

pub use gender::Gender;
pub use mbti::Mbti;
pub use user_profile::UserProfile;
