//! Repository traits (ports) for the data access layer

mod repositories;

pub use repositories::{
    FollowRepository, LikeRepository, MessageRepository, RepoResult, UserRepository,
};
