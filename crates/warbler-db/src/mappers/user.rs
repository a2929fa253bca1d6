//! User entity <-> model mapper

use warbler_core::entities::User;
use warbler_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash stays behind the repository boundary and is
/// deliberately not part of the entity.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}
