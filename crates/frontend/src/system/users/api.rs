use crate::shared::http::{self, ApiError, HttpMethod};
use crate::shared::list::ListResource;
use contracts::shared::api::MessageResponse;
use contracts::system::users::{CreateUserDto, User};

pub const SEARCH_FULL_NAME: &str = "full_name";

/// Role assigned by the registration form.
pub const DEFAULT_ROLE_ID: &str = "1";

pub struct UserResource;

impl ListResource for UserResource {
    type Item = User;
    const PATH: &'static str = "users";
    const SEARCH_PATH: Option<&'static str> = Some("users/search/full_name");
    const SEARCH_KEYS: &'static [&'static str] = &[SEARCH_FULL_NAME];
}

pub async fn register(dto: &CreateUserDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Post, "users/register", dto).await
}
