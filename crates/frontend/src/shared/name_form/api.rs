use crate::shared::http::{self, ApiError, HttpMethod};
use crate::shared::list::ListResource;
use contracts::shared::api::MessageResponse;
use contracts::shared::named::NameDto;

/// A list resource whose rows are created and edited through a single
/// name field. Create is `POST <PATH>`, read and update use `<PATH>/<id>`.
pub trait NamedResource: ListResource {
    const LIST_TITLE: &'static str;
    const NAME_LABEL: &'static str;
    const ADD_LABEL: &'static str;
    const CREATE_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const NAME_REQUIRED: &'static str;
    /// Front-end route of the list page, e.g. `/colors`.
    const LIST_HREF: &'static str;

    fn row_name(item: &Self::Item) -> &str;
}

pub fn item_path<R: NamedResource>(id: i64) -> String {
    format!("{}/{}", R::PATH, id)
}

pub fn create_href<R: NamedResource>() -> String {
    format!("{}/create", R::LIST_HREF)
}

pub fn edit_href<R: NamedResource>(id: impl std::fmt::Display) -> String {
    format!("{}/{}", R::LIST_HREF, id)
}

pub async fn fetch_by_id<R: NamedResource>(id: i64) -> Result<NameDto, ApiError> {
    http::get_data(&item_path::<R>(id)).await
}

pub async fn create<R: NamedResource>(dto: &NameDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Post, R::PATH, dto).await
}

pub async fn update<R: NamedResource>(id: i64, dto: &NameDto) -> Result<MessageResponse, ApiError> {
    http::send_message(HttpMethod::Put, &item_path::<R>(id), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::paging::{Entity, EntityId};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Tag {
        id: i64,
        name: String,
    }

    impl Entity for Tag {
        fn entity_id(&self) -> EntityId {
            EntityId::Int(self.id)
        }
    }

    struct TagResource;

    impl ListResource for TagResource {
        type Item = Tag;
        const PATH: &'static str = "tags";
    }

    impl NamedResource for TagResource {
        const LIST_TITLE: &'static str = "Thẻ";
        const NAME_LABEL: &'static str = "Tên thẻ";
        const ADD_LABEL: &'static str = "Thêm thẻ";
        const CREATE_TITLE: &'static str = "Thêm thẻ";
        const EDIT_TITLE: &'static str = "Sửa thẻ";
        const NAME_REQUIRED: &'static str = "Vui lòng nhập tên thẻ";
        const LIST_HREF: &'static str = "/tags";

        fn row_name(item: &Tag) -> &str {
            &item.name
        }
    }

    #[test]
    fn test_backend_and_page_paths() {
        assert_eq!(item_path::<TagResource>(7), "tags/7");
        assert_eq!(create_href::<TagResource>(), "/tags/create");
        assert_eq!(edit_href::<TagResource>(EntityId::Int(7)), "/tags/7");
    }

    #[test]
    fn test_row_name() {
        let tag = Tag {
            id: 1,
            name: "Mới".into(),
        };
        assert_eq!(TagResource::row_name(&tag), "Mới");
    }
}
