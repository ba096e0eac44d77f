use crate::shared::config::ListConfig;
use crate::shared::http::{self, ApiError};
use crate::shared::list::ListResource;
use crate::shared::name_form::NamedResource;
use contracts::domain::a001_category::Category;
use contracts::shared::paging::PageData;

/// Categories have no search endpoint.
pub struct CategoryResource;

impl ListResource for CategoryResource {
    type Item = Category;
    const PATH: &'static str = "categories";

    fn config() -> ListConfig {
        ListConfig::default().with_page_size(10)
    }
}

impl NamedResource for CategoryResource {
    const LIST_TITLE: &'static str = "Danh mục";
    const NAME_LABEL: &'static str = "Tên danh mục";
    const ADD_LABEL: &'static str = "Thêm danh mục";
    const CREATE_TITLE: &'static str = "Thêm danh mục";
    const EDIT_TITLE: &'static str = "Sửa danh mục";
    const NAME_REQUIRED: &'static str = "Vui lòng nhập tên danh mục";
    const LIST_HREF: &'static str = "/categories";

    fn row_name(item: &Category) -> &str {
        &item.name
    }
}

/// Categories for dropdowns (product filter and form).
pub async fn fetch_all() -> Result<Vec<Category>, ApiError> {
    let page: PageData<Category> = http::get_data("categories?page=1&limit=100").await?;
    Ok(page.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::{ListState, Mutation, Route};
    use contracts::shared::paging::EntityId;

    #[test]
    fn test_category_paths() {
        let mut state = ListState::<Category>::from_config(CategoryResource::config());
        let req = state.load(2, FilterSet::new().with("name", "ignored"));
        assert_eq!(request_path::<CategoryResource>(&req), "categories?page=2&limit=10");
        assert_eq!(
            CategoryResource::mutation_route(&EntityId::Int(4), &Mutation::Delete),
            Route::new(HttpMethod::Delete, "categories/delete/4")
        );
    }

    #[test]
    fn test_category_form_paths() {
        use crate::shared::name_form::api::{create_href, item_path};
        assert_eq!(item_path::<CategoryResource>(4), "categories/4");
        assert_eq!(create_href::<CategoryResource>(), "/categories/create");
    }
}
