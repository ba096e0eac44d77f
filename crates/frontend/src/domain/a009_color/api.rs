use crate::shared::list::ListResource;
use crate::shared::name_form::NamedResource;
use contracts::domain::a009_color::Color;

pub struct ColorResource;

impl ListResource for ColorResource {
    type Item = Color;
    const PATH: &'static str = "colors";
}

impl NamedResource for ColorResource {
    const LIST_TITLE: &'static str = "Màu sắc";
    const NAME_LABEL: &'static str = "Tên màu";
    const ADD_LABEL: &'static str = "Thêm màu";
    const CREATE_TITLE: &'static str = "Thêm màu sắc";
    const EDIT_TITLE: &'static str = "Sửa màu sắc";
    const NAME_REQUIRED: &'static str = "Vui lòng nhập tên màu";
    const LIST_HREF: &'static str = "/colors";

    fn row_name(item: &Color) -> &str {
        &item.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::HttpMethod;
    use crate::shared::list::filters::FilterSet;
    use crate::shared::list::resource::request_path;
    use crate::shared::list::{ListState, Mutation, Route};
    use crate::shared::name_form::api::{edit_href, item_path};
    use contracts::shared::paging::EntityId;

    #[test]
    fn test_color_listing_and_delete() {
        let mut state = ListState::<Color>::from_config(ColorResource::config());
        let req = state.load(3, FilterSet::new());
        assert_eq!(request_path::<ColorResource>(&req), "colors?page=3&limit=5");
        assert_eq!(
            ColorResource::mutation_route(&EntityId::Int(2), &Mutation::Delete),
            Route::new(HttpMethod::Delete, "colors/delete/2")
        );
    }

    #[test]
    fn test_color_form_paths() {
        assert_eq!(item_path::<ColorResource>(2), "colors/2");
        assert_eq!(edit_href::<ColorResource>(2), "/colors/2");
    }
}
