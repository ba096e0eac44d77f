use crate::shared::list::ListResource;
use crate::shared::name_form::NamedResource;
use contracts::domain::a010_size::Size;

pub struct SizeResource;

impl ListResource for SizeResource {
    type Item = Size;
    const PATH: &'static str = "sizes";
}

impl NamedResource for SizeResource {
    const LIST_TITLE: &'static str = "Kích thước";
    const NAME_LABEL: &'static str = "Tên kích thước";
    const ADD_LABEL: &'static str = "Thêm kích thước";
    const CREATE_TITLE: &'static str = "Thêm kích thước";
    const EDIT_TITLE: &'static str = "Sửa kích thước";
    const NAME_REQUIRED: &'static str = "Vui lòng nhập kích thước";
    const LIST_HREF: &'static str = "/sizes";

    fn row_name(item: &Size) -> &str {
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
    use crate::shared::name_form::api::item_path;
    use contracts::shared::paging::EntityId;

    #[test]
    fn test_size_paths() {
        let mut state = ListState::<Size>::from_config(SizeResource::config());
        let req = state.load(1, FilterSet::new());
        assert_eq!(request_path::<SizeResource>(&req), "sizes?page=1&limit=5");
        assert_eq!(item_path::<SizeResource>(9), "sizes/9");
        assert_eq!(
            SizeResource::mutation_route(&EntityId::Int(9), &Mutation::Delete),
            Route::new(HttpMethod::Delete, "sizes/delete/9")
        );
    }
}
