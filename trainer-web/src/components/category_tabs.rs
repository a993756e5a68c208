use i18nrs::yew::use_translation;
use shared::models::{Category, CategoryFilter};
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub categories: Vec<Category>,
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

/// One tab per category; the "all" tab clears the filter.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div role="tablist" class="tabs tabs-boxed mb-4">
            { for props.categories.iter().map(|category| {
                let filter = CategoryFilter::from_id(&category.id);
                let active = (filter == props.selected).then_some("tab-active");
                let on_select = props.on_select.clone();
                let label = i18n.t(&format!("categories.{}", category.id));
                html! {
                    <a
                        role="tab"
                        class={classes!("tab", active)}
                        onclick={move |event: yew::MouseEvent| {
                            event.prevent_default();
                            on_select.emit(filter.clone());
                        }}
                    >
                        {label}
                    </a>
                }
            }) }
        </div>
    }
}
