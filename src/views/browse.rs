//! レシピ一覧ビュー

use leptos::*;

use crate::components::RecipeGrid;
use crate::AppContext;

#[component]
pub fn BrowseView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let filtered = create_memo(move |_| {
        let filter = ctx.filter.get();
        ctx.catalog.with_value(|recipes| filter.apply(recipes.clone()))
    });

    view! {
        <div class="browse-view">
            <p class="result-count">
                {move || format!("{}件 / 全{}件", filtered.get().len(), ctx.catalog.with_value(|r| r.len()))}
            </p>
            {move || view! {
                <RecipeGrid recipes=filtered.get() empty_message="条件に合うレシピがありません" />
            }}
        </div>
    }
}
