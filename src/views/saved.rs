//! お気に入り・閲覧履歴ビュー

use leptos::*;

use crate::catalog::recipes_by_ids;
use crate::components::RecipeGrid;
use crate::AppContext;

#[component]
pub fn SavedView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let saved_recipes = move || {
        let ids = ctx.saved.get();
        ctx.catalog.with_value(|recipes| recipes_by_ids(recipes, &ids))
    };

    view! {
        <div class="saved-view">
            <h2>"お気に入り"</h2>
            {move || view! {
                <RecipeGrid recipes=saved_recipes() empty_message="☆ を押すとここに保存されます" />
            }}
        </div>
    }
}

#[component]
pub fn HistoryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let (history, set_history) = create_signal(ctx.store.with_value(|s| s.get_history()));

    let on_clear = move |_: web_sys::MouseEvent| {
        ctx.store.with_value(|s| s.clear_history());
        set_history.set(Vec::new());
    };

    view! {
        <div class="history-view">
            <div class="view-header">
                <h2>"最近見たレシピ"</h2>
                {move || (!history.get().is_empty()).then(|| view! {
                    <button class="clear-history" on:click=on_clear>"履歴を消去"</button>
                })}
            </div>
            {move || {
                let ids = history.get();
                let recipes = ctx.catalog.with_value(|recipes| recipes_by_ids(recipes, &ids));
                view! { <RecipeGrid recipes=recipes empty_message="まだ閲覧したレシピはありません" /> }
            }}
        </div>
    }
}
