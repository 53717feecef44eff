//! レシピカードコンポーネント

use leptos::*;

use crate::models::Recipe;
use crate::AppContext;

/// レシピカード
/// クリックで詳細を開く。右上のボタンでお気に入り切り替え
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    /// 冷蔵庫との一致率（冷蔵庫画面でのみ表示）
    #[prop(optional)] match_percentage: Option<u8>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let id = recipe.id;
    let is_saved = move || ctx.saved.get().contains(&id);

    let match_badge = match_percentage.map(|p| {
        let class = if p >= 80 { "match-high" } else if p >= 50 { "match-mid" } else { "match-low" };
        view! { <span class=format!("match-badge {}", class)>{p}"%"</span> }
    });

    view! {
        <div class="recipe-card" on:click=move |_| ctx.open_recipe(id)>
            <div class="recipe-card-header">
                <h4>{recipe.title.clone()}</h4>
                <button
                    class=move || if is_saved() { "save-btn saved" } else { "save-btn" }
                    title=move || if is_saved() { "お気に入り解除" } else { "お気に入りに追加" }
                    on:click=move |ev| {
                        // カード本体のクリックを発火させない
                        ev.stop_propagation();
                        ctx.toggle_saved(id);
                    }
                >
                    {move || if is_saved() { "★" } else { "☆" }}
                </button>
            </div>
            <div class="recipe-meta">
                <span class="cuisine">{recipe.cuisine.clone()}</span>
                <span class="course">{recipe.course.label()}</span>
                <span class="time">{recipe.time.clone()}</span>
                <span class=format!("difficulty difficulty-{}", recipe.difficulty.as_str().to_lowercase())>
                    {recipe.difficulty.label()}
                </span>
                {match_badge}
            </div>
        </div>
    }
}

/// レシピ一覧グリッド
#[component]
pub fn RecipeGrid(recipes: Vec<Recipe>, #[prop(optional)] empty_message: Option<&'static str>) -> impl IntoView {
    if recipes.is_empty() {
        return view! {
            <p class="empty-state">{empty_message.unwrap_or("レシピがありません")}</p>
        }
        .into_view();
    }

    view! {
        <div class="recipe-grid">
            {recipes.into_iter().map(|r| view! { <RecipeCard recipe=r /> }).collect_view()}
        </div>
    }
    .into_view()
}
