//! レシピ詳細ビュー

use leptos::*;

use crate::catalog::find_recipe;
use crate::components::{CookingSteps, RatingForm, RecipeGrid};
use crate::config::SIMILAR_RECIPE_LIMIT;
use crate::models::{RecipeId, ViewMode};
use crate::utils::{get_similar_recipes, match_recipe};
use crate::AppContext;

#[component]
pub fn RecipeDetail(id: RecipeId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let recipe = ctx.catalog.with_value(|recipes| find_recipe(recipes, id).cloned());

    let Some(recipe) = recipe else {
        return view! {
            <div class="recipe-detail">
                <p class="status error">"レシピが見つかりません"</p>
                <button on:click=move |_| ctx.set_view_mode.set(ViewMode::Browse)>"一覧に戻る"</button>
            </div>
        }
        .into_view();
    };

    let similar = ctx
        .catalog
        .with_value(|recipes| get_similar_recipes(&recipe, recipes, SIMILAR_RECIPE_LIMIT));
    let is_saved = move || ctx.saved.get().contains(&id);

    // 冷蔵庫にある材料に印を付ける
    let recipe_for_match = recipe.clone();
    let ingredient_list = move || {
        let matched = match_recipe(&recipe_for_match, &ctx.pantry.get());
        recipe_for_match
            .ingredients
            .iter()
            .map(|ingredient| {
                let have = matched.have.contains(ingredient);
                view! {
                    <li class={if have { "ingredient have" } else { "ingredient" }}>
                        {if have { "✓ " } else { "" }}
                        {ingredient.clone()}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="recipe-detail">
            <div class="detail-header">
                <button class="back-btn" on:click=move |_| ctx.set_view_mode.set(ViewMode::Browse)>"← 一覧"</button>
                <h2>{recipe.title.clone()}</h2>
                <button
                    class=move || if is_saved() { "save-btn saved" } else { "save-btn" }
                    on:click=move |_| ctx.toggle_saved(id)
                >
                    {move || if is_saved() { "★ お気に入り" } else { "☆ お気に入りに追加" }}
                </button>
            </div>

            <div class="recipe-meta">
                <span class="cuisine">{recipe.cuisine.clone()}</span>
                <span class="course">{recipe.course.label()}</span>
                <span class="time">{recipe.time.clone()}</span>
                <span class="difficulty">{recipe.difficulty.label()}</span>
                {recipe.servings.map(|s| view! { <span class="servings">{s}"人分"</span> })}
            </div>

            {recipe.video_url.clone().map(|url| view! {
                <a class="video-link" href=url target="_blank" rel="noopener">"動画を見る"</a>
            })}

            <div class="detail-body">
                <section class="ingredients">
                    <h3>"材料"</h3>
                    <ul>{ingredient_list}</ul>
                </section>

                {(!recipe.substitutions.is_empty()).then(|| view! {
                    <section class="substitutions">
                        <h3>"代替食材"</h3>
                        <ul>
                            {recipe.substitutions.iter().map(|s| view! {
                                <li>{s.ingredient.clone()} " → " {s.alternative.clone()}</li>
                            }).collect_view()}
                        </ul>
                    </section>
                })}

                {recipe.nutrition.clone().map(|n| view! {
                    <section class="nutrition">
                        <h3>"栄養成分（1人前）"</h3>
                        <dl>
                            <dt>"カロリー"</dt><dd>{n.calories}" kcal"</dd>
                            <dt>"たんぱく質"</dt><dd>{n.protein}</dd>
                            <dt>"炭水化物"</dt><dd>{n.carbs}</dd>
                            <dt>"脂質"</dt><dd>{n.fat}</dd>
                        </dl>
                    </section>
                })}
            </div>

            <section class="cooking">
                <h3>"作り方"</h3>
                <CookingSteps recipe=recipe.clone() />
            </section>

            <RatingForm recipe_id=id />

            <section class="similar">
                <h3>"似ているレシピ"</h3>
                <RecipeGrid recipes=similar />
            </section>
        </div>
    }
    .into_view()
}
