//! 評価フォーム

use leptos::*;

use crate::models::RecipeId;
use crate::utils::log_trace::log_info_with_data;
use crate::AppContext;

const MAX_STARS: u8 = 5;

#[component]
pub fn RatingForm(recipe_id: RecipeId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let existing = ctx.store.with_value(|s| s.get_rating(recipe_id));

    let (rating, set_rating) = create_signal(existing.as_ref().map(|e| e.rating).unwrap_or(0.0));
    let (review, set_review) = create_signal(existing.and_then(|e| e.review).unwrap_or_default());
    let (saved_msg, set_saved_msg) = create_signal(false);

    let on_save = move |_| {
        if rating.get_untracked() <= 0.0 {
            return;
        }
        let review_text = review.get_untracked();
        let review = if review_text.trim().is_empty() { None } else { Some(review_text) };
        ctx.store.with_value(|s| s.set_rating(recipe_id, rating.get_untracked(), review));
        log_info_with_data(
            "ui-action",
            "評価を保存",
            serde_json::json!({ "recipe_id": recipe_id, "rating": rating.get_untracked() }),
        );
        set_saved_msg.set(true);
    };

    view! {
        <div class="rating-form">
            <h4>"評価"</h4>
            <div class="stars">
                {(1..=MAX_STARS).map(|star| {
                    let value = star as f64;
                    view! {
                        <button
                            class=move || { if rating.get() >= value { "star filled" } else { "star" } }
                            on:click=move |_| {
                                set_rating.set(value);
                                set_saved_msg.set(false);
                            }
                        >"★"</button>
                    }
                }).collect_view()}
            </div>
            <textarea
                placeholder="感想（任意）"
                prop:value=move || review.get()
                on:input=move |ev| {
                    set_review.set(event_target_value(&ev));
                    set_saved_msg.set(false);
                }
            ></textarea>
            <button class="save-rating" disabled=move || rating.get() <= 0.0 on:click=on_save>
                {move || if saved_msg.get() { "保存しました" } else { "評価を保存" }}
            </button>
        </div>
    }
}
