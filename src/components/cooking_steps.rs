//! 調理モードコンポーネント

use leptos::*;

use crate::cooking::CookingSession;
use crate::models::Recipe;

/// 手順を1つずつ表示する
#[component]
pub fn CookingSteps(recipe: Recipe) -> impl IntoView {
    let session = create_rw_signal(CookingSession::new(&recipe));

    view! {
        <div class="cooking-steps">
            <div class="progress-section">
                <div class="progress-bar">
                    <div class="progress-fill" style=move || format!("width: {}%", session.get().progress())></div>
                </div>
                <span class="progress-text">
                    {move || {
                        let s = session.get();
                        format!("手順 {} / {}", (s.index() + 1).min(s.total()), s.total())
                    }}
                </span>
            </div>

            <p class="current-step">
                {move || session.get().current_step().unwrap_or("手順がありません").to_string()}
            </p>

            <div class="step-nav">
                <button
                    disabled=move || session.get().is_first()
                    on:click=move |_| session.update(|s| s.prev())
                >"← 前へ"</button>
                <button
                    disabled=move || session.get().is_last()
                    on:click=move |_| session.update(|s| s.next())
                >"次へ →"</button>
            </div>

            <ol class="step-list">
                {recipe.instructions.iter().enumerate().map(|(i, step)| view! {
                    <li
                        class=move || if session.get().index() == i { "step active" } else { "step" }
                        on:click=move |_| session.update(|s| s.go_to(i))
                    >
                        {step.clone()}
                    </li>
                }).collect_view()}
            </ol>
        </div>
    }
}
