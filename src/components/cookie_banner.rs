//! Cookie同意バナー

use leptos::*;

use crate::AppContext;

#[component]
pub fn CookieBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    // 同意・拒否のどちらかを回答済みなら表示しない
    let answered = ctx.store.with_value(|s| s.cookie_consent_answer()).is_some();
    let (visible, set_visible) = create_signal(!answered);

    let answer = move |accepted: bool| {
        ctx.store.with_value(|s| s.set_cookie_consent(accepted));
        set_visible.set(false);
    };

    view! {
        {move || visible.get().then(|| view! {
            <div class="cookie-banner">
                <p>"お気に入りや履歴をこのブラウザに保存します。"</p>
                <div class="cookie-actions">
                    <button class="accept" on:click=move |_| answer(true)>"同意する"</button>
                    <button class="decline" on:click=move |_| answer(false)>"同意しない"</button>
                </div>
            </div>
        })}
    }
}
