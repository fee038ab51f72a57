//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Allfeat"</h1>
            <p class="subtitle">
                "The music industry's decentralized registry. "
                "Register, identify and track musical works on-chain."
            </p>
        </div>
    }
}
