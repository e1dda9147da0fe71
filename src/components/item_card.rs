//! Item Card Component

use leptos::prelude::*;

use crate::render::Card;

/// One result card: badge, linked title, meta line, source
#[component]
pub fn ItemCard(card: Card) -> impl IntoView {
    view! {
        <article class="card">
            <span class="badge" class:EMA=card.badge_is_ema>{card.badge}</span>
            <a class="title" href=card.href target="_blank" rel="noopener noreferrer">
                {card.title}
            </a>
            <div class="meta">{card.meta}</div>
            <div class="source">{card.source}</div>
        </article>
    }
}
