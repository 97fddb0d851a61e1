//! One gallery card

use leptos::prelude::*;

use poster_gallery_common::{LikeSet, PosterCollection};

#[component]
pub fn PosterCard<FL, FO>(
    collection: PosterCollection,
    entering: Signal<bool>,
    likes: ReadSignal<LikeSet>,
    on_like: FL,
    on_open: FO,
) -> impl IntoView
where
    FL: Fn(String) + 'static + Clone + Send,
    FO: Fn(PosterCollection) + 'static + Clone + Send,
{
    let id = collection.id.clone();
    let base_likes = collection.likes;

    let is_liked = {
        let id = id.clone();
        move || likes.with(|l| l.contains(&id))
    };
    let like_count = {
        let id = id.clone();
        move || base_likes + likes.with(|l| l.contains(&id)) as u32
    };

    let is_liked_class = is_liked.clone();
    let open_collection = collection.clone();

    view! {
        <article
            class="poster-card"
            class:entering=move || entering.get()
            on:click=move |_| on_open(open_collection.clone())
        >
            <div class="poster-image">
                <img src=collection.main_image.clone() alt=collection.title.clone() />
                {collection
                    .products
                    .first()
                    .and_then(|p| p.badge.clone())
                    .map(|badge| view! { <span class="poster-badge">{badge}</span> })}
            </div>

            <div class="poster-info">
                <h3>{collection.title.clone()}</h3>
                <p class="text-muted">{collection.technique.clone()}</p>

                <div class="poster-meta">
                    <span class="poster-price">{collection.price.clone()}</span>
                    <button
                        class="like-button"
                        class:liked=is_liked_class
                        on:click={
                            let id = id.clone();
                            move |ev| {
                                // the card click underneath opens the dialog
                                ev.stop_propagation();
                                on_like(id.clone());
                            }
                        }
                    >
                        {move || if is_liked() { "♥" } else { "♡" }}
                        <span class="like-count">{like_count}</span>
                    </button>
                </div>
            </div>
        </article>
    }
}
