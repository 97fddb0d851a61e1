//! Poster gallery grid
//!
//! Owns the catalog, the pagination window, the like set, and the open
//! detail dialog. Batches land behind a short artificial delay and the
//! appended cards carry a one-shot entry animation; both timers and the
//! scroll observer are torn down with the component.

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use poster_gallery_common::{
    LikeSet, Normalizer, PaginationConfig, Paginator, PosterCollection,
};

use crate::api::shopify::{self, ShopifyConfig};
use crate::components::poster_card::PosterCard;
use crate::components::poster_dialog::PosterDialog;
use crate::scroll::SentinelObserver;

#[component]
pub fn ArtGallery() -> impl IntoView {
    let (collections, set_collections) = signal(Vec::<PosterCollection>::new());
    let (fetching, set_fetching) = signal(true);
    let (paginator, set_paginator) = signal(Paginator::new(PaginationConfig::default(), 0));
    let (likes, set_likes) = signal(LikeSet::new());
    let (selected, set_selected) = signal(None::<PosterCollection>);

    // Catalog load on mount; falls back to the built-in collections
    spawn_local(async move {
        let catalog =
            shopify::load_catalog(&ShopifyConfig::default(), &Normalizer::default()).await;

        let mut pager = Paginator::new(PaginationConfig::default(), catalog.len());
        pager.load_initial();

        set_collections.set(catalog);
        set_paginator.set(pager);
        set_fetching.set(false);
    });

    // Pending batch/animation timers. Dropping a Timeout cancels it, so
    // clearing these on unmount stops them firing against a gone view.
    let batch_timer = StoredValue::new_local(None::<Timeout>);
    let animation_timer = StoredValue::new_local(None::<Timeout>);

    let load_more = move || {
        let started = set_paginator.try_update(|p| p.begin_load()).unwrap_or(false);
        if !started {
            return;
        }

        let config = paginator.with_untracked(|p| p.config().clone());
        let timer = Timeout::new(config.load_delay_ms, move || {
            set_paginator.update(|p| {
                p.complete_load();
            });
            let animation = Timeout::new(config.entry_animation_ms, move || {
                set_paginator.update(|p| p.finish_animation());
            });
            animation_timer.set_value(Some(animation));
        });
        batch_timer.set_value(Some(timer));
    };

    // Sentinel below the grid; the observer fires load_more when it
    // scrolls near the viewport
    let sentinel = NodeRef::<leptos::html::Div>::new();
    let observer = StoredValue::new_local(None::<SentinelObserver>);

    Effect::new(move |_| {
        if observer.with_value(|o| o.is_some()) {
            return;
        }
        let Some(el) = sentinel.get() else {
            return;
        };
        match SentinelObserver::new("200px", load_more) {
            Ok(obs) => {
                obs.observe(&el);
                observer.set_value(Some(obs));
            }
            Err(err) => console::error!("failed to observe scroll sentinel:", format!("{:?}", err)),
        }
    });

    on_cleanup(move || {
        observer.update_value(|o| {
            o.take();
        });
        batch_timer.update_value(|t| {
            t.take();
        });
        animation_timer.update_value(|t| {
            t.take();
        });
    });

    view! {
        <section class="gallery">
            <div class="gallery-intro">
                <h2>"Poster Gallery"</h2>
                <p class="text-muted">
                    "Contemporary poster designs by Santiago Camiro"
                </p>
            </div>

            <Show
                when=move || !fetching.get()
                fallback=|| view! { <div class="gallery-loading">"Loading posters…"</div> }
            >
                <div class="poster-grid">
                    <For
                        each=move || {
                            let visible = paginator.with(|p| p.visible());
                            collections
                                .get()
                                .into_iter()
                                .take(visible)
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(_, collection)| collection.id.clone()
                        children=move |(index, collection)| {
                            view! {
                                <PosterCard
                                    collection=collection
                                    entering=Signal::derive(move || {
                                        paginator.with(|p| p.is_entering(index))
                                    })
                                    likes=likes
                                    on_like=move |id: String| {
                                        set_likes.update(|l| {
                                            l.toggle(&id);
                                        });
                                    }
                                    on_open=move |c: PosterCollection| set_selected.set(Some(c))
                                />
                            }
                        }
                    />
                </div>

                <Show when=move || paginator.with(|p| p.is_loading())>
                    <div class="batch-loading">"Loading more…"</div>
                </Show>

                <Show when=move || {
                    !fetching.get() && paginator.with(|p| !p.has_more() && p.total() > 0)
                }>
                    <p class="gallery-end text-muted">"You have seen the full catalog"</p>
                </Show>
            </Show>

            <div class="scroll-sentinel" node_ref=sentinel></div>

            {move || {
                selected
                    .get()
                    .map(|collection| {
                        view! {
                            <PosterDialog
                                collection=collection
                                likes=likes
                                on_like=move |id: String| {
                                    set_likes.update(|l| {
                                        l.toggle(&id);
                                    });
                                }
                                on_close=move || set_selected.set(None)
                            />
                        }
                    })
            }}
        </section>
    }
}
