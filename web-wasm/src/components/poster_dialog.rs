//! Poster detail dialog
//!
//! Overlay with the product carousel and the current product's details.
//! Drag gestures and arrow keys both drive the shared carousel state
//! machine; the settle timer and the global key listener are removed on
//! teardown.

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use poster_gallery_common::{Carousel, LikeSet, Phase, PosterCollection};

#[component]
pub fn PosterDialog<FL, FC>(
    collection: PosterCollection,
    likes: ReadSignal<LikeSet>,
    on_like: FL,
    on_close: FC,
) -> impl IntoView
where
    FL: Fn(String) + 'static + Clone + Send,
    FC: Fn() + 'static + Clone + Send,
{
    let products = collection.products.clone();
    let len = products.len();

    let (carousel, set_carousel) = signal(Carousel::new(len));
    let settle_timer = StoredValue::new_local(None::<Timeout>);

    let schedule_settle = move || {
        let ms = carousel.with_untracked(|c| c.config().settle_ms);
        let timer = Timeout::new(ms, move || {
            set_carousel.update(|c| c.settle_complete());
        });
        settle_timer.set_value(Some(timer));
    };

    // Gesture wiring. The track element's width bounds the drag offset.
    let track = NodeRef::<leptos::html::Div>::new();

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let width = track
            .get_untracked()
            .map(|el| el.offset_width() as f64)
            .unwrap_or(0.0);
        set_carousel.update(|c| {
            c.drag_start(
                ev.client_x() as f64,
                ev.client_y() as f64,
                ev.time_stamp(),
                width,
            );
        });
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        set_carousel.update(|c| {
            c.drag_move(ev.client_x() as f64, ev.client_y() as f64);
        });
    };

    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        let settled = set_carousel
            .try_update(|c| c.drag_end(ev.client_x() as f64, ev.time_stamp()))
            .flatten();
        if settled.is_some() {
            schedule_settle();
        }
    };

    let step = move |forward: bool| {
        let moved = set_carousel
            .try_update(|c| if forward { c.next() } else { c.prev() })
            .unwrap_or(false);
        if moved {
            schedule_settle();
        }
    };

    // Arrow keys navigate while the dialog is mounted, Escape closes
    let key_listener = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::KeyboardEvent)>>);
    {
        let on_close = on_close.clone();
        let closure = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            match ev.key().as_str() {
                "ArrowRight" if len > 1 => step(true),
                "ArrowLeft" if len > 1 => step(false),
                "Escape" => on_close(),
                _ => {}
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        let window = web_sys::window().unwrap();
        let _ = window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        key_listener.set_value(Some(closure));
    }

    on_cleanup(move || {
        key_listener.update_value(|slot| {
            if let Some(closure) = slot.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
        settle_timer.update_value(|t| {
            t.take();
        });
    });

    let track_style = move || {
        carousel.with(|c| {
            let base = -(c.index() as f64) * 100.0;
            let transition = if c.phase() == Phase::Dragging {
                "none"
            } else {
                "transform 300ms ease"
            };
            format!(
                "transform: translateX(calc({}% + {}px)); transition: {};",
                base,
                c.offset(),
                transition
            )
        })
    };

    let slides = products
        .iter()
        .map(|p| {
            view! {
                <div class="carousel-slide">
                    <img src=p.image.clone() alt=p.title.clone() draggable="false" />
                </div>
            }
        })
        .collect_view();

    let dots = move || {
        (0..len)
            .map(|i| {
                view! {
                    <button
                        class="carousel-dot"
                        class:active=move || carousel.with(|c| c.index() == i)
                        on:click=move |_| {
                            let moved = set_carousel
                                .try_update(|c| c.go_to(i))
                                .unwrap_or(false);
                            if moved {
                                schedule_settle();
                            }
                        }
                    />
                }
            })
            .collect_view()
    };

    let detail_products = products.clone();
    let detail = move || {
        let index = carousel.with(|c| c.index());
        let product = detail_products[index].clone();
        let liked = {
            let id = product.id.clone();
            move || likes.with(|l| l.contains(&id))
        };
        let liked_class = liked.clone();
        let on_like = on_like.clone();
        let like_id = product.id.clone();

        view! {
            <div class="product-detail">
                <div class="product-heading">
                    <h3>{product.title.clone()}</h3>
                    <button
                        class="like-button"
                        class:liked=liked_class
                        on:click=move |_| on_like(like_id.clone())
                    >
                        {move || if liked() { "♥" } else { "♡" }}
                    </button>
                </div>

                <div class="product-pricing">
                    <span class="poster-price">{product.price.clone()}</span>
                    {product
                        .original_price
                        .clone()
                        .map(|original| view! { <s class="original-price">{original}</s> })}
                    {product
                        .badge
                        .clone()
                        .map(|badge| view! { <span class="poster-badge">{badge}</span> })}
                </div>

                <p class="product-description">{product.description.clone()}</p>

                <dl class="product-facts">
                    <dt>"Created"</dt>
                    <dd>{product.creation_date.clone()}</dd>
                    <dt>"Location"</dt>
                    <dd>{product.location.clone()}</dd>
                    <dt>"Stock"</dt>
                    <dd>
                        {product.stock_number.clone()}
                        {if product.in_stock {
                            format!(" · {} available", product.stock_quantity)
                        } else {
                            " · sold out".to_string()
                        }}
                    </dd>
                </dl>

                <div class="product-materials">
                    <h4>"Materials"</h4>
                    <ul>
                        {product
                            .materials
                            .iter()
                            .map(|m| view! { <li>{m.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="product-sizes">
                    <h4>"Sizes"</h4>
                    <ul>
                        {product
                            .sizes
                            .iter()
                            .map(|s| view! { <li>{s.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>

                {product
                    .variations
                    .iter()
                    .map(|variation| {
                        view! {
                            <div class="product-variation">
                                <h4>{variation.name.clone()}</h4>
                                <ul>
                                    {variation
                                        .options
                                        .iter()
                                        .map(|o| view! { <li>{o.clone()}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    let close_backdrop = on_close.clone();
    let close_button = on_close.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| close_backdrop()>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <header class="dialog-header">
                    <div>
                        <h2>{collection.title.clone()}</h2>
                        <p class="text-muted">
                            {collection.series.clone()} " · " {collection.year.clone()}
                        </p>
                    </div>
                    <button class="dialog-close" on:click=move |_| close_button()>
                        "×"
                    </button>
                </header>

                <div
                    class="carousel"
                    node_ref=track
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_up
                    on:pointerleave=on_pointer_up
                >
                    <div class="carousel-track" style=track_style>
                        {slides}
                    </div>
                    <Show when=move || { len > 1 }>
                        <div class="carousel-dots">{dots}</div>
                    </Show>
                </div>

                {detail}

                <footer class="dialog-footer">
                    <p class="text-muted">
                        {collection.technique.clone()} " · " {collection.dimensions.clone()}
                    </p>
                    <p class="text-muted">
                        {collection
                            .tags
                            .iter()
                            .map(|t| format!("#{}", t))
                            .collect::<Vec<_>>()
                            .join(" ")}
                    </p>
                </footer>
            </div>
        </div>
    }
}
