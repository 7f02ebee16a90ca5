//! Auto-rotating testimonial carousel

use std::time::Duration;

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Time each testimonial stays on screen
const ROTATE_EVERY: Duration = Duration::from_secs(6);

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "We moved three campuses over a single weekend. Monday morning attendance just worked.",
        author: "Amara Okafor",
        role: "Principal, Oakridge Academy",
    },
    Testimonial {
        quote: "Parents pay fees online now. Our office stopped chasing paper slips.",
        author: "Daniel Brooks",
        role: "Bursar, Riverside Primary",
    },
    Testimonial {
        quote: "Teachers publish grades in minutes instead of an afternoon of spreadsheets.",
        author: "Lena Fischer",
        role: "Head of Academics, Northfield District",
    },
    Testimonial {
        quote: "The trial gave us everything. We signed up before it ended.",
        author: "Priya Raman",
        role: "Director, Maple Learning Centre",
    },
];

/// Move `delta` slides from `current`, wrapping at both ends
pub fn wrap_step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta).rem_euclid(len)) as usize
}

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let active = RwSignal::new(0usize);
    let paused = RwSignal::new(false);
    let len = TESTIMONIALS.len();

    #[cfg(not(feature = "ssr"))]
    {
        match set_interval_with_handle(
            move || {
                if !paused.get_untracked() {
                    active.try_update(|i| *i = wrap_step(*i, 1, len));
                }
            },
            ROTATE_EVERY,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => leptos::logging::warn!("testimonial rotation disabled: {:?}", err),
        }
    }
    #[cfg(feature = "ssr")]
    let _ = ROTATE_EVERY;

    view! {
        <section
            class="py-20 px-4"
            aria-roledescription="carousel"
            aria-label="What schools say"
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
            on:focusin=move |_| paused.set(true)
            on:focusout=move |_| paused.set(false)
        >
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-12">
                    "Loved by school offices"
                </h2>

                <div class="relative min-h-48">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, t)| view! {
                            <figure
                                class="testimonial"
                                class:testimonial-active=move || active.get() == index
                                aria-hidden=move || (active.get() != index).to_string()
                            >
                                <Icon name=icons::QUOTE class="w-8 h-8 mx-auto mb-4 opacity-40"/>
                                <blockquote class="text-xl text-theme-primary leading-relaxed">
                                    {t.quote}
                                </blockquote>
                                <figcaption class="mt-6">
                                    <span class="font-semibold text-theme-primary">{t.author}</span>
                                    <span class="block text-sm text-theme-secondary">{t.role}</span>
                                </figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center justify-center gap-4 mt-8">
                    <button
                        class="btn-icon"
                        aria-label="Previous testimonial"
                        on:click=move |_| active.update(|i| *i = wrap_step(*i, -1, len))
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                    </button>
                    <div class="flex gap-2">
                        {(0..len)
                            .map(|index| view! {
                                <button
                                    class="carousel-dot"
                                    class:carousel-dot-active=move || active.get() == index
                                    aria-label=format!("Show testimonial {}", index + 1)
                                    on:click=move |_| active.set(index)
                                ></button>
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="btn-icon"
                        aria-label="Next testimonial"
                        on:click=move |_| active.update(|i| *i = wrap_step(*i, 1, len))
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5"/>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_forward_past_end() {
        assert_eq!(wrap_step(3, 1, 4), 0);
        assert_eq!(wrap_step(1, 1, 4), 2);
    }

    #[test]
    fn test_wraps_backward_past_start() {
        assert_eq!(wrap_step(0, -1, 4), 3);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        assert_eq!(wrap_step(0, 1, 0), 0);
    }
}
