//! Name heading with the symbol-to-letter reveal and a blinking caret.

use content::{NameReveal, RevealConfig};
use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Renders `h1#name` followed by `span.cursor`.
///
/// The reveal starts when the component mounts and runs to completion exactly
/// once; later prop changes do not restart it.
#[component]
pub fn NameHeading(name: String, reveal: RevealConfig) -> Element {
    let mut shown = use_signal(String::new);

    use_hook(move || {
        spawn(async move {
            let mut animation = NameReveal::new(&name, &reveal);
            let mut rng = SmallRng::seed_from_u64(random_seed());

            while !animation.is_finished() {
                tick_delay(reveal.interval_ms).await;
                if let Some(text) = animation.tick(&mut rng) {
                    shown.set(text);
                }
            }
        })
    });

    rsx! {
        h1 { id: "name", "{shown}" }
        span { class: "cursor" }
    }
}

async fn tick_delay(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(target_arch = "wasm32")]
fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn random_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
