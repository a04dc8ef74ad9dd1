use yew::prelude::*;

use crate::components::navigation::scroll_to_section;
use crate::content::{OWNER_NAME, OWNER_TITLE, SOCIAL_LINKS};
use crate::reveal::{use_reveal, Ease, Policy, RevealOptions};
use crate::scene::HeroScene;

fn intro(offset: f64, duration: f64, delay: f64) -> RevealOptions {
    RevealOptions::fade_up(offset)
        .duration(duration)
        .delay(delay)
        .ease(Ease::Power3Out)
        .policy(Policy::PlayOnce)
        .entrance()
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let title = use_node_ref();
    let subtitle = use_node_ref();
    let cta = use_node_ref();

    // Title, then subtitle half way through it, then the buttons
    use_reveal(title.clone(), intro(50.0, 1000.0, 0.0));
    use_reveal(subtitle.clone(), intro(30.0, 800.0, 500.0));
    use_reveal(cta.clone(), intro(20.0, 600.0, 1000.0));

    let go = |id: &'static str| Callback::from(move |_: MouseEvent| scroll_to_section(id));

    html! {
        <section id="home" class="hero">
            <HeroScene />
            <div class="hero-fade" />
            <div class="hero-content">
                <p class="eyebrow accent-blue">{"Hello, I'm"}</p>
                <h1 ref={title} class="hero-title">
                    <span class="gradient-text">{OWNER_NAME}</span>
                    <br />
                    <span>{OWNER_TITLE}</span>
                </h1>
                <p ref={subtitle} class="hero-subtitle">
                    {"I craft immersive digital experiences with modern web technology. Specializing in "}
                    <span class="accent-pink">{"Rust"}</span>{", "}
                    <span class="accent-blue">{"WebAssembly"}</span>{" and "}
                    <span class="accent-purple">{"Yew"}</span>{"."}
                </p>
                <div ref={cta} class="hero-actions">
                    <button class="btn btn-primary" onclick={go("projects")}>{"View My Work"}</button>
                    <button class="btn btn-outline" onclick={go("contact")}>{"Get In Touch"}</button>
                </div>
                <img class="hero-photo" src="/Anushka.jpg" alt={OWNER_NAME} />
                <div class="hero-social">
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <a class="glass-pill" href={social.href} target="_blank" rel="noopener noreferrer" aria-label={social.label}>
                            {social.label}
                        </a>
                    }) }
                </div>
            </div>
            <button class="scroll-down glass-pill" aria-label="Scroll to about section" onclick={go("about")}>
                {"↓"}
            </button>
        </section>
    }
}
