use yew::prelude::*;

use crate::content::{HIGHLIGHTS, STATS};
use crate::reveal::{use_reveal, use_reveal_batch, RevealOptions, VisualState};

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let title = use_node_ref();
    let text = use_node_ref();
    let cards = use_node_ref();

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    use_reveal(text.clone(), RevealOptions::fade_up(30.0));
    use_reveal_batch(
        cards.clone(),
        ".highlight-card",
        RevealOptions::default()
            .from_state(VisualState::hidden().with_y(40.0).with_scale(0.95))
            .duration(600.0)
            .stagger(150.0),
        HIGHLIGHTS.len(),
    );

    html! {
        <section id="about" class="section">
            <div class="section-inner about-grid">
                <div>
                    <p class="eyebrow accent-pink">{"About Me"}</p>
                    <h2 ref={title} class="section-title">
                        {"Crafting Digital"}<br /><span class="gradient-text">{"Experiences"}</span>
                    </h2>
                    <div ref={text} class="about-text">
                        <p>
                            {"I'm a full-stack developer with over 5 years of experience building modern \
                              web applications. It started as curiosity about how the web works and grew \
                              into a love for building exceptional digital experiences."}
                        </p>
                        <p>
                            {"When I'm not coding you'll find me exploring new technologies, contributing \
                              to open source or sharing what I learn with the developer community."}
                        </p>
                    </div>
                    <div class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <p class={classes!("stat-value", stat.accent.class())}>{stat.value}</p>
                                <p class="muted">{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>
                <div ref={cards} class="highlight-grid">
                    { for HIGHLIGHTS.iter().map(|item| html! {
                        <div class={classes!("highlight-card", "glass", item.accent.class())}>
                            <h3>{item.title}</h3>
                            <p class="muted">{item.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
