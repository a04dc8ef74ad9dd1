use yew::prelude::*;

use crate::content::{Experience, EXPERIENCES};
use crate::reveal::{use_reveal, use_reveal_batch, RevealOptions, VisualState};

#[derive(Properties, PartialEq)]
pub struct ExperienceCardProps {
    pub index: usize,
}

#[function_component(ExperienceCard)]
pub fn experience_card(props: &ExperienceCardProps) -> Html {
    let expanded = use_state(|| false);
    let Some(Experience {
        role,
        company,
        location,
        period,
        description,
        tech_stack,
        accent,
    }) = EXPERIENCES.get(props.index)
    else {
        return html! {};
    };

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let side = if props.index % 2 == 0 { "timeline-left" } else { "timeline-right" };

    html! {
        <div class={classes!("experience-card", side)}>
            <span class={classes!("timeline-dot", accent.class())} />
            <div
                class={classes!("glass", "experience-body", (*expanded).then(|| "expanded"))}
                data-interactive="true"
                onclick={toggle}
            >
                <div class="experience-header">
                    <div>
                        <h3>{*role}</h3>
                        <p class={accent.class()}>{*company}</p>
                    </div>
                    <span class={classes!("chevron", (*expanded).then(|| "open"))}>{"⌄"}</span>
                </div>
                <div class="experience-meta muted">
                    <span>{*period}</span>
                    <span>{*location}</span>
                </div>
                <div class="experience-details">
                    <p class="muted">{*description}</p>
                    <div class="badges">
                        { for tech_stack.iter().map(|tech| html! {
                            <span class={classes!("badge", accent.class())}>{*tech}</span>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let title = use_node_ref();
    let timeline = use_node_ref();

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    // Cards slide in from alternating sides
    use_reveal_batch(
        timeline.clone(),
        ".experience-card",
        RevealOptions::default()
            .from_state(VisualState::hidden().with_x(-30.0))
            .mirror_x()
            .duration(600.0)
            .stagger(150.0),
        EXPERIENCES.len(),
    );

    html! {
        <section id="experience" class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow accent-purple">{"Career Path"}</p>
                    <h2 ref={title} class="section-title">
                        {"Work "}<span class="gradient-text">{"Experience"}</span>
                    </h2>
                    <p class="muted">{"My professional journey through innovative companies and challenging projects"}</p>
                </div>
                <div ref={timeline} class="timeline">
                    <div class="timeline-line" />
                    { for (0..EXPERIENCES.len()).map(|index| html! { <ExperienceCard {index} /> }) }
                </div>
            </div>
        </section>
    }
}
