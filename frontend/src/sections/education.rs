use yew::prelude::*;

use crate::content::{CERTIFICATIONS, EDUCATION};
use crate::reveal::{use_reveal, use_reveal_batch, RevealOptions, VisualState};

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    let title = use_node_ref();
    let timeline = use_node_ref();
    let certificates = use_node_ref();

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    use_reveal_batch(
        timeline.clone(),
        ".education-card",
        RevealOptions::fade_up(40.0).duration(600.0).stagger(150.0),
        EDUCATION.len(),
    );
    use_reveal_batch(
        certificates.clone(),
        ".cert-card",
        RevealOptions::default()
            .from_state(VisualState::hidden().with_scale(0.9))
            .duration(400.0)
            .stagger(100.0)
            .start(0.85),
        CERTIFICATIONS.len(),
    );

    html! {
        <section id="education" class="section section-tinted">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow accent-green">{"Academic Background"}</p>
                    <h2 ref={title} class="section-title">
                        {"Education & "}<span class="gradient-text">{"Certifications"}</span>
                    </h2>
                </div>
                <div class="education-grid">
                    <div ref={timeline} class="education-timeline">
                        { for EDUCATION.iter().map(|edu| html! {
                            <div class="education-card glass">
                                <p class={classes!("mono", edu.accent.class())}>{edu.period}</p>
                                <h3>{edu.degree}</h3>
                                <p class="muted">{edu.institution}</p>
                                <p class="muted">{edu.description}</p>
                                <div class="badges">
                                    { for edu.achievements.iter().map(|a| html! {
                                        <span class={classes!("badge", edu.accent.class())}>{*a}</span>
                                    }) }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div>
                        <h3 class="cert-heading">{"Professional Certifications"}</h3>
                        <div ref={certificates} class="cert-grid">
                            { for CERTIFICATIONS.iter().map(|cert| html! {
                                <div class="cert-card glass">
                                    <p class="mono accent-purple">{cert.year}</p>
                                    <h4>{cert.name}</h4>
                                    <p class="muted">{cert.issuer}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
