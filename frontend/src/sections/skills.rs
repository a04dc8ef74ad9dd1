use yew::prelude::*;

use crate::content::{Accent, SKILL_CATEGORIES};
use crate::reveal::{use_reveal, use_reveal_batch, Ease, RevealOptions, VisualState};

/// Fill animation for the bar at `skill_index` of category `category_index`.
pub fn skill_bar_options(level: u8, category_index: usize, skill_index: usize) -> RevealOptions {
    RevealOptions::default()
        .from_state(VisualState::RESTING.with_width(0.0))
        .to_state(VisualState::RESTING.with_width(level as f64))
        .duration(1200.0)
        .delay(category_index as f64 * 100.0 + skill_index as f64 * 50.0)
        .start(0.85)
        .ease(Ease::Power2Out)
}

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub name: &'static str,
    pub level: u8,
    pub accent: Accent,
    pub category_index: usize,
    pub skill_index: usize,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let bar = use_node_ref();
    use_reveal_batch(
        bar.clone(),
        ".skill-progress",
        skill_bar_options(props.level, props.category_index, props.skill_index),
        0,
    );

    html! {
        <div ref={bar} class="skill-bar">
            <div class="skill-label">
                <span>{props.name}</span>
                <span class="muted mono">{format!("{}%", props.level)}</span>
            </div>
            <div class="skill-track">
                // Resting width comes from --level so teardown leaves the bar full
                <div
                    class={classes!("skill-progress", props.accent.class())}
                    style={format!("--level: {}%", props.level)}
                />
            </div>
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let title = use_node_ref();
    let cards = use_node_ref();

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    use_reveal_batch(
        cards.clone(),
        ".skill-card",
        RevealOptions::default()
            .from_state(VisualState::hidden().with_y(40.0).with_scale(0.95))
            .duration(600.0)
            .stagger(100.0),
        SKILL_CATEGORIES.len(),
    );

    html! {
        <section id="skills" class="section section-tinted">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow accent-blue">{"My Expertise"}</p>
                    <h2 ref={title} class="section-title">
                        {"Skills & "}<span class="gradient-text">{"Technologies"}</span>
                    </h2>
                    <p class="muted">{"A toolkit built over years of hands-on experience"}</p>
                </div>
                <div ref={cards} class="skill-grid">
                    { for SKILL_CATEGORIES.iter().enumerate().map(|(category_index, category)| html! {
                        <div class="skill-card glass">
                            <div class="skill-card-header">
                                <h3>{category.title}</h3>
                                <span class={classes!("badge", category.accent.class())}>
                                    {format!("{} skills", category.skills.len())}
                                </span>
                            </div>
                            { for category.skills.iter().enumerate().map(|(skill_index, skill)| html! {
                                <SkillBar
                                    name={skill.name}
                                    level={skill.level}
                                    accent={category.accent}
                                    {category_index}
                                    {skill_index}
                                />
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_from_zero_to_level() {
        let options = skill_bar_options(82, 0, 0);
        assert_eq!(options.from.width_pct, Some(0.0));
        assert_eq!(options.to.width_pct, Some(82.0));
        assert_eq!(options.duration_ms, 1200.0);
        assert_eq!(options.start, 0.85);
    }

    #[test]
    fn delay_grows_with_category_and_position() {
        assert_eq!(skill_bar_options(50, 0, 0).delay_ms, 0.0);
        assert_eq!(skill_bar_options(50, 2, 3).delay_ms, 350.0);
        assert!(skill_bar_options(50, 1, 0).delay_ms > skill_bar_options(50, 0, 1).delay_ms);
    }

    #[test]
    fn bars_keep_full_opacity() {
        let options = skill_bar_options(70, 1, 1);
        assert_eq!(options.from.opacity, 1.0);
        assert_eq!(options.to.opacity, 1.0);
    }
}
