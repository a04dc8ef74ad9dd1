use web_sys::HtmlElement;
use yew::prelude::*;

use crate::content::PROJECTS;
use crate::device::DeviceCapabilities;
use crate::reveal::{use_reveal, use_reveal_batch, RevealOptions, VisualState};

const MAX_TILT_DEG: f64 = 10.0;

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` over a card
/// at `(left, top)` sized `width` by `height`.
pub fn tilt(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = ((x - left) / width - 0.5).clamp(-0.5, 0.5);
    let dy = ((y - top) / height - 0.5).clamp(-0.5, 0.5);
    (-dy * MAX_TILT_DEG, dx * MAX_TILT_DEG)
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub index: usize,
    pub tilt_enabled: bool,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let surface = use_node_ref();
    let angles = use_state_eq(|| None::<(f64, f64)>);
    let Some(project) = PROJECTS.get(props.index) else {
        return html! {};
    };

    let onmousemove = {
        let (surface, angles) = (surface.clone(), angles.clone());
        let enabled = props.tilt_enabled;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            if let Some(el) = surface.cast::<HtmlElement>() {
                let rect = el.get_bounding_client_rect();
                angles.set(Some(tilt(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                )));
            }
        })
    };
    let onmouseleave = {
        let angles = angles.clone();
        Callback::from(move |_: MouseEvent| angles.set(None))
    };

    let style = match *angles {
        Some((rx, ry)) => format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            rx, ry
        ),
        None => "transform: none".to_string(),
    };
    let shown = if project.featured { 4 } else { 3 };

    // The reveal animates .project-card, the tilt goes on the inner surface
    html! {
        <div class={classes!("project-card", project.featured.then(|| "featured"))}>
            <div
                ref={surface}
                class={classes!("project-surface", "glass", angles.is_some().then(|| "hovered"), project.accent.class())}
                {style}
                {onmousemove}
                {onmouseleave}
            >
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <div class="badges">
                        { for project.tech_stack.iter().take(shown).map(|tech| html! {
                            <span class="badge">{*tech}</span>
                        }) }
                    </div>
                    <div class="project-links">
                        <a href={project.demo_url} target="_blank" rel="noopener noreferrer">{"Demo"}</a>
                        <a href={project.repo_url} target="_blank" rel="noopener noreferrer">{"Code"}</a>
                    </div>
                </div>
                <div class="project-body">
                    <h3 class={project.accent.class()}>{project.title}</h3>
                    <p class="muted">{project.description}</p>
                    <div class="project-stats muted mono">
                        <span>{format!("★ {}", project.stats.stars)}</span>
                        <span>{format!("⑂ {}", project.stats.forks)}</span>
                        <span>{format!("◉ {}", project.stats.views)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let title = use_node_ref();
    let grid = use_node_ref();
    let tilt_enabled = use_memo(|_| DeviceCapabilities::detect().pointer_effects_enabled(), ());

    use_reveal(title.clone(), RevealOptions::fade_up(50.0));
    use_reveal_batch(
        grid.clone(),
        ".project-card",
        RevealOptions::default()
            .from_state(VisualState::hidden().with_y(40.0).with_scale(0.95))
            .duration(600.0)
            .stagger(100.0),
        PROJECTS.len(),
    );

    html! {
        <section id="projects" class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow accent-orange">{"My Work"}</p>
                    <h2 ref={title} class="section-title">
                        {"Featured "}<span class="gradient-text">{"Projects"}</span>
                    </h2>
                    <p class="muted">{"A showcase of my best work, from concept to deployment"}</p>
                </div>
                <div ref={grid} class="project-grid">
                    { for (0..PROJECTS.len()).map(|index| html! {
                        <ProjectCard {index} tilt_enabled={*tilt_enabled} />
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
    fn centre_has_no_tilt() {
        assert_eq!(tilt(150.0, 100.0, 100.0, 50.0, 100.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_tilt_by_half_the_maximum() {
        let (rx, ry) = tilt(200.0, 50.0, 100.0, 50.0, 100.0, 100.0);
        assert_eq!(ry, 5.0);
        assert_eq!(rx, 5.0);
    }

    #[test]
    fn pointer_outside_is_clamped() {
        let (rx, ry) = tilt(10_000.0, -10_000.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!((rx, ry), (5.0, 5.0));
    }

    #[test]
    fn empty_card_does_not_tilt() {
        assert_eq!(tilt(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
    }
}
