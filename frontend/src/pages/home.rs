use yew::prelude::*;

use crate::components::{custom_cursor::CustomCursor, footer::Footer, navigation::Navigation};
use crate::sections::{
    about::AboutSection, contact::ContactSection, education::EducationSection,
    experience::ExperienceSection, hero::HeroSection, projects::ProjectsSection,
    skills::SkillsSection,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="portfolio">
            <CustomCursor />
            <Navigation />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ExperienceSection />
                <EducationSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
            <style>
                {r#"
                    :root {
                        --bg: #0a0a12;
                        --card: rgba(255, 255, 255, 0.04);
                        --muted: #9a9aae;
                        --pink: #ff3399;
                        --blue: #00d4ff;
                        --green: #00ff88;
                        --purple: #9966ff;
                        --orange: #ff9900;
                    }
                    html { scroll-behavior: smooth; }
                    body { margin: 0; background: var(--bg); color: #f2f2f7; font-family: 'Inter', sans-serif; }
                    .muted { color: var(--muted); }
                    .mono { font-family: 'JetBrains Mono', monospace; }
                    .accent-pink { color: var(--pink); }
                    .accent-blue { color: var(--blue); }
                    .accent-green { color: var(--green); }
                    .accent-purple { color: var(--purple); }
                    .accent-orange { color: var(--orange); }
                    .gradient-text {
                        background: linear-gradient(90deg, var(--pink), var(--purple), var(--blue));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .glass {
                        background: var(--card);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        backdrop-filter: blur(12px);
                        padding: 1.5rem;
                    }
                    .glass-pill {
                        display: inline-flex;
                        padding: 0.6rem 1rem;
                        border-radius: 999px;
                        background: var(--card);
                        color: var(--muted);
                        text-decoration: none;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .glass-pill:hover { color: var(--pink); box-shadow: 0 0 16px rgba(255, 51, 153, 0.4); }
                    .btn {
                        padding: 0.8rem 1.6rem;
                        border-radius: 8px;
                        font-size: 1rem;
                        cursor: pointer;
                        border: 1px solid transparent;
                    }
                    .btn-primary { background: var(--pink); color: white; box-shadow: 0 0 20px rgba(255, 51, 153, 0.4); }
                    .btn-primary:disabled { opacity: 0.6; cursor: default; }
                    .btn-outline { background: transparent; color: #f2f2f7; border-color: rgba(255, 255, 255, 0.2); }
                    .btn-block { width: 100%; }
                    .badge {
                        display: inline-block;
                        font-size: 0.75rem;
                        padding: 0.2rem 0.6rem;
                        border-radius: 999px;
                        border: 1px solid currentColor;
                        margin: 0 0.4rem 0.4rem 0;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0; left: 0; right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled { padding: 0.75rem 0; background: rgba(10, 10, 18, 0.85); backdrop-filter: blur(16px); }
                    .nav-content { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
                    .nav-logo { font-size: 1.5rem; font-weight: 700; text-decoration: none; color: var(--pink); }
                    .nav-links { display: flex; gap: 0.25rem; }
                    .nav-link, .mobile-nav-link { color: var(--muted); text-decoration: none; padding: 0.5rem 1rem; border-radius: 6px; }
                    .nav-link.active, .mobile-nav-link.active { color: var(--pink); }
                    .nav-hire { background: transparent; color: var(--pink); border: 1px solid rgba(255, 51, 153, 0.5); border-radius: 6px; padding: 0.5rem 1rem; cursor: pointer; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: #f2f2f7; }
                    .mobile-menu { display: flex; flex-direction: column; margin: 0.5rem 1rem 0; padding: 1rem 0.5rem; border-radius: 12px; background: rgba(10, 10, 18, 0.95); }

                    .section { position: relative; padding: 8rem 0; }
                    .section-tinted { background: rgba(255, 255, 255, 0.02); }
                    .section-inner { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
                    .section-heading { text-align: center; margin-bottom: 4rem; }
                    .section-title { font-size: 3rem; font-weight: 700; margin: 0.5rem 0 1rem; }
                    .eyebrow { font-family: 'JetBrains Mono', monospace; font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; }

                    .hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; text-align: center; }
                    .hero-scene { position: absolute; inset: 0; width: 100%; height: 100%; }
                    .hero-fade { position: absolute; inset: 0; pointer-events: none; background: linear-gradient(to bottom, transparent, rgba(10, 10, 18, 0.5), var(--bg)); }
                    .hero-content { position: relative; z-index: 1; max-width: 960px; padding: 0 1.5rem; }
                    .hero-title { font-size: 5rem; line-height: 1.05; margin: 1rem 0; }
                    .hero-subtitle { font-size: 1.25rem; color: var(--muted); max-width: 40rem; margin: 0 auto 2rem; }
                    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .hero-photo { width: 8rem; height: 8rem; border-radius: 50%; object-fit: cover; border: 2px solid var(--pink); margin-top: 2rem; }
                    .hero-social { display: flex; gap: 0.75rem; justify-content: center; flex-wrap: wrap; margin-top: 1.5rem; }
                    .scroll-down { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); cursor: pointer; }

                    .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
                    .about-text p { color: var(--muted); font-size: 1.1rem; line-height: 1.7; }
                    .stats { display: flex; gap: 2rem; margin-top: 1.5rem; }
                    .stat-value { font-size: 2.5rem; font-weight: 700; margin: 0; }
                    .highlight-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

                    .skill-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                    .skill-card-header { display: flex; justify-content: space-between; align-items: center; }
                    .skill-bar { margin-top: 1rem; }
                    .skill-label { display: flex; justify-content: space-between; font-size: 0.9rem; margin-bottom: 0.4rem; }
                    .skill-track { height: 0.5rem; border-radius: 999px; background: rgba(255, 255, 255, 0.08); overflow: hidden; }
                    .skill-progress { height: 100%; border-radius: 999px; width: var(--level); background: currentColor; box-shadow: 0 0 10px currentColor; }

                    .timeline { position: relative; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .timeline-line { position: absolute; left: 50%; top: 0; bottom: 0; width: 1px; background: linear-gradient(var(--pink), var(--purple), var(--blue)); }
                    .experience-card { position: relative; }
                    .timeline-left { padding-right: 2rem; }
                    .timeline-right { padding-left: 2rem; grid-column-start: 2; }
                    .timeline-dot { position: absolute; top: 2rem; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: currentColor; }
                    .timeline-left .timeline-dot { right: -0.4rem; }
                    .timeline-right .timeline-dot { left: -0.4rem; }
                    .experience-body { cursor: pointer; }
                    .experience-header { display: flex; justify-content: space-between; }
                    .experience-meta { display: flex; gap: 1rem; font-size: 0.85rem; }
                    .experience-details { max-height: 0; opacity: 0; overflow: hidden; transition: all 0.3s ease; }
                    .experience-body.expanded .experience-details { max-height: 24rem; opacity: 1; padding-top: 1rem; }
                    .chevron { transition: transform 0.3s ease; }
                    .chevron.open { transform: rotate(180deg); }

                    .education-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .education-timeline { display: flex; flex-direction: column; gap: 1.5rem; }
                    .cert-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

                    .project-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                    .project-card.featured { grid-column: span 2; grid-row: span 2; }
                    .project-surface { padding: 0; overflow: hidden; height: 100%; transition: transform 0.3s ease-out, box-shadow 0.5s; }
                    .project-surface.hovered { box-shadow: 0 0 24px currentColor; }
                    .project-media { position: relative; }
                    .project-media img { width: 100%; height: 12rem; object-fit: cover; display: block; }
                    .project-card.featured .project-media img { height: 20rem; }
                    .project-media .badges { position: absolute; left: 1rem; bottom: 0.5rem; }
                    .project-links { position: absolute; top: 1rem; right: 1rem; display: flex; gap: 0.5rem; opacity: 0; transition: opacity 0.3s; }
                    .project-surface:hover .project-links { opacity: 1; }
                    .project-links a { color: white; }
                    .project-body { padding: 1.5rem; }
                    .project-stats { display: flex; gap: 1rem; font-size: 0.8rem; }

                    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .contact-side { display: flex; flex-direction: column; gap: 1.5rem; }
                    .contact-card form { display: flex; flex-direction: column; gap: 0.5rem; }
                    .contact-card input, .contact-card textarea {
                        background: rgba(0, 0, 0, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        color: inherit;
                        padding: 0.75rem;
                        font: inherit;
                        resize: none;
                    }
                    .contact-card input:focus, .contact-card textarea:focus { outline: none; border-color: var(--pink); }
                    .field-error { color: #ff5c7a; font-size: 0.85rem; margin: 0; }
                    .form-failure { color: #ff5c7a; }
                    .form-success { color: var(--green); }
                    .contact-info a { color: inherit; text-decoration: none; }
                    .availability { display: flex; align-items: center; gap: 1rem; }
                    .pulse-dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #22c55e; animation: pulse 2s infinite; }
                    @keyframes pulse { 50% { opacity: 0.4; } }

                    .footer { padding: 3rem 1.5rem; border-top: 1px solid rgba(255, 255, 255, 0.08); }
                    .footer-content, .footer-bottom { max-width: 1200px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; gap: 2rem; flex-wrap: wrap; }
                    .footer-bottom { margin-top: 2rem; padding-top: 2rem; border-top: 1px solid rgba(255, 255, 255, 0.08); color: var(--muted); font-size: 0.85rem; }
                    .footer-links, .footer-social { display: flex; gap: 1.5rem; flex-wrap: wrap; }
                    .footer-link, .footer-social a { color: var(--muted); text-decoration: none; }

                    .cursor-ring, .cursor-dot { position: fixed; top: 0; left: 0; pointer-events: none; z-index: 9999; opacity: 0; will-change: transform; }
                    .cursor-ring { width: 2rem; height: 2rem; border-radius: 50%; border: 2px solid var(--pink); mix-blend-mode: difference; transition: opacity 0.1s, width 0.1s, height 0.1s; }
                    .cursor-ring.grow { width: 3rem; height: 3rem; }
                    .cursor-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: var(--pink); transition: opacity 0.1s; }
                    .cursor-ring.visible, .cursor-dot.visible { opacity: 1; }

                    @media (max-width: 768px) {
                        .nav-links, .nav-hire { display: none; }
                        .burger-menu { display: block; }
                        .hero-title { font-size: 3rem; }
                        .section-title { font-size: 2.25rem; }
                        .about-grid, .skill-grid, .timeline, .education-grid, .contact-grid { grid-template-columns: 1fr; }
                        .timeline-line, .timeline-dot { display: none; }
                        .timeline-left, .timeline-right { padding: 0; grid-column-start: auto; }
                        .project-grid { grid-template-columns: 1fr; }
                        .project-card.featured { grid-column: auto; grid-row: auto; }
                    }
                "#}
            </style>
        </div>
    }
}
