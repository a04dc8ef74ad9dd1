use chrono::{Datelike, Local};
use yew::prelude::*;

use super::navigation::scroll_to_section;
use crate::content::{NAV_ITEMS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let nav_link = |id: &'static str, label: &'static str, class: &'static str| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(id);
        });
        html! { <a href={format!("#{}", id)} {class} {onclick}>{label}</a> }
    };

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-brand">
                    {nav_link("home", "<DEV/>", "nav-logo")}
                    <p>{"Building digital experiences that matter."}</p>
                </div>
                <nav class="footer-links">
                    { for NAV_ITEMS.iter().map(|item| nav_link(item.id, item.label, "footer-link")) }
                </nav>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().take(3).map(|social| html! {
                        <a href={social.href} target="_blank" rel="noopener noreferrer" aria-label={social.label}>
                            {social.label}
                        </a>
                    }) }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} All rights reserved.", year)}</p>
                <p>{"Made with Rust, Yew & WebAssembly"}</p>
            </div>
        </footer>
    }
}
