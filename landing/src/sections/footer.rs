use super::icons::{ICON_LEAF, Icon};
use econest::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let title = use_context::<SiteConfig>().unwrap_or_default().title;
    let copyright = format!("© 2025 {title}. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <Icon path=ICON_LEAF size="20" />
                            <span class="footer-title">{title}</span>
                        </div>
                        <p class="footer-tagline">"Smart composting for modern apartments."</p>
                    </div>
                    <FooterColumn
                        heading="Product"
                        links=&["How It Works", "Features", "FAQ"]
                    />
                    <FooterColumn
                        heading="Company"
                        links=&["About Us", "Contact", "Sustainability"]
                    />
                    <FooterColumn heading="Legal" links=&["Privacy Policy", "Terms of Service"] />
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                    <div class="footer-social">
                        <a href="#" class="footer-link">"Instagram"</a>
                        <a href="#" class="footer-link">"LinkedIn"</a>
                        <a href="#" class="footer-link">"Twitter"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-links">
                {links
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a href="#" class="footer-link">{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
