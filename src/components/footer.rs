use yew::prelude::*;

use crate::content::{FOOTER_COLUMNS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="nav-logo-mark">{"🛡"}</span>
                            <span>{"SafeStreet"}</span>
                        </div>
                        <p>
                            {"Bridging the gap between humans and dogs. Based on the guidelines for Prevention and Management of Dog-Human Conflicts."}
                        </p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.heading} class="footer-column">
                            <h4>{column.heading}</h4>
                            <ul>
                                { for column.links.iter().map(|label| html! {
                                    <li key={*label}><a href="#">{*label}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Pawsitive Coexistence. All rights reserved."}</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|label| html! {
                            <a key={*label} href="#">{*label}</a>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                    padding: 3rem 0;
                    transition: background 0.3s ease;
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    font-family: var(--font-serif);
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--text);
                }

                .footer-brand p {
                    max-width: 24rem;
                    color: var(--text-dim);
                }

                .footer-column h4 {
                    color: var(--text);
                    margin: 0 0 1rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }

                .footer-column a,
                .footer-social a {
                    color: var(--text-dim);
                    text-decoration: none;
                }

                .footer-column a:hover,
                .footer-social a:hover {
                    color: var(--accent);
                }

                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }

                .footer-social {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .footer-bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
