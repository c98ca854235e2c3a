use yew::prelude::*;

use crate::components::button::Button;
use crate::content::NAV_LINKS;
use crate::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub view: ViewState,
    pub on_action: Callback<ViewAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { view, on_action } = props;

    let toggle_theme = on_action.reform(|_: MouseEvent| ViewAction::ToggleTheme);

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(ViewAction::ToggleMenu);
        })
    };

    // Links keep their default action so the page still jumps to the anchor
    let close_menu = on_action.reform(|_: MouseEvent| ViewAction::CloseMenu);

    html! {
        <nav class={classes!("top-nav", view.nav_class())}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-mark">{"🛡"}</span>
                    <span>{"SafeStreet"}</span>
                </a>

                <div class="nav-desktop">
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.name} href={link.href()} class="nav-link">
                                {link.name}
                            </a>
                        }) }
                    </div>
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme.clone()}
                        aria-label="Toggle theme"
                    >
                        {view.theme_glyph()}
                    </button>
                    <Button primary={true} class={classes!("nav-download")}>{"Download App"}</Button>
                </div>

                <div class="nav-mobile-controls">
                    <button
                        class="theme-toggle"
                        onclick={toggle_theme}
                        aria-label="Toggle theme"
                    >
                        {view.theme_glyph()}
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        {view.menu_glyph()}
                    </button>
                </div>
            </div>

            {
                if view.is_menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.name}
                                    href={link.href()}
                                    class="mobile-menu-link"
                                    onclick={close_menu.clone()}
                                >
                                    {link.name}
                                </a>
                            }) }
                            <div class="mobile-menu-download">
                                <Button primary={true} class={classes!("full-width")}>{"Download App"}</Button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: var(--nav-scrolled-bg);
                    backdrop-filter: blur(12px);
                    border-bottom-color: var(--border);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--text);
                    text-decoration: none;
                }

                .nav-logo-mark {
                    color: var(--accent);
                }

                .nav-desktop {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: var(--text-dim);
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .mobile-menu-link:hover {
                    color: var(--accent);
                }

                .theme-toggle,
                .burger-menu {
                    background: none;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem;
                    font-size: 1.25rem;
                    line-height: 1;
                    color: var(--text-dim);
                    cursor: pointer;
                }

                .theme-toggle:hover {
                    background: var(--surface-hover);
                }

                .nav-download {
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    box-shadow: none;
                }

                .nav-mobile-controls {
                    display: none;
                    align-items: center;
                    gap: 1rem;
                }

                .mobile-menu {
                    display: none;
                    background: var(--bg);
                    border-bottom: 1px solid var(--border);
                    padding: 0.5rem 0.75rem 0.75rem;
                    animation: slideDown 0.2s ease-out;
                }

                .mobile-menu-link {
                    display: block;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.375rem;
                    color: var(--text-dim);
                    font-weight: 500;
                    text-decoration: none;
                }

                .mobile-menu-download {
                    margin-top: 1rem;
                    padding: 0 0.75rem;
                }

                @keyframes slideDown {
                    from { transform: translateY(-1.25rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }

                    .nav-mobile-controls,
                    .mobile-menu {
                        display: flex;
                    }

                    .mobile-menu {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(view: ViewState, on_action: &Callback<ViewAction>) -> NavProps {
        NavProps { view, on_action: on_action.clone() }
    }

    #[test]
    fn props_unchanged_while_snapshot_and_callback_are_shared() {
        let on_action = Callback::from(|_: ViewAction| ());
        assert!(props(ViewState::new(), &on_action) == props(ViewState::new(), &on_action));

        let mut scrolled = ViewState::new();
        scrolled.on_scroll(30.0);
        assert!(props(ViewState::new(), &on_action) != props(scrolled, &on_action));
    }

    #[test]
    fn rebuilt_callback_counts_as_a_prop_change() {
        let first = Callback::from(|_: ViewAction| ());
        let second = Callback::from(|_: ViewAction| ());
        assert!(props(ViewState::new(), &first) != props(ViewState::new(), &second));
    }
}
