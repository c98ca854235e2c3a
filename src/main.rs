use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod scroll;
mod view_state;
mod components {
    pub mod button;
    pub mod cards;
    pub mod footer;
    pub mod nav;
    pub mod section_heading;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{home::Home, not_found::NotFound};
use scroll::ScrollListener;
use view_state::{ViewAction, ViewState};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let view = use_reducer_eq(ViewState::new);

    // One scroll listener for the lifetime of the app, removed on unmount
    {
        let dispatcher = view.dispatcher();
        use_effect_with_deps(move |_| {
            let listener = ScrollListener::attach(move |scroll_y| {
                dispatcher.dispatch(ViewAction::Scrolled(scroll_y));
            });

            move || drop(listener)
        }, ());
    }

    // The dispatcher never changes, so Nav only re-renders when the snapshot does
    let on_action = use_callback(
        |action: ViewAction, dispatcher| dispatcher.dispatch(action),
        view.dispatcher(),
    );

    html! {
        <BrowserRouter>
            <div class={classes!("app", view.theme_class())}>
                <Nav view={*view} on_action={on_action} />
                <Switch<Route> render={switch} />
            </div>

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                }

                .app {
                    --bg: #fafaf9;
                    --bg-alt: #f5f5f4;
                    --surface: #ffffff;
                    --surface-hover: #f5f5f4;
                    --border: #e7e5e4;
                    --border-strong: #d6d3d1;
                    --text: #292524;
                    --text-dim: #57534e;
                    --text-muted: #78716c;
                    --accent: #047857;
                    --nav-scrolled-bg: rgba(250, 250, 249, 0.9);
                    --legal-card-bg: rgba(255, 255, 255, 0.95);
                    --solution-bg: #ecfdf5;
                    --solution-border: #d1fae5;
                    --blob-green: rgba(5, 150, 105, 0.1);
                    --blob-amber: rgba(245, 158, 11, 0.05);
                    --gradient-text: linear-gradient(to right, #047857, #0d9488);
                    --shadow-card: 0 20px 25px rgba(231, 229, 228, 0.5);
                    --font-serif: Georgia, "Times New Roman", serif;

                    min-height: 100vh;
                    background: var(--bg);
                    color: var(--text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .app.dark {
                    --bg: #0c0a09;
                    --bg-alt: rgba(28, 25, 23, 0.5);
                    --surface: #1c1917;
                    --surface-hover: #292524;
                    --border: #292524;
                    --border-strong: #44403c;
                    --text: #f5f5f4;
                    --text-dim: #a8a29e;
                    --text-muted: #78716c;
                    --accent: #34d399;
                    --nav-scrolled-bg: rgba(28, 25, 23, 0.9);
                    --legal-card-bg: rgba(28, 25, 23, 0.95);
                    --solution-bg: rgba(6, 78, 59, 0.2);
                    --solution-border: rgba(6, 78, 59, 0.3);
                    --blob-green: rgba(6, 95, 70, 0.2);
                    --blob-amber: rgba(217, 119, 6, 0.1);
                    --gradient-text: linear-gradient(to right, #34d399, #5eead4);
                    --shadow-card: none;
                }

                .app ::selection {
                    background: rgba(16, 185, 129, 0.3);
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SafeStreet");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_is_the_root_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::NotFound.to_path(), "/404");
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
