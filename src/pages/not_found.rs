use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"This street doesn't exist. Let's get you back somewhere safe."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to SafeStreet"}
            </Link<Route>>

            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-family: var(--font-serif);
                    font-size: 3rem;
                    margin: 0;
                    color: var(--text);
                }

                .not-found p {
                    color: var(--text-dim);
                    margin-bottom: 1rem;
                }

                .not-found .btn {
                    display: inline-flex;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    color: #ffffff;
                    text-decoration: none;
                    background: linear-gradient(to right, #047857, #0f766e);
                }
                "#}
            </style>
        </div>
    }
}
