use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted off. Let's get you back."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to Crestovix Studio"}
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
                        color: white;
                        background: #0f172a;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 5rem;
                        margin: 0;
                    }
                    .forward-link {
                        color: #93c5fd;
                    }
                "#}
            </style>
        </div>
    }
}
