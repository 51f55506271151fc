use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::navbar::Navbar;
use crate::config::Config;
use crate::pages::{admin::AdminPage, helper::HelperPage};

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(ApiClient::new(&config));

    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/helper" /> } />
                    <Route path="/helper" view=HelperPage />
                    <Route path="/admin" view=AdminPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Page not found"</h1>
            <p><a href="/helper">"Back to the helper dashboard"</a></p>
        </div>
    }
}
