//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_query_map,
};

use giftbook::nav::{NavMachine, Page};
use giftbook::session::SessionState;
use giftbook::share::{LOCAL_PARAM, VIEW_PARAM, view_target};

use crate::pages::customize::CustomizePage;
use crate::pages::selection::SelectionPage;
use crate::pages::share::SharePage;
use crate::pages::view::{ErrorPage, ViewOnlyPage};
use crate::state::auth::AuthState;
use crate::state::search::SearchState;
use crate::state::share::ShareState;
use crate::state::view::ViewState;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Gift a Book"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GiftApp/>
            </Routes>
        </Router>
    }
}

/// The single-page gift flow. Resolves the session mode from the query
/// string once, provides every shared state context, and dispatches on the
/// nav machine's current page.
#[component]
fn GiftApp() -> impl IntoView {
    let query = use_query_map();
    // Parsed once at load; in-app navigation never re-enters view mode.
    let target = view_target(
        query.with_untracked(|q| q.get(VIEW_PARAM)),
        query.with_untracked(|q| q.get(LOCAL_PARAM)),
    );

    let nav = RwSignal::new(NavMachine::initial(target.is_some()));
    let session = RwSignal::new(SessionState::new());
    let search = RwSignal::new(SearchState::default());
    let share = RwSignal::new(ShareState::default());
    let view_state = RwSignal::new(ViewState { target, ..ViewState::default() });
    let auth = RwSignal::new(AuthState::default());

    provide_context(nav);
    provide_context(session);
    provide_context(search);
    provide_context(share);
    provide_context(view_state);
    provide_context(auth);

    init_identity(auth);

    view! {
        <main class="gift-app">
            {move || match nav.get().page() {
                Page::Selection => view! { <SelectionPage/> }.into_any(),
                Page::Customize => view! { <CustomizePage/> }.into_any(),
                Page::Share => view! { <SharePage/> }.into_any(),
                Page::ViewOnly => view! { <ViewOnlyPage/> }.into_any(),
                Page::Error => view! { <ErrorPage/> }.into_any(),
            }}
        </main>
    }
}

/// Sign in anonymously at startup. Failure is not fatal: the app degrades
/// to local-only mode with a generated id and sharing skips the remote
/// store.
fn init_identity(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::anonymous_session().await {
            Ok(user_id) => auth.update(|a| a.signed_in(user_id)),
            Err(err) => {
                log::warn!("anonymous sign-in failed; continuing local-only: {err}");
                auth.update(|a| a.local_fallback(uuid::Uuid::new_v4().to_string()));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    auth.update(|a| a.local_fallback(uuid::Uuid::new_v4().to_string()));
}
