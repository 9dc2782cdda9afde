//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage,
    forgot_password::{EsqueciSenhaPage, RedefinirSenhaPage},
    login::LoginPage,
    profile::PerfilPage,
    register::CadastroPage,
    settings::ConfiguracoesPage,
    transactions::TransacoesPage,
};
use crate::state::{session::SessionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, wires the transport events
/// to the shell, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/fluxvision-web.css"/>
        <Title text="FluxVision"/>

        <Router>
            <SessionBoot/>
            <ToastHost/>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("cadastro") view=CadastroPage/>
                <Route path=StaticSegment("esqueci-senha") view=EsqueciSenhaPage/>
                <Route path=StaticSegment("redefinir-senha") view=RedefinirSenhaPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("transacoes") view=TransacoesPage/>
                    <Route path=StaticSegment("configuracoes") view=ConfiguracoesPage/>
                    <Route path=StaticSegment("perfil") view=PerfilPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Invisible component that runs once under the router: installs the
/// transport event handlers and kicks off the startup session check.
///
/// The transport itself never navigates; it emits an unauthorized event
/// and this is the single place that translates it into routing.
#[component]
fn SessionBoot() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let session = expect_context::<RwSignal<SessionState>>();
        let toasts = expect_context::<RwSignal<ToastState>>();
        let navigate = use_navigate();

        crate::net::events::on_error(move |message| {
            toasts.update(|t| t.error(message));
        });

        crate::net::events::on_unauthorized(move || {
            // Persisted credentials are already gone (transport side);
            // reset the in-memory session and send the user to login.
            session.update(|s| {
                s.user = None;
                s.authenticated = false;
                s.loading = false;
            });
            navigate("/login", NavigateOptions::default());
        });

        session.set(SessionState::restore_from_storage());
        leptos::task::spawn_local(async move {
            crate::state::session::check_session(session).await;
        });
    }
}
