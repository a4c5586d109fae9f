//! Root application component: location signal, navigation and layout.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{footer::Footer, header::Header};
use crate::config::DeliveryConfig;
use crate::content::pages::{ABOUT, HELP, LEGAL, PRIVACY, SHIPPING, TERMS};
use crate::content::site::{DOCUMENT_DESCRIPTION, DOCUMENT_TITLE};
use crate::pages::{
    categories::CategoriesPage, contact::ContactPage, faq::FaqPage, home::HomePage, info::InfoPageView,
    not_found::NotFoundPage, product::ProductPage, quote::QuotePage,
};
use crate::router::{Location, Route};
use crate::util::browser;

/// Fragment navigation handle provided to the component tree.
///
/// Components call [`Navigator::go`] instead of writing the hash themselves;
/// the resulting `hashchange` is what updates the location signal.
#[derive(Clone, Copy)]
pub struct Navigator(Callback<String>);

impl Navigator {
    pub fn new(navigate: impl Fn(String) + Send + Sync + 'static) -> Self {
        Self(Callback::new(navigate))
    }

    pub fn go(&self, path: impl Into<String>) {
        self.0.run(path.into());
    }
}

/// Root application component.
///
/// Provides the delivery config, the current location and the navigator,
/// then renders the page for the current route between header and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let delivery = DeliveryConfig::from_build_env();
    if delivery.is_remote() {
        log::info!("lead delivery: emailjs");
    } else {
        log::info!("lead delivery: mailto fallback");
    }
    provide_context(delivery);

    let location = RwSignal::new(Location::parse(&browser::current_hash()));
    provide_context(location);
    provide_context(Navigator::new(|path| browser::set_hash(&path)));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            location.set(Location::parse(&browser::current_hash()));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text=DOCUMENT_TITLE/>
        <Meta name="description" content=DOCUMENT_DESCRIPTION/>
        <div class="min-h-screen flex flex-col text-slate-900">
            <Header/>
            <main class="flex-1">
                <RouterView/>
            </main>
            <Footer/>
        </div>
    }
}

/// Renders the page for the current route. Query-only changes keep the
/// mounted page.
#[component]
fn RouterView() -> impl IntoView {
    let location = expect_context::<RwSignal<Location>>();
    let route = Memo::new(move |_| location.with(|loc| loc.route.clone()));

    Effect::new(move |_| {
        log::debug!("route: {:?}", route.get());
    });

    move || match route.get() {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::Categories => view! { <CategoriesPage/> }.into_any(),
        Route::Help => view! { <InfoPageView page=&HELP/> }.into_any(),
        Route::About => view! { <InfoPageView page=&ABOUT/> }.into_any(),
        Route::Privacy => view! { <InfoPageView page=&PRIVACY/> }.into_any(),
        Route::Shipping => view! { <InfoPageView page=&SHIPPING/> }.into_any(),
        Route::Terms => view! { <InfoPageView page=&TERMS/> }.into_any(),
        Route::Legal => view! { <InfoPageView page=&LEGAL/> }.into_any(),
        Route::Faq => view! { <FaqPage/> }.into_any(),
        Route::Contact => view! { <ContactPage/> }.into_any(),
        Route::Quote => view! { <QuotePage/> }.into_any(),
        Route::Product(id) => view! { <ProductPage id=id/> }.into_any(),
        Route::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
