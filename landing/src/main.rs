// Sekolah Islam Alhaq Margahayu landing page, Leptos 0.8 CSR.

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <RegistrationSection />
        </main>
        <Footer />
    }
}
