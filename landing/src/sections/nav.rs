use leptos::prelude::*;

use super::{SCHOOL_LOCATION, SCHOOL_NAME};

#[component]
pub fn Nav() -> impl IntoView {
    let brand = format!("{SCHOOL_NAME} {SCHOOL_LOCATION}");
    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <span class="nav-brand">{brand}</span>
                <div class="nav-links">
                    <a href="#profil" class="nav-link">"Profil"</a>
                    <a href="#daftar" class="nav-link nav-link-cta">"Pendaftaran"</a>
                </div>
            </div>
        </nav>
    }
}
