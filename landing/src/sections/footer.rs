use leptos::prelude::*;

use super::{SCHOOL_LOCATION, SCHOOL_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    let copyright = format!("© {year} {SCHOOL_NAME} {SCHOOL_LOCATION}. All rights reserved.");
    let title = format!("{SCHOOL_NAME} {SCHOOL_LOCATION}");
    view! {
        <footer class="footer">
            <div class="container">
                <h3 class="footer-title">{title}</h3>
                <p class="footer-address">"Jl. Margahayu Raya, Bandung, Jawa Barat"</p>
                <div class="footer-links">
                    <a href="tel:+62812345678" class="footer-link">"Telepon"</a>
                    <a href="mailto:info@alhaqmargahayu.sch.id" class="footer-link">"Email"</a>
                    <a href="https://instagram.com/alhaqmargahayu" target="_blank" class="footer-link">
                        "Instagram"
                    </a>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
