use leptos::prelude::*;

use super::{SCHOOL_LOCATION, SCHOOL_NAME};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <h1 class="hero-title">{SCHOOL_NAME}</h1>
                    <p class="hero-subtitle">{SCHOOL_LOCATION}</p>
                    <p class="hero-description">
                        "Membentuk Generasi Qurani yang Berakhlak Mulia, Cerdas, dan Berprestasi"
                    </p>
                    <div class="hero-actions">
                        <a href="#daftar" class="btn btn-primary">
                            "Daftar Sekarang"
                        </a>
                    </div>
                </div>
            </div>
            <div class="hero-wave" aria-hidden="true">
                <svg viewBox="0 0 1440 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M0 120L60 110C120 100 240 80 360 70C480 60 600 60 720 65C840 70 960 80 1080 85C1200 90 1320 90 1380 90L1440 90V120H0Z"
                        fill="currentColor"
                    />
                </svg>
            </div>
        </section>
    }
}
