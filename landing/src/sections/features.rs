use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="profil" class="features">
            <div class="container">
                <div class="features-grid">
                    <FeatureCard
                        icon="📚"
                        title="Kurikulum Terpadu"
                        description="Perpaduan kurikulum nasional dengan pendidikan Islam yang komprehensif"
                    />
                    <FeatureCard
                        icon="🕌"
                        title="Tahfidz Al-Quran"
                        description="Program hafalan Al-Quran dengan metode pembelajaran yang menyenangkan"
                    />
                    <FeatureCard
                        icon="🎓"
                        title="Tenaga Pendidik Berkualitas"
                        description="Guru-guru berpengalaman dan berdedikasi tinggi"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
