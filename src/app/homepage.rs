use leptos::prelude::*;

use super::{
    components::{FadeIn, LinkButton},
    footer::Footer,
    header::Header,
    icons::{Icon, IconKind},
    sections::{ExperienceTimeline, ProjectGallery, SkillsGrid},
};
use crate::{
    content::{href_or_placeholder, EXPERIENCE, LINKS, PROFILE, PROJECTS, SKILLS},
    style::Variant,
};

/// The whole page. Owns the document click listener used for smooth
/// in-page scrolling; it is removed again when the page unmounts.
#[component]
pub fn Portfolio() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    install_smooth_scroll();

    view! {
        <div class="min-h-screen bg-background text-foreground antialiased">
            <Header />
            <main>
                <Hero />
                <SkillsGrid skills=SKILLS />
                <ProjectGallery projects=PROJECTS />
                <ExperienceTimeline entries=EXPERIENCE />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn install_smooth_scroll() {
    use super::browser::BrowserDocument;
    use crate::scroll::SmoothScroll;

    match SmoothScroll::install(BrowserDocument::current()) {
        Ok(guard) => {
            let guard = StoredValue::new_local(guard);
            on_cleanup(move || guard.dispose());
        }
        Err(err) => log::warn!("smooth scrolling disabled: {err}"),
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative overflow-hidden pb-20 pt-24">
            <div class="mx-auto max-w-6xl px-6">
                <FadeIn>
                    <p class="text-sm uppercase tracking-widest text-primary/80">"Portfolio"</p>
                    <h1 class="mt-2 text-4xl font-extrabold tracking-tight sm:text-5xl">
                        {PROFILE.name}
                    </h1>
                    <p class="mt-3 text-lg text-muted-foreground">{PROFILE.tagline}</p>
                    <p class="mt-5 max-w-3xl text-balance text-muted-foreground">
                        {PROFILE.intro}
                    </p>
                    <div class="mt-6 flex flex-wrap items-center gap-3">
                        <LinkButton href=href_or_placeholder(LINKS.resume) class="gap-2">
                            <Icon kind=IconKind::Download class="h-4 w-4" />
                            " Resume"
                        </LinkButton>
                        <LinkButton href="#projects" variant=Variant::Secondary class="gap-2">
                            "View Projects "
                            <Icon kind=IconKind::ArrowRight class="h-4 w-4" />
                        </LinkButton>
                    </div>
                </FadeIn>
            </div>
            // decorative gradient
            <div class="pointer-events-none absolute inset-x-0 top-0 -z-10 h-64 bg-gradient-to-b from-primary/10 to-transparent" />
        </section>
    }
}
