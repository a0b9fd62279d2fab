use leptos::prelude::*;

use super::{
    avatar::Monogram,
    icons::{Icon, IconKind},
};
use crate::content::{LINKS, NAV_ITEMS, PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 border-b bg-background/80 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-3">
                <a href="#home" class="flex items-center gap-2 font-semibold">
                    <Monogram />
                    <span class="hidden sm:inline">{PROFILE.name}</span>
                </a>
                <nav class="hidden gap-6 md:flex">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-sm text-muted-foreground hover:text-foreground"
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <a
                        aria-label="GitHub"
                        href=LINKS.github
                        target="_blank"
                        rel="noreferrer"
                        class="rounded-md p-2 hover:bg-muted"
                    >
                        <Icon kind=IconKind::Github class="h-5 w-5" />
                    </a>
                    <a
                        aria-label="LinkedIn"
                        href=LINKS.linkedin
                        target="_blank"
                        rel="noreferrer"
                        class="rounded-md p-2 hover:bg-muted"
                    >
                        <Icon kind=IconKind::Linkedin class="h-5 w-5" />
                    </a>
                    <a aria-label="Email" href=LINKS.email class="rounded-md p-2 hover:bg-muted">
                        <Icon kind=IconKind::Mail class="h-5 w-5" />
                    </a>
                </div>
            </div>
        </header>
    }
}
