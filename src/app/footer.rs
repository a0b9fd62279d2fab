use leptos::prelude::*;

use super::{
    components::LinkButton,
    icons::{Icon, IconKind},
};
use crate::{
    content::{copyright_year, LINKS, PROFILE},
    style::{Size, Variant},
};

#[component]
pub fn Footer() -> impl IntoView {
    let link_class = "gap-2 inline-flex items-center";
    view! {
        <footer class="border-t py-10">
            <div class="mx-auto max-w-6xl px-6">
                <div class="flex flex-col items-center justify-between gap-4 md:flex-row">
                    <p class="text-sm text-muted-foreground">
                        {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.name)}
                    </p>
                    <div class="flex items-center gap-2">
                        <LinkButton
                            href=LINKS.github
                            variant=Variant::Ghost
                            size=Size::Sm
                            link_class=link_class
                        >
                            <Icon kind=IconKind::Github class="h-4 w-4" />
                            "GitHub"
                        </LinkButton>
                        <LinkButton
                            href=LINKS.linkedin
                            variant=Variant::Ghost
                            size=Size::Sm
                            link_class=link_class
                        >
                            <Icon kind=IconKind::Linkedin class="h-4 w-4" />
                            "LinkedIn"
                        </LinkButton>
                        <LinkButton
                            href=LINKS.email
                            variant=Variant::Ghost
                            size=Size::Sm
                            link_class=link_class
                        >
                            <Icon kind=IconKind::Mail class="h-4 w-4" />
                            "Email"
                        </LinkButton>
                    </div>
                </div>
            </div>
        </footer>
    }
}
