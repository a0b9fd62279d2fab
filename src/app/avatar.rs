use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Monogram() -> impl IntoView {
    view! {
        <div class="grid h-8 w-8 place-items-center rounded-md bg-primary text-primary-foreground">
            {PROFILE.initials()}
        </div>
    }
}
