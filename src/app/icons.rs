use leptos::prelude::*;

use crate::style::join_classes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    Download,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
}

impl IconKind {
    fn paths(self) -> &'static str {
        match self {
            Self::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#
            }
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
        }
    }

    fn svg(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="h-full w-full">{}</svg>"#,
            self.paths()
        )
    }
}

/// Line icon sized by the caller's class, e.g. `h-4 w-4`.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <span class=join_classes(["inline-block shrink-0", class]) aria-hidden="true" inner_html=kind.svg()></span> }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V + 'static) -> String {
        Owner::new().with(|| f().into_view().to_html())
    }

    #[test]
    fn test_icon_class_without_size() {
        let html = render(|| view! { <Icon kind=IconKind::Mail /> });
        assert!(html.contains("class=\"inline-block shrink-0\""));
        let sized = render(|| view! { <Icon kind=IconKind::Mail class="h-4 w-4" /> });
        assert!(sized.contains("class=\"inline-block shrink-0 h-4 w-4\""));
    }
}
