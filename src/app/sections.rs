use leptos::prelude::*;

use super::{
    components::{Card, CardContent, CardHeader, CardTitle, FadeIn, LinkButton, Section},
    icons::{Icon, IconKind},
};
use crate::{
    content::{href_or_placeholder, ExperienceEntry, Project, Skill},
    style::{Size, Variant},
};

const SKILL_STAGGER_MS: u32 = 20;
const PROJECT_STAGGER_MS: u32 = 40;
const EXPERIENCE_STAGGER_MS: u32 = 50;

const TIMELINE_DOT: &str =
    "hidden md:block absolute left-[14px] top-1 h-3 w-3 rounded-full bg-primary";

#[component]
pub fn SkillsGrid(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <Section
            id="skills"
            title="Skills & Technologies"
            subtitle="A snapshot of tools I use regularly."
        >
            <div class="grid grid-cols-2 gap-3 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6">
                {skills
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! {
                            <FadeIn index=index stagger_ms=SKILL_STAGGER_MS>
                                <div
                                    data-skill=skill.0
                                    class="group rounded-xl border bg-card p-4 text-center shadow-sm transition hover:shadow"
                                >
                                    <span class="text-sm font-medium">{skill.0}</span>
                                </div>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn ProjectGallery(projects: &'static [Project]) -> impl IntoView {
    view! {
        <Section id="projects" title="Projects" subtitle="Selected work and experiments.">
            <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <FadeIn index=index stagger_ms=PROJECT_STAGGER_MS>
                                <ProjectCard project=*project />
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <Card class="h-full">
            <CardHeader>
                <CardTitle class="flex items-center justify-between">
                    <span>{project.title}</span>
                    <span data-stack=project.title class="text-xs font-normal text-muted-foreground">
                        {project.stack_label()}
                    </span>
                </CardTitle>
            </CardHeader>
            <CardContent>
                <p class="text-sm text-muted-foreground">{project.blurb}</p>
                <div class="mt-4 flex gap-2">
                    <LinkButton
                        href=href_or_placeholder(project.links.demo)
                        size=Size::Sm
                        variant=Variant::Secondary
                        link_class="inline-flex items-center gap-1"
                    >
                        <Icon kind=IconKind::ExternalLink class="h-3.5 w-3.5" />
                        " Demo"
                    </LinkButton>
                    <LinkButton
                        href=href_or_placeholder(project.links.code)
                        size=Size::Sm
                        variant=Variant::Outline
                        link_class="inline-flex items-center gap-1"
                    >
                        <Icon kind=IconKind::Github class="h-3.5 w-3.5" />
                        " Code"
                    </LinkButton>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn ExperienceTimeline(entries: &'static [ExperienceEntry]) -> impl IntoView {
    view! {
        <Section
            id="experience"
            title="Relevant Experience"
            subtitle="Highlights from roles and internships."
        >
            <div class="relative mx-auto max-w-3xl">
                <div class="absolute left-4 top-0 bottom-0 hidden w-px bg-border md:block" />
                <ul class="space-y-8">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <li data-role=entry.role class="relative md:pl-10">
                                    // positioned against the li so it sits on the rail
                                    <div class=TIMELINE_DOT />
                                    <FadeIn index=index stagger_ms=EXPERIENCE_STAGGER_MS>
                                        <div class="rounded-xl border bg-card p-5 shadow-sm">
                                            <div class="flex flex-wrap items-baseline justify-between gap-2">
                                                <h3 class="text-base font-semibold">
                                                    {entry.role} " "
                                                    <span class="text-muted-foreground font-normal">
                                                        "• "{entry.org}
                                                    </span>
                                                </h3>
                                                <span class="text-sm text-muted-foreground">
                                                    {entry.when}
                                                </span>
                                            </div>
                                            <ul class="mt-3 list-disc space-y-1 pl-5 text-sm text-muted-foreground">
                                                {entry
                                                    .bullets
                                                    .iter()
                                                    .map(|b| view! { <li>{*b}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </FadeIn>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{EXPERIENCE, PROJECTS, SKILLS};

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V + 'static) -> String {
        Owner::new().with(|| f().into_view().to_html())
    }

    fn positions(html: &str, needles: impl IntoIterator<Item = String>) -> Vec<usize> {
        needles
            .into_iter()
            .map(|n| html.find(&n).unwrap_or_else(|| panic!("missing {n}")))
            .collect()
    }

    #[test]
    fn test_one_cell_per_skill_in_order() {
        let html = render(|| view! { <SkillsGrid skills=SKILLS /> });
        assert_eq!(html.matches("data-skill").count(), SKILLS.len());
        let pos = positions(&html, SKILLS.iter().map(|s| format!("data-skill=\"{}\"", s.0)));
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_duplicate_skills_not_deduped() {
        const DUPES: &[Skill] = &[Skill("Rust"), Skill("Rust"), Skill("Go")];
        let html = render(|| view! { <SkillsGrid skills=DUPES /> });
        assert_eq!(html.matches("data-skill").count(), 3);
    }

    #[test]
    fn test_project_stack_labels() {
        let html = render(|| view! { <ProjectGallery projects=PROJECTS /> });
        assert_eq!(html.matches("data-stack").count(), PROJECTS.len());
        for p in PROJECTS {
            assert!(html.contains(&p.stack_label()), "missing label for {}", p.title);
        }
        // demo links are placeholders and stay in this tab
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn test_experience_bullets() {
        let html = render(|| view! { <ExperienceTimeline entries=EXPERIENCE /> });
        assert_eq!(html.matches("data-role").count(), EXPERIENCE.len());
        for b in EXPERIENCE[0].bullets {
            assert!(html.contains(b));
        }
    }

    #[test]
    fn test_timeline_dot_outside_reveal() {
        let html = render(|| view! { <ExperienceTimeline entries=EXPERIENCE /> });
        let li = html.find("data-role").expect("timeline entry");
        let entry = &html[li..];
        let dot = entry.find(TIMELINE_DOT).expect("timeline dot");
        let reveal = entry.find("opacity:0").expect("entry reveal");
        // the dot must not be inside the transformed reveal wrapper
        assert!(dot < reveal);
        let reveal_div = entry[..reveal].rfind("<div").expect("reveal div");
        assert!(dot < reveal_div);
    }

    #[test]
    fn test_empty_lists_render_empty_sections() {
        const NO_SKILLS: &[Skill] = &[];
        const NO_PROJECTS: &[Project] = &[];
        const NO_ENTRIES: &[ExperienceEntry] = &[];
        let skills = render(|| view! { <SkillsGrid skills=NO_SKILLS /> });
        assert!(skills.contains("id=\"skills\""));
        assert!(!skills.contains("data-skill"));
        let projects = render(|| view! { <ProjectGallery projects=NO_PROJECTS /> });
        assert!(projects.contains("id=\"projects\""));
        assert!(!projects.contains("data-stack"));
        let experience = render(|| view! { <ExperienceTimeline entries=NO_ENTRIES /> });
        assert!(experience.contains("id=\"experience\""));
        assert!(!experience.contains("data-role"));
    }
}
