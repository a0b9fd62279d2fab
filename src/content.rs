use chrono::{DateTime, Datelike};

/// Rendered for links that aren't published yet; the scroll handler ignores it.
pub const PLACEHOLDER_HREF: &str = "#";

/// Year printed in the footer when the build timestamp can't be read.
const FALLBACK_YEAR: i32 = 2025;

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub intro: &'static str,
}

impl Profile {
    /// Monogram shown in the header badge, e.g. "Asma Ahmed" -> "AA".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SiteLinks {
    /// `None` until a real resume file is published.
    pub resume: Option<&'static str>,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill(pub &'static str);

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub code: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub stack: &'static [&'static str],
    pub links: ProjectLinks,
}

impl Project {
    pub const STACK_SEPARATOR: &'static str = " · ";

    pub fn stack_label(&self) -> String {
        self.stack.join(Self::STACK_SEPARATOR)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub org: &'static str,
    pub when: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Asma Ahmed",
    tagline: "Software Engineer • Cloud & Full‑Stack",
    intro: "I’m a software engineer focused on building scalable, user‑centric apps across web and mobile. I work across React, .NET, Spring Boot, and cloud platforms (AWS, Azure, GCP). Below are selected skills, projects, and experience.",
};

pub const LINKS: SiteLinks = SiteLinks {
    resume: None,
    github: "https://github.com/asma675",
    linkedin: "https://www.linkedin.com/in/asma-ahmed67",
    email: "mailto:asma.ahmed.work@gmail.com",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "#home",
        label: "Home",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#projects",
        label: "Projects",
    },
    NavItem {
        href: "#experience",
        label: "Experience",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill("Python"),
    Skill("Java"),
    Skill("JavaScript"),
    Skill("C"),
    Skill("C++"),
    Skill("C#"),
    Skill("Go"),
    Skill("React"),
    Skill("Redux"),
    Skill("Node.js"),
    Skill("Express.js"),
    Skill("Spring Boot"),
    Skill(".NET"),
    Skill("Thymeleaf"),
    Skill("MySQL"),
    Skill("SQL"),
    Skill("REST APIs"),
    Skill("Docker"),
    Skill("Kubernetes"),
    Skill("AWS"),
    Skill("Azure"),
    Skill("Google Cloud"),
    Skill("HTML"),
    Skill("CSS"),
    Skill("Bootstrap"),
    Skill("Pygame"),
    Skill("Git"),
    Skill("GitHub"),
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "ShareMeal App",
        blurb: "Cross‑platform app connecting donors with local food banks; auth + Azure App Services + REST APIs for listings and real‑time updates.",
        stack: &[".NET MAUI", "C#", "Azure", "REST"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/asma675"),
        },
    },
    Project {
        title: "GDG Frontend Project",
        blurb: "Responsive web interface for a GDG challenge with reusable components, hooks, and Tailwind UI.",
        stack: &["React", "Tailwind", "Vercel"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/asma675/gdg-frontend-Asma-Ahmed-Final-Copy"),
        },
    },
    Project {
        title: "PasswordStore",
        blurb: "Secure password manager with CRUD, encryption, and MVC architecture.",
        stack: &["Java", "Spring Boot", "Thymeleaf", "H2"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/asma675"),
        },
    },
    Project {
        title: "DriveWellApp",
        blurb: "Cross‑platform app for tracking automotive data with cloud sync and async data flows.",
        stack: &[".NET MAUI", "C#"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/asma675"),
        },
    },
    Project {
        title: "Student Records Portal",
        blurb: "Secure portal to manage academic records with validation and access control.",
        stack: &["SQL", "HTML", "CSS"],
        links: ProjectLinks {
            demo: None,
            code: Some("https://github.com/asma675"),
        },
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    role: "IT Assistant / Helpdesk",
    org: "Niagara College, Welland, ON",
    when: "Sept 2018 – Apr 2019",
    bullets: &[
        "Resolved 100+ weekly hardware/software and account issues, improving turnaround time by ~30%.",
        "Diagnosed connectivity problems and supported campus‑wide installs and system updates.",
        "Collaborated with technical teams to automate recurring troubleshooting tasks.",
    ],
}];

pub fn href_or_placeholder(link: Option<&'static str>) -> &'static str {
    link.unwrap_or(PLACEHOLDER_HREF)
}

/// Copyright year for the footer, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    year_from_timestamp(env!("BUILD_TIME"))
}

fn year_from_timestamp(ts: &str) -> i32 {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.year())
        .unwrap_or(FALLBACK_YEAR)
}
