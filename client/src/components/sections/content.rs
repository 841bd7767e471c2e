//! Static portfolio content and the small bits of logic the section views
//! run over it (skill filter, carousel stepping, expandable entries).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Swiss Tangsatjatham";
pub const TAGLINE: &str = "Full-Stack Developer & Aerospace Engineer";
pub const CONTACT_EMAIL: &str = "tintinguy01@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/tintinguy01";
pub const LOCATION: &str = "Bangkok, Thailand";

pub const ABOUT: &str = "Self-taught full-stack developer with a background in aerospace engineering. \
Passionate about building intuitive and responsive user interfaces with real-world impact. \
Strong experience with modern web technologies including React, Next.js, TypeScript, and FastAPI.";

/// Hints shown on the welcome card: (action, effect).
pub const WELCOME_HINTS: [(&str, &str); 3] = [
    ("Click icons in sidebar", "to open different sections"),
    ("Drag cards around", "to organize your workspace"),
    ("Scroll to zoom", ""),
];

// =============================================================
// Skills
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Database,
}

impl SkillCategory {
    pub const ALL: [Self; 4] = [Self::Languages, Self::Frontend, Self::Backend, Self::Database];

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Self-assessed, 1 to 5.
    pub level: u8,
}

const fn skill(name: &'static str, category: SkillCategory, level: u8) -> Skill {
    Skill { name, category, level }
}

pub const SKILLS: [Skill; 12] = [
    skill("JavaScript", SkillCategory::Languages, 3),
    skill("TypeScript", SkillCategory::Languages, 4),
    skill("Python", SkillCategory::Languages, 4),
    skill("HTML", SkillCategory::Languages, 5),
    skill("CSS", SkillCategory::Languages, 3),
    skill("React", SkillCategory::Frontend, 5),
    skill("Next.js", SkillCategory::Frontend, 5),
    skill("Tailwind CSS", SkillCategory::Frontend, 3),
    skill("Node.js", SkillCategory::Backend, 3),
    skill("Express", SkillCategory::Backend, 3),
    skill("MongoDB", SkillCategory::Database, 1),
    skill("PostgreSQL", SkillCategory::Database, 1),
];

/// Skills matching the active filter, in display order.
pub fn filtered_skills(filter: Option<SkillCategory>) -> Vec<Skill> {
    SKILLS.iter().copied().filter(|s| filter.is_none_or(|c| s.category == c)).collect()
}

/// Clicking the active category clears the filter; any other sets it.
pub fn toggle_filter(current: Option<SkillCategory>, clicked: SkillCategory) -> Option<SkillCategory> {
    if current == Some(clicked) { None } else { Some(clicked) }
}

/// Hover tint for a skill tile. Out-of-range levels use the middle shade.
pub fn level_color(level: u8) -> &'static str {
    match level {
        1 => "rgba(150, 150, 150, 0.7)",
        2 => "rgba(102, 178, 255, 0.7)",
        4 => "rgba(41, 128, 185, 0.7)",
        5 => "rgba(33, 150, 243, 0.8)",
        _ => "rgba(52, 152, 219, 0.7)",
    }
}

/// Width of the level bar as a CSS percentage.
pub fn level_percent(level: u8) -> u32 {
    u32::from(level.clamp(1, 5)) * 20
}

// =============================================================
// Experience
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        title: "Software Engineer Intern",
        company: "Flowon AI / Kenneth AI",
        location: "Remote Internship · United Kingdom",
        period: "Mar 2025 – Present",
        highlights: &[
            "Accomplished seamless integration of a new campaign feature as measured by successful collaboration with backend engineers by developing and connecting frontend UI components to the API.",
            "Adapted quickly to project pivot from Flowon AI to Kenneth AI by seamlessly transitioning to a new workspace, codebase, and communication setup.",
        ],
    },
    Experience {
        title: "Researcher",
        company: "National Institute of Applied Science of Toulouse",
        location: "Toulouse, France",
        period: "Jun 2023 – Aug 2023",
        highlights: &[
            "Accomplished accurate fluid simulation models as measured by validated output in Ansys by refining computational parameters and solving edge-case behaviors.",
            "Improved performance and simulation reliability as measured by output consistency by debugging and optimizing existing models.",
        ],
    },
];

/// One entry open at a time; clicking the open one collapses it.
pub fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) { None } else { Some(clicked) }
}

// =============================================================
// Projects
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub color: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Pagey AI",
        description: "A modern web application that allows users to chat with their PDF documents using AI.",
        image: "/images/PageyAI.png",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Python",
            "FastAPI",
            "PostgreSQL",
            "Clerk",
            "OpenAI",
            "Vercel",
            "Render",
            "Neon",
        ],
        github_url: Some("https://github.com/tintinguy01/pagey-ai"),
        live_url: Some("https://pagey-ai.vercel.app/"),
        color: "#3498db",
    },
    Project {
        title: "TaskFlow",
        description: "A task management app that streamlines task management and scheduling with customizable categories and dynamic progress tracking.",
        image: "/images/TaskFlow.png",
        technologies: &["Next.js", "TypeScript", "Tailwind CSS", "Convex", "Clerk"],
        github_url: Some("https://github.com/tintinguy01/TaskFlow"),
        live_url: Some("https://task-management-app-six-tau.vercel.app/"),
        color: "#dbd834",
    },
    Project {
        title: "Movirev",
        description: "A movie review website that allows users to search for movies, read reviews, and leave their own reviews.",
        image: "/images/Movirev.png",
        technologies: &["React", "EJS", "Express", "PostgreSQL", "CSS"],
        github_url: Some("https://github.com/tintinguy01/Movirev"),
        live_url: Some("https://movirev.vercel.app/"),
        color: "#2ecc71",
    },
];

/// Carousel position. Stepping past either end wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub details_open: bool,
}

impl Carousel {
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
        self.details_open = false;
    }

    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
        self.details_open = false;
    }

    pub fn jump(&mut self, index: usize, len: usize) {
        if index < len {
            self.index = index;
            self.details_open = false;
        }
    }

    pub fn toggle_details(&mut self) {
        self.details_open = !self.details_open;
    }
}

// =============================================================
// Education
// =============================================================

pub const UNIVERSITY: &str = "Chulalongkorn University";
pub const DEGREE: &str = "Bachelor of Engineering in Aerospace Engineering";
pub const DEGREE_PERIOD: &str = "Aug 2020 – Jun 2024";
pub const DEGREE_PROGRAM: &str = "International Program";

/// (course, provider)
pub const CERTIFICATIONS: [(&str, &str); 2] = [
    ("Complete 2024 Web Development Bootcamp", "Dr. Angela Yu"),
    ("Machine Learning A-Z", "AI, Python & R + ChatGPT"),
];

/// (language, proficiency)
pub const LANGUAGES: [(&str, &str); 2] = [("Thai", "Native"), ("English", "Fluent")];

// =============================================================
// Contact
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub color: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Email", url: "mailto:tintinguy01@gmail.com", color: "#D44638" },
    SocialLink { label: "GitHub", url: "https://github.com/tintinguy01", color: "#333333" },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/swiss-tangsatjatham-7821b3254/",
        color: "#0077B5",
    },
];
