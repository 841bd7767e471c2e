//! Content rendered inside each card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workspace treats card content as opaque. Each section is a plain
//! component over the static data in [`content`]; the contact section is the
//! only one that talks to the outside world.

pub mod contact;
pub mod content;

use leptos::prelude::*;
use spatial::manifest::Section;

use self::content::{
    ABOUT, CERTIFICATIONS, CONTACT_EMAIL, Carousel, DEGREE, DEGREE_PERIOD, DEGREE_PROGRAM, EXPERIENCE, GITHUB_URL,
    LANGUAGES, LOCATION, OWNER_NAME, PROJECTS, SkillCategory, TAGLINE, UNIVERSITY, WELCOME_HINTS, filtered_skills,
    level_color, level_percent, toggle_expanded, toggle_filter,
};
use crate::config::SiteConfig;
use crate::state::toast::Notifier;

/// Body of the card for `section`.
pub fn section_content(section: Section) -> AnyView {
    match section {
        Section::Welcome => view! { <WelcomeSection /> }.into_any(),
        Section::About => view! { <AboutSection /> }.into_any(),
        Section::Skills => view! { <SkillsSection /> }.into_any(),
        Section::Experience => view! { <ExperienceSection /> }.into_any(),
        Section::Projects => view! { <ProjectsSection /> }.into_any(),
        Section::Education => view! { <EducationSection /> }.into_any(),
        Section::Contact => view! { <contact::ContactSection /> }.into_any(),
    }
}

#[component]
fn WelcomeSection() -> impl IntoView {
    view! {
        <div class="section section--welcome">
            <h1 class="welcome__title">"Welcome to My Portfolio"</h1>
            <p class="welcome__subtitle">{format!("I'm {OWNER_NAME}, a {TAGLINE}")}</p>
            <p class="welcome__lead">"Feel free to explore this interactive portfolio!"</p>
            <ul class="welcome__hints">
                {WELCOME_HINTS
                    .iter()
                    .map(|(action, effect)| {
                        view! {
                            <li>
                                <strong>{*action}</strong>
                                " "
                                <span>{*effect}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Résumé download link. Raises a toast once the browser takes the file.
#[component]
pub fn ResumeLink() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notifier = expect_context::<Notifier>();
    let href = config.resume_url.clone();
    let file_name = config.resume_file_name().to_owned();

    view! {
        <a
            class="btn btn--primary resume-link"
            href=href
            download=file_name
            on:click=move |_| {
                notifier.success("Resume Downloaded", "The resume has been downloaded successfully.");
            }
        >
            "Download Resume"
        </a>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <div class="section section--about">
            <ResumeLink />
            <ul class="about__facts">
                <li>{LOCATION}</li>
                <li>
                    <a href=format!("mailto:{CONTACT_EMAIL}") target="_blank" rel="noopener noreferrer">
                        {CONTACT_EMAIL}
                    </a>
                </li>
                <li>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                        {GITHUB_URL.trim_start_matches("https://")}
                    </a>
                </li>
            </ul>
            <p class="about__bio">{ABOUT}</p>
        </div>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    let filter = RwSignal::new(None::<SkillCategory>);
    let hovered = RwSignal::new(None::<&'static str>);

    view! {
        <div class="section section--skills">
            <div class="skills__filters">
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class="skills__filter"
                                class:skills__filter--active=move || filter.get() == Some(category)
                                on:click=move |_| filter.update(|f| *f = toggle_filter(*f, category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="skills__grid">
                <For
                    each=move || filtered_skills(filter.get())
                    key=|skill| skill.name
                    children=move |skill| {
                        let active = move || hovered.get() == Some(skill.name);
                        view! {
                            <div
                                class="skill"
                                style:background=move || {
                                    if active() { level_color(skill.level) } else { "rgba(0,0,0,0.05)" }
                                }
                                on:mouseenter=move |_| hovered.set(Some(skill.name))
                                on:mouseleave=move |_| hovered.set(None)
                            >
                                <span class="skill__name">{skill.name}</span>
                                <div class="skill__level">
                                    <div
                                        class="skill__level-bar"
                                        style:width=format!("{}%", level_percent(skill.level))
                                    ></div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    let expanded = RwSignal::new(None::<usize>);

    view! {
        <div class="section section--experience">
            {EXPERIENCE
                .iter()
                .enumerate()
                .map(|(index, exp)| {
                    let is_open = move || expanded.get() == Some(index);
                    view! {
                        <div
                            class="experience"
                            class:experience--open=is_open
                            on:click=move |_| expanded.update(|e| *e = toggle_expanded(*e, index))
                        >
                            <div class="experience__meta">
                                <span>{exp.period}</span>
                                <span>{exp.location}</span>
                            </div>
                            <h3 class="experience__title">{exp.title}</h3>
                            <p class="experience__company">{exp.company}</p>
                            <Show when=is_open>
                                <ul class="experience__highlights">
                                    {exp.highlights.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::default());
    let len = PROJECTS.len();
    let current = move || PROJECTS[carousel.get().index % len];

    view! {
        <div class="section section--projects">
            <h2>"Featured Projects"</h2>
            <div class="projects__stage">
                <div class="project" on:click=move |_| carousel.update(Carousel::toggle_details)>
                    <div
                        class="project__image"
                        style:background-image=move || format!("url({})", current().image)
                    ></div>
                    <div class="project__tint" style:background-color=move || current().color></div>
                    <span class="project__title">{move || current().title}</span>
                    <span class="project__hint">"Click for details"</span>
                </div>
                <Show when=move || carousel.get().details_open>
                    {move || {
                        let project = current();
                        view! {
                            <div class="project__details">
                                <p>{project.description}</p>
                                <div class="project__tech">
                                    {project
                                        .technologies
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="project__tag" style:color=project.color>
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="project__links">
                                    {project
                                        .github_url
                                        .map(|url| {
                                            view! {
                                                <a href=url target="_blank" rel="noopener noreferrer">
                                                    "Code"
                                                </a>
                                            }
                                        })}
                                    {project
                                        .live_url
                                        .map(|url| {
                                            view! {
                                                <a
                                                    href=url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    style:background-color=project.color
                                                >
                                                    "Live Demo"
                                                </a>
                                            }
                                        })}
                                </div>
                                <button on:click=move |_| carousel.update(|c| c.details_open = false)>
                                    "Close details"
                                </button>
                            </div>
                        }
                    }}
                </Show>
                <button
                    class="projects__nav projects__nav--prev"
                    title="Previous project"
                    on:click=move |_| carousel.update(|c| c.prev(len))
                >
                    "‹"
                </button>
                <button
                    class="projects__nav projects__nav--next"
                    title="Next project"
                    on:click=move |_| carousel.update(|c| c.next(len))
                >
                    "›"
                </button>
            </div>
            <div class="projects__dots">
                {(0..len)
                    .map(|index| {
                        view! {
                            <button
                                class="projects__dot"
                                class:projects__dot--active=move || carousel.get().index == index
                                title=format!("Project {}", index + 1)
                                on:click=move |_| carousel.update(|c| c.jump(index, len))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <div class="section section--education">
            <div class="education__degree">
                <h3>{UNIVERSITY}</h3>
                <p>{DEGREE}</p>
                <p class="education__period">{DEGREE_PERIOD}</p>
                <p>{DEGREE_PROGRAM}</p>
            </div>
            <h3>"Certifications"</h3>
            <ul class="education__certs">
                {CERTIFICATIONS
                    .iter()
                    .map(|(course, provider)| {
                        view! {
                            <li>
                                <strong>{*course}</strong>
                                <span>{*provider}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h3>"Languages"</h3>
            <div class="education__languages">
                {LANGUAGES
                    .iter()
                    .map(|(language, level)| {
                        view! {
                            <div>
                                <span class="education__language">{format!("{language}:")}</span>
                                " "
                                {*level}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
