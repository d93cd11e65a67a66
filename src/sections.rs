use crate::content;
use crate::frontend::{use_capability_state, use_reveal, SectionDecor};
use crate::interaction::{CardEvent, CardFocus};
use crate::nav::SectionId;
use crate::reveal::RevealLatch;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

const PENDING: &str = "hidden-below";
const REVEALED: &str = "slide-in-up";

fn stagger(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms;", index * step_ms)
}

fn section_header(latch: RevealLatch, title: &'static str, lead: &'static str) -> Html {
    html! {
        <div class={classes!("section-header", latch.class(PENDING, REVEALED))}>
            <h2 class="section-title">{title}</h2>
            <p class="section-lead">{lead}</p>
        </div>
    }
}

fn tag_list(tags: &'static [&'static str]) -> Html {
    html! {
        <div class="tags">
            { for tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
        </div>
    }
}

fn bullet_list(items: &'static [&'static str]) -> Html {
    html! {
        <ul class="bullets">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[function_component(SummarySection)]
pub fn summary_section() -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone());

    html! {
        <section id={SectionId::Summary.as_str()} ref={node} class="section section-summary">
            <SectionDecor section={SectionId::Summary} />
            <div class="container">
                {section_header(latch, "Professional Summary", "Who I am and what I bring to a team")}

                <div class="summary-grid">
                    <div class={classes!("glass-card", "summary-text", latch.class(PENDING, REVEALED))}>
                        { for content::SUMMARY_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>

                    <div class="highlight-grid">
                        { for content::HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| html! {
                            <div
                                class={classes!("glass-card", "highlight", latch.class("hidden-scaled", "fade-in-scale"))}
                                style={stagger(index, 100)}
                            >
                                <span class="highlight-icon" aria-hidden="true">{highlight.icon}</span>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.description}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class={classes!("stats", latch.class(PENDING, REVEALED))}>
                    { for content::STATS.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <span class="stat-value">{*value}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone());

    html! {
        <section id={SectionId::Skills.as_str()} ref={node} class="section section-skills">
            <SectionDecor section={SectionId::Skills} />
            <div class="container">
                {section_header(latch, "Technical Skills", "Tools and platforms I work with")}

                <div class="skill-grid">
                    { for content::SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| html! {
                        <div
                            class={classes!("glass-card", "skill-card", latch.class(PENDING, REVEALED))}
                            style={stagger(index, 100)}
                        >
                            <div class={classes!("card-icon", category.gradient)} aria-hidden="true">{category.icon}</div>
                            <h3>{category.title}</h3>
                            {tag_list(category.skills)}
                        </div>
                    })}
                </div>

                <div class={classes!("glass-card", "proficiency", latch.class(PENDING, REVEALED))}>
                    <h3>{"Proficiency"}</h3>
                    { for content::PROFICIENCIES.iter().enumerate().map(|(index, skill)| {
                        let width = if latch.is_revealed() { skill.level } else { 0 };
                        html! {
                            <div class="proficiency-row">
                                <div class="proficiency-label">
                                    <span>{skill.name}</span>
                                    <span class="muted">{skill.category}</span>
                                    <span>{format!("{}%", skill.level)}</span>
                                </div>
                                <div class="proficiency-track">
                                    <div
                                        class="proficiency-fill"
                                        style={format!("width: {width}%; transition-delay: {}ms;", index * 150)}
                                    />
                                </div>
                            </div>
                        }
                    })}
                </div>

                <p class={classes!("cert-banner", latch.class(PENDING, REVEALED))}>{content::CERTIFICATION_BANNER}</p>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone());

    html! {
        <section id={SectionId::Education.as_str()} ref={node} class="section section-education">
            <SectionDecor section={SectionId::Education} />
            <div class="container">
                {section_header(latch, "Education & Certifications", "Academic background and credentials")}

                <div class="education-list">
                    { for content::EDUCATION.iter().enumerate().map(|(index, degree)| html! {
                        <div
                            class={classes!("glass-card", "degree", latch.class(PENDING, REVEALED))}
                            style={stagger(index, 200)}
                        >
                            <h3>{degree.degree}</h3>
                            <p class="degree-field">{degree.field}</p>
                            <p class="muted">{format!("{} · {}", degree.institution, degree.location)}</p>
                            <div class="degree-meta">
                                <span>{degree.period}</span>
                                <span class="grade">{degree.grade}</span>
                            </div>
                            {bullet_list(degree.highlights)}
                        </div>
                    })}
                </div>

                <h3 class={classes!("subsection-title", latch.class(PENDING, REVEALED))}>{"Certifications"}</h3>
                <div class="cert-grid">
                    { for content::CERTIFICATIONS.iter().enumerate().map(|(index, cert)| html! {
                        <div
                            class={classes!("glass-card", "cert", latch.class("hidden-scaled", "fade-in-scale"))}
                            style={stagger(index, 100)}
                        >
                            <div class={classes!("cert-badge", cert.gradient)}>{cert.level}</div>
                            <h4>{cert.title}</h4>
                            <p class="muted">{format!("{} · {}", cert.issuer, cert.date)}</p>
                            <a href={cert.credential_url} target="_blank" rel="noopener noreferrer">{"View credential"}</a>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    project: &'static content::Project,
    focused: bool,
    revealed: RevealLatch,
    on_event: Callback<(usize, CardEvent)>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let index = props.index;
    let project = props.project;

    let onmouseenter = props.on_event.reform(move |_: MouseEvent| (index, CardEvent::Enter));
    let onmouseleave = props.on_event.reform(move |_: MouseEvent| (index, CardEvent::Leave));
    let onclick = props.on_event.reform(move |_: MouseEvent| (index, CardEvent::Activate));
    let onkeydown = {
        let on_event = props.on_event.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_event.emit((index, CardEvent::Activate));
            }
        })
    };

    html! {
        <article
            class={classes!(
                "glass-card",
                "project-card",
                props.focused.then_some("focused"),
                props.revealed.class(PENDING, REVEALED),
            )}
            style={stagger(index, 200)}
            tabindex="0"
            {onmouseenter}
            {onmouseleave}
            {onclick}
            {onkeydown}
        >
            <div class={classes!("card-icon", project.gradient)} aria-hidden="true">{project.icon}</div>
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            {tag_list(project.technologies)}
            {bullet_list(project.highlights)}
            <div class="project-metrics">
                <div><span class="muted">{"Performance"}</span><span>{project.performance}</span></div>
                <div><span class="muted">{"Reliability"}</span><span>{project.reliability}</span></div>
            </div>
        </article>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone());
    let capability = use_capability_state();
    let focus = use_state_eq(CardFocus::default);

    let on_event = {
        let focus = focus.clone();
        let is_mobile = capability.is_mobile();
        Callback::from(move |(index, event): (usize, CardEvent)| {
            focus.set(focus.apply(index, event, is_mobile));
        })
    };

    html! {
        <section id={SectionId::Projects.as_str()} ref={node} class="section section-projects">
            <SectionDecor section={SectionId::Projects} />
            <div class="container">
                {section_header(latch, "Featured Projects", "Things I have built and shipped")}

                <div class="project-grid">
                    { for content::PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            {index}
                            {project}
                            focused={focus.is_focused(index)}
                            revealed={latch}
                            on_event={on_event.clone()}
                        />
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(VolunteeringSection)]
pub fn volunteering_section() -> Html {
    let node = use_node_ref();
    let latch = use_reveal(node.clone());

    html! {
        <section id={SectionId::Volunteering.as_str()} ref={node} class="section section-volunteering">
            <SectionDecor section={SectionId::Volunteering} />
            <div class="container">
                {section_header(latch, "Volunteering", "Giving back to the community")}

                <div class="volunteer-list">
                    { for content::VOLUNTEERING.iter().enumerate().map(|(index, role)| html! {
                        <div
                            class={classes!("glass-card", "volunteer", latch.class(PENDING, REVEALED))}
                            style={stagger(index, 200)}
                        >
                            <div class={classes!("card-icon", role.gradient)} aria-hidden="true">{role.icon}</div>
                            <h3>{role.title}</h3>
                            <p class="muted">{format!("{} · {}", role.organization, role.period)}</p>
                            <p>{role.description}</p>
                            {bullet_list(role.contributions)}
                            <p class="impact">{role.impact}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
