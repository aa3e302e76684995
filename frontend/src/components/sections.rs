use std::rc::Rc;

use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::config;
use crate::content::{PricingPlan, Project, SiteContent};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<SiteContent>,
    #[prop_or_default]
    pub on_start_project: Callback<()>,
    #[prop_or_default]
    pub on_navigate: Callback<Section>,
}

fn start_project_button(label: &'static str, class: &'static str, on_start_project: &Callback<()>) -> Html {
    let onclick = on_start_project.reform(|_: MouseEvent| ());
    html! {
        <button class={class} {onclick}>{label}</button>
    }
}

/// Anchor that scrolls to `section` through the page instead of jumping.
fn section_link(section: Section, label: String, on_navigate: &Callback<Section>) -> Html {
    let onclick = on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        section
    });
    html! {
        <a href={section.anchor()} class="footer-link" {onclick}>{label}</a>
    }
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let view_work = props.on_navigate.reform(|_: MouseEvent| Section::Projects);

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    <span>{"Crafting Digital Excellence Since 2020"}</span>
                </div>
                <h1>
                    <span class="headline-light">{"Digital"}</span>
                    <br />
                    <span class="headline-accent">{"Excellence"}</span>
                </h1>
                <p class="hero-lead">
                    {"We craft "}
                    <strong>{"premium digital experiences"}</strong>
                    {" that elevate your brand and drive measurable business growth through innovative web solutions and compelling brand identities."}
                </p>
                <p class="hero-sub">
                    {"From stunning custom websites to efficient no-code solutions, we transform your vision into digital reality that captivates audiences and delivers results."}
                </p>
                <div class="hero-cta-group">
                    { start_project_button("Start Your Project", "hero-cta", &props.on_start_project) }
                    <button class="hero-secondary" onclick={view_work}>{"View Our Work"}</button>
                </div>
                <div class="stats-grid">
                    { for props.content.stats.iter().map(|stat| html! {
                        <div class="stat" key={stat.label.clone()}>
                            <div class="stat-number">{&stat.number}</div>
                            <div class="stat-label">{&stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
pub fn services_section(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Services.id()} class="page-section">
            <div class="section-header">
                <h2>{"Our Services"}</h2>
                <p>{"Comprehensive digital solutions designed to transform your brand"}</p>
            </div>
            <div class="card-grid three">
                { for props.content.services.iter().map(|service| html! {
                    <div class={classes!("card", "service-card", format!("gradient-{}", service.gradient))} key={service.title.clone()}>
                        <div class="service-icon">{&service.icon}</div>
                        <h3>{&service.title}</h3>
                        <p>{&service.description}</p>
                        <ul class="feature-list">
                            { for service.features.iter().map(|feature| html! {
                                <li key={feature.clone()}>{feature}</li>
                            }) }
                        </ul>
                        { start_project_button("Get Started", "card-cta", &props.on_start_project) }
                    </div>
                }) }
            </div>
        </section>
    }
}

fn project_card(project: &Project) -> Html {
    let onclick = {
        let demo = project.demo_link().map(str::to_string);
        Callback::from(move |_: MouseEvent| {
            if let Some(url) = &demo {
                config::open_in_new_tab(url);
            }
        })
    };
    let hidden = project.hidden_technology_count();

    html! {
        <div class="card project-card" key={project.id}>
            <div class="project-image">
                <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                <span class="project-category">{&project.category}</span>
            </div>
            <div class="project-body">
                <h3>{&project.title}</h3>
                <p>{&project.description}</p>
                <div class="tech-chips">
                    { for project.visible_technologies().iter().map(|tech| html! {
                        <span class="chip" key={tech.clone()}>{tech}</span>
                    }) }
                    { if hidden > 0 {
                        html! { <span class="chip muted">{format!("+{} more", hidden)}</span> }
                    } else {
                        html! {}
                    } }
                </div>
                <button class="card-cta" {onclick}>{"View Project"}</button>
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Projects.id()} class="page-section">
            <div class="section-header">
                <h2>{"Our Portfolio"}</h2>
                <p>{"Explore our diverse portfolio featuring both custom-coded and no-code projects"}</p>
            </div>
            <div class="card-grid three">
                { for props.content.projects.iter().map(project_card) }
            </div>
        </section>
    }
}

fn pricing_card(plan: &PricingPlan, on_start_project: &Callback<()>) -> Html {
    let onclick = on_start_project.reform(|_: MouseEvent| ());
    html! {
        <div
            class={classes!("card", "pricing-card", format!("gradient-{}", plan.gradient), plan.popular.then_some("popular"))}
            key={plan.id}
        >
            { if plan.popular {
                html! { <span class="popular-badge">{"Most Popular"}</span> }
            } else {
                html! {}
            } }
            <h3>{&plan.name}</h3>
            <p class="plan-description">{&plan.description}</p>
            <div class="plan-price">
                <span class="price">{&plan.price}</span>
                <span class="period">{format!("/{}", plan.period)}</span>
            </div>
            <ul class="feature-list">
                { for plan.features.iter().map(|feature| html! {
                    <li key={feature.clone()}>{"✓ "}{feature}</li>
                }) }
            </ul>
            <button class="card-cta" {onclick}>{&plan.cta}</button>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &SectionProps) -> Html {
    let table = |title: &'static str, blurb: &'static str, plans: &[PricingPlan]| -> Html {
        html! {
            <div class="pricing-table">
                <div class="table-header">
                    <h3>{title}</h3>
                    <p>{blurb}</p>
                </div>
                <div class="card-grid three">
                    { for plans.iter().map(|plan| pricing_card(plan, &props.on_start_project)) }
                </div>
            </div>
        }
    };

    html! {
        <section id={Section::Pricing.id()} class="page-section">
            <div class="section-header">
                <h2>{"Choose Your Solution"}</h2>
                <p>{"Flexible pricing options for both custom development and no-code solutions"}</p>
            </div>
            { table(
                "Custom Development",
                "Fully custom websites and web applications built with modern technologies for optimal performance and scalability.",
                &props.content.coding_pricing,
            ) }
            { table(
                "No-Code Solutions",
                "Rapid website development using no-code platforms for faster time-to-market and cost-effectiveness.",
                &props.content.no_code_pricing,
            ) }
            <div class="custom-callout">
                <h3>{"Need Custom Solutions?"}</h3>
                <p>{"We specialize in bespoke development tailored to your unique business requirements. Let's build something extraordinary together."}</p>
                { start_project_button("Discuss Your Project", "hero-cta", &props.on_start_project) }
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Contact.id()} class="page-section">
            <div class="section-header">
                <h2>{"Ready to Begin?"}</h2>
                <p>{"Let's discuss your project and create something extraordinary together"}</p>
            </div>
            <div class="contact-grid">
                <div class="card">
                    <ContactForm />
                </div>
                <div class="contact-info">
                    { for props.content.contact_info.iter().map(|info| {
                        let body = html! {
                            <>
                                <span class="info-icon">{&info.icon}</span>
                                <span class="info-text">
                                    <strong>{&info.title}</strong>
                                    <span>{&info.content}</span>
                                </span>
                            </>
                        };
                        match &info.link {
                            Some(link) => html! {
                                <a class="card info-card" href={link.clone()} target="_blank" rel="noopener noreferrer" key={info.title.clone()}>
                                    { body }
                                </a>
                            },
                            None => html! {
                                <div class="card info-card" key={info.title.clone()}>{ body }</div>
                            },
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <span class="logo-mark">{"C"}</span>
                        <span class="logo-text">{config::STUDIO_NAME}</span>
                    </div>
                    <p>{"Crafting exceptional digital experiences through custom web development, no-code solutions, and compelling brand identities."}</p>
                    <div class="social-links">
                        { for props.content.social_links.iter().map(|social| html! {
                            <a
                                key={social.name.clone()}
                                href={social.url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                title={social.name.clone()}
                                class="social-link"
                            >
                                {social.glyph()}
                            </a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Our Services"}</h3>
                    <ul>
                        { for props.content.services.iter().map(|service| html! {
                            <li key={service.title.clone()}>
                                { section_link(Section::Services, service.title.clone(), &props.on_navigate) }
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Resources"}</h3>
                    <ul>
                        <li>{ section_link(Section::Projects, "Projects".to_string(), &props.on_navigate) }</li>
                        <li>{ section_link(Section::Pricing, "Pricing".to_string(), &props.on_navigate) }</li>
                        <li>{ section_link(Section::Contact, "Contact".to_string(), &props.on_navigate) }</li>
                        <li><a href="#" class="footer-link">{"Blog"}</a></li>
                        <li><a href="#" class="footer-link">{"Case Studies"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="copyright">
                <p>{format!("© {} {}. All rights reserved. | Crafting Digital Excellence", year, config::STUDIO_NAME)}</p>
            </div>
        </footer>
    }
}
