use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::animation::Throttle;
use crate::components::navbar::Navbar;
use crate::components::particle_canvas::ParticleCanvas;
use crate::components::sections::{
    ContactSection, Footer, Hero, PricingSection, ProjectsSection, ServicesSection,
};
use crate::config;
use crate::content::SiteContent;
use crate::navigation::{ScrollSpy, Section, SectionExtent, SpyAction, SCROLL_THROTTLE_MS};

/// Reads the scroll offset and the extent of every section present in the
/// document.
fn sample_scroll() -> Option<SpyAction> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let scroll_y = window.scroll_y().ok()?;
    let extents = Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionExtent::new(
                section,
                element.offset_top() as f64,
                element.offset_height() as f64,
            ))
        })
        .collect();
    Some(SpyAction::Sample { scroll_y, extents })
}

fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No element for section {}", section),
    }
}

fn linked_section() -> Option<Section> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Section::from_id(hash.trim_start_matches('#'))
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo(|_| SiteContent::bundled(), ());
    let spy = use_reducer(ScrollSpy::default);

    // Throttled scroll spy
    {
        let spy = spy.clone();
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(Throttle::new(SCROLL_THROTTLE_MS));
                let listener = web_sys::window().map(|window| {
                    let callback = {
                        let throttle = throttle.clone();
                        let spy = spy.clone();
                        Closure::<dyn Fn()>::new(move || {
                            let spy = spy.clone();
                            throttle.call(move || {
                                if let Some(sample) = sample_scroll() {
                                    spy.dispatch(sample);
                                }
                            });
                        })
                    };
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to attach scroll listener: {:?}", err);
                    }
                    (window, callback)
                });

                // Initial check, the page may load scrolled
                if let Some(sample) = sample_scroll() {
                    spy.dispatch(sample);
                }
                // Deep links like /#pricing
                if let Some(section) = linked_section() {
                    spy.dispatch(SpyAction::Jump(section));
                    scroll_to_section(section);
                }

                move || {
                    if let Some((window, callback)) = listener {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::debug!("Failed to detach scroll listener: {:?}", err);
                        }
                    }
                    throttle.cancel();
                }
            },
            (),
        );
    }

    let on_navigate = {
        let spy = spy.clone();
        Callback::from(move |section: Section| {
            spy.dispatch(SpyAction::Jump(section));
            scroll_to_section(section);
        })
    };

    let on_start_project = Callback::from(|_: ()| {
        log::info!("Opening start-project chat");
        config::open_in_new_tab(&config::start_project_link());
    });

    html! {
        <div class="landing-page">
            <ParticleCanvas />
            <Navbar
                active_section={spy.active}
                on_navigate={Some(on_navigate.clone())}
                on_start_project={Some(on_start_project.clone())}
                is_scrolled={spy.scrolled}
            />
            <main class="page-content">
                <Hero content={content.clone()} on_start_project={on_start_project.clone()} on_navigate={on_navigate.clone()} />
                <ServicesSection content={content.clone()} on_start_project={on_start_project.clone()} />
                <ProjectsSection content={content.clone()} />
                <PricingSection content={content.clone()} on_start_project={on_start_project.clone()} />
                <ContactSection content={content.clone()} />
            </main>
            <Footer content={content} on_navigate={on_navigate} />
            <style>
                {PAGE_CSS}
            </style>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .landing-page {
        position: relative;
        min-height: 100vh;
        color: white;
        background: linear-gradient(135deg, #0f172a, #1e1b4b 50%, #0f172a);
        overflow-x: hidden;
    }
    .page-content, .site-footer {
        position: relative;
        z-index: 1;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        position: relative;
        padding: 5rem 1.5rem 0;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background:
            linear-gradient(to bottom right, rgba(15, 23, 42, 0.8), rgba(88, 28, 135, 0.6), rgba(15, 23, 42, 0.8)),
            url("https://images.unsplash.com/photo-1451187580459-43490279c0fa?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&h=1200&q=80") center / cover;
    }
    .hero-content {
        position: relative;
        max-width: 1200px;
        margin: 0 auto;
        width: 100%;
        animation: fade-right 0.8s ease-out;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        margin-bottom: 2rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .pulse-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #4ade80;
        animation: pulse 2s infinite;
    }
    .hero h1 {
        font-size: clamp(3rem, 9vw, 6rem);
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .headline-light, .headline-accent {
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .headline-light {
        background-image: linear-gradient(to right, #fff, #bfdbfe, #e9d5ff);
    }
    .headline-accent {
        background-image: linear-gradient(to right, #60a5fa, #c084fc);
    }
    .hero-lead {
        font-size: 1.35rem;
        max-width: 40rem;
        line-height: 1.6;
    }
    .hero-lead strong {
        color: #93c5fd;
    }
    .hero-sub {
        color: #d1d5db;
        max-width: 40rem;
        line-height: 1.6;
        margin-bottom: 3rem;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        margin-bottom: 4rem;
    }
    .hero-cta, .hero-secondary, .card-cta, .submit-button {
        border: none;
        cursor: pointer;
        color: white;
        font-weight: 600;
        transition: transform 0.2s, box-shadow 0.3s;
    }
    .hero-cta {
        padding: 1rem 3rem;
        border-radius: 1rem;
        font-size: 1.1rem;
        background: linear-gradient(to right, #2563eb, #9333ea);
        box-shadow: 0 25px 50px rgba(37, 99, 235, 0.25);
    }
    .hero-secondary {
        padding: 1rem 3rem;
        border-radius: 1rem;
        font-size: 1.1rem;
        background: transparent;
        border: 2px solid rgba(255, 255, 255, 0.3);
    }
    .hero-cta:hover, .hero-secondary:hover, .card-cta:hover, .submit-button:hover {
        transform: scale(1.03);
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        max-width: 40rem;
    }
    .stat-number {
        font-size: 2.25rem;
        font-weight: 700;
    }
    .stat-label {
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .page-section {
        max-width: 1200px;
        margin: 0 auto;
        padding: 5rem 1.5rem;
    }
    .section-header {
        text-align: center;
        margin-bottom: 3rem;
    }
    .section-header h2 {
        font-size: clamp(2.25rem, 5vw, 3.5rem);
        margin: 0 0 1rem;
        background-image: linear-gradient(to right, #fff, #bfdbfe);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .section-header p, .table-header p {
        color: #9ca3af;
        max-width: 42rem;
        margin: 0 auto;
    }
    .card-grid {
        display: grid;
        gap: 2rem;
    }
    .card-grid.three {
        grid-template-columns: repeat(3, 1fr);
    }
    .card {
        position: relative;
        padding: 2rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(24px);
        transition: transform 0.3s, border-color 0.3s;
    }
    .card:hover {
        transform: translateY(-4px);
        border-color: rgba(255, 255, 255, 0.2);
    }
    .service-icon {
        font-size: 2.5rem;
        margin-bottom: 1rem;
    }
    .feature-list {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0;
        color: #d1d5db;
        line-height: 2;
    }
    .card-cta {
        width: 100%;
        padding: 0.6rem;
        border-radius: 0.75rem;
        background: linear-gradient(to right, #2563eb, #9333ea);
    }
    .gradient-blue-cyan { --accent: linear-gradient(to right, #3b82f6, #06b6d4); }
    .gradient-purple-pink { --accent: linear-gradient(to right, #a855f7, #ec4899); }
    .gradient-orange-red { --accent: linear-gradient(to right, #f97316, #ef4444); }
    .gradient-green-teal { --accent: linear-gradient(to right, #22c55e, #14b8a6); }
    .gradient-teal-blue { --accent: linear-gradient(to right, #14b8a6, #3b82f6); }
    .gradient-purple-indigo { --accent: linear-gradient(to right, #a855f7, #6366f1); }
    .service-card::before, .pricing-card::before {
        content: "";
        position: absolute;
        top: 0;
        left: 2rem;
        right: 2rem;
        height: 3px;
        border-radius: 3px;
        background: var(--accent);
    }
    .project-card {
        padding: 0;
        overflow: hidden;
    }
    .project-image {
        position: relative;
        height: 12rem;
    }
    .project-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .project-category {
        position: absolute;
        top: 1rem;
        left: 1rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        background: rgba(15, 23, 42, 0.7);
    }
    .project-body {
        padding: 1.5rem;
    }
    .project-body p {
        color: #9ca3af;
        font-size: 0.9rem;
    }
    .tech-chips {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin: 1rem 0;
    }
    .chip {
        padding: 0.25rem 0.5rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        background: rgba(59, 130, 246, 0.2);
        color: #bfdbfe;
    }
    .chip.muted {
        background: rgba(255, 255, 255, 0.1);
        color: #d1d5db;
    }
    .pricing-table {
        margin-bottom: 4rem;
    }
    .table-header {
        text-align: center;
        margin-bottom: 2rem;
    }
    .pricing-card.popular {
        border-color: rgba(168, 85, 247, 0.6);
        transform: scale(1.03);
    }
    .popular-badge {
        position: absolute;
        top: -0.9rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.3rem 1rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        font-weight: 600;
        background: linear-gradient(to right, #a855f7, #ec4899);
    }
    .plan-description {
        color: #9ca3af;
    }
    .plan-price .price {
        font-size: 2.5rem;
        font-weight: 700;
    }
    .plan-price .period {
        color: #9ca3af;
        margin-left: 0.25rem;
    }
    .custom-callout {
        text-align: center;
        padding: 3rem 2rem;
        border-radius: 1.5rem;
        background: linear-gradient(to right, rgba(37, 99, 235, 0.15), rgba(147, 51, 234, 0.15));
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .custom-callout p {
        color: #d1d5db;
        max-width: 36rem;
        margin: 0 auto 2rem;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        color: #d1d5db;
        font-weight: 500;
    }
    .contact-form input, .contact-form select, .contact-form textarea {
        padding: 0.75rem 1rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.1);
        color: white;
        font: inherit;
    }
    .contact-form textarea {
        resize: none;
    }
    .contact-form select option {
        color: #0f172a;
    }
    .form-error {
        color: #fca5a5;
        margin: 0;
    }
    .form-success {
        color: #86efac;
        margin: 0;
    }
    .submit-button {
        padding: 1rem;
        border-radius: 1rem;
        font-size: 1.1rem;
        background: linear-gradient(to right, #2563eb, #9333ea);
    }
    .contact-info {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .info-card {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1.5rem;
        color: inherit;
        text-decoration: none;
    }
    .info-icon {
        font-size: 1.5rem;
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.75rem;
        background: rgba(59, 130, 246, 0.2);
    }
    .info-text {
        display: flex;
        flex-direction: column;
        color: #9ca3af;
    }
    .info-text strong {
        color: white;
    }
    .site-footer {
        padding: 4rem 1.5rem 7rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(15, 23, 42, 0.6);
    }
    .footer-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
    }
    .footer-brand p {
        color: #9ca3af;
        max-width: 28rem;
    }
    .site-footer ul {
        list-style: none;
        padding: 0;
        line-height: 2;
    }
    .footer-link {
        color: #9ca3af;
        text-decoration: none;
    }
    .footer-link:hover {
        color: white;
    }
    .social-links {
        display: flex;
        gap: 0.75rem;
    }
    .social-link {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.1);
        color: #9ca3af;
        text-decoration: none;
        font-weight: 700;
    }
    .social-link:hover {
        color: white;
        background: rgba(255, 255, 255, 0.2);
    }
    .copyright {
        max-width: 1200px;
        margin: 2rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center;
        color: #9ca3af;
    }
    @keyframes fade-right {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes pulse {
        50% { opacity: 0.4; }
    }
    @media (max-width: 1024px) {
        .card-grid.three {
            grid-template-columns: repeat(2, 1fr);
        }
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .card-grid.three, .form-row, .footer-grid {
            grid-template-columns: 1fr;
        }
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .hero-cta, .hero-secondary {
            width: 100%;
        }
    }
"#;
