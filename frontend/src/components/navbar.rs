use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::{BarMode, MenuSurface, NavAction, NavState, Section};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Section the page currently considers active.
    #[prop_or_default]
    pub active_section: Section,
    #[prop_or_default]
    pub on_navigate: Option<Callback<Section>>,
    #[prop_or_default]
    pub on_start_project: Option<Callback<()>>,
    #[prop_or_default]
    pub is_scrolled: bool,
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav = {
        let active = props.active_section;
        let scrolled = props.is_scrolled;
        use_reducer(move || NavState::new(active, scrolled, viewport_width()))
    };

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |active| {
                nav.dispatch(NavAction::Adopt(*active));
                || ()
            },
            props.active_section,
        );
    }
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |scrolled| {
                nav.dispatch(NavAction::AdoptScrolled(*scrolled));
                || ()
            },
            props.is_scrolled,
        );
    }
    {
        let nav = nav.clone();
        use_event_with_window("resize", move |_: Event| {
            nav.dispatch(NavAction::Resized(viewport_width()));
        });
    }

    let select = {
        let nav = nav.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |section: Section| {
            nav.dispatch(NavAction::Select(section));
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(section);
            }
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let start_project = {
        let on_start_project = props.on_start_project.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_start_project) = &on_start_project {
                on_start_project.emit(());
            }
        })
    };

    let link = |section: Section, class: &'static str, with_icon: bool| -> Html {
        let onclick = {
            let select = select.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                select.emit(section);
            })
        };
        let active = nav.current == section;
        html! {
            <a
                key={section.id()}
                href={section.anchor()}
                class={classes!(class, active.then_some("active"))}
                aria-current={if active { "page" } else { "false" }}
                {onclick}
            >
                { if with_icon {
                    html! { <span class="nav-icon">{section.icon()}</span> }
                } else {
                    html! {}
                } }
                <span class="nav-label">{section.label()}</span>
            </a>
        }
    };

    let burger = html! {
        <button class="burger-menu" aria-label="Open menu" onclick={toggle_menu}>
            { if nav.menu_open { "✕" } else { "☰" } }
        </button>
    };

    let menu_links = |class: &'static str| -> Html {
        html! {
            <>
                { for Section::ALL.into_iter().map(|section| link(section, class, true)) }
                <div class="menu-cta">
                    <button class="cta-button wide" onclick={start_project.clone()}>
                        {"Start Project"}
                    </button>
                </div>
            </>
        }
    };

    let bar = match nav.bar_mode() {
        BarMode::Top => html! {
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#home" class="nav-logo" onclick={{
                        let select = select.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            select.emit(Section::Home);
                        })
                    }}>
                        <span class="logo-mark">{"C"}</span>
                        <span class="logo-text">{"Crestovix"}</span>
                    </a>
                    <div class="nav-links">
                        { for Section::ALL.into_iter().map(|section| link(section, "nav-link", false)) }
                    </div>
                    <div class="nav-actions">
                        <button class="cta-button" onclick={start_project.clone()}>
                            {"🚀 Start Project"}
                        </button>
                        { burger.clone() }
                    </div>
                </div>
                { if nav.menu_surface() == Some(MenuSurface::Dropdown) {
                    html! {
                        <div class="nav-dropdown">
                            { menu_links("dropdown-link") }
                        </div>
                    }
                } else {
                    html! {}
                } }
            </nav>
        },
        BarMode::Bottom => html! {
            <nav class="bottom-nav">
                <div class="bottom-bar">
                    { burger.clone() }
                    <div class="bottom-links">
                        { for Section::ALL.into_iter().map(|section| link(section, "bottom-link", true)) }
                    </div>
                    <button class="cta-button compact" onclick={start_project.clone()}>
                        <span>{"🚀"}</span>
                        <span class="cta-label">{"Start"}</span>
                    </button>
                </div>
                { if nav.menu_surface() == Some(MenuSurface::Sheet) {
                    html! {
                        <div class="nav-sheet">
                            { menu_links("sheet-link") }
                        </div>
                    }
                } else {
                    html! {}
                } }
            </nav>
        },
    };

    html! {
        <>
            { bar }
            { if nav.bar_mode() == BarMode::Top {
                html! { <div class="nav-spacer"></div> }
            } else {
                html! {}
            } }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: linear-gradient(to bottom, rgba(15, 23, 42, 0.8), transparent);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        animation: nav-drop 0.4s ease-out;
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-spacer {
                        height: 4rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .logo-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        color: white;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                    }
                    .logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #fff, #bfdbfe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: all 0.3s;
                        padding: 0.5rem 0;
                    }
                    .nav-link:hover {
                        color: white;
                    }
                    .nav-link.active {
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(to right, rgba(37, 99, 235, 0.2), rgba(147, 51, 234, 0.2));
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .cta-button {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        font-size: 0.875rem;
                        color: white;
                        cursor: pointer;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                        transition: transform 0.2s, box-shadow 0.3s;
                    }
                    .cta-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 10px 25px rgba(59, 130, 246, 0.25);
                    }
                    .cta-button.wide {
                        width: 100%;
                        justify-content: center;
                        padding: 0.75rem;
                    }
                    .cta-button.compact {
                        padding: 0.5rem 0.75rem;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.5rem;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .nav-dropdown, .nav-sheet {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        padding: 1rem 1.5rem;
                    }
                    .nav-dropdown {
                        background: rgba(15, 23, 42, 0.95);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .dropdown-link, .sheet-link {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        color: #d1d5db;
                        text-decoration: none;
                    }
                    .dropdown-link.active, .sheet-link.active {
                        color: white;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .menu-cta {
                        padding-top: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .bottom-nav {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        width: 100%;
                        max-width: 48rem;
                        padding: 0 1rem;
                        box-sizing: border-box;
                        animation: nav-rise 0.4s ease-out;
                    }
                    .bottom-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 0.75rem;
                        padding: 0.5rem 0.75rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(40px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .bottom-nav .burger-menu {
                        display: block;
                    }
                    .bottom-links {
                        flex: 1;
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .bottom-link {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 0.5rem 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #d1d5db;
                        text-decoration: none;
                        user-select: none;
                    }
                    .bottom-link.active {
                        color: white;
                        background: linear-gradient(to right, rgba(37, 99, 235, 0.6), rgba(147, 51, 234, 0.6));
                    }
                    .nav-icon {
                        font-size: 1.25rem;
                    }
                    .nav-sheet {
                        margin-top: 0.75rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(40px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    @keyframes nav-drop {
                        from { opacity: 0; transform: translateY(-50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes nav-rise {
                        from { opacity: 0; transform: translate(-50%, 50px); }
                        to { opacity: 1; transform: translate(-50%, 0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .bottom-links {
                            gap: 0.25rem;
                        }
                    }
                    @media (max-width: 640px) {
                        .top-nav .cta-button {
                            display: none;
                        }
                        .nav-label, .cta-label {
                            display: none;
                        }
                        .nav-sheet .nav-label, .nav-dropdown .nav-label {
                            display: inline;
                        }
                    }
                "#}
            </style>
        </>
    }
}
