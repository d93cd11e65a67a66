use crate::capability::CapabilityState;
use crate::config::SiteConfig;
use crate::content;
use crate::decoration::{DecorationPlan, DecorationSet, Variant};
use crate::dom::{self, DomEvents, ElementStyle};
use crate::error::EnvError;
use crate::interaction::MenuState;
use crate::nav::{ActiveSectionTracker, SectionId};
use crate::pointer::PointerPosition;
use crate::reveal::RevealLatch;
use crate::scope::{
    layout_properties, watch_viewport, EventSource, PresentationFlags, Subscription,
    SubscriptionLedger,
};
use crate::sections::{EducationSection, ProjectsSection, SkillsSection, SummarySection, VolunteeringSection};
use crate::telemetry::{self, log_event, LogLevel};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

const MENU_CONTAINER: &str = ".mobile-menu-container";
const BACKGROUND_PARTICLES_DESKTOP: usize = 15;
const BACKGROUND_PARTICLES_MOBILE: usize = 8;

pub(crate) fn log_degraded(config: &SiteConfig, context: &str, error: &EnvError) {
    log_event(
        config,
        LogLevel::Debug,
        "env_degraded",
        json!({ "context": context, "error": error.kind(), "detail": error.to_string() }),
    );
}

#[hook]
pub(crate) fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[hook]
fn use_ledger() -> SubscriptionLedger {
    use_context::<SubscriptionLedger>().unwrap_or_default()
}

#[hook]
pub(crate) fn use_capability_state() -> CapabilityState {
    use_context::<CapabilityState>().unwrap_or_default()
}

#[hook]
fn use_capability(config: SiteConfig, ledger: SubscriptionLedger) -> CapabilityState {
    let policy = config.motion_policy;
    let capability =
        use_state_eq(move || CapabilityState::classify(dom::capability_inputs(), policy));

    {
        let capability = capability.clone();
        use_effect_with((), move |_| {
            let last = Rc::new(Cell::new(*capability));
            let recompute: Rc<dyn Fn()> = Rc::new(move || {
                let next = CapabilityState::classify(dom::capability_inputs(), policy);
                if next != last.get() {
                    last.set(next);
                    log_event(
                        &config,
                        LogLevel::Debug,
                        "capability_changed",
                        json!({ "capability": next }),
                    );
                }
                capability.set(next);
            });

            let subscriptions = match DomEvents::window(&ledger) {
                Ok(events) => watch_viewport(&events, recompute),
                Err(error) => {
                    log_degraded(&config, "capability", &error);
                    Vec::new()
                }
            };

            move || drop(subscriptions)
        });
    }

    *capability
}

#[hook]
pub(crate) fn use_reveal(node: NodeRef) -> RevealLatch {
    let config = use_site_config();
    let revealed = use_state_eq(RevealLatch::default);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let threshold = config.reveal_threshold;
            let latch = Rc::new(RefCell::new(RevealLatch::default()));

            let observer = match node.cast::<Element>() {
                Some(element) => {
                    let latch = latch.clone();
                    let revealed = revealed.clone();
                    let section = element.id();
                    dom::observe_visibility(&element, threshold, move |fraction| {
                        if latch.borrow_mut().observe(fraction, threshold) {
                            log_event(
                                &config,
                                LogLevel::Debug,
                                "reveal_triggered",
                                json!({ "section": section, "fraction": fraction }),
                            );
                            revealed.set(RevealLatch::Revealed);
                        }
                    })
                }
                None => Err(EnvError::NotMounted),
            };

            let observer = match observer {
                Ok(observer) => Some(observer),
                Err(error) => {
                    log_degraded(&config, "reveal", &error);
                    if latch.borrow_mut().force() {
                        log_event(&config, LogLevel::Debug, "reveal_fallback", json!({}));
                    }
                    revealed.set(RevealLatch::Revealed);
                    None
                }
            };

            move || drop(observer)
        });
    }

    *revealed
}

#[hook]
fn use_active_section() -> SectionId {
    let config = use_site_config();
    let ledger = use_ledger();
    let active = use_state_eq(|| SectionId::Hero);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let tracker = RefCell::new(ActiveSectionTracker::new(config.nav_lookahead_px));
            let refresh: Rc<dyn Fn()> = Rc::new(move || {
                let mut tracker = tracker.borrow_mut();
                if tracker.update(&dom::section_offsets(), dom::scroll_y()) {
                    log_event(
                        &config,
                        LogLevel::Debug,
                        "active_section_changed",
                        json!({ "section": tracker.active().as_str() }),
                    );
                    active.set(tracker.active());
                }
            });
            refresh();

            let subscription = match DomEvents::window(&ledger) {
                Ok(events) => Some(events.listen("scroll", Box::new(move |_: &Event| refresh()))),
                Err(error) => {
                    log_degraded(&config, "active_section", &error);
                    None
                }
            };

            move || drop(subscription)
        });
    }

    *active
}

#[hook]
fn use_pointer(enabled: bool) -> PointerPosition {
    let config = use_site_config();
    let ledger = use_ledger();
    let pointer = use_state_eq(PointerPosition::default);

    {
        let pointer = pointer.clone();
        use_effect_with(enabled, move |enabled| {
            let mut subscriptions: Vec<Subscription> = Vec::new();

            if *enabled {
                match DomEvents::window(&ledger) {
                    Ok(events) => {
                        for kind in ["mousemove", "touchmove"] {
                            let pointer = pointer.clone();
                            subscriptions.push(events.listen(
                                kind,
                                Box::new(move |event: &Event| {
                                    if let Some(position) = dom::pointer_position(event) {
                                        pointer.set(position);
                                    }
                                }),
                            ));
                        }
                    }
                    Err(error) => log_degraded(&config, "pointer", &error),
                }
            }

            move || drop(subscriptions)
        });
    }

    *pointer
}

fn apply_page_flags(
    capability: &CapabilityState,
) -> Result<Vec<PresentationFlags<ElementStyle>>, EnvError> {
    let mut body = PresentationFlags::new(ElementStyle(dom::body()?));
    if capability.is_mobile() {
        body.set_property("overscroll-behavior", "none")?;
        body.set_property("-webkit-overflow-scrolling", "touch")?;
    }
    if capability.reduced_motion {
        body.add_class("reduced-motion")?;
    }

    let mut root = PresentationFlags::new(ElementStyle(dom::root_element()?));
    for (name, value) in layout_properties(capability) {
        root.set_property(name, &value)?;
    }

    Ok(vec![body, root])
}

#[derive(Properties, PartialEq)]
struct OptimizationsProps {
    children: Html,
}

#[function_component(MobileOptimizations)]
fn mobile_optimizations(props: &OptimizationsProps) -> Html {
    let config = use_site_config();
    let capability = use_capability_state();

    use_effect_with(capability, move |capability| {
        let flags = apply_page_flags(capability).unwrap_or_else(|error| {
            log_degraded(&config, "page_flags", &error);
            Vec::new()
        });

        move || drop(flags)
    });

    props.children.clone()
}

#[derive(Properties, PartialEq)]
pub(crate) struct DecorationsProps {
    pub variant: Variant,
    pub count: usize,
    #[prop_or_default]
    pub palette: &'static [&'static str],
}

#[function_component(Decorations)]
pub(crate) fn decorations(props: &DecorationsProps) -> Html {
    let config = use_site_config();
    let capability = use_capability_state();
    let rng = use_mut_ref(dom::seeded_rng);
    let set = use_mut_ref(|| None::<DecorationSet>);

    let mut rng = rng.borrow_mut();
    let mut set = set.borrow_mut();
    let rebuilt = match set.as_mut() {
        Some(existing) => {
            existing.regenerate(props.variant, props.count, props.palette, &mut rng)
        }
        None => {
            *set = Some(DecorationSet::new(
                props.variant,
                props.count,
                props.palette,
                &mut rng,
            ));
            true
        }
    };

    if rebuilt {
        log_event(
            &config,
            LogLevel::Debug,
            "decorations_generated",
            json!({ "variant": props.variant.as_str(), "count": props.count }),
        );
    }

    let Some(set) = set.as_ref() else {
        return Html::default();
    };

    let container = match set.variant() {
        Variant::Shapes => "geometric-shapes",
        Variant::Particles | Variant::HeroParticles => "floating-particles",
        Variant::Pulse => "pulse-particles",
    };

    html! {
        <div class={container} aria-hidden="true">
            { for set.elements().iter().map(|element| {
                let mut style = element.style();
                if capability.reduced_motion {
                    let duration = capability.scaled_duration(element.animation_duration_sec);
                    style.push_str(&format!(" animation-duration: {duration:.2}s;"));
                }
                html! {
                    <div class={classes!("decoration", element.kind.class())} {style} />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SectionDecorProps {
    pub section: SectionId,
}

#[function_component(SectionDecor)]
pub(crate) fn section_decor(props: &SectionDecorProps) -> Html {
    let capability = use_capability_state();
    let plan = DecorationPlan::for_section(props.section, &capability);

    html! {
        <>
            if plan.shapes > 0 {
                <Decorations variant={Variant::Shapes} count={plan.shapes} />
            }
            if plan.particles > 0 {
                <Decorations variant={plan.particle_variant} count={plan.particles} palette={plan.palette} />
            }
        </>
    }
}

#[function_component(InteractiveBackground)]
fn interactive_background() -> Html {
    let capability = use_capability_state();
    let pointer = use_pointer(!capability.reduced_motion);

    let body = if capability.reduced_motion {
        html! {
            <>
                <div class="glow glow-primary pulse" />
                <div class="glow glow-accent pulse" style="animation-delay: 2s;" />
            </>
        }
    } else {
        let count = capability.pick(
            BACKGROUND_PARTICLES_MOBILE,
            BACKGROUND_PARTICLES_DESKTOP,
            BACKGROUND_PARTICLES_DESKTOP,
        );

        html! {
            <>
                <div class="pointer-field" style={format!("transform: {};", pointer.particle_transform())}>
                    <Decorations variant={Variant::Pulse} count={count} />
                </div>
                <div class="wave wave-primary" style={pointer.primary_wave_style()} />
                <div class="wave wave-accent" style={pointer.secondary_wave_style()} />
            </>
        }
    };

    html! {
        <div class="interactive-background" aria-hidden="true">
            <div class="background-gradient">{body}</div>
            <div class="background-overlay" />
        </div>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let config = use_site_config();
    let ledger = use_ledger();
    let active = use_active_section();
    let menu = use_state_eq(MenuState::default);

    {
        let menu = menu.clone();
        use_effect_with(*menu, move |state| {
            let mut outside_click: Option<Subscription> = None;
            let mut scroll_lock: Option<PresentationFlags<ElementStyle>> = None;

            if state.is_open() {
                let current = *state;
                match DomEvents::document(&ledger) {
                    Ok(events) => {
                        outside_click = Some(events.listen(
                            "click",
                            Box::new(move |event: &Event| {
                                let inside = dom::event_within(event, MENU_CONTAINER);
                                if let Some(next) = current.after_document_click(inside) {
                                    menu.set(next);
                                }
                            }),
                        ));
                    }
                    Err(error) => log_degraded(&config, "menu", &error),
                }

                let lock = dom::body().and_then(|body| {
                    let mut flags = PresentationFlags::new(ElementStyle(body));
                    flags.set_property("overflow", "hidden")?;
                    Ok(flags)
                });
                match lock {
                    Ok(flags) => scroll_lock = Some(flags),
                    Err(error) => log_degraded(&config, "menu", &error),
                }
            }

            move || {
                drop(outside_click);
                drop(scroll_lock);
            }
        });
    }

    let on_select = {
        let menu = menu.clone();
        Callback::from(move |id: SectionId| {
            if let Err(error) = dom::scroll_to_section(id) {
                log_degraded(&config, "scroll_to_section", &error);
            }
            menu.set(MenuState::Closed);
        })
    };

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let menu_open = menu.is_open();

    html! {
        <nav class="site-nav glass-card">
            <div class="nav-inner">
                <span class="brand">{content::BRAND}</span>

                <div class="nav-desktop">
                    { for SectionId::ALL.iter().map(|&id| html! {
                        <button
                            type="button"
                            class={classes!("nav-link", (active == id).then_some("active"))}
                            onclick={on_select.reform(move |_: MouseEvent| id)}
                        >
                            {id.label()}
                        </button>
                    })}
                </div>

                <div class="nav-mobile mobile-menu-container">
                    <button
                        type="button"
                        class="menu-toggle"
                        aria-label="Toggle mobile menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle}
                    >
                        {if menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            if menu_open {
                <div class="nav-drawer mobile-menu-container">
                    <div class="nav-drawer-links">
                        { for SectionId::ALL.iter().map(|&id| html! {
                            <button
                                type="button"
                                class={classes!("drawer-link", (active == id).then_some("active"))}
                                onclick={on_select.reform(move |_: MouseEvent| id)}
                            >
                                <span class="drawer-icon" aria-hidden="true">{id.icon()}</span>
                                <span>{id.label()}</span>
                                if active == id {
                                    <span class="drawer-dot" aria-hidden="true" />
                                }
                            </button>
                        })}
                    </div>
                    <div class="nav-drawer-footer">
                        <p class="muted">{"Available for opportunities"}</p>
                        <p class="open-to-work"><span class="status-dot" aria-hidden="true" />{"Open to work"}</p>
                    </div>
                </div>
            }
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_site_config();
    let capability = use_capability_state();
    let latch = use_state_eq(RevealLatch::default);

    {
        let latch = latch.clone();
        use_effect_with((), move |_| {
            let mut next = *latch;
            if next.force() {
                latch.set(next);
            }
            || ()
        });
    }

    let on_scroll_next = Callback::from(move |_: MouseEvent| {
        if let Err(error) = dom::scroll_to_section(SectionId::Summary) {
            log_degraded(&config, "scroll_to_section", &error);
        }
    });

    let attachment = if capability.is_mobile() { "scroll" } else { "fixed" };
    let style = format!(
        "background-image: linear-gradient(135deg, hsl(215 75% 15% / 0.95), hsl(190 85% 45% / 0.9)), url('{}'); background-size: cover; background-position: center; background-attachment: {attachment};",
        content::HERO_BACKGROUND
    );

    html! {
        <section id={SectionId::Hero.as_str()} class="hero" style={style}>
            <SectionDecor section={SectionId::Hero} />

            <div class="hero-glows" aria-hidden="true">
                <div class="glow glow-accent floating-card" />
                <div class="glow glow-primary floating-delayed" />
                <div class="glow glow-teal floating-slow" />
            </div>

            <div class="container hero-content">
                <div class={classes!("hero-photo", latch.class("hidden-scaled", "fade-in-scale"))}>
                    <div class="photo-frame glass-card floating-card">
                        <img src={content::PROFILE_PHOTO} alt={content::NAME} loading="eager" />
                    </div>
                </div>

                <div class={classes!("hero-heading", latch.class("hidden-below", "slide-in-up"))}>
                    <h1 class="hero-name">{content::NAME}</h1>
                    <h2 class="hero-title">{content::TITLE}</h2>
                    <p class="hero-tagline">{content::TAGLINE}</p>
                </div>

                <div class={classes!("contact-row", latch.class("hidden-below", "slide-in-up"))}>
                    { for content::CONTACTS.iter().enumerate().map(|(index, contact)| html! {
                        <a
                            class="contact-pill"
                            href={contact.href}
                            style={format!("transition-delay: {}ms;", 700 + index * 100)}
                        >
                            <span class="contact-icon" aria-hidden="true">{contact.icon}</span>
                            <span class="label-full">{contact.label}</span>
                            <span class="label-short">{contact.short_label()}</span>
                        </a>
                    })}
                </div>

                <div class={classes!("hero-actions", latch.class("hidden-below", "slide-in-up"))}>
                    <a class="cta" href={content::RESUME_HREF} download={content::RESUME_DOWNLOAD_NAME}>
                        {"Download Resume"}
                    </a>
                    <a class="cta" href={content::GITHUB_HREF} target="_blank" rel="noopener noreferrer">
                        {"View Projects"}
                    </a>
                </div>
            </div>

            <button type="button" class="scroll-indicator floating-card" aria-label="Scroll to next section" onclick={on_scroll_next}>
                <span class="scroll-mouse"><span class="scroll-wheel" /></span>
                <span class="scroll-chevron" aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = *use_state(SiteConfig::from_build_env);
    let ledger = (*use_state(SubscriptionLedger::default)).clone();
    let capability = use_capability(config, ledger.clone());

    {
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            log_event(
                &config,
                LogLevel::Info,
                "app_mounted",
                json!({ "capability": capability, "subscriptions": ledger.live() }),
            );
            || ()
        });
    }

    html! {
        <ContextProvider<SiteConfig> context={config}>
            <ContextProvider<SubscriptionLedger> context={ledger}>
                <ContextProvider<CapabilityState> context={capability}>
                    <MobileOptimizations>
                        <div class="page">
                            <InteractiveBackground />
                            <Navigation />
                            <main>
                                <Hero />
                                <SummarySection />
                                <SkillsSection />
                                <EducationSection />
                                <ProjectsSection />
                                <VolunteeringSection />
                            </main>
                        </div>
                    </MobileOptimizations>
                </ContextProvider<CapabilityState>>
            </ContextProvider<SubscriptionLedger>>
        </ContextProvider<SiteConfig>>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    telemetry::init(&config);

    yew::Renderer::<App>::with_root(
        dom::document()
            .ok()
            .and_then(|document| document.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
