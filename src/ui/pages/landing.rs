//! Landing page
//!
//! Marketing home for Campusly:
//! - SEO meta tags
//! - Hero with calls to the guided demo and the pricing table
//! - Feature grid
//! - Pricing with a billing toggle
//! - Testimonial carousel
//! - FAQ built on native disclosures, closing call to action and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use super::pricing::PricingSection;
use super::testimonials::TestimonialCarousel;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, use_theme_context};

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <SeoMeta />

        <div class="landing">
            <Header theme=theme />

            <section class="landing-hero">
                <h1 class="landing-hero-title landing-fade-in-up">
                    "The operating system for your school"
                </h1>
                <p class="landing-hero-lead landing-fade-in-up landing-delay-200">
                    "Admissions, attendance, grades and fees for every campus. Set up in an afternoon, loved by staff and parents."
                </p>
                <div class="landing-hero-actions landing-fade-in-up landing-delay-400">
                    <A href="/demo" attr:class="landing-btn-primary" attr:aria-label="Start the guided product demo">
                        <Icon name=icons::PLAY class="icon-text"/>
                        "Start demo"
                    </A>
                    <a href="#pricing" class="landing-btn-secondary">"View pricing"</a>
                </div>
                <a href="#features" class="landing-hero-scroll" aria-label="Scroll to features">
                    <Icon name=icons::CHEVRON_DOWN class="icon-standalone"/>
                </a>
            </section>

            <LandingSection
                id="features"
                title="Why schools switch to Campusly"
                lead="One platform replaces the spreadsheets, paper forms and five separate logins."
            >
                <ul class="landing-feature-grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| view! {
                            <li class="landing-feature">
                                <span class="landing-feature-icon"><Icon name=icon/></span>
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </LandingSection>

            <PricingSection />
            <TestimonialCarousel />

            <LandingSection id="faq" title="Frequently asked questions">
                <div class="landing-faq">
                    {FAQ
                        .iter()
                        .map(|&(question, answer)| view! {
                            // Native disclosure, usable before hydration
                            <details class="landing-faq-item">
                                <summary>
                                    <span>{question}</span>
                                    <Icon name=icons::CHEVRON_DOWN class="landing-faq-chevron"/>
                                </summary>
                                <p>{answer}</p>
                            </details>
                        })
                        .collect_view()}
                </div>
            </LandingSection>

            <section class="landing-cta">
                <h2>"See it in two minutes"</h2>
                <p>"Take the guided tour. Use the arrow keys or let it play on its own."</p>
                <A href="/demo" attr:class="landing-btn-primary">"Start demo"</A>
            </section>

            <Footer />
        </div>
    }
}

/// Titled block of the landing page, anchored by `id`
#[component]
fn LandingSection(
    id: &'static str,
    title: &'static str,
    #[prop(optional)]
    lead: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="landing-section">
            <header class="landing-section-header">
                <h2>{title}</h2>
                {lead.map(|lead| view! { <p>{lead}</p> })}
            </header>
            {children()}
        </section>
    }
}

const FEATURES: [(&str, &str, &str); 6] = [
    (icons::LAYERS, "Every campus, one account", "Run several schools from one dashboard with shared settings and separate data."),
    (icons::ACTIVITY, "Attendance in seconds", "Teachers mark the register from any device. Parents are notified of absences automatically."),
    (icons::CREDIT_CARD, "Fees without paperwork", "Online invoices, card and bank payments, automatic reminders for overdue fees."),
    (icons::GLOBE, "Your own domain", "Start on yourschool.campusly.app and bring a custom domain with free SSL when ready."),
    (icons::SETTINGS, "Roles that fit", "Administrators, teachers, parents and students each get exactly the tools they need."),
    (icons::CHECK, "Private by default", "Encrypted at rest and in transit. Your data is never shared or sold."),
];

const NAV: [(&str, &str); 5] = [
    ("#features", "Features"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
    ("/demo", "Demo"),
    ("/admin", "Admin"),
];

#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);

    view! {
        <header class="landing-header">
            <A href="/" attr:class="landing-brand">
                <Logo />
                <span>"Campusly"</span>
            </A>

            <nav class="landing-nav" class:landing-nav-open=move || menu_open.get()>
                {NAV
                    .iter()
                    .map(|&(href, label)| {
                        // In-page anchors scroll and close the mobile menu; routes leave the page
                        if href.starts_with('#') {
                            view! { <a href=href on:click=close_menu>{label}</a> }.into_any()
                        } else {
                            view! { <A href=href>{label}</A> }.into_any()
                        }
                    })
                    .collect_view()}
                <ThemeToggle theme=theme />
            </nav>

            <button
                class="landing-menu-button btn-icon"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || {
                    let icon = if menu_open.get() { icons::X } else { icons::MENU };
                    view! { <Icon name=icon class="icon-standalone"/> }
                }}
            </button>
        </header>
    }
}

#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="btn-icon"
            on:click=move |_| theme.toggle()
            aria-label="Switch colour scheme"
            title=move || format!("Theme: {}", theme.mode.get().display_name())
        >
            {move || {
                let icon = if theme.is_dark.get() { icons::SUN } else { icons::MOON };
                view! { <Icon name=icon class="icon-standalone"/> }
            }}
        </button>
    }
}

const SITE_URL: &str = "https://campusly.app/";
const SITE_TITLE: &str = "Campusly - School management platform";
const SITE_DESCRIPTION: &str = "Admissions, attendance, grades and fees for every campus. Try the guided demo or start a free 14-day trial.";

const STRUCTURED_DATA: &str = r#"{"@context":"https://schema.org","@type":"SoftwareApplication","name":"Campusly","applicationCategory":"EducationalApplication","operatingSystem":"Web","url":"https://campusly.app","offers":{"@type":"AggregateOffer","lowPrice":"29","highPrice":"199","priceCurrency":"USD"}}"#;

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content="school management, student information system, attendance, gradebook, school fees, multi-campus" />
        <Link rel="canonical" href=SITE_URL />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:image" content="https://campusly.app/og-image.png" />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=SITE_TITLE />
        <Meta name="twitter:description" content=SITE_DESCRIPTION />

        <script type="application/ld+json" inner_html=STRUCTURED_DATA></script>
    }
}

const FAQ: [(&str, &str); 6] = [
    ("How long does setup take?", "Most schools are live the same day. Create your school, invite staff and import students from a spreadsheet."),
    ("Can we use our own domain?", "Yes. Every school gets a campusly.app subdomain, and you can add a custom domain with an automatically issued certificate."),
    ("What happens after the trial?", "Pick a plan or let the trial lapse. Nothing is charged without your confirmation and your data stays available for export."),
    ("Do you support several campuses?", "The District plan manages any number of campuses under one account with shared settings and separate data."),
    ("How do parents pay fees?", "Parents pay by card or bank transfer from the parent portal. Failed payments are retried and reminders are sent automatically."),
    ("Can we export our data?", "Everything can be exported as CSV or JSON at any time, from any plan."),
];

/// Mortarboard mark used by the landing header, the demo and the console
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <span class="logo-mark" aria-hidden="true">
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M12 4l9 5-9 5-9-5 9-5z" />
                <path d="M7 12v4c0 1.5 2.2 3 5 3s5-1.5 5-3v-4" />
            </svg>
        </span>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <div class="landing-footer-brand">
                <Logo />
                <p>"School management for growing schools and districts."</p>
            </div>
            <nav aria-label="Product">
                <h4>"Product"</h4>
                <A href="/demo">"Guided demo"</A>
                <a href="#pricing">"Pricing"</a>
            </nav>
            <nav aria-label="Company">
                <h4>"Company"</h4>
                <a href="mailto:support@campusly.app">"Contact support"</a>
                <A href="/admin">"Operator console"</A>
            </nav>
            <small class="landing-footer-legal">"© 2025 Campusly"</small>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_exist() {
        for (href, _) in NAV {
            assert!(href.starts_with('#') || href.starts_with('/'), "{href}");
        }
        assert!(NAV.iter().any(|(href, _)| *href == "#pricing"));
    }

    #[test]
    fn test_structured_data_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(STRUCTURED_DATA).unwrap();
        assert_eq!(value["@type"], "SoftwareApplication");
    }
}
