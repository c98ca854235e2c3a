use yew::prelude::*;

use crate::components::button::Button;
use crate::components::cards::{AggressionCard, AppFeatureRow, FeatureCard, GuidelineCard, LegalCard};
use crate::components::footer::Footer;
use crate::components::section_heading::SectionHeading;
use crate::content::{
    legal_quick_check, AGGRESSION_TYPES, APP_FEATURES, BEHAVIOR_SECTION, COMMUNITY_IMAGE,
    COMMUNITY_SECTION, CONFLICT_CAUSES, FEATURES_IMAGE, FEATURES_SECTION, GUIDELINES, HERO_IMAGE,
    ISSUE_SECTION,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <div class="hero-blob hero-blob--green"></div>
                <div class="hero-blob hero-blob--amber"></div>

                <div class="container">
                    <div class="hero-row">
                        <div class="hero-copy">
                            <div class="hero-badge">
                                <span class="pulse-dot"></span>
                                <span>{"New: AI Dog Behavior Scanner"}</span>
                            </div>
                            <h1>
                                {"Coexist with"}<br />
                                <span class="gradient-text">{"Nature & Neighbors"}</span>
                            </h1>
                            <p class="hero-lead">
                                {"Building a community where humans and dogs live in harmony. Safety, compassion, and understanding, all in one app."}
                            </p>
                            <div class="hero-actions">
                                <Button primary={true}>
                                    <span>{"⬇"}</span>{" Get SafeStreet App"}
                                </Button>
                                <Button>
                                    <span>{"📖"}</span>{" Read Guidelines"}
                                </Button>
                            </div>
                        </div>

                        <div class="hero-image">
                            <div class="hero-frame">
                                <img src={HERO_IMAGE} alt="Dog and Human High Five" />
                                <div class="hero-quote">
                                    <p class="hero-quote-text">{"\"Dogs are considered human's best friend.\""}</p>
                                    <p class="hero-quote-source">{"- From the Guidelines"}</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="mock-app">
                        <div class="mock-app-stripe"></div>
                        <div class="mock-app-body">
                            <div class="mock-app-screen">
                                <div class="window-dots">
                                    <span class="dot dot--red"></span>
                                    <span class="dot dot--amber"></span>
                                    <span class="dot dot--green"></span>
                                </div>
                                <div class="mock-alert">
                                    <div class="mock-alert-title">
                                        <span class="tone-amber">{"⚠"}</span>
                                        <span>{"Territorial Warning"}</span>
                                    </div>
                                    <p>{"High activity reported in Sector 4. Proceed with caution."}</p>
                                </div>
                                <div class="mock-alert mock-alert--placeholder">
                                    <div class="bar bar--short"></div>
                                    <div class="bar bar--long"></div>
                                </div>
                            </div>
                            <div class="mock-app-copy">
                                <h3>{"Real-time Safety Alerts"}</h3>
                                <p>{"Get notified about breeding seasons, aggressive packs, or vaccination drives in your gated community."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id={ISSUE_SECTION} class="section section--alt">
                <div class="container">
                    <SectionHeading
                        title="Why Conflict Happens"
                        subtitle={AttrValue::from("Understanding the root cause is the first step to solution.")}
                    />
                    <div class="grid grid--3">
                        { for CONFLICT_CAUSES.iter().map(|card| html! {
                            <FeatureCard key={card.title} card={card} />
                        }) }
                    </div>
                </div>
            </section>

            <section id={BEHAVIOR_SECTION} class="section">
                <div class="container">
                    <SectionHeading
                        title="Decoding Canine Aggression"
                        subtitle={AttrValue::from("Dogs don't bite without reason. Learn to read the signs.")}
                    />
                    <div class="grid grid--3">
                        { for AGGRESSION_TYPES.iter().map(|item| html! {
                            <AggressionCard key={item.title} item={item} />
                        }) }
                    </div>
                </div>
            </section>

            <section id={FEATURES_SECTION} class="section section--surface">
                <div class="container">
                    <div class="features-row">
                        <div class="features-copy">
                            <h2>
                                {"Technology for"}<br />
                                <span class="accent-text">{"Safer Communities"}</span>
                            </h2>
                            <p class="features-lead">
                                {"The SafeStreet app connects residents, security guards, and animal welfare organizations to manage the ecosystem effectively."}
                            </p>
                            <div class="features-list">
                                { for APP_FEATURES.iter().map(|feature| html! {
                                    <AppFeatureRow key={feature.title} feature={feature} />
                                }) }
                            </div>
                        </div>
                        <div class="features-image">
                            <img src={FEATURES_IMAGE} alt="Community Discussion" />
                            <div class="features-image-shade"></div>
                            <LegalCard facts={legal_quick_check()} />
                        </div>
                    </div>
                </div>
            </section>

            <section id={COMMUNITY_SECTION} class="section section--community">
                <div class="community-backdrop">
                    <img src={COMMUNITY_IMAGE} alt="Park Background" />
                    <div class="community-backdrop-shade"></div>
                </div>

                <div class="container community-content">
                    <SectionHeading
                        title="Community Guidelines"
                        subtitle={AttrValue::from("Actionable steps for a peaceful environment.")}
                        dark_bg={true}
                    />
                    <div class="grid grid--2">
                        { for GUIDELINES.iter().map(|section| html! {
                            <GuidelineCard key={section.category} section={section} />
                        }) }
                    </div>

                    <div class="chapter-banner">
                        <div class="chapter-banner-mark">{"👥"}</div>
                        <h3>{"Start a SafeStreet Chapter"}</h3>
                        <p>
                            {"Empower your Gated Community or University with the tools to manage dog-human conflict scientifically and humanely."}
                        </p>
                        <Button class={classes!("btn-light")}>{"Register Your Community"}</Button>
                    </div>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section {
                    padding: 5rem 0;
                    background: var(--bg);
                    transition: background 0.3s ease;
                }

                .section--alt {
                    background: var(--bg-alt);
                }

                .section--surface {
                    background: var(--surface);
                    position: relative;
                    overflow: hidden;
                }

                .grid {
                    display: grid;
                    gap: 1.75rem;
                }

                .grid--2 { grid-template-columns: repeat(2, 1fr); }
                .grid--3 { grid-template-columns: repeat(3, 1fr); }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                    position: relative;
                    z-index: 1;
                }

                .section-heading h2 {
                    font-family: var(--font-serif);
                    font-size: 3rem;
                    margin: 0 0 1rem;
                    color: var(--text);
                }

                .section-heading p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    font-weight: 300;
                    color: var(--text-dim);
                }

                .section-heading.on-dark h2 { color: #fafaf9; }
                .section-heading.on-dark p { color: #d1fae5; }

                .tone-emerald { color: #059669; }
                .tone-amber { color: #f59e0b; }
                .tone-rose { color: #f43f5e; }
                .tone-orange { color: #f97316; }
                .tone-indigo { color: #6366f1; }
                .tone-red { color: #dc2626; }

                .hero {
                    position: relative;
                    padding: 12rem 0 8rem;
                    overflow: hidden;
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 9999px;
                    z-index: 0;
                    pointer-events: none;
                }

                .hero-blob--green {
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 1000px;
                    height: 500px;
                    background: var(--blob-green);
                    filter: blur(120px);
                }

                .hero-blob--amber {
                    top: 10rem;
                    right: 0;
                    width: 500px;
                    height: 500px;
                    background: var(--blob-amber);
                    filter: blur(100px);
                }

                .hero-row {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }

                .hero-copy {
                    flex: 1;
                    z-index: 1;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.375rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    font-size: 0.875rem;
                    color: var(--text-dim);
                }

                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #10b981;
                    animation: pulse 2s infinite;
                }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                .hero h1 {
                    font-family: var(--font-serif);
                    font-size: 4.5rem;
                    font-weight: 800;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                    color: var(--text);
                }

                .gradient-text {
                    background: var(--gradient-text);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-lead {
                    font-size: 1.25rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: var(--text-dim);
                    margin: 1rem 0 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }

                .hero-image {
                    flex: 1;
                    width: 100%;
                }

                .hero-frame {
                    position: relative;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 8px solid var(--surface);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transform: rotate(1deg);
                    transition: transform 0.5s ease;
                }

                .hero-frame:hover { transform: rotate(0deg); }

                .hero-frame img {
                    display: block;
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                }

                .hero-quote {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                    color: #ffffff;
                    background: linear-gradient(to top, rgba(28, 25, 23, 0.7), transparent);
                }

                .hero-quote-text {
                    font-family: var(--font-serif);
                    font-weight: 700;
                    font-size: 1.125rem;
                    margin: 0;
                }

                .hero-quote-source {
                    font-size: 0.875rem;
                    font-weight: 300;
                    opacity: 0.9;
                    margin: 0;
                }

                .mock-app {
                    position: relative;
                    max-width: 56rem;
                    margin: 5rem auto 0;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    overflow: hidden;
                    transition: transform 0.5s ease;
                }

                .mock-app:hover { transform: translateY(-5px); }

                .mock-app-stripe {
                    height: 4px;
                    background: linear-gradient(to right, #10b981, #14b8a6, #06b6d4);
                }

                .mock-app-body {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 2rem;
                }

                .mock-app-screen,
                .mock-app-copy {
                    flex: 1;
                }

                .window-dots {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                }

                .dot--red { background: #f87171; }
                .dot--amber { background: #fbbf24; }
                .dot--green { background: #34d399; }

                .mock-alert {
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--bg);
                }

                .mock-alert p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text-dim);
                }

                .mock-alert-title {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                    font-weight: 700;
                    color: var(--text);
                }

                .mock-alert--placeholder { opacity: 0.6; }

                .bar {
                    height: 0.5rem;
                    border-radius: 0.25rem;
                    background: var(--border-strong);
                }

                .bar--short { width: 33%; margin-bottom: 0.5rem; }
                .bar--long { width: 66%; }

                .mock-app-copy h3 {
                    font-family: var(--font-serif);
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                    color: var(--text);
                }

                .mock-app-copy p {
                    color: var(--text-dim);
                }

                .feature-card,
                .aggression-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    transition: all 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-4px);
                    box-shadow: var(--shadow-card);
                }

                .feature-card-icon,
                .icon-badge {
                    width: fit-content;
                    padding: 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    background: var(--bg-alt);
                    font-size: 1.75rem;
                    line-height: 1;
                }

                .feature-card h3,
                .aggression-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                    color: var(--text);
                }

                .feature-card p {
                    line-height: 1.6;
                    color: var(--text-dim);
                }

                .aggression-card:hover {
                    border-color: rgba(16, 185, 129, 0.5);
                    transform: translateY(-4px);
                }

                .aggression-desc {
                    min-height: 60px;
                    margin: 0 0 1rem;
                    font-size: 0.875rem;
                    color: var(--text-dim);
                }

                .aggression-solution {
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    background: var(--solution-bg);
                    border: 1px solid var(--solution-border);
                }

                .aggression-solution p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text);
                }

                .aggression-solution .solution-label {
                    margin-bottom: 0.25rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: var(--accent);
                }

                .features-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .features-copy h2 {
                    font-family: var(--font-serif);
                    font-size: 2.25rem;
                    margin: 0 0 1.5rem;
                    color: var(--text);
                }

                .accent-text { color: var(--accent); }

                .features-lead {
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                    color: var(--text-dim);
                }

                .features-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .app-feature {
                    display: flex;
                    gap: 1rem;
                }

                .app-feature-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: var(--bg-alt);
                    font-size: 1.5rem;
                }

                .app-feature h4 {
                    margin: 0 0 0.25rem;
                    font-size: 1.125rem;
                    color: var(--text);
                }

                .app-feature p {
                    margin: 0;
                    color: var(--text-dim);
                }

                .features-image {
                    position: relative;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    border: 4px solid var(--bg-alt);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .features-image img {
                    display: block;
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                    opacity: 0.9;
                    transition: transform 0.7s ease;
                }

                .features-image img:hover { transform: scale(1.05); }

                .features-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #1c1917, transparent, transparent);
                    opacity: 0.6;
                }

                .legal-card {
                    position: absolute;
                    left: 1.5rem;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--legal-card-bg);
                    backdrop-filter: blur(12px);
                }

                .legal-card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding-bottom: 0.5rem;
                    margin-bottom: 0.75rem;
                    border-bottom: 1px solid var(--border);
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--text);
                }

                .legal-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .legal-card li {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: var(--text);
                }

                .legal-check {
                    flex-shrink: 0;
                    color: var(--accent);
                }

                .section--community {
                    position: relative;
                    background: #1c1917;
                }

                .community-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .community-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.3;
                    filter: grayscale(1);
                }

                .community-backdrop-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(28, 25, 23, 0.6);
                    backdrop-filter: blur(2px);
                }

                .community-content {
                    position: relative;
                    z-index: 1;
                }

                .guideline-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(28, 25, 23, 0.4);
                    backdrop-filter: blur(12px);
                    transition: background 0.3s ease;
                }

                .guideline-card:hover {
                    background: rgba(28, 25, 23, 0.6);
                }

                .guideline-card h3 {
                    margin: 0 0 1.5rem;
                    padding-left: 1rem;
                    border-left: 4px solid #10b981;
                    font-size: 1.5rem;
                    color: #f5f5f4;
                }

                .guideline-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .guideline-card li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #d6d3d1;
                }

                .guideline-chevron {
                    flex-shrink: 0;
                    color: #34d399;
                    font-weight: 700;
                }

                .chapter-banner {
                    position: relative;
                    overflow: hidden;
                    margin-top: 4rem;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(6, 95, 70, 0.5);
                    background: linear-gradient(to right, #065f46, #134e4a);
                    text-align: center;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .chapter-banner-mark {
                    position: absolute;
                    top: 0;
                    right: 0;
                    padding: 3rem;
                    font-size: 12rem;
                    line-height: 1;
                    opacity: 0.1;
                    transform: rotate(12deg);
                    pointer-events: none;
                }

                .chapter-banner h3 {
                    position: relative;
                    font-family: var(--font-serif);
                    font-size: 1.875rem;
                    margin: 0 0 1rem;
                    color: #ffffff;
                }

                .chapter-banner p {
                    position: relative;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-weight: 300;
                    color: #d1fae5;
                }

                @media (max-width: 1024px) {
                    .hero-row {
                        flex-direction: column;
                        text-align: center;
                    }

                    .hero-actions {
                        justify-content: center;
                    }

                    .grid--3 { grid-template-columns: repeat(2, 1fr); }

                    .features-row { grid-template-columns: 1fr; }
                    .features-image { order: -1; }
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 8rem 0 5rem;
                    }

                    .hero h1 { font-size: 3rem; }
                    .section-heading h2 { font-size: 1.875rem; }

                    .hero-actions,
                    .mock-app-body {
                        flex-direction: column;
                    }

                    .grid--2,
                    .grid--3 {
                        grid-template-columns: 1fr;
                    }

                    .chapter-banner { padding: 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
