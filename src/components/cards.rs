use yew::prelude::*;

use crate::content::{AggressionType, AppFeature, GuidelineCategory, InfoCard};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub card: &'static InfoCard,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let card = props.card;
    html! {
        <div class="feature-card">
            <div class="feature-card-icon">{card.glyph}</div>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AggressionCardProps {
    pub item: &'static AggressionType,
}

#[function_component(AggressionCard)]
pub fn aggression_card(props: &AggressionCardProps) -> Html {
    let item = props.item;
    html! {
        <div class="aggression-card">
            <div class={classes!("icon-badge", item.tone.class())}>{item.glyph}</div>
            <h3>{item.title}</h3>
            <p class="aggression-desc">{item.description}</p>
            <div class="aggression-solution">
                <p class="solution-label">{"How to handle"}</p>
                <p>{item.solution}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppFeatureRowProps {
    pub feature: &'static AppFeature,
}

#[function_component(AppFeatureRow)]
pub fn app_feature_row(props: &AppFeatureRowProps) -> Html {
    let feature = props.feature;
    html! {
        <div class="app-feature">
            <div class={classes!("app-feature-icon", feature.tone.class())}>{feature.glyph}</div>
            <div>
                <h4>{feature.title}</h4>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GuidelineCardProps {
    pub section: &'static GuidelineCategory,
}

#[function_component(GuidelineCard)]
pub fn guideline_card(props: &GuidelineCardProps) -> Html {
    let section = props.section;
    html! {
        <div class="guideline-card">
            <h3>{section.category}</h3>
            <ul>
                { for section.points.iter().map(|point| html! {
                    <li key={*point}>
                        <span class="guideline-chevron">{"›"}</span>
                        <span>{*point}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalCardProps {
    pub facts: &'static [&'static str],
}

/// Floating quick-check card laid over the features image.
#[function_component(LegalCard)]
pub fn legal_card(props: &LegalCardProps) -> Html {
    html! {
        <div class="legal-card">
            <div class="legal-card-header">
                <span class="legal-card-icon">{"📖"}</span>
                <span>{"Legal Quick-Check"}</span>
            </div>
            <ul>
                { for props.facts.iter().map(|fact| html! {
                    <li key={*fact}>
                        <span class="legal-check">{"✓"}</span>
                        {*fact}
                    </li>
                }) }
            </ul>
        </div>
    }
}
