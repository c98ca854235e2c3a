use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Light text for sections drawn over a dark image.
    #[prop_or_default]
    pub dark_bg: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class={classes!("section-heading", props.dark_bg.then_some("on-dark"))}>
            <h2>{&props.title}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p>{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
