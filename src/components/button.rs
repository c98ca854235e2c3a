use yew::prelude::*;

// Rendered with every button so pages without their own stylesheet still get it
const BUTTON_CSS: &str = r#"
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        font-weight: 500;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }

    .btn:hover { transform: scale(1.05); }
    .btn:active { transform: scale(0.95); }

    .btn-primary {
        background: linear-gradient(to right, #047857, #0f766e);
        color: #ffffff;
        border: 1px solid transparent;
        box-shadow: 0 10px 15px rgba(16, 185, 129, 0.2);
    }

    .btn-secondary {
        background: var(--surface);
        color: var(--text-dim);
        border: 1px solid var(--border-strong);
    }

    .btn-secondary:hover {
        background: var(--surface-hover);
        color: var(--text);
    }

    .btn-light {
        background: #ffffff;
        color: #064e3b;
        border: none;
        font-weight: 700;
    }

    .full-width { width: 100%; }
"#;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn variant_class(primary: bool) -> &'static str {
    if primary { "btn-primary" } else { "btn-secondary" }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <>
            <button class={classes!("btn", variant_class(props.primary), props.class.clone())}>
                { for props.children.iter() }
            </button>
            <style>{BUTTON_CSS}</style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_rule(class: &str) -> bool {
        BUTTON_CSS.contains(&format!(".{} {{", class))
    }

    #[test]
    fn variants_map_to_their_classes() {
        assert_eq!(variant_class(true), "btn-primary");
        assert_eq!(variant_class(false), "btn-secondary");
    }

    #[test]
    fn stylesheet_covers_every_class_buttons_use() {
        for class in ["btn", "btn-primary", "btn-secondary", "btn-light", "full-width"] {
            assert!(has_rule(class), "missing rule for .{}", class);
        }
    }

    #[test]
    fn light_variant_overrides_secondary() {
        let secondary = BUTTON_CSS.find(".btn-secondary {").unwrap();
        let light = BUTTON_CSS.find(".btn-light {").unwrap();
        assert!(light > secondary);
    }
}
