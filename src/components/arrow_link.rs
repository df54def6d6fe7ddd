use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ArrowLinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ArrowLink)]
pub fn arrow_link(props: &ArrowLinkProps) -> Html {
    html! {
        <>
            <style>
                {r#"
                .arrow-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    color: inherit;
                    text-decoration: none;
                    font-weight: 500;
                    letter-spacing: 0.02em;
                }
                .arrow-link .icon {
                    transition: transform 0.3s ease;
                }
                .arrow-link:hover .icon {
                    transform: translateX(6px);
                }
                "#}
            </style>
            <Link<Route> to={props.to.clone()} classes={classes!("arrow-link", props.class.clone())}>
                <span>{ props.children.clone() }</span>
                <Icon name="arrow-right" size={18} />
            </Link<Route>>
        </>
    }
}
