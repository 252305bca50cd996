use super::view_controls::ViewControls;
use crate::config::ViewportConfig;
use crate::controller::{ViewportBinding, ViewportController};
use crate::util::cerror;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewportConfig,
    /// Render the zoom toolbar; false when mounted into a hidden host.
    #[prop_or(true)]
    pub show_toolbar: bool,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let binding = use_mut_ref(|| None::<ViewportBinding>);

    // Bind to the server-rendered bracket once; unbind on unmount
    {
        let binding = binding.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    match ViewportBinding::attach(&window, &document, config) {
                        Ok(b) => *binding.borrow_mut() = b,
                        Err(err) => cerror("viewport: attach failed", &err),
                    }
                }
            }
            move || {
                binding.borrow_mut().take();
            }
        });
    }

    // No-ops while nothing is bound
    let op = |f: fn(&ViewportController)| {
        let binding = binding.clone();
        Callback::from(move |()| {
            let controller = binding.borrow().as_ref().map(ViewportBinding::controller);
            if let Some(c) = controller {
                f(&c);
            }
        })
    };

    if !props.show_toolbar {
        return html! {};
    }
    html! {
        <ViewControls
            on_zoom_in={op(ViewportController::zoom_in)}
            on_zoom_out={op(ViewportController::zoom_out)}
            on_reset={op(ViewportController::reset_view)}
        />
    }
}
