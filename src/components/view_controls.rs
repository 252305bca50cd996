use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ViewControls)]
pub fn view_controls(props: &ViewControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rv = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="bracket-view-controls" style="display:flex; gap:6px; align-items:center;">
        <button type="button" title="Zoom out" onclick={zo}> {"-"} </button>
        <button type="button" title="Zoom in" onclick={zi}> {"+"} </button>
        <span style="width:8px;"></span>
        <button type="button" title="Fit bracket to window" onclick={rv}> {"Reset"} </button>
    </div>}
}
