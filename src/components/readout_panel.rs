use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReadoutPanelProps {
    pub angle_deg: f64,
    pub scale: f64,
    pub on_reset: Callback<()>,
}

#[function_component(ReadoutPanel)]
pub fn readout_panel(props: &ReadoutPanelProps) -> Html {
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:140px; display:flex; flex-direction:column; gap:6px;">
            <div>{ format!("Angle: {:.1}°", props.angle_deg) }</div>
            <div>{ format!("Scale: {:.2}x", props.scale) }</div>
            <button onclick={reset}>{"Reset view"}</button>
        </div>
    }
}
