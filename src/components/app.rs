use super::pinch_view::PinchView;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let rotatable = use_state(|| true);
    let toggle_rotation = {
        let rotatable = rotatable.clone();
        Callback::from(move |_| rotatable.set(!*rotatable))
    };
    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <PinchView rotatable={*rotatable} />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
                <button onclick={toggle_rotation}>
                    { if *rotatable { "Rotation: on" } else { "Rotation: off" } }
                </button>
            </div>
        </div>
    }
}
