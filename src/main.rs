mod components;
mod error;
mod events;
mod gesture;
mod state;
mod surface;
mod transform;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
