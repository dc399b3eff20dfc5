use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{DomRect, EventTarget, SvgElement, Touch, TouchEvent, TouchList};
use yew::prelude::*;

use super::readout_panel::ReadoutPanel;
use crate::error::ViewError;
use crate::events::{EventSource, ListenerHandle};
use crate::gesture;
use crate::state::{GestureStart, TouchState};
use crate::surface::TransformSurface;
use crate::transform::{Matrix, Point};
use crate::util::{clog, cwarn};

#[derive(Properties, PartialEq, Clone)]
pub struct PinchViewProps {
    /// When enabled, a two-finger twist rotates the content as well as
    /// scaling and panning it.
    #[prop_or(true)]
    pub rotatable: bool,
}

#[function_component(PinchView)]
pub fn pinch_view(props: &PinchViewProps) -> Html {
    let svg_ref = use_node_ref();
    let current = use_mut_ref(Matrix::identity);
    let touch_state = use_mut_ref(TouchState::default);
    let surface_slot = use_mut_ref(|| None::<Rc<TransformSurface>>);
    let rotatable_flag = use_mut_ref(|| true);
    let readout = use_state(|| (0.0f64, 1.0f64));

    // Mirror the prop into a ref the event closures can read without being
    // rebuilt on every render.
    {
        let rotatable_flag = rotatable_flag.clone();
        let flag = props.rotatable;
        use_effect_with(flag, move |_| {
            *rotatable_flag.borrow_mut() = flag;
            || ()
        });
    }

    {
        let svg_ref = svg_ref.clone();
        let current = current.clone();
        let touch_state = touch_state.clone();
        let surface_slot = surface_slot.clone();
        let rotatable_flag = rotatable_flag.clone();
        let readout = readout.clone();
        use_effect_with((), move |_| {
            let mounted = match Mounted::attach(
                &svg_ref,
                current,
                touch_state,
                rotatable_flag,
                readout,
            ) {
                Ok(mounted) => {
                    *surface_slot.borrow_mut() = Some(mounted.surface.clone());
                    clog("gesture surface ready");
                    Some(mounted)
                }
                Err(err) => {
                    cwarn(&format!("gesture surface disabled: {err}"));
                    None
                }
            };
            move || {
                surface_slot.borrow_mut().take();
                if let Some(mounted) = mounted {
                    mounted.detach();
                }
            }
        });
    }

    let on_reset = {
        let current = current.clone();
        let touch_state = touch_state.clone();
        let surface_slot = surface_slot.clone();
        let readout = readout.clone();
        Callback::from(move |_| {
            let m = Matrix::identity();
            *current.borrow_mut() = m;
            touch_state.borrow_mut().reset();
            if let Some(surface) = surface_slot.borrow().as_ref() {
                surface.apply(&m);
            }
            readout.set((m.angle_deg(), m.scale()));
        })
    };

    let (angle_deg, scale) = *readout;
    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; touch-action:none; background:#0e1116;">
            <svg ref={svg_ref} style="display:block; width:100%; height:100%;">
                <rect x="120" y="120" width="160" height="160" rx="12" fill="#1f6feb" />
                <circle cx="420" cy="200" r="80" fill="#2ea043" />
                <path d="M 520 360 l 120 0 l -60 -104 z" fill="#f0883e" />
                <text x="140" y="360" fill="#c9d1d9" style="font-size:28px;">{"pinch, spread, twist"}</text>
            </svg>
            <ReadoutPanel angle_deg={angle_deg} scale={scale} on_reset={on_reset} />
        </div>
    }
}

/// Everything acquired at mount: the wrapper group plus the touch listeners.
/// The per-sequence move listener lives in `move_slot` so the end handler can
/// release it the moment the last finger lifts.
struct Mounted {
    surface: Rc<TransformSurface>,
    move_slot: Rc<RefCell<Option<ListenerHandle>>>,
    _start: ListenerHandle,
    _end: ListenerHandle,
    _cancel: ListenerHandle,
}

impl Mounted {
    fn attach(
        svg_ref: &NodeRef,
        current: Rc<RefCell<Matrix>>,
        touch_state: Rc<RefCell<TouchState>>,
        rotatable: Rc<RefCell<bool>>,
        readout: UseStateHandle<(f64, f64)>,
    ) -> Result<Self, ViewError> {
        let svg = svg_ref
            .cast::<SvgElement>()
            .ok_or(ViewError::MissingSurface)?;
        let surface = Rc::new(TransformSurface::wrap(&svg)?);
        let target: &EventTarget = svg.as_ref();
        let source = EventSource::new(target);
        let move_slot: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));

        // Built fresh for every touch sequence; dropping the handle removes
        // the listener again.
        let make_move_listener: Rc<dyn Fn() -> ListenerHandle> = {
            let source = source.clone();
            let svg = svg.clone();
            let current = current.clone();
            let touch_state = touch_state.clone();
            let surface = surface.clone();
            let rotatable = rotatable.clone();
            let readout = readout.clone();
            Rc::new(move || {
                let svg = svg.clone();
                let current = current.clone();
                let touch_state = touch_state.clone();
                let surface = surface.clone();
                let rotatable = rotatable.clone();
                let readout = readout.clone();
                source.listen("touchmove", move |e: TouchEvent| {
                    let start = touch_state.borrow().gesture().cloned();
                    if let Some(start) = start {
                        let touches = e.touches();
                        if let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) {
                            let rect = svg.get_bounding_client_rect();
                            let new_one = touch_point(&t0, &rect);
                            let new_two = touch_point(&t1, &rect);
                            let delta = if *rotatable.borrow() {
                                gesture::rotate_scale_transform(
                                    start.one, start.two, new_one, new_two,
                                )
                            } else {
                                gesture::scale_transform(start.one, start.two, new_one, new_two)
                            };
                            let next = gesture::compose(&start.base, &delta);
                            // non-finite math must never reach the DOM
                            if next.is_finite() {
                                *current.borrow_mut() = next;
                                surface.apply(&next);
                                readout.set((next.angle_deg(), next.scale()));
                            }
                        }
                    }
                    e.prevent_default();
                })
            })
        };

        let start_listener = {
            let svg = svg.clone();
            let current = current.clone();
            let touch_state = touch_state.clone();
            let move_slot = move_slot.clone();
            let make_move_listener = make_move_listener.clone();
            source.listen("touchstart", move |e: TouchEvent| {
                let touches = e.touches();
                if touches.length() >= 2 {
                    capture_pair(&svg, &touches, &current, &touch_state);
                } else {
                    touch_state.borrow_mut().begin_single();
                }
                // the move listener lives for exactly one touch sequence
                let mut slot = move_slot.borrow_mut();
                if slot.is_none() {
                    *slot = Some(make_move_listener());
                }
                e.prevent_default();
            })
        };

        let end_handler = {
            let svg = svg.clone();
            let current = current.clone();
            let touch_state = touch_state.clone();
            let move_slot = move_slot.clone();
            move |e: TouchEvent| {
                let touches = e.touches();
                match touches.length() {
                    0 => {
                        touch_state.borrow_mut().reset();
                        move_slot.borrow_mut().take();
                    }
                    1 => touch_state.borrow_mut().begin_single(),
                    // a finger beyond the tracked pair lifted; re-anchor on
                    // the remaining pair
                    _ => capture_pair(&svg, &touches, &current, &touch_state),
                }
                e.prevent_default();
            }
        };
        let end_listener = source.listen("touchend", end_handler.clone());
        let cancel_listener = source.listen("touchcancel", end_handler);

        Ok(Self {
            surface,
            move_slot,
            _start: start_listener,
            _end: end_listener,
            _cancel: cancel_listener,
        })
    }

    fn detach(self) {
        self.move_slot.borrow_mut().take();
        self.surface.release();
    }
}

/// Reads the first two contact points and captures a gesture snapshot with
/// the current transform as its base. Touches beyond the pair are ignored.
fn capture_pair(
    svg: &SvgElement,
    touches: &TouchList,
    current: &Rc<RefCell<Matrix>>,
    touch_state: &Rc<RefCell<TouchState>>,
) {
    let (Some(t0), Some(t1)) = (touches.item(0), touches.item(1)) else {
        return;
    };
    let rect = svg.get_bounding_client_rect();
    let one = touch_point(&t0, &rect);
    let two = touch_point(&t1, &rect);
    let mut state = touch_state.borrow_mut();
    match GestureStart::capture(one, two, *current.borrow()) {
        Ok(start) => state.begin_pinch(start),
        // coincident fingers: keep suppressing scroll, do not transform
        Err(_) => state.begin_single(),
    }
}

fn touch_point(touch: &Touch, rect: &DomRect) -> Point {
    Point::new(
        touch.client_x() as f64 - rect.left(),
        touch.client_y() as f64 - rect.top(),
    )
}
