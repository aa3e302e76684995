use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ResizeObserver};
use yew::prelude::*;

use crate::animation::{run_frames, CancelToken};
use crate::particles::{self, ParticleField, PARTICLE_COUNT};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()), read(window.inner_height()))
}

/// Sizes the backing store to the viewport and returns the resulting bounds.
fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (canvas.width() as f64, canvas.height() as f64)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    for particle in &field.particles {
        ctx.set_fill_style_str(&particle.color);
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.radius, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

/// Everything the running animation holds on to; dropped on unmount.
struct ParticleLoop {
    token: CancelToken,
    observer: Option<ResizeObserver>,
    _on_resize: Closure<dyn FnMut()>,
}

impl ParticleLoop {
    fn start(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        let (width, height) = fit_to_viewport(&canvas);
        let mut rng = Pcg32::seed_from_u64(web_sys::js_sys::Date::now() as u64);
        let field = Rc::new(RefCell::new(ParticleField::spawn(
            &mut rng,
            PARTICLE_COUNT,
            width,
            height,
        )));

        let on_resize = {
            let canvas = canvas.clone();
            let field = field.clone();
            Closure::<dyn FnMut()>::new(move || {
                let (width, height) = fit_to_viewport(&canvas);
                field.borrow_mut().resize(width, height);
            })
        };
        let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&canvas);
                Some(observer)
            }
            Err(err) => {
                log::warn!("ResizeObserver unavailable, canvas keeps its size: {:?}", err);
                None
            }
        };

        let token = CancelToken::new();
        spawn_local(run_frames(token.clone(), move |_| {
            let mut field = field.borrow_mut();
            particles::step(&mut field);
            if let Err(err) = draw(&ctx, &field) {
                log::debug!("particle draw failed: {:?}", err);
            }
        }));

        Self {
            token,
            observer,
            _on_resize: on_resize,
        }
    }

    fn stop(self) {
        self.token.cancel();
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let running = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| {
                        let ctx = context_2d(&canvas);
                        if ctx.is_none() {
                            log::debug!("No 2d context, particle background disabled");
                        }
                        Some(ParticleLoop::start(canvas, ctx?))
                    });
                move || {
                    if let Some(running) = running {
                        running.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true"></canvas>
            <style>
                {r#"
                    .particle-canvas {
                        position: fixed;
                        inset: 0;
                        width: 100vw;
                        height: 100vh;
                        pointer-events: none;
                        z-index: 0;
                    }
                "#}
            </style>
        </>
    }
}
