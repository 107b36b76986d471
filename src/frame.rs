use crate::assets::DecodedMesh;
use crate::overlay::DomHost;
use crate::render;
use instant::Instant;
use room_core::loading::AssetKind;
use room_core::InteractionController;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded bundles waiting for the next frame to attach and upload them.
pub type PendingAssets = Rc<RefCell<Vec<(AssetKind, anyhow::Result<Vec<DecodedMesh>>)>>>;

/// Process clock shared by the frame tick and the input listeners.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<InteractionController>>,
    pub host: Rc<RefCell<DomHost>>,
    pub pending: PendingAssets,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: Clock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let controller_rc = self.controller.clone();
        let host_rc = self.host.clone();
        let mut controller = controller_rc.borrow_mut();
        let mut host = host_rc.borrow_mut();

        self.attach_pending(&mut controller, &mut host, now);

        for action in host.take_actions() {
            controller.apply(&mut *host, action, now);
        }
        let out = controller.tick(&mut *host, now);
        if let Some(panel) = out.opened {
            log::debug!("[frame] opened {}", panel.name());
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(controller.scene(), controller.camera()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn attach_pending(&mut self, controller: &mut InteractionController, host: &mut DomHost, now: Duration) {
        let ready: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (kind, result) in ready {
            let meshes = match result {
                Ok(m) => m,
                Err(e) => {
                    controller.asset_failed(host, kind, &format!("{:#}", e));
                    continue;
                }
            };
            let descs: Vec<_> = meshes.iter().map(|m| m.desc.clone()).collect();
            match controller.attach_asset(kind, &descs, now) {
                Ok(bundle) => {
                    if let Some(g) = &mut self.gpu {
                        for (node, mesh) in bundle.meshes.iter().zip(&meshes) {
                            g.upload(*node, mesh);
                        }
                    }
                }
                Err(e) => controller.asset_failed(host, kind, &e.to_string()),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
