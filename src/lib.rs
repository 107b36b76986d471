#![cfg(target_arch = "wasm32")]
use frame::{Clock, FrameContext, PendingAssets};
use overlay::{ActionQueue, DomHost};
use room_core::loading::AssetKind;
use room_core::{InteractionController, SceneConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod panels;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let clock = Clock::new();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(constants::SCENE_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SCENE_CONTAINER_ID))?;

    let canvas = dom::create_canvas(&document, &container, constants::CANVAS_ID)?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let controller = Rc::new(RefCell::new(InteractionController::new(SceneConfig::default())));
    controller.borrow_mut().resize(width as f32, height as f32);
    let actions: ActionQueue = Rc::new(RefCell::new(Vec::new()));
    let host = Rc::new(RefCell::new(DomHost::new(document.clone(), actions)));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
        host: host.clone(),
        clock,
    });

    let pending: PendingAssets = Rc::new(RefCell::new(Vec::new()));
    spawn_asset_loads(pending.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controller,
        host,
        pending,
        canvas,
        gpu,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// The room loads first; the furniture bundles start once it is in and land
/// independently.
fn spawn_asset_loads(pending: PendingAssets) {
    spawn_local(async move {
        let room = assets::load_bundle(AssetKind::Room).await;
        pending.borrow_mut().push((AssetKind::Room, room));
        for kind in AssetKind::ALL.into_iter().filter(|k| *k != AssetKind::Room) {
            let pending = pending.clone();
            spawn_local(async move {
                let result = assets::load_bundle(kind).await;
                pending.borrow_mut().push((kind, result));
            });
        }
    });
}
