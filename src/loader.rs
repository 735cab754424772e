use crate::app::SharedApp;
use gallery_core::{decode_image, LoadOutcome, OneShot, PaintingRecord, PAINTINGS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_one(app: &SharedApp, record: &'static PaintingRecord, slot: usize) -> anyhow::Result<()> {
    let bytes = fetch_bytes(&record.image_url()).await?;
    let image = decode_image(record.filename, &bytes)?;
    if !app
        .borrow_mut()
        .add_painting(*record, slot, PAINTINGS.len(), &image)
    {
        anyhow::bail!("renderer not available");
    }
    Ok(())
}

/// Fetch every catalog image concurrently. `settled` fires with the number of
/// realised paintings once every load has succeeded or failed.
pub fn load_catalog(app: SharedApp, settled: OneShot<usize>) {
    if app.borrow().loads.is_settled() {
        settled.fire(0);
        return;
    }
    for (slot, record) in PAINTINGS.iter().enumerate() {
        let app = app.clone();
        let settled = settled.clone();
        spawn_local(async move {
            let outcome = match load_one(&app, record, slot).await {
                Ok(()) => LoadOutcome::Loaded,
                Err(e) => {
                    log::error!("[loader] {} not loaded: {:#}", record.filename, e);
                    LoadOutcome::Failed
                }
            };
            let done = app.borrow_mut().loads.record(outcome);
            if done {
                let loaded = app.borrow().gallery.len();
                settled.fire(loaded);
            }
        });
    }
}
