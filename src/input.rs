use glam::Vec2;
use web_sys as web;

/// Map a client-space point into surface pixels given the element's client
/// rect and backing size. Returns `None` for a collapsed rect.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    surface_size: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let local = client - rect_origin;
    let mapped = local / rect_size * surface_size;
    mapped.is_finite().then_some(mapped)
}

#[inline]
pub fn pointer_surface_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_surface(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
