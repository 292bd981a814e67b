use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::{listen, query_all};

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Transform for a pointer at (`x`, `y`) inside a card of `width` x `height`.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / 10.0;
    let rotate_y = (width / 2.0 - x) / 10.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02, 1.02, 1.02)",
        rotate_x, rotate_y
    )
}

pub fn attach_all(document: &Document) {
    for card in query_all(document, ".tilt-card") {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };

        let moving = card.clone();
        listen(&card, "mousemove", move |e: MouseEvent| {
            let rect = moving.get_bounding_client_rect();
            let transform = tilt_transform(
                f64::from(e.client_x()) - rect.left(),
                f64::from(e.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            let _ = moving.style().set_property("transform", &transform);
        });

        let leaving = card.clone();
        listen(&card, "mouseleave", move |_: MouseEvent| {
            let _ = leaving.style().set_property("transform", TILT_RESET);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn top_left_corner_tilts_towards_pointer() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
        );
    }
}
