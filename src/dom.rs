use crate::toggle::StyleTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

impl StyleTarget for web::Document {
    fn set_style_property(&self, element_id: &str, property: &str, value: &str) -> bool {
        let Some(el) = self.get_element_by_id(element_id) else {
            return false;
        };
        let style = if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            html.style()
        } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
            svg.style()
        } else {
            return false;
        };
        _ = style.set_property(property, value);
        true
    }
}
