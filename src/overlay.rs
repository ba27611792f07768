use web_sys as web;

/// Swap the question view for the result view. The result section animates
/// in via its CSS `active` class.
pub fn show_result(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("question-section") {
        _ = el.set_attribute("style", "display:none");
    }
    if let Some(el) = document.get_element_by_id("result-section") {
        _ = el.class_list().add_1("active");
    }
}
