//! DOM rendering of the core view models. Output only.

use crate::constants::*;
use armenu_core::view::{AdminEntry, DishDetail, MenuCard, Thumbnail};
use web_sys as web;

fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

pub fn render_menu(document: &web::Document, cards: &[MenuCard]) -> anyhow::Result<()> {
    let container = crate::dom::element_by_id::<web::Element>(document, DISHES_CONTAINER_ID)?;
    crate::dom::clear_children(&container);
    for card in cards {
        let card_el = create(document, "div", DISH_CARD_CLASS)?;
        _ = card_el.set_attribute(DISH_ID_ATTR, &card.id);

        let image = create(document, "div", DISH_IMAGE_CLASS)?;
        match &card.thumbnail {
            Thumbnail::Image(src) => {
                let img = create(document, "img", DISH_IMAGE_CLASS)?;
                _ = img.set_attribute("src", src);
                _ = img.set_attribute("alt", &card.name);
                append(&image, &img)?;
            }
            Thumbnail::Placeholder => {
                _ = image.set_attribute("data-placeholder", "1");
                image.set_text_content(Some(PLACEHOLDER_GLYPH));
            }
        }

        let name = create(document, "div", DISH_CARD_NAME_CLASS)?;
        name.set_text_content(Some(&card.name));
        let price = create(document, "div", DISH_CARD_PRICE_CLASS)?;
        price.set_text_content(Some(&card.price_label));

        append(&card_el, &image)?;
        append(&card_el, &name)?;
        append(&card_el, &price)?;
        append(&container, &card_el)?;
    }
    Ok(())
}

pub fn render_admin_list(document: &web::Document, entries: &[AdminEntry]) -> anyhow::Result<()> {
    let container = crate::dom::element_by_id::<web::Element>(document, ADMIN_LIST_ID)?;
    crate::dom::clear_children(&container);
    for entry in entries {
        let item = create(document, "div", ADMIN_ITEM_CLASS)?;

        let info = create(document, "div", "")?;
        let strong = create(document, "strong", "")?;
        strong.set_text_content(Some(&entry.name));
        let small = create(document, "small", "")?;
        small.set_text_content(Some(&entry.summary));
        append(&info, &strong)?;
        append(&info, &create(document, "br", "")?)?;
        append(&info, &small)?;

        let delete = create(document, "button", "")?;
        delete.set_text_content(Some("Excluir"));
        _ = delete.set_attribute("type", "button");
        _ = delete.set_attribute(DELETE_ID_ATTR, &entry.id);

        append(&item, &info)?;
        append(&item, &delete)?;
        append(&container, &item)?;
    }
    Ok(())
}

pub fn render_detail(document: &web::Document, detail: &DishDetail) -> anyhow::Result<()> {
    crate::dom::set_text(document, DISH_NAME_ID, &detail.name);
    let measures = crate::dom::element_by_id::<web::Element>(document, DISH_MEASURES_ID)?;
    crate::dom::clear_children(&measures);
    for (label, value) in &detail.facts {
        let p = create(document, "p", "")?;
        let strong = create(document, "strong", "")?;
        strong.set_text_content(Some(&format!("{label}:")));
        append(&p, &strong)?;
        let text = document.create_text_node(&format!(" {value}"));
        p.append_child(&text)
            .map_err(|e| anyhow::anyhow!("append: {:?}", e))?;
        append(&measures, &p)?;
    }
    Ok(())
}

#[inline]
pub fn show_loading(document: &web::Document, show: bool) {
    crate::dom::set_class(document, LOADING_OVERLAY_ID, ACTIVE_CLASS, show);
}

/// Relabel and visually disable the start-AR control.
pub fn mark_ar_unavailable(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_AR_BUTTON_ID) {
        el.set_text_content(Some(AR_UNAVAILABLE_LABEL));
        _ = el.set_attribute("aria-disabled", "true");
        _ = el.class_list().add_1("disabled");
    }
}

/// Viewer controls are hidden while an AR session runs.
pub fn set_viewer_controls_visible(document: &web::Document, visible: bool) {
    crate::dom::set_displayed(document, START_AR_BUTTON_ID, visible);
    crate::dom::set_displayed(document, RESET_BUTTON_ID, visible);
}
