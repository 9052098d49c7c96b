use serde::{Deserialize, Serialize};

/// One menu entry. Dimensions are in centimetres.
///
/// The serialized field names follow the layout already present in browsers'
/// local storage (`modelPath`, `image`), so existing menus keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub diameter: f64,
    pub height: f64,
    pub price: f64,
    #[serde(rename = "modelPath")]
    pub model_reference: String,
    #[serde(rename = "image", default)]
    pub image_reference: Option<String>,
}

impl DishRecord {
    /// The dish shown on a fresh install.
    pub fn default_dish() -> Self {
        Self {
            id: "1".to_string(),
            name: "Pizza Margherita".to_string(),
            description: Some("Pizza tradicional italiana".to_string()),
            diameter: 30.0,
            height: 2.0,
            price: 45.0,
            model_reference: "pizza.glb".to_string(),
            image_reference: None,
        }
    }

    /// Description, if present and not blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// Pick an id for a new record: the creation timestamp in milliseconds,
/// bumped until it does not clash with an existing record.
pub fn generate_id(now_ms: u64, existing: &[DishRecord]) -> String {
    let mut candidate = now_ms;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|d| d.id == id) {
            return id;
        }
        candidate = candidate.wrapping_add(1);
    }
}
