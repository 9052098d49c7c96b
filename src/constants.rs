// DOM element ids and class names the front-end binds to.
//
// Keep in sync with `www/index.html`.
// Screens
pub const MENU_SCREEN_ID: &str = "menu-screen";
pub const AR_SCREEN_ID: &str = "ar-screen";
pub const ADMIN_SCREEN_ID: &str = "admin-screen";
pub const ACTIVE_CLASS: &str = "active";

// Menu
pub const DISHES_CONTAINER_ID: &str = "dishes-container";
pub const ADMIN_BUTTON_ID: &str = "admin-btn";

// Viewer
pub const DISH_NAME_ID: &str = "dish-name";
pub const DISH_MEASURES_ID: &str = "dish-measures";
pub const AR_CONTAINER_ID: &str = "ar-container";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const BACK_BUTTON_ID: &str = "back-btn";
pub const START_AR_BUTTON_ID: &str = "start-ar-btn";
pub const RESET_BUTTON_ID: &str = "reset-position-btn";

// Admin
pub const CLOSE_ADMIN_BUTTON_ID: &str = "close-admin-btn";
pub const DISH_FORM_ID: &str = "dish-form";
pub const FORM_NAME_ID: &str = "dish-name-input";
pub const FORM_DESCRIPTION_ID: &str = "dish-description";
pub const FORM_DIAMETER_ID: &str = "dish-diameter";
pub const FORM_HEIGHT_ID: &str = "dish-height";
pub const FORM_PRICE_ID: &str = "dish-price";
pub const FORM_MODEL_ID: &str = "dish-model";
pub const FORM_IMAGE_ID: &str = "dish-image";
pub const ADMIN_LIST_ID: &str = "admin-dishes-list";

// Generated markup
pub const DISH_CARD_CLASS: &str = "dish-card";
pub const DISH_IMAGE_CLASS: &str = "dish-image";
pub const DISH_CARD_NAME_CLASS: &str = "dish-name";
pub const DISH_CARD_PRICE_CLASS: &str = "dish-price";
pub const ADMIN_ITEM_CLASS: &str = "admin-dish-item";
pub const DISH_ID_ATTR: &str = "data-dish-id";
pub const DELETE_ID_ATTR: &str = "data-delete-id";
pub const PLACEHOLDER_GLYPH: &str = "🍽️";

// Labels
pub const AR_UNAVAILABLE_LABEL: &str = "AR Não Disponível";
pub const DISH_ADDED_MESSAGE: &str = "Prato adicionado com sucesso!";
pub const DELETE_CONFIRM_MESSAGE: &str = "Tem certeza que deseja excluir este prato?";
pub const STARTUP_FAILED_MESSAGE: &str = "Não foi possível iniciar o cardápio. Recarregue a página.";
