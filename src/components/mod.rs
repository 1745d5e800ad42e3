pub mod action_buttons;
pub mod app;
pub mod home_view;
pub mod image_gallery;
pub mod messages_view;
pub mod navbar;
pub mod profile_card;
pub mod profile_info;
pub mod profile_view;
pub mod project_view;
pub mod router;
pub mod status_label;
