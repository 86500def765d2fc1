pub mod custom_framework_modal;
pub mod empty_state;
pub mod framework_cards;
pub mod header_dropdown;
