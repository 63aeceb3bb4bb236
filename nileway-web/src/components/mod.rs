pub mod contact_form;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod lang_switch;
pub mod mobile_menu;
pub mod scroll_top;
pub mod sections;
pub mod testimonial_form;
pub mod toast;
pub mod whatsapp_fab;
