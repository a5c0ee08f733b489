pub mod layout;
pub mod record_form;
pub mod trends;
