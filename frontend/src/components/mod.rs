pub mod registration_form;
