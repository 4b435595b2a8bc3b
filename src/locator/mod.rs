pub mod css;
pub mod locator_model;
pub mod xpath;
