pub mod defaults;
pub mod field;
pub mod news;
pub mod product;
pub mod site;
