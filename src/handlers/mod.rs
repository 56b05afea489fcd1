pub mod form;
pub mod helpers;
pub mod proxy;
