pub mod headless;
pub mod sort;
