pub mod diagnostics;
pub mod fallback;
pub mod product;
