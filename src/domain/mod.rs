pub mod brand;
pub mod category;
pub mod discount;
pub mod product;
