mod de;

pub mod bill;
pub mod line_item;

pub use bill::Bill;
pub use line_item::LineItem;
